pub mod api_client;
pub mod flows;
pub mod form;
pub mod list;

pub use api_client::{ApiClient, ClientError};
pub use flows::{Notice, NoticeLevel};
pub use form::UserForm;
pub use list::{LoadStatus, SortDirection, SortSpec, UserList};
