use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, MessageResponse},
    core::models::user::{User, UserInput},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::update_user,
        super::handlers::delete_user
    ),
    components(schemas(UserInput, User, ErrorResponse, MessageResponse)),
    info(
        title = "Contact Book API",
        description = "API for creating, listing, updating and deleting contact records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
