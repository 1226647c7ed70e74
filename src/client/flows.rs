//! The user actions behind each screen. Every flow issues at most one request
//! and reports its outcome as a [`Notice`]; nothing is retried.

use tracing::error;

use crate::client::api_client::ApiClient;
use crate::client::form::UserForm;
use crate::client::list::UserList;
use crate::core::models::user::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification shown after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

pub const INCOMPLETE_FORM: &str = "Please fill all fields";

pub async fn refresh_list(list: &mut UserList, client: &ApiClient) -> Option<Notice> {
    list.begin_loading();
    match client.list_users().await {
        Ok(users) => {
            list.loaded(users);
            None
        }
        Err(e) => {
            error!("Error while fetching data: {}", e);
            let message = e.notification("Failed to fetch users");
            list.failed(message.clone());
            Some(Notice::error(message))
        }
    }
}

/// Validates, posts, and clears the form on success.
pub async fn submit_add(form: &mut UserForm, client: &ApiClient) -> (Notice, Option<User>) {
    let input = match form.submission() {
        Ok(input) => input,
        Err(_) => return (Notice::error(INCOMPLETE_FORM), None),
    };
    form.set_submitting(true);
    let result = client.create_user(&input).await;
    form.set_submitting(false);
    match result {
        Ok(user) => {
            form.reset();
            (Notice::success("Form submitted successfully!"), Some(user))
        }
        Err(e) => {
            error!("Failed to add user: {}", e);
            if let Some(errors) = e.field_errors() {
                form.apply_server_errors(errors);
            }
            (Notice::error(e.notification("Failed to add user")), None)
        }
    }
}

/// Looks the record up on the server, so the server decides whether the id
/// is malformed or unknown.
pub async fn fetch_user(client: &ApiClient, user_id: &str) -> Result<User, Notice> {
    client.get_user(user_id).await.map_err(|e| {
        error!("Failed to fetch user {}: {}", user_id, e);
        Notice::error(e.notification("Failed to fetch user data"))
    })
}

/// Fetches the record into the form. On failure the form keeps its values.
pub async fn load_for_update(form: &mut UserForm, client: &ApiClient, user_id: &str) -> Result<User, Notice> {
    let user = fetch_user(client, user_id).await?;
    form.load(&user);
    Ok(user)
}

pub async fn submit_update(form: &mut UserForm, client: &ApiClient, user_id: &str) -> (Notice, Option<User>) {
    let input = match form.submission() {
        Ok(input) => input,
        Err(_) => return (Notice::error(INCOMPLETE_FORM), None),
    };
    form.set_submitting(true);
    let result = client.update_user(user_id, &input).await;
    form.set_submitting(false);
    match result {
        Ok(user) => (Notice::success("User updated successfully"), Some(user)),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            if let Some(errors) = e.field_errors() {
                form.apply_server_errors(errors);
            }
            (Notice::error(e.notification("Failed to update user")), None)
        }
    }
}

/// Asks `confirm` first; a declined confirmation sends nothing and returns `None`.
pub async fn delete_with_confirmation<F>(
    list: &mut UserList,
    client: &ApiClient,
    user: &User,
    confirm: F,
) -> Option<Notice>
where
    F: FnOnce(&User) -> bool,
{
    if !confirm(user) {
        return None;
    }
    match client.delete_user(&user.id.to_string()).await {
        Ok(message) => {
            list.remove(user.id);
            let message = if message.is_empty() {
                "User deleted successfully".to_string()
            } else {
                message
            };
            Some(Notice::success(message))
        }
        Err(e) => {
            error!("Failed to delete user {}: {}", user.id, e);
            Some(Notice::error(e.notification("Failed to delete user")))
        }
    }
}
