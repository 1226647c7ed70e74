use crate::core::errors::ContactBookError;
use crate::core::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// Document-style persistence for the user collection.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<User, ContactBookError>;
    async fn list_users(&self) -> Result<Vec<User>, ContactBookError>;
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, ContactBookError>;
    /// Replaces the stored document, returning `None` when no record has this id.
    async fn replace_user(&self, user: User) -> Result<Option<User>, ContactBookError>;
    /// Returns whether a record was removed.
    async fn delete_user(&self, user_id: Uuid) -> Result<bool, ContactBookError>;
}

pub mod in_memory;
