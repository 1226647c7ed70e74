use crate::core::errors::ContactBookError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, user: User) -> Result<User, ContactBookError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(ContactBookError::StorageError(format!("duplicate id {}", user.id)));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, ContactBookError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, ContactBookError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned())
    }

    async fn replace_user(&self, user: User) -> Result<Option<User>, ContactBookError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool, ContactBookError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&user_id).is_some())
    }
}
