use crate::core::errors::ContactBookError;
use crate::core::models::{
    activity::{ActivityAction, ActivityLog},
    user::{User, UserInput},
};
use crate::core::validation::validate_user;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

pub struct UserService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> UserService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        UserService { storage, logging }
    }

    fn parse_id(user_id: &str) -> Result<Uuid, ContactBookError> {
        Uuid::parse_str(user_id.trim()).map_err(|_| ContactBookError::InvalidId(user_id.to_string()))
    }

    fn check_input(input: &UserInput) -> Result<(), ContactBookError> {
        let errors = validate_user(input);
        if errors.is_empty() {
            return Ok(());
        }
        warn!(fields = ?errors.keys().collect::<Vec<_>>(), "rejected user input");
        Err(ContactBookError::InvalidInput(errors))
    }

    /// Activity entries are best-effort: the mutation has already happened,
    /// so a logging failure is reported but never fails the request.
    async fn record_activity(&self, action: ActivityAction, user_id: Uuid, details: serde_json::Value) {
        if let Err(e) = self.logging.log_action(action, &user_id.to_string(), details).await {
            warn!(%user_id, action = action.as_str(), error = %e, "failed to record activity");
        }
    }

    pub async fn create_user(&self, input: UserInput) -> Result<User, ContactBookError> {
        Self::check_input(&input)?;
        let user = self.storage.insert_user(User::from_input(Uuid::new_v4(), input)).await?;
        self.record_activity(
            ActivityAction::UserCreated,
            user.id,
            json!({ "name": user.name, "email": user.email }),
        )
        .await;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ContactBookError> {
        self.storage.list_users().await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ContactBookError> {
        let id = Self::parse_id(user_id)?;
        self.storage
            .get_user(id)
            .await?
            .ok_or_else(|| ContactBookError::UserNotFound(id.to_string()))
    }

    /// Replaces all four fields. The identifier never changes.
    pub async fn update_user(&self, user_id: &str, input: UserInput) -> Result<User, ContactBookError> {
        let id = Self::parse_id(user_id)?;
        Self::check_input(&input)?;
        let previous = self
            .storage
            .get_user(id)
            .await?
            .ok_or_else(|| ContactBookError::UserNotFound(id.to_string()))?;
        let updated = self
            .storage
            .replace_user(User::from_input(id, input))
            .await?
            .ok_or_else(|| ContactBookError::UserNotFound(id.to_string()))?;
        self.record_activity(
            ActivityAction::UserUpdated,
            id,
            json!({ "before": previous, "after": updated }),
        )
        .await;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ContactBookError> {
        let id = Self::parse_id(user_id)?;
        if !self.storage.delete_user(id).await? {
            return Err(ContactBookError::UserNotFound(id.to_string()));
        }
        self.record_activity(ActivityAction::UserDeleted, id, json!({})).await;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    pub async fn get_activity_logs(&self) -> Result<Vec<ActivityLog>, ContactBookError> {
        self.logging.get_logs().await
    }
}
