mod user_tests;

use async_trait::async_trait;

use crate::core::errors::ContactBookError;
use crate::core::models::activity::{ActivityAction, ActivityLog};
use crate::core::models::user::UserInput;
use crate::core::services::UserService;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> UserService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    UserService::new(storage, logging)
}

pub fn valid_input() -> UserInput {
    UserInput {
        name: "Jane Doe".to_string(),
        email: "jane@gmail.com".to_string(),
        phone: "9876543210".to_string(),
        state: "Kerala".to_string(),
    }
}

/// Logging backend whose every write fails.
pub struct FailingLogging;

#[async_trait]
impl LoggingService for FailingLogging {
    async fn log_action(
        &self,
        _action: ActivityAction,
        _user_id: &str,
        _details: serde_json::Value,
    ) -> Result<(), ContactBookError> {
        Err(ContactBookError::LoggingError("activity store unavailable".to_string()))
    }

    async fn get_logs(&self) -> Result<Vec<ActivityLog>, ContactBookError> {
        Ok(Vec::new())
    }
}
