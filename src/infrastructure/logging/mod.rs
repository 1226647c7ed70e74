pub mod in_memory;

use crate::core::errors::ContactBookError;
use crate::core::models::activity::{ActivityAction, ActivityLog};
use async_trait::async_trait;

#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: ActivityAction,
        user_id: &str,
        details: serde_json::Value,
    ) -> Result<(), ContactBookError>;
    async fn get_logs(&self) -> Result<Vec<ActivityLog>, ContactBookError>;
}
