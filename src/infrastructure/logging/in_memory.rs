use crate::core::errors::ContactBookError;
use crate::core::models::activity::{ActivityAction, ActivityLog};
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<ActivityLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: ActivityAction,
        user_id: &str,
        details: serde_json::Value,
    ) -> Result<(), ContactBookError> {
        if !details.is_object() {
            return Err(ContactBookError::LoggingError(format!(
                "details for {} must be a JSON object",
                action.as_str()
            )));
        }
        let mut logs = self.logs.write().await;
        logs.push(ActivityLog {
            id: Uuid::new_v4().to_string(),
            action,
            user_id: user_id.to_string(),
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<ActivityLog>, ContactBookError> {
        let logs = self.logs.read().await;
        Ok(logs.clone())
    }
}
