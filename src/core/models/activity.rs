use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    UserCreated,
    UserUpdated,
    UserDeleted,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::UserCreated => "USER_CREATED",
            ActivityAction::UserUpdated => "USER_UPDATED",
            ActivityAction::UserDeleted => "USER_DELETED",
        }
    }
}

/// One recorded change to the user collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub action: ActivityAction,
    pub user_id: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
