use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message in a chat room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<i64>,
    /// Sender display name; the backend reports the caller's own messages as "You".
    pub from: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn is_own(&self) -> bool {
        self.from == "You"
    }
}
