use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RotaError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

/// Manager broadcast for `POST /api/notifications/send/`.
///
/// Targets individual users, whole job titles, or both.
#[derive(Debug, Clone, Builder, Serialize)]
pub struct NotificationDraft {
    #[builder(into)]
    pub message: String,
    #[builder(default)]
    pub recipients: Vec<i64>,
    #[builder(default)]
    pub roles: Vec<i64>,
}

impl NotificationDraft {
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(RotaError::InvalidArgument(
                "notification message is empty".to_string(),
            ));
        }
        if self.recipients.is_empty() && self.roles.is_empty() {
            return Err(RotaError::InvalidArgument(
                "notification needs at least one recipient or role".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_targeted_draft_is_valid() {
        let draft = NotificationDraft::builder()
            .message("Rota for next week is out")
            .roles(vec![2])
            .build();
        draft.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"message": "Rota for next week is out", "recipients": [], "roles": [2]})
        );
    }

    #[test]
    fn untargeted_draft_is_rejected() {
        let draft = NotificationDraft::builder().message("hello").build();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn blank_message_is_rejected() {
        let draft = NotificationDraft::builder()
            .message("  ")
            .recipients(vec![1])
            .build();
        assert!(draft.validate().is_err());
    }
}
