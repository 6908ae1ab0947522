use serde_json::json;

use crate::client::ApiClient;
use crate::error::{Result, RotaError};
use crate::types::ChatMessage;

#[derive(Debug, Clone, Copy)]
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn messages(&self, room: &str) -> Result<Vec<ChatMessage>> {
        self.client.get_json(&messages_path(room)).await
    }

    /// Post a message; surrounding whitespace is trimmed and blank messages
    /// are rejected.
    pub async fn send(&self, room: &str, text: &str) -> Result<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RotaError::InvalidArgument("chat message is empty".to_string()));
        }
        self.client
            .post_json(&messages_path(room), &json!({ "text": text }))
            .await
    }
}

// Room names are free text ("Team Leads"), so they are percent-encoded.
fn messages_path(room: &str) -> String {
    format!("/api/chat/{}/messages/", urlencoding::encode(room))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_names_are_encoded() {
        assert_eq!(
            messages_path("Team Leads"),
            "/api/chat/Team%20Leads/messages/"
        );
        assert_eq!(messages_path("a/b"), "/api/chat/a%2Fb/messages/");
    }
}
