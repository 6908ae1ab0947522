use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{Notification, NotificationDraft};

#[derive(Debug, Clone, Copy)]
pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Notifications the caller has not read yet.
    pub async fn unread(&self) -> Result<Vec<Notification>> {
        self.client.get_json("/api/notifications/").await
    }

    pub async fn mark_read(&self, id: i64) -> Result<()> {
        let request =
            ApiRequest::post(format!("/api/notifications/{id}/read/")).json(serde_json::json!({}));
        self.client.execute(request).await?;
        Ok(())
    }

    /// Broadcast a message. Drafts without text or targets are rejected
    /// before anything is sent.
    pub async fn send(&self, draft: &NotificationDraft) -> Result<()> {
        draft.validate()?;
        let request =
            ApiRequest::post("/api/notifications/send/").json(serde_json::to_value(draft)?);
        self.client.execute(request).await?;
        Ok(())
    }
}
