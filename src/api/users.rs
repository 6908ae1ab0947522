//! Users, job titles, pay, and analytics.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{FairnessReport, PayEstimate, RoleTitle, User};

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The signed-in user, including their account role.
    pub async fn me(&self) -> Result<User> {
        self.client.get_json("/api/users/me/").await
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get_json("/api/users/").await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        self.client.get_json(&format!("/api/users/{id}/")).await
    }

    /// Assign a job title to a user, or clear it with `None`.
    pub async fn set_role_title(&self, user_id: i64, role_title: Option<i64>) -> Result<User> {
        self.client
            .patch_json(
                &format!("/api/users/{user_id}/"),
                &json!({ "role_title": role_title }),
            )
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RolesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RolesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<RoleTitle>> {
        self.client.get_json("/api/roles/").await
    }

    pub async fn create(&self, name: &str) -> Result<RoleTitle> {
        self.client
            .post_json("/api/roles/", &json!({ "name": name }))
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PayApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PayApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn estimate(&self) -> Result<PayEstimate> {
        self.client.get_json("/api/pay-estimate/").await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn fairness(&self) -> Result<FairnessReport> {
        self.client.get_json("/api/analytics/fairness/").await
    }
}
