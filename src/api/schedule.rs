//! Availability, shift templates, and swap requests.

use serde_json::json;

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{
    AssignmentSummary, Availability, RoleRequirement, ShiftTemplate, SwapRequest, TimeWindow,
};

#[derive(Debug, Clone, Copy)]
pub struct AvailabilityApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AvailabilityApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Slots visible to the caller: their own, or the whole organisation's
    /// for managers.
    pub async fn list(&self) -> Result<Vec<Availability>> {
        self.client.get_json("/api/availability/").await
    }

    pub async fn create(&self, window: TimeWindow) -> Result<Availability> {
        self.client.post_json("/api/availability/", &window).await
    }

    pub async fn update(&self, id: i64, window: TimeWindow) -> Result<Availability> {
        self.client
            .patch_json(&format!("/api/availability/{id}/"), &window)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/availability/{id}/")).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShiftsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ShiftsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Unassigned shift templates.
    pub async fn templates(&self) -> Result<Vec<ShiftTemplate>> {
        self.client.get_json("/api/shift-templates/").await
    }

    pub async fn create_template(&self, window: TimeWindow) -> Result<ShiftTemplate> {
        self.client.post_json("/api/shift-templates/", &window).await
    }

    /// Replace the per-title headcount requirements of a template.
    pub async fn set_roles(&self, template_id: i64, requirements: &[RoleRequirement]) -> Result<()> {
        let request = ApiRequest::post(format!("/api/shift-templates/{template_id}/set-roles/"))
            .json(json!({ "roles": requirements }));
        self.client.execute(request).await?;
        Ok(())
    }

    /// Create a template and attach its requirements in one go. Requirements
    /// with a zero count are dropped.
    pub async fn create_with_requirements(
        &self,
        window: TimeWindow,
        requirements: &[RoleRequirement],
    ) -> Result<ShiftTemplate> {
        let template = self.create_template(window).await?;
        let wanted: Vec<RoleRequirement> = requirements
            .iter()
            .copied()
            .filter(|r| r.count > 0)
            .collect();
        if !wanted.is_empty() {
            self.set_roles(template.id, &wanted).await?;
        }
        Ok(template)
    }

    /// Manually assign one user to a template.
    pub async fn assign(&self, template_id: i64, user_id: i64) -> Result<()> {
        let request = ApiRequest::post(format!("/api/shift-templates/{template_id}/assign/"))
            .json(json!({ "user_id": user_id }));
        self.client.execute(request).await?;
        Ok(())
    }

    /// Let the backend fill all open templates.
    pub async fn auto_assign(&self) -> Result<AssignmentSummary> {
        self.client
            .execute(ApiRequest::post("/api/auto-assign-shifts/"))
            .await?
            .json()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SwapsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SwapsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn pending(&self) -> Result<Vec<SwapRequest>> {
        self.client.get_json("/api/swaps/pending/").await
    }

    pub async fn request(&self, shift: i64, reason: &str) -> Result<SwapRequest> {
        self.client
            .post_json(
                "/api/swaps/request/",
                &json!({ "shift": shift, "reason": reason }),
            )
            .await
    }

    pub async fn approve(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::patch(format!("/api/swaps/approve/{id}/")))
            .await?;
        Ok(())
    }

    pub async fn reject(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::patch(format!("/api/swaps/reject/{id}/")))
            .await?;
        Ok(())
    }
}
