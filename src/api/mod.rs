//! Typed bindings for the backend's REST resources.
//!
//! Each binding borrows an [`ApiClient`] and goes through its auth pipeline,
//! so token refresh and sign-out apply uniformly.

pub mod auth;
pub mod chat;
pub mod notifications;
pub mod schedule;
pub mod users;

pub use auth::{AuthApi, InvitesApi};
pub use chat::ChatApi;
pub use notifications::NotificationsApi;
pub use schedule::{AvailabilityApi, ShiftsApi, SwapsApi};
pub use users::{AnalyticsApi, PayApi, RolesApi, UsersApi};

use crate::client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn invites(&self) -> InvitesApi<'_> {
        InvitesApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn roles(&self) -> RolesApi<'_> {
        RolesApi::new(self)
    }

    pub fn pay(&self) -> PayApi<'_> {
        PayApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    pub fn availability(&self) -> AvailabilityApi<'_> {
        AvailabilityApi::new(self)
    }

    pub fn shifts(&self) -> ShiftsApi<'_> {
        ShiftsApi::new(self)
    }

    pub fn swaps(&self) -> SwapsApi<'_> {
        SwapsApi::new(self)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }
}
