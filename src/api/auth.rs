//! Login, signup, logout, and invite links.

use serde::Deserialize;
use serde_json::json;

use crate::auth::CredentialPair;
use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{InviteLink, Registration, UserRole};

const LOGIN_PATH: &str = "/api/login/";
const REGISTER_PATH: &str = "/api/register/";
const LOGOUT_PATH: &str = "/api/logout/";
const ORG_AVAILABILITY_PATH: &str = "/api/check-org-availability/";
const GENERATE_INVITE_PATH: &str = "/api/generate-invite/";

#[derive(Debug, Deserialize)]
struct OrgAvailability {
    available: bool,
}

/// Session lifecycle endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange username and password for a token pair and store it.
    pub async fn login(&self, username: &str, password: &str) -> Result<CredentialPair> {
        let credentials: CredentialPair = self
            .client
            .post_json(
                LOGIN_PATH,
                &json!({ "username": username, "password": password }),
            )
            .await?;
        self.client.set_credentials(&credentials)?;
        tracing::debug!(username, "Logged in");
        Ok(credentials)
    }

    /// Create an account, optionally joining an organisation through an
    /// invite token.
    ///
    /// Some signup flows answer with a token pair (stored and returned), others
    /// with an empty or non-token body, in which case the caller still has to
    /// log in and `None` is returned.
    pub async fn register(
        &self,
        registration: &Registration,
        invite: Option<&str>,
    ) -> Result<Option<CredentialPair>> {
        let mut request = ApiRequest::post(REGISTER_PATH).json(serde_json::to_value(registration)?);
        if let Some(invite) = invite {
            request = request.query("invite", invite);
        }

        let response = self.client.execute(request).await?;
        if response.is_empty() {
            return Ok(None);
        }
        match response.json::<CredentialPair>() {
            Ok(credentials) => {
                self.client.set_credentials(&credentials)?;
                Ok(Some(credentials))
            }
            Err(_) => Ok(None),
        }
    }

    /// Invalidate the refresh token server-side, then always clear local
    /// credentials. A failed invalidation is logged, not returned.
    pub async fn logout(&self) -> Result<()> {
        let refresh = self
            .client
            .session()
            .ok()
            .and_then(|s| s.refresh_token().map(str::to_owned));

        if let Some(refresh) = refresh {
            let request = ApiRequest::post(LOGOUT_PATH).json(json!({ "refresh": refresh }));
            if let Err(err) = self.client.execute(request).await {
                tracing::warn!(error = %err, "Logout request failed");
            }
        }

        self.client.clear_credentials()
    }

    /// Whether an organisation name is still free.
    pub async fn check_org_availability(&self, name: &str) -> Result<bool> {
        let request = ApiRequest::get(ORG_AVAILABILITY_PATH).query("name", name);
        let availability: OrgAvailability = self.client.execute(request).await?.json()?;
        Ok(availability.available)
    }
}

/// Manager-issued invite links.
#[derive(Debug, Clone, Copy)]
pub struct InvitesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InvitesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a one-time signup link that joins the caller's organisation
    /// with the given account role.
    pub async fn generate(&self, role: UserRole) -> Result<InviteLink> {
        self.client
            .post_json(GENERATE_INVITE_PATH, &json!({ "role": role }))
            .await
    }
}
