//! Authenticated API client with transparent access-token refresh.

pub mod request;

pub use request::{ApiRequest, ApiResponse};

use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::auth::{CredentialPair, LogNavigator, MemorySessionStore, Navigator, Session, SessionStore};
use crate::config::ClientConfig;
use crate::error::Result;

/// Token refresh endpoint; called without an `Authorization` header.
pub const REFRESH_PATH: &str = "/api/token/refresh/";

/// Lifecycle of one logical request, as reported in trace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestState {
    Sent,
    Refreshing,
    Retried,
    LoggedOut,
    Done,
    Failed,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
    // Present when the backend rotates refresh tokens.
    refresh: Option<String>,
}

/// HTTP client for the FlexiRota backend.
///
/// Every call reads the access token from the injected [`SessionStore`] and
/// sends it as a bearer token. A 401 triggers at most one refresh followed by
/// at most one resubmission; if that is impossible or fails, the session is
/// cleared, the [`Navigator`] is sent to the sign-in path, and the original
/// failure is returned.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use flexirota::auth::{LogNavigator, MemorySessionStore};
/// use flexirota::client::ApiClient;
/// use flexirota::config::ClientConfig;
///
/// # async fn example() -> flexirota::error::Result<()> {
/// let client = ApiClient::new(
///     ClientConfig::from_env(),
///     Arc::new(MemorySessionStore::new()),
///     Arc::new(LogNavigator),
/// )?;
/// client.auth().login("sam", "hunter2").await?;
/// let me = client.users().me().await?;
/// println!("{}", me.username);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("store", &"..")
            .field("navigator", &"..")
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Ok(Self {
            http: config.http_client()?,
            config,
            store,
            navigator,
        })
    }

    /// Client configured from the environment, holding credentials in memory.
    pub fn from_env() -> Result<Self> {
        Self::new(
            ClientConfig::from_env(),
            Arc::new(MemorySessionStore::new()),
            Arc::new(LogNavigator),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    // -- credentials -------------------------------------------------------

    /// Store a freshly issued credential pair.
    pub fn set_credentials(&self, credentials: &CredentialPair) -> Result<()> {
        self.store.set_credentials(credentials)?;
        Ok(())
    }

    /// Forget both tokens.
    pub fn clear_credentials(&self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }

    pub fn session(&self) -> Result<Session> {
        Ok(self.store.load()?)
    }

    /// Whether a non-empty access token is held. Store failures read as `false`.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .load()
            .map(|s| s.is_authenticated())
            .unwrap_or(false)
    }

    // -- request pipeline --------------------------------------------------

    /// Send a request through the auth pipeline.
    ///
    /// Non-2xx responses come back as
    /// [`RotaError::Api`](crate::error::RotaError::Api) carrying the
    /// backend's status and body unchanged.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        loop {
            self.authorize(&mut request)?;
            let state = if request.is_retried() {
                RequestState::Retried
            } else {
                RequestState::Sent
            };
            tracing::debug!(method = %request.method(), path = request.path(), state = %state, "API request");

            let response = match self.dispatch(&request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::debug!(path = request.path(), state = %RequestState::Failed, error = %err, "API request failed");
                    return Err(err);
                }
            };

            if response.is_success() {
                tracing::debug!(path = request.path(), status = response.status().as_u16(), state = %RequestState::Done, "API request done");
                return Ok(response);
            }

            let status = response.status();
            let failure = response.into_error();
            if status != StatusCode::UNAUTHORIZED {
                tracing::debug!(path = request.path(), status = status.as_u16(), state = %RequestState::Failed, "API request failed");
                return Err(failure);
            }

            if !request.is_retried() {
                if let Some(refresh) = self.stored_refresh_token() {
                    request.mark_retried();
                    tracing::debug!(path = request.path(), state = %RequestState::Refreshing, "Access token rejected; refreshing");
                    match self.refresh_access(&refresh).await {
                        Ok(access) => {
                            request.set_bearer(&access)?;
                            continue;
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Token refresh failed");
                        }
                    }
                }
            }

            self.end_session();
            tracing::debug!(path = request.path(), state = %RequestState::Failed, "API request failed after sign-out");
            return Err(failure);
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::get(path)).await?.json()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path).json(serde_json::to_value(body)?);
        self.execute(request).await?.json()
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::patch(path).json(serde_json::to_value(body)?);
        self.execute(request).await?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }

    /// Attach the stored bearer token. An unreadable store counts as no token.
    fn authorize(&self, request: &mut ApiRequest) -> Result<()> {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read session store; sending unauthenticated");
                return Ok(());
            }
        };
        if let Some(access) = session.access_token() {
            request.set_bearer(access)?;
        }
        Ok(())
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method().clone(), self.config.endpoint(request.path()))
            .headers(request.headers().clone());
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        ApiResponse::read(response).await
    }

    fn stored_refresh_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(session) => session.refresh_token().map(str::to_owned),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read session store");
                None
            }
        }
    }

    /// Exchange the refresh token for a new access token and store it.
    async fn refresh_access(&self, refresh: &str) -> Result<String> {
        let response = self
            .http
            .post(self.config.endpoint(REFRESH_PATH))
            .json(&RefreshRequest { refresh })
            .send()
            .await?;
        let response = ApiResponse::read(response).await?;
        if !response.is_success() {
            return Err(response.into_error());
        }

        let payload: RefreshResponse = response.json()?;
        match payload.refresh {
            Some(rotated) => self
                .store
                .set_credentials(&CredentialPair::new(payload.access.clone(), rotated))?,
            None => self.store.set_access(&payload.access)?,
        }
        Ok(payload.access)
    }

    /// Tear down the local session and send the user to sign in.
    fn end_session(&self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "Failed to clear session credentials");
        }
        tracing::debug!(state = %RequestState::LoggedOut, "Session cleared");
        self.navigator.redirect(&self.config.sign_in_path);
    }
}
