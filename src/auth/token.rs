use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by login, signup, or invite registration.
///
/// # Example
/// ```
/// use flexirota::auth::CredentialPair;
///
/// let pair: CredentialPair =
///     serde_json::from_str(r#"{"access":"tok_a1","refresh":"tok_r1"}"#).unwrap();
/// assert_eq!(pair.access, "tok_a1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    pub access: String,
    pub refresh: String,
}

impl CredentialPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Claims read from a JWT access token's payload.
///
/// Informational only: the signature is not verified and expiry is never used
/// to decide whether a session is valid. The server's 401 is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessClaims {
    pub exp: Option<i64>,
    pub user_id: Option<serde_json::Value>,
    pub token_type: Option<String>,
}

impl AccessClaims {
    /// Decode the payload segment of `token`. Returns `None` for opaque tokens.
    pub fn decode(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}
