//! Client configuration (layered: code > env > defaults).

use std::time::Duration;

use crate::error::{Result, RotaError};

/// Local development backend used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Where the client navigates after the session is torn down.
pub const DEFAULT_SIGN_IN_PATH: &str = "/sign-in";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "FLEXIROTA_API_BASE_URL";
const ENV_SEND_COOKIES: &str = "FLEXIROTA_SEND_COOKIES";
const ENV_TIMEOUT_SECS: &str = "FLEXIROTA_TIMEOUT_SECS";

/// Connection settings for [`ApiClient`](crate::client::ApiClient).
///
/// # Example
/// ```
/// use flexirota::config::ClientConfig;
///
/// let config = ClientConfig::default().with_base_url("https://rota.example.com/");
/// assert_eq!(config.endpoint("/api/users/me/"), "https://rota.example.com/api/users/me/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Keep a cookie jar and send backend cookies with every call.
    pub send_cookies: bool,
    pub sign_in_path: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            send_cookies: true,
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(flag) = get(ENV_SEND_COOKIES) {
            config.send_cookies = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_send_cookies(mut self, send_cookies: bool) -> Self {
        self.send_cookies = send_cookies;
        self
    }

    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build the HTTP transport described by this config.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(RotaError::Configuration(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        reqwest::Client::builder()
            .timeout(self.timeout)
            .cookie_store(self.send_cookies)
            .build()
            .map_err(|e| RotaError::Configuration(format!("failed to build HTTP client: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.send_cookies);
        assert_eq!(config.sign_in_path, "/sign-in");
    }

    #[test]
    fn env_overrides_apply() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("FLEXIROTA_API_BASE_URL", "https://rota.example.com"),
            ("FLEXIROTA_SEND_COOKIES", "false"),
            ("FLEXIROTA_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "https://rota.example.com");
        assert!(!config.send_cookies);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_base_url_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[("FLEXIROTA_API_BASE_URL", "  ")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn unparseable_timeout_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[("FLEXIROTA_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8000/");
        assert_eq!(
            config.endpoint("/api/token/refresh/"),
            "http://localhost:8000/api/token/refresh/"
        );
        assert_eq!(
            config.endpoint("api/login/"),
            "http://localhost:8000/api/login/"
        );
    }

    #[test]
    fn http_client_rejects_non_http_base() {
        let err = ClientConfig::default()
            .with_base_url("ftp://rota")
            .http_client()
            .unwrap_err();
        assert!(matches!(err, RotaError::Configuration(_)));
    }
}
