//! Error types for FlexiRota.

pub mod unified;

pub use unified::{ErrorCategory, ErrorDetails, RecoverySuggestion};

use thiserror::Error;

use crate::auth::StoreError;

/// Primary error type for all FlexiRota operations.
///
/// Non-2xx responses surface as [`RotaError::Api`] with the raw body intact so
/// the caller decides how to present it.
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {body}")]
    Api {
        status: u16,
        body: String,
        details: Option<ErrorDetails>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session store error: {0}")]
    Storage(#[from] StoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RotaError {
    /// Create an API error from a status and raw body, parsing any
    /// field-level detail the backend returned.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let details = ErrorDetails::parse(&body);
        Self::Api {
            status,
            body,
            details,
        }
    }

    /// HTTP status of a failed response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed error body, if any.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Storage(_) => ErrorCategory::Storage,
            Self::InvalidArgument(_) => ErrorCategory::Validation,
            Self::Api { status, .. } => match status {
                401 => ErrorCategory::Authentication,
                400..=499 => ErrorCategory::Validation,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Unknown,
            },
        }
    }

    /// Whether this error is potentially transient.
    ///
    /// The client never retries these on its own; callers may.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::SignInAgain,
            ErrorCategory::Network | ErrorCategory::Server => RecoverySuggestion::RetryLater,
            ErrorCategory::Validation => RecoverySuggestion::FixInput,
            ErrorCategory::Configuration | ErrorCategory::Storage => {
                RecoverySuggestion::CheckConfiguration
            }
            _ => RecoverySuggestion::ContactSupport,
        }
    }

    /// The message a view should show for this error.
    ///
    /// Prefers the backend's `detail`, then its first field error, then the
    /// error's own display text.
    pub fn user_message(&self) -> String {
        self.details()
            .and_then(ErrorDetails::summary)
            .unwrap_or_else(|| self.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RotaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_authentication() {
        let err = RotaError::api(401, r#"{"detail":"Given token not valid"}"#);
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert_eq!(err.recovery_suggestion(), RecoverySuggestion::SignInAgain);
        assert!(!err.is_retryable());
    }

    #[test]
    fn bad_request_is_validation_with_fields() {
        let err = RotaError::api(400, r#"{"password":["Password fields didn't match."]}"#);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.user_message(), "password: Password fields didn't match.");
    }

    #[test]
    fn server_error_is_retryable() {
        let err = RotaError::api(503, "upstream unavailable");
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
        assert_eq!(err.status(), Some(503));
        assert!(err.details().is_none());
    }

    #[test]
    fn invalid_argument_is_validation() {
        let err = RotaError::InvalidArgument("end before start".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.status(), None);
    }
}
