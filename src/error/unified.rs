//! Error classification and backend error-body parsing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request never got a response.
    Network,
    /// 401 that survived the refresh attempt; the session has been torn down.
    Authentication,
    /// 4xx other than 401, or input rejected before sending.
    Validation,
    /// 5xx.
    Server,
    Configuration,
    Serialization,
    Storage,
    Unknown,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    SignInAgain,
    RetryLater,
    FixInput,
    CheckConfiguration,
    ContactSupport,
}

/// Structured error body returned by the backend.
///
/// The backend answers either `{"detail": "..."}` or a map of field name to
/// a list of messages (`{"email": ["..."], "non_field_errors": ["..."]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub detail: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ErrorDetails {
    /// Parse a response body. Returns `None` for non-JSON or unrecognised bodies.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        let mut details = Self::default();
        for (key, value) in object {
            if key == "detail" {
                details.detail = Some(flatten_messages(value).join(" "));
                continue;
            }
            let messages = flatten_messages(value);
            if !messages.is_empty() {
                details.fields.insert(key.clone(), messages);
            }
        }

        if details.detail.is_none() && details.fields.is_empty() {
            None
        } else {
            Some(details)
        }
    }

    /// Messages for a single field.
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// One-line summary suitable for display.
    pub fn summary(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.clone());
        }
        self.fields.iter().next().and_then(|(field, messages)| {
            messages.first().map(|msg| {
                if field == "non_field_errors" {
                    msg.clone()
                } else {
                    format!("{field}: {msg}")
                }
            })
        })
    }
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_detail_body() {
        let details = ErrorDetails::parse(r#"{"detail":"No active account found"}"#).unwrap();
        assert_eq!(details.detail.as_deref(), Some("No active account found"));
        assert!(details.fields.is_empty());
        assert_eq!(details.summary().as_deref(), Some("No active account found"));
    }

    #[test]
    fn parses_field_errors() {
        let details = ErrorDetails::parse(
            r#"{"email":["user with this email already exists."],"invite":"Invalid or expired invite link"}"#,
        )
        .unwrap();
        assert_eq!(
            details.field("email"),
            Some(&["user with this email already exists.".to_string()][..])
        );
        assert_eq!(
            details.field("invite"),
            Some(&["Invalid or expired invite link".to_string()][..])
        );
    }

    #[test]
    fn non_field_errors_render_without_prefix() {
        let details =
            ErrorDetails::parse(r#"{"non_field_errors":["Start time must be before end time."]}"#)
                .unwrap();
        assert_eq!(
            details.summary().as_deref(),
            Some("Start time must be before end time.")
        );
    }

    #[test]
    fn non_json_body_yields_none() {
        assert!(ErrorDetails::parse("<html>Bad Gateway</html>").is_none());
        assert!(ErrorDetails::parse("[]").is_none());
        assert!(ErrorDetails::parse("{}").is_none());
    }
}
