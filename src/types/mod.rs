//! Backend payload types.

pub mod analytics;
pub mod chat;
pub mod notification;
pub mod schedule;
pub mod user;

pub use analytics::{EmployeeShare, EmployeeSummary, FairnessReport, PayEstimate};
pub use chat::ChatMessage;
pub use notification::{Notification, NotificationDraft};
pub use schedule::{
    AssignmentSummary, Availability, RoleRequirement, ShiftTemplate, SwapRequest, TimeWindow,
};
pub use user::{InviteLink, Registration, RoleTitle, User, UserRole};

/// Serde helpers for the backend's decimal fields, which arrive as JSON
/// strings (`"12.50"`) but are sometimes plain numbers.
pub(crate) mod decimal {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    fn parse<E: de::Error>(raw: Raw) -> Result<f64, E> {
        match raw {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal: {s:?}"))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        parse(Raw::deserialize(deserializer)?)
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<f64>, D::Error> {
            match Option::<Raw>::deserialize(deserializer)? {
                Some(raw) => parse(raw).map(Some),
                None => Ok(None),
            }
        }
    }
}
