//! Users, roles, and account registration.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Account type. Managers see the recap dashboard; employees their own rota.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Manager,
    Employee,
}

/// A user as returned by `/api/users/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "crate::types::decimal::option::deserialize")]
    pub pay_rate: Option<f64>,
    /// Id of the job title (see [`RoleTitle`]) assigned by a manager.
    #[serde(default)]
    pub role_title: Option<i64>,
}

impl User {
    pub fn is_manager(&self) -> bool {
        self.role == UserRole::Manager
    }

    /// Best human-readable name: full name, then `name`, then username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.username)
            .to_string()
    }
}

/// Job title defined by a manager (e.g. "Barista"); distinct from [`UserRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTitle {
    pub id: i64,
    pub name: String,
}

/// Signup payload for `POST /api/register/`.
///
/// Managers registering a new organisation set `organisation_name`; invited
/// employees pass the invite token to [`AuthApi::register`](crate::api::AuthApi::register)
/// instead.
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(on(String, into))]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[builder(default = UserRole::Employee)]
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,
}

/// Response of `POST /api/generate-invite/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteLink {
    pub invite_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn user_accepts_string_pay_rate() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "username": "sam",
            "email": "sam@example.com",
            "role": "employee",
            "name": "Sam",
            "phone_number": null,
            "pay_rate": "11.50"
        }))
        .unwrap();
        assert_eq!(user.pay_rate, Some(11.5));
        assert!(!user.is_manager());
        assert_eq!(user.role_title, None);
    }

    #[test]
    fn display_name_prefers_full_name() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "username": "jdoe",
            "role": "manager",
            "first_name": "Jane",
            "last_name": "Doe",
            "pay_rate": 20
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.pay_rate, Some(20.0));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "username": "jdoe",
            "role": "employee",
            "first_name": "",
            "name": " "
        }))
        .unwrap();
        assert_eq!(user.display_name(), "jdoe");
    }

    #[test]
    fn role_parses_from_str() {
        assert_eq!("manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert_eq!(UserRole::Employee.to_string(), "employee");
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn registration_omits_missing_organisation() {
        let registration = Registration::builder()
            .username("sam")
            .email("sam@example.com")
            .password("pw")
            .password2("pw")
            .first_name("Sam")
            .last_name("Lee")
            .build();
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["role"], "employee");
        assert!(value.get("organisation_name").is_none());
    }
}
