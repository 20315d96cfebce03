use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Worker role controlling which screens and chrome a session sees.
///
/// - `Employee` — checks in at sites, sees the home/map/profile tabs.
/// - `Supervisor` — monitors sites and worker pairs, sees the dashboard tabs.
/// - `Admin` — organization-wide administration, no bottom navigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Employee,
    Supervisor,
    Admin,
}

impl UserRole {
    /// Parse a role string from the backend. Unknown values default to
    /// Employee, the least-privileged role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "supervisor" => UserRole::Supervisor,
            "admin" => UserRole::Admin,
            _ => UserRole::Employee,
        }
    }

    /// Lowercase string for storage and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Supervisor => "supervisor",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Supervisor => "Supervisor",
            UserRole::Admin => "Administrator",
        }
    }
}

/// Authenticated user record supplied by the auth backend.
///
/// The client only reads this; it is created and invalidated by whichever
/// backend is active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    /// Site the worker is assigned to, when the role has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

impl Session {
    /// Full display name for the mobile header.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registration payload sent to the auth backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}
