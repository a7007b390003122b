//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role the user is acting under for a session.
///
/// Each role carries its own preference table in the scoring layer.
/// Unrecognized role names resolve to [`Role::User`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Developer,
    #[default]
    User,
}

impl Role {
    /// Parses a role name, falling back to `User` for unknown values.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "developer" => Role::Developer,
            _ => Role::User,
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_name_parses_known_roles() {
        assert_eq!(Role::from_name("admin"), Role::Admin);
        assert_eq!(Role::from_name("Developer"), Role::Developer);
        assert_eq!(Role::from_name("user"), Role::User);
    }

    #[test]
    fn role_from_name_falls_back_to_user() {
        assert_eq!(Role::from_name("guest"), Role::User);
        assert_eq!(Role::from_name(""), Role::User);
    }

    #[test]
    fn role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn roles_have_a_total_order() {
        // Required so composite keys carrying a Role stay sortable.
        let mut roles = vec![Role::User, Role::Admin, Role::Developer];
        roles.sort();
        assert_eq!(roles, vec![Role::Admin, Role::Developer, Role::User]);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"developer\"").unwrap();
        assert_eq!(role, Role::Developer);
    }
}
