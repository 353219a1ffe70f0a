//! The closed role enumeration.
//!
//! Roles are stored in PostgreSQL as the `user_role` enum type (see the
//! `create_users` migration) and serialized lowercase on the wire. Unknown
//! role strings are rejected at the boundary -- registration, role updates,
//! and token claims all parse into this type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A user's role. Exactly three values exist; there is no escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    /// Full access: manage users, mutate any news or comment.
    Admin,
    /// May publish news and mutate their own rows.
    Writer,
    /// May read and comment. The default for new registrations.
    Reader,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Writer => "writer",
            Role::Reader => "reader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "writer" => Ok(Role::Writer),
            "reader" => Ok(Role::Reader),
            other => Err(CoreError::Validation(format!("Invalid role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("writer".parse::<Role>().unwrap(), Role::Writer);
        assert_eq!("reader".parse::<Role>().unwrap(), Role::Reader);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert_matches!("editor".parse::<Role>(), Err(CoreError::Validation(_)));
        assert_matches!("Admin".parse::<Role>(), Err(CoreError::Validation(_)));
        assert_matches!("".parse::<Role>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_display_round_trips() {
        for role in [Role::Admin, Role::Writer, Role::Reader] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Role::Writer).unwrap();
        assert_eq!(json, "\"writer\"");
        let back: Role = serde_json::from_str("\"reader\"").unwrap();
        assert_eq!(back, Role::Reader);
    }
}
