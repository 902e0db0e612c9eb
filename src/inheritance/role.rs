//! Employee roles used for directory queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification of an employee within the company.
///
/// Roles carry no pay or holiday semantics; they only drive
/// [`Company::find_employees`](super::Company::find_employees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A people manager.
    Manager,
    /// A vice president.
    VicePresident,
    /// An intern.
    Intern,
}

impl Role {
    /// Returns the snake_case name used in roster files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::VicePresident => "vice_president",
            Role::Intern => "intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        assert_eq!(
            serde_json::to_string(&Role::VicePresident).unwrap(),
            "\"vice_president\""
        );
        assert_eq!(serde_json::to_string(&Role::Intern).unwrap(), "\"intern\"");
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str("\"vice_president\"").unwrap();
        assert_eq!(role, Role::VicePresident);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"inter\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for role in [Role::Manager, Role::VicePresident, Role::Intern] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }
}
