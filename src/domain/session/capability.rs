//! Named capabilities a session may hold

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A named permission checked before an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// May create new accounts
    RegisterUser,
    /// May update existing accounts
    UpdateUser,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterUser => "register-user",
            Self::UpdateUser => "update-user",
        }
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "register-user" => Ok(Self::RegisterUser),
            "update-user" => Ok(Self::UpdateUser),
            other => Err(DomainError::validation(format!(
                "Unknown capability '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_names() {
        assert_eq!(Capability::RegisterUser.to_string(), "register-user");
        assert_eq!(Capability::UpdateUser.to_string(), "update-user");
    }

    #[test]
    fn test_capability_parse() {
        assert_eq!(
            "register-user".parse::<Capability>().unwrap(),
            Capability::RegisterUser
        );
        assert!("delete-user".parse::<Capability>().is_err());
    }

    #[test]
    fn test_capability_deserialization() {
        let caps: Vec<Capability> =
            serde_json::from_str(r#"["register-user", "update-user"]"#).unwrap();
        assert_eq!(caps, vec![Capability::RegisterUser, Capability::UpdateUser]);
    }
}
