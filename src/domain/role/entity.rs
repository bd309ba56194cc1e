//! Role entity and identifier

use serde::{Deserialize, Serialize};

/// Identifier of a role, e.g. `administrator`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    /// Role held by every unauthenticated session
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Role held implicitly by every signed-in account
    pub const AUTHENTICATED: &'static str = "authenticated";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn anonymous() -> Self {
        Self::new(Self::ANONYMOUS)
    }

    pub fn authenticated() -> Self {
        Self::new(Self::AUTHENTICATED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping of permissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    label: String,
    /// Pseudo roles such as `anonymous` cannot be granted to an account
    assignable: bool,
}

impl Role {
    pub fn new(id: RoleId, label: impl Into<String>, assignable: bool) -> Self {
        Self {
            id,
            label: label.into(),
            assignable,
        }
    }

    pub fn id(&self) -> &RoleId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_assignable(&self) -> bool {
        self.assignable
    }
}
