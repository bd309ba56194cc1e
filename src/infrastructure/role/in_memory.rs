//! In-memory role registry

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{DomainError, Role, RoleId, RoleRegistry};

/// Fixed set of roles, usually seeded from configuration
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleRegistry {
    roles: BTreeMap<RoleId, Role>,
}

impl InMemoryRoleRegistry {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles
                .into_iter()
                .map(|role| (role.id().clone(), role))
                .collect(),
        }
    }

    /// The built-in `anonymous` and `authenticated` roles plus `administrator`
    pub fn with_defaults() -> Self {
        Self::new([
            Role::new(RoleId::anonymous(), "anonymous user", false),
            Role::new(RoleId::authenticated(), "authenticated user", true),
            Role::new(RoleId::new("administrator"), "administrator", true),
        ])
    }
}

#[async_trait]
impl RoleRegistry for InMemoryRoleRegistry {
    async fn list_roles(
        &self,
        assignable_only: bool,
    ) -> Result<BTreeMap<RoleId, Role>, DomainError> {
        Ok(self
            .roles
            .iter()
            .filter(|(_, role)| !assignable_only || role.is_assignable())
            .map(|(id, role)| (id.clone(), role.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_roles() {
        let registry = InMemoryRoleRegistry::with_defaults();

        let roles = registry.list_roles(false).await.unwrap();
        assert_eq!(roles.len(), 3);
        assert!(roles.contains_key(&RoleId::anonymous()));
    }

    #[tokio::test]
    async fn test_assignable_only_skips_pseudo_roles() {
        let registry = InMemoryRoleRegistry::with_defaults();

        let roles = registry.list_roles(true).await.unwrap();
        assert!(!roles.contains_key(&RoleId::anonymous()));
        assert!(roles.contains_key(&RoleId::authenticated()));
        assert!(roles.contains_key(&RoleId::new("administrator")));
    }

    #[tokio::test]
    async fn test_later_duplicate_wins() {
        let registry = InMemoryRoleRegistry::new([
            Role::new(RoleId::new("editor"), "Editor", true),
            Role::new(RoleId::new("editor"), "Senior editor", true),
        ]);

        let roles = registry.list_roles(true).await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[&RoleId::new("editor")].label(), "Senior editor");
    }
}
