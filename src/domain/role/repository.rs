//! Role registry trait

use std::collections::BTreeMap;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Role, RoleId};
use crate::domain::DomainError;

/// Read access to the roles that exist in the system
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoleRegistry: Send + Sync {
    /// List roles keyed by id; `assignable_only` leaves out pseudo roles
    async fn list_roles(&self, assignable_only: bool)
        -> Result<BTreeMap<RoleId, Role>, DomainError>;
}
