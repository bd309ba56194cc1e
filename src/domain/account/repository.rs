//! Account store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::edit::AccountEdit;
use super::entity::{Account, AccountId, SaveTarget};
use crate::domain::DomainError;

/// The user-management collaborator that owns account persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by its name
    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its identifier
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Apply an edit set to `target` and persist it, returning the stored account
    async fn save(&self, target: &SaveTarget, edit: AccountEdit) -> Result<Account, DomainError>;
}
