//! Session resolution and capability checks

use async_trait::async_trait;

use super::capability::Capability;
use crate::domain::account::Account;
use crate::domain::role::RoleId;
use crate::domain::DomainError;

/// The caller behind a request
#[derive(Debug, Clone, Default)]
pub struct Session {
    account: Option<Account>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { account: None }
    }

    pub fn for_account(account: Account) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.account.is_none()
    }

    /// Roles this session acts with, pseudo roles included
    pub fn role_ids(&self) -> Vec<RoleId> {
        match &self.account {
            None => vec![RoleId::anonymous()],
            Some(account) => std::iter::once(RoleId::authenticated())
                .chain(account.roles().keys().cloned())
                .collect(),
        }
    }

    /// Identifier used in logs
    pub fn identifier(&self) -> String {
        match &self.account {
            None => "anonymous".to_string(),
            Some(account) => format!("account:{}", account.id()),
        }
    }
}

/// Session and permission collaborator
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Resolve the account behind an optional bearer credential.
    ///
    /// `None` yields an anonymous session; a credential that does not
    /// resolve to an enabled account is a [`DomainError::Credential`].
    async fn current_account(&self, credential: Option<&str>) -> Result<Session, DomainError>;

    /// Check whether the session holds `capability`
    fn has_capability(&self, capability: Capability, session: &Session) -> bool;
}
