//! Bearer-token session service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::grants::GrantTable;
use super::jwt::JwtService;
use crate::domain::{AccountStore, Capability, DomainError, Session, SessionService};

/// Resolves bearer JWTs to accounts and checks capabilities against a grant table
#[derive(Debug)]
pub struct JwtSessionService<S: AccountStore> {
    jwt: JwtService,
    accounts: Arc<S>,
    grants: GrantTable,
}

impl<S: AccountStore> JwtSessionService<S> {
    pub fn new(jwt: JwtService, accounts: Arc<S>, grants: GrantTable) -> Self {
        Self {
            jwt,
            accounts,
            grants,
        }
    }
}

#[async_trait]
impl<S: AccountStore + 'static> SessionService for JwtSessionService<S> {
    async fn current_account(&self, credential: Option<&str>) -> Result<Session, DomainError> {
        let Some(token) = credential else {
            return Ok(Session::anonymous());
        };

        let claims = self.jwt.validate(token)?;
        let account_id = claims.account_id()?;

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::credential("Account not found"))?;

        if !account.is_enabled() {
            return Err(DomainError::credential("Account is blocked"));
        }

        debug!(account_id = %account.id(), "Session resolved");

        Ok(Session::for_account(account))
    }

    fn has_capability(&self, capability: Capability, session: &Session) -> bool {
        self.grants.allows(session, capability)
    }
}
