//! Registration service

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::registration::messages;
use crate::domain::{
    validate_required, Account, AccountEdit, AccountId, AccountStore, Capability, MailPolicy,
    RegistrationError, RegistrationRequest, RoleId, RoleRegistry, SaveTarget, Session,
    SessionService,
};

/// Creates and updates accounts on behalf of a session
#[derive(Debug)]
pub struct RegistrationService<A: AccountStore, R: RoleRegistry, P: SessionService> {
    accounts: Arc<A>,
    roles: Arc<R>,
    sessions: Arc<P>,
    mail_policy: MailPolicy,
}

impl<A: AccountStore, R: RoleRegistry, P: SessionService> RegistrationService<A, R, P> {
    pub fn new(accounts: Arc<A>, roles: Arc<R>, sessions: Arc<P>, mail_policy: MailPolicy) -> Self {
        Self {
            accounts,
            roles,
            sessions,
            mail_policy,
        }
    }

    /// Register a new account
    pub async fn add_account(
        &self,
        session: &Session,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError> {
        self.require(Capability::RegisterUser, session, messages::REGISTER_DENIED)?;

        let account = self
            .save_account(SaveTarget::New, request, messages::ADD_FAILED)
            .await?;

        info!(
            account_id = %account.id(),
            name = %account.name(),
            by = %session.identifier(),
            "Account registered"
        );

        Ok(account)
    }

    /// Update the account identified by `account_id`
    pub async fn update_account(
        &self,
        session: &Session,
        account_id: Option<&str>,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError> {
        let Some(account_id) = account_id else {
            return Err(RegistrationError::bad_request(messages::MISSING_IDENTIFIER));
        };

        self.require(Capability::UpdateUser, session, messages::UPDATE_DENIED)?;

        let Ok(id) = account_id.parse::<AccountId>() else {
            return Err(RegistrationError::bad_request(messages::UNKNOWN_ACCOUNT));
        };

        let existing = self
            .accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistrationError::bad_request(messages::UNKNOWN_ACCOUNT))?;

        let account = self
            .save_account(SaveTarget::Existing(existing), request, messages::UPDATE_FAILED)
            .await?;

        info!(
            account_id = %account.id(),
            name = %account.name(),
            by = %session.identifier(),
            "Account updated"
        );

        Ok(account)
    }

    fn require(
        &self,
        capability: Capability,
        session: &Session,
        denied: &str,
    ) -> Result<(), RegistrationError> {
        if self.sessions.has_capability(capability, session) {
            return Ok(());
        }

        debug!(
            capability = %capability,
            session = %session.identifier(),
            "Capability missing"
        );

        Err(RegistrationError::permission_denied(denied))
    }

    /// Validate the request, then hand exactly one edit set to the store
    async fn save_account(
        &self,
        target: SaveTarget,
        request: RegistrationRequest,
        failure: &str,
    ) -> Result<Account, RegistrationError> {
        let fields = validate_required(&request, self.mail_policy)?;

        if let Some(owner) = self.accounts.find_by_name(&fields.name).await? {
            if target.conflicts_with(&owner) {
                return Err(RegistrationError::bad_request(messages::NAME_TAKEN));
            }
        }

        let init = self.mail_policy.init_for(fields.mail.as_deref());
        let mut edit = AccountEdit::new(fields.name, fields.pass)
            .with_mail(fields.mail)
            .with_init(init);

        if let Some(roles) = self.filter_roles(&request.roles).await? {
            edit = edit.with_roles(roles);
        }

        self.accounts.save(&target, edit).await.map_err(|e| {
            warn!(
                error = %e,
                account_id = ?target.account_id(),
                "Account store rejected save"
            );
            RegistrationError::bad_request(failure)
        })
    }

    /// Keep the requested role ids that name an existing assignable role
    async fn filter_roles(
        &self,
        requested: &[String],
    ) -> Result<Option<BTreeMap<RoleId, String>>, RegistrationError> {
        if requested.is_empty() {
            return Ok(None);
        }

        let available = self.roles.list_roles(true).await?;

        let granted: BTreeMap<RoleId, String> = requested
            .iter()
            .filter_map(|id| available.get_key_value(&RoleId::new(id.as_str())))
            .map(|(id, role)| (id.clone(), role.label().to_string()))
            .collect();

        if granted.len() < requested.len() {
            debug!(requested = ?requested, granted = granted.len(), "Unknown roles dropped");
        }

        Ok((!granted.is_empty()).then_some(granted))
    }
}
