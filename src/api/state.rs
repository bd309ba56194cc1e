//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    Account, AccountStore, RegistrationError, RegistrationRequest, RoleRegistry, Session,
    SessionService,
};
use crate::infrastructure::registration::RegistrationService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationServiceTrait>,
    pub session_service: Arc<dyn SessionService>,
    pub role_registry: Arc<dyn RoleRegistry>,
}

impl AppState {
    pub fn new(
        registration_service: Arc<dyn RegistrationServiceTrait>,
        session_service: Arc<dyn SessionService>,
        role_registry: Arc<dyn RoleRegistry>,
    ) -> Self {
        Self {
            registration_service,
            session_service,
            role_registry,
        }
    }
}

/// Trait for registration operations
#[async_trait::async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    async fn add_account(
        &self,
        session: &Session,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError>;

    async fn update_account(
        &self,
        session: &Session,
        account_id: Option<&str>,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError>;
}

#[async_trait::async_trait]
impl<A, R, P> RegistrationServiceTrait for RegistrationService<A, R, P>
where
    A: AccountStore + 'static,
    R: RoleRegistry + 'static,
    P: SessionService + 'static,
{
    async fn add_account(
        &self,
        session: &Session,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError> {
        RegistrationService::add_account(self, session, request).await
    }

    async fn update_account(
        &self,
        session: &Session,
        account_id: Option<&str>,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError> {
        RegistrationService::update_account(self, session, account_id, request).await
    }
}
