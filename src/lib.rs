//! User Registration API
//!
//! A RESTful resource for creating and updating accounts:
//! - Capability checks on the caller's session
//! - Required-field validation and name uniqueness
//! - Requested roles filtered against the role registry

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::BootstrapAccount;
use domain::{AccountEdit, AccountStore, RoleId, RoleRegistry, SaveTarget};
use infrastructure::{
    account::InMemoryAccountStore,
    registration::RegistrationService,
    role::InMemoryRoleRegistry,
    session::{GrantTable, JwtConfig, JwtService, JwtSessionService},
};
use tracing::{info, warn};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let accounts = Arc::new(InMemoryAccountStore::new());
    let roles = Arc::new(InMemoryRoleRegistry::new(config.role_set()));

    if let Some(bootstrap) = &config.bootstrap {
        create_bootstrap_account(accounts.as_ref(), roles.as_ref(), bootstrap).await?;
    }

    let sessions = Arc::new(JwtSessionService::new(
        create_jwt_service(config),
        accounts.clone(),
        GrantTable::from_map(config.permissions.clone()),
    ));

    let registration = RegistrationService::new(
        accounts,
        roles.clone(),
        sessions.clone(),
        config.registration.mail_policy,
    );

    info!(
        resource = %config.resource_path(),
        mail_policy = ?config.registration.mail_policy,
        roles = config.roles.len(),
        "Registration service initialized"
    );

    Ok(AppState::new(Arc::new(registration), sessions, roles))
}

/// JWT service from the configured secret
pub fn create_jwt_service(config: &AppConfig) -> JwtService {
    if config.auth.jwt_secret == JwtConfig::default().secret {
        warn!("Using the default JWT secret; set auth.jwt_secret (APP__AUTH__JWT_SECRET)");
    }

    JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    ))
}

/// Create the configured account when the store is empty
async fn create_bootstrap_account(
    accounts: &InMemoryAccountStore,
    roles: &InMemoryRoleRegistry,
    bootstrap: &BootstrapAccount,
) -> anyhow::Result<()> {
    if accounts.count().await > 0 {
        return Ok(());
    }

    let available = roles.list_roles(true).await?;
    let granted = bootstrap
        .roles
        .iter()
        .filter_map(|id| {
            let role = available.get(&RoleId::new(id))?;
            Some((role.id().clone(), role.label().to_string()))
        })
        .collect();

    let edit = AccountEdit::new(bootstrap.name.clone(), bootstrap.pass.clone())
        .with_mail(bootstrap.mail.clone())
        .with_init(bootstrap.mail.clone())
        .with_roles(granted);

    let account = accounts.save(&SaveTarget::New, edit).await?;

    info!(
        account_id = %account.id(),
        name = %account.name(),
        "Bootstrap account created"
    );

    Ok(())
}
