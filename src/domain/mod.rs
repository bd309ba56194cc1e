//! Domain layer - accounts, roles, sessions and the registration rules

pub mod account;
pub mod error;
pub mod registration;
pub mod role;
pub mod session;

pub use account::{Account, AccountEdit, AccountId, AccountStatus, AccountStore, SaveTarget};
pub use error::DomainError;
pub use registration::{
    validate_required, MailPolicy, RegistrationError, RegistrationRequest, RequiredFields,
};
pub use role::{Role, RoleId, RoleRegistry};
pub use session::{Capability, Session, SessionService};
