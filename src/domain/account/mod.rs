//! Account domain module
//!
//! Accounts are owned by the account store; this crate only reads them and
//! hands edit sets to the store.

mod edit;
mod entity;
mod repository;

pub use edit::AccountEdit;
pub use entity::{Account, AccountId, AccountStatus, SaveTarget};
pub use repository::AccountStore;

#[cfg(test)]
pub use repository::MockAccountStore;
