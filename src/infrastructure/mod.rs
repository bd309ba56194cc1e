//! Infrastructure layer - collaborator implementations and the registration service

pub mod account;
pub mod logging;
pub mod registration;
pub mod role;
pub mod session;
