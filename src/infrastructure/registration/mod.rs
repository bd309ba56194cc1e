//! Registration service - maps create/update requests onto the account store

mod service;

pub use service::RegistrationService;
