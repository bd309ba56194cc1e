//! Wire types for the registration API

pub mod account;
pub mod error;
pub mod payload;

pub use account::AccountResponse;
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use payload::RegistrationPayload;
