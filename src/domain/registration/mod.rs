//! Registration domain - request shape, validation rules and error taxonomy

mod error;
mod request;
mod validation;

pub use error::{messages, RegistrationError};
pub use request::{MailPolicy, RegistrationRequest};
pub use validation::{validate_required, RequiredFields};
