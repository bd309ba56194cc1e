//! Registration error taxonomy

use thiserror::Error;

use crate::domain::DomainError;

/// Messages returned to callers verbatim
pub mod messages {
    pub const REGISTER_DENIED: &str = "Account doesn't have access to register user.";
    pub const UPDATE_DENIED: &str = "Account doesn't have access to update user.";
    pub const MISSING_IDENTIFIER: &str = "User identifier is missing.";
    pub const UNKNOWN_ACCOUNT: &str = "Account doesn't exist.";
    pub const MISSING_PARAMETERS: &str = "Missing required parameters.";
    pub const NAME_TAKEN: &str = "Account name already exists.";
    pub const ADD_FAILED: &str = "Adding user failed.";
    pub const UPDATE_FAILED: &str = "Updating user failed.";
}

/// Errors surfaced by the registration resource
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The session lacks the capability the operation needs
    #[error("{0}")]
    PermissionDenied(String),

    /// The request cannot be honoured as submitted
    #[error("{0}")]
    BadRequest(String),

    /// A lookup against a collaborator failed
    #[error("Store error: {0}")]
    Store(#[from] DomainError),
}

impl RegistrationError {
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn missing_parameters() -> Self {
        Self::bad_request(messages::MISSING_PARAMETERS)
    }

    /// The caller-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            RegistrationError::bad_request(messages::NAME_TAKEN).to_string(),
            "Account name already exists."
        );
        assert_eq!(
            RegistrationError::permission_denied(messages::REGISTER_DENIED).message(),
            "Account doesn't have access to register user."
        );
    }

    #[test]
    fn test_store_error_from_domain() {
        let err: RegistrationError = DomainError::storage("connection reset").into();

        assert!(matches!(err, RegistrationError::Store(_)));
        assert_eq!(err.to_string(), "Store error: Storage error: connection reset");
    }
}
