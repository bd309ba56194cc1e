//! Required-field validation for registration requests

use super::error::RegistrationError;
use super::request::{MailPolicy, RegistrationRequest};

/// The fields of a request that passed [`validate_required`]
#[derive(Clone, PartialEq)]
pub struct RequiredFields {
    pub name: String,
    pub pass: String,
    pub mail: Option<String>,
}

impl std::fmt::Debug for RequiredFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequiredFields")
            .field("name", &self.name)
            .field("pass", &"[hidden]")
            .field("mail", &self.mail)
            .finish()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validate a registration request
///
/// Rules:
/// - `name` and `pass` must be present and non-empty
/// - under [`MailPolicy::Required`], `mail` must be present and non-empty
pub fn validate_required(
    request: &RegistrationRequest,
    policy: MailPolicy,
) -> Result<RequiredFields, RegistrationError> {
    let (Some(name), Some(pass)) = (present(&request.name), present(&request.pass)) else {
        return Err(RegistrationError::missing_parameters());
    };

    let mail = present(&request.mail);

    if policy.requires_mail() && mail.is_none() {
        return Err(RegistrationError::missing_parameters());
    }

    Ok(RequiredFields {
        name: name.to_string(),
        pass: pass.to_string(),
        mail: mail.map(String::from),
    })
}
