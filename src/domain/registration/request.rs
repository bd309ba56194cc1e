//! Registration request body and mail policy

use serde::{Deserialize, Deserializer, Serialize};

/// Body submitted to create or update an account
///
/// Every field is optional on the wire; presence is checked by
/// [`validate_required`](super::validate_required).
#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pass: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
    /// Requested role identifiers, in submission order
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
}

/// A role identifier as submitted: `"editor"` or a numeric id such as `3`
#[derive(Deserialize)]
#[serde(untagged)]
enum SubmittedRole {
    Name(String),
    Number(i64),
}

impl From<SubmittedRole> for String {
    fn from(role: SubmittedRole) -> Self {
        match role {
            SubmittedRole::Name(name) => name,
            SubmittedRole::Number(id) => id.to_string(),
        }
    }
}

/// `null` reads as no roles
fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let roles = Option::<Vec<SubmittedRole>>::deserialize(deserializer)?;

    Ok(roles
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            pass: Some(pass.into()),
            mail: None,
            roles: Vec::new(),
        }
    }

    pub fn with_mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = Some(mail.into());
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("pass", &self.pass.as_ref().map(|_| "[hidden]"))
            .field("mail", &self.mail)
            .field("roles", &self.roles)
            .finish()
    }
}

/// Whether `mail` must be submitted, and what `init` is set to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailPolicy {
    /// `mail` is required and `init` mirrors it
    #[default]
    Required,
    /// `mail` may be omitted and `init` is left empty
    Optional,
}

impl MailPolicy {
    pub fn requires_mail(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// Value of the edit set's `init` field for a submitted `mail`
    pub fn init_for(&self, mail: Option<&str>) -> Option<String> {
        match self {
            Self::Required => mail.map(String::from),
            Self::Optional => None,
        }
    }
}
