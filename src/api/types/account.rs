//! Account representation returned by the API

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Account;

/// Account as exposed to clients; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub uid: u64,
    pub name: String,
    pub mail: Option<String>,
    pub init: Option<String>,
    pub status: String,
    /// role id -> label
    pub roles: BTreeMap<String, String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            uid: account.id().value(),
            name: account.name().to_string(),
            mail: account.mail().map(String::from),
            init: account.init().map(String::from),
            status: account.status().to_string(),
            roles: account
                .roles()
                .iter()
                .map(|(id, label)| (id.to_string(), label.clone()))
                .collect(),
            created_at: account.created_at().to_rfc3339(),
            updated_at: account.updated_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, RoleId};

    #[test]
    fn test_response_from_account() {
        let roles = [(RoleId::new("editor"), "Editor".to_string())].into();
        let account = Account::new(AccountId::new(5), "erin", "secret-hash")
            .with_mail("erin@example.com")
            .with_roles(roles);

        let response = AccountResponse::from(&account);

        assert_eq!(response.uid, 5);
        assert_eq!(response.status, "enabled");
        assert_eq!(response.roles.get("editor").map(String::as_str), Some("Editor"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
