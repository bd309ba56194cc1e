//! Edit set handed to the account store

use std::collections::BTreeMap;

use crate::domain::role::RoleId;

use super::entity::AccountStatus;

/// The fields one save is allowed to change
#[derive(Clone, PartialEq)]
pub struct AccountEdit {
    pub name: String,
    /// Plain-text password; the store decides how to keep it
    pub pass: String,
    pub mail: Option<String>,
    pub init: Option<String>,
    pub status: AccountStatus,
    /// `None` leaves the account's roles untouched
    pub roles: Option<BTreeMap<RoleId, String>>,
}

impl AccountEdit {
    pub fn new(name: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: pass.into(),
            mail: None,
            init: None,
            status: AccountStatus::Enabled,
            roles: None,
        }
    }

    pub fn with_mail(mut self, mail: Option<String>) -> Self {
        self.mail = mail;
        self
    }

    pub fn with_init(mut self, init: Option<String>) -> Self {
        self.init = init;
        self
    }

    pub fn with_roles(mut self, roles: BTreeMap<RoleId, String>) -> Self {
        self.roles = Some(roles);
        self
    }
}

impl std::fmt::Debug for AccountEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountEdit")
            .field("name", &self.name)
            .field("pass", &"[hidden]")
            .field("mail", &self.mail)
            .field("init", &self.init)
            .field("status", &self.status)
            .field("roles", &self.roles)
            .finish()
    }
}
