//! Account entity and related types

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::role::RoleId;
use crate::domain::DomainError;

/// Numeric account identifier (`uid`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not an account identifier", s)))
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Account can sign in
    #[default]
    Enabled,
    /// Account is blocked
    Disabled,
}

impl AccountStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// A user identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    mail: Option<String>,
    /// Mail address the account was registered with
    init: Option<String>,
    #[serde(skip_serializing)]
    password_hash: String,
    status: AccountStatus,
    /// Granted roles, role id -> label
    roles: BTreeMap<RoleId, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            mail: None,
            init: None,
            password_hash: password_hash.into(),
            status: AccountStatus::Enabled,
            roles: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = Some(mail.into());
        self
    }

    pub fn with_roles(mut self, roles: BTreeMap<RoleId, String>) -> Self {
        self.roles = roles;
        self
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mail(&self) -> Option<&str> {
        self.mail.as_deref()
    }

    pub fn init(&self) -> Option<&str> {
        self.init.as_deref()
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn roles(&self) -> &BTreeMap<RoleId, String> {
        &self.roles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    pub fn has_role(&self, role: &RoleId) -> bool {
        self.roles.contains_key(role)
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_mail(&mut self, mail: Option<String>) {
        self.mail = mail;
        self.touch();
    }

    pub fn set_init(&mut self, init: Option<String>) {
        self.init = init;
        self.touch();
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
        self.touch();
    }

    pub fn set_roles(&mut self, roles: BTreeMap<RoleId, String>) {
        self.roles = roles;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// What a save operation writes to: a fresh account or an existing one
#[derive(Debug, Clone)]
pub enum SaveTarget {
    New,
    Existing(Account),
}

impl SaveTarget {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }

    /// Identifier of the account being saved, if it already exists
    pub fn account_id(&self) -> Option<AccountId> {
        match self {
            Self::New => None,
            Self::Existing(account) => Some(account.id()),
        }
    }

    /// Whether `other` is a different account than the one being saved
    pub fn conflicts_with(&self, other: &Account) -> bool {
        self.account_id() != Some(other.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account(id: u64, name: &str) -> Account {
        Account::new(AccountId::new(id), name, "hashed_password")
    }

    #[test]
    fn test_account_id_parse() {
        assert_eq!("42".parse::<AccountId>().unwrap(), AccountId::new(42));
        assert_eq!(" 7 ".parse::<AccountId>().unwrap().value(), 7);
    }

    #[test]
    fn test_account_id_parse_invalid() {
        assert!("".parse::<AccountId>().is_err());
        assert!("abc".parse::<AccountId>().is_err());
        assert!("-1".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_account_creation() {
        let account = create_test_account(1, "alice").with_mail("alice@example.com");

        assert_eq!(account.name(), "alice");
        assert_eq!(account.mail(), Some("alice@example.com"));
        assert!(account.init().is_none());
        assert!(account.is_enabled());
        assert!(account.roles().is_empty());
    }

    #[test]
    fn test_account_serialization_excludes_password() {
        let account = create_test_account(1, "alice");

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AccountStatus::Disabled).unwrap();
        assert_eq!(json, r#""disabled""#);
        assert_eq!(AccountStatus::Enabled.to_string(), "enabled");
    }

    #[test]
    fn test_set_status_touches_timestamp() {
        let mut account = create_test_account(1, "alice");
        let original_updated = account.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        account.set_status(AccountStatus::Disabled);
        assert!(!account.is_enabled());
        assert!(account.updated_at() > original_updated);
    }

    #[test]
    fn test_save_target_conflicts() {
        let alice = create_test_account(1, "alice");
        let bob = create_test_account(2, "bob");

        assert!(SaveTarget::New.conflicts_with(&alice));
        assert!(SaveTarget::Existing(bob.clone()).conflicts_with(&alice));
        assert!(!SaveTarget::Existing(alice.clone()).conflicts_with(&alice));
        assert_eq!(SaveTarget::Existing(bob).account_id(), Some(AccountId::new(2)));
    }
}
