//! In-memory account store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::password::{Argon2Hasher, PasswordHasher};
use crate::domain::{Account, AccountEdit, AccountId, AccountStore, DomainError, SaveTarget};

#[derive(Debug)]
struct StoreState {
    accounts: HashMap<AccountId, Account>,
    /// name -> owning account
    names: HashMap<String, AccountId>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of [`AccountStore`]
///
/// Identifiers are assigned from 1 upwards. Name uniqueness is re-checked
/// under the write lock, so two racing saves of the same name cannot both
/// succeed.
#[derive(Debug)]
pub struct InMemoryAccountStore {
    state: RwLock<StoreState>,
    hasher: Arc<dyn PasswordHasher>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::with_hasher(Arc::new(Argon2Hasher::new()))
    }

    pub fn with_hasher(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            hasher,
        }
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.state.read().await.accounts.len()
    }

    /// Check a password against the stored hash of the named account
    pub async fn verify_password(&self, name: &str, password: &str) -> bool {
        let state = self.state.read().await;

        state
            .names
            .get(name)
            .and_then(|id| state.accounts.get(id))
            .is_some_and(|account| self.hasher.verify(password, account.password_hash()))
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_edit(account: &mut Account, edit: AccountEdit, password_hash: String) {
    account.set_name(edit.name);
    account.set_password_hash(password_hash);
    account.set_mail(edit.mail);
    account.set_init(edit.init);
    account.set_status(edit.status);

    if let Some(roles) = edit.roles {
        account.set_roles(roles);
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;

        Ok(state
            .names
            .get(name)
            .and_then(|id| state.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn save(&self, target: &SaveTarget, edit: AccountEdit) -> Result<Account, DomainError> {
        // Hash before taking the write lock
        let password_hash = self.hasher.hash(&edit.pass)?;

        let mut state = self.state.write().await;

        if let Some(owner) = state.names.get(&edit.name) {
            if target.account_id() != Some(*owner) {
                return Err(DomainError::conflict(format!(
                    "Account name '{}' already exists",
                    edit.name
                )));
            }
        }

        let account = match target {
            SaveTarget::New => {
                let id = AccountId::new(state.next_id);
                state.next_id += 1;

                let mut account = Account::new(id, edit.name.clone(), String::new());
                apply_edit(&mut account, edit, password_hash);
                account
            }
            SaveTarget::Existing(existing) => {
                let mut account = state
                    .accounts
                    .get(&existing.id())
                    .cloned()
                    .ok_or_else(|| {
                        DomainError::not_found(format!("Account '{}' not found", existing.id()))
                    })?;

                state.names.remove(account.name());
                apply_edit(&mut account, edit, password_hash);
                account
            }
        };

        state.names.insert(account.name().to_string(), account.id());
        state.accounts.insert(account.id(), account.clone());

        debug!(account_id = %account.id(), name = %account.name(), "Account stored");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{AccountStatus, RoleId};

    fn edit(name: &str) -> AccountEdit {
        AccountEdit::new(name, "secret-pass").with_mail(Some(format!("{}@example.com", name)))
    }

    fn roles(ids: &[&str]) -> BTreeMap<RoleId, String> {
        ids.iter()
            .map(|id| (RoleId::new(*id), id.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_save_new_assigns_sequential_ids() {
        let store = InMemoryAccountStore::new();

        let alice = store.save(&SaveTarget::New, edit("alice")).await.unwrap();
        let bob = store.save(&SaveTarget::New, edit("bob")).await.unwrap();

        assert_eq!(alice.id(), AccountId::new(1));
        assert_eq!(bob.id(), AccountId::new(2));
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_new_account_without_roles_has_empty_role_set() {
        let store = InMemoryAccountStore::new();

        let account = store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        assert!(account.roles().is_empty());
        assert_eq!(account.status(), AccountStatus::Enabled);
        assert_eq!(account.mail(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let store = InMemoryAccountStore::new();

        let account = store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        assert_ne!(account.password_hash(), "secret-pass");
        assert!(store.verify_password("alice", "secret-pass").await);
        assert!(!store.verify_password("alice", "wrong").await);
    }

    #[tokio::test]
    async fn test_find_by_name_and_id() {
        let store = InMemoryAccountStore::new();
        let saved = store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        let by_name = store.find_by_name("alice").await.unwrap().unwrap();
        let by_id = store.find_by_id(saved.id()).await.unwrap().unwrap();

        assert_eq!(by_name.id(), saved.id());
        assert_eq!(by_id.name(), "alice");
        assert!(store.find_by_name("nobody").await.unwrap().is_none());
        assert!(store.find_by_id(AccountId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = InMemoryAccountStore::new();
        store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        let result = store.save(&SaveTarget::New, edit("alice")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let store = InMemoryAccountStore::new();
        let alice = store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        let updated = store
            .save(&SaveTarget::Existing(alice.clone()), edit("alice"))
            .await
            .unwrap();

        assert_eq!(updated.id(), alice.id());
    }

    #[tokio::test]
    async fn test_rename_updates_index() {
        let store = InMemoryAccountStore::new();
        let alice = store.save(&SaveTarget::New, edit("alice")).await.unwrap();

        store
            .save(&SaveTarget::Existing(alice), edit("alicia"))
            .await
            .unwrap();

        assert!(store.find_by_name("alice").await.unwrap().is_none());
        assert!(store.find_by_name("alicia").await.unwrap().is_some());

        // The old name is free again
        store.save(&SaveTarget::New, edit("alice")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_without_roles_keeps_existing_roles() {
        let store = InMemoryAccountStore::new();
        let alice = store
            .save(&SaveTarget::New, edit("alice").with_roles(roles(&["editor"])))
            .await
            .unwrap();

        let updated = store
            .save(&SaveTarget::Existing(alice), edit("alice"))
            .await
            .unwrap();

        assert!(updated.has_role(&RoleId::new("editor")));
    }

    #[tokio::test]
    async fn test_update_with_roles_replaces_roles() {
        let store = InMemoryAccountStore::new();
        let alice = store
            .save(&SaveTarget::New, edit("alice").with_roles(roles(&["editor"])))
            .await
            .unwrap();

        let updated = store
            .save(
                &SaveTarget::Existing(alice),
                edit("alice").with_roles(roles(&["administrator"])),
            )
            .await
            .unwrap();

        assert!(updated.has_role(&RoleId::new("administrator")));
        assert!(!updated.has_role(&RoleId::new("editor")));
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let store = InMemoryAccountStore::new();
        let ghost = Account::new(AccountId::new(42), "ghost", "hash");

        let result = store.save(&SaveTarget::Existing(ghost), edit("ghost")).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
