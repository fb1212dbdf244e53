//! Session Storage
//!
//! The session lives in two string keys: `token` and `user` (JSON).
//! The browser backs this with `localStorage`; tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key/value store for the persisted session.
///
/// Writes are best effort; a full or disabled store just loses the value.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn token(storage: &impl SessionStorage) -> Option<String> {
    storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn is_authenticated(storage: &impl SessionStorage) -> bool {
    token(storage).is_some()
}

/// Stored user; a corrupt value reads as no user
pub fn current_user(storage: &impl SessionStorage) -> Option<User> {
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable stored user");
            None
        }
    }
}

pub fn store_token(storage: &impl SessionStorage, token: &str) {
    storage.set(TOKEN_KEY, token);
}

pub fn store_user(storage: &impl SessionStorage, user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => storage.set(USER_KEY, &json),
        Err(e) => tracing::error!(error = %e, "failed to serialize user"),
    }
}

pub fn store_auth(storage: &impl SessionStorage, token: &str, user: &User) {
    store_token(storage, token);
    store_user(storage, user);
}

pub fn clear(storage: &impl SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_user;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_store_and_read_back() {
        let storage = MemoryStorage::new();
        assert!(!is_authenticated(&storage));

        store_auth(&storage, "abc", &sample_user());

        assert_eq!(token(&storage).as_deref(), Some("abc"));
        assert_eq!(current_user(&storage), Some(sample_user()));
        assert!(is_authenticated(&storage));
    }

    #[test]
    fn test_corrupt_user_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "{not json");
        assert_eq!(current_user(&storage), None);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        store_auth(&storage, "abc", &sample_user());
        storage.set("theme", "dark");

        clear(&storage);

        assert_eq!(storage.len(), 1);
        assert!(!is_authenticated(&storage));
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        store_token(&other, "shared");
        assert_eq!(token(&storage).as_deref(), Some("shared"));
    }
}
