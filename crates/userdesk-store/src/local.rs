// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use userdesk_app::{User, UserId};

/// String key/value area shared by the screens of one session.
///
/// The shell owns the store and lends it to whichever view needs it; views
/// never reach for it on their own.
pub trait LocalStore {
    fn put(&mut self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn user_key(id: &UserId) -> String {
    format!("user_{id}")
}

pub fn stash_user(store: &mut dyn LocalStore, user: &User) -> Result<()> {
    let encoded = serde_json::to_string(user)
        .with_context(|| format!("encode user {} for handoff", user.id))?;
    store.put(&user_key(&user.id), encoded);
    tracing::debug!(user = %user.id, "user stashed for detail view");
    Ok(())
}

/// Reads a handed-off user. Undecodable entries count as absent.
pub fn load_stashed_user(store: &dyn LocalStore, id: &UserId) -> Option<User> {
    let raw = store.get(&user_key(id))?;
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(error) => {
            tracing::warn!(user = %id, %error, "discarding unreadable stored user");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LocalStore, MemoryStore, user_key};
    use userdesk_app::UserId;

    #[test]
    fn keys_are_prefixed_with_user() {
        assert_eq!(user_key(&UserId::from("user-5")), "user_user-5");
    }

    #[test]
    fn put_overwrites_and_clear_empties() {
        let mut store = MemoryStore::new();
        store.put("a", "1".to_owned());
        store.put("a", "2".to_owned());
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);
    }
}
