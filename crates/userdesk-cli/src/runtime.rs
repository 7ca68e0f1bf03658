// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use userdesk_app::{User, UserDetails, UserId};
use userdesk_store::{LocalStore, MemoryStore};

/// Serves a fixed set of generated users and keeps the session's handoff
/// entries in memory.
pub struct MockRuntime {
    users: Vec<User>,
    store: MemoryStore,
}

impl MockRuntime {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            store: MemoryStore::new(),
        }
    }
}

impl userdesk_tui::AppRuntime for MockRuntime {
    fn load_users(&mut self) -> Result<Vec<User>> {
        tracing::debug!(count = self.users.len(), "serving mock users");
        Ok(self.users.clone())
    }

    fn stash_user(&mut self, user: &User) -> Result<()> {
        userdesk_store::stash_user(&mut self.store, user)
    }

    fn load_user_details(&mut self, id: &UserId) -> UserDetails {
        userdesk_store::load_user_details(&self.store, id)
    }

    fn clear_local_state(&mut self) -> Result<()> {
        let dropped = self.store.len();
        self.store.clear();
        tracing::info!(dropped, "local state cleared");
        Ok(())
    }

    fn submit_search(&mut self, query: &str) -> Result<()> {
        tracing::info!(query, "header search submitted");
        Ok(())
    }
}
