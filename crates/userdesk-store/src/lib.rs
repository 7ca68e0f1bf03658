// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod detail;
mod local;
mod seed;

pub use detail::{load_user_details, placeholder_details, profile_extras};
pub use local::{LocalStore, MemoryStore, load_stashed_user, stash_user, user_key};
pub use seed::{DEFAULT_USER_COUNT, UserFaker, generate_users};

pub const APP_NAME: &str = "userdesk";
