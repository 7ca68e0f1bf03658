// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::path::PathBuf;
use userdesk_app::{User, UserId, UserStatus};

const ORGANIZATIONS: [&str; 3] = ["Lendsqr", "Lendstar", "Irorun"];
const NAMES: [&str; 5] = [
    "Grace Effiom",
    "Debby Ogana",
    "Tosin Dokunmu",
    "Peter Williams",
    "Jane Smith",
];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A user whose every field is derived from `index`, so assertions can
/// predict values without a lookup table.
pub fn sample_user(index: usize, status: UserStatus) -> User {
    User {
        id: UserId::new(format!("user-{index}")),
        organization: ORGANIZATIONS[index % ORGANIZATIONS.len()].to_owned(),
        username: NAMES[index % NAMES.len()].to_owned(),
        email: format!("user{index}@example.com"),
        phone_number: format!("080{:08}", 10_000_000 + index),
        date_joined: format!(
            "{} {}, 2020, 12:00 AM",
            MONTHS[index % MONTHS.len()],
            index % 28 + 1
        ),
        status,
    }
}

/// `count` users cycling through every status.
pub fn sample_users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|index| sample_user(index, UserStatus::ALL[index % UserStatus::ALL.len()]))
        .collect()
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

pub fn write_temp_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let (dir, path) = temp_config_path()?;
    std::fs::write(&path, content)
        .with_context(|| format!("write temp config {}", path.display()))?;
    Ok((dir, path))
}
