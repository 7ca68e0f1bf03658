// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use userdesk_app::{UserId, UserStatus};
use userdesk_store::{
    LocalStore, MemoryStore, generate_users, load_stashed_user, load_user_details,
    placeholder_details, stash_user, user_key,
};
use userdesk_testkit::sample_user;

#[test]
fn stashed_user_is_read_back_by_the_detail_loader() -> Result<()> {
    let mut store = MemoryStore::new();
    let user = sample_user(12, UserStatus::Blacklisted);
    stash_user(&mut store, &user)?;

    let details = load_user_details(&store, &user.id);
    assert!(details.from_store);
    assert_eq!(details.user, user);
    assert_eq!(details.extras.bank, "Providus Bank");
    assert_eq!(details.extras.guarantors.len(), 2);
    assert_eq!(details.tier, 1);
    Ok(())
}

#[test]
fn stored_payload_uses_original_field_names() -> Result<()> {
    let mut store = MemoryStore::new();
    let user = sample_user(3, UserStatus::Active);
    stash_user(&mut store, &user)?;

    let raw = store.get("user_user-3").expect("stored entry");
    assert!(raw.contains("\"phoneNumber\""));
    assert!(raw.contains("\"dateJoined\""));
    assert!(raw.contains("\"id\":\"user-3\""));
    Ok(())
}

#[test]
fn missing_user_is_synthesized_with_requested_id() {
    let store = MemoryStore::new();
    let id = UserId::from("user-404");
    let details = load_user_details(&store, &id);

    assert!(!details.from_store);
    assert_eq!(details.user.id, id);
    for (label, value) in details.required_fields() {
        assert!(!value.trim().is_empty(), "{label} should not be empty");
    }
}

#[test]
fn enrichment_is_deterministic() -> Result<()> {
    let mut store = MemoryStore::new();
    let user = sample_user(8, UserStatus::Pending);
    stash_user(&mut store, &user)?;

    let first = load_user_details(&store, &user.id);
    let second = load_user_details(&store, &user.id);
    assert_eq!(first, second);
    assert_eq!(first.extras, placeholder_details(&user.id).extras);
    Ok(())
}

#[test]
fn stored_user_with_blank_field_is_still_shown() -> Result<()> {
    let mut store = MemoryStore::new();
    let mut user = sample_user(6, UserStatus::Inactive);
    user.email.clear();
    stash_user(&mut store, &user)?;

    let details = load_user_details(&store, &user.id);
    assert!(details.from_store);
    let blank: Vec<&str> = details
        .required_fields()
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect();
    assert_eq!(blank, vec!["email"]);
    Ok(())
}

#[test]
fn unreadable_entry_falls_back_to_placeholder() {
    let mut store = MemoryStore::new();
    let id = UserId::from("user-1");
    store.put(&user_key(&id), "{not json".to_owned());

    assert_eq!(load_stashed_user(&store, &id), None);
    let details = load_user_details(&store, &id);
    assert!(!details.from_store);
    assert_eq!(details.user.username, "Grace Effiom");
}

#[test]
fn clear_drops_every_handoff() -> Result<()> {
    let mut store = MemoryStore::new();
    for index in 1..=3 {
        stash_user(&mut store, &sample_user(index, UserStatus::Active))?;
    }
    assert_eq!(store.len(), 3);

    store.clear();
    let details = load_user_details(&store, &UserId::from("user-2"));
    assert!(!details.from_store);
    Ok(())
}

#[test]
fn generated_users_are_reproducible_and_unique() -> Result<()> {
    let first = generate_users(500, 42)?;
    let second = generate_users(500, 42)?;
    assert_eq!(first, second);
    assert_eq!(first.len(), 500);
    assert_eq!(first[0].id.as_str(), "user-1");
    assert_eq!(first[499].email, "user500@example.com");

    let mut ids: Vec<&str> = first.iter().map(|user| user.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 500);
    Ok(())
}

#[test]
fn generated_users_cover_every_status() -> Result<()> {
    let users = generate_users(200, 7)?;
    for status in UserStatus::ALL {
        assert!(
            users.iter().any(|user| user.status == status),
            "expected at least one {} user",
            status.as_str()
        );
    }
    Ok(())
}
