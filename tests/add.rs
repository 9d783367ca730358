//! # Add Command Tests
//!
//! Tests for the `sup add` command.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{add_titled, TestEnv};
use standup::{
    commands::{self, AddArgs},
    item::{datetime, Priority},
};

#[test]
fn test_add_creates_store_when_missing() {
    let env = TestEnv::new();
    assert!(!env.store_path().exists());

    add_titled(&env, "Prepare standup");

    assert!(env.store_path().exists());
    let items = env.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Prepare standup");
}

#[test]
fn test_add_prepends_newest_first() {
    let env = TestEnv::new();

    add_titled(&env, "First");
    add_titled(&env, "Second");
    add_titled(&env, "Third");

    let items = env.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Third");
    assert_eq!(items[1].title, "Second");
    assert_eq!(items[2].title, "First");
}

#[test]
fn test_add_with_all_fields() {
    let env = TestEnv::new();

    commands::add(
        &env.config(),
        AddArgs {
            title: "Standup prep".to_string(),
            description: Some("Collect yesterday's notes".to_string()),
            priority: Some(Priority::Normal),
            due_by: Some(datetime::parse("2024/01/15 09:00:00").unwrap()),
        },
    )
    .expect("add should succeed");

    let items = env.items();
    assert_eq!(items[0].title, "Standup prep");
    assert_eq!(items[0].description.as_deref(), Some("Collect yesterday's notes"));
    assert_eq!(items[0].priority, Some(Priority::Normal));
    assert_eq!(
        items[0].due_by.map(datetime::format).as_deref(),
        Some("2024/01/15 09:00:00")
    );
}

#[test]
fn test_add_encodes_stable_field_names() {
    let env = TestEnv::new();

    commands::add(
        &env.config(),
        AddArgs {
            title: "Standup prep".to_string(),
            description: None,
            priority: Some(Priority::High),
            due_by: Some(datetime::parse("2024/01/15 09:00:00").unwrap()),
        },
    )
    .expect("add should succeed");

    let content = env.read_store();
    assert!(content.contains("title: Standup prep"));
    assert!(content.contains("priority: high"));
    assert!(content.contains("dueBy:"));
    assert!(content.contains("2024/01/15 09:00:00"));
    // Unset optionals are absent from the encoding, not encoded as null.
    assert!(!content.contains("description"));
}

#[test]
fn test_add_preserves_existing_items() {
    let env = TestEnv::new();
    env.write_store("- title: Old task\n  priority: low\n");

    add_titled(&env, "New task");

    let items = env.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "New task");
    assert_eq!(items[1].title, "Old task");
    assert_eq!(items[1].priority, Some(Priority::Low));
}
