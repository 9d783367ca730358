//! # Init and Info Command Tests
//!
//! Tests for the `sup init` and `sup info` commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{add_titled, TestEnv};
use standup::commands;

#[test]
fn test_init_creates_empty_store() {
    let env = TestEnv::new();

    commands::init(&env.config()).expect("init should succeed");

    assert!(env.store_path().exists());
    assert!(env.items().is_empty());
}

#[test]
fn test_init_overwrites_existing_store() {
    let env = TestEnv::new();
    add_titled(&env, "Doomed item");
    assert_eq!(env.items().len(), 1);

    commands::init(&env.config()).expect("init should succeed");

    assert!(env.items().is_empty());
}

#[test]
fn test_init_then_add_works() {
    let env = TestEnv::new();

    commands::init(&env.config()).expect("init should succeed");
    add_titled(&env, "Fresh start");

    assert_eq!(env.items().len(), 1);
}

#[test]
fn test_info_missing_store_is_not_an_error() {
    let env = TestEnv::new();

    commands::info(&env.config()).expect("info should succeed");
    assert!(!env.store_path().exists());
}

#[test]
fn test_info_existing_store() {
    let env = TestEnv::new();
    add_titled(&env, "One");
    add_titled(&env, "Two");

    commands::info(&env.config()).expect("info should succeed");
}

#[test]
fn test_info_corrupt_store_fails() {
    let env = TestEnv::new();
    env.write_store("not: a\nvalid: list\n");

    let err = commands::info(&env.config()).unwrap_err();
    assert!(err.to_string().contains("corrupt store"));
}

#[test]
fn test_global_config_redirects_store() {
    let env = TestEnv::new();
    let alt = env.home_dir.path().join("team.yaml");
    env.write_global_config(&format!("data_file = \"{}\"\n", alt.display()));

    commands::init(&env.config()).expect("init should succeed");

    assert!(alt.exists());
    assert!(!env.store_path().exists());
}
