//! # Test Harness
//!
//! Provides utilities for integration testing standup without affecting user
//! configuration. Uses thread-local storage instead of environment variables
//! to avoid any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::{
    fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use standup::{commands, config::Config, item::Item, set_home_override, store};

/// Global lock to ensure tests run sequentially.
/// This prevents interference between tests that resolve the default store path.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that redirects the home directory (and with it both the
/// global config lookup and the default store path) to a temp directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect path resolution (no env var
    /// modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");

        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the resolved configuration for this environment.
    pub fn config(&self) -> Config {
        Config::resolve(None).expect("Failed to resolve config")
    }

    /// Returns the path of the store file inside the temp home.
    pub fn store_path(&self) -> PathBuf {
        self.home_dir.path().join(".standup.yaml")
    }

    /// Reads the raw store file content.
    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).expect("Failed to read store file")
    }

    /// Writes raw content to the store file.
    pub fn write_store(&self, content: &str) {
        fs::write(self.store_path(), content).expect("Failed to write store file");
    }

    /// Loads the decoded item list from the store file.
    pub fn items(&self) -> Vec<Item> {
        store::load(&self.store_path()).expect("Failed to load store")
    }

    /// Writes the global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self
            .home_dir
            .path()
            .join(".config")
            .join("standup")
            .join("config");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Adds an item with only a title set.
pub fn add_titled(env: &TestEnv, title: &str) {
    commands::add(
        &env.config(),
        commands::AddArgs {
            title: title.to_string(),
            description: None,
            priority: None,
            due_by: None,
        },
    )
    .expect("add should succeed");
}

/// A two-item store fixture: index 0 holds "A", index 1 holds "B".
pub fn write_two_item_store(env: &TestEnv) {
    env.write_store(
        "- title: A\n\
         - title: B\n",
    );
}
