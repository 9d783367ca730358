//! # Configuration
//!
//! Resolves the store file path from the `--file` flag, the optional global
//! config at `~/.config/standup/config`, and the built-in default
//! `~/.standup.yaml`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STORE_FILENAME, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and store lookups to a
    /// temp directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect path resolution without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration stored at `~/.config/standup/config` (TOML).
///
/// Entirely optional: a missing file yields defaults; a malformed one is an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Store file path override (default: `~/.standup.yaml`)
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/standup/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the global config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }
}

/// Resolved configuration passed into every command.
///
/// There is no global mutable state: commands receive this by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the store file
    pub store_path: PathBuf,
}

impl Config {
    /// Resolves the store path.
    ///
    /// Precedence: `--file` flag > `data_file` in the global config >
    /// `~/.standup.yaml`.
    pub fn resolve(file_flag: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = file_flag {
            return Ok(Self { store_path: path });
        }

        let global = GlobalConfig::load()?;
        if let Some(path) = global.data_file {
            return Ok(Self { store_path: path });
        }

        let home =
            home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self {
            store_path: home.join(DEFAULT_STORE_FILENAME),
        })
    }
}
