//! # Constants
//!
//! Centralized constants for magic values used throughout standup.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for title display in lists (truncated with ellipsis).
pub const UI_TITLE_TRUNCATE_LEN: usize = 40;

/// Column width for the index in list display.
pub const UI_COL_INDEX_WIDTH: usize = 4;

/// Column width for priority in list display.
pub const UI_COL_PRIORITY_WIDTH: usize = 8;

/// Placeholder rendered for optional fields that are not set.
pub const NOT_SET_PLACEHOLDER: &str = "(not set)";

// =============================================================================
// Store Format
// =============================================================================

/// Date-time format used both on disk and in all displayed output.
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Default store file name (inside the user's home directory).
pub const DEFAULT_STORE_FILENAME: &str = ".standup.yaml";

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "standup";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
