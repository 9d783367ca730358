//! # standup
//!
//! A minimal command-line standup task list stored in a single YAML file.
//!
//! The whole list lives in one human-readable file (default:
//! `~/.standup.yaml`). Every invocation loads the list fresh, computes in
//! memory, and rewrites the file in full for mutating commands; the file is
//! the sole source of truth.
//!
//! ## Features
//!
//! - **Single-File YAML Storage**: the full list in one grep-friendly file
//! - **Positional Addressing**: items referenced by zero-based index
//! - **Sparse Updates**: set or clear each optional field independently
//!
//! ## Known limitation
//!
//! Two simultaneous invocations against the same store race last-write-wins:
//! there is no locking, detection, or merge.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod store;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::Error;
pub use item::{FieldPatch, Item, ItemPatch, Priority};
