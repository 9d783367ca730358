//! # Init Command
//!
//! Initializes the store with an empty list, overwriting any existing file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, store};

/// Executes the init command.
pub fn execute(config: &Config) -> Result<()> {
    store::save(&config.store_path, &[])?;

    println!("{} Initialized empty standup list", "✓".green());
    println!("  {} {}", "Store:".dimmed(), config.store_path.display());

    Ok(())
}
