//! # Info Command
//!
//! Reports the store path, whether the file exists, and the item count.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, store};

/// Executes the info command.
pub fn execute(config: &Config) -> Result<()> {
    let exists = config.store_path.exists();
    let items = store::load(&config.store_path)?;

    println!("  {} {}", "Store: ".dimmed(), config.store_path.display());
    println!(
        "  {} {}",
        "Exists:".dimmed(),
        if exists { "yes" } else { "no" }
    );
    println!("  {} {}", "Items: ".dimmed(), items.len());

    Ok(())
}
