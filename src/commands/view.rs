//! # View Command
//!
//! Displays the single item at the given index.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, error::Error, store, ui};

/// Executes the view command.
pub fn execute(config: &Config, index: usize) -> Result<()> {
    let items = store::load(&config.store_path)?;

    Error::check_index(index, items.len())?;

    ui::print_item(index, &items[index]);

    Ok(())
}
