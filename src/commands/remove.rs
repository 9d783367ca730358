//! # Remove Command
//!
//! Deletes the item at the given index.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, error::Error, store, ui};

/// Executes the remove command.
///
/// Items after the removed index shift down by one.
pub fn execute(config: &Config, index: usize) -> Result<()> {
    let mut items = store::load(&config.store_path)?;

    Error::check_index(index, items.len())?;

    let removed = items.remove(index);

    store::save(&config.store_path, &items)?;

    ui::print_success("Removed", &removed.title);

    Ok(())
}
