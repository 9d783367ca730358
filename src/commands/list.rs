//! # List Command
//!
//! Lists every item with its current index.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, store, ui};

/// Executes the list command.
pub fn execute(config: &Config) -> Result<()> {
    let items = store::load(&config.store_path)?;

    ui::print_list(&items);

    Ok(())
}
