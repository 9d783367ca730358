//! # Update Command
//!
//! Applies a sparse patch to the item at the given index.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, error::Error, item::ItemPatch, store, ui};

/// Arguments for the update command
pub struct UpdateArgs {
    pub index: usize,
    pub patch: ItemPatch,
}

/// Executes the update command.
///
/// The index is validated before anything is written; a patch that changes
/// nothing still rewrites the file (read-then-write, no diffing).
pub fn execute(config: &Config, args: UpdateArgs) -> Result<()> {
    let mut items = store::load(&config.store_path)?;

    Error::check_index(args.index, items.len())?;

    items[args.index].apply(args.patch);

    store::save(&config.store_path, &items)?;

    ui::print_success("Updated", &items[args.index].title);

    Ok(())
}
