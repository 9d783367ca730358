//! # Add Command
//!
//! Adds a new item to the front of the list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::{
    config::Config,
    item::{Item, Priority},
    store, ui,
};

/// Arguments for the add command
pub struct AddArgs {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_by: Option<NaiveDateTime>,
}

/// Executes the add command.
pub fn execute(config: &Config, args: AddArgs) -> Result<()> {
    let mut items = store::load(&config.store_path)?;

    let item = Item {
        title: args.title,
        description: args.description,
        priority: args.priority,
        due_by: args.due_by,
    };

    // Newest item always sits at index 0.
    items.insert(0, item);

    store::save(&config.store_path, &items)?;

    ui::print_success("Added", &items[0].title);

    Ok(())
}
