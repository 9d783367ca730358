//! # UI Utilities
//!
//! Terminal output for item lists and single items, plus shared helpers for
//! success messages and placeholder rendering.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use owo_colors::OwoColorize;

use crate::{
    constants::{
        NOT_SET_PLACEHOLDER, UI_COL_INDEX_WIDTH, UI_COL_PRIORITY_WIDTH, UI_TITLE_TRUNCATE_LEN,
    },
    item::{datetime, Item},
};

// =============================================================================
// Item Rendering
// =============================================================================

/// Prints the full list as an indexed table.
///
/// Columns: index, title (truncated), priority, due date. Optional fields
/// render the fixed placeholder when unset.
pub fn print_list(items: &[Item]) {
    if items.is_empty() {
        println!("{}", "No items.".dimmed());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        println!(
            "{:<iw$} {:<tw$}  {:<pw$}  {}",
            index,
            truncate(&item.title, UI_TITLE_TRUNCATE_LEN),
            display_or_placeholder(item.priority),
            display_or_placeholder(item.due_by.map(datetime::format)),
            iw = UI_COL_INDEX_WIDTH,
            tw = UI_TITLE_TRUNCATE_LEN,
            pw = UI_COL_PRIORITY_WIDTH,
        );
    }
}

/// Prints a single item as a labeled detail block.
pub fn print_item(index: usize, item: &Item) {
    println!("[{index}] {}", item.title.bold());
    println!(
        "  {} {}",
        "Description:".dimmed(),
        display_or_placeholder(item.description.as_deref())
    );
    println!(
        "  {} {}",
        "Priority:   ".dimmed(),
        display_or_placeholder(item.priority)
    );
    println!(
        "  {} {}",
        "Due by:     ".dimmed(),
        display_or_placeholder(item.due_by.map(datetime::format))
    );
}

// =============================================================================
// Success Messages
// =============================================================================

/// Prints a success message for a mutated item.
///
/// Format: `✓ {verb} item: {title}`
pub fn print_success(verb: &str, title: &str) {
    println!("{} {verb} item: {title}", "✓".green());
}

// =============================================================================
// String Utilities
// =============================================================================

/// Renders an optional display value, using the fixed placeholder when unset.
pub fn display_or_placeholder<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_SET_PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Truncates a string to the specified maximum length, adding ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}…")
    }
}
