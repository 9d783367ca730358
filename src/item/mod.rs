//! # Item
//!
//! Represents a standup item (task) and the sparse patch applied by `update`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod datetime;

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Item priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Normal => write!(f, "Normal"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Accepts numeric codes (`1`/`2`/`3`) or names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "low" => Ok(Self::Low),
            "2" | "normal" => Ok(Self::Normal),
            "3" | "high" => Ok(Self::High),
            other => Err(format!(
                "invalid priority '{other}' (expected 1/2/3 or low/normal/high)"
            )),
        }
    }
}

/// A single standup item.
///
/// Only the title is mandatory; the on-disk encoding omits unset fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short task title
    pub title: String,

    /// Free-form longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Local due date-time, no timezone
    #[serde(
        default,
        with = "datetime::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_by: Option<NaiveDateTime>,
}

impl Item {
    /// Creates a new item with only a title set.
    pub const fn new(title: String) -> Self {
        Self {
            title,
            description: None,
            priority: None,
            due_by: None,
        }
    }

    /// Applies a sparse patch in place.
    ///
    /// `Keep` fields retain their stored value; clearing an already-unset
    /// field is a no-op.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        patch.description.apply_to(&mut self.description);
        patch.priority.apply_to(&mut self.priority);
        patch.due_by.apply_to(&mut self.due_by);
    }
}

/// Three-state patch for a single optional field.
///
/// Distinguishes "leave the stored value alone" from "reset to unset", which
/// a plain `Option<Option<T>>` would blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Leave the stored value as is
    Keep,
    /// Replace the stored value
    Set(T),
    /// Reset the field to unset
    Clear,
}

// Manual impl: the derive would demand `T: Default`, which priorities and
// date-times do not have.
impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldPatch<T> {
    /// Builds a patch from the mutually exclusive `--<field>` / `--clear-<field>`
    /// flag pair. The CLI layer guarantees at most one of the two is present.
    pub fn from_flags(value: Option<T>, clear: bool) -> Self {
        if clear {
            Self::Clear
        } else {
            value.map_or(Self::Keep, Self::Set)
        }
    }

    /// Applies this patch to a stored field.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = Some(value),
            Self::Clear => *slot = None,
        }
    }
}

/// Sparse patch for one item, as assembled by the `update` command.
///
/// The title carries a plain set-or-keep option: a stored item always has a
/// title, so there is no clear state for it.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: FieldPatch<String>,
    pub priority: FieldPatch<Priority>,
    pub due_by: FieldPatch<NaiveDateTime>,
}
