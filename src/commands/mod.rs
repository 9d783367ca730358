//! # Commands
//!
//! CLI command implementations for standup.
//!
//! Each command loads the list fresh from the store, computes in memory, and
//! (for mutating commands) rewrites the whole file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod info;
pub mod init;
pub mod list;
pub mod remove;
pub mod update;
pub mod view;

pub use self::{
    add::{execute as add, AddArgs},
    completions::execute as completions,
    info::execute as info,
    init::execute as init,
    list::execute as list,
    remove::execute as remove,
    update::{execute as update, UpdateArgs},
    view::execute as view,
};
