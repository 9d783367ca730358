//! # Errors
//!
//! Domain error types for the standup store and command processing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

/// Errors with a defined user-facing meaning.
///
/// Everything else (unreadable files, unwritable paths) is propagated as a
/// plain I/O error with path context via `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store file exists but its contents do not decode.
    ///
    /// This is fatal: there is no recovery, retry, or partial read.
    #[error("corrupt store file {}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    /// An index outside `0..len` was given to `view`, `update` or `remove`.
    ///
    /// Reported as a plain message; the store is never modified.
    #[error("invalid index {index}: list has {len} item{}", plural(.len))]
    InvalidIndex { index: usize, len: usize },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

impl Error {
    /// Bound check shared by every index-taking command.
    pub const fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::InvalidIndex { index, len })
        }
    }
}
