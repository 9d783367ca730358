//! # Store
//!
//! Single-file persistence for the standup item list.
//!
//! The whole list is decoded on load and re-encoded on every mutation; the
//! file is the sole source of truth between invocations. Two simultaneous
//! invocations against the same file race last-write-wins; there is no
//! locking or conflict detection (known limitation).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::ErrorKind, path::Path};

use anyhow::{Context, Result};

use crate::{error::Error, item::Item};

/// Loads the full item list from the store file.
///
/// A missing file is the empty list, not an error. A file that exists but
/// does not decode is fatal ([`Error::CorruptStore`]).
pub fn load(path: &Path) -> Result<Vec<Item>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read store: {}", path.display()))
        }
    };

    serde_yml::from_str(&content).map_err(|source| {
        Error::CorruptStore {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Encodes the full item list and overwrites the store file.
pub fn save(path: &Path, items: &[Item]) -> Result<()> {
    let content = serde_yml::to_string(&items).context("Failed to encode store")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write store: {}", path.display()))
}
