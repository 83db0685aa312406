// SPDX-License-Identifier: MPL-2.0
//! Flat JSON document store.
//!
//! The presentation data (rotations, slide details, the selected
//! transition, timer settings, and the active theme) lives in one JSON
//! file per document under the app data directory. Semantics are CRUD by
//! whole-file overwrite: last write wins, no locking, no conflict
//! detection. A document that is missing or unreadable degrades to its
//! default value with a log line; it never stops the slideshow.

pub mod documents;

use crate::app::paths;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

fn document_path(base_dir: Option<PathBuf>, file_name: &str) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(file_name);
        path
    })
}

/// Reads a document, falling back to `T::default()` when the file is
/// missing, unreadable, or fails to parse.
pub(crate) fn read_or_default<T>(base_dir: Option<PathBuf>, file_name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(path) = document_path(base_dir, file_name) else {
        return T::default();
    };
    if !path.exists() {
        return T::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("ignoring malformed document {}: {}", path.display(), err);
                T::default()
            }
        },
        Err(err) => {
            log::warn!("failed to read document {}: {}", path.display(), err);
            T::default()
        }
    }
}

/// Writes a document as pretty-printed JSON, creating the data directory on
/// first use.
pub(crate) fn write_document<T>(base_dir: Option<PathBuf>, file_name: &str, value: &T) -> Result<()>
where
    T: Serialize,
{
    let Some(path) = document_path(base_dir, file_name) else {
        return Err(crate::error::Error::Io(
            "no data directory available".to_string(),
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    fs::write(&path, content)?;
    Ok(())
}
