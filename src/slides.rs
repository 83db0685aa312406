// SPDX-License-Identifier: MPL-2.0
//! Slide list construction.
//!
//! A slide list is built once per session from the scanned image file names
//! and a snapshot of the slide-details document, and is immutable afterwards.
//! Editing slide details (or rescanning the directory) means rebuilding the
//! whole list.

use crate::error::{Error, Result};
use crate::store::documents::SlideDetailsDoc;
use std::path::Path;

/// File extensions recognized as slides.
const SLIDE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// One presentable image of the slideshow.
///
/// `id` is derived from the slide's position in the full scanned file list
/// (1-based, stable for the session, never reused even when hidden slides
/// are filtered out between it and its neighbors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: usize,
    /// Normalized source path, e.g. `slides/beach.jpg`. Never carries a
    /// leading separator, so it can be used directly as a map key.
    pub src: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    /// The bare file name within the slides directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.src.rsplit('/').next().unwrap_or(&self.src)
    }
}

/// Strips a leading path separator so the result matches the keys used by
/// the rotation and slide-details documents.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Derives a display name from a file name by dropping the extension.
#[must_use]
pub fn display_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// Scans `dir` for slide images and returns their file names sorted
/// alphabetically.
pub fn scan_slides_dir(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(Error::Io(format!(
            "slides directory not found: {}",
            dir.display()
        )));
    }

    let mut file_names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_slide_extension(&path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                file_names.push(name.to_string());
            }
        }
    }

    file_names.sort();
    Ok(file_names)
}

fn has_slide_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_lowercase();
            SLIDE_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Builds the navigable slide list from scanned file names and the
/// slide-details snapshot.
///
/// Titles and descriptions come from the details document when present and
/// fall back to the file stem / an empty string. Slides marked hidden are
/// excluded here, before the list ever reaches the navigation core.
#[must_use]
pub fn build_slide_list(file_names: &[String], details: &SlideDetailsDoc) -> Vec<Slide> {
    file_names
        .iter()
        .enumerate()
        .filter_map(|(index, file_name)| {
            let src = format!("slides/{file_name}");
            let detail = details.get(&src);

            if detail.is_some_and(|d| d.is_hidden.unwrap_or(false)) {
                return None;
            }

            let fallback = display_name(file_name);
            let title = detail
                .and_then(|d| d.title.clone())
                .unwrap_or_else(|| fallback.to_string());
            let description = detail
                .and_then(|d| d.description.clone())
                .unwrap_or_default();

            Some(Slide {
                id: index + 1,
                src,
                title,
                description,
            })
        })
        .collect()
}
