// SPDX-License-Identifier: MPL-2.0
//! Slide image loading and EXIF orientation detection.
//!
//! Loading happens off the update loop via `Task::perform`. Orientation is
//! read from the same bytes the pixels came from; a missing or unreadable
//! tag (PNGs, stripped JPEGs) degrades to the normal orientation rather
//! than an error.

use crate::error::{Error, Result};
use crate::ui::state::ExifOrientation;
use iced::widget::image::Handle;
use image_rs::GenericImageView;
use std::io::Cursor;
use std::path::PathBuf;

/// Decoded pixels of one slide, ready for the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    /// Horizontally flipped pixels, produced only when the EXIF orientation
    /// calls for mirroring. The renderer swaps to this handle while the
    /// resolved transform says `mirrored`.
    pub mirrored_handle: Option<Handle>,
    pub width: u32,
    pub height: u32,
}

/// Result of loading one slide.
#[derive(Debug, Clone)]
pub struct LoadedSlide {
    pub image: ImageData,
    pub orientation: ExifOrientation,
}

/// Loads and decodes a slide image and reads its EXIF orientation.
pub async fn load_slide(path: PathBuf) -> Result<LoadedSlide> {
    let bytes = std::fs::read(&path).map_err(|e| Error::Io(e.to_string()))?;

    let decoded = image_rs::load_from_memory(&bytes)
        .map_err(|e| Error::Io(format!("failed to decode {}: {}", path.display(), e)))?;
    let (width, height) = decoded.dimensions();

    let orientation = read_orientation(&bytes);

    let mirrored_handle = if orientation.transform().mirrored {
        let flipped = decoded.fliph().to_rgba8();
        Some(Handle::from_rgba(width, height, flipped.into_vec()))
    } else {
        None
    };

    let rgba = decoded.to_rgba8();
    let handle = Handle::from_rgba(width, height, rgba.into_vec());

    Ok(LoadedSlide {
        image: ImageData {
            handle,
            mirrored_handle,
            width,
            height,
        },
        orientation,
    })
}

/// Reads the EXIF orientation tag, treating every failure as "upright".
fn read_orientation(bytes: &[u8]) -> ExifOrientation {
    let mut reader = Cursor::new(bytes);
    let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
        return ExifOrientation::NORMAL;
    };

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(ExifOrientation::new)
        .unwrap_or(ExifOrientation::NORMAL)
}
