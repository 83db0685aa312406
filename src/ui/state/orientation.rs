// SPDX-License-Identifier: MPL-2.0
//! EXIF orientation codes and their render transforms.
//!
//! Cameras record one of eight orientation codes describing how the stored
//! pixels relate to the scene. Code 1 (or a missing/unreadable tag) means the
//! pixels are already upright.

use crate::ui::state::{RotationAngle, Transform};

/// An EXIF orientation code in the standard 1–8 range.
///
/// Out-of-range values collapse to [`ExifOrientation::NORMAL`] at
/// construction, so downstream code never has to re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExifOrientation(u8);

impl ExifOrientation {
    /// Code 1: pixels are upright, no transform needed.
    pub const NORMAL: Self = Self(1);

    /// Creates an orientation from a raw tag value.
    #[must_use]
    pub fn new(code: u32) -> Self {
        match code {
            1..=8 => Self(code as u8),
            _ => Self::NORMAL,
        }
    }

    /// Returns the raw 1–8 code.
    #[must_use]
    pub fn code(self) -> u8 {
        self.0
    }

    /// Maps this code through the standard EXIF transform table.
    #[must_use]
    pub fn transform(self) -> Transform {
        let (degrees, mirrored) = match self.0 {
            2 => (0, true),
            3 => (180, false),
            4 => (180, true),
            5 => (90, true),
            6 => (90, false),
            7 => (270, true),
            8 => (270, false),
            // 1 and anything the constructor normalized away
            _ => (0, false),
        };
        Transform {
            rotation: RotationAngle::new(degrees),
            mirrored,
        }
    }

    /// Returns true for codes 5–8, where the camera was held sideways and the
    /// displayed aspect ratio swaps.
    #[must_use]
    pub fn is_sideways(self) -> bool {
        (5..=8).contains(&self.0)
    }
}

impl Default for ExifOrientation {
    fn default() -> Self {
        Self::NORMAL
    }
}
