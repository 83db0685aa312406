// SPDX-License-Identifier: MPL-2.0
//! Resolved render transform for a slide.

use crate::ui::state::RotationAngle;

/// The single transform applied to a rendered slide: a quarter-turn rotation
/// plus an optional horizontal mirror.
///
/// This is the end product of rotation resolution: whether the source was a
/// manual override or an EXIF orientation code, the renderer only ever sees
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    /// Clockwise rotation to apply.
    pub rotation: RotationAngle,
    /// Whether the image is mirrored left-to-right before rotating.
    pub mirrored: bool,
}

impl Transform {
    /// The identity transform (no rotation, no mirror).
    pub const IDENTITY: Self = Self {
        rotation: RotationAngle::ZERO,
        mirrored: false,
    };

    /// A pure rotation with no mirroring.
    #[must_use]
    pub fn rotation(angle: RotationAngle) -> Self {
        Self {
            rotation: angle,
            mirrored: false,
        }
    }

    /// Returns true if this transform leaves the image untouched.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Returns true if the rendered width and height trade places.
    #[must_use]
    pub fn is_sideways(self) -> bool {
        self.rotation.is_sideways()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_identity() {
        assert!(Transform::IDENTITY.is_identity());
        assert!(!Transform::IDENTITY.is_sideways());
    }

    #[test]
    fn pure_rotation_is_not_mirrored() {
        let transform = Transform::rotation(RotationAngle::new(90));
        assert!(!transform.mirrored);
        assert!(transform.is_sideways());
        assert!(!transform.is_identity());
    }

    #[test]
    fn mirror_alone_is_not_identity() {
        let transform = Transform {
            rotation: RotationAngle::ZERO,
            mirrored: true,
        };
        assert!(!transform.is_identity());
        assert!(!transform.is_sideways());
    }
}
