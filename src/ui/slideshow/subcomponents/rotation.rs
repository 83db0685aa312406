// SPDX-License-Identifier: MPL-2.0
//! Rotation resolution: manual overrides layered over detected EXIF
//! orientation.
//!
//! This state owns the two rotation sources. The manual map is mutated only
//! by the rotate actions (each mutation emits a write-through persist
//! effect); the orientation cache is filled once per slide index as images
//! load and is never persisted. A manual entry for a path silences EXIF for
//! that image entirely.

use crate::slides::normalize_path;
use crate::ui::state::{ExifOrientation, RotationAngle, Transform};
use std::collections::BTreeMap;

/// Rotation state for the slideshow.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Manual per-path rotation overrides, keyed by normalized path.
    manual: BTreeMap<String, RotationAngle>,
    /// Detected EXIF orientation per slide index.
    orientations: BTreeMap<usize, ExifOrientation>,
}

/// Messages for the rotation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the manual map with a freshly loaded document snapshot.
    ManualRotationsLoaded(BTreeMap<String, u16>),
    /// An image finished loading and reported its EXIF orientation.
    OrientationDetected {
        index: usize,
        orientation: ExifOrientation,
    },
    /// Rotate the given image 90° clockwise.
    RotateClockwise { path: String },
    /// Rotate the given image 90° counter-clockwise.
    RotateCounterClockwise { path: String },
}

/// Effects produced by rotation changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the new manual rotation through to the store. The in-memory
    /// update has already happened; a failed write is logged, not retried.
    PersistRotation { path: String, degrees: u16 },
}

impl State {
    /// Handle a rotation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ManualRotationsLoaded(map) => {
                self.manual = map
                    .into_iter()
                    .map(|(path, degrees)| {
                        (
                            normalize_path(&path).to_string(),
                            RotationAngle::new(degrees),
                        )
                    })
                    .collect();
                Effect::None
            }
            Message::OrientationDetected { index, orientation } => {
                // First detection wins for the rest of the session.
                self.orientations.entry(index).or_insert(orientation);
                Effect::None
            }
            Message::RotateClockwise { path } => self.rotate(&path, RotationAngle::rotate_clockwise),
            Message::RotateCounterClockwise { path } => {
                self.rotate(&path, RotationAngle::rotate_counterclockwise)
            }
        }
    }

    fn rotate(&mut self, path: &str, step: fn(RotationAngle) -> RotationAngle) -> Effect {
        let key = normalize_path(path).to_string();
        // The step starts from the stored manual value (or zero), not from
        // any EXIF orientation: once a user rotates an image manually, the
        // manual value is the whole truth for that path.
        let current = self.manual.get(&key).copied().unwrap_or_default();
        let rotated = step(current);
        self.manual.insert(key.clone(), rotated);
        Effect::PersistRotation {
            path: key,
            degrees: rotated.degrees(),
        }
    }

    /// Resolves the transform to render a slide with.
    ///
    /// Manual entries short-circuit EXIF; with neither source present the
    /// identity transform comes back. Never fails.
    #[must_use]
    pub fn resolve_transform(&self, index: usize, path: &str) -> Transform {
        if let Some(angle) = self.manual.get(normalize_path(path)) {
            return Transform::rotation(*angle);
        }
        self.orientations
            .get(&index)
            .map(|orientation| orientation.transform())
            .unwrap_or(Transform::IDENTITY)
    }

    /// True when the slide renders sideways (90°/270° manual rotation, or a
    /// sideways EXIF code). Layout uses this to swap aspect constraints.
    #[must_use]
    pub fn is_rotated_sideways(&self, index: usize, path: &str) -> bool {
        if let Some(angle) = self.manual.get(normalize_path(path)) {
            return angle.is_sideways();
        }
        self.orientations
            .get(&index)
            .is_some_and(|orientation| orientation.is_sideways())
    }

    /// The manual rotation stored for a path, if any.
    #[must_use]
    pub fn manual_rotation(&self, path: &str) -> Option<RotationAngle> {
        self.manual.get(normalize_path(path)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(entries: &[(&str, u16)]) -> State {
        let mut state = State::default();
        let map = entries
            .iter()
            .map(|(path, degrees)| (path.to_string(), *degrees))
            .collect();
        state.handle(Message::ManualRotationsLoaded(map));
        state
    }

    #[test]
    fn missing_data_resolves_to_identity() {
        let state = State::default();
        assert_eq!(
            state.resolve_transform(0, "slides/a.jpg"),
            Transform::IDENTITY
        );
        assert!(!state.is_rotated_sideways(0, "slides/a.jpg"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut state = loaded(&[("slides/a.jpg", 90)]);
        state.handle(Message::OrientationDetected {
            index: 1,
            orientation: ExifOrientation::new(3),
        });

        for (index, path) in [(0, "slides/a.jpg"), (1, "slides/b.jpg")] {
            let first = state.resolve_transform(index, path);
            let second = state.resolve_transform(index, path);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn manual_entry_overrides_exif_entirely() {
        // Index 1 has EXIF code 6 (rotate 90°); the manual 270° must win.
        let mut state = loaded(&[("slides/b.jpg", 270)]);
        state.handle(Message::OrientationDetected {
            index: 1,
            orientation: ExifOrientation::new(6),
        });

        let transform = state.resolve_transform(1, "slides/b.jpg");
        assert_eq!(transform, Transform::rotation(RotationAngle::new(270)));
    }

    #[test]
    fn exif_applies_when_no_manual_entry_exists() {
        let mut state = State::default();
        state.handle(Message::OrientationDetected {
            index: 2,
            orientation: ExifOrientation::new(6),
        });

        let transform = state.resolve_transform(2, "slides/c.jpg");
        assert_eq!(transform.rotation.degrees(), 90);
        assert!(!transform.mirrored);
    }

    #[test]
    fn paths_are_normalized_on_load_and_lookup() {
        let state = loaded(&[("/slides/a.jpg", 180)]);
        let transform = state.resolve_transform(0, "slides/a.jpg");
        assert_eq!(transform.rotation.degrees(), 180);

        let transform = state.resolve_transform(0, "/slides/a.jpg");
        assert_eq!(transform.rotation.degrees(), 180);
    }

    #[test]
    fn rotate_steps_from_the_stored_manual_value() {
        let mut state = loaded(&[("slides/a.jpg", 90)]);

        let effect = state.handle(Message::RotateClockwise {
            path: "/slides/a.jpg".to_string(),
        });

        assert_eq!(
            effect,
            Effect::PersistRotation {
                path: "slides/a.jpg".to_string(),
                degrees: 180,
            }
        );
        assert_eq!(
            state.manual_rotation("slides/a.jpg"),
            Some(RotationAngle::new(180))
        );
    }

    #[test]
    fn rotate_ignores_detected_orientation_as_a_starting_point() {
        let mut state = State::default();
        state.handle(Message::OrientationDetected {
            index: 0,
            orientation: ExifOrientation::new(6),
        });

        let effect = state.handle(Message::RotateClockwise {
            path: "slides/a.jpg".to_string(),
        });

        // Starts from 0, not from the EXIF-implied 90.
        assert_eq!(
            effect,
            Effect::PersistRotation {
                path: "slides/a.jpg".to_string(),
                degrees: 90,
            }
        );
    }

    #[test]
    fn counterclockwise_wraps_below_zero() {
        let mut state = State::default();
        let effect = state.handle(Message::RotateCounterClockwise {
            path: "slides/a.jpg".to_string(),
        });
        assert_eq!(
            effect,
            Effect::PersistRotation {
                path: "slides/a.jpg".to_string(),
                degrees: 270,
            }
        );
    }

    #[test]
    fn first_detected_orientation_wins() {
        let mut state = State::default();
        state.handle(Message::OrientationDetected {
            index: 0,
            orientation: ExifOrientation::new(6),
        });
        state.handle(Message::OrientationDetected {
            index: 0,
            orientation: ExifOrientation::new(3),
        });

        let transform = state.resolve_transform(0, "slides/a.jpg");
        assert_eq!(transform.rotation.degrees(), 90);
    }

    #[test]
    fn sideways_predicate_covers_both_sources() {
        let mut state = loaded(&[("slides/a.jpg", 90), ("slides/b.jpg", 180)]);
        state.handle(Message::OrientationDetected {
            index: 2,
            orientation: ExifOrientation::new(5),
        });
        state.handle(Message::OrientationDetected {
            index: 3,
            orientation: ExifOrientation::new(3),
        });

        assert!(state.is_rotated_sideways(0, "slides/a.jpg"));
        assert!(!state.is_rotated_sideways(1, "slides/b.jpg"));
        assert!(state.is_rotated_sideways(2, "slides/c.jpg"));
        assert!(!state.is_rotated_sideways(3, "slides/d.jpg"));
    }
}
