// SPDX-License-Identifier: MPL-2.0
//! The persisted document types and their accessors.
//!
//! Field names are stable camelCase identifiers (`isHidden`,
//! `autoAdvanceIntervalMs`, `className`); the files are hand-editable and
//! other tooling may already depend on these shapes.

use crate::error::Result;
use crate::store::{read_or_default, write_document};
use crate::ui::slideshow::styles::TransitionStyle;
use crate::ui::slideshow::subcomponents::{navigation, scheduler, transition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

const ROTATIONS_FILE: &str = "rotations.json";
const SLIDE_DETAILS_FILE: &str = "slide_details.json";
const TRANSITION_FILE: &str = "transition.json";
const TIMER_SETTINGS_FILE: &str = "timer_settings.json";
const THEME_FILE: &str = "theme.json";

// =============================================================================
// Rotations
// =============================================================================

/// Manual rotations: normalized image path → degrees (0/90/180/270).
pub type RotationsDoc = BTreeMap<String, u16>;

/// Loads the rotations document, empty when absent.
pub fn load_rotations(base_dir: Option<PathBuf>) -> RotationsDoc {
    read_or_default(base_dir, ROTATIONS_FILE)
}

/// Sets one rotation entry and writes the whole document back
/// (read-modify-write, preserving entries for other images).
pub fn update_rotation(base_dir: Option<PathBuf>, path: &str, degrees: u16) -> Result<()> {
    let mut rotations = load_rotations(base_dir.clone());
    rotations.insert(path.to_string(), degrees);
    write_document(base_dir, ROTATIONS_FILE, &rotations)
}

// =============================================================================
// Slide details
// =============================================================================

/// Editable metadata for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

/// Slide details: normalized image path → detail record.
pub type SlideDetailsDoc = BTreeMap<String, SlideDetail>;

/// Loads the slide-details document, empty when absent.
pub fn load_slide_details(base_dir: Option<PathBuf>) -> SlideDetailsDoc {
    read_or_default(base_dir, SLIDE_DETAILS_FILE)
}

/// Replaces the detail record for one slide and writes the document back.
pub fn update_slide_detail(
    base_dir: Option<PathBuf>,
    path: &str,
    detail: SlideDetail,
) -> Result<()> {
    let mut details = load_slide_details(base_dir.clone());
    details.insert(path.to_string(), detail);
    write_document(base_dir, SLIDE_DETAILS_FILE, &details)
}

// =============================================================================
// Transition selection
// =============================================================================

/// The selected transition style, stored by name + stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDoc {
    pub name: String,
    pub class_name: String,
}

impl TransitionDoc {
    #[must_use]
    pub fn from_style(style: TransitionStyle) -> Self {
        Self {
            name: style.name().to_string(),
            class_name: style.class_name().to_string(),
        }
    }

    /// Resolves back to a style, falling back to the default when the
    /// identifier is unknown (e.g. written by a newer version).
    #[must_use]
    pub fn style(&self) -> TransitionStyle {
        TransitionStyle::from_class_name(&self.class_name).unwrap_or_default()
    }
}

impl Default for TransitionDoc {
    fn default() -> Self {
        Self::from_style(TransitionStyle::default())
    }
}

/// Loads the transition document, default (Fade) when absent.
pub fn load_transition(base_dir: Option<PathBuf>) -> TransitionDoc {
    read_or_default(base_dir, TRANSITION_FILE)
}

/// Saves the transition selection.
pub fn save_transition(base_dir: Option<PathBuf>, doc: &TransitionDoc) -> Result<()> {
    write_document(base_dir, TRANSITION_FILE, doc)
}

// =============================================================================
// Timer settings
// =============================================================================

/// Timer settings document; absent fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettingsDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_throttle_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_prepare_delay_ms: Option<u64>,
}

/// Resolved timer settings with every field populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub auto_advance_interval: Duration,
    pub navigation_throttle: Duration,
    pub transition_prepare_delay: Duration,
}

impl TimerSettingsDoc {
    /// Fills absent fields from the sub-component defaults.
    #[must_use]
    pub fn resolve(&self) -> TimerSettings {
        TimerSettings {
            auto_advance_interval: self
                .auto_advance_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(scheduler::DEFAULT_INTERVAL),
            navigation_throttle: self
                .navigation_throttle_ms
                .map(Duration::from_millis)
                .unwrap_or(navigation::DEFAULT_THROTTLE),
            transition_prepare_delay: self
                .transition_prepare_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(transition::DEFAULT_PREPARE_DELAY),
        }
    }
}

/// Loads the timer-settings document, empty (all defaults) when absent.
pub fn load_timer_settings(base_dir: Option<PathBuf>) -> TimerSettingsDoc {
    read_or_default(base_dir, TIMER_SETTINGS_FILE)
}

/// Saves the timer settings.
pub fn save_timer_settings(base_dir: Option<PathBuf>, doc: &TimerSettingsDoc) -> Result<()> {
    write_document(base_dir, TIMER_SETTINGS_FILE, doc)
}

// =============================================================================
// Theme
// =============================================================================

/// One color slot of a presentation theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub hex: String,
}

/// The active presentation theme: a name and five color slots
/// (background, surface, border, text, frame).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDoc {
    pub name: String,
    pub colors: Vec<ThemeColor>,
}

/// Loads the active theme document; `None` means no theme was ever saved.
pub fn load_theme(base_dir: Option<PathBuf>) -> Option<ThemeDoc> {
    read_or_default(base_dir, THEME_FILE)
}

/// Saves the active theme.
pub fn save_theme(base_dir: Option<PathBuf>, doc: &ThemeDoc) -> Result<()> {
    write_document(base_dir, THEME_FILE, doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn base(dir: &tempfile::TempDir) -> Option<PathBuf> {
        Some(dir.path().to_path_buf())
    }

    #[test]
    fn update_rotation_preserves_other_entries() {
        let dir = tempdir().expect("failed to create temp dir");

        update_rotation(base(&dir), "slides/a.jpg", 90).expect("first update failed");
        update_rotation(base(&dir), "slides/b.jpg", 180).expect("second update failed");
        update_rotation(base(&dir), "slides/a.jpg", 270).expect("overwrite failed");

        let rotations = load_rotations(base(&dir));
        assert_eq!(rotations.get("slides/a.jpg"), Some(&270));
        assert_eq!(rotations.get("slides/b.jpg"), Some(&180));
    }

    #[test]
    fn slide_detail_round_trips_with_wire_field_names() {
        let dir = tempdir().expect("failed to create temp dir");
        let detail = SlideDetail {
            title: Some("Exhibit A".to_string()),
            description: None,
            is_hidden: Some(true),
        };

        update_slide_detail(base(&dir), "slides/a.jpg", detail.clone()).expect("update failed");

        let raw = std::fs::read_to_string(dir.path().join("slide_details.json"))
            .expect("document missing");
        assert!(raw.contains("isHidden"));

        let details = load_slide_details(base(&dir));
        assert_eq!(details.get("slides/a.jpg"), Some(&detail));
    }

    #[test]
    fn transition_defaults_to_fade() {
        let dir = tempdir().expect("failed to create temp dir");
        assert_eq!(load_transition(base(&dir)).style(), TransitionStyle::Fade);
    }

    #[test]
    fn transition_round_trips_by_class_name() {
        let dir = tempdir().expect("failed to create temp dir");
        let doc = TransitionDoc::from_style(TransitionStyle::SlideLeft);
        save_transition(base(&dir), &doc).expect("save failed");

        assert_eq!(
            load_transition(base(&dir)).style(),
            TransitionStyle::SlideLeft
        );
    }

    #[test]
    fn unknown_transition_identifier_falls_back_to_default() {
        let doc = TransitionDoc {
            name: "Wipe".to_string(),
            class_name: "transition-wipe".to_string(),
        };
        assert_eq!(doc.style(), TransitionStyle::Fade);
    }

    #[test]
    fn timer_settings_resolve_defaults_for_absent_fields() {
        let resolved = TimerSettingsDoc::default().resolve();
        assert_eq!(resolved.auto_advance_interval, scheduler::DEFAULT_INTERVAL);
        assert_eq!(resolved.navigation_throttle, navigation::DEFAULT_THROTTLE);
        assert_eq!(
            resolved.transition_prepare_delay,
            transition::DEFAULT_PREPARE_DELAY
        );
    }

    #[test]
    fn timer_settings_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let doc = TimerSettingsDoc {
            auto_advance_interval_ms: Some(8000),
            navigation_throttle_ms: Some(250),
            transition_prepare_delay_ms: None,
        };
        save_timer_settings(base(&dir), &doc).expect("save failed");

        let loaded = load_timer_settings(base(&dir));
        assert_eq!(loaded, doc);
        let resolved = loaded.resolve();
        assert_eq!(resolved.auto_advance_interval, Duration::from_millis(8000));
        assert_eq!(
            resolved.transition_prepare_delay,
            transition::DEFAULT_PREPARE_DELAY
        );
    }

    #[test]
    fn theme_is_absent_until_saved() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(load_theme(base(&dir)).is_none());

        let doc = ThemeDoc {
            name: "Noir".to_string(),
            colors: vec![ThemeColor {
                hex: "#101010".to_string(),
            }],
        };
        save_theme(base(&dir), &doc).expect("save failed");
        assert_eq!(load_theme(base(&dir)), Some(doc));
    }
}
