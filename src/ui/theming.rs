// SPDX-License-Identifier: MPL-2.0
//! Theme mode and presentation palettes.
//!
//! Two layers of theming coexist: [`ThemeMode`] picks the light/dark chrome
//! of the application itself, while [`Palette`] is the five-slot color set
//! the presentation renders with. The active palette is an explicit value
//! threaded through the view code, never process-wide state.

use crate::store::documents::{ThemeColor, ThemeDoc};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Application chrome theme mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    System,
    Dark,
}

impl ThemeMode {
    /// Resolves to an Iced theme, asking the OS when set to `System`.
    #[must_use]
    pub fn to_iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => iced::Theme::Light,
                _ => iced::Theme::Dark,
            },
        }
    }
}

/// Presentation color palette: background, accent, border, text, frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub background: Color,
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub frame: Color,
}

impl Palette {
    /// Built-in palettes offered by the theme panel.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::from_slots("Noir", ["#171717", "#EDEDED", "#DA0037", "#AAAAAA", "#590D82"]),
            Self::from_slots("Harbor", ["#1D3557", "#E63946", "#F1FAEE", "#FFD700", "#9F8BA8"]),
            Self::from_slots("Archive", ["#F7EDE2", "#313638", "#3BCEAC", "#B23A48", "#C39351"]),
            Self::from_slots("Verdict", ["#2D2A32", "#FFC857", "#087E8B", "#F5F5F5", "#9B5DE5"]),
        ]
    }

    fn from_slots(name: &str, hex: [&str; 5]) -> Self {
        Self {
            name: name.to_string(),
            background: parse_hex(hex[0]).unwrap_or(Color::BLACK),
            accent: parse_hex(hex[1]).unwrap_or(Color::WHITE),
            border: parse_hex(hex[2]).unwrap_or(Color::WHITE),
            text: parse_hex(hex[3]).unwrap_or(Color::WHITE),
            frame: parse_hex(hex[4]).unwrap_or(Color::BLACK),
        }
    }

    /// Builds a palette from the persisted theme document. Slots beyond the
    /// stored colors (or unparsable hex values) keep the default palette's
    /// values.
    #[must_use]
    pub fn from_doc(doc: &ThemeDoc) -> Self {
        let base = Self::default();
        let slot = |index: usize, fallback: Color| {
            doc.colors
                .get(index)
                .and_then(|color: &ThemeColor| parse_hex(&color.hex))
                .unwrap_or(fallback)
        };
        Self {
            name: doc.name.clone(),
            background: slot(0, base.background),
            accent: slot(1, base.accent),
            border: slot(2, base.border),
            text: slot(3, base.text),
            frame: slot(4, base.frame),
        }
    }

    /// Converts back into the persisted document shape.
    #[must_use]
    pub fn to_doc(&self) -> ThemeDoc {
        ThemeDoc {
            name: self.name.clone(),
            colors: [self.background, self.accent, self.border, self.text, self.frame]
                .iter()
                .map(|color| ThemeColor {
                    hex: to_hex(*color),
                })
                .collect(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtins().remove(0)
    }
}

/// Parses a `#RRGGBB` hex string.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::from_rgb8(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

fn to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        let color = parse_hex("#FF0080").expect("parse failed");
        let [r, g, b, _] = color.into_rgba8();
        assert_eq!((r, g, b), (255, 0, 128));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_hex("FF0080").is_none());
        assert!(parse_hex("#FFF").is_none());
        assert!(parse_hex("#GGGGGG").is_none());
    }

    #[test]
    fn palette_round_trips_through_the_document_shape() {
        let palette = Palette::builtins().remove(1);
        let doc = palette.to_doc();
        assert_eq!(doc.colors.len(), 5);

        let restored = Palette::from_doc(&doc);
        assert_eq!(restored, palette);
    }

    #[test]
    fn short_documents_fall_back_per_slot() {
        let doc = ThemeDoc {
            name: "Partial".to_string(),
            colors: vec![ThemeColor {
                hex: "#123456".to_string(),
            }],
        };
        let palette = Palette::from_doc(&doc);
        assert_eq!(palette.name, "Partial");
        assert_eq!(palette.text, Palette::default().text);
    }
}
