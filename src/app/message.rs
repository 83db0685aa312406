// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::admin;
use crate::ui::slideshow::component;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Slideshow(component::Message),
    Admin(admin::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory containing the slide images. Falls back to the remembered
    /// directory from `settings.toml`, then to `./slides`.
    pub slides_dir: Option<String>,
    /// Optional data directory override (for the JSON documents).
    /// Takes precedence over `ICED_SLIDES_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `ICED_SLIDES_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
