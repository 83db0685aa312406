// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the application.

/// Which surface is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Slideshow,
    Admin,
}
