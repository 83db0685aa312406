// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized around the Elm-style "state down, messages up" pattern:
//!
//! - [`slideshow`] - The presentation itself: transition state machine,
//!   navigation, auto-advance, and rotation resolution
//! - [`admin`] - Administrative surface: slide details, timers, transition
//!   and theme selection
//! - [`state`] - Shared domain newtypes (rotation angle, EXIF orientation,
//!   render transform)
//! - [`theming`] - Application chrome mode and presentation palettes

pub mod admin;
pub mod slideshow;
pub mod state;
pub mod theming;
