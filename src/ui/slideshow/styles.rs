// SPDX-License-Identifier: MPL-2.0
//! Transition style catalog.
//!
//! Each style owns its nominal duration and computes the render directives
//! (opacity, horizontal offset, scale) for both slides of an animated
//! handoff. The styles carry all visual knowledge; the transition state
//! machine only cares whether a style is instant and how long it nominally
//! runs.

use crate::ui::slideshow::subcomponents::navigation::Direction;
use std::fmt;
use std::time::Duration;

/// Which side of a handoff a slide is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// The incoming slide, animating into place.
    Entering,
    /// The outgoing slide, animating away.
    Exiting,
}

/// Render directives for one slide at one point of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStyle {
    /// Opacity in 0.0–1.0.
    pub opacity: f32,
    /// Horizontal offset as a fraction of the stage width (positive = right).
    pub offset: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl SlideStyle {
    /// The resting style of a fully presented slide.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset: 0.0,
        scale: 1.0,
    };
}

/// The available slide transition styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionStyle {
    /// Hard cut, no animation.
    None,
    /// Cross-fade between slides.
    #[default]
    Fade,
    /// New slide pushes in from the right.
    SlideLeft,
    /// New slide pushes in from the left.
    SlideRight,
    /// New slide grows into place while the old one fades.
    ZoomIn,
}

impl TransitionStyle {
    /// Every selectable style, in display order.
    ///
    /// `SlideRight` is listed for completeness but mainly exists as the
    /// backward-direction counterpart of `SlideLeft`.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Fade,
        Self::SlideLeft,
        Self::SlideRight,
        Self::ZoomIn,
    ];

    /// User-facing name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Fade => "Fade",
            Self::SlideLeft => "Slide Left",
            Self::SlideRight => "Slide Right",
            Self::ZoomIn => "Zoom In",
        }
    }

    /// Stable identifier used in the persisted transition document.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::None => "transition-none",
            Self::Fade => "transition-fade",
            Self::SlideLeft => "transition-slide-left",
            Self::SlideRight => "transition-slide-right",
            Self::ZoomIn => "transition-zoom-in",
        }
    }

    /// Looks a style up by its persisted identifier.
    #[must_use]
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.class_name() == class_name)
    }

    /// Nominal animation length. Instant styles report zero.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fade | Self::ZoomIn => Duration::from_millis(400),
            Self::SlideLeft | Self::SlideRight => Duration::from_millis(450),
        }
    }

    /// Returns true if this style completes without any animation frames.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.duration().is_zero()
    }

    /// Resolves the style actually used for a navigation in the given
    /// direction. Directional pushes reverse when navigating backward, so a
    /// "previous" request under Slide Left pushes from the left instead.
    #[must_use]
    pub fn for_direction(self, direction: Direction) -> Self {
        match (self, direction) {
            (Self::SlideLeft, Direction::Previous) => Self::SlideRight,
            (Self::SlideRight, Direction::Previous) => Self::SlideLeft,
            (style, _) => style,
        }
    }

    /// Computes the render directives for one slide role at `progress`
    /// (0.0 = animation start, 1.0 = settled).
    #[must_use]
    pub fn style_for(self, role: SlideRole, progress: f32) -> SlideStyle {
        let p = progress.clamp(0.0, 1.0);
        match (self, role) {
            (Self::None, SlideRole::Entering) => SlideStyle::SETTLED,
            (Self::None, SlideRole::Exiting) => SlideStyle {
                opacity: 0.0,
                ..SlideStyle::SETTLED
            },
            (Self::Fade, SlideRole::Entering) => SlideStyle {
                opacity: p,
                ..SlideStyle::SETTLED
            },
            (Self::Fade, SlideRole::Exiting) => SlideStyle {
                opacity: 1.0 - p,
                ..SlideStyle::SETTLED
            },
            (Self::SlideLeft, SlideRole::Entering) => SlideStyle {
                offset: 1.0 - p,
                ..SlideStyle::SETTLED
            },
            (Self::SlideLeft, SlideRole::Exiting) => SlideStyle {
                offset: -p,
                ..SlideStyle::SETTLED
            },
            (Self::SlideRight, SlideRole::Entering) => SlideStyle {
                offset: p - 1.0,
                ..SlideStyle::SETTLED
            },
            (Self::SlideRight, SlideRole::Exiting) => SlideStyle {
                offset: p,
                ..SlideStyle::SETTLED
            },
            (Self::ZoomIn, SlideRole::Entering) => SlideStyle {
                opacity: p,
                offset: 0.0,
                scale: 0.85 + 0.15 * p,
            },
            (Self::ZoomIn, SlideRole::Exiting) => SlideStyle {
                opacity: 1.0 - p,
                ..SlideStyle::SETTLED
            },
        }
    }
}

impl fmt::Display for TransitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
