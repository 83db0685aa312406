// SPDX-License-Identifier: MPL-2.0
//! Auto-advance scheduler arming logic.
//!
//! The actual repeating timer lives in the application's subscription layer
//! (`iced::time::every`); this state decides whether that subscription may
//! exist at all. Because the subscription is rebuilt whenever an arming
//! input changes, disarming here tears the timer down; there is no handle
//! to leak on unmount.

use std::time::Duration;

/// Interval between automatic "next" requests.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Auto-advance scheduler state.
#[derive(Debug, Clone)]
pub struct State {
    zoomed: bool,
    admin_open: bool,
    interval: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self {
            zoomed: false,
            admin_open: false,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl State {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    /// True when the repeating timer may run: nothing is zoomed, the admin
    /// surface is closed, there is something to advance through, and no
    /// transition is in flight.
    #[must_use]
    pub fn should_arm(&self, slide_count: usize, machine_idle: bool) -> bool {
        !self.zoomed && !self.admin_open && slide_count > 0 && machine_idle
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_zoomed(&mut self, zoomed: bool) {
        self.zoomed = zoomed;
    }

    pub fn set_admin_open(&mut self, open: bool) {
        self.admin_open = open;
    }

    /// Updates the interval (from saved timer settings).
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arms_only_in_the_default_presentation_state() {
        let state = State::default();
        assert!(state.should_arm(3, true));
    }

    #[test]
    fn zoom_suspends_the_timer() {
        let mut state = State::default();
        state.set_zoomed(true);
        assert!(!state.should_arm(3, true));

        state.set_zoomed(false);
        assert!(state.should_arm(3, true));
    }

    #[test]
    fn open_admin_surface_suspends_the_timer() {
        let mut state = State::default();
        state.set_admin_open(true);
        assert!(!state.should_arm(3, true));
    }

    #[test]
    fn empty_slide_list_never_arms() {
        let state = State::default();
        assert!(!state.should_arm(0, true));
    }

    #[test]
    fn in_flight_transition_suspends_the_timer() {
        let state = State::default();
        assert!(!state.should_arm(3, false));
    }

    #[test]
    fn interval_is_configurable() {
        let mut state = State::default();
        assert_eq!(state.interval(), DEFAULT_INTERVAL);

        state.set_interval(Duration::from_secs(8));
        assert_eq!(state.interval(), Duration::from_secs(8));
    }
}
