// SPDX-License-Identifier: MPL-2.0
//! Navigation controller: wraparound index arithmetic plus the throttle
//! window between accepted navigations.
//!
//! The throttle exists to keep key-repeat and scheduler/user races from
//! requesting transitions faster than they can visually resolve. It is
//! independent of the transition machine's own busy-rejection: the
//! controller may accept a request that the machine then drops.

use std::time::{Duration, Instant};

/// Minimum interval between two accepted navigations.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(600);

/// Direction of travel through the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Next,
    Previous,
    /// Explicit jump, e.g. from an index selector.
    Index(usize),
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Dropped: empty list, invalid index, or inside the throttle window.
    None,
    /// Accepted; ask the transition machine to move to `target`.
    Navigate { target: usize, direction: Direction },
}

/// Navigation controller state.
#[derive(Debug, Clone)]
pub struct State {
    current: usize,
    last_accepted: Option<Instant>,
    throttle: Duration,
    /// Widens the throttle bypass from the literal "None" style to any
    /// style reporting a zero duration.
    bypass_throttle_for_instant: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            current: 0,
            last_accepted: None,
            throttle: DEFAULT_THROTTLE,
            bypass_throttle_for_instant: false,
        }
    }
}

impl State {
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            ..Self::default()
        }
    }

    /// Evaluates a navigation request against the list size and the throttle.
    ///
    /// `style_is_instant` reports whether the currently selected transition
    /// style has nothing to protect from overlap; together with
    /// `style_is_none` it decides the throttle bypass.
    pub fn request(
        &mut self,
        request: Request,
        slide_count: usize,
        style_is_none: bool,
        style_is_instant: bool,
        now: Instant,
    ) -> Effect {
        if slide_count == 0 {
            return Effect::None;
        }

        let (target, direction) = match request {
            Request::Next => ((self.current + 1) % slide_count, Direction::Next),
            Request::Previous => (
                (self.current + slide_count - 1) % slide_count,
                Direction::Previous,
            ),
            Request::Index(index) => {
                if index >= slide_count || index == self.current {
                    return Effect::None;
                }
                let direction = if index > self.current {
                    Direction::Next
                } else {
                    Direction::Previous
                };
                (index, direction)
            }
        };

        let bypass = style_is_none || (self.bypass_throttle_for_instant && style_is_instant);
        if !bypass {
            if let Some(last) = self.last_accepted {
                if now.saturating_duration_since(last) < self.throttle {
                    return Effect::None;
                }
            }
            self.last_accepted = Some(now);
        }

        Effect::Navigate { target, direction }
    }

    /// Commits an accepted navigation. Called once the transition machine
    /// has taken the request; the index is never moved on a rejection.
    pub fn commit(&mut self, target: usize) {
        self.current = target;
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Resets position, e.g. after the slide list was rebuilt.
    pub fn reset(&mut self) {
        self.current = 0;
        self.last_accepted = None;
    }

    /// Updates the throttle window (from saved timer settings).
    pub fn set_throttle(&mut self, throttle: Duration) {
        self.throttle = throttle;
    }

    pub fn set_bypass_throttle_for_instant(&mut self, bypass: bool) {
        self.bypass_throttle_for_instant = bypass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(state: &mut State, request: Request, count: usize, now: Instant) -> Effect {
        state.request(request, count, false, false, now)
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut state = State::default();
        let effect = accept(&mut state, Request::Next, 0, Instant::now());
        assert_eq!(effect, Effect::None);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut state = State::default();
        let now = Instant::now();

        let effect = accept(&mut state, Request::Previous, 3, now);
        assert_eq!(
            effect,
            Effect::Navigate {
                target: 2,
                direction: Direction::Previous
            }
        );
        state.commit(2);

        let effect = accept(&mut state, Request::Next, 3, now + DEFAULT_THROTTLE);
        assert_eq!(
            effect,
            Effect::Navigate {
                target: 0,
                direction: Direction::Next
            }
        );
    }

    #[test]
    fn rapid_requests_inside_one_throttle_window_collapse_to_one() {
        let mut state = State::default();
        let now = Instant::now();

        let first = accept(&mut state, Request::Next, 5, now);
        assert!(matches!(first, Effect::Navigate { target: 1, .. }));
        state.commit(1);

        for millis in [50, 200, 599] {
            let effect = accept(
                &mut state,
                Request::Next,
                5,
                now + Duration::from_millis(millis),
            );
            assert_eq!(effect, Effect::None, "at +{millis}ms");
        }
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn requests_spaced_past_the_throttle_are_accepted() {
        let mut state = State::default();
        let now = Instant::now();

        assert!(matches!(
            accept(&mut state, Request::Next, 5, now),
            Effect::Navigate { target: 1, .. }
        ));
        state.commit(1);
        assert!(matches!(
            accept(&mut state, Request::Next, 5, now + DEFAULT_THROTTLE),
            Effect::Navigate { target: 2, .. }
        ));
    }

    #[test]
    fn none_style_bypasses_the_throttle() {
        let mut state = State::default();
        let now = Instant::now();

        for expected in [1, 2, 3] {
            let effect = state.request(Request::Next, 5, true, true, now);
            assert!(matches!(effect, Effect::Navigate { target, .. } if target == expected));
            state.commit(expected);
        }
    }

    #[test]
    fn instant_bypass_flag_widens_the_exemption() {
        let mut state = State::default();
        let now = Instant::now();

        // Not the literal none style, but instant: throttled by default...
        assert!(matches!(
            state.request(Request::Next, 5, false, true, now),
            Effect::Navigate { .. }
        ));
        assert_eq!(state.request(Request::Next, 5, false, true, now), Effect::None);

        // ...and exempt once the flag is set.
        state.set_bypass_throttle_for_instant(true);
        assert!(matches!(
            state.request(Request::Next, 5, false, true, now),
            Effect::Navigate { .. }
        ));
    }

    #[test]
    fn index_jump_validates_bounds_and_self() {
        let mut state = State::default();
        let now = Instant::now();

        assert_eq!(accept(&mut state, Request::Index(7), 3, now), Effect::None);
        assert_eq!(accept(&mut state, Request::Index(0), 3, now), Effect::None);

        let effect = accept(&mut state, Request::Index(2), 3, now);
        assert_eq!(
            effect,
            Effect::Navigate {
                target: 2,
                direction: Direction::Next
            }
        );
    }

    #[test]
    fn commit_is_the_only_index_mutation() {
        let mut state = State::default();
        let now = Instant::now();

        let effect = accept(&mut state, Request::Next, 4, now);
        assert!(matches!(effect, Effect::Navigate { target: 1, .. }));
        // The request alone must not move the index (the machine may still
        // reject it).
        assert_eq!(state.current(), 0);

        state.commit(1);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn single_slide_list_wraps_onto_itself() {
        let mut state = State::default();
        let effect = accept(&mut state, Request::Next, 1, Instant::now());
        assert!(matches!(effect, Effect::Navigate { target: 0, .. }));
    }
}
