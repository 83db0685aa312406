// SPDX-License-Identifier: MPL-2.0
//! Slide transition state machine.
//!
//! Owns the transition phase and the outgoing slide during an animated
//! handoff. The cycle is strict: `Idle → Preparing → Active → Finishing →
//! Idle`, and a request arriving while the machine is busy is dropped, never
//! queued.
//!
//! `Preparing` exists so the renderer can commit the incoming slide at its
//! initial position before the animating styles apply; without that commit
//! the animation collapses to a jump. The machine moves on to `Active` after
//! a short configurable delay.
//!
//! `Active` is left by counting completion signals (one per animating slide
//! role, arriving in either order) rather than by a fixed timer, so the
//! visual length of a transition is owned by the style data. A fallback
//! timeout of twice the style's nominal duration covers renderers that never
//! deliver a signal.

use crate::slides::Slide;
use crate::ui::slideshow::styles::{SlideRole, TransitionStyle};
use std::time::{Duration, Instant};

/// Delay between `Preparing` and `Active`, long enough for one render commit.
pub const DEFAULT_PREPARE_DELAY: Duration = Duration::from_millis(30);

/// Where in an animated slide handoff the machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// One slide rendered, ready to accept a transition request.
    #[default]
    Idle,
    /// Both slides rendered, animation styles not yet applied.
    Preparing,
    /// Both slides animating; waiting on completion signals.
    Active,
    /// Tearing down the outgoing slide. Passed through synchronously.
    Finishing,
}

/// Inputs driving the machine.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request a transition. `superseded` is the slide being animated out.
    Begin {
        superseded: Slide,
        style: TransitionStyle,
        now: Instant,
    },
    /// Periodic tick from the animation driver.
    Tick { now: Instant },
    /// A slide finished animating. Only transform/opacity completions from
    /// the renderer should be forwarded here; duplicates per role are
    /// ignored.
    SlideSettled { role: SlideRole },
}

/// What the caller should do after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The request was dropped because the machine was not idle.
    Rejected,
    /// A transition started; the caller may now commit the new index.
    Began,
    /// Animation styles should now be applied to both slides.
    Activated,
    /// The handoff finished and the machine is idle again.
    Completed { timed_out: bool },
}

/// Transition state machine state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    previous: Option<Slide>,
    entering_settled: bool,
    exiting_settled: bool,
    style: TransitionStyle,
    prepare_delay: Duration,
    phase_entered_at: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            previous: None,
            entering_settled: false,
            exiting_settled: false,
            style: TransitionStyle::default(),
            prepare_delay: DEFAULT_PREPARE_DELAY,
            phase_entered_at: None,
        }
    }
}

impl State {
    pub fn new(prepare_delay: Duration) -> Self {
        Self {
            prepare_delay,
            ..Self::default()
        }
    }

    /// Handle a machine input.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Begin {
                superseded,
                style,
                now,
            } => {
                if self.phase != Phase::Idle {
                    return Effect::Rejected;
                }
                self.previous = Some(superseded);
                self.style = style;
                self.entering_settled = false;
                self.exiting_settled = false;
                self.phase = Phase::Preparing;
                self.phase_entered_at = Some(now);
                Effect::Began
            }
            Message::Tick { now } => match self.phase {
                Phase::Preparing => {
                    if self.elapsed(now) >= self.prepare_delay {
                        self.phase = Phase::Active;
                        self.phase_entered_at = Some(now);
                        Effect::Activated
                    } else {
                        Effect::None
                    }
                }
                Phase::Active => {
                    if self.elapsed(now) >= self.fallback_timeout() {
                        self.finish();
                        Effect::Completed { timed_out: true }
                    } else {
                        Effect::None
                    }
                }
                Phase::Idle | Phase::Finishing => Effect::None,
            },
            Message::SlideSettled { role } => {
                if self.phase != Phase::Active {
                    return Effect::None;
                }
                match role {
                    SlideRole::Entering => self.entering_settled = true,
                    SlideRole::Exiting => self.exiting_settled = true,
                }
                if self.entering_settled && self.exiting_settled {
                    self.finish();
                    Effect::Completed { timed_out: false }
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Updates the `Preparing` → `Active` delay (from saved timer settings).
    pub fn set_prepare_delay(&mut self, delay: Duration) {
        self.prepare_delay = delay;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The slide animating out, present only mid-transition.
    #[must_use]
    pub fn previous(&self) -> Option<&Slide> {
        self.previous.as_ref()
    }

    /// The style of the in-flight transition. Meaningless while idle.
    #[must_use]
    pub fn active_style(&self) -> TransitionStyle {
        self.style
    }

    /// Animation progress in 0.0–1.0 for the current phase. `Preparing`
    /// reports 0.0 (initial positions held); idle reports 1.0 (settled).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Preparing => 0.0,
            Phase::Active => {
                let duration = self.style.duration();
                if duration.is_zero() {
                    return 1.0;
                }
                (self.elapsed(now).as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            Phase::Idle | Phase::Finishing => 1.0,
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        self.phase_entered_at
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or(Duration::ZERO)
    }

    fn fallback_timeout(&self) -> Duration {
        self.style.duration() * 2
    }

    /// Runs the `Finishing` phase. It is synchronous: the outgoing slide is
    /// dropped, counters reset, and the machine is idle before this returns.
    fn finish(&mut self) {
        self.phase = Phase::Finishing;
        self.previous = None;
        self.entering_settled = false;
        self.exiting_settled = false;
        self.phase_entered_at = None;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Slide {
        Slide {
            id: 1,
            src: "slides/a.jpg".to_string(),
            title: "a".to_string(),
            description: String::new(),
        }
    }

    fn begin(state: &mut State, style: TransitionStyle, now: Instant) -> Effect {
        state.handle(Message::Begin {
            superseded: slide(),
            style,
            now,
        })
    }

    #[test]
    fn begin_from_idle_enters_preparing() {
        let mut state = State::default();
        let now = Instant::now();

        let effect = begin(&mut state, TransitionStyle::Fade, now);

        assert_eq!(effect, Effect::Began);
        assert_eq!(state.phase(), Phase::Preparing);
        assert!(state.previous().is_some());
    }

    #[test]
    fn begin_while_busy_is_rejected() {
        let mut state = State::default();
        let now = Instant::now();
        begin(&mut state, TransitionStyle::Fade, now);

        let effect = begin(&mut state, TransitionStyle::Fade, now);

        assert_eq!(effect, Effect::Rejected);
        assert_eq!(state.phase(), Phase::Preparing);
    }

    #[test]
    fn tick_before_prepare_delay_holds_preparing() {
        let mut state = State::default();
        let now = Instant::now();
        begin(&mut state, TransitionStyle::Fade, now);

        let effect = state.handle(Message::Tick {
            now: now + Duration::from_millis(10),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Preparing);
    }

    #[test]
    fn tick_after_prepare_delay_activates() {
        let mut state = State::default();
        let now = Instant::now();
        begin(&mut state, TransitionStyle::Fade, now);

        let effect = state.handle(Message::Tick {
            now: now + DEFAULT_PREPARE_DELAY,
        });

        assert_eq!(effect, Effect::Activated);
        assert_eq!(state.phase(), Phase::Active);
    }

    fn activated(style: TransitionStyle) -> (State, Instant) {
        let mut state = State::default();
        let now = Instant::now();
        begin(&mut state, style, now);
        let at = now + DEFAULT_PREPARE_DELAY;
        assert_eq!(state.handle(Message::Tick { now: at }), Effect::Activated);
        (state, at)
    }

    #[test]
    fn both_settles_complete_in_either_order() {
        for roles in [
            [SlideRole::Entering, SlideRole::Exiting],
            [SlideRole::Exiting, SlideRole::Entering],
        ] {
            let (mut state, _) = activated(TransitionStyle::Fade);

            assert_eq!(
                state.handle(Message::SlideSettled { role: roles[0] }),
                Effect::None
            );
            assert_eq!(
                state.handle(Message::SlideSettled { role: roles[1] }),
                Effect::Completed { timed_out: false }
            );
            assert!(state.is_idle());
            assert!(state.previous().is_none());
        }
    }

    #[test]
    fn duplicate_settles_from_one_role_do_not_complete() {
        let (mut state, _) = activated(TransitionStyle::Fade);

        state.handle(Message::SlideSettled {
            role: SlideRole::Entering,
        });
        let effect = state.handle(Message::SlideSettled {
            role: SlideRole::Entering,
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Active);
    }

    #[test]
    fn settles_outside_active_are_ignored() {
        let mut state = State::default();
        let effect = state.handle(Message::SlideSettled {
            role: SlideRole::Entering,
        });
        assert_eq!(effect, Effect::None);
        assert!(state.is_idle());

        begin(&mut state, TransitionStyle::Fade, Instant::now());
        let effect = state.handle(Message::SlideSettled {
            role: SlideRole::Entering,
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Preparing);
    }

    #[test]
    fn stuck_active_phase_times_out() {
        let (mut state, activated_at) = activated(TransitionStyle::Fade);
        let timeout = TransitionStyle::Fade.duration() * 2;

        let effect = state.handle(Message::Tick {
            now: activated_at + timeout,
        });

        assert_eq!(effect, Effect::Completed { timed_out: true });
        assert!(state.is_idle());
        assert!(state.previous().is_none());
    }

    #[test]
    fn instant_style_completes_on_first_active_tick() {
        let (mut state, activated_at) = activated(TransitionStyle::None);

        let effect = state.handle(Message::Tick { now: activated_at });

        assert_eq!(effect, Effect::Completed { timed_out: true });
        assert!(state.is_idle());
    }

    #[test]
    fn accepted_request_walks_the_full_phase_cycle() {
        let mut state = State::default();
        let now = Instant::now();

        assert!(state.is_idle());
        assert_eq!(begin(&mut state, TransitionStyle::Fade, now), Effect::Began);
        assert_eq!(state.phase(), Phase::Preparing);

        let at = now + DEFAULT_PREPARE_DELAY;
        assert_eq!(state.handle(Message::Tick { now: at }), Effect::Activated);
        assert_eq!(state.phase(), Phase::Active);

        state.handle(Message::SlideSettled {
            role: SlideRole::Exiting,
        });
        let done = state.handle(Message::SlideSettled {
            role: SlideRole::Entering,
        });
        assert_eq!(done, Effect::Completed { timed_out: false });
        assert!(state.is_idle());

        // Accepts a fresh request once back at idle.
        assert_eq!(begin(&mut state, TransitionStyle::Fade, at), Effect::Began);
    }

    #[test]
    fn progress_reports_phase_position() {
        let (state, activated_at) = activated(TransitionStyle::Fade);
        let half = TransitionStyle::Fade.duration() / 2;

        assert!((state.progress(activated_at + half) - 0.5).abs() < 0.01);
        assert_eq!(
            state.progress(activated_at + TransitionStyle::Fade.duration() * 3),
            1.0
        );
    }
}
