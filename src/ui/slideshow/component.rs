// SPDX-License-Identifier: MPL-2.0
//! Slideshow component encapsulating state and update logic.
//!
//! Orchestrates the sub-components: navigation requests flow through the
//! throttle into the transition machine, the animation tick drives phase
//! advancement and reports per-slide completion, and the rotation state is
//! consulted for every rendered slide. All outward side effects (persisting
//! a rotation, announcing a slide change, toggling fullscreen) surface as
//! [`Effect`] values for the application shell to execute.

use crate::error::Error;
use crate::slides::Slide;
use crate::store::documents::{RotationsDoc, TimerSettings};
use crate::ui::slideshow::loader::{self, ImageData, LoadedSlide};
use crate::ui::slideshow::styles::{SlideRole, SlideStyle, TransitionStyle};
use crate::ui::slideshow::subcomponents::{navigation, rotation, scheduler, transition};
use crate::ui::state::Transform;
use iced::{event, keyboard, Subscription, Task};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Animation frame interval while a transition is in flight.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Messages consumed by the slideshow component.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
    /// Explicit jump from the admin index selector.
    NavigateTo(usize),
    /// The auto-advance timer fired.
    AutoAdvance,
    /// Animation frame while a transition is in flight.
    Tick(Instant),
    /// Click on the stage toggles zoom.
    ToggleZoom,
    RotateClockwise,
    RotateCounterClockwise,
    /// The fullscreen button was pressed.
    ToggleFullscreen,
    /// Open the admin surface.
    OpenAdmin,
    /// An image finished loading (or failed to).
    SlideLoaded {
        index: usize,
        result: Result<LoadedSlide, Error>,
    },
    /// Raw window/keyboard event routed from the application subscription.
    RawEvent(event::Event),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Write a manual rotation through to the store (fire-and-forget).
    PersistRotation { path: String, degrees: u16 },
    /// The current slide index was committed; fired once per change.
    SlideChanged { slide: Slide },
    /// Switch to the admin surface.
    OpenAdmin,
    ToggleFullscreen,
    ExitFullscreen,
}

/// Complete slideshow component state.
pub struct State {
    slides: Vec<Slide>,
    slides_dir: PathBuf,
    timers: TimerSettings,
    style: TransitionStyle,
    zoomed: bool,
    navigation: navigation::State,
    machine: transition::State,
    scheduler: scheduler::State,
    rotation: rotation::State,
    /// Decoded images by slide index, kept for the session.
    images: BTreeMap<usize, ImageData>,
    loading: BTreeSet<usize>,
    /// Timestamp of the latest animation tick; render styles are computed
    /// against it so the view stays pure.
    last_tick: Instant,
    /// Latest known window width, used to turn fractional slide offsets
    /// into pixels.
    stage_width: f32,
}

impl State {
    pub fn new(
        slides: Vec<Slide>,
        slides_dir: PathBuf,
        style: TransitionStyle,
        timers: TimerSettings,
        rotations: RotationsDoc,
        bypass_throttle_for_instant: bool,
    ) -> Self {
        let mut navigation = navigation::State::new(timers.navigation_throttle);
        navigation.set_bypass_throttle_for_instant(bypass_throttle_for_instant);

        let mut rotation = rotation::State::default();
        rotation.handle(rotation::Message::ManualRotationsLoaded(rotations));

        Self {
            slides,
            slides_dir,
            timers,
            style,
            zoomed: false,
            navigation,
            machine: transition::State::new(timers.transition_prepare_delay),
            scheduler: scheduler::State::new(timers.auto_advance_interval),
            rotation,
            images: BTreeMap::new(),
            loading: BTreeSet::new(),
            last_tick: Instant::now(),
            stage_width: 1280.0,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::NavigateNext => self.navigate(navigation::Request::Next),
            Message::NavigatePrevious => self.navigate(navigation::Request::Previous),
            Message::NavigateTo(index) => self.navigate(navigation::Request::Index(index)),
            Message::AutoAdvance => self.navigate(navigation::Request::Next),
            Message::Tick(now) => {
                self.tick(now);
                (Effect::None, Task::none())
            }
            Message::ToggleZoom => {
                self.zoomed = !self.zoomed;
                self.scheduler.set_zoomed(self.zoomed);
                (Effect::None, Task::none())
            }
            Message::RotateClockwise => self.rotate_current(true),
            Message::RotateCounterClockwise => self.rotate_current(false),
            Message::ToggleFullscreen => (Effect::ToggleFullscreen, Task::none()),
            Message::OpenAdmin => (Effect::OpenAdmin, Task::none()),
            Message::SlideLoaded { index, result } => {
                self.loading.remove(&index);
                match result {
                    Ok(loaded) => {
                        self.rotation.handle(rotation::Message::OrientationDetected {
                            index,
                            orientation: loaded.orientation,
                        });
                        self.images.insert(index, loaded.image);
                    }
                    Err(err) => {
                        // The slide keeps rendering as a placeholder; the
                        // show must not stop over one bad file.
                        log::warn!("failed to load slide {}: {}", index, err);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    /// Subscriptions owned by the slideshow: the animation tick while a
    /// transition is in flight, and the auto-advance timer while the
    /// scheduler's arming conditions hold. Both are rebuilt whenever this
    /// state changes, so a disarmed timer is a torn-down timer.
    pub fn subscription(&self) -> Subscription<Message> {
        let animation = if self.machine.is_idle() {
            Subscription::none()
        } else {
            iced::time::every(ANIMATION_TICK).map(Message::Tick)
        };

        let auto_advance = if self
            .scheduler
            .should_arm(self.slides.len(), self.machine.is_idle())
        {
            iced::time::every(self.scheduler.interval()).map(|_| Message::AutoAdvance)
        } else {
            Subscription::none()
        };

        Subscription::batch([animation, auto_advance])
    }

    fn navigate(&mut self, request: navigation::Request) -> (Effect, Task<Message>) {
        let now = Instant::now();
        let effect = self.navigation.request(
            request,
            self.slides.len(),
            self.style == TransitionStyle::None,
            self.style.is_instant(),
            now,
        );

        let navigation::Effect::Navigate { target, direction } = effect else {
            return (Effect::None, Task::none());
        };

        let style = self.style.for_direction(direction);
        let superseded = self.slides[self.navigation.current()].clone();
        match self.machine.handle(transition::Message::Begin {
            superseded,
            style,
            now,
        }) {
            transition::Effect::Began => {
                self.navigation.commit(target);
                self.last_tick = now;
                let slide = self.slides[target].clone();
                let task = self.ensure_loaded(target);
                (Effect::SlideChanged { slide }, task)
            }
            // A transition is still in flight; the request is dropped and
            // the index stays where it is.
            _ => (Effect::None, Task::none()),
        }
    }

    fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        self.machine.handle(transition::Message::Tick { now });

        // The animation driver stands in for renderer completion events:
        // each role reaching the end of its styled run reports one settle
        // signal to the machine.
        if self.machine.phase() == transition::Phase::Active && self.machine.progress(now) >= 1.0 {
            self.machine.handle(transition::Message::SlideSettled {
                role: SlideRole::Exiting,
            });
            self.machine.handle(transition::Message::SlideSettled {
                role: SlideRole::Entering,
            });
        }
    }

    fn rotate_current(&mut self, clockwise: bool) -> (Effect, Task<Message>) {
        let Some(slide) = self.current_slide() else {
            return (Effect::None, Task::none());
        };
        let path = slide.src.clone();
        let msg = if clockwise {
            rotation::Message::RotateClockwise { path }
        } else {
            rotation::Message::RotateCounterClockwise { path }
        };
        match self.rotation.handle(msg) {
            rotation::Effect::PersistRotation { path, degrees } => {
                (Effect::PersistRotation { path, degrees }, Task::none())
            }
            rotation::Effect::None => (Effect::None, Task::none()),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            self.stage_width = size.width;
            return (Effect::None, Task::none());
        }
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    return self.navigate(navigation::Request::Next);
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    return self.navigate(navigation::Request::Previous);
                }
                keyboard::Key::Named(keyboard::key::Named::F11) => {
                    return (Effect::ToggleFullscreen, Task::none());
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    return (Effect::ExitFullscreen, Task::none());
                }
                _ => {}
            }
        }
        (Effect::None, Task::none())
    }

    /// Starts loading the image for `index` unless it is cached or already
    /// on its way.
    pub fn ensure_loaded(&mut self, index: usize) -> Task<Message> {
        if self.images.contains_key(&index) || self.loading.contains(&index) {
            return Task::none();
        }
        let Some(slide) = self.slides.get(index) else {
            return Task::none();
        };

        self.loading.insert(index);
        let path = self.slides_dir.join(slide.file_name());
        Task::perform(loader::load_slide(path), move |result| {
            Message::SlideLoaded { index, result }
        })
    }

    /// Kicks off the initial image load for the starting slide.
    pub fn load_current(&mut self) -> Task<Message> {
        self.ensure_loaded(self.navigation.current())
    }

    /// Replaces the slide list after details were edited or the directory
    /// rescanned. The session effectively restarts: position returns to the
    /// first slide and any in-flight transition is discarded.
    pub fn reload_slides(&mut self, slides: Vec<Slide>) -> Task<Message> {
        self.slides = slides;
        self.navigation.reset();
        self.machine = transition::State::new(self.timers.transition_prepare_delay);
        self.images.clear();
        self.loading.clear();
        self.load_current()
    }

    /// Applies freshly saved timer settings to all sub-components.
    pub fn apply_timer_settings(&mut self, timers: TimerSettings) {
        self.timers = timers;
        self.navigation.set_throttle(timers.navigation_throttle);
        self.machine
            .set_prepare_delay(timers.transition_prepare_delay);
        self.scheduler.set_interval(timers.auto_advance_interval);
    }

    pub fn set_style(&mut self, style: TransitionStyle) {
        self.style = style;
    }

    /// Suspends or resumes auto-advance for the admin surface.
    pub fn set_admin_open(&mut self, open: bool) {
        self.scheduler.set_admin_open(open);
    }

    // -------------------------------------------------------------------------
    // Read access for the view layer
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.navigation.current())
    }

    /// The outgoing slide, present only mid-transition.
    #[must_use]
    pub fn previous_slide(&self) -> Option<&Slide> {
        self.machine.previous()
    }

    #[must_use]
    pub fn phase(&self) -> transition::Phase {
        self.machine.phase()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    #[must_use]
    pub fn stage_width(&self) -> f32 {
        self.stage_width
    }

    #[must_use]
    pub fn selected_style(&self) -> TransitionStyle {
        self.style
    }

    #[must_use]
    pub fn image_for(&self, index: usize) -> Option<&ImageData> {
        self.images.get(&index)
    }

    /// Image cached for a slide identity (used for the outgoing slide,
    /// whose index is the one it had before the handoff began).
    #[must_use]
    pub fn image_for_slide(&self, slide: &Slide) -> Option<&ImageData> {
        self.slides
            .iter()
            .position(|candidate| candidate.id == slide.id)
            .and_then(|index| self.images.get(&index))
    }

    /// Resolves the render transform for a slide by index.
    #[must_use]
    pub fn resolve_transform(&self, index: usize) -> Transform {
        self.slides
            .get(index)
            .map(|slide| self.rotation.resolve_transform(index, &slide.src))
            .unwrap_or(Transform::IDENTITY)
    }

    /// True when the current slide renders sideways; layout swaps its
    /// aspect constraints accordingly.
    #[must_use]
    pub fn is_current_rotated_sideways(&self) -> bool {
        let index = self.navigation.current();
        self.slides
            .get(index)
            .is_some_and(|slide| self.rotation.is_rotated_sideways(index, &slide.src))
    }

    /// Render styles for the incoming slide and (mid-transition) the
    /// outgoing one, computed against the latest animation tick.
    #[must_use]
    pub fn render_styles(&self) -> (SlideStyle, Option<SlideStyle>) {
        use transition::Phase;
        let style = self.machine.active_style();
        match self.machine.phase() {
            Phase::Idle => (SlideStyle::SETTLED, None),
            // Initial positions held until the render tree has committed.
            Phase::Preparing => (
                style.style_for(SlideRole::Entering, 0.0),
                Some(style.style_for(SlideRole::Exiting, 0.0)),
            ),
            Phase::Active | Phase::Finishing => {
                let progress = self.machine.progress(self.last_tick);
                (
                    style.style_for(SlideRole::Entering, progress),
                    Some(style.style_for(SlideRole::Exiting, progress)),
                )
            }
        }
    }
}
