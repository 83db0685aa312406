// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the slideshow and the
//! admin surface.
//!
//! The `App` struct wires the slideshow component, the admin panels, and
//! the persistence layers together, and translates component effects into
//! side effects like document writes or window mode changes. Persistence
//! policy lives here: every write is fire-and-forget. A failed save is
//! logged and the in-memory state keeps the optimistic value.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::slides;
use crate::store::documents::{self, TimerSettingsDoc};
use crate::ui::admin;
use crate::ui::slideshow::{self, component};
use crate::ui::theming::{Palette, ThemeMode};
use iced::{window, Element, Subscription, Task};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Root Iced application state bridging the slideshow, the admin surface,
/// and persisted documents.
pub struct App {
    screen: Screen,
    slideshow: component::State,
    admin: admin::State,
    palette: Palette,
    theme_mode: ThemeMode,
    fullscreen: bool,
    /// Every scanned file name, hidden slides included (the admin slide
    /// editor operates on the full list).
    file_names: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        let timer_settings = TimerSettingsDoc::default();
        let palette = Palette::default();
        Self {
            screen: Screen::Slideshow,
            slideshow: component::State::new(
                Vec::new(),
                PathBuf::from("slides"),
                Default::default(),
                timer_settings.resolve(),
                Default::default(),
                false,
            ),
            admin: admin::State::new(
                Vec::new(),
                Default::default(),
                &timer_settings,
                Default::default(),
                &palette,
                None,
            ),
            palette,
            theme_mode: ThemeMode::default(),
            fullscreen: false,
            file_names: Vec::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config, the persisted documents,
    /// and a scan of the slides directory, then kicks off the first image
    /// load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let mut cfg = config::load();

        let slides_dir = flags
            .slides_dir
            .clone()
            .or_else(|| cfg.slideshow.slides_dir.clone())
            .unwrap_or_else(|| "slides".to_string());
        let slides_dir = PathBuf::from(slides_dir);

        // Remember an explicitly given directory for the next launch.
        if flags.slides_dir.is_some()
            && cfg.slideshow.slides_dir.as_deref() != flags.slides_dir.as_deref()
        {
            cfg.slideshow.slides_dir = flags.slides_dir.clone();
            if let Err(err) = config::save(&cfg) {
                log::warn!("failed to save config: {}", err);
            }
        }

        let file_names = match slides::scan_slides_dir(&slides_dir) {
            Ok(names) => names,
            Err(err) => {
                log::error!("failed to scan slides directory: {}", err);
                Vec::new()
            }
        };

        let rotations = documents::load_rotations(None);
        let details = documents::load_slide_details(None);
        let transition = documents::load_transition(None);
        let timer_settings = documents::load_timer_settings(None);
        let palette = documents::load_theme(None)
            .map(|doc| Palette::from_doc(&doc))
            .unwrap_or_default();

        let slide_list = slides::build_slide_list(&file_names, &details);
        let current_src = slide_list.first().map(|slide| slide.src.clone());

        let mut slideshow = component::State::new(
            slide_list,
            slides_dir,
            transition.style(),
            timer_settings.resolve(),
            rotations,
            cfg.slideshow.bypass_throttle_for_instant,
        );

        let admin = admin::State::new(
            file_names
                .iter()
                .map(|name| format!("slides/{name}"))
                .collect(),
            details,
            &timer_settings,
            transition.style(),
            &palette,
            current_src,
        );

        let initial_load = slideshow.load_current().map(Message::Slideshow);

        let app = App {
            screen: Screen::Slideshow,
            slideshow,
            admin,
            palette,
            theme_mode: cfg.general.theme_mode,
            fullscreen: false,
            file_names,
        };

        (app, initial_load)
    }

    fn title(&self) -> String {
        match self.slideshow.current_slide() {
            Some(slide) => format!("{} - IcedSlides", slide.title),
            None => "IcedSlides".to_string(),
        }
    }

    fn theme(&self) -> iced::Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_slideshow_subscription(&self.slideshow),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slideshow(msg) => {
                let (effect, task) = self.slideshow.handle_message(msg);
                let follow_up = self.perform_slideshow_effect(effect);
                Task::batch([task.map(Message::Slideshow), follow_up])
            }
            Message::Admin(msg) => {
                let effect = self.admin.handle(msg);
                self.perform_admin_effect(effect)
            }
        }
    }

    fn perform_slideshow_effect(&mut self, effect: component::Effect) -> Task<Message> {
        match effect {
            component::Effect::None => Task::none(),
            component::Effect::PersistRotation { path, degrees } => {
                // Fire-and-forget: the in-memory rotation already applied,
                // and a failed write must not interrupt the show.
                if let Err(err) = documents::update_rotation(None, &path, degrees) {
                    log::error!("failed to persist rotation for {}: {}", path, err);
                }
                Task::none()
            }
            component::Effect::SlideChanged { slide } => {
                self.admin.set_now_showing(slide);
                Task::none()
            }
            component::Effect::OpenAdmin => {
                self.screen = Screen::Admin;
                self.slideshow.set_admin_open(true);
                Task::none()
            }
            component::Effect::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                set_window_mode(self.fullscreen)
            }
            component::Effect::ExitFullscreen => {
                if self.fullscreen {
                    self.fullscreen = false;
                    set_window_mode(false)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn perform_admin_effect(&mut self, effect: admin::Effect) -> Task<Message> {
        match effect {
            admin::Effect::None => Task::none(),
            admin::Effect::Close => {
                self.screen = Screen::Slideshow;
                self.slideshow.set_admin_open(false);
                Task::none()
            }
            admin::Effect::SaveSlideDetail { path, detail } => {
                if let Err(err) = documents::update_slide_detail(None, &path, detail) {
                    log::error!("failed to save slide details for {}: {}", path, err);
                }
                // Slide metadata feeds list construction, so the list is
                // rebuilt from the updated document snapshot.
                let details = documents::load_slide_details(None);
                let slide_list = slides::build_slide_list(&self.file_names, &details);
                self.slideshow
                    .reload_slides(slide_list)
                    .map(Message::Slideshow)
            }
            admin::Effect::SaveTimerSettings(doc) => {
                if let Err(err) = documents::save_timer_settings(None, &doc) {
                    log::error!("failed to save timer settings: {}", err);
                }
                self.slideshow.apply_timer_settings(doc.resolve());
                Task::none()
            }
            admin::Effect::SaveTransition(style) => {
                let doc = documents::TransitionDoc::from_style(style);
                if let Err(err) = documents::save_transition(None, &doc) {
                    log::error!("failed to save transition: {}", err);
                }
                self.slideshow.set_style(style);
                Task::none()
            }
            admin::Effect::SaveTheme(palette) => {
                if let Err(err) = documents::save_theme(None, &palette.to_doc()) {
                    log::error!("failed to save theme: {}", err);
                }
                self.palette = palette;
                Task::none()
            }
            admin::Effect::ShowSlide { path } => {
                // Hidden slides are not in the navigable list; the jump
                // quietly does nothing for them.
                let Some(index) = self
                    .slideshow
                    .slides()
                    .iter()
                    .position(|slide| slide.src == path)
                else {
                    return Task::none();
                };
                let (effect, task) = self
                    .slideshow
                    .handle_message(component::Message::NavigateTo(index));
                let follow_up = self.perform_slideshow_effect(effect);
                Task::batch([task.map(Message::Slideshow), follow_up])
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Slideshow => {
                slideshow::view(&self.slideshow, &self.palette).map(Message::Slideshow)
            }
            Screen::Admin => self.admin.view(&self.palette).map(Message::Admin),
        }
    }
}

fn set_window_mode(fullscreen: bool) -> Task<Message> {
    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::latest().and_then(move |id| window::set_mode(id, mode))
}
