// SPDX-License-Identifier: MPL-2.0
//! Administrative configuration surface.
//!
//! Hosts the slide editor, timing, transition, and theme panels, plus the
//! "now showing" indicator fed by the slideshow's slide-changed
//! notification. While this surface is open the auto-advance scheduler is
//! suspended; closing it hands control back to the presentation.

pub mod slide_editor;
pub mod theme_panel;
pub mod timing_panel;
pub mod transition_panel;

use crate::slides::Slide;
use crate::store::documents::{SlideDetail, SlideDetailsDoc, TimerSettingsDoc};
use crate::ui::slideshow::styles::TransitionStyle;
use crate::ui::theming::Palette;
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment, Element, Length};
use std::fmt;

/// The admin surface tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Slides,
    Timing,
    Transition,
    Theme,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Slides, Self::Timing, Self::Transition, Self::Theme];
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tab::Slides => "Slides",
            Tab::Timing => "Timing",
            Tab::Transition => "Transition",
            Tab::Theme => "Theme",
        };
        f.write_str(label)
    }
}

/// Admin surface state.
#[derive(Debug, Clone)]
pub struct State {
    tab: Tab,
    slide_editor: slide_editor::State,
    timing: timing_panel::State,
    transition: transition_panel::State,
    theme: theme_panel::State,
    now_showing: Option<Slide>,
}

/// Messages for the admin surface.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SlideEditor(slide_editor::Message),
    Timing(timing_panel::Message),
    Transition(transition_panel::Message),
    Theme(theme_panel::Message),
    Close,
}

/// Effects the application performs on behalf of the admin surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Return to the slideshow.
    Close,
    SaveSlideDetail { path: String, detail: SlideDetail },
    SaveTimerSettings(TimerSettingsDoc),
    SaveTransition(TransitionStyle),
    SaveTheme(Palette),
    /// Jump the running slideshow to the slide with this source path.
    ShowSlide { path: String },
}

impl State {
    pub fn new(
        slide_paths: Vec<String>,
        details: SlideDetailsDoc,
        timer_settings: &TimerSettingsDoc,
        transition: TransitionStyle,
        palette: &Palette,
        current: Option<String>,
    ) -> Self {
        Self {
            tab: Tab::Slides,
            slide_editor: slide_editor::State::new(slide_paths, details, current),
            timing: timing_panel::State::new(timer_settings),
            transition: transition_panel::State::new(transition),
            theme: theme_panel::State::new(palette),
            now_showing: None,
        }
    }

    /// Handle an admin message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Effect::None
            }
            Message::SlideEditor(msg) => match self.slide_editor.handle(msg) {
                slide_editor::Effect::None => Effect::None,
                slide_editor::Effect::Save { path, detail } => {
                    Effect::SaveSlideDetail { path, detail }
                }
                slide_editor::Effect::Show { path } => Effect::ShowSlide { path },
            },
            Message::Timing(msg) => match self.timing.handle(msg) {
                timing_panel::Effect::None => Effect::None,
                timing_panel::Effect::Save(doc) => Effect::SaveTimerSettings(doc),
            },
            Message::Transition(msg) => match self.transition.handle(msg) {
                transition_panel::Effect::None => Effect::None,
                transition_panel::Effect::Save(style) => Effect::SaveTransition(style),
            },
            Message::Theme(msg) => match self.theme.handle(msg) {
                theme_panel::Effect::None => Effect::None,
                theme_panel::Effect::Save(palette) => Effect::SaveTheme(palette),
            },
            Message::Close => Effect::Close,
        }
    }

    /// Updates the "now showing" indicator. Fed by the slideshow's
    /// slide-changed notification, once per committed index change.
    pub fn set_now_showing(&mut self, slide: Slide) {
        self.now_showing = Some(slide);
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        let mut tabs = row![].spacing(8);
        for tab in Tab::ALL {
            let label = text(tab.to_string()).size(15);
            let tab_button = if tab == self.tab {
                button(label)
            } else {
                button(label).on_press(Message::TabSelected(tab))
            };
            tabs = tabs.push(tab_button);
        }

        let now_showing = self
            .now_showing
            .as_ref()
            .map(|slide| format!("Now showing: {} ({})", slide.title, slide.src))
            .unwrap_or_else(|| "Now showing: —".to_string());

        let panel: Element<'a, Message> = match self.tab {
            Tab::Slides => self.slide_editor.view(palette).map(Message::SlideEditor),
            Tab::Timing => self.timing.view(palette).map(Message::Timing),
            Tab::Transition => self.transition.view(palette).map(Message::Transition),
            Tab::Theme => self.theme.view(palette).map(Message::Theme),
        };

        let header = row![
            text("Admin").size(24).color(palette.text),
            Space::new().width(Length::Fill),
            text(now_showing).size(14).color(palette.text),
            Space::new().width(Length::Fixed(16.0)),
            button(text("Back to slideshow")).on_press(Message::Close),
        ]
        .align_y(alignment::Vertical::Center);

        let background = palette.background;
        container(column![header, tabs, panel].spacing(16).padding(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(background.into()),
                ..container::Style::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> State {
        State::new(
            vec!["slides/a.jpg".to_string()],
            SlideDetailsDoc::default(),
            &TimerSettingsDoc::default(),
            TransitionStyle::Fade,
            &Palette::default(),
            Some("slides/a.jpg".to_string()),
        )
    }

    #[test]
    fn close_produces_close_effect() {
        let mut state = admin();
        assert_eq!(state.handle(Message::Close), Effect::Close);
    }

    #[test]
    fn panel_saves_bubble_up_as_effects() {
        let mut state = admin();

        let effect = state.handle(Message::Transition(transition_panel::Message::StyleSelected(
            TransitionStyle::None,
        )));
        assert_eq!(effect, Effect::None);

        let effect = state.handle(Message::Transition(transition_panel::Message::Save));
        assert_eq!(effect, Effect::SaveTransition(TransitionStyle::None));
    }

    #[test]
    fn slide_save_carries_path_and_detail() {
        let mut state = admin();
        state.handle(Message::SlideEditor(slide_editor::Message::TitleChanged(
            "Opening".to_string(),
        )));

        let effect = state.handle(Message::SlideEditor(slide_editor::Message::Save));
        assert!(matches!(
            effect,
            Effect::SaveSlideDetail { ref path, ref detail }
                if path == "slides/a.jpg" && detail.title.as_deref() == Some("Opening")
        ));
    }
}
