// SPDX-License-Identifier: MPL-2.0
//! Timer settings panel: auto-advance interval, navigation throttle, and
//! the transition prepare delay.

use crate::store::documents::TimerSettingsDoc;
use crate::ui::slideshow::subcomponents::{navigation, scheduler, transition};
use crate::ui::theming::Palette;
use iced::widget::{button, column, text, text_input};
use iced::{Element, Length};

/// Timing panel state: raw text buffers for the three settings.
#[derive(Debug, Clone, Default)]
pub struct State {
    auto_advance_ms: String,
    throttle_ms: String,
    prepare_delay_ms: String,
}

/// Messages for the timing panel.
#[derive(Debug, Clone)]
pub enum Message {
    AutoAdvanceChanged(String),
    ThrottleChanged(String),
    PrepareDelayChanged(String),
    Save,
}

/// Effects produced by the timing panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist the settings and apply them to the running slideshow.
    Save(TimerSettingsDoc),
}

impl State {
    pub fn new(doc: &TimerSettingsDoc) -> Self {
        let resolved = doc.resolve();
        Self {
            auto_advance_ms: resolved.auto_advance_interval.as_millis().to_string(),
            throttle_ms: resolved.navigation_throttle.as_millis().to_string(),
            prepare_delay_ms: resolved.transition_prepare_delay.as_millis().to_string(),
        }
    }

    /// Handle a timing panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::AutoAdvanceChanged(value) => {
                self.auto_advance_ms = value;
                Effect::None
            }
            Message::ThrottleChanged(value) => {
                self.throttle_ms = value;
                Effect::None
            }
            Message::PrepareDelayChanged(value) => {
                self.prepare_delay_ms = value;
                Effect::None
            }
            Message::Save => {
                // A field that fails to parse reverts to its default rather
                // than blocking the save.
                let doc = TimerSettingsDoc {
                    auto_advance_interval_ms: Some(parse_or(
                        &self.auto_advance_ms,
                        scheduler::DEFAULT_INTERVAL.as_millis() as u64,
                    )),
                    navigation_throttle_ms: Some(parse_or(
                        &self.throttle_ms,
                        navigation::DEFAULT_THROTTLE.as_millis() as u64,
                    )),
                    transition_prepare_delay_ms: Some(parse_or(
                        &self.prepare_delay_ms,
                        transition::DEFAULT_PREPARE_DELAY.as_millis() as u64,
                    )),
                };
                // Reflect any reverted fields back into the buffers.
                *self = Self::new(&doc);
                Effect::Save(doc)
            }
        }
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        column![
            text("Timers").size(20).color(palette.text),
            labeled_input(
                "Auto-advance interval (ms)",
                &self.auto_advance_ms,
                Message::AutoAdvanceChanged,
                palette,
            ),
            labeled_input(
                "Navigation throttle (ms)",
                &self.throttle_ms,
                Message::ThrottleChanged,
                palette,
            ),
            labeled_input(
                "Transition prepare delay (ms)",
                &self.prepare_delay_ms,
                Message::PrepareDelayChanged,
                palette,
            ),
            button(text("Save timers")).on_press(Message::Save),
        ]
        .spacing(12)
        .into()
    }
}

fn parse_or(value: &str, default: u64) -> u64 {
    value.trim().parse().unwrap_or(default)
}

fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    palette: &'a Palette,
) -> Element<'a, Message> {
    column![
        text(label).size(14).color(palette.text),
        text_input("", value).on_input(on_input).width(Length::Fixed(220.0)),
    ]
    .spacing(4)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_start_from_resolved_settings() {
        let state = State::new(&TimerSettingsDoc::default());
        assert_eq!(state.auto_advance_ms, "5000");
        assert_eq!(state.throttle_ms, "600");
        assert_eq!(state.prepare_delay_ms, "30");
    }

    #[test]
    fn save_parses_the_buffers() {
        let mut state = State::new(&TimerSettingsDoc::default());
        state.handle(Message::AutoAdvanceChanged("8000".to_string()));
        state.handle(Message::ThrottleChanged("250".to_string()));

        let effect = state.handle(Message::Save);

        assert_eq!(
            effect,
            Effect::Save(TimerSettingsDoc {
                auto_advance_interval_ms: Some(8000),
                navigation_throttle_ms: Some(250),
                transition_prepare_delay_ms: Some(30),
            })
        );
    }

    #[test]
    fn unparsable_fields_revert_to_defaults() {
        let mut state = State::new(&TimerSettingsDoc::default());
        state.handle(Message::AutoAdvanceChanged("soon".to_string()));
        state.handle(Message::ThrottleChanged("-100".to_string()));

        let effect = state.handle(Message::Save);

        assert_eq!(
            effect,
            Effect::Save(TimerSettingsDoc {
                auto_advance_interval_ms: Some(5000),
                navigation_throttle_ms: Some(600),
                transition_prepare_delay_ms: Some(30),
            })
        );
        // Buffers show what was actually saved.
        assert_eq!(state.auto_advance_ms, "5000");
    }
}
