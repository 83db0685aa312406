// SPDX-License-Identifier: MPL-2.0
//! Transition style selection panel.

use crate::ui::slideshow::styles::TransitionStyle;
use crate::ui::theming::Palette;
use iced::widget::{button, column, pick_list, text};
use iced::{Element, Length};

/// Transition panel state.
#[derive(Debug, Clone, Default)]
pub struct State {
    selected: TransitionStyle,
}

/// Messages for the transition panel.
#[derive(Debug, Clone)]
pub enum Message {
    StyleSelected(TransitionStyle),
    Save,
}

/// Effects produced by the transition panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the selection and apply it to the running slideshow.
    Save(TransitionStyle),
}

impl State {
    pub fn new(selected: TransitionStyle) -> Self {
        Self { selected }
    }

    /// Handle a transition panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::StyleSelected(style) => {
                self.selected = style;
                Effect::None
            }
            Message::Save => Effect::Save(self.selected),
        }
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        column![
            text("Slide transition").size(20).color(palette.text),
            pick_list(
                TransitionStyle::ALL.as_slice(),
                Some(self.selected),
                Message::StyleSelected
            )
            .width(Length::Fixed(220.0)),
            button(text("Save transition")).on_press(Message::Save),
        ]
        .spacing(12)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_emits_the_selected_style() {
        let mut state = State::new(TransitionStyle::Fade);
        state.handle(Message::StyleSelected(TransitionStyle::ZoomIn));

        assert_eq!(
            state.handle(Message::Save),
            Effect::Save(TransitionStyle::ZoomIn)
        );
    }

    #[test]
    fn selection_alone_does_not_save() {
        let mut state = State::new(TransitionStyle::Fade);
        assert_eq!(
            state.handle(Message::StyleSelected(TransitionStyle::None)),
            Effect::None
        );
    }
}
