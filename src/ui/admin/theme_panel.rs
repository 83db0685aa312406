// SPDX-License-Identifier: MPL-2.0
//! Presentation theme selection panel.

use crate::ui::theming::Palette;
use iced::widget::{button, column, pick_list, text};
use iced::{Element, Length};

/// Theme panel state: the built-in palettes plus the current selection.
#[derive(Debug, Clone)]
pub struct State {
    palettes: Vec<Palette>,
    selected: String,
}

/// Messages for the theme panel.
#[derive(Debug, Clone)]
pub enum Message {
    Selected(String),
    Save,
}

/// Effects produced by the theme panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist the palette and apply it to the presentation.
    Save(Palette),
}

impl State {
    pub fn new(active: &Palette) -> Self {
        let mut palettes = Palette::builtins();
        // An edited or externally saved palette may not match a built-in;
        // keep it selectable at the top of the list.
        if !palettes.iter().any(|palette| palette.name == active.name) {
            palettes.insert(0, active.clone());
        }
        Self {
            selected: active.name.clone(),
            palettes,
        }
    }

    /// Handle a theme panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Selected(name) => {
                self.selected = name;
                Effect::None
            }
            Message::Save => self
                .palettes
                .iter()
                .find(|palette| palette.name == self.selected)
                .cloned()
                .map_or(Effect::None, Effect::Save),
        }
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        let names: Vec<String> = self
            .palettes
            .iter()
            .map(|candidate| candidate.name.clone())
            .collect();

        column![
            text("Theme").size(20).color(palette.text),
            pick_list(names, Some(self.selected.clone()), Message::Selected)
                .width(Length::Fixed(220.0)),
            button(text("Save theme")).on_press(Message::Save),
        ]
        .spacing(12)
        .into()
    }
}
