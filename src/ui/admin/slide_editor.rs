// SPDX-License-Identifier: MPL-2.0
//! Slide metadata editor: title, description, and visibility per image.

use crate::slides::display_name;
use crate::store::documents::{SlideDetail, SlideDetailsDoc};
use crate::ui::theming::Palette;
use iced::widget::{button, checkbox, column, pick_list, row, text, text_input};
use iced::{Element, Length};

/// Slide editor state. Operates on the full scanned image list, hidden
/// slides included; that is the whole point of the hidden toggle.
#[derive(Debug, Clone, Default)]
pub struct State {
    paths: Vec<String>,
    details: SlideDetailsDoc,
    selected: Option<String>,
    title: String,
    description: String,
    is_hidden: bool,
}

/// Messages for the slide editor.
#[derive(Debug, Clone)]
pub enum Message {
    Selected(String),
    TitleChanged(String),
    DescriptionChanged(String),
    HiddenToggled(bool),
    Save,
    /// Jump the running slideshow to the selected slide.
    ShowInSlideshow,
}

/// Effects produced by the slide editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist the edited detail record and rebuild the slide list.
    Save { path: String, detail: SlideDetail },
    /// Ask the slideshow to present this slide.
    Show { path: String },
}

impl State {
    pub fn new(paths: Vec<String>, details: SlideDetailsDoc, current: Option<String>) -> Self {
        let mut state = Self {
            paths,
            details,
            ..Self::default()
        };
        if let Some(path) = current {
            state.select(path);
        }
        state
    }

    /// Handle a slide editor message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Selected(path) => {
                self.select(path);
                Effect::None
            }
            Message::TitleChanged(title) => {
                self.title = title;
                Effect::None
            }
            Message::DescriptionChanged(description) => {
                self.description = description;
                Effect::None
            }
            Message::HiddenToggled(hidden) => {
                self.is_hidden = hidden;
                Effect::None
            }
            Message::Save => {
                let Some(path) = self.selected.clone() else {
                    return Effect::None;
                };
                let detail = SlideDetail {
                    title: Some(self.title.clone()),
                    description: Some(self.description.clone()),
                    is_hidden: Some(self.is_hidden),
                };
                // Keep the local snapshot current so re-selecting the slide
                // shows what was just saved.
                self.details.insert(path.clone(), detail.clone());
                Effect::Save { path, detail }
            }
            Message::ShowInSlideshow => match self.selected.clone() {
                Some(path) => Effect::Show { path },
                None => Effect::None,
            },
        }
    }

    /// Loads the edit buffers for a slide, falling back to the file-stem
    /// title the slideshow itself would use.
    fn select(&mut self, path: String) {
        let detail = self.details.get(&path);
        let fallback = display_name(path.rsplit('/').next().unwrap_or(&path)).to_string();
        self.title = detail
            .and_then(|d| d.title.clone())
            .unwrap_or(fallback);
        self.description = detail.and_then(|d| d.description.clone()).unwrap_or_default();
        self.is_hidden = detail.and_then(|d| d.is_hidden).unwrap_or(false);
        self.selected = Some(path);
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        let mut content = column![
            text("Slide details").size(20).color(palette.text),
            pick_list(
                self.paths.as_slice(),
                self.selected.as_ref(),
                Message::Selected
            )
            .placeholder("Choose a slide")
            .width(Length::Fill),
        ]
        .spacing(12);

        if self.selected.is_some() {
            content = content
                .push(
                    text_input("Title", &self.title)
                        .on_input(Message::TitleChanged)
                        .width(Length::Fill),
                )
                .push(
                    text_input("Description", &self.description)
                        .on_input(Message::DescriptionChanged)
                        .width(Length::Fill),
                )
                .push(
                    checkbox(self.is_hidden)
                        .label("Hidden from the slideshow")
                        .on_toggle(Message::HiddenToggled),
                )
                .push(
                    row![
                        button(text("Save slide")).on_press(Message::Save),
                        button(text("Show in slideshow")).on_press(Message::ShowInSlideshow),
                    ]
                    .spacing(8),
                );
        }

        content.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<String> {
        vec!["slides/a.jpg".to_string(), "slides/b.jpg".to_string()]
    }

    #[test]
    fn selecting_a_slide_without_details_uses_the_file_stem_title() {
        let mut state = State::new(paths(), SlideDetailsDoc::default(), None);
        state.handle(Message::Selected("slides/a.jpg".to_string()));

        assert_eq!(state.title, "a");
        assert_eq!(state.description, "");
        assert!(!state.is_hidden);
    }

    #[test]
    fn selecting_a_slide_with_details_loads_them() {
        let mut details = SlideDetailsDoc::default();
        details.insert(
            "slides/b.jpg".to_string(),
            SlideDetail {
                title: Some("Exhibit B".to_string()),
                description: Some("Second".to_string()),
                is_hidden: Some(true),
            },
        );
        let mut state = State::new(paths(), details, None);

        state.handle(Message::Selected("slides/b.jpg".to_string()));

        assert_eq!(state.title, "Exhibit B");
        assert_eq!(state.description, "Second");
        assert!(state.is_hidden);
    }

    #[test]
    fn save_without_selection_is_a_no_op() {
        let mut state = State::new(paths(), SlideDetailsDoc::default(), None);
        assert_eq!(state.handle(Message::Save), Effect::None);
    }

    #[test]
    fn save_emits_the_edited_detail() {
        let mut state = State::new(paths(), SlideDetailsDoc::default(), None);
        state.handle(Message::Selected("slides/a.jpg".to_string()));
        state.handle(Message::TitleChanged("Opening".to_string()));
        state.handle(Message::HiddenToggled(true));

        let effect = state.handle(Message::Save);

        assert_eq!(
            effect,
            Effect::Save {
                path: "slides/a.jpg".to_string(),
                detail: SlideDetail {
                    title: Some("Opening".to_string()),
                    description: Some(String::new()),
                    is_hidden: Some(true),
                },
            }
        );
    }

    #[test]
    fn show_in_slideshow_carries_the_selected_path() {
        let mut state = State::new(paths(), SlideDetailsDoc::default(), None);
        assert_eq!(state.handle(Message::ShowInSlideshow), Effect::None);

        state.handle(Message::Selected("slides/b.jpg".to_string()));
        assert_eq!(
            state.handle(Message::ShowInSlideshow),
            Effect::Show {
                path: "slides/b.jpg".to_string()
            }
        );
    }

    #[test]
    fn reselecting_after_save_shows_the_saved_values() {
        let mut state = State::new(paths(), SlideDetailsDoc::default(), None);
        state.handle(Message::Selected("slides/a.jpg".to_string()));
        state.handle(Message::TitleChanged("Opening".to_string()));
        state.handle(Message::Save);

        state.handle(Message::Selected("slides/b.jpg".to_string()));
        state.handle(Message::Selected("slides/a.jpg".to_string()));

        assert_eq!(state.title, "Opening");
    }
}
