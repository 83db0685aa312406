// SPDX-License-Identifier: MPL-2.0
//! Slideshow module responsible for rendering the presentation and its
//! transition/navigation state machine.

pub mod component;
pub mod loader;
pub mod styles;
pub mod subcomponents;

use self::component::Message;
use crate::slides::Slide;
use crate::ui::slideshow::loader::ImageData;
use crate::ui::slideshow::styles::SlideStyle;
use crate::ui::state::Transform;
use crate::ui::theming::Palette;
use iced::widget::{button, column, container, mouse_area, row, stack, text, Space};
use iced::{alignment, ContentFit, Element, Length, Padding, Radians, Rotation};

/// Extra magnification applied to the current slide while zoomed.
const ZOOM_FACTOR: f32 = 1.6;

/// Renders the whole slideshow screen.
pub fn view<'a>(state: &'a component::State, palette: &'a Palette) -> Element<'a, Message> {
    let content: Element<'a, Message> = if state.slides().is_empty() {
        empty_view(palette)
    } else {
        column![
            header(state, palette),
            stage(state, palette),
            footer(state, palette),
        ]
        .into()
    };

    let background = palette.background;
    let text_color = palette.text;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            ..container::Style::default()
        })
        .into()
}

fn empty_view<'a>(palette: &'a Palette) -> Element<'a, Message> {
    container(
        text("No slides found. Add images to the slides directory.")
            .size(22)
            .color(palette.text),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn header<'a>(state: &'a component::State, palette: &'a Palette) -> Element<'a, Message> {
    let title = state
        .current_slide()
        .map(|slide| slide.title.as_str())
        .unwrap_or_default();

    row![
        text(title).size(24).color(palette.text),
        Space::new().width(Length::Fill),
        action_button("⟲", Message::RotateCounterClockwise, palette),
        action_button("⟳", Message::RotateClockwise, palette),
        action_button("⛶", Message::ToggleFullscreen, palette),
        action_button("Admin", Message::OpenAdmin, palette),
    ]
    .spacing(8)
    .padding(12)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn stage<'a>(state: &'a component::State, palette: &'a Palette) -> Element<'a, Message> {
    let (current_style, previous_style) = state.render_styles();

    let mut layers = stack![];

    if let (Some(previous), Some(style)) = (state.previous_slide(), previous_style) {
        let image = state.image_for_slide(previous);
        // The outgoing slide keeps the transform it was showing with.
        let transform = previous_transform(state, previous);
        layers = layers.push(slide_layer(
            image,
            transform,
            style,
            1.0,
            state.stage_width(),
        ));
    }

    let zoom = if state.is_zoomed() { ZOOM_FACTOR } else { 1.0 };
    let current_index = state.current_index();
    layers = layers.push(slide_layer(
        state.image_for(current_index),
        state.resolve_transform(current_index),
        current_style,
        zoom,
        state.stage_width(),
    ));

    // A sideways slide swaps its aspect ratio; widen the horizontal margin
    // so the rotated image keeps clear of the stage edges.
    let stage_padding = if state.is_current_rotated_sideways() {
        Padding::from([4.0, 48.0])
    } else {
        Padding::from(4.0)
    };

    let frame = palette.frame;
    let framed = container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(stage_padding)
        .style(move |_| container::Style {
            background: Some(frame.into()),
            ..container::Style::default()
        });

    mouse_area(framed).on_press(Message::ToggleZoom).into()
}

/// The outgoing slide's transform, resolved through its pre-handoff index.
fn previous_transform(state: &component::State, previous: &Slide) -> Transform {
    state
        .slides()
        .iter()
        .position(|slide| slide.id == previous.id)
        .map(|index| state.resolve_transform(index))
        .unwrap_or_default()
}

/// Renders one slide layer with its resolved transform and the transition
/// style directives for this frame.
fn slide_layer<'a>(
    image: Option<&'a ImageData>,
    transform: Transform,
    style: SlideStyle,
    zoom: f32,
    stage_width: f32,
) -> Element<'a, Message> {
    let Some(image) = image else {
        // Not decoded yet: hold the layer's space so the stage doesn't jump.
        return container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let handle = if transform.mirrored {
        image
            .mirrored_handle
            .clone()
            .unwrap_or_else(|| image.handle.clone())
    } else {
        image.handle.clone()
    };

    let rendered = iced::widget::image(handle)
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .rotation(Rotation::Solid(Radians(transform.rotation.radians())))
        .opacity(style.opacity)
        .scale(style.scale * zoom);

    let offset_px = style.offset * stage_width;
    let padding = Padding {
        top: 0.0,
        right: (-offset_px).max(0.0),
        bottom: 0.0,
        left: offset_px.max(0.0),
    };

    container(rendered)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn footer<'a>(state: &'a component::State, palette: &'a Palette) -> Element<'a, Message> {
    let description = state
        .current_slide()
        .map(|slide| slide.description.as_str())
        .unwrap_or_default();
    let position = format!(
        "Image {} of {}",
        state.current_index() + 1,
        state.slides().len()
    );

    let accent = palette.accent;
    container(
        column![
            row![
                action_button("‹", Message::NavigatePrevious, palette),
                Space::new().width(Length::Fill),
                text(description).size(16).color(palette.text),
                Space::new().width(Length::Fill),
                action_button("›", Message::NavigateNext, palette),
            ]
            .align_y(alignment::Vertical::Center),
            text(position).size(13).color(palette.text),
        ]
        .spacing(4)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(move |_| container::Style {
        background: Some(accent.into()),
        ..container::Style::default()
    })
    .into()
}

fn action_button<'a>(
    label: &'a str,
    message: Message,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let accent = palette.accent;
    let text_color = palette.background;
    button(text(label).size(16))
        .padding([6.0, 10.0])
        .style(move |_, _| button::Style {
            background: Some(accent.into()),
            text_color,
            ..button::Style::default()
        })
        .on_press(message)
        .into()
}
