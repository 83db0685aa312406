// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard/window events to the screen that should see them
//! and exposes the slideshow's own timers (animation tick, auto-advance) as
//! one batched subscription.

use super::{Message, Screen};
use crate::ui::admin;
use crate::ui::slideshow::component;
use iced::{event, keyboard, Subscription};

/// Creates the event subscription for the current screen.
///
/// On the slideshow screen every keyboard and window event is routed to the
/// slideshow component (arrow keys navigate, F11/Escape manage fullscreen,
/// resizes update the stage width). On the admin screen only Escape is
/// interpreted, as "back to slideshow".
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Slideshow => event::listen_with(|event, status, _window| match &event {
            // Window events (resize) always reach the slideshow.
            event::Event::Window(_) => {
                Some(Message::Slideshow(component::Message::RawEvent(event)))
            }
            event::Event::Keyboard(_) => match status {
                event::Status::Ignored => {
                    Some(Message::Slideshow(component::Message::RawEvent(event)))
                }
                event::Status::Captured => None,
            },
            _ => None,
        }),
        Screen::Admin => event::listen_with(|event, status, _window| {
            // Text inputs capture their keystrokes; only unclaimed Escape
            // presses close the surface.
            if status == event::Status::Captured {
                return None;
            }
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) = event
            {
                return Some(Message::Admin(admin::Message::Close));
            }
            None
        }),
    }
}

/// Exposes the slideshow's timer subscriptions (animation tick while a
/// transition is in flight, auto-advance while armed). Always active so an
/// in-flight transition still settles when the admin surface opens
/// mid-animation.
pub fn create_slideshow_subscription(slideshow: &component::State) -> Subscription<Message> {
    slideshow.subscription().map(Message::Slideshow)
}
