// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Carousel timers are keyed by `(kind, mount id)`. Remounting a carousel
//! changes the key, so iced drops the old timer and starts a new one.

use super::Message;
use crate::config::TRANSITION_FRAME_MS;
use crate::rotation::{Direction, TickInterval};
use crate::ui::carousel::{CarouselKind, MountId};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Window lifecycle events and page-level keyboard shortcuts.
///
/// Keys are only handled when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        match &event {
            Event::Window(window::Event::CloseRequested) => {
                return Some(Message::WindowCloseRequested(window_id));
            }
            Event::Window(window::Event::Opened { .. }) => {
                return Some(Message::WindowOpened(window_id));
            }
            Event::Window(window::Event::Resized(size)) => {
                return Some(Message::WindowResized(*size));
            }
            _ => {}
        }

        if matches!(status, event::Status::Captured) {
            return None;
        }

        let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event else {
            return None;
        };
        match key.as_ref() {
            Key::Named(Named::F5) => Some(Message::ContentReloadRequested),
            Key::Character("r") if modifiers.command() => Some(Message::ContentReloadRequested),
            Key::Named(Named::ArrowLeft) => Some(Message::StepVideos(Direction::Previous)),
            Key::Named(Named::ArrowRight) => Some(Message::StepVideos(Direction::Next)),
            _ => None,
        }
    })
}

/// One timer per automatic carousel.
pub fn create_carousel_subscription(
    timers: Vec<(CarouselKind, MountId, TickInterval)>,
) -> Subscription<Message> {
    Subscription::batch(timers.into_iter().map(|(kind, mount, interval)| {
        time::every(interval.as_duration())
            .with((kind, mount))
            .map(|((kind, mount), _instant)| Message::CarouselTick { kind, mount })
    }))
}

/// Animation frames, only while a transition is running.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(TRANSITION_FRAME_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
