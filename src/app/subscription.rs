// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Every timer exists exactly while the state that owns it asks for one.
//! Widget timers are keyed by [`WidgetKey`](super::page::WidgetKey), so remounting the page drops
//! the old timers and starts fresh ones.

use super::page::PageWidgets;
use super::{Message, Shortcut};
use crate::ui::carousel;
use crate::ui::counter;
use crate::ui::state::FrameInterval;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Notification auto-dismiss granularity.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Maps raw keyboard events to [`Shortcut`]s. Events already captured by a
/// widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Shortcut bound to a key press, if any.
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Shortcut::CloseModal),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Character("r") | Key::Character("R") if modifiers.command() => {
            Some(Shortcut::Reload)
        }
        _ => None,
    }
}

/// One frame timer per running counter and the carousel auto-advance timer.
pub fn create_widget_subscription(widgets: &PageWidgets) -> Subscription<Message> {
    let counters = widgets.keyed_counters().filter_map(|(key, state)| {
        state.tick_interval().map(|interval| {
            time::every(interval)
                .with(("counter", key))
                .map(|((_, key), _instant)| {
                    Message::Counter(key, counter::Message::Tick)
                })
        })
    });

    let carousel = widgets.carousel().and_then(|state| {
        state.tick_interval().map(|interval| {
            time::every(interval)
                .with(("carousel", widgets.carousel_key()))
                .map(|((_, key), _instant)| {
                    Message::Carousel(key, carousel::Message::AutoAdvance)
                })
        })
    });

    Subscription::batch(counters.chain(carousel))
}

/// Drives the smooth scroll animation while one is in progress.
pub fn create_scroll_subscription(animating: bool, frame: FrameInterval) -> Subscription<Message> {
    if animating {
        time::every(frame.as_duration()).map(Message::ScrollFrame)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_keys_map_to_shortcuts() {
        let none = Modifiers::default();
        assert_eq!(
            shortcut_for(&Key::Named(Named::Escape), none),
            Some(Shortcut::CloseModal)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowLeft), none),
            Some(Shortcut::Previous)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowRight), none),
            Some(Shortcut::Next)
        );
    }

    #[test]
    fn reload_needs_command_modifier() {
        let r = Key::Character("r".into());
        assert_eq!(shortcut_for(&r, Modifiers::default()), None);
        assert_eq!(shortcut_for(&r, Modifiers::COMMAND), Some(Shortcut::Reload));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(
            shortcut_for(&Key::Named(Named::Enter), Modifiers::default()),
            None
        );
        assert_eq!(
            shortcut_for(&Key::Character("x".into()), Modifiers::COMMAND),
            None
        );
    }
}
