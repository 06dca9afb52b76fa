// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Navigation keys are only listened to while the lightbox is open. The
//! spinner tick only runs while a batch is being generated.

use super::Message;
use crate::lightbox::{self, NavKey};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Frame interval of the spinner animation.
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Routes Escape and the arrow keys to the lightbox.
///
/// Keys are taken even when a focused widget captured them, since the overlay
/// covers the whole window while open.
pub fn lightbox_keys(open: bool) -> Subscription<Message> {
    if !open {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            nav_key(&key).map(|key| Message::Lightbox(lightbox::Message::KeyPressed(key)))
        }
        _ => None,
    })
}

pub fn spinner_tick(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}

/// Maps a pressed key to a lightbox intent.
pub fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::Escape) => Some(NavKey::Dismiss),
        Key::Named(Named::ArrowLeft) => Some(NavKey::Previous),
        Key::Named(Named::ArrowRight) => Some(NavKey::Next),
        _ => None,
    }
}
