// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::FEEDBACK_WATCHDOG_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Forwards key presses no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::Keyboard(key)),
        _ => None,
    })
}

/// Periodic tick, only while something is waiting on the clock.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(FEEDBACK_WATCHDOG_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
