// SPDX-License-Identifier: MPL-2.0
//! Startup warnings shown as dismissable toasts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::{
    widget::{button, container, text, Column, Row, Space},
    Background, Border, Color, Element, Length, Theme,
};
use std::time::{Duration, Instant};

/// How long a warning stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Dismiss(usize),
}

#[derive(Debug, Clone)]
struct Notice {
    message_key: String,
    shown_at: Instant,
}

/// Active warnings, oldest first.
#[derive(Debug, Default)]
pub struct Manager {
    notices: Vec<Notice>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the warning with i18n key `message_key`.
    pub fn push(&mut self, message_key: impl Into<String>, now: Instant) {
        let message_key = message_key.into();
        if self.notices.iter().any(|n| n.message_key == message_key) {
            return;
        }
        self.notices.push(Notice {
            message_key,
            shown_at: now,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[cfg(test)]
    pub fn contains(&self, message_key: &str) -> bool {
        self.notices.iter().any(|n| n.message_key == message_key)
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    /// Drops warnings older than [`NOTICE_DURATION`].
    pub fn expire(&mut self, now: Instant) {
        self.notices
            .retain(|n| now.saturating_duration_since(n.shown_at) < NOTICE_DURATION);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(index) => self.dismiss(index),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS).width(Length::Shrink);
        for (index, notice) in self.notices.iter().enumerate() {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center)
                .push(text(i18n.tr(&notice.message_key)).size(typography::BODY))
                .push(Space::new().width(Length::Fixed(spacing::XS)))
                .push(
                    button(text("×").size(typography::BODY))
                        .padding([0.0, spacing::XS])
                        .on_press(Message::Dismiss(index))
                        .style(button::text),
                );
            column = column.push(
                container(row)
                    .padding([spacing::XS, spacing::MD])
                    .style(toast),
            );
        }
        column.into()
    }
}

fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_shown_once() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push("notification-speech-unavailable", now);
        manager.push("notification-speech-unavailable", now);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn notices_expire_after_duration() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push("notification-config-load-error", now);

        manager.expire(now + NOTICE_DURATION / 2);
        assert_eq!(manager.len(), 1);

        manager.expire(now + NOTICE_DURATION);
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_removes_by_index_and_ignores_out_of_range() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push("a", now);
        manager.push("b", now);

        manager.update(Message::Dismiss(5));
        assert_eq!(manager.len(), 2);

        manager.update(Message::Dismiss(0));
        assert_eq!(manager.len(), 1);
    }
}
