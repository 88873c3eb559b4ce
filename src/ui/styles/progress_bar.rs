// SPDX-License-Identifier: MPL-2.0
//! Progress bar styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Answered-fraction bar under the question card.
pub fn quiz(theme: &Theme) -> progress_bar::Style {
    let track = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };

    progress_bar::Style {
        background: Background::Color(track),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

/// Full bar once every question is answered.
pub fn complete(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(palette::GRAY_100),
        bar: Background::Color(palette::SUCCESS_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}
