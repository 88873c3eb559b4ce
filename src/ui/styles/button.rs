// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Answer options use one style per state: `primary` while it can be picked,
//! `correct` for the right answer of an answered question, `wrong` for the
//! option just rejected, and `inactive` for everything else.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(fill: Color, edge: Color, text_color: Color, shadow: iced::Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Selectable option and main actions.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, WHITE, shadow::SM)
        }
        button::Status::Hovered => {
            filled(palette::PRIMARY_400, palette::PRIMARY_500, WHITE, shadow::MD)
        }
        button::Status::Disabled => inactive(theme, status),
    }
}

/// Correct answer of an answered question. Locked.
pub fn correct(_theme: &Theme, _status: button::Status) -> button::Style {
    let mut style = filled(palette::SUCCESS_500, palette::SUCCESS_600, WHITE, shadow::SM);
    style.border.width = border::WIDTH_MD;
    style
}

/// Option that was just answered wrongly.
pub fn wrong(_theme: &Theme, _status: button::Status) -> button::Style {
    let mut style = filled(palette::ERROR_500, palette::ERROR_600, WHITE, shadow::SM);
    style.border.width = border::WIDTH_MD;
    style
}

/// Greyed out, non-interactive option.
pub fn inactive(theme: &Theme, _status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let fill = if is_light {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    filled(fill, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// "Play again" button on the completion card.
pub fn celebrate(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => palette::SUCCESS_500,
        _ => palette::SUCCESS_600,
    };
    let mut style = filled(fill, palette::SUCCESS_600, WHITE, shadow::MD);
    style.border.radius = radius::FULL.into();
    style
}
