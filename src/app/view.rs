// SPDX-License-Identifier: MPL-2.0
//! Layout of the single quiz window: the clip fills the window, the card for
//! the current phase floats on top of it and warnings sit in the top corner.

use super::Message;
use crate::application::QuizOrchestrator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{completion, notices, quiz_panel, styles};
use crate::video_player::ClipPlayer;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, text, Stack},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a QuizOrchestrator,
    pub player: &'a ClipPlayer,
    pub notices: &'a notices::Manager,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(ctx.player.canvas().view())
        .push(foreground(&ctx));

    if !ctx.notices.is_empty() {
        stack = stack.push(
            container(ctx.notices.view(ctx.i18n).map(Message::Notice))
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        );
    }

    stack.into()
}

fn foreground<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.quiz.is_intro() {
        let caption = container(text(ctx.i18n.tr("intro-playing")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::hint);
        return container(caption)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into();
    }

    let card: Element<'a, Message> = if ctx.quiz.is_complete() {
        completion::view(completion::ViewContext {
            i18n: ctx.i18n,
            quiz: ctx.quiz,
        })
        .map(|completion::Message::PlayAgain| Message::PlayAgain)
    } else {
        quiz_panel::view(quiz_panel::ViewContext {
            i18n: ctx.i18n,
            quiz: ctx.quiz,
        })
        .map(|quiz_panel::Message::OptionSelected(option)| Message::OptionSelected(option))
    };

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
