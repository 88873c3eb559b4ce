// SPDX-License-Identifier: MPL-2.0
//! Completion card shown once every question is answered correctly.

use crate::application::QuizOrchestrator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{progress, styles};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a QuizOrchestrator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PlayAgain,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let total = ctx.quiz.total().to_string();

    let title = text(ctx.i18n.tr("completion-title")).size(typography::TITLE_LG);
    let body = text(ctx.i18n.tr_with_args("completion-body", &[("total", total.as_str())]))
        .size(typography::BODY_LG);

    let play_again = button(text(ctx.i18n.tr("play-again")).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::celebrate)
        .on_press(Message::PlayAgain);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(body)
        .push(progress::view(progress::ViewContext {
            i18n: ctx.i18n,
            quiz: ctx.quiz,
        }))
        .push(play_again);

    container(content)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::COMPLETION_CARD_WIDTH))
        .style(styles::container::card)
        .into()
}
