// SPDX-License-Identifier: MPL-2.0
//! Progress bar showing the share of questions answered correctly.

use crate::application::QuizOrchestrator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{progress_bar, text, Column},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a QuizOrchestrator,
}

/// Render the bar with its "answered / total" caption.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let answered = ctx.quiz.answered().count().to_string();
    let total = ctx.quiz.total().to_string();
    let caption = text(ctx.i18n.tr_with_args(
        "progress-label",
        &[("answered", answered.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    let style = if ctx.quiz.is_complete() {
        styles::progress_bar::complete
    } else {
        styles::progress_bar::quiz
    };

    let bar = progress_bar(0.0..=1.0, ctx.quiz.progress())
        .girth(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(style);

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(bar)
        .push(caption)
        .into()
}
