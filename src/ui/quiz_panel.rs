// SPDX-License-Identifier: MPL-2.0
//! Question card: counter, prompt, the four answer buttons and the retry hint.

use crate::application::QuizOrchestrator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{progress, styles};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column},
    Element, Length,
};

/// Contextual data needed to render the question card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a QuizOrchestrator,
}

/// Messages emitted by the question card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OptionSelected(String),
}

/// How an answer button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Can be picked.
    Ready,
    /// Right answer of the question just answered. Locked.
    Correct,
    /// The option just rejected.
    Wrong,
    /// Disabled.
    Inactive,
}

impl OptionState {
    fn is_enabled(self) -> bool {
        self == OptionState::Ready
    }
}

/// State of `option` on the current question.
#[must_use]
pub fn option_state(quiz: &QuizOrchestrator, option: &str) -> OptionState {
    let question = quiz.current_question();

    if quiz.is_answered(quiz.current_index()) {
        return if question.is_correct(option) {
            OptionState::Correct
        } else {
            OptionState::Inactive
        };
    }

    if quiz.pending_wrong_option() == Some(option) {
        OptionState::Wrong
    } else if quiz.phase().accepts_answers() {
        OptionState::Ready
    } else {
        OptionState::Inactive
    }
}

/// Render the question card.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let quiz = ctx.quiz;
    let question = quiz.current_question();

    let current = (quiz.current_index() + 1).to_string();
    let total = quiz.total().to_string();
    let counter = text(ctx.i18n.tr_with_args(
        "question-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    let prompt = text(question.prompt()).size(typography::TITLE_MD);

    let mut options = Column::new().spacing(spacing::SM).width(Length::Fill);
    for option in question.options() {
        options = options.push(option_button(option, option_state(quiz, option)));
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .push(counter)
        .push(prompt)
        .push(options);

    if let Some(wrong) = quiz.pending_wrong_option() {
        let hint = text(ctx.i18n.tr_with_args("retry-hint", &[("option", wrong)]))
            .size(typography::BODY);
        content = content.push(
            container(hint)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::hint),
        );
    } else if quiz.is_playing_feedback() {
        content = content.push(text(ctx.i18n.tr("feedback-playing")).size(typography::CAPTION));
    } else {
        content = content.push(text(ctx.i18n.tr("keyboard-hint")).size(typography::CAPTION));
    }

    content = content.push(progress::view(progress::ViewContext {
        i18n: ctx.i18n,
        quiz,
    }));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::QUIZ_CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn option_button(option: &str, state: OptionState) -> Element<'_, Message> {
    let style = match state {
        OptionState::Ready => styles::button::primary,
        OptionState::Correct => styles::button::correct,
        OptionState::Wrong => styles::button::wrong,
        OptionState::Inactive => styles::button::inactive,
    };

    let label = container(text(option).size(typography::BODY_LG))
        .height(Length::Fill)
        .center_y(Length::Fill);

    let mut btn = button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::OPTION_BUTTON_HEIGHT))
        .padding([0.0, spacing::MD])
        .style(style);

    if state.is_enabled() {
        btn = btn.on_press(Message::OptionSelected(option.to_string()));
    }

    btn.into()
}
