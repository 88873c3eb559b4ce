// SPDX-License-Identifier: MPL-2.0
//! Quiz phase state machine.
//!
//! Manages the lifecycle of one quiz session with clear state transitions:
//! - Intro: an introductory clip plays before the first question
//! - AwaitingAnswer: the question card accepts a choice
//! - PlayingFeedback: a correct/incorrect clip plays, input is locked
//! - Completed: every question has been answered correctly

/// Outcome being played back after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The submitted option was the correct answer.
    Correct,
    /// The submitted option was wrong. Holds the option text for the
    /// "try again" highlight.
    Incorrect { option: String },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Represents where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Intro clip is playing; the question card is hidden.
    Intro,
    /// Waiting for the user to pick an option.
    #[default]
    AwaitingAnswer,
    /// A feedback clip is playing.
    PlayingFeedback(Feedback),
    /// All questions answered correctly.
    Completed,
}

impl QuizPhase {
    /// Returns true if answers are accepted.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }

    #[must_use]
    pub fn is_playing_feedback(&self) -> bool {
        matches!(self, Self::PlayingFeedback(_))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub fn is_intro(&self) -> bool {
        matches!(self, Self::Intro)
    }

    /// Option text of the wrong answer whose feedback is playing, if any.
    pub fn pending_wrong_option(&self) -> Option<&str> {
        match self {
            Self::PlayingFeedback(Feedback::Incorrect { option }) => Some(option),
            _ => None,
        }
    }
}
