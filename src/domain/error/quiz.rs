// SPDX-License-Identifier: MPL-2.0
//! Question configuration errors.

use std::fmt;

/// Reasons a question list is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizConfigError {
    /// The question list is empty.
    NoQuestions,

    /// A question does not carry exactly the expected number of options.
    WrongOptionCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The same option text appears twice in one question.
    DuplicateOption { index: usize, option: String },

    /// The correct answer is not one of the question's options.
    AnswerNotAnOption { index: usize, answer: String },

    /// The prompt is empty or whitespace only.
    EmptyPrompt { index: usize },
}

impl QuizConfigError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            QuizConfigError::NoQuestions => "error-questions-empty",
            QuizConfigError::WrongOptionCount { .. } => "error-questions-option-count",
            QuizConfigError::DuplicateOption { .. } => "error-questions-duplicate-option",
            QuizConfigError::AnswerNotAnOption { .. } => "error-questions-answer-missing",
            QuizConfigError::EmptyPrompt { .. } => "error-questions-empty-prompt",
        }
    }
}

impl fmt::Display for QuizConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Indices are shown 1-based to match the question numbering on screen.
        match self {
            QuizConfigError::NoQuestions => write!(f, "question list is empty"),
            QuizConfigError::WrongOptionCount {
                index,
                expected,
                found,
            } => write!(
                f,
                "question {} has {} options, expected {}",
                index + 1,
                found,
                expected
            ),
            QuizConfigError::DuplicateOption { index, option } => {
                write!(f, "question {} lists option {:?} twice", index + 1, option)
            }
            QuizConfigError::AnswerNotAnOption { index, answer } => write!(
                f,
                "question {} answer {:?} is not one of its options",
                index + 1,
                answer
            ),
            QuizConfigError::EmptyPrompt { index } => {
                write!(f, "question {} has an empty prompt", index + 1)
            }
        }
    }
}

impl std::error::Error for QuizConfigError {}
