// SPDX-License-Identifier: MPL-2.0
//! Spoken phrases requested by the quiz.

/// A phrase the quiz asks to be spoken.
///
/// The text itself is localized by the presentation layer through
/// [`Announcement::i18n_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    Correct,
    IncorrectTryAgain,
    Completion,
}

impl Announcement {
    /// Returns the i18n message key for this phrase.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Announcement::Correct => "speech-correct",
            Announcement::IncorrectTryAgain => "speech-incorrect",
            Announcement::Completion => "speech-completed",
        }
    }
}
