// SPDX-License-Identifier: MPL-2.0
//! Media clips the quiz switches between.

use super::phase::Feedback;

/// Identifies which configured clip drives playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaClip {
    /// Optional clip shown before the first question.
    Intro,
    /// Idle loop shown whenever no feedback plays.
    #[default]
    Background,
    /// Clip played after a correct answer.
    CorrectFeedback,
    /// Clip played after a wrong answer.
    IncorrectFeedback,
}

impl MediaClip {
    /// Clip matching a feedback outcome.
    #[must_use]
    pub fn for_feedback(feedback: &Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::CorrectFeedback,
            Feedback::Incorrect { .. } => Self::IncorrectFeedback,
        }
    }

    /// Whether the clip restarts at end of stream instead of ending.
    #[must_use]
    pub fn loops(self) -> bool {
        matches!(self, Self::Background)
    }

    #[must_use]
    pub fn is_feedback(self) -> bool {
        matches!(self, Self::CorrectFeedback | Self::IncorrectFeedback)
    }
}
