// SPDX-License-Identifier: MPL-2.0
//! Quiz domain types.
//!
//! This module contains the question model and the value objects the
//! orchestrator is built from. None of them know about Iced, FFmpeg or
//! speech synthesis.

pub mod announcement;
pub mod answered;
pub mod media;
pub mod phase;
pub mod question;

// Re-export commonly used types
pub use announcement::Announcement;
pub use answered::AnsweredSet;
pub use media::MediaClip;
pub use phase::{Feedback, QuizPhase};
pub use question::{Question, QuestionSet, OPTIONS_PER_QUESTION};
