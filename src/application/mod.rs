// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`orchestrator`]: The quiz state machine
//! - [`effect`]: Side-effect requests and their dispatch
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the orchestrator and applies its effects
//!
//! # Example
//!
//! ```
//! use iced_quiz::application::{Effect, QuizOrchestrator};
//! use iced_quiz::domain::quiz::{MediaClip, Question, QuestionSet};
//!
//! let questions = QuestionSet::new(vec![Question::new(
//!     "2 + 2?",
//!     ["3", "4", "5", "22"],
//!     "4",
//! )])
//! .unwrap();
//! let mut quiz = QuizOrchestrator::new(questions);
//!
//! let effects = quiz.submit_answer("4");
//! assert!(effects.contains(&Effect::play(MediaClip::CorrectFeedback)));
//!
//! quiz.on_media_playback_ended();
//! assert!(quiz.is_complete());
//! ```

pub mod effect;
pub mod orchestrator;
pub mod port;

pub use effect::{apply_effects, Effect};
pub use orchestrator::QuizOrchestrator;
