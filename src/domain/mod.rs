// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core quiz rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`QuizConfigError`](error::QuizConfigError))
//! - [`quiz`]: Quiz types ([`Question`](quiz::Question),
//!   [`QuestionSet`](quiz::QuestionSet), [`QuizPhase`](quiz::QuizPhase),
//!   [`MediaClip`](quiz::MediaClip), [`AnsweredSet`](quiz::AnsweredSet))

pub mod error;
pub mod quiz;
