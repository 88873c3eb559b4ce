// SPDX-License-Identifier: MPL-2.0
//! Speech synthesis port definition.
//!
//! This module defines the [`SpeechAnnouncer`] trait. Announcements are
//! fire-and-forget: the quiz never waits for speech to finish.

use std::fmt;

/// Errors reported when a phrase could not be handed to the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// No speech backend is available on this system.
    Unavailable,

    /// The backend refused the request.
    Failed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unavailable => write!(f, "No speech synthesizer available"),
            SpeechError::Failed(msg) => write!(f, "Speech request failed: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Port for speaking short phrases asynchronously.
pub trait SpeechAnnouncer {
    /// Queues `text` for speaking and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns a [`SpeechError`] if the phrase could not be queued.
    fn announce(&self, text: &str) -> Result<(), SpeechError>;
}
