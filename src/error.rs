// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::QuizConfigError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Question Error: {0}")]
    Questions(#[from] QuizConfigError),

    #[error("Video Error: {0}")]
    Video(#[from] VideoError),

    #[error("Window Error: {0}")]
    Window(String),
}

/// Specific error types for clip playback issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    /// The clip file does not exist.
    #[error("Video file not found: {0}")]
    NotFound(String),

    /// File exists but contains no video stream
    #[error("No video stream found")]
    NoVideoStream,

    /// Decoding failed during playback
    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    /// FFmpeg could not be initialized.
    #[error("FFmpeg initialization failed: {0}")]
    Init(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::NotFound(_) => "error-video-not-found",
            VideoError::NoVideoStream => "error-video-no-stream",
            VideoError::DecodingFailed(_) => "error-video-decoding",
            VideoError::Init(_) => "error-video-init",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
