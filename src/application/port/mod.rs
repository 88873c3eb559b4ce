// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: Clip selection and playback
//! - [`speech`]: Spoken feedback
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - No `async fn` - completion comes back as a message through Iced

pub mod media;
pub mod speech;

// Re-export main types for convenience
pub use media::MediaPlayer;
pub use speech::{SpeechAnnouncer, SpeechError};
