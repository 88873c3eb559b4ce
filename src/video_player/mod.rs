// SPDX-License-Identifier: MPL-2.0
//! Clip playback engine.
//!
//! This module provides clip playback using FFmpeg for decoding and async
//! Tokio tasks for non-blocking frame delivery. Clip audio is not played.

mod decoder;
mod player;
pub mod subscription;

pub use decoder::{ClipDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use player::{ClipPlayer, PlaybackOutcome};
pub use subscription::{clip_playback, ClipPlaybackId, PlaybackMessage};
