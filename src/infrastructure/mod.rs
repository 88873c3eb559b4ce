// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping `FFmpeg` and the host's speech tools.
//!
//! - [`ffmpeg`]: one-time `FFmpeg` setup shared by every clip decoder
//! - [`speech`]: spoken feedback through a system command (implements [`SpeechAnnouncer`])
//!
//! The [`MediaPlayer`] adapter lives in `video_player` next to the decoder
//! it drives.
//!
//! [`SpeechAnnouncer`]: crate::application::port::SpeechAnnouncer
//! [`MediaPlayer`]: crate::application::port::MediaPlayer

pub mod ffmpeg;
pub mod speech;

pub use speech::{announcer_from_config, CommandAnnouncer, SilentAnnouncer};
