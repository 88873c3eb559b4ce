// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for clip playback events.
//!
//! Connects a [`ClipDecoder`] to the UI event loop. Every message carries the
//! session id it was started with so late events from a replaced clip can be
//! told apart from the current one.

use super::decoder::into_video_error;
use super::{ClipDecoder, DecoderCommand, DecoderEvent};
use crate::error::VideoError;
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;

/// Subscription ID for clip playback.
/// Each playback session gets a unique ID so a new clip recreates the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipPlaybackId(u64);

/// Messages emitted by the clip playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// A new frame is ready for display.
    FrameReady {
        session_id: u64,
        /// RGBA pixel data.
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
    },

    /// A non-looping clip reached its end.
    EndOfStream { session_id: u64 },

    /// The clip could not be played.
    Error { session_id: u64, error: VideoError },
}

impl PlaybackMessage {
    /// Session the message belongs to.
    #[must_use]
    pub fn session_id(&self) -> u64 {
        match self {
            PlaybackMessage::FrameReady { session_id, .. }
            | PlaybackMessage::EndOfStream { session_id }
            | PlaybackMessage::Error { session_id, .. } => *session_id,
        }
    }

    fn from_event(session_id: u64, event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                session_id,
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
            },
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream { session_id },
            DecoderEvent::Error(error) => PlaybackMessage::Error { session_id, error },
        }
    }
}

/// Creates a clip playback subscription.
///
/// The decoder is started as soon as the subscription runs and stopped when
/// Iced drops it, which happens as soon as a different `session_id` is
/// requested.
pub fn clip_playback(
    clip_path: PathBuf,
    session_id: u64,
    looping: bool,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with_id(
        ClipPlaybackId(session_id),
        stream::channel(100, move |mut output| async move {
            match ClipDecoder::new(&clip_path, looping) {
                Ok(mut decoder) => {
                    if let Err(e) = decoder.send_command(DecoderCommand::Play) {
                        let _ = output
                            .send(PlaybackMessage::Error {
                                session_id,
                                error: into_video_error(e),
                            })
                            .await;
                    } else {
                        while let Some(event) = decoder.recv_event().await {
                            let finished = !matches!(event, DecoderEvent::FrameReady(_));
                            let _ = output
                                .send(PlaybackMessage::from_event(session_id, event))
                                .await;
                            if finished {
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    let _ = output
                        .send(PlaybackMessage::Error {
                            session_id,
                            error: into_video_error(e),
                        })
                        .await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}
