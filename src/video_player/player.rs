// SPDX-License-Identifier: MPL-2.0
//! [`MediaPlayer`] adapter driving the clip subscription.

use super::subscription::{clip_playback, PlaybackMessage};
use crate::application::port::MediaPlayer;
use crate::config::MediaConfig;
use crate::domain::quiz::MediaClip;
use crate::error::VideoError;
use crate::ui::widgets::VideoCanvas;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Clip currently being decoded.
#[derive(Debug, Clone, PartialEq)]
struct ActiveClip {
    clip: MediaClip,
    path: PathBuf,
    looping: bool,
}

/// What a playback message meant for the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Nothing the orchestrator needs to hear about.
    Continue,
    /// The current non-looping clip is over.
    Ended,
}

/// Plays the configured clip for each [`MediaClip`] and keeps the latest
/// frame for display.
///
/// A clip without a usable path ends immediately when it is not looping, so
/// the quiz keeps moving without media, and shows a black frame when it is
/// the background loop. The first failure of each clip is kept for the UI
/// until [`ClipPlayer::take_error`] collects it.
pub struct ClipPlayer {
    media: MediaConfig,
    session_id: u64,
    current_clip: Option<MediaClip>,
    active: Option<ActiveClip>,
    started_at: Option<Instant>,
    pending_end: bool,
    failed: HashSet<MediaClip>,
    unreported: Option<VideoError>,
    canvas: VideoCanvas,
}

impl ClipPlayer {
    pub fn new(media: MediaConfig) -> Self {
        Self {
            media,
            session_id: 0,
            current_clip: None,
            active: None,
            started_at: None,
            pending_end: false,
            failed: HashSet::new(),
            unreported: None,
            canvas: VideoCanvas::new(),
        }
    }

    /// Clip most recently requested through [`MediaPlayer::play`].
    pub fn current_clip(&self) -> Option<MediaClip> {
        self.current_clip
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// True while a clip is being decoded.
    pub fn is_decoding(&self) -> bool {
        self.active.is_some()
    }

    pub fn canvas(&self) -> &VideoCanvas {
        &self.canvas
    }

    /// Returns and clears the end reported by a clip that had nothing to play.
    pub fn take_pending_end(&mut self) -> bool {
        std::mem::take(&mut self.pending_end)
    }

    /// Returns and clears the latest clip failure not yet shown.
    pub fn take_error(&mut self) -> Option<VideoError> {
        self.unreported.take()
    }

    /// Applies a subscription message. Messages from earlier sessions are
    /// dropped.
    pub fn handle(&mut self, message: PlaybackMessage) -> PlaybackOutcome {
        if message.session_id() != self.session_id {
            log::trace!(
                "Dropping message from stale session {} (current {})",
                message.session_id(),
                self.session_id
            );
            return PlaybackOutcome::Continue;
        }

        match message {
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                ..
            } => {
                self.canvas.set_frame(rgba_data, width, height);
                PlaybackOutcome::Continue
            }
            PlaybackMessage::EndOfStream { .. } => self.finish_current(),
            PlaybackMessage::Error { error, .. } => {
                let Some(active) = self.active.clone() else {
                    return PlaybackOutcome::Continue;
                };
                log::warn!(
                    "{:?} clip {} failed: {}",
                    active.clip,
                    active.path.display(),
                    error
                );
                self.record_failure(active.clip, error);
                if active.looping {
                    self.active = None;
                    self.canvas.clear();
                    PlaybackOutcome::Continue
                } else {
                    self.finish_current()
                }
            }
        }
    }

    /// Ends a non-looping clip that has been playing for at least `timeout`.
    ///
    /// Later messages from the abandoned decoder are ignored.
    pub fn expire_if_overdue(&mut self, now: Instant, timeout: Duration) -> bool {
        let overdue = self
            .started_at
            .is_some_and(|started| now.saturating_duration_since(started) >= timeout);
        let looping = self.active.as_ref().is_some_and(|active| active.looping);
        if !overdue || looping || self.active.is_none() {
            return false;
        }

        log::warn!(
            "{:?} clip did not finish within {:?}; moving on",
            self.current_clip,
            timeout
        );
        self.session_id += 1;
        self.finish_current() == PlaybackOutcome::Ended
    }

    /// Subscription decoding the active clip, if any.
    pub fn subscription(&self) -> iced::Subscription<PlaybackMessage> {
        match &self.active {
            Some(active) => clip_playback(active.path.clone(), self.session_id, active.looping),
            None => iced::Subscription::none(),
        }
    }

    fn finish_current(&mut self) -> PlaybackOutcome {
        match self.active.take() {
            Some(active) if !active.looping => {
                self.started_at = None;
                PlaybackOutcome::Ended
            }
            Some(active) => {
                // Looping decoders restart on their own; keep the subscription.
                self.active = Some(active);
                PlaybackOutcome::Continue
            }
            None => PlaybackOutcome::Continue,
        }
    }

    fn record_failure(&mut self, clip: MediaClip, error: VideoError) {
        if self.failed.insert(clip) {
            self.unreported = Some(error);
        }
    }

    fn usable_path(&mut self, clip: MediaClip) -> Option<PathBuf> {
        let path = self.media.clip_path(clip)?.to_path_buf();
        if path.exists() {
            Some(path)
        } else {
            log::warn!("{:?} clip {} does not exist", clip, path.display());
            self.record_failure(clip, VideoError::NotFound(path.display().to_string()));
            None
        }
    }
}

impl MediaPlayer for ClipPlayer {
    fn play(&mut self, clip: MediaClip, looping: bool) {
        self.session_id += 1;
        self.current_clip = Some(clip);
        self.pending_end = false;

        match self.usable_path(clip) {
            Some(path) => {
                log::debug!("Playing {:?} from {} (loop: {})", clip, path.display(), looping);
                self.active = Some(ActiveClip {
                    clip,
                    path,
                    looping,
                });
                self.started_at = (!looping).then(Instant::now);
            }
            None => {
                self.active = None;
                self.started_at = None;
                if looping {
                    self.canvas.clear();
                } else {
                    self.pending_end = true;
                }
            }
        }
    }
}
