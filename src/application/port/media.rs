// SPDX-License-Identifier: MPL-2.0
//! Media playback port definition.
//!
//! This module defines the [`MediaPlayer`] trait the quiz uses to switch
//! between its clips. The FFmpeg-backed adapter lives in
//! [`crate::video_player`].
//!
//! # Contract
//!
//! - `play` replaces whatever clip is currently playing
//! - a non-looping play-through produces exactly one "ended" notification,
//!   delivered back to the orchestrator through
//!   [`QuizOrchestrator::on_media_playback_ended`](crate::application::QuizOrchestrator::on_media_playback_ended)
//! - a looping clip restarts at end of stream and never notifies

use crate::domain::quiz::MediaClip;

/// Port for selecting which clip drives playback.
pub trait MediaPlayer {
    /// Starts `clip` from the beginning.
    fn play(&mut self, clip: MediaClip, looping: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MediaPlayer) {}

    struct Recorder(Vec<(MediaClip, bool)>);

    impl MediaPlayer for Recorder {
        fn play(&mut self, clip: MediaClip, looping: bool) {
            self.0.push((clip, looping));
        }
    }

    #[test]
    fn recorder_receives_requests_in_order() {
        let mut recorder = Recorder(Vec::new());
        recorder.play(MediaClip::CorrectFeedback, false);
        recorder.play(MediaClip::Background, true);
        assert_eq!(
            recorder.0,
            vec![
                (MediaClip::CorrectFeedback, false),
                (MediaClip::Background, true)
            ]
        );
    }
}
