// SPDX-License-Identifier: MPL-2.0
//! Side-effect requests emitted by the orchestrator.

use super::port::{MediaPlayer, SpeechAnnouncer};
use crate::domain::quiz::{Announcement, MediaClip};

/// A request the orchestrator hands to its collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Switch playback to `clip`.
    PlayMedia { clip: MediaClip, looping: bool },
    /// Speak a phrase.
    Speak(Announcement),
}

impl Effect {
    /// Playback request using the clip's own loop policy.
    #[must_use]
    pub fn play(clip: MediaClip) -> Self {
        Effect::PlayMedia {
            clip,
            looping: clip.loops(),
        }
    }
}

/// Applies `effects` in order.
///
/// `phrase` turns an announcement into the text to speak (usually a
/// localized string). Speech failures are logged and otherwise ignored.
pub fn apply_effects<F>(
    effects: &[Effect],
    player: &mut dyn MediaPlayer,
    announcer: &dyn SpeechAnnouncer,
    phrase: F,
) where
    F: Fn(Announcement) -> String,
{
    for effect in effects {
        match *effect {
            Effect::PlayMedia { clip, looping } => player.play(clip, looping),
            Effect::Speak(announcement) => {
                let text = phrase(announcement);
                if let Err(err) = announcer.announce(&text) {
                    log::warn!("Could not speak {:?}: {}", announcement, err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SpeechError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Player(Vec<(MediaClip, bool)>);

    impl MediaPlayer for Player {
        fn play(&mut self, clip: MediaClip, looping: bool) {
            self.0.push((clip, looping));
        }
    }

    #[derive(Default)]
    struct Announcer {
        spoken: RefCell<Vec<String>>,
        fail: bool,
    }

    impl SpeechAnnouncer for Announcer {
        fn announce(&self, text: &str) -> Result<(), SpeechError> {
            if self.fail {
                return Err(SpeechError::Unavailable);
            }
            self.spoken.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn play_uses_clip_loop_policy() {
        assert_eq!(
            Effect::play(MediaClip::Background),
            Effect::PlayMedia {
                clip: MediaClip::Background,
                looping: true
            }
        );
        assert_eq!(
            Effect::play(MediaClip::CorrectFeedback),
            Effect::PlayMedia {
                clip: MediaClip::CorrectFeedback,
                looping: false
            }
        );
    }

    #[test]
    fn effects_reach_collaborators_in_order() {
        let mut player = Player::default();
        let announcer = Announcer::default();
        let effects = [
            Effect::play(MediaClip::IncorrectFeedback),
            Effect::Speak(Announcement::IncorrectTryAgain),
        ];

        apply_effects(&effects, &mut player, &announcer, |a| {
            a.i18n_key().to_string()
        });

        assert_eq!(player.0, vec![(MediaClip::IncorrectFeedback, false)]);
        assert_eq!(*announcer.spoken.borrow(), vec!["speech-incorrect"]);
    }

    #[test]
    fn speech_failure_does_not_stop_media() {
        let mut player = Player::default();
        let announcer = Announcer {
            fail: true,
            ..Announcer::default()
        };
        let effects = [
            Effect::Speak(Announcement::Correct),
            Effect::play(MediaClip::Background),
        ];

        apply_effects(&effects, &mut player, &announcer, |_| String::new());

        assert_eq!(player.0, vec![(MediaClip::Background, true)]);
    }
}
