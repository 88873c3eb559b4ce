// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every state change goes through the orchestrator; the effects it returns
//! are applied to the player and the announcer here.

use super::Message;
use crate::application::port::SpeechAnnouncer;
use crate::application::{apply_effects, Effect, QuizOrchestrator};
use crate::domain::quiz::OPTIONS_PER_QUESTION;
use crate::i18n::fluent::I18n;
use crate::ui::notices;
use crate::video_player::{ClipPlayer, PlaybackOutcome};
use iced::keyboard::Key;
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub quiz: &'a mut QuizOrchestrator,
    pub player: &'a mut ClipPlayer,
    pub announcer: &'a dyn SpeechAnnouncer,
    pub notices: &'a mut notices::Manager,
    pub feedback_timeout: Option<Duration>,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::OptionSelected(option) => {
            let effects = ctx.quiz.submit_answer(&option);
            run_effects(ctx, effects);
        }
        Message::Playback(playback) => {
            let outcome = ctx.player.handle(playback);
            show_clip_failure(ctx);
            if outcome == PlaybackOutcome::Ended {
                media_ended(ctx);
            }
        }
        Message::PlayAgain => {
            let effects = ctx.quiz.reset();
            run_effects(ctx, effects);
        }
        Message::Tick(now) => {
            ctx.notices.expire(now);
            if let Some(timeout) = ctx.feedback_timeout {
                if ctx.player.expire_if_overdue(now, timeout) {
                    media_ended(ctx);
                }
            }
        }
        Message::Keyboard(key) => return handle_key(ctx, &key),
        Message::Notice(notice) => ctx.notices.update(notice),
    }
    Task::none()
}

/// Applies `effects`, then drains ends reported by clips that had nothing
/// to play.
pub fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) {
    let i18n = ctx.i18n;
    let mut effects = effects;
    loop {
        apply_effects(&effects, &mut *ctx.player, ctx.announcer, |announcement| {
            i18n.tr(announcement.i18n_key())
        });
        if !ctx.player.take_pending_end() {
            break;
        }
        effects = ctx.quiz.on_media_playback_ended();
    }
    show_clip_failure(ctx);
}

fn show_clip_failure(ctx: &mut UpdateContext<'_>) {
    if let Some(error) = ctx.player.take_error() {
        ctx.notices.push(error.i18n_key(), Instant::now());
    }
}

fn media_ended(ctx: &mut UpdateContext<'_>) {
    let effects = ctx.quiz.on_media_playback_ended();
    run_effects(ctx, effects);
}

fn handle_key(ctx: &mut UpdateContext<'_>, key: &Key) -> Task<Message> {
    if let Some(index) = option_index_for_key(key) {
        if !ctx.quiz.phase().accepts_answers() {
            return Task::none();
        }
        let option = ctx
            .quiz
            .current_question()
            .options()
            .get(index)
            .map(ToString::to_string);
        if let Some(option) = option {
            return handle_message(ctx, Message::OptionSelected(option));
        }
    } else if is_restart_key(key) && ctx.quiz.is_complete() {
        return handle_message(ctx, Message::PlayAgain);
    }
    Task::none()
}

/// Zero-based option index for the digit keys `1` to `4`.
pub fn option_index_for_key(key: &Key) -> Option<usize> {
    let Key::Character(c) = key else {
        return None;
    };
    let digit = c.as_str().parse::<usize>().ok()?;
    (1..=OPTIONS_PER_QUESTION)
        .contains(&digit)
        .then(|| digit - 1)
}

fn is_restart_key(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c.as_str().eq_ignore_ascii_case("r"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SpeechError;
    use crate::config::{Config, MediaConfig};
    use crate::question_bank;
    use crate::error::VideoError;
    use crate::video_player::PlaybackMessage;
    use iced::keyboard::key::Named;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingAnnouncer(RefCell<Vec<String>>);

    impl SpeechAnnouncer for RecordingAnnouncer {
        fn announce(&self, text: &str) -> Result<(), SpeechError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        i18n: I18n,
        quiz: QuizOrchestrator,
        player: ClipPlayer,
        announcer: RecordingAnnouncer,
        notices: notices::Manager,
    }

    impl Harness {
        fn new() -> Self {
            // No clip paths: feedback clips end as soon as they start.
            Self::with_media(MediaConfig::default())
        }

        fn with_media(media: MediaConfig) -> Self {
            let questions = question_bank::builtin().expect("built-in questions");
            Self {
                i18n: I18n::new(Some("en-US".into()), None, &Config::default()),
                quiz: QuizOrchestrator::new(questions),
                player: ClipPlayer::new(media),
                announcer: RecordingAnnouncer::default(),
                notices: notices::Manager::new(),
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                quiz: &mut self.quiz,
                player: &mut self.player,
                announcer: &self.announcer,
                notices: &mut self.notices,
                feedback_timeout: None,
            };
            let _ = handle_message(&mut ctx, message);
        }

        fn send_effects(&mut self, effects: Vec<Effect>) {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                quiz: &mut self.quiz,
                player: &mut self.player,
                announcer: &self.announcer,
                notices: &mut self.notices,
                feedback_timeout: None,
            };
            run_effects(&mut ctx, effects);
        }

        fn spoken(&self) -> Vec<String> {
            self.announcer.0.borrow().clone()
        }
    }

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn digit_keys_map_to_option_indices() {
        assert_eq!(option_index_for_key(&char_key("1")), Some(0));
        assert_eq!(option_index_for_key(&char_key("4")), Some(3));
        assert_eq!(option_index_for_key(&char_key("0")), None);
        assert_eq!(option_index_for_key(&char_key("5")), None);
        assert_eq!(option_index_for_key(&char_key("a")), None);
        assert_eq!(option_index_for_key(&Key::Named(Named::Enter)), None);
    }

    #[test]
    fn restart_key_is_case_insensitive() {
        assert!(is_restart_key(&char_key("r")));
        assert!(is_restart_key(&char_key("R")));
        assert!(!is_restart_key(&char_key("q")));
    }

    #[test]
    fn correct_answer_without_clips_advances_immediately() {
        let mut harness = Harness::new();
        let answer = harness.quiz.current_question().answer().to_string();

        harness.send(Message::OptionSelected(answer));

        assert_eq!(harness.quiz.current_index(), 1);
        assert!(harness.quiz.phase().accepts_answers());
        assert_eq!(harness.spoken(), vec!["Correct answer!".to_string()]);
    }

    #[test]
    fn wrong_answer_keeps_the_question() {
        let mut harness = Harness::new();
        let wrong = harness
            .quiz
            .current_question()
            .options()
            .iter()
            .find(|option| !harness.quiz.current_question().is_correct(option))
            .map(ToString::to_string)
            .expect("a wrong option");

        harness.send(Message::OptionSelected(wrong));

        assert_eq!(harness.quiz.current_index(), 0);
        assert!(harness.quiz.answered().count() == 0);
        assert_eq!(harness.spoken(), vec!["Wrong answer! Try again!".to_string()]);
    }

    #[test]
    fn keyboard_walk_reaches_completion_and_restarts() {
        let mut harness = Harness::new();

        for _ in 0..harness.quiz.total() {
            let question = harness.quiz.current_question();
            let index = question
                .options()
                .iter()
                .position(|option| question.is_correct(option))
                .expect("answer among options");
            harness.send(Message::Keyboard(char_key(&(index + 1).to_string())));
        }

        assert!(harness.quiz.is_complete());
        assert_eq!(
            harness.spoken().last().map(String::as_str),
            Some("Congratulations! You've successfully completed the HDFC PayZapp quiz!")
        );

        harness.send(Message::Keyboard(char_key("r")));
        assert!(!harness.quiz.is_complete());
        assert!(harness.quiz.answered().count() == 0);
    }

    #[test]
    fn restart_key_is_ignored_before_completion() {
        let mut harness = Harness::new();
        let answer = harness.quiz.current_question().answer().to_string();
        harness.send(Message::OptionSelected(answer));

        harness.send(Message::Keyboard(char_key("r")));

        assert_eq!(harness.quiz.answered().count(), 1);
    }

    #[test]
    fn tick_expires_old_notices() {
        let mut harness = Harness::new();
        let start = Instant::now();
        harness.notices.push("notification-speech-unavailable", start);

        harness.send(Message::Tick(start + notices::NOTICE_DURATION));

        assert!(harness.notices.is_empty());
    }

    #[test]
    fn missing_clip_file_shows_a_notice() {
        let mut harness = Harness::with_media(MediaConfig {
            correct: Some(PathBuf::from("/nonexistent/yes.mp4")),
            ..MediaConfig::default()
        });
        let answer = harness.quiz.current_question().answer().to_string();

        harness.send(Message::OptionSelected(answer));

        assert_eq!(harness.quiz.current_index(), 1);
        assert!(harness.notices.contains("error-video-not-found"));
    }

    #[test]
    fn decoder_failure_shows_a_notice() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let clip = dir.path().join("loop.mp4");
        std::fs::write(&clip, b"clip").expect("failed to write clip");
        let mut harness = Harness::with_media(MediaConfig {
            background: Some(clip),
            ..MediaConfig::default()
        });
        let effects = harness.quiz.start();
        harness.send_effects(effects);

        let session_id = harness.player.session_id();
        harness.send(Message::Playback(PlaybackMessage::Error {
            session_id,
            error: VideoError::NoVideoStream,
        }));

        assert!(harness.notices.contains("error-video-no-stream"));
    }
}
