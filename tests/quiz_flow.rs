// SPDX-License-Identifier: MPL-2.0
//! End-to-end walks through the built-in question set, driving the
//! orchestrator the way the application shell does.

use approx::assert_abs_diff_eq;
use iced_quiz::application::{Effect, QuizOrchestrator};
use iced_quiz::domain::quiz::{Announcement, MediaClip, QuizPhase};
use iced_quiz::question_bank;

fn builtin_quiz() -> QuizOrchestrator {
    QuizOrchestrator::new(question_bank::builtin().expect("built-in questions parse"))
}

fn correct_option(quiz: &QuizOrchestrator) -> String {
    quiz.current_question().answer().to_string()
}

fn wrong_option(quiz: &QuizOrchestrator) -> String {
    let question = quiz.current_question();
    question
        .options()
        .iter()
        .find(|option| !question.is_correct(option))
        .cloned()
        .expect("every question has a wrong option")
}

/// Answers correctly and lets the feedback clip finish.
fn answer_correctly(quiz: &mut QuizOrchestrator) -> Vec<Effect> {
    let option = correct_option(quiz);
    let effects = quiz.submit_answer(&option);
    assert!(effects.contains(&Effect::Speak(Announcement::Correct)));
    quiz.on_media_playback_ended()
}

#[test]
fn full_walk_with_one_retry() {
    let mut quiz = builtin_quiz();
    assert_eq!(quiz.total(), 5);
    assert_eq!(
        quiz.start(),
        vec![Effect::PlayMedia {
            clip: MediaClip::Background,
            looping: true
        }]
    );

    // Q1 correct.
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), 1);
    assert_abs_diff_eq!(quiz.progress(), 0.2, epsilon = 1e-6);

    // Q2 wrong: same question, wrong option pending until the clip ends.
    let wrong = wrong_option(&quiz);
    let effects = quiz.submit_answer(&wrong);
    assert_eq!(
        effects,
        vec![
            Effect::PlayMedia {
                clip: MediaClip::IncorrectFeedback,
                looping: false
            },
            Effect::Speak(Announcement::IncorrectTryAgain),
        ]
    );
    assert_eq!(quiz.pending_wrong_option(), Some(wrong.as_str()));
    assert_eq!(quiz.current_index(), 1);

    let effects = quiz.on_media_playback_ended();
    assert_eq!(
        effects,
        vec![Effect::PlayMedia {
            clip: MediaClip::Background,
            looping: true
        }]
    );
    assert_eq!(quiz.pending_wrong_option(), None);
    assert_eq!(quiz.current_index(), 1);
    assert_eq!(quiz.phase(), &QuizPhase::AwaitingAnswer);

    // Q2 correct on retry.
    answer_correctly(&mut quiz);
    assert_eq!(quiz.current_index(), 2);
    assert_abs_diff_eq!(quiz.progress(), 0.4, epsilon = 1e-6);

    // Q3 and Q4.
    answer_correctly(&mut quiz);
    answer_correctly(&mut quiz);
    assert!(!quiz.is_complete());

    // Q5 completes the quiz.
    let effects = answer_correctly(&mut quiz);
    assert!(quiz.is_complete());
    assert!(effects.contains(&Effect::Speak(Announcement::Completion)));
    assert_abs_diff_eq!(quiz.progress(), 1.0, epsilon = 1e-6);
}

#[test]
fn answers_are_ignored_while_feedback_plays() {
    let mut quiz = builtin_quiz();
    let option = correct_option(&quiz);
    quiz.submit_answer(&option);
    assert!(quiz.is_playing_feedback());

    let again = quiz.current_question().options()[0].clone();
    assert!(quiz.submit_answer(&again).is_empty());
    assert_eq!(quiz.answered().count(), 1);
}

#[test]
fn answered_set_never_shrinks_before_reset() {
    let mut quiz = builtin_quiz();
    let mut previous = 0;

    for _ in 0..quiz.total() {
        let wrong = wrong_option(&quiz);
        quiz.submit_answer(&wrong);
        quiz.on_media_playback_ended();
        assert!(quiz.answered().count() >= previous);

        answer_correctly(&mut quiz);
        assert!(quiz.answered().count() > previous);
        previous = quiz.answered().count();
    }

    assert!(quiz.is_complete());
}

#[test]
fn reset_after_partial_progress_starts_over() {
    let mut quiz = builtin_quiz();
    answer_correctly(&mut quiz);
    answer_correctly(&mut quiz);

    let effects = quiz.reset();

    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.answered().count(), 0);
    assert!(!quiz.is_complete());
    assert_eq!(
        effects,
        vec![Effect::PlayMedia {
            clip: MediaClip::Background,
            looping: true
        }]
    );
}

#[test]
fn reset_replays_the_intro_when_configured() {
    let questions = question_bank::builtin().expect("built-in questions parse");
    let mut quiz = QuizOrchestrator::with_intro(questions);
    assert!(quiz.is_intro());
    quiz.on_media_playback_ended();
    answer_correctly(&mut quiz);

    quiz.reset();

    assert!(quiz.is_intro());
    assert_eq!(quiz.active_media(), MediaClip::Intro);
}
