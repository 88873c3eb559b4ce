// SPDX-License-Identifier: MPL-2.0
//! Quiz orchestrator.
//!
//! Owns the session state and the question/video state machine. It is driven
//! by two signals, an option being picked ([`QuizOrchestrator::submit_answer`])
//! and the active clip finishing ([`QuizOrchestrator::on_media_playback_ended`]),
//! and answers each with the [`Effect`]s the collaborators should perform.
//!
//! Calls made while their precondition does not hold are ignored: they
//! return no effects and leave the state untouched.

use super::effect::Effect;
use crate::domain::quiz::{
    Announcement, AnsweredSet, Feedback, MediaClip, Question, QuestionSet, QuizPhase,
};

/// Quiz session state machine.
#[derive(Debug, Clone)]
pub struct QuizOrchestrator {
    questions: QuestionSet,
    /// Whether an intro clip precedes the first question.
    has_intro: bool,
    current_index: usize,
    answered: AnsweredSet,
    phase: QuizPhase,
    active_media: MediaClip,
}

impl QuizOrchestrator {
    /// Creates a session that shows the first question immediately.
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self::build(questions, false)
    }

    /// Creates a session that plays the intro clip before the first question.
    #[must_use]
    pub fn with_intro(questions: QuestionSet) -> Self {
        Self::build(questions, true)
    }

    fn build(questions: QuestionSet, has_intro: bool) -> Self {
        let answered = AnsweredSet::new(questions.len());
        let (phase, active_media) = Self::initial_phase(has_intro);
        Self {
            questions,
            has_intro,
            current_index: 0,
            answered,
            phase,
            active_media,
        }
    }

    fn initial_phase(has_intro: bool) -> (QuizPhase, MediaClip) {
        if has_intro {
            (QuizPhase::Intro, MediaClip::Intro)
        } else {
            (QuizPhase::AwaitingAnswer, MediaClip::Background)
        }
    }

    /// Playback request for the state the session was created in.
    #[must_use]
    pub fn start(&self) -> Vec<Effect> {
        vec![Effect::play(self.active_media)]
    }

    /// Handles the user picking `option` on the current question.
    ///
    /// Ignored unless answers are being accepted and `option` belongs to the
    /// current question.
    pub fn submit_answer(&mut self, option: &str) -> Vec<Effect> {
        if !self.phase.accepts_answers() {
            log::debug!("Ignoring answer {:?} while {:?}", option, self.phase);
            return Vec::new();
        }

        let question = self.current_question();
        if !question.has_option(option) {
            log::debug!(
                "Ignoring answer {:?}: not an option of question {}",
                option,
                self.current_index + 1
            );
            return Vec::new();
        }

        let (feedback, announcement) = if question.is_correct(option) {
            self.answered.mark(self.current_index);
            (Feedback::Correct, Announcement::Correct)
        } else {
            (
                Feedback::Incorrect {
                    option: option.to_string(),
                },
                Announcement::IncorrectTryAgain,
            )
        };

        log::debug!(
            "Question {} answered, correct: {}",
            self.current_index + 1,
            feedback.is_correct()
        );

        self.active_media = MediaClip::for_feedback(&feedback);
        self.phase = QuizPhase::PlayingFeedback(feedback);

        vec![
            Effect::play(self.active_media),
            Effect::Speak(announcement),
        ]
    }

    /// Handles the active clip reaching its end.
    pub fn on_media_playback_ended(&mut self) -> Vec<Effect> {
        if self.phase.is_intro() {
            log::debug!("Intro finished, showing questions");
            self.phase = QuizPhase::AwaitingAnswer;
            self.active_media = MediaClip::Background;
            return vec![Effect::play(MediaClip::Background)];
        }

        let feedback = match &self.phase {
            QuizPhase::PlayingFeedback(feedback) => feedback.clone(),
            // The background loops; an end here carries no meaning.
            _ => return Vec::new(),
        };

        self.active_media = MediaClip::Background;
        let mut effects = vec![Effect::play(MediaClip::Background)];

        match feedback {
            Feedback::Incorrect { .. } => {
                // Retry the same question.
                self.phase = QuizPhase::AwaitingAnswer;
            }
            Feedback::Correct => match self.answered.first_unanswered() {
                Some(next) => {
                    self.current_index = next;
                    self.phase = QuizPhase::AwaitingAnswer;
                }
                None => {
                    log::info!("All {} questions answered", self.questions.len());
                    self.phase = QuizPhase::Completed;
                    effects.push(Effect::Speak(Announcement::Completion));
                }
            },
        }

        effects
    }

    /// Discards all progress and returns to the created state.
    pub fn reset(&mut self) -> Vec<Effect> {
        let (phase, active_media) = Self::initial_phase(self.has_intro);
        self.current_index = 0;
        self.answered.clear();
        self.phase = phase;
        self.active_media = active_media;
        self.start()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        // `current_index` is only ever set from `AnsweredSet` positions, which
        // are bounded by the set length.
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn pending_wrong_option(&self) -> Option<&str> {
        self.phase.pending_wrong_option()
    }

    pub fn answered(&self) -> &AnsweredSet {
        &self.answered
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.contains(index)
    }

    #[must_use]
    pub fn is_playing_feedback(&self) -> bool {
        self.phase.is_playing_feedback()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    /// Returns true while the question card should be hidden by the intro.
    #[must_use]
    pub fn is_intro(&self) -> bool {
        self.phase.is_intro()
    }

    pub fn active_media(&self) -> MediaClip {
        self.active_media
    }

    /// Fraction of questions answered correctly.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.answered.fraction()
    }
}
