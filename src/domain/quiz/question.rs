// SPDX-License-Identifier: MPL-2.0
//! Questions and validated question sets.

use crate::domain::error::QuizConfigError;

/// Number of choices every question offers.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question.
///
/// A `Question` on its own is not checked; it becomes usable once it is
/// accepted by [`QuestionSet::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The option text that counts as correct.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns true if `option` is one of this question's choices.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Exact text comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    fn validate(&self, index: usize) -> Result<(), QuizConfigError> {
        if self.prompt.trim().is_empty() {
            return Err(QuizConfigError::EmptyPrompt { index });
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizConfigError::WrongOptionCount {
                index,
                expected: OPTIONS_PER_QUESTION,
                found: self.options.len(),
            });
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(QuizConfigError::DuplicateOption {
                    index,
                    option: option.clone(),
                });
            }
        }

        if !self.has_option(&self.answer) {
            return Err(QuizConfigError::AnswerNotAnOption {
                index,
                answer: self.answer.clone(),
            });
        }

        Ok(())
    }
}

/// Non-empty list of questions whose answers are all among their options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validates every question and builds the set.
    ///
    /// # Errors
    ///
    /// Returns the first [`QuizConfigError`] found, in question order.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizConfigError> {
        if questions.is_empty() {
            return Err(QuizConfigError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl std::ops::Index<usize> for QuestionSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
