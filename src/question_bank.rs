// SPDX-License-Identifier: MPL-2.0
//! Loading question sets from TOML.
//!
//! ```toml
//! [[questions]]
//! prompt = "Which planet is closest to the sun?"
//! options = ["Venus", "Mercury", "Mars", "Earth"]
//! answer = "Mercury"
//! ```

use crate::config::Config;
use crate::domain::quiz::{Question, QuestionSet};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_QUESTIONS: &str = include_str!("../assets/quiz/default.toml");

#[derive(Debug, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl From<QuestionEntry> for Question {
    fn from(entry: QuestionEntry) -> Self {
        Question::new(entry.prompt, entry.options, entry.answer)
    }
}

/// Parses and validates a question file body.
pub fn parse(content: &str) -> Result<QuestionSet> {
    let file: QuestionFile = toml::from_str(content)?;
    let questions = file.questions.into_iter().map(Question::from).collect();
    Ok(QuestionSet::new(questions)?)
}

/// Reads and validates the question file at `path`.
pub fn load_from_path(path: &Path) -> Result<QuestionSet> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// The question set shipped with the application.
pub fn builtin() -> Result<QuestionSet> {
    parse(BUILTIN_QUESTIONS)
}

/// Picks the question source: CLI path, then `[quiz] questions_path`, then
/// the built-in set.
///
/// A user file that cannot be used falls back to the built-in set and
/// returns the i18n key of a warning naming what was wrong with it.
pub fn resolve(cli_path: Option<&Path>, config: &Config) -> Result<(QuestionSet, Option<String>)> {
    let user_path: Option<PathBuf> = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.quiz.questions_path.clone());

    if let Some(path) = user_path {
        match load_from_path(&path) {
            Ok(set) => {
                log::info!("Loaded {} questions from {}", set.len(), path.display());
                return Ok((set, None));
            }
            Err(err) => {
                log::warn!(
                    "Ignoring question file {}: {}; using built-in questions",
                    path.display(),
                    err
                );
                return Ok((builtin()?, Some(fallback_warning(&err).to_string())));
            }
        }
    }

    Ok((builtin()?, None))
}

fn fallback_warning(err: &Error) -> &'static str {
    match err {
        Error::Questions(invalid) => invalid.i18n_key(),
        _ => "notification-questions-fallback",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::QuizConfigError;
    use tempfile::tempdir;

    const TWO_QUESTIONS: &str = r#"
[[questions]]
prompt = "2 + 2?"
options = ["3", "4", "5", "22"]
answer = "4"

[[questions]]
prompt = "Capital of France?"
options = ["Lyon", "Paris", "Nice", "Lille"]
answer = "Paris"
"#;

    #[test]
    fn builtin_set_has_five_valid_questions() {
        let set = builtin().expect("built-in questions must be valid");
        assert_eq!(set.len(), 5);
        assert_eq!(
            set[0].answer(),
            "It allows instant payments securely in just one click"
        );
        for question in &set {
            assert!(question.has_option(question.answer()));
        }
    }

    #[test]
    fn parse_reads_questions_in_order() {
        let set = parse(TWO_QUESTIONS).expect("valid file");
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].prompt(), "Capital of France?");
        assert_eq!(set[1].options()[1], "Paris");
    }

    #[test]
    fn parse_rejects_answer_outside_options() {
        let content = r#"
[[questions]]
prompt = "2 + 2?"
options = ["3", "4", "5", "22"]
answer = "four"
"#;
        match parse(content) {
            Err(Error::Questions(QuizConfigError::AnswerNotAnOption { index: 0, .. })) => {}
            other => panic!("expected AnswerNotAnOption, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_file() {
        assert!(matches!(
            parse(""),
            Err(Error::Questions(QuizConfigError::NoQuestions))
        ));
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(matches!(parse("[[questions]\n"), Err(Error::Config(_))));
    }

    #[test]
    fn resolve_prefers_cli_path_over_config() {
        let dir = tempdir().expect("failed to create temp dir");
        let cli_file = dir.path().join("cli.toml");
        fs::write(&cli_file, TWO_QUESTIONS).expect("failed to write questions");

        let mut config = Config::default();
        config.quiz.questions_path = Some(dir.path().join("missing.toml"));

        let (set, warning) = resolve(Some(&cli_file), &config).expect("resolve");
        assert_eq!(set.len(), 2);
        assert!(warning.is_none());
    }

    #[test]
    fn resolve_uses_config_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let file = dir.path().join("questions.toml");
        fs::write(&file, TWO_QUESTIONS).expect("failed to write questions");

        let mut config = Config::default();
        config.quiz.questions_path = Some(file);

        let (set, warning) = resolve(None, &config).expect("resolve");
        assert_eq!(set.len(), 2);
        assert!(warning.is_none());
    }

    #[test]
    fn resolve_falls_back_to_builtin_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let file = dir.path().join("broken.toml");
        fs::write(&file, "[[questions]]\nprompt = \"?\"\n").expect("failed to write");

        let (set, warning) = resolve(Some(&file), &Config::default()).expect("resolve");
        assert_eq!(set.len(), 5);
        assert_eq!(warning.as_deref(), Some("notification-questions-fallback"));
    }

    #[test]
    fn invalid_question_warning_names_the_problem() {
        let dir = tempdir().expect("failed to create temp dir");
        let file = dir.path().join("duplicate.toml");
        fs::write(
            &file,
            "[[questions]]\nprompt = \"?\"\noptions = [\"a\", \"a\", \"b\", \"c\"]\nanswer = \"a\"\n",
        )
        .expect("failed to write");

        let (_, warning) = resolve(Some(&file), &Config::default()).expect("resolve");
        assert_eq!(warning.as_deref(), Some("error-questions-duplicate-option"));
    }

    #[test]
    fn unreadable_question_file_gets_generic_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (_, warning) =
            resolve(Some(&dir.path().join("missing.toml")), &Config::default()).expect("resolve");
        assert_eq!(warning.as_deref(), Some("notification-questions-fallback"));
    }

    #[test]
    fn resolve_without_paths_uses_builtin() {
        let (set, warning) = resolve(None, &Config::default()).expect("resolve");
        assert_eq!(set.len(), 5);
        assert!(warning.is_none());
    }
}
