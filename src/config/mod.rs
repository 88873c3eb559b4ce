// SPDX-License-Identifier: MPL-2.0
//! User settings, stored as `settings.toml` in the config directory
//! resolved by [`crate::app::paths`].
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"      # light | dark | system
//!
//! [media]
//! intro = "clips/intro.mp4"
//! background = "clips/loop.mp4"
//! correct = "clips/correct.mp4"
//! incorrect = "clips/incorrect.mp4"
//! feedback_timeout_secs = 30
//!
//! [speech]
//! enabled = true
//! command = ["espeak-ng", "-v", "fr"]
//!
//! [quiz]
//! questions_path = "my-questions.toml"
//! ```
//!
//! Every section and key is optional. Relative paths are taken relative to
//! the directory holding `settings.toml`. A file that cannot be read or
//! parsed is replaced by defaults and reported through a warning key.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::quiz::MediaClip;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// `[general]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Accepted case-insensitively.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Clip locations and playback policy.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MediaConfig {
    /// Clip played once before the first question.
    #[serde(default)]
    pub intro: Option<PathBuf>,

    /// Idle loop behind the question card.
    #[serde(default)]
    pub background: Option<PathBuf>,

    /// Clip played after a correct answer.
    #[serde(default)]
    pub correct: Option<PathBuf>,

    /// Clip played after a wrong answer.
    #[serde(default)]
    pub incorrect: Option<PathBuf>,

    /// Treat feedback as finished after this many seconds, even if the clip
    /// never reports its end.
    #[serde(default)]
    pub feedback_timeout_secs: Option<u32>,
}

impl MediaConfig {
    /// Configured path for `clip`, if any.
    pub fn clip_path(&self, clip: MediaClip) -> Option<&Path> {
        match clip {
            MediaClip::Intro => self.intro.as_deref(),
            MediaClip::Background => self.background.as_deref(),
            MediaClip::CorrectFeedback => self.correct.as_deref(),
            MediaClip::IncorrectFeedback => self.incorrect.as_deref(),
        }
    }

    /// Watchdog timeout clamped to the supported range.
    #[must_use]
    pub fn feedback_timeout(&self) -> Option<Duration> {
        self.feedback_timeout_secs.map(|secs| {
            let secs = secs.clamp(MIN_FEEDBACK_TIMEOUT_SECS, MAX_FEEDBACK_TIMEOUT_SECS);
            Duration::from_secs(u64::from(secs))
        })
    }

    fn rebase(&mut self, base: &Path) {
        let clips = [
            &mut self.intro,
            &mut self.background,
            &mut self.correct,
            &mut self.incorrect,
        ];
        for path in clips.into_iter().flatten() {
            rebase_path(path, base);
        }
    }
}

/// Spoken feedback settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SpeechConfig {
    /// Whether feedback phrases are spoken.
    #[serde(default = "default_speech_enabled")]
    pub enabled: bool,

    /// Custom synthesizer command. The phrase is appended as the last
    /// argument, e.g. `["espeak-ng", "-s", "150"]`.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SPEECH_ENABLED,
            command: None,
        }
    }
}

/// Question source.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct QuizConfig {
    /// TOML file with `[[questions]]` entries. The built-in set is used when
    /// unset.
    #[serde(default)]
    pub questions_path: Option<PathBuf>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub quiz: QuizConfig,
}

impl Config {
    /// Joins every relative path in the file onto `base`.
    fn rebase(&mut self, base: &Path) {
        self.media.rebase(base);
        if let Some(path) = self.quiz.questions_path.as_mut() {
            rebase_path(path, base);
        }
    }
}

fn rebase_path(path: &mut PathBuf, base: &Path) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

fn default_speech_enabled() -> bool {
    DEFAULT_SPEECH_ENABLED
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user's settings. The second value is the i18n key of a warning
/// when an existing file had to be ignored.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads `settings.toml` from `base_dir`, or from the resolved config
/// directory when `None`. A missing file is not an error.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("Ignoring {}: {}", path.display(), err);
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Parses the settings file at `path`, resolving its relative paths against
/// the file's directory.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    if let Some(dir) = path.parent() {
        config.rebase(dir);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const FULL_FILE: &str = r#"
[general]
language = "fr"
theme_mode = "light"

[media]
intro = "clips/intro.mp4"
background = "clips/loop.mp4"
correct = "clips/yes.mp4"
incorrect = "clips/no.mp4"
feedback_timeout_secs = 20

[speech]
enabled = false
command = ["espeak-ng", "-s", "150"]

[quiz]
questions_path = "questions.toml"
"#;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            media: MediaConfig {
                intro: Some(PathBuf::from("clips/intro.mp4")),
                background: Some(PathBuf::from("clips/loop.mp4")),
                correct: Some(PathBuf::from("clips/yes.mp4")),
                incorrect: Some(PathBuf::from("clips/no.mp4")),
                feedback_timeout_secs: Some(20),
            },
            speech: SpeechConfig {
                enabled: false,
                command: Some(vec!["espeak-ng".to_string(), "-s".to_string(), "150".to_string()]),
            },
            quiz: QuizConfig {
                questions_path: Some(PathBuf::from("questions.toml")),
            },
        }
    }

    #[test]
    fn full_file_loads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, FULL_FILE).expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let mut expected = sample_config();
        expected.rebase(temp_dir.path());
        assert_eq!(loaded, expected);
    }

    #[test]
    fn relative_paths_resolve_against_the_config_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, FULL_FILE).expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded.media.background,
            Some(temp_dir.path().join("clips/loop.mp4"))
        );
        assert_eq!(
            loaded.quiz.questions_path,
            Some(temp_dir.path().join("questions.toml"))
        );
    }

    #[test]
    fn absolute_paths_are_kept_as_written() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let clip = temp_dir.path().join("elsewhere").join("loop.mp4");
        let config_path = temp_dir.path().join("conf").join("settings.toml");
        fs::create_dir_all(temp_dir.path().join("conf")).expect("failed to create dir");
        fs::write(
            &config_path,
            format!("[media]\nbackground = {:?}\n", clip.display().to_string()),
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.media.background, Some(clip));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.media.background.is_none());
        assert!(config.media.feedback_timeout().is_none());
        assert!(config.speech.enabled);
        assert!(config.quiz.questions_path.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[media]\nbackground = \"loop.mp4\"\n\n[general]\ntheme_mode = \"Dark\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(
            loaded.media.background,
            Some(temp_dir.path().join("loop.mp4"))
        );
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert!(loaded.speech.enabled);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn clip_path_maps_each_clip() {
        let media = sample_config().media;
        assert_eq!(
            media.clip_path(MediaClip::Intro),
            Some(Path::new("clips/intro.mp4"))
        );
        assert_eq!(
            media.clip_path(MediaClip::Background),
            Some(Path::new("clips/loop.mp4"))
        );
        assert_eq!(
            media.clip_path(MediaClip::CorrectFeedback),
            Some(Path::new("clips/yes.mp4"))
        );
        assert_eq!(
            media.clip_path(MediaClip::IncorrectFeedback),
            Some(Path::new("clips/no.mp4"))
        );
    }

    #[test]
    fn feedback_timeout_is_clamped() {
        let mut media = MediaConfig {
            feedback_timeout_secs: Some(0),
            ..MediaConfig::default()
        };
        assert_eq!(
            media.feedback_timeout(),
            Some(Duration::from_secs(u64::from(MIN_FEEDBACK_TIMEOUT_SECS)))
        );

        media.feedback_timeout_secs = Some(100_000);
        assert_eq!(
            media.feedback_timeout(),
            Some(Duration::from_secs(u64::from(MAX_FEEDBACK_TIMEOUT_SECS)))
        );
    }

    #[test]
    fn load_with_override_reads_settings_from_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), FULL_FILE).expect("failed to write config");

        let (loaded, warning) = load_with_override(Some(base_dir.clone()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.media.intro, Some(base_dir.join("clips/intro.mp4")));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write corrupted file");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
