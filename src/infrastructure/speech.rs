// SPDX-License-Identifier: MPL-2.0
//! Spoken feedback through the host's text-to-speech command.
//!
//! [`CommandAnnouncer`] starts one short-lived process per phrase and never
//! waits for it to finish. The platform default is `say` on macOS, the
//! `System.Speech` synthesizer through PowerShell on Windows, and
//! `espeak-ng` or `spd-say` elsewhere.

use crate::application::port::{SpeechAnnouncer, SpeechError};
use crate::config::SpeechConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use unic_langid::LanguageIdentifier;

/// Environment variable carrying the phrase for script-based backends.
const PHRASE_ENV: &str = "ICED_QUIZ_PHRASE";

#[cfg(target_os = "windows")]
const POWERSHELL_SPEAK: &str = "Add-Type -AssemblyName System.Speech; \
    $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
    $s.Rate = 0; $s.Speak($env:ICED_QUIZ_PHRASE)";

/// How the phrase reaches the synthesizer process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseDelivery {
    /// Appended as the final command-line argument.
    LastArgument,
    /// Passed in the `ICED_QUIZ_PHRASE` environment variable.
    Environment,
}

/// Speaks phrases by spawning a synthesizer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAnnouncer {
    program: PathBuf,
    args: Vec<String>,
    delivery: PhraseDelivery,
}

impl CommandAnnouncer {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>, delivery: PhraseDelivery) -> Self {
        Self {
            program: program.into(),
            args,
            delivery,
        }
    }

    /// Builds an announcer from a `[program, args...]` list.
    ///
    /// Returns `None` for an empty list.
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(
            program,
            args.to_vec(),
            PhraseDelivery::LastArgument,
        ))
    }

    /// Finds a synthesizer installed on this system.
    pub fn detect(locale: &LanguageIdentifier) -> Option<Self> {
        platform_candidates(locale)
            .into_iter()
            .find(|candidate| find_in_path(&candidate.program).is_some())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed before the phrase.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command_for(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        match self.delivery {
            PhraseDelivery::LastArgument => {
                cmd.arg(text);
            }
            PhraseDelivery::Environment => {
                cmd.env(PHRASE_ENV, text);
            }
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl SpeechAnnouncer for CommandAnnouncer {
    fn announce(&self, text: &str) -> Result<(), SpeechError> {
        let mut child = self
            .command_for(text)
            .spawn()
            .map_err(|e| SpeechError::Failed(format!("{}: {}", self.program.display(), e)))?;

        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                log::warn!("{} exited with {}", program.display(), status);
            }
            Ok(_) => {}
            Err(err) => log::warn!("Waiting for {} failed: {}", program.display(), err),
        });
        Ok(())
    }
}

/// Logs phrases instead of speaking them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl SpeechAnnouncer for SilentAnnouncer {
    fn announce(&self, text: &str) -> Result<(), SpeechError> {
        log::info!("(speech off) {}", text);
        Ok(())
    }
}

/// Picks the announcer described by `[speech]`.
///
/// The second value is the i18n key of a warning when speech was requested
/// but no synthesizer could be found.
pub fn announcer_from_config(
    config: &SpeechConfig,
    locale: &LanguageIdentifier,
) -> (Box<dyn SpeechAnnouncer>, Option<String>) {
    if !config.enabled {
        return (Box::new(SilentAnnouncer), None);
    }

    if let Some(command) = config.command.as_deref() {
        if let Some(announcer) = CommandAnnouncer::from_command_line(command) {
            log::info!("Speech via configured command {}", announcer.program.display());
            return (Box::new(announcer), None);
        }
        log::warn!("Ignoring empty [speech] command");
    }

    match CommandAnnouncer::detect(locale) {
        Some(announcer) => {
            log::info!("Speech via {}", announcer.program.display());
            (Box::new(announcer), None)
        }
        None => {
            log::warn!("No speech synthesizer found; spoken feedback is off");
            (
                Box::new(SilentAnnouncer),
                Some("notification-speech-unavailable".to_string()),
            )
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_candidates(_locale: &LanguageIdentifier) -> Vec<CommandAnnouncer> {
    vec![CommandAnnouncer::new(
        "say",
        Vec::new(),
        PhraseDelivery::LastArgument,
    )]
}

#[cfg(target_os = "windows")]
fn platform_candidates(_locale: &LanguageIdentifier) -> Vec<CommandAnnouncer> {
    vec![CommandAnnouncer::new(
        "powershell",
        vec![
            "-NoProfile".to_string(),
            "-NonInteractive".to_string(),
            "-Command".to_string(),
            POWERSHELL_SPEAK.to_string(),
        ],
        PhraseDelivery::Environment,
    )]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_candidates(locale: &LanguageIdentifier) -> Vec<CommandAnnouncer> {
    let language = locale.language.as_str().to_string();
    vec![
        CommandAnnouncer::new(
            "espeak-ng",
            vec!["-v".to_string(), language.clone()],
            PhraseDelivery::LastArgument,
        ),
        CommandAnnouncer::new(
            "spd-say",
            vec!["-l".to_string(), language],
            PhraseDelivery::LastArgument,
        ),
    ]
}

/// Resolves `program` against `PATH` unless it already names a file.
fn find_in_path(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        return program.is_file().then(|| program.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var).find_map(|dir| {
        executable_names(program)
            .into_iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

fn executable_names(program: &Path) -> Vec<OsString> {
    let name = program.as_os_str().to_os_string();
    if cfg!(windows) && program.extension().is_none() {
        let mut exe = name.clone();
        exe.push(".exe");
        vec![exe, name]
    } else {
        vec![name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> LanguageIdentifier {
        "en-US".parse().unwrap()
    }

    #[test]
    fn command_line_splits_program_and_args() {
        let command = vec!["espeak-ng".to_string(), "-s".to_string(), "150".to_string()];
        let announcer = CommandAnnouncer::from_command_line(&command).unwrap();
        assert_eq!(announcer.program(), Path::new("espeak-ng"));
        assert_eq!(announcer.args(), ["-s", "150"]);
    }

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(CommandAnnouncer::from_command_line(&[]).is_none());
    }

    #[test]
    fn phrase_is_last_argument() {
        let announcer =
            CommandAnnouncer::new("speak", vec!["-q".into()], PhraseDelivery::LastArgument);
        let cmd = announcer.command_for("Correct answer!");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-q", "Correct answer!"]);
    }

    #[test]
    fn phrase_in_environment_is_not_an_argument() {
        let announcer = CommandAnnouncer::new("speak", Vec::new(), PhraseDelivery::Environment);
        let cmd = announcer.command_for("Try again");
        assert_eq!(cmd.get_args().count(), 0);
        let phrase = cmd
            .get_envs()
            .find(|(key, _)| *key == PHRASE_ENV)
            .and_then(|(_, value)| value);
        assert_eq!(phrase, Some(std::ffi::OsStr::new("Try again")));
    }

    #[test]
    fn missing_program_reports_failure() {
        let announcer = CommandAnnouncer::new(
            "/nonexistent/iced-quiz-tts",
            Vec::new(),
            PhraseDelivery::LastArgument,
        );
        assert!(matches!(
            announcer.announce("hello"),
            Err(SpeechError::Failed(_))
        ));
    }

    #[test]
    fn silent_announcer_accepts_everything() {
        assert!(SilentAnnouncer.announce("anything").is_ok());
    }

    #[test]
    fn disabled_speech_is_silent_without_warning() {
        let config = SpeechConfig {
            enabled: false,
            command: Some(vec!["espeak-ng".to_string()]),
        };
        let (_, warning) = announcer_from_config(&config, &en_us());
        assert!(warning.is_none());
    }

    #[test]
    fn configured_command_skips_detection() {
        let config = SpeechConfig {
            enabled: true,
            command: Some(vec!["my-tts".to_string(), "--fast".to_string()]),
        };
        let (_, warning) = announcer_from_config(&config, &en_us());
        assert!(warning.is_none());
    }

    #[test]
    fn find_in_path_rejects_missing_explicit_path() {
        assert!(find_in_path(Path::new("/nonexistent/dir/tts")).is_none());
    }
}
