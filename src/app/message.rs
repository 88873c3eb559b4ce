// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notices;
use crate::video_player::PlaybackMessage;
use iced::keyboard;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// An answer button was pressed.
    OptionSelected(String),
    /// Decoder output for the active clip.
    Playback(PlaybackMessage),
    /// Restart from the completion screen.
    PlayAgain,
    /// Periodic tick driving the feedback watchdog and notice expiry.
    Tick(Instant),
    /// Key pressed while no widget captured it.
    Keyboard(keyboard::Key),
    Notice(notices::Message),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_QUIZ_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional question file replacing the configured or built-in set.
    pub questions: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
