// SPDX-License-Identifier: MPL-2.0
//! Location of the user configuration directory.
//!
//! The first match wins:
//! 1. an explicit path passed to [`get_app_config_dir_with_override`],
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`],
//! 3. the `ICED_QUIZ_CONFIG_DIR` environment variable, when non-empty,
//! 4. `<platform config dir>/IcedQuiz`.

use std::path::PathBuf;
use std::sync::OnceLock;

pub(crate) const APP_NAME: &str = "IcedQuiz";

pub const ENV_CONFIG_DIR: &str = "ICED_QUIZ_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("--config-dir already recorded; ignoring");
    }
}

/// Resolved config directory, `None` when the platform has none.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
