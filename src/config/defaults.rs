// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Smallest window that still fits the question card next to the video.
pub const MIN_WINDOW_WIDTH: u32 = 720;

pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Feedback Watchdog Defaults
// ==========================================================================

/// Minimum feedback timeout (in seconds).
pub const MIN_FEEDBACK_TIMEOUT_SECS: u32 = 1;

/// Maximum feedback timeout (in seconds).
pub const MAX_FEEDBACK_TIMEOUT_SECS: u32 = 600;

/// Interval of the watchdog tick while feedback plays (in milliseconds).
pub const FEEDBACK_WATCHDOG_TICK_MS: u64 = 250;

// ==========================================================================
// Speech Defaults
// ==========================================================================

/// Spoken feedback is on unless disabled in `settings.toml`.
pub const DEFAULT_SPEECH_ENABLED: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);

    assert!(MIN_FEEDBACK_TIMEOUT_SECS > 0);
    assert!(MAX_FEEDBACK_TIMEOUT_SECS >= MIN_FEEDBACK_TIMEOUT_SECS);

    assert!(FEEDBACK_WATCHDOG_TICK_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_are_valid() {
        assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn watchdog_tick_is_shorter_than_min_timeout() {
        assert!(FEEDBACK_WATCHDOG_TICK_MS < u64::from(MIN_FEEDBACK_TIMEOUT_SECS) * 1000);
    }
}
