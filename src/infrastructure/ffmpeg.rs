// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` library setup.

use crate::error::{Result, VideoError};
use std::sync::{Once, OnceLock};

static FFMPEG_INIT: Once = Once::new();
static FFMPEG_INIT_ERROR: OnceLock<String> = OnceLock::new();

/// Initializes `FFmpeg` once per process.
///
/// Safe to call from every decoder thread; only the first call does work,
/// and its outcome is reported to every caller.
pub fn init_ffmpeg() -> Result<()> {
    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            let _ = FFMPEG_INIT_ERROR.set(e.to_string());
            return;
        }

        // Keep FFmpeg's own console output to errors only.
        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    match FFMPEG_INIT_ERROR.get() {
        Some(message) => Err(VideoError::Init(message.clone()).into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init_ffmpeg().is_ok();
        let second = init_ffmpeg().is_ok();
        assert_eq!(first, second);
    }
}
