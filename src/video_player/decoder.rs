// SPDX-License-Identifier: MPL-2.0
//! Async clip decoder using FFmpeg.
//!
//! Decoding runs on a Tokio blocking thread and delivers RGBA frames through
//! a bounded channel, paced by presentation timestamps.

use crate::error::{Error, Result, VideoError};
use crate::infrastructure::ffmpeg::init_ffmpeg;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Polling interval while waiting for `Play`.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    pub width: u32,

    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

impl DecodedFrame {
    /// Returns the total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start decoding from the beginning.
    Play,

    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// A non-looping clip played to its end.
    EndOfStream,

    /// The clip could not be opened or decoded.
    Error(VideoError),
}

/// Clip decoder running in a Tokio blocking task.
pub struct ClipDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Bounded so a slow UI applies backpressure to the decoder.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl ClipDecoder {
    /// Spawns a decoder for `clip_path`. Frames start flowing after
    /// [`DecoderCommand::Play`].
    ///
    /// A `looping` clip restarts at end of stream instead of reporting
    /// [`DecoderEvent::EndOfStream`].
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::NotFound`] if the file does not exist. Problems
    /// found while opening the file arrive later as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(clip_path: P, looping: bool) -> Result<Self> {
        let path = clip_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(VideoError::NotFound(path.display().to_string()).into());
        }

        // Commands: unbounded (UI needs to send without blocking)
        // Events: capacity of 2 frames
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg types are not Send, so the whole loop stays on one thread
        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            if let Err(e) = Self::decoder_loop_blocking(&path, looping, command_rx, event_tx) {
                log::error!("Decoding {} failed: {}", path.display(), e);
                let _ = error_tx.blocking_send(DecoderEvent::Error(into_video_error(e)));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| VideoError::DecodingFailed("decoder task is not running".into()).into())
    }

    /// Receives the next event from the decoder.
    ///
    /// Returns `None` once the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        clip_path: &Path,
        looping: bool,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(clip_path)
            .map_err(|e| VideoError::DecodingFailed(format!("failed to open clip: {}", e)))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters()).map_err(
                |e| VideoError::DecodingFailed(format!("failed to create codec context: {}", e)),
            )?;
        let mut decoder = context_decoder.decoder().video().map_err(|e| {
            VideoError::DecodingFailed(format!("failed to create video decoder: {}", e))
        })?;

        let width = decoder.width();
        let height = decoder.height();

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::DecodingFailed(format!("failed to create scaler: {}", e)))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let mut is_playing = false;
        let mut playback_start_time: Option<Instant> = None;
        let mut first_pts: Option<f64> = None;
        // Frames decoded since the last (re)start; a loop that yields none would spin.
        let mut frames_this_pass: u64 = 0;
        // Set once every packet has been read and EOF sent to the codec.
        let mut input_done = false;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing {
                std::thread::sleep(IDLE_POLL);
                continue;
            }

            let Some(decoded_frame) = Self::next_frame(
                &mut ictx,
                &mut decoder,
                video_stream_index,
                &mut input_done,
                clip_path,
            ) else {
                // Input read and codec drained.
                if looping && frames_this_pass > 0 {
                    ictx.seek(0, ..0).map_err(|e| {
                        VideoError::DecodingFailed(format!("failed to rewind clip: {}", e))
                    })?;
                    decoder.flush();
                    input_done = false;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    frames_this_pass = 0;
                    continue;
                }

                if looping {
                    return Err(
                        VideoError::DecodingFailed("clip has no decodable frames".into()).into(),
                    );
                }

                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                break;
            };

            let mut rgb_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                log::debug!("Scaling failed for {}: {}", clip_path.display(), e);
                continue;
            }

            let rgba_data = Self::extract_rgba_data(&rgb_frame);
            let pts_secs = decoded_frame
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64);

            // Frame pacing: wait until the frame should be displayed
            if let Some(start_time) = playback_start_time {
                let first = *first_pts.get_or_insert(pts_secs);
                let frame_delay = (pts_secs - first).max(0.0);
                let target_time = start_time + Duration::from_secs_f64(frame_delay);
                let now = Instant::now();
                if target_time > now {
                    std::thread::sleep(target_time - now);
                }
            }

            let decoded = DecodedFrame {
                rgba_data: Arc::new(rgba_data),
                width,
                height,
                pts_secs,
            };

            if event_tx
                .blocking_send(DecoderEvent::FrameReady(decoded))
                .is_err()
            {
                break;
            }

            frames_this_pass += 1;
        }

        Ok(())
    }

    /// Returns the next frame of the video stream, or `None` once the
    /// stream is exhausted. After the last packet the codec receives EOF so
    /// the frames it still holds (reordered B-frames) come out as well.
    fn next_frame(
        ictx: &mut ffmpeg_next::format::context::Input,
        decoder: &mut ffmpeg_next::decoder::Video,
        video_stream_index: usize,
        input_done: &mut bool,
        clip_path: &Path,
    ) -> Option<ffmpeg_next::frame::Video> {
        let mut frame = ffmpeg_next::frame::Video::empty();
        loop {
            if decoder.receive_frame(&mut frame).is_ok() {
                return Some(frame);
            }
            if *input_done {
                return None;
            }

            let packet = ictx
                .packets()
                .find(|(stream, _)| stream.index() == video_stream_index)
                .map(|(_, packet)| packet);
            match packet {
                Some(packet) => {
                    if let Err(e) = decoder.send_packet(&packet) {
                        log::debug!("Skipping packet of {}: {}", clip_path.display(), e);
                    }
                }
                None => {
                    *input_done = true;
                    if let Err(e) = decoder.send_eof() {
                        log::debug!("Flushing {} failed: {}", clip_path.display(), e);
                    }
                }
            }
        }
    }

    /// Extracts RGBA data from a decoded frame, handling stride correctly.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let row_start = y * stride;
            let row_end = row_start + width * 4;
            rgba_bytes.extend_from_slice(&data[row_start..row_end]);
        }

        rgba_bytes
    }
}

/// Narrows a decoder failure to the [`VideoError`] shown to the user.
pub(super) fn into_video_error(err: Error) -> VideoError {
    match err {
        Error::Video(video) => video,
        other => VideoError::DecodingFailed(other.to_string()),
    }
}

impl Drop for ClipDecoder {
    fn drop(&mut self) {
        let _ = self.command_tx.send(DecoderCommand::Stop);
    }
}
