// SPDX-License-Identifier: MPL-2.0
//! `iced_quiz` is a video-driven multiple-choice quiz built with the Iced GUI
//! framework.
//!
//! A looping background clip plays behind the questions; every answer plays
//! a feedback clip and speaks a localized phrase, until each question has
//! been answered correctly and the completion screen is shown.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod question_bank;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub mod test_utils;
