// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each screen
//! module exposes a `ViewContext`, its own `Message` enum and a `view`
//! function, and the application maps those messages to its own.
//!
//! # Screens
//!
//! - [`quiz_panel`] - Question card with the four answer buttons
//! - [`completion`] - Completion card with the "Play again" action
//!
//! # Shared Infrastructure
//!
//! - [`progress`] - Answered-fraction bar
//! - [`notices`] - Startup warnings as dismissable toasts
//! - [`widgets`] - Custom widgets (video canvas)
//! - [`styles`] - Centralized styling (buttons, containers, progress bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod completion;
pub mod design_tokens;
pub mod notices;
pub mod progress;
pub mod quiz_panel;
pub mod styles;
pub mod theming;
pub mod widgets;
