// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. The active locale is
//! resolved from the CLI, then the config file, then the OS, and falls back
//! to `en-US`. Spoken feedback phrases come from the same bundles as the
//! on-screen text.

pub mod fluent;
