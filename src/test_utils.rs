// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

pub use approx::assert_abs_diff_eq;

/// Tolerance for progress fractions.
pub const PROGRESS_EPSILON: f32 = 1e-6;
