// ABOUTME: Rolling-window statistics shared by the safety monitor and progression tracking
// ABOUTME: Averages, monotonic trend checks, run lengths, percentage change, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Small pure helpers over ordered windows.
//!
//! Windows are ordered oldest to newest. Helpers return `None` (or `false`)
//! when a window is too short to say anything, so callers can skip the
//! sub-score instead of inventing a value.

/// Mean of the window, `None` when empty
#[must_use]
pub fn rolling_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    Some(values.iter().sum::<f64>() / count)
}

/// Newest `n` entries of an oldest-first window
#[must_use]
pub fn last_n<T>(values: &[T], n: usize) -> &[T] {
    &values[values.len().saturating_sub(n)..]
}

/// Strictly decreasing across the whole window (needs at least two points)
#[must_use]
pub fn is_monotonic_decreasing(values: &[f64]) -> bool {
    values.len() >= 2 && values.windows(2).all(|pair| pair[1] < pair[0])
}

/// Never decreasing across the whole window (needs at least two points)
#[must_use]
pub fn is_monotonic_non_decreasing(values: &[f64]) -> bool {
    values.len() >= 2 && values.windows(2).all(|pair| pair[1] >= pair[0])
}

/// Length of the longest run of consecutive items satisfying `predicate`
pub fn longest_run<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for item in items {
        if predicate(item) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Fraction (0.0-1.0) of items satisfying `predicate`, `None` when empty
pub fn fraction_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let matching = items.iter().filter(|item| predicate(item)).count();
    #[allow(clippy::cast_precision_loss)]
    Some(matching as f64 / items.len() as f64)
}

/// Percentage change from `first` to `last`
///
/// Returns `None` for a zero (or negative) baseline: a bodyweight start has no
/// meaningful percentage change.
#[must_use]
pub fn percent_change(first: f64, last: f64) -> Option<f64> {
    if first <= 0.0 || !first.is_finite() || !last.is_finite() {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a derived score and bound it to the 1-10 scale
#[must_use]
pub fn bounded_score(value: f64) -> u8 {
    // Safe: clamped to 1..=10 before the cast
    value.round().clamp(1.0, 10.0) as u8
}
