// ABOUTME: Range validation for caller-supplied scores, RPE values, sleep hours, and loads
// ABOUTME: Rejects out-of-scale input with InvalidRange errors instead of clamping it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::scales::{MAX_RPE, MAX_SCORE, MAX_SLEEP_HOURS, MIN_RPE, MIN_SCORE};
use crate::errors::{AppError, AppResult};

/// Validate an integer score on the shared 1-10 scale
///
/// # Errors
/// Returns `InvalidRange` when the score is outside 1..=10
pub fn validate_score(field: &str, value: u8) -> AppResult<u8> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::invalid_range(field, value, "1..=10"))
    }
}

/// Validate an RPE value (1.0-10.0, finite)
///
/// # Errors
/// Returns `InvalidRange` for NaN, infinities, or values outside 1..=10
pub fn validate_rpe(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && (MIN_RPE..=MAX_RPE).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::invalid_range(field, value, "1.0..=10.0"))
    }
}

/// Validate reported sleep duration in hours
///
/// # Errors
/// Returns `InvalidRange` for NaN, negative values, or more than 24 hours
pub fn validate_sleep_hours(value: f64) -> AppResult<f64> {
    if value.is_finite() && (0.0..=MAX_SLEEP_HOURS).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::invalid_range("sleep_hours", value, "0.0..=24.0"))
    }
}

/// Validate a load or percentage that must be finite and non-negative
///
/// # Errors
/// Returns `InvalidRange` for NaN, infinities, or negative values
pub fn validate_non_negative(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_range(field, value, ">= 0.0"))
    }
}
