// ABOUTME: Training history records read from the caller's record store
// ABOUTME: Wellness check-ins, completed sessions, per-set load logs, and date ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::session::SessionFocus;
use crate::models::wellness::WellnessSnapshot;
use crate::validation::{validate_non_negative, validate_rpe};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Dated wellness self-report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Day the check-in was recorded
    pub date: NaiveDate,
    /// Reported wellness
    pub wellness: WellnessSnapshot,
}

/// Completed training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Day the session was trained
    pub date: NaiveDate,
    /// Focus of the session, when known
    pub focus: Option<SessionFocus>,
    /// Average RPE across the session, when reported
    pub average_rpe: Option<f64>,
    /// Minutes trained
    pub duration_minutes: u32,
}

impl SessionRecord {
    /// Check the reported RPE against its scale
    ///
    /// # Errors
    /// Returns `InvalidRange` when `average_rpe` is present and outside 1..=10
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rpe) = self.average_rpe {
            validate_rpe("session.average_rpe", rpe)?;
        }
        Ok(())
    }
}

/// One logged working set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    /// Day the set was performed
    pub date: NaiveDate,
    /// Exercise identifier
    pub exercise_id: String,
    /// Load used (0 for bodyweight)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// RPE reported for the set
    pub rpe: f64,
}

impl SetLog {
    /// Check load and RPE against their domains
    ///
    /// # Errors
    /// Returns `InvalidRange` for a negative load or an RPE off the scale
    pub fn validate(&self) -> AppResult<()> {
        validate_non_negative("set.weight", self.weight)?;
        validate_rpe("set.rpe", self.rpe)?;
        Ok(())
    }
}

/// Inclusive calendar date range for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting an end before the start
    ///
    /// # Errors
    /// Returns `InvalidRange` when `end < start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::invalid_range(
                "date_range.end",
                end,
                &format!(">= {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Range covering the `days` days that end on `end` (inclusive)
    ///
    /// The start saturates at the first representable date.
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let span = Days::new(u64::from(days.max(1)) - 1);
        Self {
            start: end.checked_sub_days(span).unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    /// Whether the date falls within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}
