// ABOUTME: Week clock output model and the session counts it is computed from
// ABOUTME: Current week/day, deload and rest flags, next session date, adherence, progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Completed-session counts supplied by the caller from history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    /// Sessions completed since the program started
    pub completed_total: u32,
    /// Sessions completed in the current program week
    pub completed_this_week: u32,
}

/// Inclusive calendar bounds of a program week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// First day of the week
    pub start: NaiveDate,
    /// Last day of the week
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Whether the date falls within the week
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

/// Where "today" sits in the program
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekStatus {
    /// Program week (1-based; may exceed the program length once complete)
    pub week: u32,
    /// Program day within the week (1-7)
    pub day: u8,
    /// Calendar weekday of today
    pub weekday: Weekday,
    /// Whether the current week is a deload week
    pub is_deload: bool,
    /// Whether today is a configured rest weekday
    pub is_rest_day: bool,
    /// Next date a session should be trained, if any weekday allows one
    pub next_session_date: Option<NaiveDate>,
    /// Sessions behind schedule for the weeks already finished
    pub missed_sessions: u32,
    /// Program completion (0-100)
    pub progress_pct: f64,
    /// First day of the current program week
    pub week_start: NaiveDate,
    /// Last day of the current program week
    pub week_end: NaiveDate,
    /// Whether today lies past the final program week
    pub program_complete: bool,
}

impl WeekStatus {
    /// Calendar bounds of the current week
    #[must_use]
    pub const fn window(&self) -> WeekWindow {
        WeekWindow {
            start: self.week_start,
            end: self.week_end,
        }
    }
}
