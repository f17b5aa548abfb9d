// ABOUTME: Program calendar arithmetic from a start date and today's date
// ABOUTME: Resolves week/day, deload and rest flags, next session date, missed sessions, progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Week Clock
//!
//! The single source of "which week am I in" for every other calculator.
//! `today` is always an explicit argument; the clock never reads system time.

use crate::config::WeekClockConfig;
use crate::phase_calculator::PhaseCalculator;
use chrono::{Datelike, Days, NaiveDate};
use pierre_training_core::constants::program::{DAYS_PER_WEEK, TOTAL_WEEKS};
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{SessionCounts, WeekStatus, WeekWindow};
use tracing::debug;

/// Longest forward scan when looking for the next training weekday
const MAX_SCAN_DAYS: u64 = 7;

/// Program calendar calculator
pub struct WeekClock;

impl WeekClock {
    /// Resolve where `today` sits in the program that started on `program_start`
    ///
    /// # Errors
    /// Returns `InvalidRange` when `today` precedes `program_start` or when the
    /// current week runs past the end of the calendar
    pub fn resolve(
        program_start: NaiveDate,
        today: NaiveDate,
        counts: SessionCounts,
        config: &WeekClockConfig,
    ) -> AppResult<WeekStatus> {
        let days_since_start = Self::days_since_start(program_start, today)?;
        let week = Self::week_for(days_since_start)?;
        // Safe: remainder of division by 7 always fits in u8
        let day = (days_since_start % u64::from(DAYS_PER_WEEK) + 1) as u8;

        let program_complete = week > TOTAL_WEEKS;
        let is_deload = !program_complete && PhaseCalculator::is_deload_week(week)?;
        let is_rest_day = config.is_rest_day(today.weekday());

        let window = Self::week_window(program_start, week)?;
        let next_session_date = Self::next_session_date(today, window, counts, config);
        let missed_sessions = Self::missed_sessions(week, counts.completed_total, config);
        let progress_pct = (f64::from(week) / f64::from(TOTAL_WEEKS) * 100.0).min(100.0);

        debug!(
            week,
            day,
            is_deload,
            is_rest_day,
            missed_sessions,
            "Resolved program week"
        );

        Ok(WeekStatus {
            week,
            day,
            weekday: today.weekday(),
            is_deload,
            is_rest_day,
            next_session_date,
            missed_sessions,
            progress_pct,
            week_start: window.start,
            week_end: window.end,
            program_complete,
        })
    }

    /// Program week (1-based) containing the given day offset
    ///
    /// # Errors
    /// Returns `InvalidRange` when the week number does not fit in a `u32`
    pub fn week_for(days_since_start: u64) -> AppResult<u32> {
        u32::try_from(days_since_start / u64::from(DAYS_PER_WEEK) + 1).map_err(|_| {
            AppError::invalid_range(
                "days_since_start",
                days_since_start,
                "within the program calendar",
            )
        })
    }

    /// Calendar bounds of a program week
    ///
    /// # Errors
    /// Returns `InvalidRange` when the week runs past the end of the calendar
    pub fn week_window(program_start: NaiveDate, week: u32) -> AppResult<WeekWindow> {
        let offset = Days::new(u64::from(week.saturating_sub(1)) * u64::from(DAYS_PER_WEEK));
        let last_day = Days::new(u64::from(DAYS_PER_WEEK) - 1);
        program_start
            .checked_add_days(offset)
            .and_then(|start| {
                start
                    .checked_add_days(last_day)
                    .map(|end| WeekWindow { start, end })
            })
            .ok_or_else(|| {
                AppError::invalid_range(
                    "week",
                    week,
                    &format!("a week inside the calendar from {program_start}"),
                )
            })
    }

    /// Whole days elapsed since the program started
    ///
    /// # Errors
    /// Returns `InvalidRange` when `today` precedes `program_start`
    pub fn days_since_start(program_start: NaiveDate, today: NaiveDate) -> AppResult<u64> {
        u64::try_from((today - program_start).num_days()).map_err(|_| {
            AppError::invalid_range("today", today, &format!(">= program start {program_start}"))
        })
    }

    /// Next date a session should be trained
    ///
    /// Under the weekly frequency the scan starts tomorrow; once the week's
    /// sessions are done it starts at the next week's first day. Returns `None`
    /// when no weekday in the scan window is a training day, or when the scan
    /// would run past the end of the calendar.
    #[must_use]
    pub fn next_session_date(
        today: NaiveDate,
        window: WeekWindow,
        counts: SessionCounts,
        config: &WeekClockConfig,
    ) -> Option<NaiveDate> {
        let scan_from = if counts.completed_this_week < config.sessions_per_week {
            today.succ_opt()?
        } else {
            window.end.succ_opt()?
        };
        (0..MAX_SCAN_DAYS)
            .map_while(|offset| scan_from.checked_add_days(Days::new(offset)))
            .find(|date| !config.is_rest_day(date.weekday()))
    }

    /// Sessions behind schedule for the weeks already finished
    ///
    /// Weeks past the end of the program do not accrue further expectations.
    #[must_use]
    pub fn missed_sessions(week: u32, completed_total: u32, config: &WeekClockConfig) -> u32 {
        let finished_weeks = week.saturating_sub(1).min(TOTAL_WEEKS);
        finished_weeks
            .saturating_mul(config.sessions_per_week)
            .saturating_sub(completed_total)
    }
}
