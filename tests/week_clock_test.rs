// ABOUTME: Integration tests for program calendar arithmetic
// ABOUTME: Week/day resolution, rest and deload flags, next session scanning, adherence, progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, NaiveDate, Weekday};
use common::{date, program_start, start_plus};
use pierre_periodization::config::WeekClockConfig;
use pierre_periodization::WeekClock;
use pierre_training_core::errors::ErrorCode;
use pierre_training_core::models::{SessionCounts, WeekWindow};

fn counts(completed_total: u32, completed_this_week: u32) -> SessionCounts {
    SessionCounts {
        completed_total,
        completed_this_week,
    }
}

#[test]
fn test_first_day_is_week_one_day_one() {
    let config = WeekClockConfig::default();
    let status =
        WeekClock::resolve(program_start(), program_start(), SessionCounts::default(), &config)
            .unwrap();

    assert_eq!(status.week, 1);
    assert_eq!(status.day, 1);
    assert_eq!(status.weekday, Weekday::Mon);
    assert!(!status.is_deload);
    assert!(!status.is_rest_day);
    assert_eq!(status.missed_sessions, 0);
    assert_eq!(status.week_start, program_start());
    assert_eq!(status.week_end, date(2025, 1, 12));
    assert!((status.progress_pct - 100.0 / 11.0).abs() < 1e-9);
    assert!(!status.program_complete);
}

#[test]
fn test_week_and_day_from_elapsed_days() {
    let config = WeekClockConfig::default();
    let status = WeekClock::resolve(program_start(), start_plus(29), counts(20, 1), &config).unwrap();

    assert_eq!(status.week, 5);
    assert_eq!(status.day, 2);
    assert!(status.is_deload);
    assert_eq!(status.week_start, start_plus(28));
    assert_eq!(status.week_end, start_plus(34));
}

#[test]
fn test_rest_day_follows_configured_weekdays() {
    let config = WeekClockConfig::default();
    let wednesday = start_plus(2);
    let status = WeekClock::resolve(program_start(), wednesday, counts(2, 2), &config).unwrap();
    assert!(status.is_rest_day);

    let custom = WeekClockConfig {
        rest_days: vec![Weekday::Mon],
        sessions_per_week: 5,
    };
    let status = WeekClock::resolve(program_start(), wednesday, counts(2, 2), &custom).unwrap();
    assert!(!status.is_rest_day);
}

#[test]
fn test_today_before_start_is_rejected() {
    let config = WeekClockConfig::default();
    let error = WeekClock::resolve(program_start(), start_plus(-1), SessionCounts::default(), &config)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidRange);
}

#[test]
fn test_past_final_week_marks_program_complete() {
    let config = WeekClockConfig::default();
    let status = WeekClock::resolve(program_start(), start_plus(77), counts(55, 0), &config).unwrap();

    assert_eq!(status.week, 12);
    assert!(status.program_complete);
    assert!(!status.is_deload);
    assert!((status.progress_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_missed_sessions_counts_finished_weeks_only() {
    let config = WeekClockConfig::default();
    let week_three = start_plus(14);

    let behind = WeekClock::resolve(program_start(), week_three, counts(6, 0), &config).unwrap();
    assert_eq!(behind.week, 3);
    assert_eq!(behind.missed_sessions, 4);

    let ahead = WeekClock::resolve(program_start(), week_three, counts(20, 0), &config).unwrap();
    assert_eq!(ahead.missed_sessions, 0);
}

#[test]
fn test_next_session_scans_from_tomorrow_under_frequency() {
    let config = WeekClockConfig::default();

    let monday = WeekClock::resolve(program_start(), program_start(), counts(0, 0), &config).unwrap();
    assert_eq!(monday.next_session_date, Some(start_plus(1)));

    // Tuesday: Wednesday is a rest day, so Thursday is next
    let tuesday = WeekClock::resolve(program_start(), start_plus(1), counts(1, 1), &config).unwrap();
    assert_eq!(tuesday.next_session_date, Some(start_plus(3)));
}

#[test]
fn test_next_session_moves_to_next_week_when_frequency_met() {
    let config = WeekClockConfig::default();
    let status = WeekClock::resolve(program_start(), start_plus(1), counts(5, 5), &config).unwrap();
    assert_eq!(status.next_session_date, Some(start_plus(7)));
}

#[test]
fn test_next_session_absent_when_every_day_rests() {
    let config = WeekClockConfig {
        rest_days: vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ],
        sessions_per_week: 1,
    };
    let status = WeekClock::resolve(program_start(), program_start(), counts(0, 0), &config).unwrap();
    assert_eq!(status.next_session_date, None);
}

#[test]
fn test_resolution_is_deterministic() {
    let config = WeekClockConfig::default();
    let first = WeekClock::resolve(program_start(), start_plus(40), counts(25, 2), &config).unwrap();
    let second = WeekClock::resolve(program_start(), start_plus(40), counts(25, 2), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_week_window_helper() {
    let window = WeekClock::week_window(program_start(), 2).unwrap();
    assert_eq!(window.start, start_plus(7));
    assert_eq!(window.end, start_plus(13));
    assert!(window.contains(start_plus(10)));
    assert!(!window.contains(start_plus(14)));
}

#[test]
fn test_week_for_day_offsets() {
    assert_eq!(WeekClock::week_for(0).unwrap(), 1);
    assert_eq!(WeekClock::week_for(6).unwrap(), 1);
    assert_eq!(WeekClock::week_for(7).unwrap(), 2);
    assert_eq!(WeekClock::week_for(76).unwrap(), 11);
    assert_eq!(
        WeekClock::week_for(u64::MAX).unwrap_err().code,
        ErrorCode::InvalidRange
    );
}

#[test]
fn test_week_past_end_of_calendar_is_rejected() {
    let config = WeekClockConfig::default();
    let start = NaiveDate::MAX.checked_sub_days(Days::new(1)).unwrap();

    let error =
        WeekClock::resolve(start, NaiveDate::MAX, SessionCounts::default(), &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidRange);

    assert_eq!(
        WeekClock::week_window(start, 1).unwrap_err().code,
        ErrorCode::InvalidRange
    );
    assert_eq!(
        WeekClock::week_window(program_start(), u32::MAX).unwrap_err().code,
        ErrorCode::InvalidRange
    );
}

#[test]
fn test_no_next_session_after_last_calendar_day() {
    let config = WeekClockConfig::default();
    let window = WeekWindow {
        start: NaiveDate::MAX.checked_sub_days(Days::new(6)).unwrap(),
        end: NaiveDate::MAX,
    };

    assert_eq!(
        WeekClock::next_session_date(NaiveDate::MAX, window, counts(0, 0), &config),
        None
    );
    assert_eq!(
        WeekClock::next_session_date(window.start, window, counts(5, 5), &config),
        None
    );
}
