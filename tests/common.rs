// ABOUTME: Shared test fixtures for training engine integration tests
// ABOUTME: Dates, wellness snapshots, history records, progression rules, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_training_engine`

use chrono::{Duration, NaiveDate};
use pierre_training_core::models::{
    CheckIn, ExerciseProgressionRule, SessionRecord, SetLog, TraineeProfile, WellnessSnapshot,
};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A Monday used as the program start in most tests
pub fn program_start() -> NaiveDate {
    date(2025, 1, 6)
}

/// Date `days` after the program start
pub fn start_plus(days: i64) -> NaiveDate {
    program_start() + Duration::days(days)
}

/// Wellness snapshot with every field explicit
pub fn wellness(mood: u8, energy_level: u8, sleep_hours: f64, muscle_soreness: u8) -> WellnessSnapshot {
    WellnessSnapshot {
        mood,
        energy_level,
        sleep_hours,
        muscle_soreness,
    }
}

/// A day on which no wellness rule fires
pub fn good_day() -> WellnessSnapshot {
    wellness(8, 8, 8.0, 2)
}

/// Check-in with neutral mood and full sleep
pub fn checkin(date: NaiveDate, energy_level: u8, muscle_soreness: u8) -> CheckIn {
    CheckIn {
        date,
        wellness: wellness(7, energy_level, 8.0, muscle_soreness),
    }
}

/// Completed 45-minute session with a reported RPE
pub fn session(date: NaiveDate, average_rpe: f64) -> SessionRecord {
    SessionRecord {
        date,
        focus: None,
        average_rpe: Some(average_rpe),
        duration_minutes: 45,
    }
}

/// Logged working set of 8 reps
pub fn set_log(date: NaiveDate, exercise_id: &str, weight: f64, rpe: f64) -> SetLog {
    SetLog {
        date,
        exercise_id: exercise_id.to_owned(),
        weight,
        reps: 8,
        rpe,
    }
}

/// Progression rule with a 50 kg base weight
pub fn rule(progression_rate_pct: f64, max_increase_pct: f64, rpe_threshold: f64) -> ExerciseProgressionRule {
    ExerciseProgressionRule {
        exercise_id: "goblet_squat".to_owned(),
        base_weight: 50.0,
        progression_rate_pct,
        max_increase_pct,
        rpe_threshold,
    }
}

/// Adult trainee starting on [`program_start`]
pub fn trainee(age: u32) -> TraineeProfile {
    TraineeProfile {
        id: Uuid::new_v4(),
        display_name: Some("Alex".to_owned()),
        age,
        program_start: program_start(),
    }
}

/// The declining-wellness, high-effort history that should force rest
pub fn overtraining_checkins(first: NaiveDate) -> Vec<CheckIn> {
    vec![
        checkin(first, 8, 2),
        checkin(first + Duration::days(1), 6, 3),
        checkin(first + Duration::days(2), 3, 4),
    ]
}

/// Four consecutive sessions at RPE 8, 8, 9, 8 starting on `first`
pub fn high_effort_sessions(first: NaiveDate) -> Vec<SessionRecord> {
    (0_i64..)
        .zip([8.0, 8.0, 9.0, 8.0])
        .map(|(offset, rpe)| session(first + Duration::days(offset), rpe))
        .collect()
}
