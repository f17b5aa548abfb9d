// ABOUTME: Public entry points composing the periodization calculators into engine operations
// ABOUTME: Week resolution, daily session recommendations, next loads, and safety evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Entry Points
//!
//! Pure functions over caller-supplied snapshots. Within one recommendation
//! the order is fixed: week clock, phase, schedule, wellness adapter; safety
//! modifications are layered on afterwards and only ever reduce the session.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pierre_periodization::config::WeekClockConfig;
//! use pierre_training_core::models::SessionCounts;
//! use pierre_training_engine::engine::resolve_week;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let status =
//!     resolve_week(start, start, SessionCounts::default(), &WeekClockConfig::default()).unwrap();
//! assert_eq!((status.week, status.day), (1, 1));
//! ```

use chrono::NaiveDate;
use pierre_periodization::config::{PeriodizationConfig, SafetyConfig, WeekClockConfig};
use pierre_periodization::{
    PhaseCalculator, ProgressionCalculator, SafetyAssessment, SafetyInput, SafetyMonitor,
    ScheduleGenerator, WeekClock, WellnessAdapter, WellnessRule,
};
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{
    ExerciseProgressionRule, ForcedModifications, ProgramPhase, SessionCounts, SessionTemplate,
    WeekStatus, WellnessSnapshot,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs for one daily session recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Day the program started
    pub program_start: NaiveDate,
    /// Day the recommendation is for
    pub today: NaiveDate,
    /// Completed-session counts from history
    pub counts: SessionCounts,
    /// Today's wellness check-in, when the trainee filed one
    pub wellness: Option<WellnessSnapshot>,
}

/// Why a recommendation carries no sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestReason {
    /// Today is a configured rest weekday
    ScheduledRestDay,
    /// The schedule has no template for today's program day
    NoSessionPlanned,
    /// Today lies past the final program week
    ProgramComplete,
}

impl RestReason {
    /// Human-readable explanation
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ScheduledRestDay => "Scheduled rest day",
            Self::NoSessionPlanned => "No session planned for this program day",
            Self::ProgramComplete => "Program complete",
        }
    }
}

/// Today's sessions after wellness adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecommendation {
    /// Where today sits in the program
    pub status: WeekStatus,
    /// Phase of the current week, `None` once the program is complete
    pub phase: Option<ProgramPhase>,
    /// Sessions to train today, AM before PM
    pub sessions: Vec<SessionTemplate>,
    /// Wellness rules that adjusted the sessions
    pub wellness_rules: Vec<WellnessRule>,
    /// Set when there is nothing to train today
    pub rest_reason: Option<RestReason>,
    /// Explanations of every adjustment, in application order
    pub notes: Vec<String>,
}

impl SessionRecommendation {
    /// Whether today is a rest day
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.rest_reason.is_some()
    }
}

/// Resolve where `today` sits in the program
///
/// # Errors
/// Returns `InvalidRange` when `today` precedes `program_start`
pub fn resolve_week(
    program_start: NaiveDate,
    today: NaiveDate,
    counts: SessionCounts,
    config: &WeekClockConfig,
) -> AppResult<WeekStatus> {
    WeekClock::resolve(program_start, today, counts, config)
}

/// Build today's session recommendation
///
/// # Errors
/// Returns `InvalidRange` for a date before the program start or an
/// out-of-scale wellness snapshot
pub fn generate_session_recommendation(
    request: &SessionRequest,
    config: &PeriodizationConfig,
) -> AppResult<SessionRecommendation> {
    let status = WeekClock::resolve(
        request.program_start,
        request.today,
        request.counts,
        &config.week_clock,
    )?;
    if let Some(wellness) = &request.wellness {
        wellness.validate()?;
    }

    if status.program_complete {
        return Ok(rest(status, None, RestReason::ProgramComplete));
    }

    let phase = PhaseCalculator::phase_for_week(status.week)?;
    if status.is_rest_day {
        return Ok(rest(status, Some(phase), RestReason::ScheduledRestDay));
    }

    let planned = ScheduleGenerator::sessions_for_day(status.week, status.day)?;
    if planned.is_empty() {
        return Ok(rest(status, Some(phase), RestReason::NoSessionPlanned));
    }

    let (sessions, wellness_rules) = match &request.wellness {
        Some(wellness) => {
            let rules = WellnessAdapter::triggered_rules(wellness, &config.wellness);
            let adapted = planned
                .iter()
                .map(|session| WellnessAdapter::adapt(session, wellness, &config.wellness))
                .collect::<AppResult<Vec<_>>>()?;
            (adapted, rules)
        }
        None => (planned, Vec::new()),
    };
    let notes = wellness_rules
        .iter()
        .map(|rule| rule.description().to_owned())
        .collect();

    debug!(
        week = status.week,
        day = status.day,
        phase = %phase.phase,
        sessions = sessions.len(),
        "Generated session recommendation"
    );

    Ok(SessionRecommendation {
        status,
        phase: Some(phase),
        sessions,
        wellness_rules,
        rest_reason: None,
        notes,
    })
}

fn rest(status: WeekStatus, phase: Option<ProgramPhase>, reason: RestReason) -> SessionRecommendation {
    SessionRecommendation {
        status,
        phase,
        sessions: Vec::new(),
        wellness_rules: Vec::new(),
        rest_reason: Some(reason),
        notes: vec![reason.description().to_owned()],
    }
}

/// Layer forced safety modifications over a recommendation
///
/// Applied after wellness adjustments; never lengthens or intensifies a session.
/// Forced rest collapses a two-session day into one active recovery session.
#[must_use]
pub fn apply_forced_modifications(
    recommendation: &SessionRecommendation,
    modifications: ForcedModifications,
    config: &SafetyConfig,
) -> SessionRecommendation {
    let mut modified = recommendation.clone();
    if !modifications.any() || modified.sessions.is_empty() {
        return modified;
    }

    let kept = if modifications.add_rest {
        1
    } else {
        recommendation.sessions.len()
    };
    modified.sessions = recommendation
        .sessions
        .iter()
        .take(kept)
        .map(|session| SafetyMonitor::apply_modifications(session, modifications, config))
        .collect();

    if modifications.add_rest {
        modified
            .notes
            .push("Session replaced with active recovery for safety".to_owned());
    } else {
        if modifications.reduce_intensity {
            modified
                .notes
                .push("Intensity reduced for accumulated fatigue".to_owned());
        }
        if modifications.reduce_volume {
            modified
                .notes
                .push("Volume reduced for accumulated fatigue".to_owned());
        }
        if modifications.focus_on_form {
            modified
                .notes
                .push("Technique work added to restore form".to_owned());
        }
    }
    modified
}

/// Next working weight for one exercise
///
/// # Errors
/// Returns `InvalidWeek` or `InvalidRange` for out-of-domain inputs
pub fn next_exercise_weight(
    current_weight: f64,
    last_rpe: f64,
    week: u32,
    rule: &ExerciseProgressionRule,
) -> AppResult<f64> {
    ProgressionCalculator::next_weight(current_weight, last_rpe, week, rule)
}

/// Score one trainee's history and derive alerts and forced modifications
///
/// # Errors
/// Returns `InvalidRange` when a history record carries an out-of-scale value
pub fn evaluate_safety(input: &SafetyInput, config: &SafetyConfig) -> AppResult<SafetyAssessment> {
    SafetyMonitor::assess(input, config)
}

/// Evaluate many independent trainees in parallel
///
/// Results are returned in input order; one invalid input does not affect the others.
#[must_use]
pub fn evaluate_safety_batch(
    inputs: &[SafetyInput],
    config: &SafetyConfig,
) -> Vec<AppResult<SafetyAssessment>> {
    inputs
        .par_iter()
        .map(|input| SafetyMonitor::assess(input, config))
        .collect()
}
