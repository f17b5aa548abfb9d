// ABOUTME: Fatigue, form, load progression, and overtraining risk scoring from rolling history
// ABOUTME: Emits safety alerts and forced session modifications, and applies them to templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety Monitor
//!
//! Scores a trainee's recent history and decides whether today's session
//! should be reduced or replaced with active recovery.
//!
//! ## Scores
//!
//! - fatigue: `(10 - avg_energy)*0.4 + avg_soreness*0.3 + max(0, 8 - avg_sleep)*0.3`
//! - form: `10 - (avg_set_rpe - 5)*2 - high_rpe_set_fraction*5`
//! - load progression: mean per-exercise `(last - first) / first * 100`
//! - overtraining composite: 0.3 frequency + 0.4 consecutive effort +
//!   0.2 declining energy + 0.1 rising soreness
//!
//! Thin history never fails an evaluation: a sub-score without enough data
//! takes its neutral value and is listed in `limitations`.

use crate::config::SafetyConfig;
use crate::periodization_constants::fatigue::{
    ENERGY_WEIGHT, SLEEP_TARGET_HOURS, SLEEP_WEIGHT, SORENESS_WEIGHT,
};
use crate::periodization_constants::form::{
    HIGH_RPE_FRACTION_PENALTY, RPE_BASELINE, RPE_PENALTY,
};
use crate::periodization_constants::modifications::{FORM_FOCUS_BELOW, REDUCE_LOAD_FATIGUE};
use crate::periodization_constants::risk::{
    HIGH_FATIGUE, HIGH_PROGRESSION_PCT, HIGH_RISK_FORM, MEDIUM_FATIGUE,
    MEDIUM_OVERTRAINING_SCORE, MEDIUM_PROGRESSION_PCT, MEDIUM_RISK_FORM,
};
use crate::statistics::{
    bounded_score, fraction_where, is_monotonic_decreasing, is_monotonic_non_decreasing, last_n,
    longest_run, percent_change, rolling_average,
};
use crate::wellness_adapter::scale_minutes;
use pierre_training_core::constants::scales::{MAX_SCORE, MIN_SCORE};
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{
    AlertSeverity, AlertType, CheckIn, ForcedModifications, OvertrainingSignal, RiskLevel,
    SafetyAlert, SafetyMetrics, SessionFocus, SessionRecord, SessionTemplate, SetLog, WeekWindow,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// History snapshot for one safety evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyInput {
    /// Recent wellness check-ins
    pub checkins: Vec<CheckIn>,
    /// Recent completed sessions
    pub sessions: Vec<SessionRecord>,
    /// Recent logged sets
    pub set_logs: Vec<SetLog>,
    /// Trainee age in years
    pub trainee_age: u32,
    /// Current program week; when absent every supplied session counts as this week
    pub current_week: Option<WeekWindow>,
}

/// Full result of one safety evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    /// Computed metrics
    pub metrics: SafetyMetrics,
    /// Alerts raised by the metrics
    pub alerts: Vec<SafetyAlert>,
    /// Modifications forced onto today's session
    pub modifications: ForcedModifications,
}

/// Overtraining composite with its contributing signals
struct OvertrainingTrend {
    tenths: u8,
    signals: Vec<OvertrainingSignal>,
}

/// Safety scoring and session modification
pub struct SafetyMonitor;

impl SafetyMonitor {
    /// Score the supplied history
    ///
    /// # Errors
    /// Returns `InvalidRange` when any record carries an out-of-scale value
    pub fn evaluate(input: &SafetyInput, config: &SafetyConfig) -> AppResult<SafetyMetrics> {
        Self::validate_input(input)?;

        let mut checkins = input.checkins.clone();
        checkins.sort_by_key(|checkin| checkin.date);
        let mut sessions = input.sessions.clone();
        sessions.sort_by_key(|session| session.date);
        let mut set_logs = input.set_logs.clone();
        set_logs.sort_by_key(|set| set.date);

        let mut limitations = Vec::new();

        let fatigue_level = Self::fatigue_level(&checkins).unwrap_or_else(|| {
            limitations.push("No check-ins in window: fatigue not scored".to_owned());
            MIN_SCORE
        });
        let form_quality = Self::form_quality(&set_logs, config).unwrap_or_else(|| {
            limitations.push("No logged sets in window: form not scored".to_owned());
            MAX_SCORE
        });
        let load_progression_pct = Self::load_progression_pct(&set_logs).unwrap_or_else(|| {
            limitations.push(
                "No exercise with two comparable loads: progression not scored".to_owned(),
            );
            0.0
        });

        let trend = Self::overtraining_trend(
            &checkins,
            &sessions,
            input.current_week,
            config,
            &mut limitations,
        );
        let overtraining_score = f64::from(trend.tenths) / 10.0;

        let baseline_risk = Self::baseline_risk(fatigue_level, form_quality, load_progression_pct);
        let injury_risk = if overtraining_score >= config.critical_overtraining_score {
            RiskLevel::Critical
        } else {
            baseline_risk
        };

        let recommendations = Self::recommendations(
            fatigue_level,
            form_quality,
            load_progression_pct,
            injury_risk,
            input.trainee_age,
            config,
        );

        if injury_risk == RiskLevel::Critical {
            warn!(
                overtraining_score,
                signals = ?trend.signals,
                "Critical injury risk from overtraining trend"
            );
        }
        debug!(
            fatigue_level,
            form_quality,
            load_progression_pct,
            %injury_risk,
            overtraining_score,
            skipped = limitations.len(),
            "Evaluated safety metrics"
        );

        Ok(SafetyMetrics {
            fatigue_level,
            form_quality,
            load_progression_pct,
            injury_risk,
            overtraining_score,
            overtraining_signals: trend.signals,
            recommendations,
            limitations,
        })
    }

    /// Metrics, alerts, and forced modifications in one call
    ///
    /// # Errors
    /// Same as [`Self::evaluate`]
    pub fn assess(input: &SafetyInput, config: &SafetyConfig) -> AppResult<SafetyAssessment> {
        let metrics = Self::evaluate(input, config)?;
        let alerts = Self::alerts_for(&metrics, config);
        let modifications = Self::modifications_for(&metrics);
        Ok(SafetyAssessment {
            metrics,
            alerts,
            modifications,
        })
    }

    /// Map each metric threshold to an alert; several alerts may fire together
    #[must_use]
    pub fn alerts_for(metrics: &SafetyMetrics, config: &SafetyConfig) -> Vec<SafetyAlert> {
        let mut alerts = Vec::new();

        if metrics.fatigue_level > HIGH_FATIGUE {
            alerts.push(alert(
                AlertType::Fatigue,
                AlertSeverity::High,
                format!("High fatigue level ({}/10)", metrics.fatigue_level),
            ));
        } else if metrics.fatigue_level > MEDIUM_FATIGUE {
            alerts.push(alert(
                AlertType::Fatigue,
                AlertSeverity::Medium,
                format!("Elevated fatigue level ({}/10)", metrics.fatigue_level),
            ));
        }

        if metrics.form_quality < HIGH_RISK_FORM {
            alerts.push(alert(
                AlertType::Form,
                AlertSeverity::High,
                format!("Poor form quality ({}/10)", metrics.form_quality),
            ));
        } else if metrics.form_quality < MEDIUM_RISK_FORM {
            alerts.push(alert(
                AlertType::Form,
                AlertSeverity::Medium,
                format!("Form quality slipping ({}/10)", metrics.form_quality),
            ));
        }

        if metrics.load_progression_pct > HIGH_PROGRESSION_PCT {
            alerts.push(alert(
                AlertType::Load,
                AlertSeverity::High,
                format!(
                    "Load increasing too quickly ({:.1}%)",
                    metrics.load_progression_pct
                ),
            ));
        } else if metrics.load_progression_pct > MEDIUM_PROGRESSION_PCT {
            alerts.push(alert(
                AlertType::Load,
                AlertSeverity::Medium,
                format!(
                    "Load increasing quickly ({:.1}%)",
                    metrics.load_progression_pct
                ),
            ));
        }

        if metrics.injury_risk >= RiskLevel::High {
            alerts.push(alert(
                AlertType::InjuryRisk,
                AlertSeverity::from(metrics.injury_risk),
                format!("Injury risk is {}", metrics.injury_risk),
            ));
        }

        if metrics.overtraining_score >= config.critical_overtraining_score {
            alerts.push(alert(
                AlertType::Overtraining,
                AlertSeverity::Critical,
                format!(
                    "Overtraining pattern detected (score {:.1})",
                    metrics.overtraining_score
                ),
            ));
        } else if metrics.overtraining_score >= MEDIUM_OVERTRAINING_SCORE {
            alerts.push(alert(
                AlertType::Overtraining,
                AlertSeverity::Medium,
                format!(
                    "Early overtraining signs (score {:.1})",
                    metrics.overtraining_score
                ),
            ));
        }

        alerts
    }

    /// Session modifications the metrics force
    #[must_use]
    pub fn modifications_for(metrics: &SafetyMetrics) -> ForcedModifications {
        let reduce_load = metrics.fatigue_level > REDUCE_LOAD_FATIGUE;
        ForcedModifications {
            reduce_intensity: reduce_load,
            reduce_volume: reduce_load,
            add_rest: metrics.injury_risk >= RiskLevel::High,
            focus_on_form: metrics.form_quality < FORM_FOCUS_BELOW,
        }
    }

    /// Return a copy of `session` with the forced modifications applied
    ///
    /// `add_rest` replaces the session with active recovery and supersedes the
    /// other modifications. Duration and intensity never increase.
    #[must_use]
    pub fn apply_modifications(
        session: &SessionTemplate,
        modifications: ForcedModifications,
        config: &SafetyConfig,
    ) -> SessionTemplate {
        let mut modified = session.clone();

        if modifications.add_rest {
            modified.focus = SessionFocus::ActiveRecovery;
            modified.exercises.clone_from(&config.recovery_exercises);
            modified.duration_minutes = modified
                .duration_minutes
                .min(config.rest_duration_cap_minutes);
            modified.intensity_modifier = modified.intensity_modifier.min(config.rest_intensity_cap);
            return modified;
        }

        if modifications.reduce_intensity {
            modified.intensity_modifier *= config.intensity_reduction_factor;
        }
        if modifications.reduce_volume {
            modified.duration_minutes =
                scale_minutes(modified.duration_minutes, config.volume_reduction_factor);
            if modified.exercises.len() > config.min_exercises_after_trim {
                modified.exercises.pop();
            }
        }
        if modifications.focus_on_form
            && modified.exercises.first() != Some(&config.technique_exercise)
        {
            modified
                .exercises
                .insert(0, config.technique_exercise.clone());
        }
        modified
    }

    /// Load progression that fails instead of returning a neutral value
    ///
    /// # Errors
    /// Returns `InsufficientHistory` when no exercise has two comparable loads,
    /// `InvalidRange` for an invalid set log
    pub fn load_progression_strict(set_logs: &[SetLog]) -> AppResult<f64> {
        for set in set_logs {
            set.validate()?;
        }
        let mut sorted = set_logs.to_vec();
        sorted.sort_by_key(|set| set.date);
        Self::load_progression_pct(&sorted).ok_or_else(|| {
            AppError::insufficient_history("exercise load logs", 2, set_logs.len())
        })
    }

    fn validate_input(input: &SafetyInput) -> AppResult<()> {
        for checkin in &input.checkins {
            checkin.wellness.validate()?;
        }
        for session in &input.sessions {
            session.validate()?;
        }
        for set in &input.set_logs {
            set.validate()?;
        }
        Ok(())
    }

    fn fatigue_level(checkins: &[CheckIn]) -> Option<u8> {
        let energy: Vec<f64> = checkins
            .iter()
            .map(|c| f64::from(c.wellness.energy_level))
            .collect();
        let soreness: Vec<f64> = checkins
            .iter()
            .map(|c| f64::from(c.wellness.muscle_soreness))
            .collect();
        let sleep: Vec<f64> = checkins.iter().map(|c| c.wellness.sleep_hours).collect();

        let avg_energy = rolling_average(&energy)?;
        let avg_soreness = rolling_average(&soreness)?;
        let avg_sleep = rolling_average(&sleep)?;

        let raw = (10.0 - avg_energy).mul_add(
            ENERGY_WEIGHT,
            avg_soreness.mul_add(
                SORENESS_WEIGHT,
                (SLEEP_TARGET_HOURS - avg_sleep).max(0.0) * SLEEP_WEIGHT,
            ),
        );
        Some(bounded_score(raw))
    }

    fn form_quality(set_logs: &[SetLog], config: &SafetyConfig) -> Option<u8> {
        let rpe: Vec<f64> = set_logs.iter().map(|set| set.rpe).collect();
        let avg_rpe = rolling_average(&rpe)?;
        let high_fraction = fraction_where(set_logs, |set| set.rpe > config.high_set_rpe)?;
        let raw = (avg_rpe - RPE_BASELINE).mul_add(
            -RPE_PENALTY,
            high_fraction.mul_add(-HIGH_RPE_FRACTION_PENALTY, 10.0),
        );
        Some(bounded_score(raw))
    }

    /// Mean per-exercise load change; exercises are keyed by identifier and
    /// those without a positive first load are left out of the mean
    fn load_progression_pct(sorted_set_logs: &[SetLog]) -> Option<f64> {
        let mut by_exercise: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for set in sorted_set_logs {
            by_exercise
                .entry(set.exercise_id.as_str())
                .or_default()
                .push(set.weight);
        }

        let changes: Vec<f64> = by_exercise
            .values()
            .filter(|weights| weights.len() >= 2)
            .filter_map(|weights| {
                let first = weights.first()?;
                let last = weights.last()?;
                percent_change(*first, *last)
            })
            .collect();
        rolling_average(&changes)
    }

    fn overtraining_trend(
        checkins: &[CheckIn],
        sessions: &[SessionRecord],
        current_week: Option<WeekWindow>,
        config: &SafetyConfig,
        limitations: &mut Vec<String>,
    ) -> OvertrainingTrend {
        let mut signals = Vec::new();

        let sessions_this_week = current_week.map_or(sessions.len(), |window| {
            sessions
                .iter()
                .filter(|session| window.contains(session.date))
                .count()
        });
        let max_weekly = usize::try_from(config.max_weekly_sessions).unwrap_or(usize::MAX);
        if sessions_this_week > max_weekly {
            signals.push(OvertrainingSignal::ExcessiveFrequency);
        }

        let high_effort_run = longest_run(sessions, |session| {
            session
                .average_rpe
                .is_some_and(|rpe| rpe > config.high_session_rpe)
        });
        if high_effort_run > config.consecutive_high_rpe_sessions {
            signals.push(OvertrainingSignal::ConsecutiveHighEffort);
        }

        let recent = last_n(checkins, config.trend_window);
        if recent.len() < config.trend_window {
            limitations.push(format!(
                "Wellness trend needs {} check-ins, found {}",
                config.trend_window,
                recent.len()
            ));
        } else {
            let energy: Vec<f64> = recent
                .iter()
                .map(|c| f64::from(c.wellness.energy_level))
                .collect();
            let soreness: Vec<f64> = recent
                .iter()
                .map(|c| f64::from(c.wellness.muscle_soreness))
                .collect();
            if is_monotonic_decreasing(&energy) {
                signals.push(OvertrainingSignal::DecliningEnergy);
            }
            if is_monotonic_non_decreasing(&soreness) {
                signals.push(OvertrainingSignal::RisingSoreness);
            }
        }

        let tenths = signals
            .iter()
            .map(OvertrainingSignal::weight_tenths)
            .sum::<u8>()
            .min(10);
        OvertrainingTrend { tenths, signals }
    }

    fn baseline_risk(fatigue: u8, form: u8, progression_pct: f64) -> RiskLevel {
        if fatigue > HIGH_FATIGUE || form < HIGH_RISK_FORM || progression_pct > HIGH_PROGRESSION_PCT
        {
            RiskLevel::High
        } else if fatigue > MEDIUM_FATIGUE
            || form < MEDIUM_RISK_FORM
            || progression_pct > MEDIUM_PROGRESSION_PCT
        {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn recommendations(
        fatigue: u8,
        form: u8,
        progression_pct: f64,
        risk: RiskLevel,
        trainee_age: u32,
        config: &SafetyConfig,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        match risk {
            RiskLevel::Critical => recommendations
                .push("Stop training today and take a full recovery day".to_owned()),
            RiskLevel::High => {
                recommendations.push("Replace today's session with active recovery".to_owned());
            }
            RiskLevel::Medium => {
                recommendations.push("Train with caution and monitor how you feel".to_owned());
            }
            RiskLevel::Low => {}
        }
        if fatigue > MEDIUM_FATIGUE {
            recommendations.push("Prioritize sleep and easy days until energy returns".to_owned());
        }
        if form < MEDIUM_RISK_FORM {
            recommendations.push("Lower the load and slow down to clean up technique".to_owned());
        }
        if progression_pct > MEDIUM_PROGRESSION_PCT {
            recommendations.push("Hold loads steady for a week before adding more".to_owned());
        }

        if trainee_age < config.youth_age_limit {
            recommendations
                .push("Focus on technique and movement quality over heavier loads".to_owned());
            if progression_pct > config.youth_progression_limit_pct {
                recommendations.push(format!(
                    "Keep load increases under {:.0}% for young athletes",
                    config.youth_progression_limit_pct
                ));
            }
        }

        recommendations
    }
}

const fn alert(alert_type: AlertType, severity: AlertSeverity, message: String) -> SafetyAlert {
    SafetyAlert {
        alert_type,
        severity,
        message,
        resolved: false,
    }
}
