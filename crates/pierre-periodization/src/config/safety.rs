// ABOUTME: Safety monitor configuration: overtraining triggers, youth rules, forced modifications
// ABOUTME: Weekly session limits, trend windows, RPE cut-offs, and session reduction factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety Monitor Configuration
//!
//! Thresholds for the overtraining composite and the factors used when the
//! monitor forces a session to be reduced or replaced with active recovery.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Safety monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Sessions in one week above which the frequency signal fires
    pub max_weekly_sessions: u32,
    /// Number of newest check-ins examined for energy/soreness trends
    pub trend_window: usize,
    /// A run of high-effort sessions longer than this fires the effort signal
    pub consecutive_high_rpe_sessions: usize,
    /// Session RPE above which a session counts as high effort
    pub high_session_rpe: f64,
    /// Set RPE above which a set counts against form quality
    pub high_set_rpe: f64,
    /// Trainees younger than this receive youth recommendations
    pub youth_age_limit: u32,
    /// Load progression percentage above which youth progression is flagged
    pub youth_progression_limit_pct: f64,
    /// Overtraining composite at which injury risk becomes critical
    pub critical_overtraining_score: f64,
    /// Intensity multiplier for `reduce_intensity`
    pub intensity_reduction_factor: f64,
    /// Duration multiplier for `reduce_volume`
    pub volume_reduction_factor: f64,
    /// `reduce_volume` never trims the exercise list below this length
    pub min_exercises_after_trim: usize,
    /// Duration ceiling for a session replaced by active recovery
    pub rest_duration_cap_minutes: u32,
    /// Intensity ceiling for a session replaced by active recovery
    pub rest_intensity_cap: f64,
    /// Exercise prepended when form focus is forced
    pub technique_exercise: String,
    /// Exercises used for forced active recovery
    pub recovery_exercises: Vec<String>,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_weekly_sessions: 6,
            trend_window: 3,
            consecutive_high_rpe_sessions: 3,
            high_session_rpe: 7.0,
            high_set_rpe: 8.0,
            youth_age_limit: 16,
            youth_progression_limit_pct: 5.0,
            critical_overtraining_score: 0.7,
            intensity_reduction_factor: 0.7,
            volume_reduction_factor: 0.75,
            min_exercises_after_trim: 3,
            rest_duration_cap_minutes: 20,
            rest_intensity_cap: 0.3,
            technique_exercise: "technique_drill".to_owned(),
            recovery_exercises: vec![
                "foam_roll".to_owned(),
                "light_walk".to_owned(),
                "mobility_flow".to_owned(),
                "breathing_drill".to_owned(),
            ],
        }
    }
}

impl SafetyConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_window must cover at least 2 check-ins",
            ));
        }
        if !(0.0..=1.0).contains(&self.critical_overtraining_score) {
            return Err(ConfigError::InvalidRange(
                "critical_overtraining_score must be within 0.0-1.0",
            ));
        }
        if !(1.0..=10.0).contains(&self.high_session_rpe) || !(1.0..=10.0).contains(&self.high_set_rpe)
        {
            return Err(ConfigError::ValueOutOfRange(
                "RPE cut-offs must be on the 1-10 scale",
            ));
        }
        for factor in [
            self.intensity_reduction_factor,
            self.volume_reduction_factor,
            self.rest_intensity_cap,
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::InvalidRange(
                    "safety reduction factors must be in (0, 1]",
                ));
            }
        }
        if self.recovery_exercises.is_empty() {
            return Err(ConfigError::MissingField("recovery_exercises"));
        }
        Ok(())
    }
}
