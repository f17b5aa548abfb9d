// ABOUTME: Wellness adapter configuration: trigger thresholds and reduction factors
// ABOUTME: Energy, sleep, soreness, and mood triggers plus engagement filler exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Wellness adapter configuration
///
/// Scores are on the shared 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessConfig {
    /// Energy below this shortens the session
    pub low_energy_threshold: u8,
    /// Sleep below this many hours shortens the session
    pub short_sleep_hours: f64,
    /// Soreness above this lowers intensity
    pub soreness_threshold: u8,
    /// Mood below this lowers intensity and adds engagement exercises
    pub low_mood_threshold: u8,
    /// Duration multiplier for low energy or short sleep
    pub duration_factor: f64,
    /// Intensity multiplier for soreness
    pub soreness_intensity_factor: f64,
    /// Intensity multiplier for low mood
    pub mood_intensity_factor: f64,
    /// Low-stakes exercises appended on low-mood days
    pub engagement_exercises: Vec<String>,
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            low_energy_threshold: 4,
            short_sleep_hours: 6.0,
            soreness_threshold: 3,
            low_mood_threshold: 3,
            duration_factor: 0.8,
            soreness_intensity_factor: 0.7,
            mood_intensity_factor: 0.8,
            engagement_exercises: vec!["fun_movement".to_owned(), "dance_break".to_owned()],
        }
    }
}

impl WellnessConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for factor in [
            self.duration_factor,
            self.soreness_intensity_factor,
            self.mood_intensity_factor,
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::InvalidRange(
                    "wellness reduction factors must be in (0, 1]",
                ));
            }
        }
        if !(0.0..=24.0).contains(&self.short_sleep_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "short_sleep_hours must be within 0-24",
            ));
        }
        if [
            self.low_energy_threshold,
            self.soreness_threshold,
            self.low_mood_threshold,
        ]
        .iter()
        .any(|threshold| !(1..=10).contains(threshold))
        {
            return Err(ConfigError::ValueOutOfRange(
                "wellness score thresholds must be on the 1-10 scale",
            ));
        }
        Ok(())
    }
}
