// ABOUTME: Daily wellness self-report model with mood, energy, sleep, and soreness
// ABOUTME: All subjective scores share one validated 1-10 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::validation::{validate_score, validate_sleep_hours};
use serde::{Deserialize, Serialize};

/// Wellness snapshot supplied with each check-in
///
/// `mood`, `energy_level`, and `muscle_soreness` use the 1-10 scale (10 = best
/// mood, most energy, most soreness). Values off the scale are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellnessSnapshot {
    /// Mood (1-10)
    pub mood: u8,
    /// Energy level (1-10)
    pub energy_level: u8,
    /// Hours slept the previous night
    pub sleep_hours: f64,
    /// Muscle soreness (1-10)
    pub muscle_soreness: u8,
}

impl WellnessSnapshot {
    /// Check every field against its scale
    ///
    /// # Errors
    /// Returns `InvalidRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        validate_score("mood", self.mood)?;
        validate_score("energy_level", self.energy_level)?;
        validate_sleep_hours(self.sleep_hours)?;
        validate_score("muscle_soreness", self.muscle_soreness)?;
        Ok(())
    }
}
