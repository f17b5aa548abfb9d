// ABOUTME: Program phase descriptors and per-exercise progression rules
// ABOUTME: Phase names, intensity/volume targets, and static load progression configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::validation::{validate_non_negative, validate_rpe};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named stretch of the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    /// Movement quality and work capacity
    Foundation,
    /// Progressive strength development
    Strength,
    /// Explosive power development
    Power,
    /// Highest intensity, reduced volume
    Peak,
    /// Reduced-intensity recovery week
    Deload,
}

impl PhaseName {
    /// Lowercase label used in logs and copy
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Peak => "peak",
            Self::Deload => "deload",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase descriptor for one program week
///
/// Derived purely from the week number; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPhase {
    /// Program week (1-based)
    pub week: u32,
    /// Phase the week belongs to
    pub phase: PhaseName,
    /// Target intensity (1-10)
    pub intensity: u8,
    /// Target volume (1-10)
    pub volume: u8,
    /// Training focus for the phase
    pub focus: String,
    /// Coaching notes for the phase
    pub notes: String,
}

impl ProgramPhase {
    /// Whether this is a deload week
    #[must_use]
    pub fn is_deload(&self) -> bool {
        self.phase == PhaseName::Deload
    }

    /// Intensity as a 0.0-1.0 multiplier
    #[must_use]
    pub fn intensity_fraction(&self) -> f64 {
        f64::from(self.intensity) / 10.0
    }
}

/// Static progression configuration for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgressionRule {
    /// Exercise identifier
    pub exercise_id: String,
    /// Starting load when the trainee has no history for this exercise
    pub base_weight: f64,
    /// Nominal progression per step, percent of the current working weight
    pub progression_rate_pct: f64,
    /// Hard cap on a single step, percent of the current working weight
    pub max_increase_pct: f64,
    /// RPE above which the load is held
    pub rpe_threshold: f64,
}

impl ExerciseProgressionRule {
    /// Check every field against its domain
    ///
    /// # Errors
    /// Returns `InvalidRange` for negative rates/weights or a threshold off the RPE scale
    pub fn validate(&self) -> AppResult<()> {
        validate_non_negative("base_weight", self.base_weight)?;
        validate_non_negative("progression_rate_pct", self.progression_rate_pct)?;
        validate_non_negative("max_increase_pct", self.max_increase_pct)?;
        validate_rpe("rpe_threshold", self.rpe_threshold)?;
        Ok(())
    }
}

/// Last logged working set for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastPerformance {
    /// Working weight used
    pub weight: f64,
    /// RPE reported for it
    pub rpe: f64,
}
