// ABOUTME: Next working-load recommendation for one exercise from last load and RPE
// ABOUTME: RPE hold, deload reduction, phase-scaled rate, per-step cap, two-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Calculator
//!
//! Every step re-bases on the current working weight: the rate and the cap are
//! both percentages of `current_weight`, never of the exercise's starting load.
//!
//! Rule order:
//! 1. `last_rpe > rpe_threshold` holds the load unchanged
//! 2. deload weeks drop the load by 20%
//! 3. otherwise the rate is scaled by phase (x0.5 foundation, x1.5 power/peak)
//!    and by `intensity / 10`, then capped at `max_increase_pct`

use crate::periodization_constants::progression::{
    DELOAD_LOAD_FACTOR, FOUNDATION_RATE_MULTIPLIER, POWER_PEAK_RATE_MULTIPLIER,
};
use crate::phase_calculator::PhaseCalculator;
use crate::statistics::{percent_change, round_to};
use pierre_training_core::constants::load::WEIGHT_DECIMALS;
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{
    ExerciseProgressionRule, LastPerformance, PhaseName, ProgramPhase,
};
use pierre_training_core::validation::{validate_non_negative, validate_rpe};
use tracing::debug;

/// Load progression calculator
pub struct ProgressionCalculator;

impl ProgressionCalculator {
    /// Recommend the next working weight for one exercise
    ///
    /// A `current_weight` of zero is valid (bodyweight) and simply stays at zero
    /// until the caller supplies an added load.
    ///
    /// # Errors
    /// Returns `InvalidWeek` for a week outside 1..=11 and `InvalidRange` for a
    /// negative weight, an RPE off the 1-10 scale, or an invalid rule
    pub fn next_weight(
        current_weight: f64,
        last_rpe: f64,
        week: u32,
        rule: &ExerciseProgressionRule,
    ) -> AppResult<f64> {
        validate_non_negative("current_weight", current_weight)?;
        validate_rpe("last_rpe", last_rpe)?;
        rule.validate()?;
        let phase = PhaseCalculator::phase_for_week(week)?;

        if last_rpe > rule.rpe_threshold {
            debug!(
                exercise_id = %rule.exercise_id,
                last_rpe,
                threshold = rule.rpe_threshold,
                "Holding load: effort above threshold"
            );
            return Ok(current_weight);
        }

        if phase.is_deload() {
            return Ok(round_to(current_weight * DELOAD_LOAD_FACTOR, WEIGHT_DECIMALS));
        }

        let effective_rate = Self::effective_rate_pct(rule.progression_rate_pct, &phase);
        let increase = current_weight * effective_rate / 100.0;
        let max_increase = current_weight * rule.max_increase_pct / 100.0;
        let ceiling = current_weight + max_increase;

        let mut next = round_to(current_weight + increase.min(max_increase), WEIGHT_DECIMALS);
        if next > ceiling {
            // Rounding up at the cap would exceed it; round toward the cap instead
            let factor = 10_f64.powi(WEIGHT_DECIMALS);
            next = ((ceiling * factor).floor() / factor).max(current_weight);
        }

        debug!(
            exercise_id = %rule.exercise_id,
            phase = %phase.phase,
            effective_rate,
            current_weight,
            next,
            "Computed load progression"
        );
        Ok(next)
    }

    /// Progression rate after phase and intensity scaling, in percent
    #[must_use]
    pub fn effective_rate_pct(base_rate_pct: f64, phase: &ProgramPhase) -> f64 {
        let multiplier = match phase.phase {
            PhaseName::Foundation => FOUNDATION_RATE_MULTIPLIER,
            PhaseName::Power | PhaseName::Peak => POWER_PEAK_RATE_MULTIPLIER,
            PhaseName::Strength | PhaseName::Deload => 1.0,
        };
        base_rate_pct * multiplier * phase.intensity_fraction()
    }

    /// Recommend a load with or without prior performance
    ///
    /// Without history the rule's base weight is the starting point.
    ///
    /// # Errors
    /// Same as [`Self::next_weight`]
    pub fn recommend_load(
        rule: &ExerciseProgressionRule,
        last: Option<LastPerformance>,
        week: u32,
    ) -> AppResult<f64> {
        match last {
            Some(performance) => {
                Self::next_weight(performance.weight, performance.rpe, week, rule)
            }
            None => {
                rule.validate()?;
                PhaseCalculator::phase_for_week(week)?;
                Ok(rule.base_weight)
            }
        }
    }

    /// Percentage change between two loads, `None` for a zero baseline
    #[must_use]
    pub fn load_change_pct(first: f64, last: f64) -> Option<f64> {
        percent_change(first, last)
    }
}
