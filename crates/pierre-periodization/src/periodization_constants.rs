// ABOUTME: Fixed coefficients of the periodization method and safety scoring formulas
// ABOUTME: Progression multipliers, session durations, and fatigue/form formula weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Periodization constants
//!
//! These coefficients define the method. Changing them changes every
//! recommendation the engine makes, so they are not exposed as configuration.

/// Load progression coefficients
pub mod progression {
    /// Load multiplier applied in deload weeks (mandatory 20% reduction)
    pub const DELOAD_LOAD_FACTOR: f64 = 0.8;
    /// Rate multiplier during the foundation phase
    pub const FOUNDATION_RATE_MULTIPLIER: f64 = 0.5;
    /// Rate multiplier during power and peak phases
    pub const POWER_PEAK_RATE_MULTIPLIER: f64 = 1.5;
}

/// Session durations in minutes
pub mod schedule {
    /// Nominal AM session length
    pub const NOMINAL_DURATION_MINUTES: u32 = 45;
    /// Deload AM length for strength and power days
    pub const DELOAD_STRENGTH_DURATION_MINUTES: u32 = 30;
    /// Deload AM length for endurance and skills days
    pub const DELOAD_CONDITIONING_DURATION_MINUTES: u32 = 25;
}

/// Fatigue score: `(10 - energy)*0.4 + soreness*0.3 + max(0, 8 - sleep)*0.3`
pub mod fatigue {
    /// Weight of the energy deficit
    pub const ENERGY_WEIGHT: f64 = 0.4;
    /// Weight of average soreness
    pub const SORENESS_WEIGHT: f64 = 0.3;
    /// Weight of the sleep deficit
    pub const SLEEP_WEIGHT: f64 = 0.3;
    /// Sleep hours below which a deficit accrues
    pub const SLEEP_TARGET_HOURS: f64 = 8.0;
}

/// Form score: `10 - (avg_rpe - 5)*2 - high_rpe_fraction*5`
pub mod form {
    /// RPE at which form is assumed unaffected
    pub const RPE_BASELINE: f64 = 5.0;
    /// Penalty per RPE point above baseline
    pub const RPE_PENALTY: f64 = 2.0;
    /// Penalty scaled by the fraction of grinding sets
    pub const HIGH_RPE_FRACTION_PENALTY: f64 = 5.0;
}

/// Injury risk thresholds applied before the overtraining override
pub mod risk {
    /// Fatigue above this is high risk
    pub const HIGH_FATIGUE: u8 = 7;
    /// Fatigue above this is medium risk
    pub const MEDIUM_FATIGUE: u8 = 5;
    /// Form below this is high risk
    pub const HIGH_RISK_FORM: u8 = 4;
    /// Form below this is medium risk
    pub const MEDIUM_RISK_FORM: u8 = 6;
    /// Load progression above this percentage is high risk
    pub const HIGH_PROGRESSION_PCT: f64 = 15.0;
    /// Load progression above this percentage is medium risk
    pub const MEDIUM_PROGRESSION_PCT: f64 = 10.0;
    /// Overtraining composite at which a medium alert is raised
    pub const MEDIUM_OVERTRAINING_SCORE: f64 = 0.4;
}

/// Forced-modification triggers
pub mod modifications {
    /// Fatigue above this reduces intensity and volume
    pub const REDUCE_LOAD_FATIGUE: u8 = 6;
    /// Form below this adds technique focus
    pub const FORM_FOCUS_BELOW: u8 = 5;
}
