// ABOUTME: Program structure constants for the periodization engine
// ABOUTME: Week counts, score scales, and service identifiers organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values here are part of the training method itself and are therefore fixed
//! at compile time. Tunable thresholds live in the periodization config tree.

/// Program calendar structure
pub mod program {
    /// Number of weeks in a program
    pub const TOTAL_WEEKS: u32 = 11;
    /// Days in a program week
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Weeks fixed as deload weeks
    pub const DELOAD_WEEKS: [u32; 2] = [5, 8];
    /// First week that appends PM skill/recovery sessions
    pub const FIRST_DOUBLE_SESSION_WEEK: u32 = 9;
}

/// Subjective score scales
pub mod scales {
    /// Lowest value of every 1-10 score (mood, energy, soreness, RPE, intensity)
    pub const MIN_SCORE: u8 = 1;
    /// Highest value of every 1-10 score
    pub const MAX_SCORE: u8 = 10;
    /// Lowest accepted RPE
    pub const MIN_RPE: f64 = 1.0;
    /// Highest accepted RPE
    pub const MAX_RPE: f64 = 10.0;
    /// Hours in a day, the upper bound for reported sleep
    pub const MAX_SLEEP_HOURS: f64 = 24.0;
}

/// Load-tracking precision
pub mod load {
    /// Decimal places kept on recommended loads
    pub const WEIGHT_DECIMALS: i32 = 2;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Engine service name
    pub const PIERRE_TRAINING_ENGINE: &str = "pierre-training-engine";
}
