// ABOUTME: Maps a program week onto the fixed 11-week periodization curve
// ABOUTME: Declarative phase-boundary table with intensity, volume, focus, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Phase Calculator
//!
//! | weeks | phase      | intensity | volume |
//! |-------|------------|-----------|--------|
//! | 1-2   | foundation | 4         | 6      |
//! | 3-4   | strength   | 6         | 7      |
//! | 5     | deload     | 3         | 4      |
//! | 6-7   | strength   | 7         | 8      |
//! | 8     | deload     | 3         | 4      |
//! | 9-10  | power      | 8         | 6      |
//! | 11    | peak       | 9         | 5      |

use pierre_training_core::constants::program::TOTAL_WEEKS;
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{PhaseName, ProgramPhase};

/// One contiguous block of weeks sharing a phase
#[derive(Debug, Clone, Copy)]
struct PhaseBoundary {
    first_week: u32,
    last_week: u32,
    phase: PhaseName,
    intensity: u8,
    volume: u8,
    focus: &'static str,
    notes: &'static str,
}

/// Ordered, gap-free phase table covering weeks 1-11
const PHASE_TABLE: [PhaseBoundary; 7] = [
    PhaseBoundary {
        first_week: 1,
        last_week: 2,
        phase: PhaseName::Foundation,
        intensity: 4,
        volume: 6,
        focus: "Movement quality and general work capacity",
        notes: "Own the patterns before adding load; progress conservatively",
    },
    PhaseBoundary {
        first_week: 3,
        last_week: 4,
        phase: PhaseName::Strength,
        intensity: 6,
        volume: 7,
        focus: "Building base strength",
        notes: "Steady load increases while technique stays crisp",
    },
    PhaseBoundary {
        first_week: 5,
        last_week: 5,
        phase: PhaseName::Deload,
        intensity: 3,
        volume: 4,
        focus: "Recovery and consolidation",
        notes: "Loads drop 20%; sessions are shorter to absorb the first block",
    },
    PhaseBoundary {
        first_week: 6,
        last_week: 7,
        phase: PhaseName::Strength,
        intensity: 7,
        volume: 8,
        focus: "Strength accumulation",
        notes: "Highest volume of the program; monitor soreness and sleep",
    },
    PhaseBoundary {
        first_week: 8,
        last_week: 8,
        phase: PhaseName::Deload,
        intensity: 3,
        volume: 4,
        focus: "Recovery before the power block",
        notes: "Loads drop 20%; arrive at week 9 fresh",
    },
    PhaseBoundary {
        first_week: 9,
        last_week: 10,
        phase: PhaseName::Power,
        intensity: 8,
        volume: 6,
        focus: "Explosive power and speed",
        notes: "PM plyometric, speed, and recovery sessions are added",
    },
    PhaseBoundary {
        first_week: 11,
        last_week: 11,
        phase: PhaseName::Peak,
        intensity: 9,
        volume: 5,
        focus: "Peak performance",
        notes: "Highest intensity at reduced volume; quality over quantity",
    },
];

/// Phase lookup over the fixed program table
pub struct PhaseCalculator;

impl PhaseCalculator {
    /// Phase descriptor for a program week
    ///
    /// # Errors
    /// Returns `InvalidWeek` when `week` is outside 1..=11
    pub fn phase_for_week(week: u32) -> AppResult<ProgramPhase> {
        PHASE_TABLE
            .iter()
            .find(|row| (row.first_week..=row.last_week).contains(&week))
            .map(|row| ProgramPhase {
                week,
                phase: row.phase,
                intensity: row.intensity,
                volume: row.volume,
                focus: row.focus.to_owned(),
                notes: row.notes.to_owned(),
            })
            .ok_or_else(|| AppError::invalid_week(week, TOTAL_WEEKS))
    }

    /// Whether `week` is a deload week
    ///
    /// # Errors
    /// Returns `InvalidWeek` when `week` is outside 1..=11
    pub fn is_deload_week(week: u32) -> AppResult<bool> {
        Self::phase_for_week(week).map(|phase| phase.is_deload())
    }

    /// Descriptors for every program week, in order
    #[must_use]
    pub fn all_phases() -> Vec<ProgramPhase> {
        PHASE_TABLE
            .iter()
            .flat_map(|row| {
                (row.first_week..=row.last_week).map(move |week| ProgramPhase {
                    week,
                    phase: row.phase,
                    intensity: row.intensity,
                    volume: row.volume,
                    focus: row.focus.to_owned(),
                    notes: row.notes.to_owned(),
                })
            })
            .collect()
    }
}
