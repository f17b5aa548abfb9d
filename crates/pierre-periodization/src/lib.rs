// ABOUTME: Adaptive periodization and safety engine for individual training programs
// ABOUTME: Pure calculators mapping program time to phases, sessions, loads, and risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Periodization
//!
//! Quantitative decision logic for an 11-week training program:
//!
//! - [`PhaseCalculator`] maps a program week to its phase descriptor
//! - [`WeekClock`] converts a start date and "today" into week/day and adherence
//! - [`ScheduleGenerator`] builds the week's session templates
//! - [`ProgressionCalculator`] recommends the next working load for an exercise
//! - [`WellnessAdapter`] softens a session from a wellness snapshot
//! - [`SafetyMonitor`] scores fatigue, form, load, and overtraining risk
//!
//! Every calculator is a pure function over caller-supplied data: no I/O, no
//! clock reads, no shared mutable state. Independent evaluations can run in
//! parallel without coordination.

/// Engine configuration (thresholds, factors, rest days)
pub mod config;
/// Fixed constants of the training method
pub mod periodization_constants;
/// Phase lookup table
pub mod phase_calculator;
/// Load progression recommendations
pub mod progression_calculator;
/// Fatigue, form, load, and overtraining scoring
pub mod safety_monitor;
/// Weekly session template generation
pub mod schedule_generator;
/// Rolling-window statistics shared by the safety monitor
pub mod statistics;
/// Program calendar arithmetic
pub mod week_clock;
/// Wellness-driven session adjustments
pub mod wellness_adapter;

pub use config::PeriodizationConfig;
pub use phase_calculator::PhaseCalculator;
pub use progression_calculator::ProgressionCalculator;
pub use safety_monitor::{SafetyAssessment, SafetyInput, SafetyMonitor};
pub use schedule_generator::ScheduleGenerator;
pub use week_clock::WeekClock;
pub use wellness_adapter::{WellnessAdapter, WellnessRule};
