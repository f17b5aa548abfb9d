// ABOUTME: Training domain models shared across the periodization engine crates
// ABOUTME: Re-exports program, session, wellness, history, safety, week, and trainee types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training domain models
//!
//! All models are plain serializable data. Nothing here is persisted by the
//! engine; storage is the caller's concern.

/// Training history records (check-ins, sessions, set logs)
pub mod history;
/// Program phases and exercise progression rules
pub mod program;
/// Safety metrics, alerts, and forced modifications
pub mod safety;
/// Session templates and their slots/focus
pub mod session;
/// Trainee profile
pub mod trainee;
/// Week clock output
pub mod week;
/// Wellness self-reports
pub mod wellness;

pub use history::{CheckIn, DateRange, SessionRecord, SetLog};
pub use program::{ExerciseProgressionRule, LastPerformance, PhaseName, ProgramPhase};
pub use safety::{
    AlertSeverity, AlertType, ForcedModifications, OvertrainingSignal, RiskLevel, SafetyAlert,
    SafetyMetrics,
};
pub use session::{SessionFocus, SessionSlot, SessionTemplate};
pub use trainee::TraineeProfile;
pub use week::{SessionCounts, WeekStatus, WeekWindow};
pub use wellness::WellnessSnapshot;
