// ABOUTME: Collaborator traits the engine consumes: training history queries and coaching copy
// ABOUTME: Read-only history snapshot by trainee and date range, optional text generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Collaborator Interfaces
//!
//! The engine never owns storage or text generation. It consumes two
//! capabilities through these traits:
//!
//! - [`TrainingHistoryProvider`]: ordered check-ins, sessions, and set logs for
//!   a trainee within a date range (read-only)
//! - [`CoachingCopyGenerator`]: optional human-readable coaching copy; the
//!   numeric recommendation stays valid when it fails
//!
//! ## Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use pierre_training_engine::providers::{CoachingCopyGenerator, CoachingPrompt};
//! use pierre_training_core::errors::AppResult;
//!
//! struct Cheerful;
//!
//! #[async_trait]
//! impl CoachingCopyGenerator for Cheerful {
//!     async fn generate(&self, prompt: &CoachingPrompt) -> AppResult<String> {
//!         Ok(format!("Week {} - let's go!", prompt.week))
//!     }
//! }
//! ```

use async_trait::async_trait;
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{
    CheckIn, DateRange, PhaseName, RiskLevel, SessionFocus, SessionRecord, SetLog,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Consistent history read for one evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Check-ins ordered by date
    pub checkins: Vec<CheckIn>,
    /// Completed sessions ordered by date
    pub sessions: Vec<SessionRecord>,
    /// Logged sets ordered by date
    pub set_logs: Vec<SetLog>,
}

/// Read-only access to a trainee's recorded history
#[async_trait]
pub trait TrainingHistoryProvider: Send + Sync {
    /// Check-ins recorded within `range`, oldest first
    async fn checkins(&self, trainee_id: Uuid, range: DateRange) -> AppResult<Vec<CheckIn>>;

    /// Sessions completed within `range`, oldest first
    async fn sessions(&self, trainee_id: Uuid, range: DateRange)
        -> AppResult<Vec<SessionRecord>>;

    /// Sets logged within `range`, oldest first
    async fn set_logs(&self, trainee_id: Uuid, range: DateRange) -> AppResult<Vec<SetLog>>;

    /// All three windows in one read
    ///
    /// # Errors
    /// Returns the first error any of the three queries produced
    async fn snapshot(&self, trainee_id: Uuid, range: DateRange) -> AppResult<HistorySnapshot> {
        let (checkins, sessions, set_logs) = tokio::try_join!(
            self.checkins(trainee_id, range),
            self.sessions(trainee_id, range),
            self.set_logs(trainee_id, range),
        )?;
        Ok(HistorySnapshot {
            checkins,
            sessions,
            set_logs,
        })
    }
}

/// Inputs handed to the coaching copy generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingPrompt {
    /// Trainee display name, when known
    pub trainee_name: Option<String>,
    /// Program week
    pub week: u32,
    /// Phase of the week
    pub phase: PhaseName,
    /// Focus of today's first session, `None` on a rest day
    pub focus: Option<SessionFocus>,
    /// Current injury risk
    pub injury_risk: RiskLevel,
    /// Explanations of adjustments made today
    pub adjustments: Vec<String>,
}

/// Generator of motivational or coaching text
#[async_trait]
pub trait CoachingCopyGenerator: Send + Sync {
    /// Produce copy for the prompt
    async fn generate(&self, prompt: &CoachingPrompt) -> AppResult<String>;
}
