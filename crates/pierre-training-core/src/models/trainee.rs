// ABOUTME: Trainee profile carrying identity, age, and program start date
// ABOUTME: Supplied by the caller; the engine never stores it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trainee following a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraineeProfile {
    /// Trainee identifier in the caller's record store
    pub id: Uuid,
    /// Display name used in coaching copy
    pub display_name: Option<String>,
    /// Age in years
    pub age: u32,
    /// Day the program started (week 1, day 1)
    pub program_start: NaiveDate,
}
