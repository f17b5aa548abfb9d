// ABOUTME: External collaborators of the training engine: history store and coaching copy
// ABOUTME: Async trait interfaces plus an in-memory history implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Collaborator trait definitions
pub mod core;
/// In-memory history store
pub mod memory;

pub use self::core::{CoachingCopyGenerator, CoachingPrompt, HistorySnapshot, TrainingHistoryProvider};
pub use memory::InMemoryHistory;
