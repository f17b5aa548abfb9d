// ABOUTME: Main library entry point for the Pierre training engine
// ABOUTME: Exposes engine entry points, collaborator traits, the advisor service, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Engine
//!
//! Adaptive periodization and safety for an 11-week training program.
//!
//! ## Architecture
//!
//! - **`pierre-training-core`**: errors, domain models, constants, validation
//! - **`pierre-periodization`**: the pure calculators and their configuration
//! - **engine**: the four entry points plus parallel batch safety evaluation
//! - **providers**: history and coaching-copy collaborator traits
//! - **advisor**: daily plan service reading one history snapshot per call
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use pierre_training_core::models::TraineeProfile;
//! use pierre_training_engine::advisor::TrainingAdvisor;
//! use pierre_training_engine::providers::InMemoryHistory;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     pierre_training_engine::logging::init_from_env()?;
//!
//!     let history = Arc::new(InMemoryHistory::new());
//!     let advisor = TrainingAdvisor::with_global_config(history);
//!     let profile = TraineeProfile {
//!         id: Uuid::new_v4(),
//!         display_name: Some("Sam".into()),
//!         age: 17,
//!         program_start: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
//!     };
//!     let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
//!     let plan = advisor.daily_plan(&profile, today, None).await?;
//!     println!("{} session(s) today", plan.recommendation.sessions.len());
//!     Ok(())
//! }
//! ```

/// Daily plan service over a history provider
pub mod advisor;
/// Engine entry points
pub mod engine;
/// Structured logging configuration and event helpers
pub mod logging;
/// Collaborator traits and the in-memory history store
pub mod providers;

pub use advisor::{DailyPlan, TrainingAdvisor};
pub use engine::{
    evaluate_safety, evaluate_safety_batch, generate_session_recommendation,
    next_exercise_weight, resolve_week, RestReason, SessionRecommendation, SessionRequest,
};
pub use pierre_periodization::config::PeriodizationConfig;
pub use pierre_training_core::errors::{AppError, AppResult, ErrorCode};
