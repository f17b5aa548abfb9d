// ABOUTME: Core types and constants for the Pierre adaptive periodization engine
// ABOUTME: Foundation crate with error handling, training models, constants, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Core
//!
//! Foundation crate providing shared types for the periodization and safety
//! engine. Everything here is plain data plus validation; the calculators that
//! operate on these types live in `pierre-periodization`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Program structure and score-scale constants
//! - **models**: Program phases, session templates, wellness check-ins, history records, safety output
//! - **validation**: Range checks applied to every caller-supplied score

/// Unified error handling system with standard error codes
pub mod errors;

/// Program structure constants (week count, score scales, service names)
pub mod constants;

/// Training domain models shared by all calculators
pub mod models;

/// Range validation for caller-supplied scores and loads
pub mod validation;

pub use errors::{AppError, AppResult, ErrorCode};
