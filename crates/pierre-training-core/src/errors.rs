// ABOUTME: Unified error types for the periodization engine with stable error codes
// ABOUTME: Maps invalid weeks, out-of-range scores, and collaborator failures onto AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the engine returns [`AppResult`]. Calculators fail
//! fast on caller bugs (an invalid week, a score outside its scale); nothing is
//! silently clamped into range.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Program week outside the supported range
    #[serde(rename = "INVALID_WEEK")]
    InvalidWeek = 3000,
    /// Score, percentage, load, or date outside its defined domain
    #[serde(rename = "INVALID_RANGE")]
    InvalidRange = 3001,
    /// A computation needing at least two data points received fewer
    #[serde(rename = "INSUFFICIENT_HISTORY")]
    InsufficientHistory = 3002,

    // External collaborators (5000-5999)
    /// History store or text generator failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Engine configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidWeek => "The program week is outside the supported range",
            Self::InvalidRange => "The provided value is outside its acceptable range",
            Self::InsufficientHistory => "Not enough history to perform this calculation",
            Self::ExternalServiceError => "An external collaborator encountered an error",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Trainee the failing evaluation belonged to, if known
    pub trainee_id: Option<Uuid>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            trainee_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the trainee this error relates to
    #[must_use]
    pub fn with_trainee_id(mut self, trainee_id: Uuid) -> Self {
        self.context.trainee_id = Some(trainee_id);
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Week outside the program
    #[must_use]
    pub fn invalid_week(week: u32, total_weeks: u32) -> Self {
        Self::new(
            ErrorCode::InvalidWeek,
            format!("week {week} is outside the program range 1..={total_weeks}"),
        )
        .with_details(json!({ "week": week, "total_weeks": total_weeks }))
    }

    /// Value outside its defined domain
    pub fn invalid_range(field: &str, value: impl fmt::Display, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("{field} = {value} is outside the expected range {expected}"),
        )
        .with_details(json!({ "field": field, "expected": expected }))
    }

    /// Fewer data points than a strict calculation requires
    #[must_use]
    pub fn insufficient_history(what: &str, required: usize, available: usize) -> Self {
        Self::new(
            ErrorCode::InsufficientHistory,
            format!("{what} needs at least {required} data points, got {available}"),
        )
        .with_details(json!({ "required": required, "available": available }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External collaborator error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_week_carries_details() {
        let error = AppError::invalid_week(12, 11);
        assert_eq!(error.code, ErrorCode::InvalidWeek);
        assert_eq!(error.context.details["week"], 12);
        assert!(error.to_string().contains("week 12"));
    }

    #[test]
    fn test_error_context_builders() {
        let trainee = Uuid::new_v4();
        let error = AppError::invalid_range("mood", 11, "1..=10").with_trainee_id(trainee);
        assert_eq!(error.code, ErrorCode::InvalidRange);
        assert_eq!(error.context.trainee_id, Some(trainee));
        assert_eq!(error.context.details["field"], "mood");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InsufficientHistory).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_HISTORY\"");
    }

    #[test]
    fn test_source_chaining() {
        let inner = AppError::internal("store offline");
        let outer = AppError::external_service("history", "query failed").with_source(inner);
        let source = StdError::source(&outer).unwrap();
        assert!(source.to_string().contains("store offline"));
    }

    #[test]
    fn test_no_source_by_default() {
        let error = AppError::insufficient_history("check-ins", 2, 1);
        assert!(StdError::source(&error).is_none());
    }
}
