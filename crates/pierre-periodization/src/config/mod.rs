// ABOUTME: Periodization engine configuration with environment overrides and validation
// ABOUTME: Orchestrates week clock, wellness, safety, and history window settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Periodization Configuration Module
//!
//! Tunable thresholds for the calculators. Structural parts of the method
//! (11 weeks, the phase table, progression multipliers) live in
//! `periodization_constants` instead.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export PERIODIZATION_REST_DAYS=wed,sun
//!    export PERIODIZATION_SAFETY_MAX_WEEKLY_SESSIONS=5
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! # Examples
//!
//! ```rust
//! use pierre_periodization::config::PeriodizationConfig;
//!
//! let config = PeriodizationConfig::default();
//! assert_eq!(config.safety.max_weekly_sessions, 6);
//! assert_eq!(config.week_clock.sessions_per_week, 5);
//! ```

pub mod error;
pub mod history;
pub mod safety;
pub mod week_clock;
pub mod wellness;

pub use error::ConfigError;
pub use history::HistoryWindowConfig;
pub use safety::SafetyConfig;
pub use week_clock::WeekClockConfig;
pub use wellness::WellnessConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PERIODIZATION_CONFIG: OnceLock<PeriodizationConfig> = OnceLock::new();

/// Main periodization configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Rest weekdays and weekly frequency
    pub week_clock: WeekClockConfig,
    /// Wellness adapter thresholds and factors
    pub wellness: WellnessConfig,
    /// Safety monitor thresholds and forced-modification factors
    pub safety: SafetyConfig,
    /// History snapshot window
    pub history: HistoryWindowConfig,
}

impl PeriodizationConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults when the
    /// environment holds invalid values.
    pub fn global() -> &'static Self {
        PERIODIZATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load periodization config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns the first constraint violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.week_clock.validate()?;
        self.wellness.validate()?;
        self.safety.validate()?;
        self.history.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Week clock overrides
        if let Ok(days) = env::var("PERIODIZATION_REST_DAYS") {
            self.week_clock.rest_days = WeekClockConfig::parse_rest_days(&days)?;
        }
        Self::apply_env_var(
            "PERIODIZATION_SESSIONS_PER_WEEK",
            &mut self.week_clock.sessions_per_week,
        )?;

        // Wellness overrides
        Self::apply_env_var(
            "PERIODIZATION_WELLNESS_LOW_ENERGY",
            &mut self.wellness.low_energy_threshold,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_WELLNESS_SHORT_SLEEP_HOURS",
            &mut self.wellness.short_sleep_hours,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_WELLNESS_SORENESS_THRESHOLD",
            &mut self.wellness.soreness_threshold,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_WELLNESS_LOW_MOOD",
            &mut self.wellness.low_mood_threshold,
        )?;

        // Safety overrides
        Self::apply_env_var(
            "PERIODIZATION_SAFETY_MAX_WEEKLY_SESSIONS",
            &mut self.safety.max_weekly_sessions,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_SAFETY_TREND_WINDOW",
            &mut self.safety.trend_window,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_SAFETY_YOUTH_AGE_LIMIT",
            &mut self.safety.youth_age_limit,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_SAFETY_CRITICAL_OVERTRAINING",
            &mut self.safety.critical_overtraining_score,
        )?;

        // History overrides
        Self::apply_env_var(
            "PERIODIZATION_HISTORY_LOOKBACK_DAYS",
            &mut self.history.lookback_days,
        )?;

        Ok(self)
    }
}
