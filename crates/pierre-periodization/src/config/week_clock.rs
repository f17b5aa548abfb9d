// ABOUTME: Week clock configuration: rest weekdays and planned weekly session frequency
// ABOUTME: Drives rest-day flags, next-session scanning, and missed-session counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Calendar configuration for the week clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekClockConfig {
    /// Weekdays on which no session is planned
    pub rest_days: Vec<Weekday>,
    /// Planned sessions per week
    pub sessions_per_week: u32,
}

impl Default for WeekClockConfig {
    fn default() -> Self {
        Self {
            rest_days: vec![Weekday::Wed, Weekday::Sun],
            sessions_per_week: 5,
        }
    }
}

impl WeekClockConfig {
    /// Whether the weekday is a configured rest day
    #[must_use]
    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        self.rest_days.contains(&weekday)
    }

    /// Parse a comma-separated weekday list such as `"wed,sun"`
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` naming the first unrecognised weekday
    pub fn parse_rest_days(value: &str) -> Result<Vec<Weekday>, ConfigError> {
        let mut days = Vec::new();
        for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let day: Weekday = token
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid weekday '{token}'")))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(days)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.sessions_per_week == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "sessions_per_week must be at least 1",
            ));
        }
        let mut distinct = self.rest_days.clone();
        distinct.sort_by_key(Weekday::num_days_from_monday);
        distinct.dedup();
        let training_days = 7_u32.saturating_sub(u32::try_from(distinct.len()).unwrap_or(7));
        if self.sessions_per_week > training_days {
            return Err(ConfigError::InvalidRange(
                "sessions_per_week exceeds the number of non-rest weekdays",
            ));
        }
        Ok(())
    }
}
