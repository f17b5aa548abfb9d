// ABOUTME: History window configuration for snapshot queries against the record store
// ABOUTME: Controls how many days of check-ins, sessions, and set logs feed one evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Rolling history window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindowConfig {
    /// Days of history (ending today, inclusive) fetched per evaluation
    pub lookback_days: u32,
}

impl Default for HistoryWindowConfig {
    fn default() -> Self {
        Self { lookback_days: 14 }
    }
}

impl HistoryWindowConfig {
    pub(crate) const fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days < 7 {
            return Err(ConfigError::ValueOutOfRange(
                "lookback_days must cover at least one week",
            ));
        }
        Ok(())
    }
}
