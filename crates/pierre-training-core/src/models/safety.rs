// ABOUTME: Safety assessment output models: metrics, risk levels, alerts, forced modifications
// ABOUTME: Recomputed on every evaluation and never persisted by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Injury risk classification, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Train as planned
    Low,
    /// Monitor closely
    Medium,
    /// Rest recommended
    High,
    /// Overtraining composite exceeded; rest required
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        })
    }
}

/// Category of a safety alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Accumulated fatigue
    Fatigue,
    /// Degraded movement quality
    Form,
    /// Load increasing too quickly
    Load,
    /// Composite injury risk
    InjuryRisk,
    /// Overtraining trend
    Overtraining,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational
    Low,
    /// Worth attention
    Medium,
    /// Act before the next session
    High,
    /// Stop and rest
    Critical,
}

impl From<RiskLevel> for AlertSeverity {
    fn from(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Low => Self::Low,
            RiskLevel::Medium => Self::Medium,
            RiskLevel::High => Self::High,
            RiskLevel::Critical => Self::Critical,
        }
    }
}

/// One contributing signal of the overtraining composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertrainingSignal {
    /// More sessions this week than the weekly maximum
    ExcessiveFrequency,
    /// A long run of consecutive high-effort sessions
    ConsecutiveHighEffort,
    /// Energy strictly declining across recent check-ins
    DecliningEnergy,
    /// Soreness never decreasing across recent check-ins
    RisingSoreness,
}

impl OvertrainingSignal {
    /// Contribution to the composite in tenths (0.3, 0.4, 0.2, 0.1)
    #[must_use]
    pub const fn weight_tenths(&self) -> u8 {
        match self {
            Self::ExcessiveFrequency => 3,
            Self::ConsecutiveHighEffort => 4,
            Self::DecliningEnergy => 2,
            Self::RisingSoreness => 1,
        }
    }

    /// Human-readable explanation
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ExcessiveFrequency => "Session count this week exceeds the weekly maximum",
            Self::ConsecutiveHighEffort => "Several consecutive sessions at high effort",
            Self::DecliningEnergy => "Energy declining across recent check-ins",
            Self::RisingSoreness => "Soreness not easing across recent check-ins",
        }
    }
}

/// Safety metrics for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyMetrics {
    /// Fatigue level (1-10, higher is more fatigued)
    pub fatigue_level: u8,
    /// Form quality (1-10, higher is better)
    pub form_quality: u8,
    /// Average load change across exercises, percent of first logged weight
    pub load_progression_pct: f64,
    /// Composite injury risk
    pub injury_risk: RiskLevel,
    /// Overtraining composite (0.0-1.0)
    pub overtraining_score: f64,
    /// Signals that contributed to the overtraining composite
    pub overtraining_signals: Vec<OvertrainingSignal>,
    /// Coaching recommendations
    pub recommendations: Vec<String>,
    /// Sub-scores skipped because the history window was too thin
    pub limitations: Vec<String>,
}

/// Generated safety alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// Alert category
    pub alert_type: AlertType,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Human-readable message
    pub message: String,
    /// Whether the alert has been resolved (always false when generated)
    pub resolved: bool,
}

/// Modifications the safety monitor forces onto today's session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ForcedModifications {
    /// Lower the intensity modifier
    pub reduce_intensity: bool,
    /// Shorten the session and trim exercises
    pub reduce_volume: bool,
    /// Replace the session with active recovery
    pub add_rest: bool,
    /// Prepend technique work
    pub focus_on_form: bool,
}

impl ForcedModifications {
    /// Whether any modification is required
    #[must_use]
    pub const fn any(&self) -> bool {
        self.reduce_intensity || self.reduce_volume || self.add_rest || self.focus_on_form
    }
}
