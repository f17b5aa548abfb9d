// ABOUTME: Session template model produced by the schedule generator
// ABOUTME: Day, AM/PM slot, focus, ordered exercise list, duration, and intensity modifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day slot for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionSlot {
    /// Morning session
    Am,
    /// Afternoon/evening session
    Pm,
}

/// Training focus of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFocus {
    /// Squat/hinge/lunge strength
    LowerBodyStrength,
    /// Push/pull strength
    UpperBodyStrength,
    /// Mixed-modal work capacity
    FullBodyEndurance,
    /// Jumps and lower-body rate of force development
    LowerBodyPower,
    /// Throws and upper-body rate of force development
    UpperBodyPower,
    /// Agility, coordination, and conditioning
    SkillsConditioning,
    /// PM plyometric add-on
    Plyometric,
    /// PM speed and agility add-on
    SpeedAgility,
    /// PM recovery and mobility add-on
    RecoveryMobility,
    /// Forced rest replacement for a planned session
    ActiveRecovery,
}

impl SessionFocus {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LowerBodyStrength => "Lower-body strength",
            Self::UpperBodyStrength => "Upper-body strength",
            Self::FullBodyEndurance => "Full-body endurance",
            Self::LowerBodyPower => "Lower-body power",
            Self::UpperBodyPower => "Upper-body power",
            Self::SkillsConditioning => "Skills & conditioning",
            Self::Plyometric => "Plyometrics",
            Self::SpeedAgility => "Speed & agility",
            Self::RecoveryMobility => "Recovery & mobility",
            Self::ActiveRecovery => "Active recovery",
        }
    }
}

impl fmt::Display for SessionFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned training session
///
/// Templates are values: adapters return modified copies and never touch the
/// template they were given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Program week (1-based)
    pub week: u32,
    /// Program day within the week (1-7)
    pub day: u8,
    /// AM or PM
    pub slot: SessionSlot,
    /// Training focus
    pub focus: SessionFocus,
    /// Ordered exercise identifiers
    pub exercises: Vec<String>,
    /// Planned duration in minutes
    pub duration_minutes: u32,
    /// Multiplier applied to prescribed intensity (0.0-1.0)
    pub intensity_modifier: f64,
}
