// ABOUTME: Soft session adjustments driven by a daily wellness snapshot
// ABOUTME: Shortens sessions on low energy or short sleep, eases intensity for soreness and low mood
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wellness Adapter
//!
//! Rules fire independently and compose multiplicatively. Every factor is at
//! most 1.0, so an adapted session is never longer or harder than its input.

use crate::config::WellnessConfig;
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{SessionTemplate, WellnessSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wellness rule that adjusted a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessRule {
    /// Low energy or short sleep: shorter session
    ShortenSession,
    /// High soreness: lower intensity
    EaseForSoreness,
    /// Low mood: lower intensity and add engagement exercises
    LiftMood,
}

impl WellnessRule {
    /// Explanation shown alongside the adjusted session
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ShortenSession => "Session shortened for low energy or short sleep",
            Self::EaseForSoreness => "Intensity eased for muscle soreness",
            Self::LiftMood => "Lighter session with fun movement to lift mood",
        }
    }
}

/// Wellness-driven session adapter
pub struct WellnessAdapter;

impl WellnessAdapter {
    /// Rules the snapshot triggers, in application order
    #[must_use]
    pub fn triggered_rules(
        wellness: &WellnessSnapshot,
        config: &WellnessConfig,
    ) -> Vec<WellnessRule> {
        let mut rules = Vec::new();
        if wellness.energy_level < config.low_energy_threshold
            || wellness.sleep_hours < config.short_sleep_hours
        {
            rules.push(WellnessRule::ShortenSession);
        }
        if wellness.muscle_soreness > config.soreness_threshold {
            rules.push(WellnessRule::EaseForSoreness);
        }
        if wellness.mood < config.low_mood_threshold {
            rules.push(WellnessRule::LiftMood);
        }
        rules
    }

    /// Return an adapted copy of `session`
    ///
    /// # Errors
    /// Returns `InvalidRange` when a wellness score is off the 1-10 scale or
    /// sleep hours fall outside 0-24
    pub fn adapt(
        session: &SessionTemplate,
        wellness: &WellnessSnapshot,
        config: &WellnessConfig,
    ) -> AppResult<SessionTemplate> {
        wellness.validate()?;
        let rules = Self::triggered_rules(wellness, config);
        let mut adapted = session.clone();

        for rule in &rules {
            match rule {
                WellnessRule::ShortenSession => {
                    adapted.duration_minutes =
                        scale_minutes(adapted.duration_minutes, config.duration_factor);
                }
                WellnessRule::EaseForSoreness => {
                    adapted.intensity_modifier *= config.soreness_intensity_factor;
                }
                WellnessRule::LiftMood => {
                    adapted.intensity_modifier *= config.mood_intensity_factor;
                    adapted
                        .exercises
                        .extend(config.engagement_exercises.iter().cloned());
                }
            }
        }

        if !rules.is_empty() {
            debug!(
                day = session.day,
                focus = %session.focus,
                ?rules,
                duration_minutes = adapted.duration_minutes,
                intensity_modifier = adapted.intensity_modifier,
                "Adapted session for wellness"
            );
        }
        Ok(adapted)
    }
}

/// Scale a duration by a factor in (0, 1], rounded to the nearest minute
pub(crate) fn scale_minutes(minutes: u32, factor: f64) -> u32 {
    let scaled = (f64::from(minutes) * factor).round();
    // Safe: factor <= 1.0 keeps the result within 0..=minutes
    (scaled as u32).min(minutes)
}
