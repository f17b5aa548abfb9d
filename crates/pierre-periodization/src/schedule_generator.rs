// ABOUTME: Weekly session template generation from the phase table and a fixed blueprint
// ABOUTME: Six AM focus rotations per week plus PM add-ons from the power block onward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Schedule Generator
//!
//! AM sessions (days 1-6) rotate through a fixed focus order and scale their
//! intensity modifier with the phase. From week 9, three PM sessions with fixed
//! durations and modifiers are appended on days 1, 3, and 5. Day 7 carries no
//! template.

use crate::periodization_constants::schedule::{
    DELOAD_CONDITIONING_DURATION_MINUTES, DELOAD_STRENGTH_DURATION_MINUTES,
    NOMINAL_DURATION_MINUTES,
};
use crate::phase_calculator::PhaseCalculator;
use pierre_training_core::constants::program::{DAYS_PER_WEEK, FIRST_DOUBLE_SESSION_WEEK};
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{SessionFocus, SessionSlot, SessionTemplate};

/// How a session's length behaves in a deload week
#[derive(Debug, Clone, Copy)]
enum DeloadLength {
    /// Strength and power days shorten to 30 minutes
    Strength,
    /// Endurance and skills days shorten to 25 minutes
    Conditioning,
}

impl DeloadLength {
    const fn minutes(self) -> u32 {
        match self {
            Self::Strength => DELOAD_STRENGTH_DURATION_MINUTES,
            Self::Conditioning => DELOAD_CONDITIONING_DURATION_MINUTES,
        }
    }
}

/// Morning session rotation entry
#[derive(Debug, Clone, Copy)]
struct AmBlueprint {
    day: u8,
    focus: SessionFocus,
    deload_length: DeloadLength,
    exercises: &'static [&'static str],
}

/// Afternoon add-on entry; duration and modifier do not follow the phase
#[derive(Debug, Clone, Copy)]
struct PmBlueprint {
    day: u8,
    focus: SessionFocus,
    duration_minutes: u32,
    intensity_modifier: f64,
    exercises: &'static [&'static str],
}

const AM_ROTATION: [AmBlueprint; 6] = [
    AmBlueprint {
        day: 1,
        focus: SessionFocus::LowerBodyStrength,
        deload_length: DeloadLength::Strength,
        exercises: &[
            "goblet_squat",
            "romanian_deadlift",
            "walking_lunge",
            "glute_bridge",
            "calf_raise",
        ],
    },
    AmBlueprint {
        day: 2,
        focus: SessionFocus::UpperBodyStrength,
        deload_length: DeloadLength::Strength,
        exercises: &[
            "push_up",
            "dumbbell_row",
            "overhead_press",
            "inverted_row",
            "plank",
        ],
    },
    AmBlueprint {
        day: 3,
        focus: SessionFocus::FullBodyEndurance,
        deload_length: DeloadLength::Conditioning,
        exercises: &[
            "burpee",
            "kettlebell_swing",
            "mountain_climber",
            "jump_rope",
            "bear_crawl",
        ],
    },
    AmBlueprint {
        day: 4,
        focus: SessionFocus::LowerBodyPower,
        deload_length: DeloadLength::Strength,
        exercises: &[
            "box_jump",
            "broad_jump",
            "jump_squat",
            "single_leg_hop",
            "sled_push",
        ],
    },
    AmBlueprint {
        day: 5,
        focus: SessionFocus::UpperBodyPower,
        deload_length: DeloadLength::Strength,
        exercises: &[
            "medicine_ball_chest_pass",
            "plyo_push_up",
            "medicine_ball_slam",
            "band_pull_apart",
            "battle_rope",
        ],
    },
    AmBlueprint {
        day: 6,
        focus: SessionFocus::SkillsConditioning,
        deload_length: DeloadLength::Conditioning,
        exercises: &[
            "agility_ladder",
            "cone_drill",
            "shuttle_run",
            "balance_drill",
            "sprint_interval",
        ],
    },
];

const PM_ADD_ONS: [PmBlueprint; 3] = [
    PmBlueprint {
        day: 1,
        focus: SessionFocus::Plyometric,
        duration_minutes: 30,
        intensity_modifier: 0.8,
        exercises: &["depth_jump", "lateral_bound", "tuck_jump"],
    },
    PmBlueprint {
        day: 3,
        focus: SessionFocus::SpeedAgility,
        duration_minutes: 30,
        intensity_modifier: 0.8,
        exercises: &["flying_sprint", "t_drill", "reaction_ball"],
    },
    PmBlueprint {
        day: 5,
        focus: SessionFocus::RecoveryMobility,
        duration_minutes: 25,
        intensity_modifier: 0.3,
        exercises: &[
            "foam_roll",
            "hip_mobility_flow",
            "thoracic_rotation",
            "breathing_drill",
        ],
    },
];

fn owned_exercises(exercises: &[&str]) -> Vec<String> {
    exercises.iter().map(|&id| id.to_owned()).collect()
}

/// Session template generator
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// All session templates for a program week, AM sessions first (days 1-6),
    /// then PM add-ons when the week has them
    ///
    /// # Errors
    /// Returns `InvalidWeek` when `week` is outside 1..=11
    pub fn generate_week(week: u32) -> AppResult<Vec<SessionTemplate>> {
        let phase = PhaseCalculator::phase_for_week(week)?;
        let intensity_modifier = phase.intensity_fraction();
        let deload = phase.is_deload();

        let mut sessions: Vec<SessionTemplate> = AM_ROTATION
            .iter()
            .map(|blueprint| SessionTemplate {
                week,
                day: blueprint.day,
                slot: SessionSlot::Am,
                focus: blueprint.focus,
                exercises: owned_exercises(blueprint.exercises),
                duration_minutes: if deload {
                    blueprint.deload_length.minutes()
                } else {
                    NOMINAL_DURATION_MINUTES
                },
                intensity_modifier,
            })
            .collect();

        if week >= FIRST_DOUBLE_SESSION_WEEK {
            sessions.extend(PM_ADD_ONS.iter().map(|blueprint| SessionTemplate {
                week,
                day: blueprint.day,
                slot: SessionSlot::Pm,
                focus: blueprint.focus,
                exercises: owned_exercises(blueprint.exercises),
                duration_minutes: blueprint.duration_minutes,
                intensity_modifier: blueprint.intensity_modifier,
            }));
        }

        Ok(sessions)
    }

    /// Templates for one program day, AM before PM; empty on day 7
    ///
    /// # Errors
    /// Returns `InvalidWeek` for a week outside 1..=11, `InvalidRange` for a day outside 1..=7
    pub fn sessions_for_day(week: u32, day: u8) -> AppResult<Vec<SessionTemplate>> {
        if !(1..=DAYS_PER_WEEK).contains(&u32::from(day)) {
            return Err(AppError::invalid_range("day", day, "1..=7"));
        }
        let mut sessions: Vec<SessionTemplate> = Self::generate_week(week)?
            .into_iter()
            .filter(|session| session.day == day)
            .collect();
        sessions.sort_by_key(|session| session.slot == SessionSlot::Pm);
        Ok(sessions)
    }
}
