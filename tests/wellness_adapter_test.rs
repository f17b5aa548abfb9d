// ABOUTME: Integration and property tests for wellness-driven session adjustments
// ABOUTME: Energy/sleep shortening, soreness and mood easing, boundaries, copy-on-adapt, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{good_day, wellness};
use pierre_periodization::config::WellnessConfig;
use pierre_periodization::{ScheduleGenerator, WellnessAdapter, WellnessRule};
use pierre_training_core::errors::ErrorCode;
use pierre_training_core::models::SessionTemplate;
use proptest::prelude::*;

/// Week 3, day 1: 45 minutes at modifier 0.6 with five exercises
fn strength_session() -> SessionTemplate {
    ScheduleGenerator::sessions_for_day(3, 1).unwrap().remove(0)
}

#[test]
fn test_good_day_leaves_session_unchanged() {
    let session = strength_session();
    let adapted = WellnessAdapter::adapt(&session, &good_day(), &WellnessConfig::default()).unwrap();
    assert_eq!(adapted, session);
    assert!(WellnessAdapter::triggered_rules(&good_day(), &WellnessConfig::default()).is_empty());
}

#[test]
fn test_low_energy_or_short_sleep_shortens_session() {
    let config = WellnessConfig::default();
    let session = strength_session();

    let tired = WellnessAdapter::adapt(&session, &wellness(8, 3, 8.0, 2), &config).unwrap();
    assert_eq!(tired.duration_minutes, 36);
    assert!((tired.intensity_modifier - session.intensity_modifier).abs() < 1e-12);

    let short_sleep = WellnessAdapter::adapt(&session, &wellness(8, 8, 5.5, 2), &config).unwrap();
    assert_eq!(short_sleep.duration_minutes, 36);
}

#[test]
fn test_soreness_eases_intensity() {
    let config = WellnessConfig::default();
    let session = strength_session();
    let adapted = WellnessAdapter::adapt(&session, &wellness(8, 8, 8.0, 4), &config).unwrap();
    assert!((adapted.intensity_modifier - 0.6 * 0.7).abs() < 1e-9);
    assert_eq!(adapted.duration_minutes, 45);
}

#[test]
fn test_low_mood_adds_engagement_exercises() {
    let config = WellnessConfig::default();
    let session = strength_session();
    let adapted = WellnessAdapter::adapt(&session, &wellness(2, 8, 8.0, 2), &config).unwrap();

    assert!((adapted.intensity_modifier - 0.6 * 0.8).abs() < 1e-9);
    assert_eq!(adapted.exercises.len(), session.exercises.len() + 2);
    assert_eq!(
        &adapted.exercises[session.exercises.len()..],
        &["fun_movement".to_owned(), "dance_break".to_owned()]
    );
}

#[test]
fn test_all_rules_compose() {
    let config = WellnessConfig::default();
    let snapshot = wellness(1, 2, 4.0, 9);
    assert_eq!(
        WellnessAdapter::triggered_rules(&snapshot, &config),
        vec![
            WellnessRule::ShortenSession,
            WellnessRule::EaseForSoreness,
            WellnessRule::LiftMood
        ]
    );

    let adapted = WellnessAdapter::adapt(&strength_session(), &snapshot, &config).unwrap();
    assert_eq!(adapted.duration_minutes, 36);
    assert!((adapted.intensity_modifier - 0.6 * 0.7 * 0.8).abs() < 1e-9);
}

#[test]
fn test_thresholds_are_strict() {
    let config = WellnessConfig::default();
    // energy 4, sleep 6.0, soreness 3, mood 3 sit exactly on the thresholds
    let snapshot = wellness(3, 4, 6.0, 3);
    assert!(WellnessAdapter::triggered_rules(&snapshot, &config).is_empty());
}

#[test]
fn test_input_template_is_not_mutated() {
    let session = strength_session();
    let before = session.clone();
    let _ = WellnessAdapter::adapt(&session, &wellness(1, 1, 3.0, 10), &WellnessConfig::default())
        .unwrap();
    assert_eq!(session, before);
}

#[test]
fn test_out_of_scale_wellness_is_rejected() {
    let config = WellnessConfig::default();
    let session = strength_session();
    for snapshot in [
        wellness(0, 5, 8.0, 2),
        wellness(11, 5, 8.0, 2),
        wellness(5, 5, 25.0, 2),
        wellness(5, 5, -1.0, 2),
        wellness(5, 5, 8.0, 11),
    ] {
        let error = WellnessAdapter::adapt(&session, &snapshot, &config).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidRange);
    }
}

#[test]
fn test_rule_descriptions() {
    for rule in [
        WellnessRule::ShortenSession,
        WellnessRule::EaseForSoreness,
        WellnessRule::LiftMood,
    ] {
        assert!(!rule.description().is_empty());
    }
}

proptest! {
    #[test]
    fn prop_adapt_never_increases_load(
        week in 1_u32..=11,
        day in 1_u8..=6,
        mood in 1_u8..=10,
        energy in 1_u8..=10,
        sleep in 0.0_f64..=24.0,
        soreness in 1_u8..=10,
    ) {
        let config = WellnessConfig::default();
        let snapshot = wellness(mood, energy, sleep, soreness);
        for session in ScheduleGenerator::sessions_for_day(week, day).unwrap() {
            let adapted = WellnessAdapter::adapt(&session, &snapshot, &config).unwrap();
            prop_assert!(adapted.duration_minutes <= session.duration_minutes);
            prop_assert!(adapted.intensity_modifier <= session.intensity_modifier);
        }
    }
}
