// ABOUTME: Integration tests for safety scoring, alerts, and forced session modifications
// ABOUTME: Fatigue, form, per-exercise load progression, overtraining composite, youth rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{
    checkin, high_effort_sessions, init_test_logging, overtraining_checkins, session, set_log,
    start_plus, wellness,
};
use pierre_periodization::config::SafetyConfig;
use pierre_periodization::{SafetyInput, SafetyMonitor, ScheduleGenerator, WeekClock};
use pierre_training_core::errors::ErrorCode;
use pierre_training_core::models::{
    AlertSeverity, AlertType, CheckIn, ForcedModifications, OvertrainingSignal, RiskLevel,
    SafetyAlert, SessionFocus, SessionTemplate,
};

fn input() -> SafetyInput {
    SafetyInput {
        trainee_age: 30,
        ..SafetyInput::default()
    }
}

fn has_alert(alerts: &[SafetyAlert], kind: AlertType, severity: AlertSeverity) -> bool {
    alerts
        .iter()
        .any(|a| a.alert_type == kind && a.severity == severity)
}

#[test]
fn test_declining_wellness_and_high_effort_is_critical() {
    init_test_logging();
    let config = SafetyConfig::default();
    let week = WeekClock::week_window(common::program_start(), 2).unwrap();
    let safety_input = SafetyInput {
        checkins: overtraining_checkins(week.start),
        sessions: high_effort_sessions(week.start),
        current_week: Some(week),
        ..input()
    };

    let assessment = SafetyMonitor::assess(&safety_input, &config).unwrap();
    let metrics = &assessment.metrics;

    assert!((metrics.overtraining_score - 0.7).abs() < 1e-12);
    assert_eq!(
        metrics.overtraining_signals,
        vec![
            OvertrainingSignal::ConsecutiveHighEffort,
            OvertrainingSignal::DecliningEnergy,
            OvertrainingSignal::RisingSoreness,
        ]
    );
    assert_eq!(metrics.injury_risk, RiskLevel::Critical);
    assert!(has_alert(&assessment.alerts, AlertType::Overtraining, AlertSeverity::Critical));
    assert!(has_alert(&assessment.alerts, AlertType::InjuryRisk, AlertSeverity::Critical));
    assert!(assessment.modifications.add_rest);
    assert!(assessment.alerts.iter().all(|a| !a.resolved));
}

#[test]
fn test_empty_history_degrades_to_neutral_scores() {
    let assessment = SafetyMonitor::assess(&input(), &SafetyConfig::default()).unwrap();
    let metrics = &assessment.metrics;

    assert_eq!(metrics.fatigue_level, 1);
    assert_eq!(metrics.form_quality, 10);
    assert!(metrics.load_progression_pct.abs() < f64::EPSILON);
    assert_eq!(metrics.injury_risk, RiskLevel::Low);
    assert!(metrics.overtraining_score.abs() < f64::EPSILON);
    assert_eq!(metrics.limitations.len(), 4);
    assert!(assessment.alerts.is_empty());
    assert!(!assessment.modifications.any());
}

#[test]
fn test_high_fatigue_forces_reduction_and_rest() {
    let first = start_plus(7);
    let checkins: Vec<CheckIn> = (0..3)
        .map(|offset| CheckIn {
            date: first + Duration::days(offset),
            wellness: wellness(5, 1, 2.0, 10),
        })
        .collect();
    let safety_input = SafetyInput {
        checkins,
        ..input()
    };

    let assessment = SafetyMonitor::assess(&safety_input, &SafetyConfig::default()).unwrap();
    // 9*0.4 + 10*0.3 + 6*0.3 = 8.4
    assert_eq!(assessment.metrics.fatigue_level, 8);
    assert_eq!(assessment.metrics.injury_risk, RiskLevel::High);
    assert!(has_alert(&assessment.alerts, AlertType::Fatigue, AlertSeverity::High));
    assert!(has_alert(&assessment.alerts, AlertType::InjuryRisk, AlertSeverity::High));
    assert_eq!(
        assessment.modifications,
        ForcedModifications {
            reduce_intensity: true,
            reduce_volume: true,
            add_rest: true,
            focus_on_form: false,
        }
    );
}

#[test]
fn test_form_quality_from_set_effort() {
    let config = SafetyConfig::default();
    let day = start_plus(3);

    let grinding = SafetyInput {
        set_logs: vec![
            set_log(day, "goblet_squat", 40.0, 9.5),
            set_log(day, "goblet_squat", 40.0, 9.5),
        ],
        ..input()
    };
    let assessment = SafetyMonitor::assess(&grinding, &config).unwrap();
    assert_eq!(assessment.metrics.form_quality, 1);
    assert!(has_alert(&assessment.alerts, AlertType::Form, AlertSeverity::High));
    assert!(assessment.modifications.focus_on_form);

    // avg 7.5, no set above 8: 10 - 2.5*2 = 5
    let slipping = SafetyInput {
        set_logs: vec![
            set_log(day, "push_up", 0.0, 7.0),
            set_log(day, "push_up", 0.0, 8.0),
        ],
        ..input()
    };
    let assessment = SafetyMonitor::assess(&slipping, &config).unwrap();
    assert_eq!(assessment.metrics.form_quality, 5);
    assert_eq!(assessment.metrics.injury_risk, RiskLevel::Medium);
    assert!(has_alert(&assessment.alerts, AlertType::Form, AlertSeverity::Medium));
    assert!(!assessment.modifications.focus_on_form);
}

#[test]
fn test_load_progression_is_grouped_per_exercise() {
    let day = start_plus(1);
    let later = start_plus(8);
    let safety_input = SafetyInput {
        set_logs: vec![
            set_log(day, "goblet_squat", 100.0, 6.0),
            set_log(day, "overhead_press", 50.0, 6.0),
            set_log(day, "push_up", 0.0, 6.0),
            set_log(day, "plank", 20.0, 6.0),
            set_log(later, "goblet_squat", 118.0, 6.0),
            set_log(later, "overhead_press", 55.0, 6.0),
            set_log(later, "push_up", 10.0, 6.0),
        ],
        ..input()
    };

    let assessment = SafetyMonitor::assess(&safety_input, &SafetyConfig::default()).unwrap();
    // (18% + 10%) / 2; bodyweight baseline and single-log exercises are left out
    assert!((assessment.metrics.load_progression_pct - 14.0).abs() < 1e-9);
    assert!(has_alert(&assessment.alerts, AlertType::Load, AlertSeverity::Medium));
}

#[test]
fn test_strict_progression_requires_two_loads() {
    let error = SafetyMonitor::load_progression_strict(&[]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InsufficientHistory);

    let day = start_plus(1);
    let logs = vec![
        set_log(day, "goblet_squat", 100.0, 6.0),
        set_log(day + Duration::days(2), "goblet_squat", 110.0, 6.0),
    ];
    let pct = SafetyMonitor::load_progression_strict(&logs).unwrap();
    assert!((pct - 10.0).abs() < 1e-9);
}

#[test]
fn test_youth_rules_add_recommendations_only() {
    let day = start_plus(1);
    let logs = vec![
        set_log(day, "goblet_squat", 20.0, 6.0),
        set_log(day + Duration::days(3), "goblet_squat", 21.5, 6.0),
    ];
    let adult = SafetyInput {
        set_logs: logs.clone(),
        ..input()
    };
    let youth = SafetyInput {
        set_logs: logs,
        trainee_age: 14,
        ..input()
    };
    let config = SafetyConfig::default();

    let adult_metrics = SafetyMonitor::evaluate(&adult, &config).unwrap();
    let youth_metrics = SafetyMonitor::evaluate(&youth, &config).unwrap();

    assert_eq!(adult_metrics.injury_risk, youth_metrics.injury_risk);
    assert_eq!(
        youth_metrics.recommendations.len(),
        adult_metrics.recommendations.len() + 2
    );
    assert!(youth_metrics
        .recommendations
        .iter()
        .any(|r| r.contains("technique")));
}

#[test]
fn test_frequency_counts_current_week_only() {
    let config = SafetyConfig::default();
    let week = WeekClock::week_window(common::program_start(), 2).unwrap();
    let mut sessions: Vec<_> = (0..7)
        .map(|offset| session(week.start + Duration::days(offset), 5.0))
        .collect();
    sessions.push(session(week.start - Duration::days(1), 5.0));

    let this_week = SafetyInput {
        sessions: sessions.clone(),
        current_week: Some(week),
        ..input()
    };
    let metrics = SafetyMonitor::evaluate(&this_week, &config).unwrap();
    assert_eq!(
        metrics.overtraining_signals,
        vec![OvertrainingSignal::ExcessiveFrequency]
    );
    assert!((metrics.overtraining_score - 0.3).abs() < 1e-12);

    let six_this_week = SafetyInput {
        sessions: sessions[1..].to_vec(),
        current_week: Some(week),
        ..input()
    };
    let metrics = SafetyMonitor::evaluate(&six_this_week, &config).unwrap();
    assert!(metrics.overtraining_signals.is_empty());
}

#[test]
fn test_medium_overtraining_alert() {
    let safety_input = SafetyInput {
        sessions: high_effort_sessions(start_plus(7)),
        ..input()
    };
    let assessment = SafetyMonitor::assess(&safety_input, &SafetyConfig::default()).unwrap();
    assert!((assessment.metrics.overtraining_score - 0.4).abs() < 1e-12);
    assert_eq!(assessment.metrics.injury_risk, RiskLevel::Low);
    assert!(has_alert(&assessment.alerts, AlertType::Overtraining, AlertSeverity::Medium));
    assert!(!assessment.modifications.add_rest);
}

#[test]
fn test_three_high_effort_sessions_do_not_fire() {
    let mut sessions = high_effort_sessions(start_plus(7));
    sessions.truncate(3);
    let safety_input = SafetyInput {
        sessions,
        ..input()
    };
    let metrics = SafetyMonitor::evaluate(&safety_input, &SafetyConfig::default()).unwrap();
    assert!(metrics.overtraining_signals.is_empty());
}

#[test]
fn test_unordered_history_is_sorted() {
    let config = SafetyConfig::default();
    let week = WeekClock::week_window(common::program_start(), 2).unwrap();
    let mut checkins = overtraining_checkins(week.start);
    checkins.reverse();
    let mut sessions = high_effort_sessions(week.start);
    sessions.reverse();

    let shuffled = SafetyInput {
        checkins,
        sessions,
        current_week: Some(week),
        ..input()
    };
    let metrics = SafetyMonitor::evaluate(&shuffled, &config).unwrap();
    assert_eq!(metrics.injury_risk, RiskLevel::Critical);
}

#[test]
fn test_trend_uses_newest_checkins() {
    let first = start_plus(7);
    let mut checkins = vec![checkin(first - Duration::days(1), 2, 9)];
    checkins.extend(overtraining_checkins(first));
    checkins.push(checkin(first + Duration::days(3), 9, 1));

    let safety_input = SafetyInput {
        checkins,
        ..input()
    };
    let metrics = SafetyMonitor::evaluate(&safety_input, &SafetyConfig::default()).unwrap();
    // newest three: energy 6, 3, 9 and soreness 3, 4, 1
    assert!(metrics.overtraining_signals.is_empty());
}

#[test]
fn test_out_of_scale_history_is_rejected() {
    let config = SafetyConfig::default();
    let day = start_plus(1);

    let bad_checkin = SafetyInput {
        checkins: vec![CheckIn {
            date: day,
            wellness: wellness(0, 5, 8.0, 2),
        }],
        ..input()
    };
    assert_eq!(
        SafetyMonitor::evaluate(&bad_checkin, &config).unwrap_err().code,
        ErrorCode::InvalidRange
    );

    let bad_set = SafetyInput {
        set_logs: vec![set_log(day, "goblet_squat", 40.0, 11.0)],
        ..input()
    };
    assert_eq!(
        SafetyMonitor::evaluate(&bad_set, &config).unwrap_err().code,
        ErrorCode::InvalidRange
    );

    let bad_session = SafetyInput {
        sessions: vec![session(day, 0.0)],
        ..input()
    };
    assert!(SafetyMonitor::evaluate(&bad_session, &config).is_err());
}

fn strength_session() -> SessionTemplate {
    ScheduleGenerator::sessions_for_day(3, 1).unwrap().remove(0)
}

#[test]
fn test_reduce_intensity_and_volume() {
    let config = SafetyConfig::default();
    let session = strength_session();
    let modified = SafetyMonitor::apply_modifications(
        &session,
        ForcedModifications {
            reduce_intensity: true,
            reduce_volume: true,
            ..ForcedModifications::default()
        },
        &config,
    );

    assert!((modified.intensity_modifier - 0.6 * 0.7).abs() < 1e-9);
    assert_eq!(modified.duration_minutes, 34);
    assert_eq!(modified.exercises.len(), session.exercises.len() - 1);
    assert_eq!(modified.exercises[..], session.exercises[..session.exercises.len() - 1]);
}

#[test]
fn test_volume_trim_keeps_minimum_exercises() {
    let config = SafetyConfig::default();
    let mut session = strength_session();
    session.exercises.truncate(3);
    let modified = SafetyMonitor::apply_modifications(
        &session,
        ForcedModifications {
            reduce_volume: true,
            ..ForcedModifications::default()
        },
        &config,
    );
    assert_eq!(modified.exercises.len(), 3);
}

#[test]
fn test_focus_on_form_prepends_technique() {
    let config = SafetyConfig::default();
    let modified = SafetyMonitor::apply_modifications(
        &strength_session(),
        ForcedModifications {
            focus_on_form: true,
            ..ForcedModifications::default()
        },
        &config,
    );
    assert_eq!(modified.exercises[0], "technique_drill");
}

#[test]
fn test_add_rest_converts_to_active_recovery() {
    let config = SafetyConfig::default();
    let rest = ForcedModifications {
        add_rest: true,
        ..ForcedModifications::default()
    };
    let modified = SafetyMonitor::apply_modifications(&strength_session(), rest, &config);

    assert_eq!(modified.focus, SessionFocus::ActiveRecovery);
    assert_eq!(modified.exercises, config.recovery_exercises);
    assert_eq!(modified.duration_minutes, 20);
    assert!((modified.intensity_modifier - 0.3).abs() < 1e-9);

    let mut light = strength_session();
    light.duration_minutes = 15;
    light.intensity_modifier = 0.2;
    let modified = SafetyMonitor::apply_modifications(&light, rest, &config);
    assert_eq!(modified.duration_minutes, 15);
    assert!((modified.intensity_modifier - 0.2).abs() < 1e-9);
}
