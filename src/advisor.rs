// ABOUTME: Training advisor service composing a full daily plan from one history snapshot
// ABOUTME: Week clock, wellness-adapted sessions, safety layering, and optional coaching copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Advisor
//!
//! Reads a trainee's history once per evaluation, then runs the pure engine
//! over that snapshot. Coaching copy is optional: when the generator fails the
//! plan is still returned, without copy.

use crate::engine::{
    apply_forced_modifications, generate_session_recommendation, SessionRecommendation,
    SessionRequest,
};
use crate::logging::EngineLogger;
use crate::providers::{CoachingCopyGenerator, CoachingPrompt, HistorySnapshot, TrainingHistoryProvider};
use chrono::NaiveDate;
use pierre_periodization::config::PeriodizationConfig;
use pierre_periodization::{SafetyAssessment, SafetyInput, SafetyMonitor, WeekClock};
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{
    DateRange, RiskLevel, SessionCounts, TraineeProfile, WellnessSnapshot,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Everything the trainee needs for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Trainee the plan belongs to
    pub trainee_id: Uuid,
    /// Day the plan is for
    pub date: NaiveDate,
    /// Sessions after wellness and safety adjustments
    pub recommendation: SessionRecommendation,
    /// Safety metrics, alerts, and the modifications that were applied
    pub safety: SafetyAssessment,
    /// Motivational copy, when a generator is configured and succeeded
    pub coaching_copy: Option<String>,
}

/// Daily plan service
pub struct TrainingAdvisor {
    history: Arc<dyn TrainingHistoryProvider>,
    copy_generator: Option<Arc<dyn CoachingCopyGenerator>>,
    config: PeriodizationConfig,
}

impl TrainingAdvisor {
    /// Create an advisor over a history provider
    ///
    /// # Errors
    /// Returns `ConfigInvalid` when the configuration fails validation
    pub fn new(
        history: Arc<dyn TrainingHistoryProvider>,
        config: PeriodizationConfig,
    ) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            history,
            copy_generator: None,
            config,
        })
    }

    /// Create an advisor using the process-wide configuration
    #[must_use]
    pub fn with_global_config(history: Arc<dyn TrainingHistoryProvider>) -> Self {
        Self {
            history,
            copy_generator: None,
            config: PeriodizationConfig::global().clone(),
        }
    }

    /// Attach a coaching copy generator
    #[must_use]
    pub fn with_copy_generator(mut self, generator: Arc<dyn CoachingCopyGenerator>) -> Self {
        self.copy_generator = Some(generator);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PeriodizationConfig {
        &self.config
    }

    /// Compose today's plan for a trainee
    ///
    /// # Errors
    /// Returns `InvalidRange` when `today` precedes the program start or a
    /// record is out of scale, and any error the history provider reports
    pub async fn daily_plan(
        &self,
        profile: &TraineeProfile,
        today: NaiveDate,
        wellness: Option<WellnessSnapshot>,
    ) -> AppResult<DailyPlan> {
        let start = profile.program_start;
        let window = WeekClock::days_since_start(start, today)
            .and_then(WeekClock::week_for)
            .and_then(|week| WeekClock::week_window(start, week))
            .map_err(|e| e.with_trainee_id(profile.id))?;

        let lookback = DateRange::ending_on(today, self.config.history.lookback_days);
        let read_range = DateRange::new(start.min(lookback.start), today)?;
        let snapshot = self
            .history
            .snapshot(profile.id, read_range)
            .await
            .map_err(|e| e.with_trainee_id(profile.id))?;

        let counts = session_counts(&snapshot, start, today, window.start);

        let request = SessionRequest {
            program_start: start,
            today,
            counts,
            wellness,
        };
        let planned = generate_session_recommendation(&request, &self.config)
            .map_err(|e| e.with_trainee_id(profile.id))?;

        let input = SafetyInput {
            checkins: snapshot
                .checkins
                .iter()
                .filter(|c| lookback.contains(c.date))
                .copied()
                .collect(),
            sessions: snapshot
                .sessions
                .iter()
                .filter(|s| lookback.contains(s.date))
                .cloned()
                .collect(),
            set_logs: snapshot
                .set_logs
                .iter()
                .filter(|s| lookback.contains(s.date))
                .cloned()
                .collect(),
            trainee_age: profile.age,
            current_week: Some(planned.status.window()),
        };
        let safety = SafetyMonitor::assess(&input, &self.config.safety)
            .map_err(|e| e.with_trainee_id(profile.id))?;
        let recommendation =
            apply_forced_modifications(&planned, safety.modifications, &self.config.safety);

        EngineLogger::log_safety_evaluation(
            profile.id,
            safety.metrics.injury_risk,
            safety.alerts.len(),
            safety.metrics.overtraining_score,
        );
        EngineLogger::log_session_recommendation(
            profile.id,
            recommendation.status.week,
            recommendation.status.day,
            recommendation.sessions.first().map(|s| s.focus),
            recommendation.notes.len(),
        );

        let coaching_copy = self
            .coaching_copy(profile, &recommendation, safety.metrics.injury_risk)
            .await;

        info!(
            trainee.id = %profile.id,
            date = %today,
            rest = recommendation.is_rest(),
            "Composed daily plan"
        );

        Ok(DailyPlan {
            trainee_id: profile.id,
            date: today,
            recommendation,
            safety,
            coaching_copy,
        })
    }

    async fn coaching_copy(
        &self,
        profile: &TraineeProfile,
        recommendation: &SessionRecommendation,
        injury_risk: RiskLevel,
    ) -> Option<String> {
        let generator = self.copy_generator.as_ref()?;
        let phase = recommendation.phase.as_ref()?;
        let prompt = CoachingPrompt {
            trainee_name: profile.display_name.clone(),
            week: recommendation.status.week,
            phase: phase.phase,
            focus: recommendation.sessions.first().map(|s| s.focus),
            injury_risk,
            adjustments: recommendation.notes.clone(),
        };
        match generator.generate(&prompt).await {
            Ok(copy) => Some(copy),
            Err(e) => {
                EngineLogger::log_collaborator_failure("coaching_copy", profile.id, &e.to_string());
                None
            }
        }
    }
}

/// Completed sessions since the program start and within the current week, up to today
fn session_counts(
    snapshot: &HistorySnapshot,
    program_start: NaiveDate,
    today: NaiveDate,
    week_start: NaiveDate,
) -> SessionCounts {
    let since_start = snapshot
        .sessions
        .iter()
        .filter(|s| (program_start..=today).contains(&s.date));
    let completed_total = since_start.clone().count();
    let completed_this_week = since_start.filter(|s| s.date >= week_start).count();
    SessionCounts {
        completed_total: u32::try_from(completed_total).unwrap_or(u32::MAX),
        completed_this_week: u32::try_from(completed_this_week).unwrap_or(u32::MAX),
    }
}
