// ABOUTME: In-memory training history store for tests and embedded use
// ABOUTME: Thread-safe per-trainee check-in, session, and set-log lists behind a tokio RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::core::TrainingHistoryProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{CheckIn, DateRange, SessionRecord, SetLog};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct TraineeHistory {
    checkins: Vec<CheckIn>,
    sessions: Vec<SessionRecord>,
    set_logs: Vec<SetLog>,
}

/// History provider backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    trainees: RwLock<HashMap<Uuid, TraineeHistory>>,
}

impl InMemoryHistory {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wellness check-in
    pub async fn record_checkin(&self, trainee_id: Uuid, checkin: CheckIn) {
        self.trainees
            .write()
            .await
            .entry(trainee_id)
            .or_default()
            .checkins
            .push(checkin);
    }

    /// Record a completed session
    pub async fn record_session(&self, trainee_id: Uuid, session: SessionRecord) {
        self.trainees
            .write()
            .await
            .entry(trainee_id)
            .or_default()
            .sessions
            .push(session);
    }

    /// Record a logged set
    pub async fn record_set(&self, trainee_id: Uuid, set: SetLog) {
        self.trainees
            .write()
            .await
            .entry(trainee_id)
            .or_default()
            .set_logs
            .push(set);
    }
}

/// Items dated within `range`, oldest first
fn within<T: Clone>(items: &[T], range: DateRange, date_of: impl Fn(&T) -> NaiveDate) -> Vec<T> {
    let mut selected: Vec<T> = items
        .iter()
        .filter(|item| range.contains(date_of(item)))
        .cloned()
        .collect();
    selected.sort_by_key(&date_of);
    selected
}

#[async_trait]
impl TrainingHistoryProvider for InMemoryHistory {
    async fn checkins(&self, trainee_id: Uuid, range: DateRange) -> AppResult<Vec<CheckIn>> {
        let trainees = self.trainees.read().await;
        Ok(trainees.get(&trainee_id).map_or_else(Vec::new, |history| {
            within(&history.checkins, range, |c| c.date)
        }))
    }

    async fn sessions(
        &self,
        trainee_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<SessionRecord>> {
        let trainees = self.trainees.read().await;
        Ok(trainees.get(&trainee_id).map_or_else(Vec::new, |history| {
            within(&history.sessions, range, |s| s.date)
        }))
    }

    async fn set_logs(&self, trainee_id: Uuid, range: DateRange) -> AppResult<Vec<SetLog>> {
        let trainees = self.trainees.read().await;
        Ok(trainees.get(&trainee_id).map_or_else(Vec::new, |history| {
            within(&history.set_logs, range, |s| s.date)
        }))
    }
}
