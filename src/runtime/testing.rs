//! Test doubles for the runtime

use crate::domain::model::{CombinationId, HoroscopeQuery, Period};
use crate::domain::ports::ContentSource;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Content source that records every call and answers with canned text.
#[derive(Clone, Default)]
pub struct RecordingContentSource {
    horoscopes: Arc<Mutex<Vec<(String, Period)>>>,
    compatibilities: Arc<Mutex<Vec<CombinationId>>>,
}

impl RecordingContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn horoscope_calls(&self) -> Vec<(String, Period)> {
        self.horoscopes.lock().await.clone()
    }

    pub async fn compatibility_calls(&self) -> Vec<CombinationId> {
        self.compatibilities.lock().await.clone()
    }
}

#[async_trait]
impl ContentSource for RecordingContentSource {
    async fn horoscope(&self, query: &HoroscopeQuery) -> String {
        self.horoscopes
            .lock()
            .await
            .push((query.sign.external_id().to_string(), query.period));
        format!("horoscope {} {}", query.sign.external_id(), query.period)
    }

    async fn compatibility(&self, id: CombinationId) -> String {
        self.compatibilities.lock().await.push(id);
        format!("compatibility {}", id)
    }
}
