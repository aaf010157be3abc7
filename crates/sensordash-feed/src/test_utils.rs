//! Test utilities for feed consumers
//!
//! Provides a scripted [`RangeApi`] so callers can exercise range loading
//! without a server.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use sensordash_core::prelude::*;
use sensordash_core::{HistoricalSeries, SecurityEventList};

use crate::api::RangeApi;

/// A [`RangeApi`] that replays queued results and records requested hours.
///
/// When a queue runs dry the fake answers with an empty range for the
/// requested hours.
#[derive(Debug, Clone, Default)]
pub struct FakeRangeApi {
    inner: Arc<Mutex<FakeState>>,
}

#[derive(Debug, Default)]
struct FakeState {
    historical: VecDeque<Result<HistoricalSeries>>,
    security: VecDeque<Result<SecurityEventList>>,
    historical_calls: Vec<u32>,
    security_calls: Vec<u32>,
}

impl FakeRangeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_historical(&self, result: Result<HistoricalSeries>) {
        self.state().historical.push_back(result);
    }

    pub fn push_security(&self, result: Result<SecurityEventList>) {
        self.state().security.push_back(result);
    }

    /// Hours requested from the historical endpoint, in call order.
    pub fn historical_calls(&self) -> Vec<u32> {
        self.state().historical_calls.clone()
    }

    /// Hours requested from the security endpoint, in call order.
    pub fn security_calls(&self) -> Vec<u32> {
        self.state().security_calls.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RangeApi for FakeRangeApi {
    async fn historical(&self, hours: u32) -> Result<HistoricalSeries> {
        let mut state = self.state();
        state.historical_calls.push(hours);
        state.historical.pop_front().unwrap_or_else(|| {
            Ok(HistoricalSeries {
                hours,
                ..Default::default()
            })
        })
    }

    async fn security_events(&self, hours: u32) -> Result<SecurityEventList> {
        let mut state = self.state();
        state.security_calls.push(hours);
        state.security.pop_front().unwrap_or_else(|| {
            Ok(SecurityEventList {
                hours,
                ..Default::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_replays_then_defaults() {
        let api = FakeRangeApi::new();
        api.push_historical(Err(Error::api("down")));

        assert!(api.historical(6).await.is_err());
        let series = api.historical(24).await.unwrap();
        assert_eq!(series.hours, 24);
        assert!(series.is_empty());
        assert_eq!(api.historical_calls(), vec![6, 24]);
    }

    #[tokio::test]
    async fn test_fake_clones_share_state() {
        let api = FakeRangeApi::new();
        let clone = api.clone();
        clone.security_events(1).await.unwrap();
        assert_eq!(api.security_calls(), vec![1]);
    }
}
