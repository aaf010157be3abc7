//! Historical data and security event loading
//!
//! Loads are fire-and-forget: each one is stamped with a generation and only
//! the response to the most recently issued load is applied. A failed load
//! leaves the previously displayed data in place.

use sensordash_core::prelude::*;
use sensordash_core::{HistoricalSeries, SecurityEventList};

use crate::sink::RenderSink;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn load_history(state: &mut AppState) -> UpdateResult {
    let (hours, generation) = state.history.issue();
    debug!("Loading historical data for {}h (generation {})", hours, generation);
    UpdateResult::action(UpdateAction::FetchHistorical { hours, generation })
}

pub(crate) fn load_security(state: &mut AppState) -> UpdateResult {
    let (hours, generation) = state.security.issue();
    debug!("Loading security events for {}h (generation {})", hours, generation);
    UpdateResult::action(UpdateAction::FetchSecurityEvents { hours, generation })
}

pub(crate) fn handle_historical_loaded(
    state: &mut AppState,
    generation: u64,
    series: HistoricalSeries,
) -> UpdateResult {
    if !state.history.complete(generation, series.hours) {
        debug!(
            "Dropping superseded historical response (generation {}, {}h)",
            generation, series.hours
        );
        return UpdateResult::none();
    }

    info!(
        "Historical data for {}h: {} temperature, {} humidity points",
        series.hours,
        series.temperature.len(),
        series.humidity.len()
    );
    state.dashboard.replace_history(series);
    UpdateResult::none()
}

pub(crate) fn handle_historical_failed(
    state: &mut AppState,
    generation: u64,
    hours: u32,
    error: String,
) -> UpdateResult {
    if !state.history.fail(generation, hours, error.clone()) {
        debug!(
            "Dropping superseded historical failure (generation {}): {}",
            generation, error
        );
        return UpdateResult::none();
    }

    warn!("Failed to load historical data for {}h: {}", hours, error);
    UpdateResult::none()
}

pub(crate) fn handle_security_loaded(
    state: &mut AppState,
    generation: u64,
    events: SecurityEventList,
) -> UpdateResult {
    if !state.security.complete(generation, events.hours) {
        debug!(
            "Dropping superseded security response (generation {}, {}h)",
            generation, events.hours
        );
        return UpdateResult::none();
    }

    info!(
        "Security events for {}h: {} motion, {} smoke",
        events.hours,
        events.motion.len(),
        events.smoke.len()
    );
    state.dashboard.replace_security_events(events);
    UpdateResult::none()
}

pub(crate) fn handle_security_failed(
    state: &mut AppState,
    generation: u64,
    hours: u32,
    error: String,
) -> UpdateResult {
    if !state.security.fail(generation, hours, error.clone()) {
        debug!(
            "Dropping superseded security failure (generation {}): {}",
            generation, error
        );
        return UpdateResult::none();
    }

    warn!("Failed to load security events for {}h: {}", hours, error);
    UpdateResult::none()
}
