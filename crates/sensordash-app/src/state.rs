//! Application state (Model in TEA pattern)

use sensordash_feed::ConnectionManager;

use crate::config::Settings;
use crate::live::LiveSeries;
use crate::range::RangeLoader;
use crate::sink::DashboardSlots;

/// Which dashboard page is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Value cards, live charts and the readings table
    #[default]
    Live,
    /// Historical charts and security event lists
    History,
}

impl ActiveTab {
    pub fn toggle(self) -> Self {
        match self {
            ActiveTab::Live => ActiveTab::History,
            ActiveTab::History => ActiveTab::Live,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Live => "Live",
            ActiveTab::History => "History",
        }
    }
}

/// Complete application state.
///
/// Built once at startup and owned by the runner; every mutation happens in
/// [`crate::handler::update`].
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Push-channel lifecycle
    pub connection: ConnectionManager,

    /// Live chart windows
    pub live: LiveSeries,

    /// Everything on screen
    pub dashboard: DashboardSlots,

    pub history: RangeLoader,
    pub security: RangeLoader,

    pub active_tab: ActiveTab,

    quitting: bool,
}

impl AppState {
    /// Build the state for a validated push-channel URL.
    pub fn new(settings: Settings, feed_url: impl Into<String>) -> Self {
        let connection =
            ConnectionManager::with_delay(feed_url, settings.feed.reconnect_delay());
        let history = RangeLoader::new(&settings.history);
        let security = RangeLoader::new(&settings.security);

        Self {
            settings,
            connection,
            live: LiveSeries::new(),
            dashboard: DashboardSlots::default(),
            history,
            security,
            active_tab: ActiveTab::default(),
            quitting: false,
        }
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensordash_core::ConnectionState;
    use std::time::Duration;

    #[test]
    fn test_new_state() {
        let state = AppState::new(Settings::default(), "ws://localhost:8000/ws/sensors/");
        assert_eq!(state.connection.state(), ConnectionState::Disconnected);
        assert_eq!(state.connection.reconnect_delay(), Duration::from_secs(5));
        assert_eq!(state.history.selected_hours(), 24);
        assert_eq!(state.security.selected_hours(), 24);
        assert_eq!(state.active_tab, ActiveTab::Live);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_tab_toggle() {
        assert_eq!(ActiveTab::Live.toggle(), ActiveTab::History);
        assert_eq!(ActiveTab::History.toggle().title(), "Live");
    }
}
