//! Range selection and request sequencing for the two range loaders.
//!
//! Every load is stamped with a generation from a [`RequestSequencer`]. Only
//! a response carrying the most recently issued generation is applied; older
//! responses are dropped on arrival, so the last issued request wins no
//! matter the order in which responses come back.

use crate::config::RangeSettings;

/// Cycles through a sorted list of hour ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelector {
    options: Vec<u32>,
    index: usize,
}

impl RangeSelector {
    /// Build from settings; the settings are normalized first, so the
    /// default is always one of the options.
    pub fn from_settings(settings: &RangeSettings) -> Self {
        let settings = settings.normalized();
        let index = settings
            .ranges
            .iter()
            .position(|h| *h == settings.default_hours)
            .unwrap_or(0);
        Self {
            options: settings.ranges,
            index,
        }
    }

    pub fn options(&self) -> &[u32] {
        &self.options
    }

    /// Currently selected hours.
    pub fn selected(&self) -> u32 {
        self.options.get(self.index).copied().unwrap_or(0)
    }

    /// Select the next longer range, wrapping to the shortest.
    pub fn next(&mut self) -> u32 {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
        self.selected()
    }

    /// Select the next shorter range, wrapping to the longest.
    pub fn prev(&mut self) -> u32 {
        if !self.options.is_empty() {
            self.index = (self.index + self.options.len() - 1) % self.options.len();
        }
        self.selected()
    }

    /// Select `hours`, adding it to the options if needed.
    pub fn select(&mut self, hours: u32) {
        if hours == 0 {
            return;
        }
        match self.options.binary_search(&hours) {
            Ok(index) => self.index = index,
            Err(index) => {
                self.options.insert(index, hours);
                self.index = index;
            }
        }
    }
}

/// Issues monotonically increasing request generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Stamp a new request. Supersedes every earlier generation.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Whether a response for `generation` should be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        generation != 0 && generation == self.latest
    }
}

/// What the range panel footer reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading { hours: u32 },
    Loaded { hours: u32 },
    Failed { hours: u32, error: String },
}

/// Selector, sequencer and status for one range loader.
#[derive(Debug, Clone)]
pub struct RangeLoader {
    pub selector: RangeSelector,
    sequencer: RequestSequencer,
    status: LoadStatus,
}

impl RangeLoader {
    pub fn new(settings: &RangeSettings) -> Self {
        Self {
            selector: RangeSelector::from_settings(settings),
            sequencer: RequestSequencer::default(),
            status: LoadStatus::Idle,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selected_hours(&self) -> u32 {
        self.selector.selected()
    }

    /// Start a load for the selected range; returns `(hours, generation)`.
    pub fn issue(&mut self) -> (u32, u64) {
        let hours = self.selector.selected();
        let generation = self.sequencer.issue();
        self.status = LoadStatus::Loading { hours };
        (hours, generation)
    }

    /// Record a successful response. Returns `false` if it is stale.
    pub fn complete(&mut self, generation: u64, hours: u32) -> bool {
        if !self.sequencer.is_current(generation) {
            return false;
        }
        self.status = LoadStatus::Loaded { hours };
        true
    }

    /// Record a failed response. Returns `false` if it is stale.
    pub fn fail(&mut self, generation: u64, hours: u32, error: String) -> bool {
        if !self.sequencer.is_current(generation) {
            return false;
        }
        self.status = LoadStatus::Failed { hours, error };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> RangeSelector {
        RangeSelector::from_settings(&RangeSettings::default())
    }

    #[test]
    fn test_selector_defaults_to_24() {
        let sel = selector();
        assert_eq!(sel.selected(), 24);
        assert_eq!(sel.options(), &[1, 6, 24, 168]);
    }

    #[test]
    fn test_selector_cycles_and_wraps() {
        let mut sel = selector();
        assert_eq!(sel.next(), 168);
        assert_eq!(sel.next(), 1);
        assert_eq!(sel.prev(), 168);
        assert_eq!(sel.prev(), 24);
    }

    #[test]
    fn test_selector_select_inserts_unknown_hours() {
        let mut sel = selector();
        sel.select(12);
        assert_eq!(sel.selected(), 12);
        assert_eq!(sel.options(), &[1, 6, 12, 24, 168]);

        sel.select(6);
        assert_eq!(sel.selected(), 6);
        assert_eq!(sel.options().len(), 5);

        sel.select(0);
        assert_eq!(sel.selected(), 6);
    }

    #[test]
    fn test_sequencer_only_latest_is_current() {
        let mut seq = RequestSequencer::default();
        assert!(!seq.is_current(0));
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_loader_drops_stale_responses() {
        let mut loader = RangeLoader::new(&RangeSettings::default());

        loader.selector.select(1);
        let (h1, g1) = loader.issue();
        loader.selector.select(24);
        let (h24, g24) = loader.issue();
        assert_eq!((h1, h24), (1, 24));

        assert!(loader.complete(g24, h24));
        assert!(!loader.complete(g1, h1));
        assert_eq!(loader.status(), &LoadStatus::Loaded { hours: 24 });
    }

    #[test]
    fn test_loader_stale_failure_is_ignored() {
        let mut loader = RangeLoader::new(&RangeSettings::default());
        let (_, g1) = loader.issue();
        let (_, g2) = loader.issue();

        assert!(!loader.fail(g1, 24, "timeout".into()));
        assert_eq!(loader.status(), &LoadStatus::Loading { hours: 24 });

        assert!(loader.fail(g2, 24, "HTTP 500".into()));
        assert!(matches!(loader.status(), LoadStatus::Failed { .. }));
    }
}
