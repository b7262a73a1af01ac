use crate::models::SortMode;
use crate::state::scroll::{sanitize_threshold, DEFAULT_BOTTOM_THRESHOLD};
use crate::state::TimelineFilter;

/// Configuration for a library session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Distance from the bottom edge under which the grid counts as at the bottom.
    pub bottom_threshold: f64,
    /// Whether a catalog reload discards the whole selection.
    /// Stale ids are always dropped regardless.
    pub clear_selection_on_reload: bool,
    /// Sort mode the session starts with.
    pub initial_sort: SortMode,
    /// Timeline filter the session starts with.
    pub initial_filter: TimelineFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bottom_threshold: DEFAULT_BOTTOM_THRESHOLD,
            clear_selection_on_reload: false,
            initial_sort: SortMode::NewestFirst,
            initial_filter: TimelineFilter::All,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite or negative thresholds fall back to the default.
    pub fn with_bottom_threshold(mut self, threshold: f64) -> Self {
        self.bottom_threshold = sanitize_threshold(threshold);
        self
    }

    pub fn with_clear_selection_on_reload(mut self, clear: bool) -> Self {
        self.clear_selection_on_reload = clear;
        self
    }

    pub fn with_initial_sort(mut self, mode: SortMode) -> Self {
        self.initial_sort = mode;
        self
    }

    pub fn with_initial_filter(mut self, filter: TimelineFilter) -> Self {
        self.initial_filter = filter;
        self
    }
}
