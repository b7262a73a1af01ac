use tracing::debug;

use crate::state::LibraryTab;

/// Year / month / all routing for the timeline chrome. Does not filter content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimelineFilter {
    Year,
    Month,
    #[default]
    All,
}

impl TimelineFilter {
    pub const ALL: [TimelineFilter; 3] = [
        TimelineFilter::Year,
        TimelineFilter::Month,
        TimelineFilter::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Year => "Years",
            Self::Month => "Months",
            Self::All => "All",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Year => "calendar",
            Self::Month => "calendar.day.timeline.left",
            Self::All => "square.grid.2x2",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimelineFilterController {
    filter: TimelineFilter,
}

impl TimelineFilterController {
    pub fn new(filter: TimelineFilter) -> Self {
        Self { filter }
    }

    /// Set the filter. Returns whether it changed.
    pub fn set_filter(&mut self, filter: TimelineFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        debug!("Timeline filter: {:?} -> {:?}", self.filter, filter);
        self.filter = filter;
        true
    }

    pub fn filter(&self) -> TimelineFilter {
        self.filter
    }

    /// The filter bar replaces the tab switcher while the grid tab is shown
    /// and the grid is not scrolled to the bottom.
    pub fn is_visible(tab: LibraryTab, at_bottom: bool) -> bool {
        tab == LibraryTab::Library && !at_bottom
    }
}
