//! The library session: owner of all view state for one grid.
//!
//! UI events come in through the `on_*` methods, each handled to completion
//! and touching a single controller. Readers use the accessors; anything
//! that wants to react to changes subscribes to `SessionEvent`s instead of
//! polling. The session is passed to consumers explicitly, never reached
//! through a global.

use chrono::NaiveDate;
use flume::{Receiver, Sender};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::models::{
    fingerprint, project, CatalogSource, EntryId, LoadOutcome, MediaCatalog, MediaEntry, SortMode,
};
use crate::state::chrome::{compose, Chrome, LibraryTab};
use crate::state::navigation::{Destination, NavigationController, NavigationPath};
use crate::state::scroll::{GeometrySnapshot, ScrollPositionTracker};
use crate::state::selection::SelectionController;
use crate::state::timeline::{TimelineFilter, TimelineFilterController};

/// Change notification sent to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The projected grid contents changed (reload or sort change).
    ItemsChanged { count: usize, fingerprint: u64 },
    SortChanged(SortMode),
    SelectModeChanged(bool),
    SelectionChanged { count: usize },
    AtBottomChanged(bool),
    TimelineFilterChanged(TimelineFilter),
    PathChanged { depth: usize },
    SearchChanged,
    TabChanged(LibraryTab),
}

pub struct LibrarySession {
    config: SessionConfig,
    catalog: MediaCatalog,
    sort_mode: SortMode,
    selection: SelectionController,
    scroll: ScrollPositionTracker,
    timeline: TimelineFilterController,
    navigation: NavigationController,
    tab: LibraryTab,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl LibrarySession {
    /// Creates a session over an empty catalog.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sort_mode: config.initial_sort,
            scroll: ScrollPositionTracker::new(config.bottom_threshold),
            timeline: TimelineFilterController::new(config.initial_filter),
            catalog: MediaCatalog::new(),
            selection: SelectionController::new(),
            navigation: NavigationController::new(),
            tab: LibraryTab::default(),
            subscribers: Vec::new(),
            config,
        }
    }

    /// Creates a session and loads its catalog from `source`.
    pub fn with_source(source: &dyn CatalogSource, config: SessionConfig) -> Self {
        let session = Self::new(config);
        session.catalog.load(source);
        info!(
            "Library session ready: {} entries, sort {:?}",
            session.catalog.len(),
            session.sort_mode
        );
        session
    }

    /// Registers a new listener for state changes.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn emit_items_changed(&mut self) {
        let snapshot = self.catalog.snapshot();
        let items = project(&snapshot, self.sort_mode);
        let event = SessionEvent::ItemsChanged {
            count: items.len(),
            fingerprint: fingerprint(items),
        };
        self.emit(event);
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replaces the catalog. Selected ids that did not survive are dropped;
    /// with `clear_selection_on_reload` the whole selection goes.
    pub fn reload(&mut self, source: &dyn CatalogSource) -> LoadOutcome {
        let outcome = self.catalog.load(source);

        let removed = if self.config.clear_selection_on_reload {
            self.selection.clear()
        } else {
            self.selection.retain_live(&self.catalog)
        };
        if removed > 0 {
            debug!("Reload dropped {} selected entries", removed);
            let count = self.selection.count();
            self.emit(SessionEvent::SelectionChanged { count });
        }

        self.emit_items_changed();
        outcome
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn entry(&self, id: EntryId) -> Option<MediaEntry> {
        self.catalog.get(id)
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The grid contents in display order, recomputed on every call.
    pub fn current_items(&self) -> Vec<MediaEntry> {
        let snapshot = self.catalog.snapshot();
        project(&snapshot, self.sort_mode)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn current_fingerprint(&self) -> u64 {
        let snapshot = self.catalog.snapshot();
        fingerprint(project(&snapshot, self.sort_mode))
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_selection_active(&self) -> bool {
        self.selection.is_active()
    }

    pub fn is_selected(&self, id: EntryId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.count()
    }

    pub fn selected_ids(&self) -> Vec<EntryId> {
        self.selection.selected_ids().collect()
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll.is_at_bottom()
    }

    pub fn current_timeline_filter(&self) -> TimelineFilter {
        self.timeline.filter()
    }

    pub fn current_path(&self) -> NavigationPath {
        self.navigation.path().to_vec()
    }

    pub fn search_query(&self) -> &str {
        self.navigation.search()
    }

    pub fn active_tab(&self) -> LibraryTab {
        self.tab
    }

    pub fn chrome(&self) -> Chrome {
        compose(
            self.tab,
            self.selection.is_active(),
            self.timeline.filter(),
            self.scroll.is_at_bottom(),
        )
    }

    /// Subtitle under the grid title: the date for date sorts, a count for
    /// type filters.
    pub fn title_subtitle(&self, today: NaiveDate) -> String {
        let count = || {
            let snapshot = self.catalog.snapshot();
            project(&snapshot, self.sort_mode).len()
        };
        match self.sort_mode {
            SortMode::NewestFirst | SortMode::OldestFirst => today.format("%-d %B %Y").to_string(),
            SortMode::PhotosOnly => counted(count(), "Photo"),
            SortMode::VideosOnly => counted(count(), "Video"),
        }
    }

    // =========================================================================
    // Event intake
    // =========================================================================

    /// Tap on a grid cell: toggles selection in select mode, otherwise opens
    /// the detail view.
    pub fn on_tap(&mut self, id: EntryId) {
        if self.selection.is_active() {
            if self.selection.toggle(id, &self.catalog) {
                let count = self.selection.count();
                self.emit(SessionEvent::SelectionChanged { count });
            }
            return;
        }
        self.on_navigate(Destination::detail(id));
    }

    /// Long press: enters select mode and picks the pressed entry.
    pub fn on_long_press(&mut self, id: EntryId) {
        if let Err(err) = self.catalog.require(id) {
            debug!("Ignoring long press: {}", err);
            return;
        }
        if self.selection.enter_select_mode() {
            self.emit(SessionEvent::SelectModeChanged(true));
        }
        if self.selection.select(id, &self.catalog) {
            let count = self.selection.count();
            self.emit(SessionEvent::SelectionChanged { count });
        }
    }

    /// Returns the new at-bottom value when it flipped.
    pub fn on_scroll_geometry(&mut self, snapshot: GeometrySnapshot) -> Option<bool> {
        let flipped = self.scroll.observe(snapshot);
        if let Some(at_bottom) = flipped {
            self.emit(SessionEvent::AtBottomChanged(at_bottom));
        }
        flipped
    }

    pub fn on_sort_selected(&mut self, mode: SortMode) {
        if self.sort_mode == mode {
            return;
        }
        debug!("Sort mode: {:?} -> {:?}", self.sort_mode, mode);
        self.sort_mode = mode;
        self.emit(SessionEvent::SortChanged(mode));
        self.emit_items_changed();
    }

    /// The Select / Cancel button.
    pub fn on_toggle_select_mode(&mut self) {
        let had_selection = self.selection.count() > 0;
        let active = if self.selection.is_active() {
            self.selection.exit_select_mode();
            false
        } else {
            self.selection.enter_select_mode();
            true
        };
        debug!("Select mode: {}", active);
        self.emit(SessionEvent::SelectModeChanged(active));
        if !active && had_selection {
            self.emit(SessionEvent::SelectionChanged { count: 0 });
        }
    }

    pub fn on_filter_selected(&mut self, filter: TimelineFilter) {
        if self.timeline.set_filter(filter) {
            self.emit(SessionEvent::TimelineFilterChanged(filter));
        }
    }

    /// Push a destination. Detail views for entries not in the catalog are ignored.
    pub fn on_navigate(&mut self, destination: Destination) {
        if let Some(id) = destination.entry_id() {
            if let Err(err) = self.catalog.require(id) {
                debug!("Ignoring navigation: {}", err);
                return;
            }
        }
        self.navigation.push(destination);
        let depth = self.navigation.depth();
        self.emit(SessionEvent::PathChanged { depth });
    }

    /// Back gesture. Does nothing at the root.
    pub fn on_back(&mut self) {
        if self.navigation.pop().is_some() {
            let depth = self.navigation.depth();
            self.emit(SessionEvent::PathChanged { depth });
        }
    }

    pub fn on_back_to_root(&mut self) {
        if self.navigation.pop_to_root() > 0 {
            self.emit(SessionEvent::PathChanged { depth: 0 });
        }
    }

    /// Replace the whole path. Detail frames for missing entries are dropped.
    pub fn on_replace_path(&mut self, path: NavigationPath) {
        let catalog = &self.catalog;
        let path: NavigationPath = path
            .into_iter()
            .filter(|d| d.entry_id().map_or(true, |id| catalog.contains(id)))
            .collect();
        if self.navigation.path() == path.as_slice() {
            return;
        }
        self.navigation.replace(path);
        let depth = self.navigation.depth();
        self.emit(SessionEvent::PathChanged { depth });
    }

    pub fn on_search_changed(&mut self, query: &str) {
        if self.navigation.set_search(query) {
            self.emit(SessionEvent::SearchChanged);
        }
    }

    pub fn on_tab_selected(&mut self, tab: LibraryTab) {
        if self.tab == tab {
            return;
        }
        debug!("Tab: {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
        self.emit(SessionEvent::TabChanged(tab));
    }
}

impl Default for LibrarySession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for LibrarySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibrarySession")
            .field("catalog", &self.catalog)
            .field("sort_mode", &self.sort_mode)
            .field("selection", &self.selection)
            .field("scroll", &self.scroll)
            .field("timeline", &self.timeline)
            .field("navigation", &self.navigation)
            .field("tab", &self.tab)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
