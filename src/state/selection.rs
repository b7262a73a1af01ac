// Multi-select state for the grid
// Taps toggle membership while select mode is active

use std::collections::HashSet;

use tracing::debug;

use crate::models::{EntryId, MediaCatalog};

/// Select mode flag plus the set of picked entries.
///
/// The selected set only ever holds ids that are live in the catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    active: bool,
    selected: HashSet<EntryId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter select mode. Prior picks are kept.
    pub fn enter_select_mode(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    /// Leave select mode and discard the selection.
    pub fn exit_select_mode(&mut self) -> bool {
        let changed = self.active || !self.selected.is_empty();
        self.active = false;
        self.selected.clear();
        changed
    }

    /// Flip membership of `id`. Returns whether the set changed.
    ///
    /// Ignored outside select mode and for ids missing from the catalog.
    pub fn toggle(&mut self, id: EntryId, catalog: &MediaCatalog) -> bool {
        if !self.active {
            return false;
        }
        if let Err(err) = catalog.require(id) {
            debug!("Ignoring selection toggle: {}", err);
            return false;
        }

        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Add `id` without toggling. Returns whether it was newly added.
    pub fn select(&mut self, id: EntryId, catalog: &MediaCatalog) -> bool {
        if !self.active {
            return false;
        }
        if let Err(err) = catalog.require(id) {
            debug!("Ignoring selection: {}", err);
            return false;
        }
        self.selected.insert(id)
    }

    /// Drop ids that are no longer in the catalog. Returns how many were removed.
    pub fn retain_live(&mut self, catalog: &MediaCatalog) -> usize {
        let snapshot = catalog.snapshot();
        let live: HashSet<EntryId> = snapshot.iter().map(|e| e.id).collect();
        let before = self.selected.len();
        self.selected.retain(|id| live.contains(id));
        before - self.selected.len()
    }

    /// Clear the selected set without leaving select mode.
    pub fn clear(&mut self) -> usize {
        let removed = self.selected.len();
        self.selected.clear();
        removed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_selected(&self, id: EntryId) -> bool {
        self.selected.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids, in no particular order.
    pub fn selected_ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gradient, MediaEntry};

    fn make_catalog(count: usize) -> (MediaCatalog, Vec<EntryId>) {
        let entries: Vec<MediaEntry> = (0..count)
            .map(|_| MediaEntry::photo(Gradient::from_hex("fa709a", "fee140")))
            .collect();
        let ids = entries.iter().map(|e| e.id).collect();
        (MediaCatalog::from_source(&entries), ids)
    }

    #[test]
    fn test_toggle_requires_select_mode() {
        let (catalog, ids) = make_catalog(2);
        let mut selection = SelectionController::new();

        assert!(!selection.toggle(ids[0], &catalog));
        assert_eq!(selection.count(), 0);

        selection.enter_select_mode();
        assert!(selection.toggle(ids[0], &catalog));
        assert!(selection.is_selected(ids[0]));

        // Second toggle removes it
        assert!(selection.toggle(ids[0], &catalog));
        assert!(!selection.is_selected(ids[0]));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (catalog, _) = make_catalog(1);
        let mut selection = SelectionController::new();
        selection.enter_select_mode();

        assert!(!selection.toggle(EntryId::new(), &catalog));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_exit_clears_selection() {
        let (catalog, ids) = make_catalog(5);
        let mut selection = SelectionController::new();
        selection.enter_select_mode();
        selection.toggle(ids[1], &catalog);
        selection.toggle(ids[3], &catalog);
        assert_eq!(selection.count(), 2);

        selection.exit_select_mode();
        assert!(!selection.is_active());
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_enter_keeps_prior_picks() {
        let (catalog, ids) = make_catalog(3);
        let mut selection = SelectionController::new();
        selection.enter_select_mode();
        selection.toggle(ids[2], &catalog);

        // Entering again is not a transition and keeps the pick
        assert!(!selection.enter_select_mode());
        assert!(selection.is_selected(ids[2]));
    }

    #[test]
    fn test_select_does_not_toggle_off() {
        let (catalog, ids) = make_catalog(1);
        let mut selection = SelectionController::new();
        selection.enter_select_mode();

        assert!(selection.select(ids[0], &catalog));
        assert!(!selection.select(ids[0], &catalog));
        assert!(selection.is_selected(ids[0]));
    }

    #[test]
    fn test_retain_live_after_reload() {
        let (catalog, ids) = make_catalog(3);
        let mut selection = SelectionController::new();
        selection.enter_select_mode();
        selection.toggle(ids[0], &catalog);
        selection.toggle(ids[1], &catalog);

        let mut kept: Vec<MediaEntry> = catalog
            .snapshot()
            .iter()
            .filter(|e| e.id != ids[0])
            .cloned()
            .collect();
        kept.push(MediaEntry::photo(Gradient::from_hex("000", "fff")));
        catalog.load(&kept);

        assert_eq!(selection.retain_live(&catalog), 1);
        assert!(!selection.is_selected(ids[0]));
        assert!(selection.is_selected(ids[1]));
        assert!(selection.selected_ids().all(|id| catalog.contains(id)));
    }
}
