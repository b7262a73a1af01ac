// Navigation stack for drill-down routing
// The root page lives outside the stack; an empty stack shows it

use tracing::debug;

use crate::models::EntryId;

/// Sidebar main pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Photos,
    Years,
    Months,
    All,
}

impl Page {
    /// Pages listed in the sidebar.
    pub const MAIN: [Page; 1] = [Page::Photos];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Photos => "Library",
            Self::Years => "Years",
            Self::Months => "Months",
            Self::All => "All",
        }
    }

    pub fn symbol_name(&self) -> &'static str {
        match self {
            Self::Photos => "photo.on.rectangle",
            Self::Years => "calendar",
            Self::Months => "calendar.day.timeline.left",
            Self::All => "square.grid.2x2",
        }
    }
}

/// A routable destination. The renderer switches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    RootPage(Page),
    MediaDetail { entry_id: EntryId },
}

impl Destination {
    pub fn root() -> Self {
        Self::RootPage(Page::default())
    }

    pub fn detail(entry_id: EntryId) -> Self {
        Self::MediaDetail { entry_id }
    }

    pub fn entry_id(&self) -> Option<EntryId> {
        match self {
            Self::RootPage(_) => None,
            Self::MediaDetail { entry_id } => Some(*entry_id),
        }
    }
}

/// Snapshot of the navigation stack, bottom first.
pub type NavigationPath = Vec<Destination>;

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    path: NavigationPath,
    search: String,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, destination: Destination) {
        debug!("Navigate: push {:?} (depth {})", destination, self.path.len() + 1);
        self.path.push(destination);
    }

    /// Pop the top destination. Popping an empty stack does nothing.
    pub fn pop(&mut self) -> Option<Destination> {
        let popped = self.path.pop();
        if let Some(ref destination) = popped {
            debug!("Navigate: pop {:?} (depth {})", destination, self.path.len());
        }
        popped
    }

    /// Clear the stack back to the implicit root. Returns how many frames were dropped.
    pub fn pop_to_root(&mut self) -> usize {
        let dropped = self.path.len();
        self.path.clear();
        if dropped > 0 {
            debug!("Navigate: pop to root ({} frames)", dropped);
        }
        dropped
    }

    pub fn replace(&mut self, path: NavigationPath) {
        debug!("Navigate: replace path (depth {})", path.len());
        self.path = path;
    }

    pub fn path(&self) -> &[Destination] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn top(&self) -> Option<&Destination> {
        self.path.last()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns whether the query changed.
    pub fn set_search(&mut self, query: &str) -> bool {
        if self.search == query {
            return false;
        }
        self.search.clear();
        self.search.push_str(query);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_to_root() {
        let mut nav = NavigationController::new();
        let entry = EntryId::new();

        nav.push(Destination::root());
        nav.push(Destination::detail(entry));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.top().and_then(|d| d.entry_id()), Some(entry));

        assert_eq!(nav.pop(), Some(Destination::detail(entry)));
        assert_eq!(nav.path(), &[Destination::root()]);
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.pop(), None);
        assert!(nav.path().is_empty());

        nav.push(Destination::root());
        nav.pop();
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_pop_to_root_and_replace() {
        let mut nav = NavigationController::new();
        nav.push(Destination::root());
        nav.push(Destination::detail(EntryId::new()));
        assert_eq!(nav.pop_to_root(), 2);
        assert!(nav.path().is_empty());
        assert_eq!(nav.pop_to_root(), 0);

        let path = vec![Destination::RootPage(Page::Years), Destination::root()];
        nav.replace(path.clone());
        assert_eq!(nav.path(), path.as_slice());
    }

    #[test]
    fn test_search_string() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.search(), "");
        assert!(nav.set_search("beach"));
        assert!(!nav.set_search("beach"));
        assert_eq!(nav.search(), "beach");
    }

    #[test]
    fn test_main_pages() {
        assert_eq!(Page::MAIN, [Page::Photos]);
        assert_eq!(Page::default().symbol_name(), "photo.on.rectangle");
    }

    #[test]
    fn test_page_names() {
        let names: Vec<_> = [Page::Photos, Page::Years, Page::Months, Page::All]
            .iter()
            .map(|page| (page.name(), page.symbol_name()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Library", "photo.on.rectangle"),
                ("Years", "calendar"),
                ("Months", "calendar.day.timeline.left"),
                ("All", "square.grid.2x2"),
            ]
        );
    }
}
