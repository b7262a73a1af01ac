//! In-memory media catalog.
//!
//! The catalog is the single source of truth for the grid. It is replaced
//! wholesale on every load; readers hold an `Arc` snapshot so a reload can
//! never be observed half-applied.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::{EngineError, LoadError};
use crate::models::{EntryId, MediaEntry};

/// Supplier of catalog contents.
///
/// Implemented by the built-in sample library; a real backing store plugs in
/// here and reports failures through `LoadError`.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<MediaEntry>, LoadError>;
}

/// A fixed list of entries is a source that always succeeds.
impl CatalogSource for Vec<MediaEntry> {
    fn load(&self) -> Result<Vec<MediaEntry>, LoadError> {
        Ok(self.clone())
    }
}

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Number of entries now in the catalog.
    pub loaded: usize,
    /// Entries dropped because their id was already present.
    pub duplicates: usize,
    /// The source failed and the catalog was emptied.
    pub failed: bool,
}

/// Entries plus their id -> position index, always swapped together.
#[derive(Default)]
struct Contents {
    entries: Arc<Vec<MediaEntry>>,
    index: HashMap<EntryId, usize>,
}

impl Contents {
    fn get(&self, id: EntryId) -> Option<&MediaEntry> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }
}

/// Ordered, immutable-after-load collection of media entries.
///
/// Load order is the canonical oldest-to-newest axis.
pub struct MediaCatalog {
    contents: RwLock<Arc<Contents>>,
}

impl MediaCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            contents: RwLock::new(Arc::new(Contents::default())),
        }
    }

    /// Creates a catalog and immediately loads it from `source`.
    pub fn from_source(source: &dyn CatalogSource) -> Self {
        let catalog = Self::new();
        catalog.load(source);
        catalog
    }

    /// Replaces the whole catalog with the contents of `source`.
    ///
    /// Duplicate ids keep their first occurrence. A failing source leaves the
    /// catalog empty; the error is logged, not returned.
    pub fn load(&self, source: &dyn CatalogSource) -> LoadOutcome {
        let (contents, outcome) = match source.load() {
            Ok(raw) => {
                let total = raw.len();
                let mut index = HashMap::with_capacity(total);
                let mut entries = Vec::with_capacity(total);
                for entry in raw {
                    if index.contains_key(&entry.id) {
                        continue;
                    }
                    index.insert(entry.id, entries.len());
                    entries.push(entry);
                }
                let duplicates = total - entries.len();
                if duplicates > 0 {
                    warn!("Dropped {} media entries with duplicate ids", duplicates);
                }
                let outcome = LoadOutcome {
                    loaded: entries.len(),
                    duplicates,
                    failed: false,
                };
                let contents = Contents {
                    entries: Arc::new(entries),
                    index,
                };
                (contents, outcome)
            }
            Err(err) => {
                let err = EngineError::from(err);
                warn!(error = %err, "Catalog load failed, showing an empty library");
                (
                    Contents::default(),
                    LoadOutcome {
                        failed: true,
                        ..LoadOutcome::default()
                    },
                )
            }
        };

        *self.contents.write() = Arc::new(contents);
        info!("Loaded {} media entries", outcome.loaded);
        outcome
    }

    /// Returns the current contents. The snapshot is unaffected by later loads.
    pub fn snapshot(&self) -> Arc<Vec<MediaEntry>> {
        self.contents.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.contents.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().entries.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.contents.read().index.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<MediaEntry> {
        self.contents.read().get(id).cloned()
    }

    /// Checks that `id` is live, reporting an `InvalidReference` otherwise.
    pub fn require(&self, id: EntryId) -> Result<(), EngineError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(EngineError::InvalidReference(id))
        }
    }
}

impl Default for MediaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MediaCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCatalog")
            .field("len", &self.len())
            .finish()
    }
}
