//! View-state engine for a photo library grid.
//!
//! The renderer reads from a [`LibrarySession`] and feeds UI events back into
//! it. Storage, decoding, layout and drawing live outside this crate.

pub mod config;
pub mod error;
pub mod models;
pub mod state;

pub use config::SessionConfig;
pub use error::{EngineError, LoadError};
pub use models::{
    CatalogSource, EntryId, Gradient, LoadOutcome, MediaCatalog, MediaEntry, MediaKind, Rgba,
    SampleLibrary, SortMode,
};
pub use state::{
    Chrome, Destination, GeometrySnapshot, LibrarySession, LibraryTab, NavigationPath, Page,
    SessionEvent, TimelineFilter,
};
