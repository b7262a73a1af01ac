//! Sort and type projections of the catalog.
//!
//! A projection is recomputed on every read and never cached here. The
//! fingerprint lets a renderer key its own layout caches on the result.

use xxhash_rust::xxh3::xxh3_64;

use crate::models::MediaEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    NewestFirst,
    OldestFirst,
    PhotosOnly,
    VideosOnly,
}

impl SortMode {
    /// Menu order.
    pub const ALL: [SortMode; 4] = [
        SortMode::NewestFirst,
        SortMode::OldestFirst,
        SortMode::PhotosOnly,
        SortMode::VideosOnly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest First",
            Self::OldestFirst => "Oldest First",
            Self::PhotosOnly => "Photos Only",
            Self::VideosOnly => "Videos Only",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::NewestFirst => "arrow.down",
            Self::OldestFirst => "arrow.up",
            Self::PhotosOnly => "photo",
            Self::VideosOnly => "video",
        }
    }

    /// Whether this mode removes entries rather than only reordering them.
    pub fn is_type_filter(&self) -> bool {
        matches!(self, Self::PhotosOnly | Self::VideosOnly)
    }
}

/// Projects `entries` (in load order) into display order for `mode`.
///
/// Type filters keep load order; they do not also reverse.
pub fn project(entries: &[MediaEntry], mode: SortMode) -> Vec<&MediaEntry> {
    match mode {
        SortMode::NewestFirst => entries.iter().rev().collect(),
        SortMode::OldestFirst => entries.iter().collect(),
        SortMode::PhotosOnly => entries.iter().filter(|e| !e.is_video()).collect(),
        SortMode::VideosOnly => entries.iter().filter(|e| e.is_video()).collect(),
    }
}

/// Computes a fast hash of the projected id sequence.
/// Any change to membership or order changes the fingerprint.
pub fn fingerprint<'a, I>(items: I) -> u64
where
    I: IntoIterator<Item = &'a MediaEntry>,
{
    let items = items.into_iter();
    let mut hasher_input = Vec::with_capacity(items.size_hint().0 * 16);

    for item in items {
        hasher_input.extend_from_slice(item.id.as_bytes());
    }

    xxh3_64(&hasher_input)
}
