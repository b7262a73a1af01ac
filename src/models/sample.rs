//! Built-in sample library shown when no real media source is attached.

use crate::error::LoadError;
use crate::models::{CatalogSource, Gradient, MediaEntry};

/// (video duration in seconds, gradient start, gradient end), in load order.
const SAMPLE_ITEMS: &[(Option<u32>, &str, &str)] = &[
    (None, "667eea", "764ba2"),
    (None, "f093fb", "f5576c"),
    (Some(15), "4facfe", "00f2fe"),
    (None, "43e97b", "38f9d7"),
    (None, "fa709a", "fee140"),
    (None, "30cfd0", "330867"),
    (Some(30), "a8edea", "fed6e3"),
    (None, "ff9a9e", "fecfef"),
    (None, "fbc2eb", "a6c1ee"),
    (Some(83), "fdcbf1", "e6dee9"),
    (None, "a1c4fd", "c2e9fb"),
    (None, "d299c2", "fef9d7"),
    (None, "ffecd2", "fcb69f"),
    (Some(45), "ff6e7f", "bfe9ff"),
    (None, "e0c3fc", "8ec5fc"),
    (None, "f093fb", "f5576c"),
    (None, "4facfe", "00f2fe"),
    (Some(130), "43e97b", "38f9d7"),
    (None, "fa709a", "fee140"),
    (None, "30cfd0", "330867"),
    (None, "a8edea", "fed6e3"),
    (Some(52), "ff9a9e", "fecfef"),
    (None, "fbc2eb", "a6c1ee"),
    (None, "fdcbf1", "e6dee9"),
    (None, "a1c4fd", "c2e9fb"),
    (None, "d299c2", "fef9d7"),
    (None, "ffecd2", "fcb69f"),
    (None, "667eea", "764ba2"),
    (Some(18), "ff6a00", "ee0979"),
    (None, "00c6ff", "0072ff"),
    (None, "f857a6", "ff5858"),
    (None, "2af598", "009efd"),
    (Some(65), "fa709a", "fee140"),
    (None, "9890e3", "b1f4cf"),
    (None, "eea2a2", "bbc1bf"),
    (None, "56ccf2", "2f80ed"),
    (Some(42), "f5af19", "f12711"),
    (None, "c471f5", "fa71cd"),
    (None, "3c3b3f", "605c3c"),
    (None, "f2709c", "ff9472"),
    (Some(95), "667eea", "764ba2"),
    (None, "fdfbfb", "ebedee"),
    (None, "4facfe", "00f2fe"),
    (None, "43e97b", "38f9d7"),
    (Some(28), "fa709a", "fee140"),
    (None, "30cfd0", "330867"),
    (None, "a8edea", "fed6e3"),
    (None, "ff9a9e", "fecfef"),
    (Some(73), "fbc2eb", "a6c1ee"),
    (None, "fdcbf1", "e6dee9"),
    (None, "a1c4fd", "c2e9fb"),
    (None, "d299c2", "fef9d7"),
    (Some(110), "ffecd2", "fcb69f"),
    (None, "ff6e7f", "bfe9ff"),
    (None, "e0c3fc", "8ec5fc"),
    (None, "f093fb", "f5576c"),
    (Some(37), "4facfe", "00f2fe"),
    (None, "43e97b", "38f9d7"),
    (None, "fa709a", "fee140"),
    (None, "30cfd0", "330867"),
];

/// Sample data set of gradient placeholders. Every load mints fresh ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleLibrary;

impl SampleLibrary {
    pub fn entries() -> Vec<MediaEntry> {
        SAMPLE_ITEMS
            .iter()
            .map(|&(duration, start, end)| {
                let gradient = Gradient::from_hex(start, end);
                match duration {
                    Some(secs) => MediaEntry::video(secs, gradient),
                    None => MediaEntry::photo(gradient),
                }
            })
            .collect()
    }
}

impl CatalogSource for SampleLibrary {
    fn load(&self) -> Result<Vec<MediaEntry>, LoadError> {
        Ok(Self::entries())
    }
}
