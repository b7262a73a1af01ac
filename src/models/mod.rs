pub mod catalog;
pub mod media_entry;
pub mod sample;
pub mod sort;

pub use catalog::*;
pub use media_entry::*;
pub use sample::*;
pub use sort::{fingerprint, project, SortMode};
