//! View state for the media grid.
//!
//! - `SelectionController` - select mode and picked entries
//! - `ScrollPositionTracker` - edge-triggered at-bottom signal
//! - `TimelineFilterController` - year/month/all chrome routing
//! - `NavigationController` - destination stack and search text
//! - `LibrarySession` - owns all of the above for one grid

pub mod chrome;
pub mod navigation;
pub mod scroll;
pub mod selection;
pub mod session;
pub mod timeline;

pub use chrome::{compose, BottomSlot, Chrome, LibraryTab, SelectButton};
pub use navigation::{Destination, NavigationController, NavigationPath, Page};
pub use scroll::{GeometrySnapshot, ScrollPositionTracker};
pub use selection::SelectionController;
pub use session::{LibrarySession, SessionEvent};
pub use timeline::{TimelineFilter, TimelineFilterController};
