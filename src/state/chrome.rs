//! Toolbar composition.
//!
//! Which affordances are on screen is a pure function of the tab, the select
//! mode, the timeline filter and the at-bottom signal. Nothing here holds
//! state.

use crate::state::{TimelineFilter, TimelineFilterController};

/// Bottom tabs of the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LibraryTab {
    #[default]
    Library,
    Collections,
}

impl LibraryTab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::Collections => "Collections",
        }
    }

    pub fn symbol_name(&self) -> &'static str {
        match self {
            Self::Library => "photo.on.rectangle",
            Self::Collections => "square.stack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectButton {
    Select,
    Cancel,
}

impl SelectButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Cancel => "Cancel",
        }
    }
}

/// The single bottom slot holds either the timeline filter bar or the tab switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomSlot {
    TimelineFilter(TimelineFilter),
    TabSwitcher(LibraryTab),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub title: &'static str,
    pub sort_menu: bool,
    pub select_button: Option<SelectButton>,
    pub bottom_slot: BottomSlot,
}

pub fn compose(
    tab: LibraryTab,
    selection_active: bool,
    filter: TimelineFilter,
    at_bottom: bool,
) -> Chrome {
    let on_grid = tab == LibraryTab::Library;

    let select_button = on_grid.then_some(if selection_active {
        SelectButton::Cancel
    } else {
        SelectButton::Select
    });

    let bottom_slot = if TimelineFilterController::is_visible(tab, at_bottom) {
        BottomSlot::TimelineFilter(filter)
    } else {
        BottomSlot::TabSwitcher(tab)
    };

    Chrome {
        title: tab.title(),
        sort_menu: on_grid,
        select_button,
        bottom_slot,
    }
}
