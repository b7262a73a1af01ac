use anyhow::Result;
use chrono::Local;
use tracing::info;

use photoview::state::SelectButton;
use photoview::{
    Destination, GeometrySnapshot, LibrarySession, SampleLibrary, SessionConfig, SortMode,
    TimelineFilter,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("photoview=info".parse()?),
        )
        .init();

    let mut session = LibrarySession::with_source(&SampleLibrary, SessionConfig::default());
    let events = session.subscribe();
    let today = Local::now().date_naive();

    for mode in SortMode::ALL {
        session.on_sort_selected(mode);
        info!(
            "{:<12} {:>3} items, subtitle {:?}",
            mode.label(),
            session.current_items().len(),
            session.title_subtitle(today)
        );
    }
    session.on_sort_selected(SortMode::NewestFirst);

    // Scroll from the top of the grid down to the bottom edge
    let content_height = 2400.0;
    let viewport_height = 800.0;
    for offset in (0..=16).map(|step| step as f64 * 100.0) {
        session.on_scroll_geometry(GeometrySnapshot::new(
            content_height,
            viewport_height,
            offset,
        ));
    }
    info!("Chrome at bottom: {:?}", session.chrome().bottom_slot);

    session.on_filter_selected(TimelineFilter::Month);
    session.on_scroll_geometry(GeometrySnapshot::new(content_height, viewport_height, 0.0));
    info!("Chrome at top: {:?}", session.chrome().bottom_slot);

    let items = session.current_items();
    session.on_toggle_select_mode();
    for entry in items.iter().take(3) {
        session.on_tap(entry.id);
    }
    info!(
        "Selected {} entries, button {:?}",
        session.selection_count(),
        session.chrome().select_button.map(|b| b.label())
    );
    session.on_toggle_select_mode();
    if session.chrome().select_button == Some(SelectButton::Select) {
        info!("Select mode off, selection cleared");
    }

    if let Some(entry) = items.first() {
        session.on_navigate(Destination::root());
        session.on_tap(entry.id);
        info!(
            "Opened detail {:?}, duration {:?}",
            session.current_path().last(),
            entry.kind.duration_label()
        );
        session.on_back();
        session.on_back();
        session.on_back();
    }

    info!("Session emitted {} change events", events.try_iter().count());
    Ok(())
}
