//! Application event handling.
//!
//! The only background task is the one-shot catalog load; its completion
//! arrives here and is applied to the application state.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CatalogLoaded(result) => {
            if let Ok(items) = &result {
                tracing::debug!(count = items.len(), "Applying loaded catalog");
            }
            app.catalog_loaded(result);
        }
    }
}
