//! Central application state and the interaction state machine.
//!
//! The controller has two user-observable modes, `Home` and `Filtered`,
//! driven by explicit [`UiMessage`] values rather than raw key events so the
//! transitions can be tested without a terminal. The catalog itself is
//! immutable once loaded; every filtering action rebuilds a [`FilterState`]
//! from the current control values and recomputes the result list.

use std::borrow::Cow;
use std::sync::Arc;

use ratatui::style::Style;
use tokio::time::Instant;

use crate::catalog::filter::{filter, FilterState};
use crate::catalog::registry::{self, Category};
use crate::catalog::types::{Item, LoadError};
use crate::theme::{StyleMap, ThemeVariant};

/// Fixed message shown in the content region when the catalog load fails.
/// A failed load is permanent for the session; there is no retry.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the tool catalog. Try again later.";

/// Maximum accepted search input length, in bytes.
pub const MAX_SEARCH_LENGTH: usize = 256;

// ============================================================================
// Catalog State
// ============================================================================

/// Lifecycle of the one-shot catalog load.
///
/// The renderer distinguishes all three states: a loading notice, the fixed
/// failure message, and the normal home/results views. `Ready` holds the
/// items behind an `Arc` — shared read-only, never mutated after load.
pub enum CatalogState {
    Loading,
    Ready(Arc<Vec<Item>>),
    Failed,
}

impl CatalogState {
    /// The loaded items, or an empty slice while loading/failed.
    pub fn items(&self) -> &[Item] {
        match self {
            CatalogState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }
}

// ============================================================================
// Modes and Messages
// ============================================================================

/// Current view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Landing view: one tile per registry category.
    Home,
    /// Results-list view for the active filter state.
    Filtered,
}

/// Events from background tasks.
pub enum AppEvent {
    /// The one-shot catalog load finished.
    CatalogLoaded(Result<Vec<Item>, LoadError>),
}

/// Semantic input messages consumed by the controller's transition function.
///
/// The UI layer translates key events into these; tests drive the state
/// machine with them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    /// Category chosen from the picker or a home tile. `None` means "all
    /// categories" (the selector's empty option).
    CategoryChanged(Option<String>),
    /// Search text committed (submit key). The term itself lives in
    /// `App::search_input`.
    SearchSubmitted,
    /// The clear-filters affordance was invoked.
    FiltersCleared,
    /// The return-home affordance was invoked.
    WentHome,
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    /// Catalog load lifecycle; read-only once `Ready`.
    pub catalog: CatalogState,
    pub mode: Mode,

    // Filter controls
    pub search_input: String,
    /// True while the search prompt captures keystrokes.
    pub search_mode: bool,
    /// Active category identifier, or `None` for all categories.
    pub selected_category: Option<String>,

    // Result view
    pub results: Vec<Item>,
    pub selected_result: usize,

    // Home view
    pub selected_tile: usize,

    // Overlays
    /// Category picker overlay: `Some(index)` while open, index 0 = "All".
    pub picker: Option<usize>,
    pub show_help: bool,

    // Chrome
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::Loading,
            mode: Mode::Home,
            search_input: String::new(),
            search_mode: false,
            selected_category: None,
            results: Vec::new(),
            selected_result: 0,
            selected_tile: 0,
            picker: None,
            show_help: false,
            status_message: None,
            needs_redraw: true,
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
        }
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant. Returns the new name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------
    // State machine
    // ------------------------------------------------------------------

    /// Apply one input message to the state machine.
    pub fn apply(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::CategoryChanged(category) => {
                self.selected_category = category;
                self.refilter();
            }
            UiMessage::SearchSubmitted => {
                self.refilter();
            }
            UiMessage::FiltersCleared | UiMessage::WentHome => {
                self.reset_filters();
            }
        }
        self.needs_redraw = true;
    }

    /// Snapshot the current control values as a `FilterState`.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search_input.trim().to_string(),
            category: self.selected_category.clone(),
        }
    }

    /// Whether the clear-filters affordance is shown. Recomputed from the
    /// live control values, so it tracks every input change and reset.
    pub fn clear_filters_visible(&self) -> bool {
        !self.search_input.trim().is_empty() || self.selected_category.is_some()
    }

    /// Title for the results view: the active category label, or a generic
    /// label when filtering by text only.
    pub fn results_title(&self) -> &str {
        match &self.selected_category {
            Some(id) => registry::by_id(id).map(|c| c.label).unwrap_or(id.as_str()),
            None => "Search results",
        }
    }

    fn refilter(&mut self) {
        let state = self.filter_state();
        if state.is_empty() {
            // Both controls empty means the home view, never an unfiltered
            // full list.
            self.results.clear();
            self.selected_result = 0;
            self.mode = Mode::Home;
            return;
        }
        self.results = filter(self.catalog.items(), &state);
        self.selected_result = 0;
        self.mode = Mode::Filtered;
    }

    fn reset_filters(&mut self) {
        self.search_input.clear();
        self.selected_category = None;
        self.results.clear();
        self.selected_result = 0;
        self.mode = Mode::Home;
    }

    // ------------------------------------------------------------------
    // Background events
    // ------------------------------------------------------------------

    /// Record the outcome of the one-shot catalog load.
    pub fn catalog_loaded(&mut self, result: Result<Vec<Item>, LoadError>) {
        match result {
            Ok(items) => {
                let count = items.len();
                self.catalog = CatalogState::Ready(Arc::new(items));
                // A filter applied while the load was in flight ran against
                // an empty catalog; recompute it against the real one.
                if !self.filter_state().is_empty() {
                    self.refilter();
                }
                self.set_status(format!("Loaded {} tools", count));
            }
            Err(e) => {
                tracing::error!(error = %e, "Catalog load failed");
                self.catalog = CatalogState::Failed;
            }
        }
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Navigate up in the current list (tiles or results).
    pub fn nav_up(&mut self) {
        match self.mode {
            Mode::Home => {
                self.selected_tile = self.selected_tile.saturating_sub(1);
            }
            Mode::Filtered => {
                self.selected_result = self.selected_result.saturating_sub(1);
            }
        }
    }

    /// Navigate down in the current list (tiles or results).
    pub fn nav_down(&mut self) {
        match self.mode {
            Mode::Home => {
                let max = registry::all().len().saturating_sub(1);
                self.selected_tile = self.selected_tile.saturating_add(1).min(max);
            }
            Mode::Filtered => {
                if !self.results.is_empty() {
                    let max = self.results.len() - 1;
                    self.selected_result = self.selected_result.saturating_add(1).min(max);
                }
            }
        }
    }

    /// The currently selected result (bounds-checked).
    pub fn selected_item(&self) -> Option<&Item> {
        self.results.get(self.selected_result)
    }

    /// The category under the home-tile cursor.
    pub fn selected_tile_category(&self) -> Option<&'static Category> {
        registry::all().get(self.selected_tile)
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Set status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{self, Duration};

    fn item(name: &str, description: &str, category: &str) -> Item {
        Item {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            link: format!("https://example.com/{}", name),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.catalog_loaded(Ok(vec![
            item("Acme Monitor", "social listening tool", "Social Listening"),
            item("PressWire", "press release distribution", "Press Mailing"),
            item("BrandGuard", "reputation monitoring", "Reputation"),
        ]));
        app
    }

    // State machine transitions

    #[test]
    fn initial_state_is_home_and_loading() {
        let app = App::new();
        assert_eq!(app.mode, Mode::Home);
        assert!(matches!(app.catalog, CatalogState::Loading));
        assert!(!app.clear_filters_visible());
    }

    #[test]
    fn category_change_enters_filtered_mode() {
        let mut app = loaded_app();
        app.apply(UiMessage::CategoryChanged(Some(
            "Social Listening".to_string(),
        )));

        assert_eq!(app.mode, Mode::Filtered);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].name, "Acme Monitor");
        assert_eq!(app.results_title(), "Social Listening");
        assert!(app.clear_filters_visible());
    }

    #[test]
    fn search_submit_enters_filtered_mode() {
        let mut app = loaded_app();
        app.search_input = "press".to_string();
        app.apply(UiMessage::SearchSubmitted);

        assert_eq!(app.mode, Mode::Filtered);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results_title(), "Search results");
    }

    #[test]
    fn submit_with_both_empty_shows_home_not_full_list() {
        let mut app = loaded_app();
        app.apply(UiMessage::SearchSubmitted);

        assert_eq!(app.mode, Mode::Home);
        assert!(app.results.is_empty());
    }

    #[test]
    fn selecting_all_categories_with_empty_search_returns_home() {
        let mut app = loaded_app();
        app.apply(UiMessage::CategoryChanged(Some("Reputation".to_string())));
        assert_eq!(app.mode, Mode::Filtered);

        app.apply(UiMessage::CategoryChanged(None));
        assert_eq!(app.mode, Mode::Home);
    }

    #[test]
    fn filtered_to_filtered_on_subsequent_changes() {
        let mut app = loaded_app();
        app.apply(UiMessage::CategoryChanged(Some("Reputation".to_string())));
        assert_eq!(app.results.len(), 1);

        app.search_input = "zzz".to_string();
        app.apply(UiMessage::SearchSubmitted);
        assert_eq!(app.mode, Mode::Filtered);
        assert!(app.results.is_empty()); // no-results, still Filtered
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut app = loaded_app();
        app.search_input = "monitor".to_string();
        app.selected_category = Some("Reputation".to_string());
        app.apply(UiMessage::SearchSubmitted);
        assert_eq!(app.mode, Mode::Filtered);

        app.apply(UiMessage::FiltersCleared);

        assert_eq!(app.mode, Mode::Home);
        assert!(app.search_input.is_empty());
        assert_eq!(app.selected_category, None);
        assert!(app.results.is_empty());
        assert!(!app.clear_filters_visible());
    }

    #[test]
    fn went_home_also_resets_filters() {
        let mut app = loaded_app();
        app.apply(UiMessage::CategoryChanged(Some("Reputation".to_string())));

        app.apply(UiMessage::WentHome);

        assert_eq!(app.mode, Mode::Home);
        assert_eq!(app.selected_category, None);
        assert!(!app.clear_filters_visible());
    }

    #[test]
    fn clear_affordance_tracks_either_control() {
        let mut app = loaded_app();
        assert!(!app.clear_filters_visible());

        app.search_input = "a".to_string();
        assert!(app.clear_filters_visible());

        app.search_input.clear();
        app.selected_category = Some("Reputation".to_string());
        assert!(app.clear_filters_visible());

        app.selected_category = None;
        assert!(!app.clear_filters_visible());
    }

    #[test]
    fn whitespace_only_search_counts_as_empty() {
        let mut app = loaded_app();
        app.search_input = "   ".to_string();
        assert!(!app.clear_filters_visible());

        app.apply(UiMessage::SearchSubmitted);
        assert_eq!(app.mode, Mode::Home);
    }

    // Catalog load outcomes

    #[test]
    fn load_failure_marks_catalog_failed() {
        let mut app = App::new();
        app.catalog_loaded(Err(crate::catalog::types::LoadError::TooLarge {
            size: 10,
            max: 1,
        }));
        assert!(matches!(app.catalog, CatalogState::Failed));
        assert!(app.catalog.items().is_empty());
    }

    #[test]
    fn filter_during_load_recomputes_on_completion() {
        let mut app = App::new();
        app.apply(UiMessage::CategoryChanged(Some(
            "Social Listening".to_string(),
        )));
        assert_eq!(app.mode, Mode::Filtered);
        assert!(app.results.is_empty());

        app.catalog_loaded(Ok(vec![
            item("Acme Monitor", "social listening tool", "Social Listening"),
            item("EchoTrack", "brand mention tracker", "Social Listening"),
            item("PressWire", "press release distribution", "Press Mailing"),
        ]));

        assert_eq!(app.mode, Mode::Filtered);
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn load_success_sets_status() {
        let app = loaded_app();
        assert!(app.catalog.is_ready());
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Loaded 3 tools");
    }

    // Navigation

    #[test]
    fn tile_navigation_clamps_to_registry() {
        let mut app = App::new();
        app.nav_up();
        assert_eq!(app.selected_tile, 0);

        for _ in 0..20 {
            app.nav_down();
        }
        assert_eq!(
            app.selected_tile,
            crate::catalog::registry::all().len() - 1
        );
    }

    #[test]
    fn result_navigation_clamps_to_results() {
        let mut app = loaded_app();
        app.apply(UiMessage::SearchSubmitted); // empty, stays home
        app.search_input = "e".to_string(); // matches all three
        app.apply(UiMessage::SearchSubmitted);
        assert_eq!(app.mode, Mode::Filtered);

        for _ in 0..10 {
            app.nav_down();
        }
        assert_eq!(app.selected_result, app.results.len() - 1);

        for _ in 0..10 {
            app.nav_up();
        }
        assert_eq!(app.selected_result, 0);
    }

    #[test]
    fn selected_item_is_bounds_checked() {
        let app = App::new();
        assert!(app.selected_item().is_none());
    }

    // Status message expiry with time control

    #[tokio::test]
    async fn status_expires_after_3_seconds() {
        let mut app = App::new();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none());
    }
}
