//! Input handling for the TUI.
//!
//! Key events are translated into [`UiMessage`] values and applied to the
//! controller; direct view concerns (navigation, overlays, opening links)
//! are handled in place. Overlays capture all keys while visible.

use crate::app::{App, Mode, UiMessage, MAX_SEARCH_LENGTH};
use crate::catalog::registry;
use crate::util::validate_link_for_open;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on current mode and view.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // Ctrl+C always quits, regardless of mode.
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Action::Quit);
    }

    // Overlays capture all keys when visible.
    if app.show_help {
        handle_help_input(app, code);
        return Ok(Action::Continue);
    }
    if app.picker.is_some() {
        handle_picker_input(app, code);
        return Ok(Action::Continue);
    }
    if app.search_mode {
        handle_search_input(app, code);
        return Ok(Action::Continue);
    }

    handle_browse_input(app, code)
}

/// Handle input while the help overlay is visible.
fn handle_help_input(app: &mut App, code: KeyCode) {
    if matches!(
        code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.show_help = false;
    }
}

/// Handle input while the category picker overlay is visible.
///
/// Index 0 is "All categories"; indices 1..=N map to registry entries.
fn handle_picker_input(app: &mut App, code: KeyCode) {
    let Some(selected) = app.picker else { return };
    let max = registry::all().len(); // inclusive: 0..=len

    match code {
        KeyCode::Esc => {
            app.picker = None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.picker = Some(selected.saturating_add(1).min(max));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.picker = Some(selected.saturating_sub(1));
        }
        KeyCode::Enter => {
            app.picker = None;
            let category = if selected == 0 {
                None
            } else {
                registry::all()
                    .get(selected - 1)
                    .map(|c| c.id.to_string())
            };
            app.apply(UiMessage::CategoryChanged(category));
        }
        _ => {}
    }
}

/// Handle input while the search prompt captures keystrokes.
fn handle_search_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            // Cancel the prompt; the typed text stays in the control until
            // submitted or cleared, like any search box.
            app.search_mode = false;
        }
        KeyCode::Enter => {
            app.search_mode = false;
            app.apply(UiMessage::SearchSubmitted);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            // Byte-accurate check so a multibyte char never overshoots the cap.
            if app.search_input.len() + c.len_utf8() <= MAX_SEARCH_LENGTH {
                app.search_input.push(c);
            }
        }
        _ => {}
    }
}

/// Handle input in the home and results views.
fn handle_browse_input(app: &mut App, code: KeyCode) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('/') => {
            app.search_mode = true;
        }
        KeyCode::Char('c') => {
            // Open the picker preselected on the active category.
            let current = app
                .selected_category
                .as_deref()
                .and_then(|id| registry::all().iter().position(|c| c.id == id))
                .map(|idx| idx + 1)
                .unwrap_or(0);
            app.picker = Some(current);
        }
        KeyCode::Char('x') => {
            if app.clear_filters_visible() {
                app.apply(UiMessage::FiltersCleared);
            }
        }
        KeyCode::Char('h') | KeyCode::Esc => {
            app.apply(UiMessage::WentHome);
        }
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),
        KeyCode::Enter => match app.mode {
            Mode::Home => {
                // Activating a tile selects its category.
                if let Some(cat) = app.selected_tile_category() {
                    app.apply(UiMessage::CategoryChanged(Some(cat.id.to_string())));
                }
            }
            Mode::Filtered => open_selected_link(app),
        },
        KeyCode::Char('o') => {
            if app.mode == Mode::Filtered {
                open_selected_link(app);
            }
        }
        _ => {}
    }
    Ok(Action::Continue)
}

/// Open the selected result's link in the system browser.
///
/// The link comes from catalog data, so it is validated before being handed
/// to the OS opener.
fn open_selected_link(app: &mut App) {
    let Some(item) = app.selected_item() else {
        return;
    };
    let link = item.link.clone();
    let name = item.name.clone();

    if let Err(e) = validate_link_for_open(&link) {
        app.set_status(e);
    } else if let Err(e) = open::that(&link) {
        app.set_status(format!("Failed to open browser: {}", e));
    } else {
        app.set_status(format!("Opened {}", name));
    }
}
