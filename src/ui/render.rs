//! Render functions for the TUI.
//!
//! Dispatches to the appropriate view based on catalog state and controller
//! mode. Every frame repaints the whole content region; the catalog is
//! small and ratatui is immediate-mode, so there is no incremental update.

use crate::app::{App, CatalogState, Mode, LOAD_FAILURE_MESSAGE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{help, home, picker, results, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 50;
pub(super) const MIN_HEIGHT: u16 = 10;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for a usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Content region above a one-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match &app.catalog {
        CatalogState::Loading => render_loading(f, app, chunks[0]),
        CatalogState::Failed => render_load_failure(f, app, chunks[0]),
        CatalogState::Ready(_) => match app.mode {
            Mode::Home => home::render(f, app, chunks[0]),
            Mode::Filtered => results::render(f, app, chunks[0]),
        },
    }

    status::render(f, app, chunks[1]);

    // Overlays on top of any view when active
    if app.show_help {
        help::render(f, app);
    }
    if app.picker.is_some() {
        picker::render(f, app);
    }
}

/// Render the transient loading notice shown until the catalog arrives.
fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new("Loading catalog...")
        .alignment(Alignment::Center)
        .style(app.style("loading"))
        .block(content_block(app));
    f.render_widget(paragraph, area);
}

/// Render the fixed load-failure message. No tiles or rows are shown; a
/// failed load is permanent for the session.
fn render_load_failure(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(LOAD_FAILURE_MESSAGE)
        .alignment(Alignment::Center)
        .style(app.style("load_error"))
        .block(content_block(app));
    f.render_widget(paragraph, area);
}

fn content_block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(" toolshelf ")
}
