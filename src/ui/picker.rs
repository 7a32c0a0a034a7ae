//! Category picker overlay.
//!
//! A centered modal listing "All categories" followed by every registry
//! entry. Selecting an entry applies it as the category filter; "All"
//! clears it.

use crate::app::App;
use crate::catalog::registry;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App) {
    let Some(selected) = app.picker else { return };

    let categories = registry::all();
    // Options plus border and hint line.
    let height = (categories.len() + 4) as u16;
    let area = centered_rect(36, height, f.area());

    let mut lines: Vec<Line> = Vec::with_capacity(categories.len() + 2);
    for (i, label) in std::iter::once("All categories")
        .chain(categories.iter().map(|c| c.label))
        .enumerate()
    {
        let (marker, style) = if i == selected {
            ("> ", app.style("picker_selected"))
        } else {
            ("  ", app.style("picker_normal"))
        };
        lines.push(Line::styled(format!("{}{}", marker, label), style));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " (Enter) apply  (Esc) cancel",
        app.style("tile_hint"),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(" Filter by Category ");

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// A centered rect of fixed width/height, clamped to the frame.
fn centered_rect(width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(frame.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(frame);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(frame.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
