//! Help overlay listing every keybinding.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, Up/Down", "Move selection"),
    ("Enter", "Open category tile / open tool link"),
    ("o", "Open selected tool link"),
    ("/", "Search (Enter submits, Esc cancels)"),
    ("c", "Pick a category filter"),
    ("x", "Clear active filters"),
    ("h, Esc", "Return home"),
    ("t", "Cycle theme"),
    ("?", "Toggle this help"),
    ("q, Ctrl+C", "Quit"),
];

pub(super) fn render(f: &mut Frame, app: &App) {
    let height = (BINDINGS.len() + 4) as u16;
    let area = centered_rect(46, height, f.area());

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", key), app.style("tile_icon")),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " (Esc/q/?) close",
        app.style("tile_hint"),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(" Help ");

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

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

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(frame.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
