//! Home view: the category tile grid.
//!
//! Renders one tile per registry category in a two-column grid, with the
//! middle entry of an odd-sized registry centered on its own row (the fixed
//! five categories lay out as 2-1-2). The selected tile gets a highlighted
//! border; activating it filters the catalog by that category.

use crate::app::App;
use crate::catalog::registry::{self, Category};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(" Categories ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let categories = registry::all();
    let rows = tile_rows(categories.len());
    if rows.is_empty() || inner.height == 0 {
        return;
    }

    let row_constraints: Vec<Constraint> = rows
        .iter()
        .map(|_| Constraint::Ratio(1, rows.len() as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let col_areas = match row.len() {
            1 => {
                // Center a lone tile at half width.
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(25),
                        Constraint::Percentage(50),
                        Constraint::Percentage(25),
                    ])
                    .split(*row_area);
                vec![cols[1]]
            }
            _ => Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area)
                .to_vec(),
        };

        for (&idx, tile_area) in row.iter().zip(col_areas.iter()) {
            render_tile(f, app, &categories[idx], idx == app.selected_tile, *tile_area);
        }
    }
}

fn render_tile(f: &mut Frame, app: &App, category: &Category, selected: bool, area: Rect) {
    let border_style = if selected {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };
    let label_style = if selected {
        app.style("tile_selected")
    } else {
        app.style("tile_normal")
    };

    let mut lines = vec![
        Line::styled(icon_glyph(category.icon), app.style("tile_icon")),
        Line::styled(category.label, label_style),
    ];
    if area.height >= 6 {
        lines.push(Line::raw(""));
        lines.push(Line::styled("(Enter) browse", app.style("tile_hint")));
    }

    let tile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(tile, area);
}

/// Map a registry icon identifier to a terminal glyph.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "scales" => "\u{2696}",
        "envelope" => "\u{2709}",
        "newspaper" => "\u{1F4F0}",
        "headphones" => "\u{1F3A7}",
        "people" => "\u{1F465}",
        _ => "\u{2022}",
    }
}

/// Group tile indices into display rows: pairs of two, with the middle entry
/// of an odd-sized registry on its own row.
fn tile_rows(n: usize) -> Vec<Vec<usize>> {
    let mid = if n % 2 == 1 { Some(n / 2) } else { None };
    let mut rows = Vec::new();
    let mut i = 0;
    while i < n {
        if Some(i) == mid {
            rows.push(vec![i]);
            i += 1;
        } else if i + 1 < n && Some(i + 1) != mid {
            rows.push(vec![i, i + 1]);
            i += 2;
        } else {
            rows.push(vec![i]);
            i += 1;
        }
    }
    rows
}
