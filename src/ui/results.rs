//! Results view: the filtered catalog list.
//!
//! The title names the active category (or "Search results" for a text-only
//! filter) together with the match count. An empty result set renders an
//! in-list placeholder rather than a blank panel, distinct from the
//! load-failure view.

use crate::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} ({}) ", app.results_title(), app.results.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(title)
        .title_style(app.style("results_title"));

    if app.results.is_empty() {
        let placeholder = List::new([ListItem::new(Line::styled(
            "No tools match the current filters.",
            app.style("placeholder"),
        ))])
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    // Room inside the border plus the two-space indent.
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let name_style = if i == app.selected_result {
                app.style("result_selected")
            } else {
                app.style("result_name")
            };
            let lines = vec![
                Line::styled(item.name.clone(), name_style),
                Line::styled(
                    format!("  {}", truncate_to_width(&item.description, text_width)),
                    app.style("result_description"),
                ),
                Line::styled(
                    format!("  {}", truncate_to_width(&item.link, text_width)),
                    app.style("result_link"),
                ),
                Line::raw(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.selected_result));
    f.render_stateful_widget(list, area, &mut state);
}
