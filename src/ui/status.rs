//! One-line status bar.
//!
//! Priority order: the live search prompt, then a transient status message,
//! then mode-specific key hints. The clear-filters affordance appears as a
//! highlighted segment exactly when a filter is active.

use crate::app::{App, Mode};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let bar_style = app.style("status_bar");

    if app.search_mode {
        let prompt = Line::from(vec![
            Span::styled(format!(" /{}\u{2588}", app.search_input), app.style("search_prompt")),
            Span::styled("  (Enter) submit  (Esc) cancel", bar_style),
        ]);
        f.render_widget(Paragraph::new(prompt).style(bar_style), area);
        return;
    }

    if let Some((msg, _)) = &app.status_message {
        let line = Line::styled(format!(" {}", msg), bar_style);
        f.render_widget(Paragraph::new(line).style(bar_style), area);
        return;
    }

    let hints = match app.mode {
        Mode::Home => " (j/k) move  (Enter) open category  (/) search  (c) category  (?) help  (q) quit",
        Mode::Filtered => " (j/k) move  (Enter/o) open link  (/) search  (c) category  (h) home  (q) quit",
    };

    let mut spans = vec![Span::styled(hints, bar_style)];
    if app.clear_filters_visible() {
        spans.push(Span::styled("  (x) clear filters ", app.style("clear_hint")));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);
}
