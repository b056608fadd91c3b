use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use time::macros::format_description;
use time::Date;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// "Oct 16, 2026"
pub fn format_created(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

/// Parse `#RRGGBB`; anything else renders white.
pub fn hex_color(hex: &str) -> Color {
    hex.parse::<Color>().unwrap_or(Color::White)
}

/// Key hint pairs, e.g. `[("Enter", "Open"), ("q", "Quit")]`.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {}  ", label)));
    }
    spans
}

/// Text before and after the cursor with a block cursor drawn between.
pub fn input_spans(before: &str, after: &str, focused: bool) -> Vec<Span<'static>> {
    let text = Style::default().fg(Color::White);
    if !focused {
        return vec![Span::styled(format!("{}{}", before, after), text)];
    }
    vec![
        Span::styled(before.to_string(), text),
        Span::styled("█", Style::default().fg(Color::Yellow)),
        Span::styled(after.to_string(), text),
    ]
}
