use super::utils::{centered_rect, input_spans, key_hints};
use super::*;
use crate::app::{mask_key, ApiKeyField};

pub fn render_api_key_dialog(frame: &mut Frame, app: &App) {
    let Some(form) = app.api_keys.form.as_ref() else {
        return;
    };

    let area = centered_rect(64, 20, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Connect at least one marketplace to view statistics.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Keys stay on this machine and are discarded on exit.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
    ];

    for field in ApiKeyField::ALL {
        let focused = form.focused == field;
        let label_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (before, after) = form.input(field).split_at_cursor();
        let mut spans = vec![Span::styled(format!("{:<12}", field.label()), label_style)];
        spans.extend(input_spans(before, after, focused));
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    if form.custom_keys().is_empty() {
        lines.push(Line::from(Span::styled(
            "No custom keys added",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let mut chips = vec![Span::styled("Custom: ", Style::default().fg(Color::DarkGray))];
        for key in form.custom_keys() {
            chips.push(Span::styled(
                format!("[{}] ", mask_key(key)),
                Style::default().fg(Color::Cyan),
            ));
        }
        lines.push(Line::from(chips));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(key_hints(&[
        ("Tab", "Next field"),
        ("Enter", "Save / add custom"),
        ("Esc", "Cancel"),
    ])));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " API Keys ",
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::new(2, 2, 1, 0)),
    );
    frame.render_widget(paragraph, area);
}
