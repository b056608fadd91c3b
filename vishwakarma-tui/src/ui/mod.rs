use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

mod api_key_dialog;
mod charts;
mod dashboard_view;
mod delete_dialog;
mod project_view;
pub(super) mod utils;
mod wizard_dialog;

/// Draw the whole screen. Only the throbber animation state is mutable.
pub fn render(frame: &mut Frame, app: &App, throbber_state: &mut ThrobberState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, root[0], throbber_state);

    let body = root[1];
    match app.views.active_view() {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, body),
        View::ProjectDetail => project_view::render_project_view(frame, app, body),
    }

    render_status_bar(frame, app, root[2]);

    // Overlays, bottom to top
    if app.api_keys.is_prompting() {
        api_key_dialog::render_api_key_dialog(frame, app);
    }
    if app.wizard.is_some() {
        wizard_dialog::render_wizard_dialog(frame, app);
    }
    if app.delete_context.is_some() {
        delete_dialog::render_delete_confirm_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, throbber_state: &mut ThrobberState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, cols[0], throbber_state);

    let mut spans = vec![Span::styled(
        "Vishwakarma",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(project) = app.active_project() {
        spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            project.name.clone(),
            Style::default().fg(Color::White),
        ));
    }
    if app.dev_mode {
        spans.push(Span::styled(
            "  [dev]",
            Style::default().fg(Color::Magenta),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), cols[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            format!("{} projects", app.store.len()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_app() -> App {
        let mut app = App::new(&AppConfig::default(), true);
        let project = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Spice Route",
            "type": "New Market Entry",
            "description": null,
            "created_date": "2026-10-16",
            "answers": ["a", "b", "c", "d", "e"],
        }))
        .unwrap();
        app.apply_projects_loaded(Ok(vec![project]));
        app
    }

    #[test]
    fn dashboard_lists_cards() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut throbber = ThrobberState::default();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Spice Route"));
        assert!(text.contains("New Market Entry"));
        assert!(text.contains("Created: Oct 16, 2026"));
    }

    #[test]
    fn empty_dashboard_prompts_to_create() {
        let app = App::new(&AppConfig::default(), false);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut throbber = ThrobberState::default();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();
        assert!(buffer_text(&terminal).contains("No projects yet"));
    }

    #[test]
    fn statistics_show_placeholder_until_keys_saved() {
        use crate::app::{Segment, TextInput};

        let mut app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut throbber = ThrobberState::default();

        app.open_project(4);
        app.select_segment(Segment::Statistics);
        app.api_keys.dismiss();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Press k to enter your keys."));
        assert!(!text.contains("Customer Segments"));

        app.api_keys.prompt();
        app.api_keys.form.as_mut().unwrap().youtube = TextInput::from_str("yt-123456");
        app.save_api_keys();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(!text.contains("Press k to enter your keys."));
        for title in ["Sales", "Marketing", "Platforms & Campaigns", "Customer Segments"] {
            assert!(text.contains(title), "missing panel {title}");
        }
    }

    #[test]
    fn every_segment_and_overlay_renders() {
        use crate::app::Segment;

        let mut app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut throbber = ThrobberState::default();

        app.open_project(4);
        for segment in Segment::ALL {
            app.select_segment(segment);
            terminal
                .draw(|f| render(f, &app, &mut throbber))
                .unwrap();
        }
        assert!(app.api_keys.is_prompting());
        assert!(buffer_text(&terminal).contains("API Keys"));

        app.api_keys.dismiss();
        app.open_wizard();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Grow a Business"));

        app.cancel_wizard();
        app.request_delete();
        terminal
            .draw(|f| render(f, &app, &mut throbber))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Delete Project?"));
    }
}
