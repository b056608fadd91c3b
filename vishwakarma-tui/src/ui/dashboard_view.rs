use super::utils::{format_created, input_spans, key_hints};
use super::*;
use crate::types::ProjectType;

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect) {
    let show_filter = app.dashboard.filtering || !app.dashboard.filter_input.value.is_empty();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(if show_filter { 3 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(body);

    if show_filter {
        render_filter(frame, app, layout[0]);
    }
    render_project_list(frame, app, layout[1]);

    let hints = if app.dashboard.filtering {
        key_hints(&[("Enter", "Keep filter"), ("Esc", "Clear filter")])
    } else {
        key_hints(&[
            ("Enter", "Open"),
            ("n", "New project"),
            ("d", "Delete"),
            ("r", "Reload"),
            ("/", "Filter"),
            ("q", "Quit"),
        ])
    };
    let controls = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, layout[2]);
}

fn render_filter(frame: &mut Frame, app: &App, area: Rect) {
    let (before, after) = app.dashboard.filter_input.split_at_cursor();
    let mut spans = vec![Span::styled("/ ", Style::default().fg(Color::Yellow))];
    spans.extend(input_spans(before, after, app.dashboard.filtering));

    let border = if app.dashboard.filtering {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let filter = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Filter "),
    );
    frame.render_widget(filter, area);
}

fn type_color(project_type: ProjectType) -> Color {
    match project_type {
        ProjectType::GrowBusiness => Color::Green,
        ProjectType::MarketEntry => Color::Cyan,
    }
}

fn render_project_list(frame: &mut Frame, app: &App, area: Rect) {
    let projects = app.visible_projects();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" Projects ({}) ", projects.len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));

    if projects.is_empty() {
        let message = if app.store.is_empty() {
            "No projects yet. Press n to create your first project."
        } else {
            "No projects match the filter."
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    project.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", project.project_type),
                    Style::default().fg(type_color(project.project_type)),
                ),
            ])];
            if !project.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    project.description.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("Created: {}", format_created(project.created_date)),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::raw(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().bg(Color::Rgb(30, 40, 50)));
    let mut state = ListState::default().with_selected(Some(app.dashboard.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
