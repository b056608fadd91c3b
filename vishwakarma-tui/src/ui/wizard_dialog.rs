use super::charts::render_chart;
use super::utils::{centered_rect, input_spans, key_hints};
use super::*;
use crate::app::{DetailsField, Wizard, WizardStep};
use crate::types::ProjectType;

pub fn render_wizard_dialog(frame: &mut Frame, app: &App) {
    let Some(wizard) = app.wizard.as_ref() else {
        return;
    };

    let full = frame.area();
    let area = centered_rect(
        full.width.saturating_sub(8).min(100),
        full.height.saturating_sub(4).min(32),
        full,
    );
    frame.render_widget(Clear, area);

    let (title, hints) = match wizard.step() {
        WizardStep::TypeSelection => (
            " New Project · Choose a type ",
            key_hints(&[
                ("↑/↓", "Move"),
                ("Space", "Select"),
                ("Enter", "Continue"),
                ("Esc", "Cancel"),
            ]),
        ),
        WizardStep::BasicDetails => (
            " New Project · Basic details ",
            key_hints(&[
                ("Tab", "Switch field"),
                ("Enter", "Continue"),
                ("Ctrl+B", "Back"),
                ("Esc", "Cancel"),
            ]),
        ),
        WizardStep::Questioning { answered: false, .. } => (
            " New Project · Questions ",
            key_hints(&[("Enter", "Submit answer"), ("Esc", "Cancel")]),
        ),
        WizardStep::Questioning { answered: true, .. } if wizard.is_last_question() => (
            " New Project · Questions ",
            key_hints(&[("Enter", "Create project"), ("Esc", "Cancel")]),
        ),
        WizardStep::Questioning { answered: true, .. } => (
            " New Project · Questions ",
            key_hints(&[("Enter", "Next question"), ("Esc", "Cancel")]),
        ),
        WizardStep::Submitting => (" New Project · Creating ", key_hints(&[("Esc", "Close")])),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(title, Style::default().fg(Color::Cyan)))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    match wizard.step() {
        WizardStep::TypeSelection => render_type_selection(frame, wizard, split[0]),
        WizardStep::BasicDetails => render_details(frame, wizard, split[0]),
        WizardStep::Questioning { index, .. } => render_question(frame, wizard, index, split[0]),
        WizardStep::Submitting => {
            frame.render_widget(
                Paragraph::new("Creating your project...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow)),
                split[0],
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        split[1],
    );
}

fn render_type_selection(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let selected = wizard.draft().project_type;
    let mut lines = Vec::new();
    for (i, project_type) in ProjectType::ALL.iter().enumerate() {
        let under_cursor = i == wizard.type_cursor;
        let marker = if selected == Some(*project_type) {
            "(•) "
        } else {
            "( ) "
        };
        let style = if under_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(if under_cursor { "▶ " } else { "  " }, style),
            Span::styled(marker, style),
            Span::styled(project_type.label(), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", project_type.blurb()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_details(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let name_focused = wizard.details_field == DetailsField::Name;
    render_input(frame, fields[0], " Project name ", &wizard.name_input, name_focused);
    render_input(
        frame,
        fields[1],
        " Description (optional) ",
        &wizard.description_input,
        !name_focused,
    );
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    input: &crate::app::TextInput,
    focused: bool,
) {
    let (before, after) = input.split_at_cursor();
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let paragraph = Paragraph::new(Line::from(input_spans(before, after, focused)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title),
        );
    frame.render_widget(paragraph, area);
}

fn render_question(frame: &mut Frame, wizard: &Wizard, index: usize, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let total = wizard.question_count();
    let filled = index + 1;
    let width = layout[0].width.saturating_sub(12) as usize;
    let done = width * filled / total.max(1);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("█".repeat(done), Style::default().fg(Color::Cyan)),
            Span::styled(
                "░".repeat(width.saturating_sub(done)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("  {}/{}", filled, total)),
        ])),
        layout[0],
    );

    if let Some(question) = wizard.current_question() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                question,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .wrap(Wrap { trim: true }),
            layout[1],
        );
    }

    match wizard.current_analysis() {
        None => render_input(frame, layout[2], " Your answer ", &wizard.answer_input, true),
        Some(analysis) => {
            let answer = wizard
                .draft()
                .answers
                .get(index)
                .cloned()
                .unwrap_or_default();
            frame.render_widget(
                Paragraph::new(Span::styled(answer, Style::default().fg(Color::Gray)))
                    .block(Block::default().borders(Borders::ALL).title(" Your answer ")),
                layout[2],
            );

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", analysis.title));
            let inner = block.inner(layout[3]);
            frame.render_widget(block, layout[3]);
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(0)])
                .split(inner);
            frame.render_widget(
                Paragraph::new(analysis.content)
                    .wrap(Wrap { trim: true })
                    .style(Style::default().fg(Color::Gray)),
                split[0],
            );
            render_chart(frame, split[1], &analysis.chart);
        }
    }
}
