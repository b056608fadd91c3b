use super::charts::render_chart;
use super::utils::{format_created, input_spans, key_hints};
use super::*;
use crate::app::{ChatRole, Segment};
use crate::content::{self, Metric};
use crate::types::Project;

pub fn render_project_view(frame: &mut Frame, app: &App, body: Rect) {
    let Some(project) = app.active_project() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(body);

    render_tabs(frame, app, layout[0]);

    let content_area = layout[1];
    match app.views.active_segment() {
        Segment::Description => render_description(frame, project, content_area),
        Segment::Analysis => render_analysis(frame, app, content_area),
        Segment::Statistics => render_statistics(frame, app, content_area),
        Segment::Chat => render_chat(frame, app, content_area),
    }

    let hints = match app.views.active_segment() {
        Segment::Chat => key_hints(&[
            ("Enter", "Send"),
            ("Ctrl+V", "Suggest question"),
            ("Ctrl+L", "Clear chat"),
            ("Tab", "Next tab"),
            ("Esc", "Back"),
        ]),
        Segment::Analysis => key_hints(&[
            ("←/→", "Prev/next analysis"),
            ("1-4", "Tabs"),
            ("d", "Delete"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ]),
        _ => key_hints(&[
            ("Tab / 1-4", "Tabs"),
            ("d", "Delete"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        layout[2],
    );
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.views.active_segment();
    let mut spans = Vec::new();
    for (i, segment) in Segment::ALL.iter().enumerate() {
        let style = if *segment == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, segment.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_description(frame: &mut Frame, project: &Project, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::styled(project.project_type.label(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Created: ", label),
            Span::raw(format_created(project.created_date)),
        ]),
        Line::raw(""),
    ];

    if project.description.is_empty() {
        lines.push(Line::from(Span::styled("No description", label)));
    } else {
        lines.push(Line::raw(project.description.clone()));
    }
    lines.push(Line::raw(""));

    for (i, question) in content::QUESTIONS.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, question),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        let answer = project.answers.get(i).map(String::as_str).unwrap_or("-");
        lines.push(Line::from(Span::styled(
            format!("   {}", answer),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Description ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, area);
}

fn render_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let index = app.analysis_index.min(content::ANALYSES.len() - 1);
    let analysis = &content::ANALYSES[index];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} ({}/{}) ",
            analysis.title,
            index + 1,
            content::ANALYSES.len()
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(analysis.content)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray)),
        split[0],
    );
    render_chart(frame, split[1], &analysis.chart);
}

fn render_statistics(frame: &mut Frame, app: &App, area: Rect) {
    if !app.api_keys.is_acknowledged() {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Statistics need at least one marketplace API key.",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "Press k to enter your keys.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Statistics "));
        frame.render_widget(placeholder, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let sales_table: Vec<Line> = content::PRODUCTS
        .iter()
        .map(|p| {
            Line::from(vec![
                Span::styled(format!("{:<20}", p.name), Style::default().fg(Color::Gray)),
                Span::raw(format!("₹{:<8}", p.sales)),
                Span::styled(p.growth, Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    render_stat_panel(
        frame,
        top[0],
        " Sales ",
        &content::SALES_METRICS,
        sales_table,
        &content::SALES_CHART,
    );

    let marketing_table: Vec<Line> = content::PLATFORMS
        .iter()
        .map(|p| {
            Line::from(vec![
                Span::styled(format!("{:<10}", p.name), Style::default().fg(Color::Gray)),
                Span::raw(format!("reach {:<6} ", p.reach)),
                Span::raw(format!("eng {:<6} ", p.engagement)),
                Span::raw(format!("conv {}", p.conversion)),
            ])
        })
        .collect();
    render_stat_panel(
        frame,
        top[1],
        " Marketing ",
        &content::MARKETING_METRICS,
        marketing_table,
        &content::MARKETING_CHART,
    );

    let campaign_lines: Vec<Line> = content::CAMPAIGNS
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(format!("{:<18}", c.name), Style::default().fg(Color::Gray)),
                Span::styled(format!("ROI {}%  ", c.roi), Style::default().fg(Color::Green)),
                Span::raw(format!("₹{} → ₹{}", c.spent, c.revenue)),
            ])
        })
        .collect();
    render_stat_panel(
        frame,
        bottom[0],
        " Platforms & Campaigns ",
        &[],
        campaign_lines,
        &content::PLATFORM_CHART,
    );

    let segment_lines: Vec<Line> = content::GENDER_SPLIT
        .iter()
        .map(|g| {
            Line::from(vec![
                Span::styled(format!("{:<8}", g.label), Style::default().fg(Color::Gray)),
                Span::raw(format!("{}% ({})", g.percentage, g.value)),
            ])
        })
        .collect();
    render_stat_panel(
        frame,
        bottom[1],
        " Customer Segments ",
        &[],
        segment_lines,
        &content::CUSTOMER_AGE_CHART,
    );
}

fn render_stat_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    metrics: &[Metric],
    table: Vec<Line>,
    chart: &content::ChartSpec,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if !metrics.is_empty() {
        let mut spans = Vec::new();
        for metric in metrics {
            spans.push(Span::styled(
                metric.value,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}   ", metric.label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }
    let text_height = (lines.len() + table.len()) as u16;
    lines.extend(table);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(text_height), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(lines), split[0]);
    render_chart(frame, split[1], chart);
}

fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.transcript() {
        let (who, color) = match message.role {
            ChatRole::User => ("You", Color::Yellow),
            ChatRole::Assistant => ("Assistant", Color::Cyan),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(message.text.clone()));
        lines.push(Line::raw(""));
    }
    if app.chat.pending_replies() > 0 {
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the newest messages in view
    let visible = split[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Assistant ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(transcript, split[0]);

    let (before, after) = app.chat.input.split_at_cursor();
    let input = Paragraph::new(Line::from(input_spans(before, after, true))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Message "),
    );
    frame.render_widget(input, split[1]);
}
