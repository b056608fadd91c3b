use super::utils::hex_color;
use super::*;
use crate::content::{ChartKind, ChartSpec, BASE_COLORS};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType};

/// Presentation settings derived from a chart's kind and palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub colors: Vec<Color>,
    pub show_legend: bool,
    pub begin_at_zero: bool,
}

impl ChartStyle {
    pub fn for_chart(spec: &ChartSpec) -> Self {
        let palette: &[&str] = spec.colors.unwrap_or(&BASE_COLORS);
        let round = matches!(spec.kind, ChartKind::Pie | ChartKind::Doughnut);
        Self {
            colors: palette.iter().map(|c| hex_color(c)).collect(),
            show_legend: round,
            begin_at_zero: !round && spec.kind != ChartKind::Radar,
        }
    }

    /// Palette color for slot `i`, wrapping around.
    pub fn color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            return Color::White;
        }
        self.colors[i % self.colors.len()]
    }
}

pub fn render_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let style = ChartStyle::for_chart(spec);
    match spec.kind {
        ChartKind::Pie | ChartKind::Doughnut => render_pie(frame, area, spec, &style),
        ChartKind::Bar => render_bars(frame, area, spec, &style),
        ChartKind::Line => render_line(frame, area, spec, &style),
        ChartKind::Radar => render_grouped_bars(frame, area, spec, &style),
    }
}

fn render_pie(frame: &mut Frame, area: Rect, spec: &ChartSpec, style: &ChartStyle) {
    use tui_piechart::{PieChart, PieSlice};

    let slices: Vec<PieSlice> = spec
        .labels
        .iter()
        .zip(spec.values())
        .enumerate()
        .map(|(i, (label, value))| PieSlice::new(*label, *value, style.color(i)))
        .collect();

    let pie = PieChart::new(slices)
        .show_legend(style.show_legend)
        .show_percentages(true);
    frame.render_widget(pie, area);
}

/// Bars carry integers, so values are scaled by ten to keep one decimal.
fn bar_value(value: f64) -> u64 {
    (value * 10.0).round().max(0.0) as u64
}

fn format_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.0}K", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn render_bars(frame: &mut Frame, area: Rect, spec: &ChartSpec, style: &ChartStyle) {
    let bars: Vec<Bar> = spec
        .labels
        .iter()
        .zip(spec.values())
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::default()
                .value(bar_value(*value))
                .text_value(format_value(*value))
                .label(Line::from(*label))
                .style(Style::default().fg(style.color(i)))
        })
        .collect();

    let bar_width = bar_width(area.width, bars.len());
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn render_grouped_bars(frame: &mut Frame, area: Rect, spec: &ChartSpec, style: &ChartStyle) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let groups: Vec<Vec<Bar>> = (0..spec.labels.len())
        .map(|i| {
            spec.series
                .iter()
                .enumerate()
                .map(|(si, series)| {
                    let value = series.values.get(i).copied().unwrap_or(0.0);
                    let color = series.color.map(hex_color).unwrap_or(style.color(si));
                    Bar::default()
                        .value(bar_value(value))
                        .text_value(format_value(value))
                        .style(Style::default().fg(color))
                })
                .collect()
        })
        .collect();

    let per_group = spec.series.len().max(1);
    let bar_width = bar_width(area.width, spec.labels.len() * (per_group + 1));
    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2);
    for (label, bars) in spec.labels.iter().zip(&groups) {
        chart = chart.data(BarGroup::default().label(Line::from(*label)).bars(bars));
    }
    frame.render_widget(chart, layout[0]);

    let legend: Vec<Span> = spec
        .series
        .iter()
        .enumerate()
        .flat_map(|(si, series)| {
            let color = series.color.map(hex_color).unwrap_or(style.color(si));
            [
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{}  ", series.name),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        layout[1],
    );
}

fn render_line(frame: &mut Frame, area: Rect, spec: &ChartSpec, style: &ChartStyle) {
    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|series| {
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(si, (series, data))| {
            let color = series.color.map(hex_color).unwrap_or(style.color(si));
            Dataset::default()
                .name(series.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let (min, max) = spec
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (lower, upper) = y_bounds(min, max, style.begin_at_zero);

    let x_labels: Vec<Span> = spec.labels.iter().map(|l| Span::raw(*l)).collect();
    let y_labels: Vec<Span> = [lower, (lower + upper) / 2.0, upper]
        .iter()
        .map(|v| Span::raw(format_value(*v)))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, spec.labels.len().saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([lower, upper])
                .labels(y_labels),
        )
        .legend_position(if style.show_legend {
            Some(ratatui::widgets::LegendPosition::TopRight)
        } else {
            None
        });
    frame.render_widget(chart, area);
}

fn y_bounds(min: f64, max: f64, begin_at_zero: bool) -> (f64, f64) {
    if min > max {
        return (0.0, 1.0);
    }
    let lower = if begin_at_zero { min.min(0.0) } else { min };
    let upper = if max > lower { max * 1.1 } else { lower + 1.0 };
    (lower, upper)
}

fn bar_width(width: u16, bars: usize) -> u16 {
    let bars = bars.max(1) as u16;
    (width / bars).saturating_sub(1).clamp(1, 12)
}
