use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tagsight_export::{ChartSpec, CHART_TITLE};

use crate::app::App;
use crate::theme::{self, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.filtered_summary();
    let Some(spec) = ChartSpec::from_rows(&rows) else {
        render_empty(frame, app, area);
        return;
    };

    let max = spec.max_count().max(1);
    // Room for "  <file> <bar> <count>" inside the block borders.
    let name_width = spec
        .files
        .iter()
        .map(|f| f.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);
    let bar_budget = (area.width as usize).saturating_sub(name_width + 14).max(8);

    let mut lines: Vec<Line> = Vec::new();
    for (ti, _) in spec.tags.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            spec.tag_label(ti),
            Style::new().fg(Theme::TEXT_PRIMARY).bold(),
        )));
        for (fi, file) in spec.files.iter().enumerate() {
            let count = spec.counts[fi][ti];
            if count == 0 {
                continue;
            }
            let bar_len = ((count as usize * bar_budget) / max as usize).max(1);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{file:<name_width$} "),
                    Style::new().fg(Theme::TEXT_SECONDARY),
                ),
                Span::styled(
                    "█".repeat(bar_len),
                    Style::new().fg(theme::series_color(fi)),
                ),
                Span::styled(format!(" {count}"), Style::new().fg(Theme::TEXT_PRIMARY)),
            ]));
        }
        lines.push(Line::raw(""));
    }

    let chart = Paragraph::new(lines).block(Theme::block().title(CHART_TITLE));
    frame.render_widget(chart, area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let msg = if app.batch.log.is_empty() {
        "No tagged records. Upload .jsonl files with a \"tag\" key per line."
    } else {
        "No rows match the current filters."
    };
    let empty = Paragraph::new(Line::from(Span::styled(
        msg,
        Style::new().fg(Theme::TEXT_MUTED),
    )))
    .alignment(Alignment::Center)
    .block(Theme::block_dim());
    frame.render_widget(empty, area);
}
