use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::app::App;
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(45),
        Constraint::Min(3),
        Constraint::Length(app.batch.reports.len() as u16 + 2),
    ])
    .split(area);

    render_filter_line(frame, app, chunks[0]);
    render_summary_table(frame, app, chunks[1]);
    render_log_table(frame, app, chunks[2]);
    render_diagnostics(frame, app, chunks[3]);
}

fn selection_label(value: Option<String>) -> String {
    value.unwrap_or_else(|| "All".to_string())
}

fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Filter  ", Style::new().fg(Theme::TEXT_SECONDARY)),
        Span::styled("tag: ", Style::new().fg(Theme::TEXT_MUTED)),
        Span::styled(
            selection_label(app.selection.tag.as_ref().map(|t| t.to_string())),
            Style::new().fg(Theme::ACCENT_YELLOW),
        ),
        Span::styled("   file: ", Style::new().fg(Theme::TEXT_MUTED)),
        Span::styled(
            selection_label(app.selection.source_file.clone()),
            Style::new().fg(Theme::ACCENT_YELLOW),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary_table(frame: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_summary();
    let header = Row::new(["File", "Tag", "Count"])
        .style(Style::new().fg(Theme::TEXT_SECONDARY).bold());

    let rows = filtered.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.source_file.clone()),
            Cell::from(row.tag.to_string()),
            Cell::from(row.count.to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(40),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(Theme::block().title("Summary: Tag Counts by File"));
    frame.render_widget(table, area);
}

fn render_log_table(frame: &mut Frame, app: &App, area: Rect) {
    // The raw log is shown only when it is non-empty.
    if app.batch.log.is_empty() {
        return;
    }

    let header =
        Row::new(["File", "Tag"]).style(Style::new().fg(Theme::TEXT_SECONDARY).bold());
    let rows = app.batch.log.iter().skip(app.log_scroll).map(|entry| {
        Row::new(vec![
            Cell::from(entry.source_file.clone()),
            Cell::from(entry.tag.to_string()),
        ])
    });

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(header)
        .block(Theme::block().title(format!(
            "Uploaded Tags by File ({} entries, j/k to scroll)",
            app.batch.log.len()
        )));
    frame.render_widget(table, area);
}

fn render_diagnostics(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .batch
        .reports
        .iter()
        .map(|report| {
            if report.unreadable {
                return Line::from(Span::styled(
                    format!("{}: unreadable, skipped", report.source_file),
                    Style::new().fg(Theme::ACCENT_RED),
                ));
            }
            let mut text = format!(
                "{}: {} lines, {} tagged",
                report.source_file, report.total_lines, report.parsed
            );
            if report.skipped() > 0 {
                text.push_str(&format!(
                    ", {} skipped ({} bad JSON, {} missing tag)",
                    report.skipped(),
                    report.skipped_invalid_json,
                    report.skipped_missing_tag
                ));
            }
            if report.lossy_utf8 {
                text.push_str(", invalid UTF-8 replaced");
            }
            let color = if report.skipped() > 0 || report.lossy_utf8 {
                Theme::ACCENT_YELLOW
            } else {
                Theme::TEXT_MUTED
            };
            Line::from(Span::styled(text, Style::new().fg(color)))
        })
        .collect();

    let diagnostics = Paragraph::new(lines).block(Theme::block_dim().title("Ingest"));
    frame.render_widget(diagnostics, area);
}
