use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, Tab};
use crate::theme::Theme;
use crate::views;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    views::tab_bar::render(frame, app, chunks[0]);

    match app.tab {
        Tab::Chart => views::chart::render(frame, app, chunks[1]),
        Tab::Data => views::data::render(frame, app, chunks[1]),
    }

    render_hints(frame, chunks[2]);
    render_status(frame, app, chunks[3]);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = [
        ("Tab", "switch view"),
        ("t/f", "filter tag/file"),
        ("p/d/c", "export png/pdf/csv"),
        ("r", "reload"),
        ("q", "quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(key, Style::new().fg(Theme::TEXT_KEY).bold()));
        spans.push(Span::styled(
            format!(" {desc}   "),
            Style::new().fg(Theme::TEXT_KEY_DESC),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = if status.is_error {
        Theme::ACCENT_RED
    } else {
        Theme::ACCENT_GREEN
    };
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        Style::new().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
