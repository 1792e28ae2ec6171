use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, Tab};
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = [(Tab::Chart, "1 Chart"), (Tab::Data, "2 Data")];

    let mut spans = vec![Span::raw(" ")];
    for (tab, label) in tabs {
        let style = if app.tab == tab {
            Style::new().fg(Theme::ACCENT_BLUE).bold()
        } else {
            Style::new().fg(Theme::TAB_INACTIVE)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!(
            "{} file(s), {} tagged entries",
            app.file_options.len(),
            app.batch.log.len()
        ),
        Style::new().fg(Theme::TEXT_MUTED),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
