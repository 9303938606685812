//! Header widget: scenario, countdown, reputation, and badges.

use client_frontend_core::CalendarView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &CalendarView, theme: &RatatuiTheme) {
    let header = &view.header;

    let mut spans = vec![
        Span::raw("Time: "),
        Span::styled(
            format!("{}s", header.time_left_secs),
            theme.timer(header.time_percent),
        ),
        Span::raw(" | Reputation: "),
        Span::styled(
            header.reputation.to_string(),
            theme.reputation(header.reputation),
        ),
        Span::raw(" | Delegates: "),
        Span::styled(
            header.delegate_uses_left.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Trashed: "),
        Span::raw(header.trash_count.to_string()),
    ];
    if header.chaos {
        spans.push(Span::styled(" [CHAOS]", theme.badge()));
    }
    if header.slowed {
        spans.push(Span::styled(" [SLOWED]", theme.badge()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.scenario_name)),
    );

    frame.render_widget(paragraph, area);
}
