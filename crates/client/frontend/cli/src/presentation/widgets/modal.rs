//! Conflict-resolution modal.

use calendar_core::Resolution;
use client_frontend_core::view_model::ConflictView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, conflict: &ConflictView, theme: &RatatuiTheme) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                conflict.meeting.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" clashes with "),
            Span::styled(
                conflict.conflicts_with.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "The clock runs at half speed until you decide.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    for option in &conflict.options {
        let style = if option.available {
            Style::default().fg(Color::White)
        } else {
            theme.unavailable()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", key_for(option.resolution)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(option.label, style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", option.detail), style),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Scheduling conflict "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn key_for(resolution: Resolution) -> char {
    match resolution {
        Resolution::Reschedule => 'r',
        Resolution::Delegate => 'd',
        Resolution::Decline => 'x',
        Resolution::Grovel => 'g',
    }
}
