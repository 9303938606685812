//! Interruption banner.

use client_frontend_core::view_model::InterruptionView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, interruption: &InterruptionView) {
    let lines = vec![
        Line::from(Span::styled(
            interruption.title.clone(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(interruption.message.clone()),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] Got it",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed))
                .title(" Interruption "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
