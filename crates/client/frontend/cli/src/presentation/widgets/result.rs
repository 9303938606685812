//! Result screen shown once a play has been reported.

use client_frontend_core::view_model::ResultView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, result: &ResultView) {
    let (headline, color) = if result.won {
        ("Week scheduled!", Color::Green)
    } else {
        ("Out of time", Color::Red)
    };
    let meta = &result.meta;

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Score: {}", meta.score)),
        Line::from(format!(
            "Reputation: {} | Time left: {}s",
            meta.reputation, meta.time_left_secs
        )),
        Line::from(format!(
            "Trashed: {} | Groveled: {}",
            meta.trash_count, meta.grovel_count
        )),
        Line::default(),
    ];

    if meta.flags.is_empty() {
        lines.push(Line::from(Span::styled(
            "No achievements this time",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.extend(meta.flag_names().into_iter().map(|flag| {
            Line::from(Span::styled(
                format!("★ {flag}"),
                Style::default().fg(Color::Yellow),
            ))
        }));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[n] New game  [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
