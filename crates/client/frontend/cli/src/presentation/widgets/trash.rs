//! Trash drop zone.

use client_frontend_core::CalendarView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view: &CalendarView) {
    let (text, border) = if view.trash_refused {
        (
            "Can't trash that one!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if view.dragging.is_some() {
        ("Drop here to trash", Style::default().fg(Color::Yellow))
    } else {
        ("Trash", Style::default().fg(Color::DarkGray))
    };

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Trash"),
    );
    frame.render_widget(paragraph, area);
}
