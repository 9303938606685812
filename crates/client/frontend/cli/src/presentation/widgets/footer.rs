//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::CalendarView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, view: &CalendarView) {
    let text = if view.result.is_some() {
        Line::from(vec![
            Span::raw("[Enter/n] New game | "),
            Span::raw("[q/Esc] Quit"),
        ])
    } else if view.conflict.is_some() {
        Line::from(vec![
            Span::raw("[r] Reschedule | "),
            Span::raw("[d] Delegate | "),
            Span::raw("[x] Decline | "),
            Span::raw("[g] Grovel"),
        ])
    } else if view.interruption.is_some() {
        Line::from(vec![Span::raw("[Enter/Space] Got it")])
    } else {
        Line::from(vec![
            Span::raw("[Drag] Move meetings | "),
            Span::raw("[Click placed] Pick up | "),
            Span::raw("[n] New game | "),
            Span::raw("[q] Quit"),
        ])
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
