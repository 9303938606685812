//! Feed widget displaying recent narration.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the feed panel, newest line at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Feed"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its countdown stamp.
fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(secs) => format!("[{secs:>2}s] {}", entry.text),
        None => entry.text.clone(),
    }
}
