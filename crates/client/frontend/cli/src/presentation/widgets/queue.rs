//! Queue panel listing the meetings waiting to be scheduled.

use calendar_core::GameConfig;
use client_frontend_core::{CalendarView, view_model::QueueEntryView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &CalendarView, theme: &RatatuiTheme) {
    let held = view.dragging.as_ref().map(|held| &held.meeting);
    let items: Vec<ListItem> = view
        .queue
        .iter()
        .map(|entry| entry_item(entry, held == Some(&entry.id), theme))
        .collect();

    let title = format!("Inbox ({})", view.queue.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn entry_item(entry: &QueueEntryView, held: bool, theme: &RatatuiTheme) -> ListItem<'static> {
    let mut title_style = Style::default().fg(Color::White);
    if held {
        title_style = title_style.add_modifier(Modifier::DIM);
    }

    let title = Line::from(vec![
        Span::styled("■ ", Style::default().fg(theme.meeting_color(&entry.color))),
        Span::styled(entry.title.clone(), title_style.add_modifier(Modifier::BOLD)),
        Span::raw(format!(" ({})", duration_label(entry.duration))),
    ]);

    let mut tags = Vec::new();
    if entry.urgent {
        tags.push(Span::styled("urgent ", Style::default().fg(Color::LightRed)));
    }
    if entry.recurring {
        tags.push(Span::styled("daily ", Style::default().fg(Color::Cyan)));
    }
    if !entry.trashable {
        tags.push(Span::styled("no trash ", Style::default().fg(Color::Yellow)));
    }
    if let Some(hint) = &entry.hint {
        tags.push(Span::styled(hint.clone(), Style::default().fg(Color::DarkGray)));
    }
    let mut details = vec![Span::raw("  ")];
    details.extend(tags);

    ListItem::new(vec![title, Line::from(details)])
}

/// `1` → "30m", `2` → "1h", `3` → "1h30".
pub(crate) fn duration_label(slots: u8) -> String {
    let minutes = u32::from(slots) * GameConfig::SLOT_MINUTES;
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}"),
    }
}
