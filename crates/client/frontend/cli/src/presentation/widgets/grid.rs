//! Calendar grid widget and the drag ghost.

use calendar_core::GameConfig;
use client_frontend_core::{
    CalendarView, HeldMeeting,
    view_model::{CellKind, CellView},
};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::{theme::RatatuiTheme, ui::LABEL_WIDTH};

const GHOST_MAX_WIDTH: u16 = 24;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &CalendarView,
    cell_width: u16,
    theme: &RatatuiTheme,
) {
    let width = usize::from(cell_width);
    let label_width = usize::from(LABEL_WIDTH);

    let mut lines = Vec::with_capacity(GameConfig::SLOTS + 1);
    let mut days = vec![Span::raw(" ".repeat(label_width))];
    days.extend((0..GameConfig::DAYS).map(|day| {
        Span::styled(
            format!("{:^width$}", GameConfig::day_label(day)),
            theme.label(),
        )
    }));
    lines.push(Line::from(days));

    for slot in 0..GameConfig::SLOTS {
        let mut spans = vec![Span::styled(
            format!("{:<label_width$}", GameConfig::slot_label(slot)),
            theme.label(),
        )];
        for day_cells in &view.cells {
            if let Some(cell) = day_cells.get(slot) {
                spans.push(cell_span(cell, width, theme));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Week"));
    frame.render_widget(paragraph, area);
}

fn cell_span(cell: &CellView, width: usize, theme: &RatatuiTheme) -> Span<'static> {
    let text = match (&cell.kind, cell.starts_block) {
        (CellKind::Empty, _) => format!("{:^width$}", "·"),
        (CellKind::Meeting { locked: true, .. }, true) => fit(&format!("*{}", cell.label), width),
        (_, true) => fit(&cell.label, width),
        (_, false) => " ".repeat(width),
    };

    let style = if cell.flashing {
        theme.flash()
    } else {
        match (&cell.kind, cell.color.as_deref()) {
            (CellKind::Empty, _) => theme.empty(),
            (CellKind::Blocked, _) => theme.blocked(),
            (CellKind::Meeting { locked: true, .. }, Some(color)) => theme.locked(color),
            (CellKind::Meeting { .. }, Some(color)) => theme.meeting(color, cell.starts_block),
            (CellKind::Meeting { .. }, None) => Style::default(),
        }
    };

    Span::styled(text, style)
}

/// Pads or truncates `text` to exactly `width` columns, leaving a
/// one-column gutter on the left.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let body: String = text.chars().take(width.saturating_sub(1)).collect();
    format!(" {body:<inner$}", inner = width.saturating_sub(1))
}

/// Draws the held meeting under the pointer.
pub fn render_ghost(frame: &mut Frame, held: &HeldMeeting, theme: &RatatuiTheme) {
    let screen = frame.area();
    let (x, y) = held.pointer;
    if x >= screen.right() || y >= screen.bottom() {
        return;
    }
    let wanted = (held.title.chars().count() as u16).saturating_add(2);
    let width = wanted
        .min(GHOST_MAX_WIDTH)
        .min(screen.right().saturating_sub(x));
    let area = Rect::new(x, y, width, 1);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(fit(&held.title, usize::from(width))).style(theme.meeting(&held.color, true)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("Sync", 8), " Sync   ");
        assert_eq!(fit("Quarterly Planning", 8), " Quarter");
        assert_eq!(fit("", 3), "   ");
    }
}
