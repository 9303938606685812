//! Screen layout and the main render entry point.
//!
//! The layout is computed before drawing so the event loop can hit-test
//! pointer input against exactly what was last drawn.
use anyhow::Result;
use calendar_core::GameConfig;
use client_frontend_core::{BoardLayout, CalendarView, GridGeometry, Rect as BoardRect};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Width of the time-label column.
pub const LABEL_WIDTH: u16 = 6;
/// Lines per queue entry: title, then details.
pub const QUEUE_ROW_HEIGHT: u16 = 2;
const SIDE_PANEL_WIDTH: u16 = 32;
const TRASH_HEIGHT: u16 = 5;

/// Where every panel goes for one terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid_panel: Rect,
    pub queue: Rect,
    pub trash: Rect,
    pub feed: Rect,
    pub footer: Rect,
    pub board: BoardLayout,
}

impl ScreenLayout {
    pub fn compute(area: Rect, ui: &UiConfig) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Header
                Constraint::Min(0),                 // Board
                Constraint::Length(ui.feed_height), // Feed
                Constraint::Length(3),              // Footer
            ])
            .split(area);

        let grid_width = LABEL_WIDTH + ui.cell_width * GameConfig::DAYS as u16 + 2;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(grid_width),
                Constraint::Min(SIDE_PANEL_WIDTH),
            ])
            .split(rows[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(TRASH_HEIGHT)])
            .split(columns[1]);

        let grid_panel = columns[0];
        let board = BoardLayout {
            grid: GridGeometry {
                origin_x: grid_panel.x + 1,
                origin_y: grid_panel.y + 1,
                label_width: LABEL_WIDTH,
                header_height: 1,
                cell_width: ui.cell_width,
                cell_height: 1,
            },
            queue: to_board_rect(side[0]),
            queue_row_height: QUEUE_ROW_HEIGHT,
            trash: to_board_rect(side[1]),
        };

        Self {
            header: rows[0],
            grid_panel,
            queue: side[0],
            trash: side[1],
            feed: rows[2],
            footer: rows[3],
            board,
        }
    }
}

fn to_board_rect(rect: Rect) -> BoardRect {
    BoardRect::new(rect.x, rect.y, rect.width, rect.height)
}

/// Draws one frame of the board and any modal on top.
pub fn render(
    terminal: &mut Tui,
    view: &CalendarView,
    layout: &ScreenLayout,
    ui: &UiConfig,
) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        widgets::header::render(frame, layout.header, view, &theme);
        widgets::grid::render(frame, layout.grid_panel, view, ui.cell_width, &theme);
        widgets::queue::render(frame, layout.queue, view, &theme);
        widgets::trash::render(frame, layout.trash, view);
        widgets::feed::render(frame, layout.feed, &view.messages, &theme);
        widgets::footer::render(frame, layout.footer, view);

        if !view.mode_is_modal()
            && let Some(held) = &view.dragging
        {
            widgets::grid::render_ghost(frame, held, &theme);
        }

        if let Some(result) = &view.result {
            widgets::result::render(frame, centered_rect(50, 50, frame.area()), result);
        } else if let Some(conflict) = &view.conflict {
            widgets::modal::render(frame, centered_rect(56, 45, frame.area()), conflict, &theme);
        } else if let Some(interruption) = &view.interruption {
            widgets::banner::render(frame, centered_rect(50, 30, frame.area()), interruption);
        }
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
