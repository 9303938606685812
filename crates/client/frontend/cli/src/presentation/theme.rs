//! Colours and styles for the terminal board.

use std::str::FromStr;

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules for the calendar.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Meeting colours are `#rrggbb` strings; anything unparsable falls
    /// back to blue.
    pub fn meeting_color(&self, raw: &str) -> Color {
        Color::from_str(raw).unwrap_or(Color::Blue)
    }

    pub fn meeting(&self, raw: &str, starts_block: bool) -> Style {
        let style = Style::default()
            .bg(self.meeting_color(raw))
            .fg(Color::White);
        if starts_block {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn locked(&self, raw: &str) -> Style {
        self.meeting(raw, false).add_modifier(Modifier::ITALIC)
    }

    pub fn blocked(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::Gray)
    }

    pub fn empty(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn flash(&self) -> Style {
        Style::default().bg(Color::Red).fg(Color::White)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Timer colour by remaining share of the round.
    pub fn timer(&self, percent: u16) -> Style {
        let color = match percent {
            45..=100 => Color::Green,
            23..=44 => Color::Yellow,
            _ => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn reputation(&self, reputation: i32) -> Style {
        let color = match reputation {
            60.. => Color::Green,
            30..=59 => Color::Yellow,
            _ => Color::LightRed,
        };
        Style::default().fg(color)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unavailable(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}
