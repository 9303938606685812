//! Rendering.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{
    terminal::Tui,
    ui::{self, ScreenLayout},
};

impl EventLoop {
    /// Recomputes the layout for the current terminal size and draws.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let layout = ScreenLayout::compute(area, &self.cli_config.ui);

        let message_limit = usize::from(self.cli_config.ui.feed_height.saturating_sub(2));
        let view = self.session.view(message_limit);
        ui::render(terminal, &view, &layout, &self.cli_config.ui)?;

        self.layout = Some(layout);
        Ok(())
    }
}
