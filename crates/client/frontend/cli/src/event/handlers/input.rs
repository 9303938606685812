//! Input handling (keyboard and mouse).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::{InputContext, KeyAction, PointerAction},
    presentation::terminal::Tui,
};

impl EventLoop {
    /// Drain pending terminal events. Returns `true` to quit.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut dirty = false;

        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key) {
                        return Ok(true);
                    }
                    dirty = true;
                }
                TermEvent::Mouse(mouse) => {
                    dirty |= self.handle_pointer(self.input.handle_mouse(mouse));
                }
                TermEvent::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if dirty {
            self.render(terminal)?;
        }
        Ok(false)
    }

    fn context(&self) -> InputContext {
        InputContext::from_state(self.session.state(), self.session.result().is_some())
    }

    /// Handle key press. Returns `true` to quit.
    fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key, self.context()) {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                true
            }
            KeyAction::Resolve(resolution) => {
                if let Err(error) = self.session.resolve(resolution) {
                    tracing::debug!(%error, "resolution refused");
                }
                false
            }
            KeyAction::DismissInterruption => {
                if let Err(error) = self.session.dismiss_interruption() {
                    tracing::debug!(%error, "dismiss refused");
                }
                false
            }
            KeyAction::NewGame => {
                self.session.restart();
                false
            }
            KeyAction::None => false,
        }
    }

    /// Returns `true` when the board needs redrawing.
    fn handle_pointer(&mut self, action: PointerAction) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        match action {
            PointerAction::Down { x, y } => {
                self.session.pointer_down(x, y, &layout.board);
                true
            }
            PointerAction::Drag { x, y } => self.session.pointer_move(x, y),
            PointerAction::Up { x, y } => self.session.pointer_up(x, y, &layout.board).is_some(),
            PointerAction::None => false,
        }
    }
}
