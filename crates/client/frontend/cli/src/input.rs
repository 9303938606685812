//! Input processing for the CLI client.
//!
//! This module owns the keyboard and mouse mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use calendar_core::{CalendarState, Mode, Resolution};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Which keys are live, derived from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputContext {
    Board,
    Conflict,
    Interruption,
    /// The result screen is up.
    Result,
}

impl InputContext {
    pub fn from_state(state: &CalendarState, result_visible: bool) -> Self {
        if result_visible {
            return Self::Result;
        }
        match state.mode() {
            Mode::Normal => Self::Board,
            Mode::ConflictPending => Self::Conflict,
            Mode::InterruptionPending => Self::Interruption,
        }
    }
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    Resolve(Resolution),
    DismissInterruption,
    NewGame,
    /// No meaningful command was produced.
    None,
}

/// Pointer gesture in terminal cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down { x: u16, y: u16 },
    Drag { x: u16, y: u16 },
    Up { x: u16, y: u16 },
    None,
}

/// Translates `KeyEvent`s into session commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, context: InputContext) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => self.confirm(context),
            KeyCode::Char(ch) => self.handle_char(ch, context),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char, context: InputContext) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match (ch, context) {
            ('q', _) => KeyAction::Quit,
            ('n', _) => KeyAction::NewGame,
            (' ', _) => self.confirm(context),
            ('r', InputContext::Conflict) => KeyAction::Resolve(Resolution::Reschedule),
            ('d', InputContext::Conflict) => KeyAction::Resolve(Resolution::Delegate),
            ('x', InputContext::Conflict) => KeyAction::Resolve(Resolution::Decline),
            ('g', InputContext::Conflict) => KeyAction::Resolve(Resolution::Grovel),
            _ => KeyAction::None,
        }
    }

    fn confirm(&self, context: InputContext) -> KeyAction {
        match context {
            InputContext::Interruption => KeyAction::DismissInterruption,
            InputContext::Result => KeyAction::NewGame,
            InputContext::Board | InputContext::Conflict => KeyAction::None,
        }
    }

    /// Left-button gestures only; everything else is ignored.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> PointerAction {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerAction::Down { x, y },
            MouseEventKind::Drag(MouseButton::Left) => PointerAction::Drag { x, y },
            MouseEventKind::Up(MouseButton::Left) => PointerAction::Up { x, y },
            _ => PointerAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn resolution_keys_only_work_in_the_conflict_modal() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), InputContext::Conflict),
            KeyAction::Resolve(Resolution::Reschedule)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('D')), InputContext::Conflict),
            KeyAction::Resolve(Resolution::Delegate)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), InputContext::Conflict),
            KeyAction::Resolve(Resolution::Decline)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('g')), InputContext::Conflict),
            KeyAction::Resolve(Resolution::Grovel)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('g')), InputContext::Board),
            KeyAction::None
        );
    }

    #[test]
    fn enter_and_space_dismiss_interruptions() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), InputContext::Interruption),
            KeyAction::DismissInterruption
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), InputContext::Interruption),
            KeyAction::DismissInterruption
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), InputContext::Board),
            KeyAction::None
        );
    }

    #[test]
    fn maps_new_game_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), InputContext::Board),
            KeyAction::NewGame
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), InputContext::Result),
            KeyAction::NewGame
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), InputContext::Conflict),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), InputContext::Board),
            KeyAction::Quit
        );
    }

    #[test]
    fn only_left_button_gestures_become_pointer_actions() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            PointerAction::Down { x: 12, y: 7 }
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left))),
            PointerAction::Drag { x: 12, y: 7 }
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left))),
            PointerAction::Up { x: 12, y: 7 }
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right))),
            PointerAction::None
        );
        assert_eq!(
            handler.handle_mouse(mouse(MouseEventKind::Moved)),
            PointerAction::None
        );
    }
}
