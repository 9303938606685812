//! The reducer.
//!
//! [`CalendarEngine`] is the only code path that mutates a
//! [`CalendarState`]. Each intent is validated in full before anything is
//! written, so a refused intent leaves the snapshot untouched. Accepted
//! intents return the [`CalendarEvent`]s they produced, in order.

mod action;
mod board;
mod clock;
mod conflict;
mod errors;
mod event;
mod interruption;

pub use action::{CalendarAction, Resolution};
pub use errors::ActionError;
pub use event::CalendarEvent;

use crate::rng::RngOracle;
use crate::state::{CalendarState, Mode};

/// Applies intents to a borrowed [`CalendarState`].
pub struct CalendarEngine<'a> {
    state: &'a mut CalendarState,
}

impl<'a> CalendarEngine<'a> {
    pub fn new(state: &'a mut CalendarState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalendarState {
        self.state
    }

    /// Applies one intent.
    ///
    /// Finished plays refuse everything. `rng` backs the reschedule coin
    /// flip; draws are keyed by the play seed and the intent nonce, which
    /// advances on every accepted intent.
    pub fn execute(
        &mut self,
        action: &CalendarAction,
        rng: &dyn RngOracle,
    ) -> Result<Vec<CalendarEvent>, ActionError> {
        if self.state.is_over() {
            return Err(ActionError::GameOver);
        }
        if !action.is_tick() {
            tracing::debug!(
                action = action.as_snake_case(),
                nonce = self.state.nonce,
                "executing intent"
            );
        }

        let mut events = Vec::new();
        let result = match action {
            CalendarAction::BeginDrag { meeting } => {
                board::begin_drag(self.state, meeting, &mut events)
            }
            CalendarAction::EndDrag => {
                board::end_drag(self.state, &mut events);
                Ok(())
            }
            CalendarAction::Place { meeting, at } => {
                board::place(self.state, meeting, *at, &mut events)
            }
            CalendarAction::Unplace { meeting } => board::unplace(self.state, meeting, &mut events),
            CalendarAction::Trash { meeting } => board::trash(self.state, meeting, &mut events),
            CalendarAction::Tick { elapsed_ms } => {
                clock::tick(self.state, *elapsed_ms, &mut events);
                Ok(())
            }
            CalendarAction::DismissInterruption => interruption::dismiss(self.state, &mut events),
            CalendarAction::ResolveConflict { resolution } => {
                conflict::resolve(self.state, *resolution, rng, &mut events)
            }
        };

        if let Err(error) = &result {
            tracing::warn!(
                action = action.as_snake_case(),
                %error,
                "intent refused"
            );
        }
        result?;

        self.state.nonce += 1;

        #[cfg(debug_assertions)]
        if let Err(error) = self.state.validate() {
            tracing::error!(%error, "state invariant broken");
            debug_assert!(false, "state invariant broken: {error}");
        }

        if self.state.is_over() {
            tracing::info!(
                won = self.state.is_won(),
                reputation = self.state.reputation,
                time_left_ms = self.state.time_left_ms,
                "play finished"
            );
        }

        Ok(events)
    }
}

/// Refuses board intents while a modal is open.
pub(super) fn ensure_normal(state: &CalendarState) -> Result<(), ActionError> {
    match state.mode() {
        Mode::Normal => Ok(()),
        Mode::ConflictPending => Err(ActionError::ConflictPending),
        Mode::InterruptionPending => Err(ActionError::InterruptionPending),
    }
}
