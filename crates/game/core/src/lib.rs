//! Deterministic rules for the calendar scheduling puzzle.
//!
//! `calendar-core` defines the canonical data model (meetings, grid,
//! scenarios), the pure placement helpers, and the reducer that owns every
//! state transition. Frontends read [`CalendarState`] snapshots and mutate
//! them exclusively through [`engine::CalendarEngine`].
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod outcome;
pub mod placement;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use engine::{ActionError, CalendarAction, CalendarEngine, CalendarEvent, Resolution};
pub use error::{ErrorSeverity, GameError};
pub use model::{
    Cell, Constraint, Grid, Interruption, InterruptionEffect, InterruptionId, Meeting,
    MeetingFlags, MeetingId, MeetingKind, Placements, PrefilledBlock, Scenario, ScenarioError,
    SlotRef, Trigger,
};
pub use outcome::{Outcome, OutcomeFlag, OutcomeMeta};
pub use placement::{PlacementError, RecurringExpansion, can_place, check_placement};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{CalendarState, ConflictModal, InvalidFlash, Mode, StateError};
