//! Static puzzle data: meetings, the grid, and scenario definitions.
//!
//! Everything here is plain data. Runtime bookkeeping lives in
//! [`crate::state`], and all mutation goes through [`crate::engine`].
mod grid;
mod meeting;
mod scenario;

pub use grid::{Cell, Grid, Placements, SlotRef};
pub use meeting::{Constraint, Meeting, MeetingFlags, MeetingId, MeetingKind};
pub use scenario::{
    Interruption, InterruptionEffect, InterruptionId, PrefilledBlock, Scenario, ScenarioError,
    Trigger,
};
