use crate::model::{InterruptionId, MeetingId, SlotRef};
use crate::placement::PlacementError;

use super::Resolution;

/// Observable consequence of an accepted intent.
///
/// The reducer returns these in the order they happened so frontends can
/// narrate a step without diffing snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarEvent {
    DragStarted {
        meeting: MeetingId,
    },
    DragEnded,
    Placed {
        meeting: MeetingId,
        at: SlotRef,
    },
    /// Illegal drop; the target cells flash.
    PlacementRejected {
        meeting: MeetingId,
        at: SlotRef,
        reason: PlacementError,
    },
    RecurringExpanded {
        parent: MeetingId,
        placed: Vec<MeetingId>,
        returned: Vec<MeetingId>,
    },
    ConflictOpened {
        meeting: MeetingId,
        conflicts_with: MeetingId,
    },
    ConflictResolved {
        meeting: MeetingId,
        resolution: Resolution,
        placed: bool,
    },
    Unplaced {
        meeting: MeetingId,
    },
    Trashed {
        meeting: MeetingId,
        penalty_secs: u32,
    },
    Declined {
        meeting: MeetingId,
    },
    Revealed {
        meetings: Vec<MeetingId>,
    },
    ChaosStarted {
        flooded: usize,
    },
    InterruptionTriggered {
        interruption: InterruptionId,
    },
    InterruptionApplied {
        interruption: InterruptionId,
    },
    /// Pushed off the grid by a forced placement.
    Displaced {
        meeting: MeetingId,
    },
    /// Taken out of play by a person-removal interruption.
    Removed {
        meeting: MeetingId,
    },
    ConstraintChanged {
        meeting: MeetingId,
        unplaced: bool,
    },
}
