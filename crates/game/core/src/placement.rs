//! Placement engine: pure legality checks and consistent grid mutations.
//!
//! The helpers keep [`Grid`] and [`Placements`](crate::model::Placements)
//! in lockstep. Mutating helpers assume the caller (the reducer) already
//! validated the move; they never re-check conflicts or modal state.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::model::{Cell, Constraint, Grid, Meeting, MeetingFlags, MeetingId, SlotRef};
use crate::state::CalendarState;

/// Why a meeting cannot occupy a region.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("{duration} slot(s) from {at:?} leave the grid")]
    OutOfBounds { at: SlotRef, duration: usize },

    #[error("cell {0:?} is already taken")]
    Occupied(SlotRef),

    #[error("day {day} is not allowed")]
    DayNotAllowed { day: usize },

    #[error("cannot start before slot {min_slot}")]
    BeforeMinSlot { min_slot: u8 },

    #[error("cannot start after slot {max_slot}")]
    AfterMaxSlot { max_slot: u8 },

    #[error("place '{dependency}' first")]
    DependencyNotPlaced { dependency: MeetingId },

    #[error("'{dependency}' must finish before this starts")]
    DependencyNotFinished { dependency: MeetingId },
}

impl GameError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "PLACE_OUT_OF_BOUNDS",
            Self::Occupied(_) => "PLACE_OCCUPIED",
            Self::DayNotAllowed { .. } => "PLACE_DAY_NOT_ALLOWED",
            Self::BeforeMinSlot { .. } => "PLACE_BEFORE_MIN_SLOT",
            Self::AfterMaxSlot { .. } => "PLACE_AFTER_MAX_SLOT",
            Self::DependencyNotPlaced { .. } => "PLACE_DEPENDENCY_NOT_PLACED",
            Self::DependencyNotFinished { .. } => "PLACE_DEPENDENCY_NOT_FINISHED",
        }
    }
}

/// Result of expanding a recurring meeting into its day-copies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecurringExpansion {
    pub placed: Vec<MeetingId>,
    /// Copies that did not fit and went back to the visible queue.
    pub returned: Vec<MeetingId>,
}

impl RecurringExpansion {
    pub fn all_placed(&self) -> bool {
        self.placed.len() == GameConfig::RECURRING_COPIES
    }
}

/// Checks whether `meeting` may start at `at`. No side effects.
pub fn check_placement(
    meeting: &Meeting,
    at: SlotRef,
    state: &CalendarState,
) -> Result<(), PlacementError> {
    let duration = meeting.duration as usize;
    if at.day >= GameConfig::DAYS || at.slot + duration > GameConfig::SLOTS {
        return Err(PlacementError::OutOfBounds { at, duration });
    }

    if let Some(taken) = Grid::region(at, duration)
        .find(|cell| state.grid.cell(*cell).is_some_and(|c| !c.is_empty()))
    {
        return Err(PlacementError::Occupied(taken));
    }

    if let Some(error) = meeting
        .constraint
        .as_ref()
        .and_then(|constraint| constraint_violation(constraint, at))
    {
        return Err(error);
    }

    if let Some(dependency) = &meeting.depends_on {
        let Some(start) = state.placements.get(dependency) else {
            return Err(PlacementError::DependencyNotPlaced {
                dependency: dependency.clone(),
            });
        };
        let dependency_duration = state
            .meeting(dependency)
            .map_or(0, |m| m.duration as usize);
        if start.linear_end(dependency_duration) >= at.linear() {
            return Err(PlacementError::DependencyNotFinished {
                dependency: dependency.clone(),
            });
        }
    }

    Ok(())
}

/// Day and slot-window part of [`check_placement`].
pub(crate) fn constraint_violation(constraint: &Constraint, at: SlotRef) -> Option<PlacementError> {
    if !constraint.allows_day(at.day) {
        return Some(PlacementError::DayNotAllowed { day: at.day });
    }
    if let Some(min_slot) = constraint.min_slot
        && at.slot < min_slot as usize
    {
        return Some(PlacementError::BeforeMinSlot { min_slot });
    }
    if let Some(max_slot) = constraint.max_slot
        && at.slot > max_slot as usize
    {
        return Some(PlacementError::AfterMaxSlot { max_slot });
    }
    None
}

/// Boolean form of [`check_placement`].
pub fn can_place(meeting: &Meeting, at: SlotRef, state: &CalendarState) -> bool {
    check_placement(meeting, at, state).is_ok()
}

/// Writes a meeting onto the grid, records it, and takes it off the queue.
///
/// Returns `false` without touching anything when the template is unknown.
pub fn place_meeting(state: &mut CalendarState, id: &MeetingId, at: SlotRef) -> bool {
    let Some(duration) = state.meeting(id).map(|m| m.duration as usize) else {
        return false;
    };
    state.grid.fill(at, duration, &Cell::Meeting(id.clone()));
    state.placements.insert(id.clone(), at);
    state.visible_queue.retain(|queued| queued != id);
    true
}

/// Lifts a placed meeting off the grid and back into the visible queue.
///
/// Locked meetings and meetings that are not placed are left alone.
pub fn unplace_meeting(state: &mut CalendarState, id: &MeetingId) -> bool {
    if !lift_meeting(state, id) {
        return false;
    }
    if !state.visible_queue.contains(id) {
        state.visible_queue.push(id.clone());
    }
    true
}

/// Clears a placed, unlocked meeting from grid and placements only.
fn lift_meeting(state: &mut CalendarState, id: &MeetingId) -> bool {
    let Some(meeting) = state.meetings.get(id) else {
        return false;
    };
    if meeting.is_locked() {
        return false;
    }
    let duration = meeting.duration as usize;
    let Some(at) = state.placements.remove(id) else {
        return false;
    };
    state.grid.clear_meeting(at, duration, id);
    true
}

/// Removes a meeting from play entirely, placed or queued.
///
/// The meeting ends up in the trashed set without counting as a trash
/// action. Locked meetings stay where they are.
pub fn remove_meeting(state: &mut CalendarState, id: &MeetingId) -> bool {
    if state.meeting(id).is_none_or(Meeting::is_locked)
        || state.trashed.contains(id)
        || state.expanded.contains(id)
    {
        return false;
    }
    if state.is_placed(id) {
        lift_meeting(state, id);
    }
    state.visible_queue.retain(|queued| queued != id);
    if state.dragging.as_ref() == Some(id) {
        state.dragging = None;
    }
    state.trashed.insert(id.clone());
    true
}

/// Expands a recurring meeting into one copy per weekday at `slot`.
///
/// Each copy is placed independently; copies that do not fit are pushed
/// back onto the visible queue rather than dropped.
pub fn expand_recurring(
    state: &mut CalendarState,
    parent: &MeetingId,
    slot: usize,
) -> RecurringExpansion {
    let mut expansion = RecurringExpansion::default();
    let Some(template) = state.meeting(parent).cloned() else {
        return expansion;
    };

    state.visible_queue.retain(|queued| queued != parent);
    state.expanded.insert(parent.clone());

    for day in 0..GameConfig::RECURRING_COPIES {
        let copy = template.recurring_copy(day);
        let at = SlotRef::new(day, slot);
        let fits = can_place(&copy, at, state);
        let id = copy.id.clone();
        state.meetings.insert(id.clone(), copy);

        if fits {
            place_meeting(state, &id, at);
            expansion.placed.push(id);
        } else {
            state.visible_queue.push(id.clone());
            expansion.returned.push(id);
        }
    }

    if expansion.all_placed() {
        state.recurring_all_five = true;
    }
    expansion
}

/// Drops a locked meeting onto the grid on behalf of an interruption.
///
/// Unlocked meetings in the way go back to the visible queue and are
/// returned. Prefilled blocks and other locked meetings are never
/// displaced; the call fails without mutating anything instead.
pub fn force_place(
    state: &mut CalendarState,
    meeting: Meeting,
    at: SlotRef,
) -> Result<Vec<MeetingId>, PlacementError> {
    let duration = meeting.duration as usize;
    if at.day >= GameConfig::DAYS || at.slot + duration > GameConfig::SLOTS {
        return Err(PlacementError::OutOfBounds { at, duration });
    }

    let mut displaced: Vec<MeetingId> = Vec::new();
    for cell in Grid::region(at, duration) {
        match state.grid.cell(cell) {
            Some(Cell::Empty) | None => {}
            Some(Cell::Blocked(_)) => return Err(PlacementError::Occupied(cell)),
            Some(Cell::Meeting(id)) => {
                if state.meeting(id).is_some_and(Meeting::is_locked) {
                    return Err(PlacementError::Occupied(cell));
                }
                if !displaced.contains(id) {
                    displaced.push(id.clone());
                }
            }
        }
    }

    for id in &displaced {
        unplace_meeting(state, id);
    }

    let id = meeting.id.clone();
    let locked = Meeting {
        flags: meeting.flags | MeetingFlags::LOCKED,
        ..meeting
    };
    state.meetings.insert(id.clone(), locked);
    place_meeting(state, &id, at);
    Ok(displaced)
}
