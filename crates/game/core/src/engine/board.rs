//! Drag, drop, unplace, and trash.

use crate::config::GameConfig;
use crate::model::{Grid, Meeting, MeetingId, MeetingKind, SlotRef};
use crate::placement::{self, PlacementError};
use crate::state::{CalendarState, InvalidFlash};

use super::{ActionError, CalendarEvent, clock, conflict, ensure_normal, interruption};

fn known_meeting(state: &CalendarState, id: &MeetingId) -> Result<Meeting, ActionError> {
    state
        .meeting(id)
        .cloned()
        .ok_or_else(|| ActionError::UnknownMeeting(id.clone()))
}

fn release_drag(state: &mut CalendarState, id: &MeetingId) {
    if state.dragging.as_ref() == Some(id) {
        state.dragging = None;
    }
}

pub(super) fn begin_drag(
    state: &mut CalendarState,
    id: &MeetingId,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    ensure_normal(state)?;
    known_meeting(state, id)?;
    if !state.is_visible(id) {
        return Err(ActionError::NotVisible(id.clone()));
    }

    state.dragging = Some(id.clone());
    events.push(CalendarEvent::DragStarted {
        meeting: id.clone(),
    });
    Ok(())
}

pub(super) fn end_drag(state: &mut CalendarState, events: &mut Vec<CalendarEvent>) {
    if state.dragging.take().is_some() {
        events.push(CalendarEvent::DragEnded);
    }
}

pub(super) fn place(
    state: &mut CalendarState,
    id: &MeetingId,
    at: SlotRef,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    ensure_normal(state)?;
    let meeting = known_meeting(state, id)?;
    if !state.is_visible(id) {
        return Err(ActionError::NotVisible(id.clone()));
    }
    release_drag(state, id);

    if let Err(reason) = placement::check_placement(&meeting, at, state) {
        reject(state, &meeting, at, reason, events);
        return Ok(());
    }

    if let Some(partner) = conflict_partner(state, &meeting) {
        conflict::open(state, id, partner, at, events);
        return Ok(());
    }

    commit(state, id, at, events);
    clock::refill(state, events);
    Ok(())
}

/// Flashes the target cells and clears the no-invalid latch.
fn reject(
    state: &mut CalendarState,
    meeting: &Meeting,
    at: SlotRef,
    reason: PlacementError,
    events: &mut Vec<CalendarEvent>,
) {
    tracing::debug!(meeting = %meeting.id, ?at, %reason, "placement rejected");
    let cells = Grid::region(at, meeting.duration as usize).collect();
    state.invalid_flash = Some(InvalidFlash {
        cells,
        remaining_ms: state.config.invalid_flash_ms,
    });
    state.no_invalid_placements = false;
    events.push(CalendarEvent::PlacementRejected {
        meeting: meeting.id.clone(),
        at,
        reason,
    });
}

/// Placed meeting that declares a conflict with `meeting`, in either
/// direction.
fn conflict_partner(state: &CalendarState, meeting: &Meeting) -> Option<MeetingId> {
    if let Some(other) = &meeting.conflicts_with
        && state.is_placed(other)
    {
        return Some(other.clone());
    }
    state
        .placements
        .keys()
        .find(|placed| {
            state
                .meeting(placed)
                .and_then(|m| m.conflicts_with.as_ref())
                == Some(&meeting.id)
        })
        .cloned()
}

/// Commits a legal placement, expanding recurring meetings, and runs the
/// post-placement interruption scan. The caller refills the queue.
pub(super) fn commit(
    state: &mut CalendarState,
    id: &MeetingId,
    at: SlotRef,
    events: &mut Vec<CalendarEvent>,
) {
    if state.meeting(id).is_some_and(Meeting::is_recurring) {
        let expansion = placement::expand_recurring(state, id, at.slot);
        tracing::info!(
            meeting = %id,
            placed = expansion.placed.len(),
            returned = expansion.returned.len(),
            "recurring meeting expanded"
        );
        events.push(CalendarEvent::RecurringExpanded {
            parent: id.clone(),
            placed: expansion.placed,
            returned: expansion.returned,
        });
    } else {
        placement::place_meeting(state, id, at);
        events.push(CalendarEvent::Placed {
            meeting: id.clone(),
            at,
        });
    }

    state.placement_count += 1;
    interruption::scan(state, events);
}

pub(super) fn unplace(
    state: &mut CalendarState,
    id: &MeetingId,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    ensure_normal(state)?;
    let meeting = known_meeting(state, id)?;
    if !state.is_placed(id) {
        return Err(ActionError::NotPlaced(id.clone()));
    }
    if meeting.is_locked() {
        return Err(ActionError::Locked(id.clone()));
    }

    placement::unplace_meeting(state, id);
    events.push(CalendarEvent::Unplaced {
        meeting: id.clone(),
    });
    Ok(())
}

pub(super) fn trash(
    state: &mut CalendarState,
    id: &MeetingId,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    ensure_normal(state)?;
    let meeting = known_meeting(state, id)?;
    if !state.is_visible(id) {
        return Err(ActionError::NotVisible(id.clone()));
    }
    if !meeting.is_trashable() {
        return Err(ActionError::Untrashable(id.clone()));
    }

    let penalty_secs = meeting.trash_penalty_secs(&state.config);
    state.time_left_ms = state
        .time_left_ms
        .saturating_sub(GameConfig::secs_to_ms(penalty_secs));
    state.reputation -= state.config.trash_reputation_penalty;
    state.visible_queue.retain(|queued| queued != id);
    state.trashed.insert(id.clone());
    state.trash_count += 1;
    state.total_trash_penalty_secs = state
        .total_trash_penalty_secs
        .saturating_add(penalty_secs);
    if meeting.kind == MeetingKind::CouldBeEmail {
        state.trashed_email = true;
    }
    release_drag(state, id);

    tracing::debug!(meeting = %id, penalty_secs, "meeting trashed");
    events.push(CalendarEvent::Trashed {
        meeting: id.clone(),
        penalty_secs,
    });
    clock::refill(state, events);
    Ok(())
}
