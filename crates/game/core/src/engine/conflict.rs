//! Conflict modal: opening it and the four ways out.

use crate::config::GameConfig;
use crate::model::{MeetingId, SlotRef};
use crate::placement;
use crate::rng::{RngOracle, compute_seed, context};
use crate::state::{CalendarState, ConflictModal};

use super::{ActionError, CalendarEvent, Resolution, board, clock, interruption};

/// Opens the modal and slows the countdown.
pub(super) fn open(
    state: &mut CalendarState,
    meeting: &MeetingId,
    conflicts_with: MeetingId,
    at: SlotRef,
    events: &mut Vec<CalendarEvent>,
) {
    tracing::info!(meeting = %meeting, conflicts_with = %conflicts_with, "conflict opened");
    state.conflict = Some(ConflictModal {
        meeting: meeting.clone(),
        conflicts_with: conflicts_with.clone(),
        at,
    });
    state.speed_percent = state.config.conflict_speed_percent;
    events.push(CalendarEvent::ConflictOpened {
        meeting: meeting.clone(),
        conflicts_with,
    });
}

pub(super) fn resolve(
    state: &mut CalendarState,
    resolution: Resolution,
    rng: &dyn RngOracle,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    let Some(modal) = state.conflict.clone() else {
        return Err(ActionError::NoConflict);
    };
    let meeting = state
        .meeting(&modal.meeting)
        .cloned()
        .ok_or_else(|| ActionError::UnknownMeeting(modal.meeting.clone()))?;

    match resolution {
        Resolution::Delegate if state.delegate_uses_left == 0 => {
            return Err(ActionError::unavailable(resolution, "no delegations left"));
        }
        Resolution::Decline if !meeting.is_trashable() => {
            return Err(ActionError::unavailable(resolution, "meeting cannot be declined"));
        }
        _ => {}
    }

    state.conflict = None;
    state.speed_percent = 100;
    let config = &state.config;

    let place = match resolution {
        Resolution::Reschedule => {
            let seed = compute_seed(state.seed, state.nonce, context::RESCHEDULE);
            let accepted = rng.coin_flip(seed);
            if !accepted {
                state.reputation -= config.reschedule_failure_penalty;
            }
            accepted
        }
        Resolution::Delegate => {
            state.delegate_uses_left -= 1;
            true
        }
        Resolution::Decline => {
            state.reputation -= config.decline_penalty;
            state.visible_queue.retain(|queued| queued != &modal.meeting);
            state.trashed.insert(modal.meeting.clone());
            events.push(CalendarEvent::Declined {
                meeting: modal.meeting.clone(),
            });
            false
        }
        Resolution::Grovel => {
            state.time_left_ms = state
                .time_left_ms
                .saturating_sub(GameConfig::secs_to_ms(config.grovel_time_cost_secs));
            state.reputation -= config.grovel_reputation_cost;
            state.grovel_count += 1;
            true
        }
    };

    let placed = place && placement::can_place(&meeting, modal.at, state);
    if place && !placed {
        tracing::warn!(meeting = %modal.meeting, at = ?modal.at, "conflict target no longer fits");
    }
    tracing::info!(meeting = %modal.meeting, %resolution, placed, "conflict resolved");
    events.push(CalendarEvent::ConflictResolved {
        meeting: modal.meeting.clone(),
        resolution,
        placed,
    });

    if placed {
        board::commit(state, &modal.meeting, modal.at, events);
    }
    interruption::scan(state, events);
    clock::refill(state, events);
    Ok(())
}
