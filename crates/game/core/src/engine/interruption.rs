//! Scenario interruptions: trigger scan and effect application.

use crate::config::GameConfig;
use crate::model::{Interruption, InterruptionEffect, Meeting, MeetingId, SlotRef, Trigger};
use crate::placement;
use crate::state::CalendarState;

use super::{ActionError, CalendarEvent, clock};

fn is_triggered(trigger: &Trigger, state: &CalendarState) -> bool {
    match *trigger {
        Trigger::TimeLeft { secs } => state.time_left_ms <= GameConfig::secs_to_ms(secs),
        Trigger::Placements { count } => state.placement_count >= count,
    }
}

/// Marks the first unfired, triggered interruption as pending.
///
/// At most one interruption is pending at a time.
pub(super) fn scan(state: &mut CalendarState, events: &mut Vec<CalendarEvent>) {
    if state.pending_interruption.is_some() {
        return;
    }
    let Some(id) = state
        .interruptions
        .iter()
        .find(|i| !state.fired_interruptions.contains(&i.id) && is_triggered(&i.trigger, state))
        .map(|i| i.id.clone())
    else {
        return;
    };

    tracing::info!(interruption = %id, "interruption triggered");
    state.fired_interruptions.insert(id.clone());
    state.pending_interruption = Some(id.clone());
    events.push(CalendarEvent::InterruptionTriggered { interruption: id });
}

pub(super) fn dismiss(
    state: &mut CalendarState,
    events: &mut Vec<CalendarEvent>,
) -> Result<(), ActionError> {
    if state.conflict.is_some() {
        return Err(ActionError::ConflictPending);
    }
    let Some(interruption) = state.pending_interruption().cloned() else {
        return Err(ActionError::NoInterruption);
    };

    state.pending_interruption = None;
    apply(state, &interruption, events);
    events.push(CalendarEvent::InterruptionApplied {
        interruption: interruption.id,
    });

    scan(state, events);
    clock::refill(state, events);
    Ok(())
}

fn apply(state: &mut CalendarState, interruption: &Interruption, events: &mut Vec<CalendarEvent>) {
    match &interruption.effect {
        InterruptionEffect::ForcePlace { meeting, day, slot } => {
            force_place(state, meeting, SlotRef::new(*day, *slot), events);
        }
        InterruptionEffect::Reschedule {
            meeting,
            constraint,
        } => {
            let Some(template) = state.meetings.get_mut(meeting) else {
                tracing::warn!(meeting = %meeting, "reschedule target is unknown");
                return;
            };
            template.constraint = Some(constraint.clone());
            let locked = template.is_locked();

            let unplaced = !locked
                && state.placements.get(meeting).is_some_and(|at| {
                    placement::constraint_violation(constraint, *at).is_some()
                })
                && placement::unplace_meeting(state, meeting);
            events.push(CalendarEvent::ConstraintChanged {
                meeting: meeting.clone(),
                unplaced,
            });
        }
        InterruptionEffect::RemovePerson { person } => {
            let attended: Vec<MeetingId> = state
                .meetings
                .values()
                .filter(|m| m.person.as_deref() == Some(person.as_str()))
                .map(|m| m.id.clone())
                .collect();
            for id in attended {
                if placement::remove_meeting(state, &id) {
                    events.push(CalendarEvent::Removed { meeting: id });
                }
            }
        }
        InterruptionEffect::AddMeeting { meeting } => {
            if state.meetings.contains_key(&meeting.id) {
                tracing::warn!(meeting = %meeting.id, "added meeting already exists");
                return;
            }
            state.meetings.insert(meeting.id.clone(), meeting.clone());
            state.visible_queue.push(meeting.id.clone());
            events.push(CalendarEvent::Revealed {
                meetings: vec![meeting.id.clone()],
            });
        }
    }
}

fn force_place(
    state: &mut CalendarState,
    meeting: &Meeting,
    at: SlotRef,
    events: &mut Vec<CalendarEvent>,
) {
    if state.meetings.contains_key(&meeting.id) {
        tracing::warn!(meeting = %meeting.id, "forced meeting already exists");
        return;
    }
    match placement::force_place(state, meeting.clone(), at) {
        Ok(displaced) => {
            events.extend(
                displaced
                    .into_iter()
                    .map(|meeting| CalendarEvent::Displaced { meeting }),
            );
            events.push(CalendarEvent::Placed {
                meeting: meeting.id.clone(),
                at,
            });
        }
        Err(error) => {
            tracing::warn!(meeting = %meeting.id, %error, "forced placement skipped");
        }
    }
}
