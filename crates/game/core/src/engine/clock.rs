//! Countdown, chaos mode, and the drip feed.

use crate::config::GameConfig;
use crate::state::CalendarState;

use super::{CalendarEvent, interruption};

pub(super) fn tick(state: &mut CalendarState, elapsed_ms: u32, events: &mut Vec<CalendarEvent>) {
    let scaled = (u64::from(elapsed_ms) * u64::from(state.speed_percent) / 100) as u32;
    state.time_left_ms = state.time_left_ms.saturating_sub(scaled);

    if let Some(flash) = &mut state.invalid_flash {
        flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
        if flash.remaining_ms == 0 {
            state.invalid_flash = None;
        }
    }

    let chaos_at_ms = GameConfig::secs_to_ms(state.config.chaos_threshold_secs);
    if !state.chaos_mode && state.time_left_ms <= chaos_at_ms {
        enter_chaos(state, events);
    }

    if state.conflict.is_none() {
        interruption::scan(state, events);
    }

    if state.visible_queue.is_empty() {
        refill(state, events);
    }
}

/// Floods every undripped meeting into the visible queue, urgent first.
fn enter_chaos(state: &mut CalendarState, events: &mut Vec<CalendarEvent>) {
    let flooded: Vec<_> = state.unrevealed().cloned().collect();
    state.drip_index = state.full_queue.len();
    state.visible_queue.extend(flooded.iter().cloned());

    let meetings = &state.meetings;
    state
        .visible_queue
        .sort_by_key(|id| !meetings.get(id).is_some_and(|m| m.is_urgent()));
    state.chaos_mode = true;

    tracing::info!(
        flooded = flooded.len(),
        time_left_ms = state.time_left_ms,
        "chaos mode"
    );
    events.push(CalendarEvent::ChaosStarted {
        flooded: flooded.len(),
    });
    if !flooded.is_empty() {
        events.push(CalendarEvent::Revealed { meetings: flooded });
    }
}

/// Tops the visible queue up from the drip cursor.
///
/// Reveals at most [`CalendarState::drip_allowance`] meetings and stops at
/// the visible capacity. Entries handled out of band (removed, expanded)
/// are skipped without counting.
pub(super) fn refill(state: &mut CalendarState, events: &mut Vec<CalendarEvent>) {
    let allowance = state.drip_allowance();
    let capacity = state.config.visible_capacity;
    let mut revealed = Vec::new();

    while state.drip_index < state.full_queue.len() {
        if state.visible_queue.len() >= capacity
            || allowance.is_some_and(|limit| revealed.len() >= limit)
        {
            break;
        }
        let id = state.full_queue[state.drip_index].clone();
        state.drip_index += 1;
        if state.is_handled(&id) {
            continue;
        }
        state.visible_queue.push(id.clone());
        revealed.push(id);
    }

    if !revealed.is_empty() {
        tracing::debug!(count = revealed.len(), "drip revealed meetings");
        events.push(CalendarEvent::Revealed { meetings: revealed });
    }
}
