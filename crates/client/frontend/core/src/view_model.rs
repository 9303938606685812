//! Read-only projection of a [`CalendarState`] for presentation layers.
use calendar_core::{
    CalendarState, Cell, GameConfig, Meeting, MeetingId, Mode, Outcome, OutcomeMeta, Resolution,
    SlotRef,
};

use crate::drag::HeldMeeting;
use crate::message::{FeedLog, MessageEntry};

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug)]
pub struct CalendarView {
    pub scenario_name: String,
    pub header: HeaderView,
    /// Cells indexed `[day][slot]`.
    pub cells: Vec<Vec<CellView>>,
    pub queue: Vec<QueueEntryView>,
    pub conflict: Option<ConflictView>,
    pub interruption: Option<InterruptionView>,
    pub dragging: Option<HeldMeeting>,
    pub trash_refused: bool,
    pub result: Option<ResultView>,
    pub messages: Vec<MessageEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub time_left_secs: u32,
    /// Remaining share of the round in percent.
    pub time_percent: u16,
    pub reputation: i32,
    pub chaos: bool,
    /// Countdown slowed by an open conflict.
    pub slowed: bool,
    pub delegate_uses_left: u8,
    pub trash_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Blocked,
    Meeting { id: MeetingId, locked: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub kind: CellKind,
    /// Text shown in the cell; only the first cell of a block carries it.
    pub label: String,
    pub color: Option<String>,
    /// First cell of a meeting or block.
    pub starts_block: bool,
    /// Part of the last rejected drop.
    pub flashing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntryView {
    pub id: MeetingId,
    pub title: String,
    pub duration: u8,
    pub color: String,
    pub urgent: bool,
    pub recurring: bool,
    pub trashable: bool,
    /// "place X first" when a dependency is still unplaced.
    pub hint: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionOption {
    pub resolution: Resolution,
    pub label: &'static str,
    pub detail: String,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictView {
    pub meeting: String,
    pub conflicts_with: String,
    pub options: Vec<ResolutionOption>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterruptionView {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub won: bool,
    pub meta: OutcomeMeta,
}

impl CalendarView {
    pub fn from_state(
        state: &CalendarState,
        scenario_name: &str,
        dragging: Option<&HeldMeeting>,
        trash_refused: bool,
        result: Option<&Outcome>,
        feed: &FeedLog,
        message_limit: usize,
    ) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            header: HeaderView::from_state(state),
            cells: collect_cells(state),
            queue: state
                .visible_queue
                .iter()
                .filter_map(|id| state.meeting(id))
                .map(|meeting| QueueEntryView::from_meeting(meeting, state))
                .collect(),
            conflict: ConflictView::from_state(state),
            interruption: state.pending_interruption().map(|i| InterruptionView {
                title: i.title.clone(),
                message: i.message.clone(),
            }),
            dragging: dragging.cloned(),
            trash_refused,
            result: result.map(|outcome| ResultView {
                won: outcome.is_won(),
                meta: outcome.meta().clone(),
            }),
            messages: collect_messages(feed, message_limit),
        }
    }

    pub fn mode_is_modal(&self) -> bool {
        self.conflict.is_some() || self.interruption.is_some()
    }
}

impl HeaderView {
    fn from_state(state: &CalendarState) -> Self {
        let total_ms = u64::from(state.config.round_secs.max(1)) * 1000;
        let percent = u64::from(state.time_left_ms) * 100 / total_ms;
        Self {
            time_left_secs: state.time_left_secs(),
            time_percent: percent.min(100) as u16,
            reputation: state.reputation,
            chaos: state.chaos_mode,
            slowed: state.speed_percent < 100,
            delegate_uses_left: state.delegate_uses_left,
            trash_count: state.trash_count,
        }
    }
}

fn collect_cells(state: &CalendarState) -> Vec<Vec<CellView>> {
    let flashing: &[SlotRef] = state
        .invalid_flash
        .as_ref()
        .map(|flash| flash.cells.as_slice())
        .unwrap_or_default();

    (0..GameConfig::DAYS)
        .map(|day| {
            (0..GameConfig::SLOTS)
                .map(|slot| {
                    let at = SlotRef::new(day, slot);
                    let previous = slot
                        .checked_sub(1)
                        .and_then(|prev| state.grid.cell(SlotRef::new(day, prev)));
                    let cell = state.grid.cell(at).cloned().unwrap_or_default();
                    let starts_block = !cell.is_empty() && previous != Some(&cell);
                    let mut view = cell_view(state, &cell, starts_block);
                    view.flashing = flashing.contains(&at);
                    view
                })
                .collect()
        })
        .collect()
}

fn cell_view(state: &CalendarState, cell: &Cell, starts_block: bool) -> CellView {
    let (kind, label, color) = match cell {
        Cell::Empty => (CellKind::Empty, String::new(), None),
        Cell::Blocked(index) => (
            CellKind::Blocked,
            state.blocks.get(*index).cloned().unwrap_or_default(),
            None,
        ),
        Cell::Meeting(id) => {
            let meeting = state.meeting(id);
            (
                CellKind::Meeting {
                    id: id.clone(),
                    locked: meeting.is_some_and(Meeting::is_locked),
                },
                meeting.map_or_else(|| id.to_string(), |m| m.title.clone()),
                meeting.map(|m| m.color.clone()),
            )
        }
    };
    CellView {
        kind,
        label: if starts_block { label } else { String::new() },
        color,
        starts_block,
        flashing: false,
    }
}

impl QueueEntryView {
    fn from_meeting(meeting: &Meeting, state: &CalendarState) -> Self {
        let hint = meeting
            .depends_on
            .as_ref()
            .filter(|dependency| !state.is_placed(dependency))
            .map(|dependency| {
                let name = state
                    .meeting(dependency)
                    .map_or_else(|| dependency.to_string(), |m| m.title.clone());
                format!("place {name} first")
            });
        Self {
            id: meeting.id.clone(),
            title: meeting.title.clone(),
            duration: meeting.duration,
            color: meeting.color.clone(),
            urgent: meeting.is_urgent(),
            recurring: meeting.is_recurring(),
            trashable: meeting.is_trashable(),
            hint,
        }
    }
}

impl ConflictView {
    fn from_state(state: &CalendarState) -> Option<Self> {
        if state.mode() != Mode::ConflictPending {
            return None;
        }
        let modal = state.conflict.as_ref()?;
        let meeting = state.meeting(&modal.meeting)?;
        let other = state
            .meeting(&modal.conflicts_with)
            .map_or_else(|| modal.conflicts_with.to_string(), |m| m.title.clone());
        let config = &state.config;

        let options = vec![
            ResolutionOption {
                resolution: Resolution::Reschedule,
                label: Resolution::Reschedule.label(),
                detail: format!("50/50, -{} rep if they say no", config.reschedule_failure_penalty),
                available: true,
            },
            ResolutionOption {
                resolution: Resolution::Delegate,
                label: Resolution::Delegate.label(),
                detail: format!("{} left", state.delegate_uses_left),
                available: state.delegate_uses_left > 0,
            },
            ResolutionOption {
                resolution: Resolution::Decline,
                label: Resolution::Decline.label(),
                detail: format!("-{} rep", config.decline_penalty),
                available: meeting.is_trashable(),
            },
            ResolutionOption {
                resolution: Resolution::Grovel,
                label: Resolution::Grovel.label(),
                detail: format!(
                    "-{}s, -{} rep",
                    config.grovel_time_cost_secs, config.grovel_reputation_cost
                ),
                available: true,
            },
        ];

        Some(Self {
            meeting: meeting.title.clone(),
            conflicts_with: other,
            options,
        })
    }
}

fn collect_messages(feed: &FeedLog, limit: usize) -> Vec<MessageEntry> {
    let mut entries: Vec<_> = feed.recent(limit).cloned().collect();
    entries.reverse();
    entries
}

#[cfg(test)]
mod tests {
    use calendar_core::{CalendarAction, CalendarEngine, PcgRng, PrefilledBlock, Scenario};

    use super::*;

    fn state() -> CalendarState {
        let scenario = Scenario {
            id: "view".into(),
            name: "View".into(),
            blurb: String::new(),
            prefilled: vec![PrefilledBlock {
                label: "Lunch".into(),
                day: 0,
                slot: 6,
                duration: 2,
            }],
            meetings: vec![
                Meeting::new("kickoff", "Kickoff", 2),
                Meeting::new("retro", "Retro", 1).with_depends_on("kickoff"),
            ],
            interruptions: Vec::new(),
        };
        CalendarState::new(&scenario, GameConfig::default(), 1)
    }

    fn view(state: &CalendarState) -> CalendarView {
        CalendarView::from_state(state, "View", None, false, None, &FeedLog::new(4), 4)
    }

    #[test]
    fn blocks_are_labelled_once() {
        let mut state = state();
        CalendarEngine::new(&mut state)
            .execute(&CalendarAction::place("kickoff", 2, 0), &PcgRng)
            .expect("placed");

        let view = view(&state);
        assert_eq!(view.cells[0][6].label, "Lunch");
        assert_eq!(view.cells[0][7].label, "");
        assert_eq!(view.cells[0][7].kind, CellKind::Blocked);
        assert!(view.cells[2][0].starts_block);
        assert_eq!(view.cells[2][0].label, "Kickoff");
        assert!(!view.cells[2][1].starts_block);
    }

    #[test]
    fn queue_hints_name_the_missing_dependency() {
        let view = view(&state());
        let retro = view.queue.iter().find(|e| e.title == "Retro").expect("queued");
        assert_eq!(retro.hint.as_deref(), Some("place Kickoff first"));
        assert_eq!(view.header.time_percent, 100);
        assert!(view.conflict.is_none());
    }
}
