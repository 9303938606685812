//! Authoritative puzzle state.
//!
//! [`CalendarState`] is the single snapshot owned by the reducer. Frontends
//! clone or borrow it for rendering but mutate it exclusively through
//! [`crate::engine::CalendarEngine`].
mod validate;

use std::collections::{BTreeMap, BTreeSet};

pub use validate::StateError;

use crate::config::GameConfig;
use crate::model::{
    Cell, Grid, Interruption, InterruptionId, Meeting, MeetingId, Placements, Scenario, SlotRef,
};

/// Interaction mode derived from the pending modals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    ConflictPending,
    InterruptionPending,
}

/// Open conflict-resolution modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictModal {
    /// Meeting the player tried to place.
    pub meeting: MeetingId,
    /// Already-placed meeting it clashes with.
    pub conflicts_with: MeetingId,
    /// Where the player dropped it.
    pub at: SlotRef,
}

/// Cells highlighted after an illegal drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFlash {
    pub cells: Vec<SlotRef>,
    pub remaining_ms: u32,
}

/// Canonical snapshot of one play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub config: GameConfig,
    pub scenario_id: String,
    /// Seed for the reducer's own random draws; combined with `nonce`.
    pub seed: u64,
    /// Accepted-intent counter.
    pub nonce: u64,

    pub grid: Grid,
    /// Labels of the prefilled blocks, indexed by [`Cell::Blocked`].
    pub blocks: Vec<String>,
    /// Every meeting template known to this play, including day-copies
    /// and interruption-injected meetings.
    pub meetings: BTreeMap<MeetingId, Meeting>,
    pub placements: Placements,

    /// The scenario's queue in drip order.
    pub full_queue: Vec<MeetingId>,
    /// Meetings currently offered to the player.
    pub visible_queue: Vec<MeetingId>,
    /// Next undripped index into `full_queue`.
    pub drip_index: usize,
    pub trashed: BTreeSet<MeetingId>,
    /// Recurring parents replaced by their day-copies.
    pub expanded: BTreeSet<MeetingId>,

    pub interruptions: Vec<Interruption>,
    pub fired_interruptions: BTreeSet<InterruptionId>,
    pub pending_interruption: Option<InterruptionId>,
    pub conflict: Option<ConflictModal>,

    pub reputation: i32,
    pub time_left_ms: u32,
    /// Countdown speed in percent.
    pub speed_percent: u32,
    pub placement_count: u32,
    pub trash_count: u32,
    pub total_trash_penalty_secs: u32,
    pub delegate_uses_left: u8,
    pub grovel_count: u32,
    pub chaos_mode: bool,
    pub no_invalid_placements: bool,
    pub recurring_all_five: bool,
    pub trashed_email: bool,

    pub invalid_flash: Option<InvalidFlash>,
    /// Meeting currently held by the pointer.
    pub dragging: Option<MeetingId>,
}

impl CalendarState {
    /// Builds a fresh play from a scenario (`createInitialState`).
    ///
    /// Prefilled blocks are stamped onto the grid and the first
    /// `initial_visible` meetings are revealed.
    pub fn new(scenario: &Scenario, config: GameConfig, seed: u64) -> Self {
        let mut grid = Grid::new();
        let mut blocks = Vec::with_capacity(scenario.prefilled.len());
        for (index, block) in scenario.prefilled.iter().enumerate() {
            grid.fill(block.start(), block.duration as usize, &Cell::Blocked(index));
            blocks.push(block.label.clone());
        }

        let meetings = scenario
            .meetings
            .iter()
            .map(|meeting| (meeting.id.clone(), meeting.clone()))
            .collect();
        let full_queue: Vec<MeetingId> =
            scenario.meetings.iter().map(|m| m.id.clone()).collect();
        let revealed = config.initial_visible.min(full_queue.len());

        Self {
            scenario_id: scenario.id.clone(),
            seed,
            nonce: 0,
            grid,
            blocks,
            meetings,
            placements: Placements::new(),
            visible_queue: full_queue[..revealed].to_vec(),
            drip_index: revealed,
            full_queue,
            trashed: BTreeSet::new(),
            expanded: BTreeSet::new(),
            interruptions: scenario.interruptions.clone(),
            fired_interruptions: BTreeSet::new(),
            pending_interruption: None,
            conflict: None,
            reputation: config.starting_reputation,
            time_left_ms: GameConfig::secs_to_ms(config.round_secs),
            speed_percent: 100,
            placement_count: 0,
            trash_count: 0,
            total_trash_penalty_secs: 0,
            delegate_uses_left: config.delegate_uses,
            grovel_count: 0,
            chaos_mode: false,
            no_invalid_placements: true,
            recurring_all_five: false,
            trashed_email: false,
            invalid_flash: None,
            dragging: None,
            config,
        }
    }

    pub fn meeting(&self, id: &MeetingId) -> Option<&Meeting> {
        self.meetings.get(id)
    }

    pub fn is_visible(&self, id: &MeetingId) -> bool {
        self.visible_queue.contains(id)
    }

    pub fn is_placed(&self, id: &MeetingId) -> bool {
        self.placements.contains_key(id)
    }

    /// True once a meeting has left the unrevealed pool for good or for now.
    pub fn is_handled(&self, id: &MeetingId) -> bool {
        self.is_visible(id)
            || self.is_placed(id)
            || self.trashed.contains(id)
            || self.expanded.contains(id)
    }

    /// Queue entries past the drip cursor that have not been handled yet.
    pub fn unrevealed(&self) -> impl Iterator<Item = &MeetingId> {
        self.full_queue[self.drip_index.min(self.full_queue.len())..]
            .iter()
            .filter(|id| !self.is_handled(id))
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_ms / 1000
    }

    pub fn mode(&self) -> Mode {
        if self.conflict.is_some() {
            Mode::ConflictPending
        } else if self.pending_interruption.is_some() {
            Mode::InterruptionPending
        } else {
            Mode::Normal
        }
    }

    pub fn pending_interruption(&self) -> Option<&Interruption> {
        let id = self.pending_interruption.as_ref()?;
        self.interruptions.iter().find(|i| &i.id == id)
    }

    /// How many meetings the drip feed may reveal at once; `None` is unlimited.
    pub fn drip_allowance(&self) -> Option<usize> {
        if self.chaos_mode {
            None
        } else if self.time_left_ms < GameConfig::secs_to_ms(self.config.rush_threshold_secs)
        {
            Some(2)
        } else {
            Some(1)
        }
    }

    /// Win condition: nothing left to schedule and nothing left to happen.
    pub fn is_won(&self) -> bool {
        self.visible_queue.is_empty()
            && self.drip_index >= self.full_queue.len()
            && self.pending_interruption.is_none()
            && self
                .interruptions
                .iter()
                .filter(|i| i.effect.is_add_meeting())
                .all(|i| self.fired_interruptions.contains(&i.id))
    }

    /// Fail condition: the countdown ran out first.
    pub fn is_failed(&self) -> bool {
        self.time_left_ms == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.time_left_ms == 0 || self.is_won()
    }

    /// Id occupying a cell, if it holds a meeting.
    pub fn meeting_at(&self, at: SlotRef) -> Option<&MeetingId> {
        self.grid.cell(at)?.meeting()
    }

    /// Label of the prefilled block at a cell, if any.
    pub fn block_at(&self, at: SlotRef) -> Option<&str> {
        match self.grid.cell(at)? {
            Cell::Blocked(index) => self.blocks.get(*index).map(String::as_str),
            _ => None,
        }
    }
}
