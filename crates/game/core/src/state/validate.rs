//! Structural invariants of [`CalendarState`].
//!
//! The engine checks these after every accepted intent in debug builds; the
//! integration tests check them after every step.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::model::{Cell, Grid, MeetingId, SlotRef};

use super::CalendarState;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("placed meeting '{0}' has no template")]
    UnknownPlacedMeeting(MeetingId),

    #[error("meeting '{meeting}' placed at {at:?} does not fit the grid")]
    PlacementOutOfBounds { meeting: MeetingId, at: SlotRef },

    #[error("cell {at:?} should hold '{expected}' but holds {found:?}")]
    CellMismatch {
        at: SlotRef,
        expected: MeetingId,
        found: Cell,
    },

    #[error("cell {at:?} holds '{meeting}' which is not placed there")]
    OrphanCell { at: SlotRef, meeting: MeetingId },

    #[error("meeting '{meeting}' is in {count} queue buckets")]
    QueuePartition { meeting: MeetingId, count: usize },

    #[error("meeting '{0}' appears twice in the visible queue")]
    DuplicateVisible(MeetingId),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPlacedMeeting(_) => "STATE_UNKNOWN_PLACED_MEETING",
            Self::PlacementOutOfBounds { .. } => "STATE_PLACEMENT_OUT_OF_BOUNDS",
            Self::CellMismatch { .. } => "STATE_CELL_MISMATCH",
            Self::OrphanCell { .. } => "STATE_ORPHAN_CELL",
            Self::QueuePartition { .. } => "STATE_QUEUE_PARTITION",
            Self::DuplicateVisible(_) => "STATE_DUPLICATE_VISIBLE",
        }
    }
}

impl CalendarState {
    /// Checks grid exclusivity, grid/placement consistency, and the queue
    /// partition.
    pub fn validate(&self) -> Result<(), StateError> {
        self.validate_placements()?;
        self.validate_partition()
    }

    fn validate_placements(&self) -> Result<(), StateError> {
        for (id, at) in &self.placements {
            let meeting = self
                .meetings
                .get(id)
                .ok_or_else(|| StateError::UnknownPlacedMeeting(id.clone()))?;
            let duration = meeting.duration as usize;
            if !at.in_bounds() || at.slot + duration > GameConfig::SLOTS {
                return Err(StateError::PlacementOutOfBounds {
                    meeting: id.clone(),
                    at: *at,
                });
            }
            for cell in Grid::region(*at, duration) {
                let found = self.grid.cell(cell).cloned().unwrap_or_default();
                if found.meeting() != Some(id) {
                    return Err(StateError::CellMismatch {
                        at: cell,
                        expected: id.clone(),
                        found,
                    });
                }
            }
        }

        for (at, cell) in self.grid.cells() {
            let Some(id) = cell.meeting() else {
                continue;
            };
            let covered = self.placements.get(id).is_some_and(|start| {
                let duration = self.meetings.get(id).map_or(0, |m| m.duration as usize);
                start.day == at.day && (start.slot..start.slot + duration).contains(&at.slot)
            });
            if !covered {
                return Err(StateError::OrphanCell {
                    at,
                    meeting: id.clone(),
                });
            }
        }

        Ok(())
    }

    fn validate_partition(&self) -> Result<(), StateError> {
        let mut buckets: BTreeMap<&MeetingId, usize> =
            self.meetings.keys().map(|id| (id, 0)).collect();

        let mut bump = |id: &MeetingId| {
            if let Some(count) = buckets.get_mut(id) {
                *count += 1;
            }
        };

        for (index, id) in self.visible_queue.iter().enumerate() {
            if self.visible_queue[..index].contains(id) {
                return Err(StateError::DuplicateVisible(id.clone()));
            }
            bump(id);
        }
        self.placements.keys().for_each(&mut bump);
        self.trashed.iter().for_each(&mut bump);
        self.expanded.iter().for_each(&mut bump);
        self.unrevealed().for_each(&mut bump);

        match buckets.into_iter().find(|(_, count)| *count != 1) {
            Some((meeting, count)) => Err(StateError::QueuePartition {
                meeting: meeting.clone(),
                count,
            }),
            None => Ok(()),
        }
    }
}
