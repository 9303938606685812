use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

use super::{Constraint, Grid, Meeting, MeetingId, SlotRef};

/// Immovable block drawn on the grid before play starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefilledBlock {
    pub label: String,
    pub day: usize,
    pub slot: usize,
    pub duration: u8,
}

impl PrefilledBlock {
    pub fn start(&self) -> SlotRef {
        SlotRef::new(self.day, self.slot)
    }
}

/// Identifier of a scenario interruption.
pub type InterruptionId = String;

/// When an interruption becomes pending.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Remaining countdown at or below `secs`.
    TimeLeft { secs: u32 },
    /// Cumulative successful placements at or above `count`.
    Placements { count: u32 },
}

/// What happens when a pending interruption is dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterruptionEffect {
    /// Drops a new locked meeting onto the grid, displacing whatever is there.
    ForcePlace {
        meeting: Meeting,
        day: usize,
        slot: usize,
    },
    /// Replaces the constraint of an existing meeting.
    Reschedule {
        meeting: MeetingId,
        constraint: Constraint,
    },
    /// Removes every meeting attended by `person`.
    RemovePerson { person: String },
    /// Injects a brand-new meeting into the visible queue.
    AddMeeting { meeting: Meeting },
}

impl InterruptionEffect {
    pub fn is_add_meeting(&self) -> bool {
        matches!(self, Self::AddMeeting { .. })
    }

    /// Meeting template introduced by this effect, if any.
    pub fn introduced_meeting(&self) -> Option<&Meeting> {
        match self {
            Self::ForcePlace { meeting, .. } | Self::AddMeeting { meeting } => Some(meeting),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interruption {
    pub id: InterruptionId,
    pub title: String,
    pub message: String,
    pub trigger: Trigger,
    pub effect: InterruptionEffect,
}

/// A complete puzzle instance.
///
/// `meetings` is the full queue in drip order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub blurb: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefilled: Vec<PrefilledBlock>,
    pub meetings: Vec<Meeting>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interruptions: Vec<Interruption>,
}

/// Malformed scenario content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario '{scenario}' has no meetings")]
    Empty { scenario: String },

    #[error("duplicate meeting id '{0}'")]
    DuplicateMeeting(MeetingId),

    #[error("duplicate interruption id '{0}'")]
    DuplicateInterruption(InterruptionId),

    #[error("meeting '{meeting}' has invalid duration {duration}")]
    InvalidDuration { meeting: MeetingId, duration: u8 },

    #[error("meeting '{meeting}' references unknown meeting '{target}'")]
    UnknownReference { meeting: MeetingId, target: MeetingId },

    #[error("prefilled block '{label}' does not fit on the grid")]
    BlockOutOfBounds { label: String },

    #[error("prefilled block '{label}' overlaps another block")]
    BlockOverlap { label: String },

    #[error("interruption '{interruption}' references unknown meeting '{target}'")]
    UnknownInterruptionTarget {
        interruption: InterruptionId,
        target: MeetingId,
    },
}

impl GameError for ScenarioError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "SCENARIO_EMPTY",
            Self::DuplicateMeeting(_) => "SCENARIO_DUPLICATE_MEETING",
            Self::DuplicateInterruption(_) => "SCENARIO_DUPLICATE_INTERRUPTION",
            Self::InvalidDuration { .. } => "SCENARIO_INVALID_DURATION",
            Self::UnknownReference { .. } => "SCENARIO_UNKNOWN_REFERENCE",
            Self::BlockOutOfBounds { .. } => "SCENARIO_BLOCK_OUT_OF_BOUNDS",
            Self::BlockOverlap { .. } => "SCENARIO_BLOCK_OVERLAP",
            Self::UnknownInterruptionTarget { .. } => "SCENARIO_UNKNOWN_INTERRUPTION_TARGET",
        }
    }
}

impl Scenario {
    /// Every meeting template the scenario can ever produce, queue first.
    pub fn all_meetings(&self) -> impl Iterator<Item = &Meeting> {
        self.meetings.iter().chain(
            self.interruptions
                .iter()
                .filter_map(|interruption| interruption.effect.introduced_meeting()),
        )
    }

    /// Checks ids, references, durations and prefilled layout.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.meetings.is_empty() {
            return Err(ScenarioError::Empty {
                scenario: self.id.clone(),
            });
        }

        let mut ids = BTreeSet::new();
        for meeting in self.all_meetings() {
            if !ids.insert(meeting.id.clone()) {
                return Err(ScenarioError::DuplicateMeeting(meeting.id.clone()));
            }
            if meeting.duration == 0 || meeting.duration as usize > GameConfig::SLOTS {
                return Err(ScenarioError::InvalidDuration {
                    meeting: meeting.id.clone(),
                    duration: meeting.duration,
                });
            }
        }

        for meeting in self.all_meetings() {
            for target in [&meeting.depends_on, &meeting.conflicts_with]
                .into_iter()
                .flatten()
            {
                if !ids.contains(target) {
                    return Err(ScenarioError::UnknownReference {
                        meeting: meeting.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let mut interruption_ids = BTreeSet::new();
        for interruption in &self.interruptions {
            if !interruption_ids.insert(interruption.id.clone()) {
                return Err(ScenarioError::DuplicateInterruption(
                    interruption.id.clone(),
                ));
            }
            if let InterruptionEffect::Reschedule { meeting, .. } = &interruption.effect
                && !ids.contains(meeting)
            {
                return Err(ScenarioError::UnknownInterruptionTarget {
                    interruption: interruption.id.clone(),
                    target: meeting.clone(),
                });
            }
        }

        let mut occupied = BTreeSet::new();
        for block in &self.prefilled {
            let start = block.start();
            let duration = block.duration as usize;
            if block.duration == 0
                || !start.in_bounds()
                || start.slot + duration > GameConfig::SLOTS
            {
                return Err(ScenarioError::BlockOutOfBounds {
                    label: block.label.clone(),
                });
            }
            for cell in Grid::region(start, duration) {
                if !occupied.insert(cell) {
                    return Err(ScenarioError::BlockOverlap {
                        label: block.label.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(meetings: Vec<Meeting>) -> Scenario {
        Scenario {
            id: "test".into(),
            name: "Test".into(),
            blurb: String::new(),
            prefilled: Vec::new(),
            meetings,
            interruptions: Vec::new(),
        }
    }

    #[test]
    fn rejects_dangling_dependency() {
        let s = scenario(vec![Meeting::new("a", "A", 1).with_depends_on("ghost")]);
        assert!(matches!(
            s.validate(),
            Err(ScenarioError::UnknownReference { .. })
        ));
    }

    #[test]
    fn rejects_overlapping_blocks() {
        let mut s = scenario(vec![Meeting::new("a", "A", 1)]);
        s.prefilled = vec![
            PrefilledBlock {
                label: "Lunch".into(),
                day: 0,
                slot: 6,
                duration: 2,
            },
            PrefilledBlock {
                label: "Dentist".into(),
                day: 0,
                slot: 7,
                duration: 1,
            },
        ];
        assert_eq!(
            s.validate(),
            Err(ScenarioError::BlockOverlap {
                label: "Dentist".into()
            })
        );
    }

    #[test]
    fn interruption_meetings_count_as_known_ids() {
        let mut s = scenario(vec![Meeting::new("a", "A", 1).with_conflicts_with("ceo")]);
        s.interruptions.push(Interruption {
            id: "ceo-drop-in".into(),
            title: "CEO".into(),
            message: String::new(),
            trigger: Trigger::Placements { count: 1 },
            effect: InterruptionEffect::AddMeeting {
                meeting: Meeting::new("ceo", "CEO Sync", 2),
            },
        });
        assert_eq!(s.validate(), Ok(()));
    }
}
