//! Intents accepted by the reducer.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::model::{MeetingId, SlotRef};

/// Player and timer intents.
///
/// Frontends translate raw input into these; the reducer is the only place
/// they take effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarAction {
    BeginDrag { meeting: MeetingId },
    EndDrag,
    /// Drop a visible meeting with its first cell at `at`.
    Place { meeting: MeetingId, at: SlotRef },
    Unplace { meeting: MeetingId },
    Trash { meeting: MeetingId },
    /// Advance the countdown by `elapsed_ms` of wall-clock time.
    Tick { elapsed_ms: u32 },
    DismissInterruption,
    ResolveConflict { resolution: Resolution },
}

impl CalendarAction {
    pub fn place(meeting: impl Into<MeetingId>, day: usize, slot: usize) -> Self {
        Self::Place {
            meeting: meeting.into(),
            at: SlotRef::new(day, slot),
        }
    }

    pub fn tick(elapsed_ms: u32) -> Self {
        Self::Tick { elapsed_ms }
    }

    /// Short label for logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::BeginDrag { .. } => "begin_drag",
            Self::EndDrag => "end_drag",
            Self::Place { .. } => "place",
            Self::Unplace { .. } => "unplace",
            Self::Trash { .. } => "trash",
            Self::Tick { .. } => "tick",
            Self::DismissInterruption => "dismiss_interruption",
            Self::ResolveConflict { .. } => "resolve_conflict",
        }
    }

    /// Ticks are frequent enough that logging them drowns everything else.
    pub fn is_tick(&self) -> bool {
        matches!(self, Self::Tick { .. })
    }
}

/// Ways out of a conflict modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Coin flip: place on success, lose reputation on failure.
    Reschedule,
    /// Place for free; limited uses per play.
    Delegate,
    /// Throw the new meeting away for a reputation hit.
    Decline,
    /// Place at a cost in time and reputation.
    Grovel,
}

impl Resolution {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reschedule => "Ask to Reschedule",
            Self::Delegate => "Delegate",
            Self::Decline => "Decline",
            Self::Grovel => "Grovel",
        }
    }
}
