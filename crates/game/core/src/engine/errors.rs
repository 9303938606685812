//! Errors surfaced when the reducer refuses an intent.

use crate::error::{ErrorSeverity, GameError};
use crate::model::MeetingId;

use super::Resolution;

/// Why an intent was refused. A refused intent never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,

    #[error("a conflict must be resolved first")]
    ConflictPending,

    #[error("an interruption must be dismissed first")]
    InterruptionPending,

    #[error("there is no conflict to resolve")]
    NoConflict,

    #[error("there is no interruption to dismiss")]
    NoInterruption,

    #[error("unknown meeting '{0}'")]
    UnknownMeeting(MeetingId),

    #[error("meeting '{0}' is not in the queue")]
    NotVisible(MeetingId),

    #[error("meeting '{0}' is not on the calendar")]
    NotPlaced(MeetingId),

    #[error("meeting '{0}' is locked in place")]
    Locked(MeetingId),

    #[error("meeting '{0}' cannot be trashed")]
    Untrashable(MeetingId),

    #[error("{resolution} is not available: {reason}")]
    ResolutionUnavailable {
        resolution: Resolution,
        reason: &'static str,
    },
}

impl ActionError {
    pub(crate) fn unavailable(resolution: Resolution, reason: &'static str) -> Self {
        Self::ResolutionUnavailable { resolution, reason }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMeeting(_) => ErrorSeverity::Internal,
            Self::GameOver
            | Self::ConflictPending
            | Self::InterruptionPending
            | Self::NoConflict
            | Self::NoInterruption => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver => "ACTION_GAME_OVER",
            Self::ConflictPending => "ACTION_CONFLICT_PENDING",
            Self::InterruptionPending => "ACTION_INTERRUPTION_PENDING",
            Self::NoConflict => "ACTION_NO_CONFLICT",
            Self::NoInterruption => "ACTION_NO_INTERRUPTION",
            Self::UnknownMeeting(_) => "ACTION_UNKNOWN_MEETING",
            Self::NotVisible(_) => "ACTION_NOT_VISIBLE",
            Self::NotPlaced(_) => "ACTION_NOT_PLACED",
            Self::Locked(_) => "ACTION_LOCKED",
            Self::Untrashable(_) => "ACTION_UNTRASHABLE",
            Self::ResolutionUnavailable { .. } => "ACTION_RESOLUTION_UNAVAILABLE",
        }
    }
}
