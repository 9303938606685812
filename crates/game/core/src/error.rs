//! Common error infrastructure for calendar-core.
//!
//! Domain-specific errors (`PlacementError`, `ActionError`, `ScenarioError`,
//! `StateError`) live next to the code that produces them. This module only
//! provides the classification they share.
//!
//! Nothing in the puzzle is fatal: a refused intent is a game-design
//! rejection, and the reducer guarantees that a refused intent leaves the
//! state untouched.

/// Severity level of an error, used for logging priority and UI feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The player can try again with a different move.
    ///
    /// Examples: occupied cell, dependency not placed yet.
    Recoverable,

    /// The intent does not make sense in the current state.
    ///
    /// Examples: stale drag reference, resolving when no conflict is open.
    Validation,

    /// Inconsistent state or content; indicates a bug.
    ///
    /// Examples: grid/placement desync, dangling meeting reference in a scenario.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all calendar-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who can fix it, not on impact
/// - Keep `error_code` stable; frontends key feedback off it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
