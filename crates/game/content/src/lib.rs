//! Scenario content and loaders.
//!
//! This crate ships the built-in puzzle scenarios and loads external ones:
//! - Scenarios (data-driven via RON, embedded at compile time)
//! - Game configuration overrides (data-driven via TOML)
//!
//! Content is validated on load and consumed by frontends when a play
//! starts; it never changes during a play.

#[cfg(feature = "loaders")]
pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use catalog::ScenarioCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
