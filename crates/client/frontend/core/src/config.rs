//! Frontend configuration structures and loaders.
//!
//! This module contains session settings shared across frontend
//! implementations (CLI, GUI, etc.).

use std::env;
use std::path::PathBuf;

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Timer tick interval in milliseconds.
    pub tick_ms: u64,
    /// Pause between the end of a play and the result report.
    pub result_delay_ms: u32,
    pub feed_capacity: usize,
    /// Fixed seed for reproducible plays; random when unset.
    pub seed: Option<u64>,
    /// Scenario id to start with instead of a random pick.
    pub scenario: Option<String>,
    /// TOML file overriding the default game configuration.
    pub game_config_path: Option<PathBuf>,
}

impl FrontendConfig {
    pub const DEFAULT_TICK_MS: u64 = 250;
    pub const DEFAULT_RESULT_DELAY_MS: u32 = 1500;
    pub const DEFAULT_FEED_CAPACITY: usize = 64;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CALENDAR_TICK_MS` - Timer tick interval (default: 250)
    /// - `CALENDAR_RESULT_DELAY_MS` - Delay before the result report (default: 1500)
    /// - `CALENDAR_FEED_CAPACITY` - Feed log capacity (default: 64)
    /// - `CALENDAR_SEED` - Fixed play seed (default: random)
    /// - `CALENDAR_SCENARIO` - Scenario id for the first play (default: random)
    /// - `CALENDAR_CONFIG` - Path to a GameConfig TOML file (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("CALENDAR_TICK_MS") {
            config.tick_ms = tick_ms.max(1);
        }
        if let Some(delay) = read_env::<u32>("CALENDAR_RESULT_DELAY_MS") {
            config.result_delay_ms = delay;
        }
        if let Some(capacity) = read_env::<usize>("CALENDAR_FEED_CAPACITY") {
            config.feed_capacity = capacity.max(1);
        }
        config.seed = read_env::<u64>("CALENDAR_SEED");
        config.scenario = read_env_string("CALENDAR_SCENARIO");
        config.game_config_path = read_env_string("CALENDAR_CONFIG").map(PathBuf::from);

        config
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            result_delay_ms: Self::DEFAULT_RESULT_DELAY_MS,
            feed_capacity: Self::DEFAULT_FEED_CAPACITY,
            seed: None,
            scenario: None,
            game_config_path: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
