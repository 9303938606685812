//! Game configuration loader.

use std::path::Path;

use calendar_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys keep their defaults, so an override file only lists what
/// it changes.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and sanity-check a TOML document.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.round_secs > 0, "round_secs must be positive");
        anyhow::ensure!(
            (1..=100).contains(&config.conflict_speed_percent),
            "conflict_speed_percent must be within 1..=100, got {}",
            config.conflict_speed_percent
        );
        anyhow::ensure!(
            config.visible_capacity > 0,
            "visible_capacity must be positive"
        );
        anyhow::ensure!(
            config.chaos_threshold_secs <= config.round_secs,
            "chaos_threshold_secs exceeds round_secs"
        );

        Ok(config)
    }
}
