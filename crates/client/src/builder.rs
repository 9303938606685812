//! Client builder: loads content and settles the play seed.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use calendar_content::{ConfigLoader, ScenarioCatalog, ScenarioLoader};
use calendar_core::GameConfig;
use client_frontend_core::FrontendConfig;

/// Everything a frontend needs to start playing.
#[derive(Debug)]
pub struct ClientSetup {
    pub catalog: ScenarioCatalog,
    pub game_config: GameConfig,
    pub seed: u64,
}

/// Builder for constructing a [`ClientSetup`] with proper validation.
///
/// - **Scenarios**: the built-in catalog unless a scenario directory is set
/// - **Game config**: defaults unless `FrontendConfig::game_config_path` is set
/// - **Seed**: the configured seed, otherwise derived from the clock
#[derive(Debug, Default)]
pub struct ClientBuilder {
    frontend_config: FrontendConfig,
    scenario_dir: Option<std::path::PathBuf>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frontend_config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = config;
        self
    }

    /// Load scenarios from `*.ron` files in a directory instead of the
    /// built-in set.
    pub fn scenario_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.scenario_dir = Some(dir.into());
        self
    }

    /// # Errors
    ///
    /// Returns an error if the scenario directory or the game config file
    /// cannot be loaded, or if the requested scenario id is unknown.
    pub fn build(self) -> Result<ClientSetup> {
        let catalog = match &self.scenario_dir {
            Some(dir) => {
                let scenarios = ScenarioLoader::load_dir(dir)
                    .with_context(|| format!("loading scenarios from {}", dir.display()))?;
                ScenarioCatalog::new(scenarios)?
            }
            None => ScenarioCatalog::builtin().context("loading built-in scenarios")?,
        };

        if let Some(id) = &self.frontend_config.scenario
            && catalog.get(id).is_none()
        {
            anyhow::bail!("unknown scenario '{id}'");
        }

        let game_config = match &self.frontend_config.game_config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };

        let seed = self.frontend_config.seed.unwrap_or_else(clock_seed);
        tracing::info!(
            scenarios = catalog.len(),
            round_secs = game_config.round_secs,
            seed,
            "client setup ready"
        );

        Ok(ClientSetup {
            catalog,
            game_config,
            seed,
        })
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    nanos ^ u64::from(std::process::id()).rotate_left(32)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_use_builtin_content() {
        let config = FrontendConfig {
            seed: Some(11),
            ..FrontendConfig::default()
        };
        let setup = ClientBuilder::new()
            .frontend_config(config)
            .build()
            .expect("builds");
        assert_eq!(setup.catalog.len(), 3);
        assert_eq!(setup.game_config, GameConfig::default());
        assert_eq!(setup.seed, 11);
    }

    #[test]
    fn game_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "round_secs = 60").expect("write");
        let config = FrontendConfig {
            game_config_path: Some(file.path().to_path_buf()),
            ..FrontendConfig::default()
        };

        let setup = ClientBuilder::new()
            .frontend_config(config)
            .build()
            .expect("builds");
        assert_eq!(setup.game_config.round_secs, 60);
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let config = FrontendConfig {
            scenario: Some("friday-fun".into()),
            ..FrontendConfig::default()
        };
        let error = ClientBuilder::new()
            .frontend_config(config)
            .build()
            .expect_err("unknown id");
        assert!(error.to_string().contains("friday-fun"));
    }

    #[test]
    fn missing_scenario_dir_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = ClientBuilder::new()
            .scenario_dir(dir.path().join("absent"))
            .build();
        assert!(result.is_err());
    }
}
