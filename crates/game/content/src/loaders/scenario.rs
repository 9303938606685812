//! Scenario loader.

use std::path::Path;

use calendar_core::Scenario;

use crate::loaders::{LoadResult, read_file};

/// Loader for scenario definitions from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate one scenario file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse and validate a RON document.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario
            .validate()
            .map_err(|e| anyhow::anyhow!("Scenario '{}' is malformed: {}", scenario.id, e))?;
        Ok(scenario)
    }

    /// Load every `*.ron` file in a directory, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<Scenario>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
