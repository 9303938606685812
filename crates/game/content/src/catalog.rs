//! Built-in scenario catalog.

use calendar_core::rng::context;
use calendar_core::{PcgRng, RngOracle, Scenario, compute_seed};

use crate::loaders::{LoadResult, ScenarioLoader};

const BUILTIN: [(&str, &str); 3] = [
    (
        "monday_madness.ron",
        include_str!("../data/scenarios/monday_madness.ron"),
    ),
    (
        "quarter_end.ron",
        include_str!("../data/scenarios/quarter_end.ron"),
    ),
    (
        "launch_week.ron",
        include_str!("../data/scenarios/launch_week.ron"),
    ),
];

/// Validated scenarios plus the memory needed to avoid repeats.
#[derive(Clone, Debug)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    last_picked: Option<usize>,
    picks: u64,
}

impl ScenarioCatalog {
    /// Parses the scenarios embedded in the binary.
    pub fn builtin() -> LoadResult<Self> {
        let scenarios = BUILTIN
            .iter()
            .map(|(name, source)| {
                ScenarioLoader::parse(source).map_err(|e| anyhow::anyhow!("{}: {}", name, e))
            })
            .collect::<LoadResult<Vec<_>>>()?;
        Self::new(scenarios)
    }

    pub fn new(scenarios: Vec<Scenario>) -> LoadResult<Self> {
        anyhow::ensure!(!scenarios.is_empty(), "scenario catalog is empty");
        for (index, scenario) in scenarios.iter().enumerate() {
            anyhow::ensure!(
                scenarios[..index].iter().all(|other| other.id != scenario.id),
                "duplicate scenario id '{}'",
                scenario.id
            );
        }
        tracing::debug!(count = scenarios.len(), "scenario catalog ready");
        Ok(Self {
            scenarios,
            last_picked: None,
            picks: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }

    /// Picks a scenario at random, never the same one twice in a row.
    pub fn pick(&mut self, seed: u64) -> &Scenario {
        let candidates: Vec<usize> = (0..self.scenarios.len())
            .filter(|index| self.scenarios.len() == 1 || Some(*index) != self.last_picked)
            .collect();
        let draw = compute_seed(seed, self.picks, context::SCENARIO_PICK);
        let index = candidates[PcgRng.index(draw, candidates.len())];

        self.picks += 1;
        self.last_picked = Some(index);
        let scenario = &self.scenarios[index];
        tracing::info!(scenario = %scenario.id, "scenario picked");
        scenario
    }

    /// Selects a scenario by id and remembers it as the last pick.
    pub fn select(&mut self, id: &str) -> Option<&Scenario> {
        let index = self.scenarios.iter().position(|s| s.id == id)?;
        self.last_picked = Some(index);
        self.scenarios.get(index)
    }
}
