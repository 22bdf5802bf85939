use std::path::{Path, PathBuf};

use anyhow::Context;
use ludo_strategies::StrategyKind;
use serde::{Deserialize, Serialize};

/// Settings for a league tournament, loadable from a JSON file.
///
/// Missing fields take their default values. Loading does not validate, since
/// command line arguments may still override fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub strategies: Vec<StrategyKind>,
    pub games_per_match: usize,
    pub seed: Option<u64>,
    /// Games are stopped and counted as a draw after this many rolls.
    pub max_turns: usize,
    pub record_games_to_directory: Option<PathBuf>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
            games_per_match: 1,
            seed: None,
            max_turns: 1000,
            record_games_to_directory: None,
        }
    }
}

impl TournamentConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.strategies.len() < 2 {
            anyhow::bail!(
                "A tournament needs at least two strategies, got {}",
                self.strategies.len()
            );
        }
        if let Some(kind) = self
            .strategies
            .iter()
            .enumerate()
            .find_map(|(idx, kind)| self.strategies[..idx].contains(kind).then_some(kind))
        {
            anyhow::bail!("Strategy '{}' is listed more than once", kind);
        }
        if self.games_per_match == 0 {
            anyhow::bail!("games_per_match must be at least 1");
        }
        if self.max_turns == 0 {
            anyhow::bail!("max_turns must be at least 1");
        }
        Ok(())
    }
}
