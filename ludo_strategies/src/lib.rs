mod analysis;
mod heuristics;
mod random;
pub use analysis::*;
pub use heuristics::*;
pub use random::*;

use std::str::FromStr;

use ludo::Strategy;
use serde::{Deserialize, Serialize};

/// Selects one of the built-in strategies by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Killer,
    Defensive,
    Balanced,
    Winner,
    Cautious,
    Optimist,
    Probabilistic,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::Random,
        StrategyKind::Killer,
        StrategyKind::Defensive,
        StrategyKind::Balanced,
        StrategyKind::Winner,
        StrategyKind::Cautious,
        StrategyKind::Optimist,
        StrategyKind::Probabilistic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Killer => "killer",
            StrategyKind::Defensive => "defensive",
            StrategyKind::Balanced => "balanced",
            StrategyKind::Winner => "winner",
            StrategyKind::Cautious => "cautious",
            StrategyKind::Optimist => "optimist",
            StrategyKind::Probabilistic => "probabilistic",
        }
    }

    /// Creates a fresh strategy. The seed is only used by strategies that
    /// make random choices.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Killer => Box::new(KillerStrategy),
            StrategyKind::Defensive => Box::new(DefensiveStrategy),
            StrategyKind::Balanced => Box::new(BalancedStrategy),
            StrategyKind::Winner => Box::new(WinnerStrategy),
            StrategyKind::Cautious => Box::new(CautiousStrategy),
            StrategyKind::Optimist => Box::new(OptimistStrategy),
            StrategyKind::Probabilistic => Box::new(ProbabilisticStrategy),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_ascii_lowercase();
        match StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lowercase)
        {
            Some(kind) => Ok(kind),
            None => anyhow::bail!(
                "Unknown strategy '{}', expected one of: {}",
                s,
                StrategyKind::ALL.map(StrategyKind::name).join(", ")
            ),
        }
    }
}
