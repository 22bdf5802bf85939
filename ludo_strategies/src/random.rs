use ludo::{DecisionContext, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks uniformly among the legal moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        self.rng.gen_range(0..ctx.moves.len())
    }
}
