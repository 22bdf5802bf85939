use ludo::{DecisionContext, Move, Position, Strategy};

use crate::analysis::{
    best_by_score, destination_threats, is_threatened, progress_after, progress_before,
};

// Weights for the balanced strategy
const PROGRESS_WEIGHT: i32 = 1;
const CAPTURE_BONUS: i32 = 25;
const SAFE_MOVE_BONUS: i32 = 5;
const EXIT_HOME_BONUS: i32 = 15;
const FINISH_BONUS: i32 = 100;
const THREAT_PENALTY: i32 = 8;

// Weights for the probabilistic strategy. Each opponent in reach adds a one
// in six chance of being captured, capped at certainty.
const EV_FINISH_BONUS: i32 = 100;
const EV_CAPTURE_BONUS: i32 = 30;
const EV_EXIT_HOME_BONUS: i32 = 20;
const EV_CAPTURED_COST: i32 = 300;
const MAX_COUNTED_THREATS: usize = 6;

/// Captures whenever it can, taking as many tokens as possible. Otherwise
/// advances the token that ends up furthest along.
#[derive(Clone, Copy, Debug, Default)]
pub struct KillerStrategy;

impl Strategy for KillerStrategy {
    fn name(&self) -> &str {
        "killer"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| {
            (mv.captures.len(), progress_after(ctx.color, mv))
        })
    }
}

/// Takes the first capture on offer, however many tokens it hits. Otherwise
/// advances the token that ends up furthest along.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimistStrategy;

impl Strategy for OptimistStrategy {
    fn name(&self) -> &str {
        "optimist"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| {
            let captures = !mv.captures.is_empty();
            (captures, if captures { 0 } else { progress_after(ctx.color, mv) })
        })
    }
}

/// Prefers moves that end on a square no opponent can reach next turn.
///
/// Among those it advances furthest. If every move ends up exposed, it moves
/// the least advanced token so that the leaders stay where they are.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefensiveStrategy;

impl Strategy for DefensiveStrategy {
    fn name(&self) -> &str {
        "defensive"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        let any_safe = ctx
            .moves
            .iter()
            .any(|mv| destination_threats(ctx.board, ctx.color, mv) == 0);
        if any_safe {
            best_by_score(ctx.moves, |mv| {
                let safe = destination_threats(ctx.board, ctx.color, mv) == 0;
                (safe, progress_after(ctx.color, mv))
            })
        } else {
            best_by_score(ctx.moves, |mv| -progress_before(ctx.color, mv))
        }
    }
}

/// Weighs progress, captures, safety, leaving home and finishing against the
/// risk of being captured.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalancedStrategy;

impl Strategy for BalancedStrategy {
    fn name(&self) -> &str {
        "balanced"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| {
            let threats = destination_threats(ctx.board, ctx.color, mv) as i32;
            let mut score = progress_after(ctx.color, mv) as i32 * PROGRESS_WEIGHT;
            score += mv.captures.len() as i32 * CAPTURE_BONUS;
            if threats == 0 {
                score += SAFE_MOVE_BONUS;
            }
            if mv.leaves_home() {
                score += EXIT_HOME_BONUS;
            }
            if mv.finishes() {
                score += FINISH_BONUS;
            }
            score - threats * THREAT_PENALTY
        })
    }
}

/// Picks the move with the highest expected value: progress and bonuses for
/// finishing, capturing and leaving home, minus the expected cost of being
/// captured on the destination square.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProbabilisticStrategy;

impl Strategy for ProbabilisticStrategy {
    fn name(&self) -> &str {
        "probabilistic"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| expected_value(ctx, mv))
    }
}

fn expected_value(ctx: &DecisionContext<'_>, mv: &Move) -> i32 {
    let mut value = progress_after(ctx.color, mv) as i32;
    if mv.finishes() {
        value += EV_FINISH_BONUS;
    }
    value += mv.captures.len() as i32 * EV_CAPTURE_BONUS;
    if mv.leaves_home() {
        value += EV_EXIT_HOME_BONUS;
    }
    let threats = destination_threats(ctx.board, ctx.color, mv).min(MAX_COUNTED_THREATS) as i32;
    value - threats * EV_CAPTURED_COST / MAX_COUNTED_THREATS as i32
}

/// Gets tokens home: finishing first, then moving within the home column,
/// then captures that end on a safe square, then plain progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinnerStrategy;

impl Strategy for WinnerStrategy {
    fn name(&self) -> &str {
        "winner"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| {
            let into_home_column = matches!(mv.to, Position::HomeColumn(_));
            let safe_capture =
                !mv.captures.is_empty() && destination_threats(ctx.board, ctx.color, mv) == 0;
            (
                mv.finishes(),
                into_home_column,
                safe_capture,
                progress_after(ctx.color, mv),
            )
        })
    }
}

/// Minimizes exposure: picks the move whose destination is reachable by the
/// fewest opponents, preferring to rescue a token that is currently threatened.
#[derive(Clone, Copy, Debug, Default)]
pub struct CautiousStrategy;

impl Strategy for CautiousStrategy {
    fn name(&self) -> &str {
        "cautious"
    }

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
        best_by_score(ctx.moves, |mv| {
            let rescues = ctx
                .board
                .iter()
                .find(|t| t.owner == ctx.color && t.slot == mv.slot)
                .is_some_and(|t| is_threatened(ctx.board, t));
            (
                -(destination_threats(ctx.board, ctx.color, mv) as i32),
                rescues,
                progress_after(ctx.color, mv),
            )
        })
    }
}
