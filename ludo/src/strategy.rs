use crate::{Board, Color, Move};

/// What a strategy gets to see when it has to pick a move.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// The color that is to move.
    pub color: Color,
    pub dice_value: u8,
    /// The legal moves, never empty. The strategy returns an index into this.
    pub moves: &'a [Move],
    /// All tokens, as they are before the move.
    pub board: &'a Board,
    /// Sixes rolled in a row by this player, including the current roll.
    pub consecutive_sixes: u8,
}

/// Picks one of the legal moves each turn.
///
/// Strategies only ever see read-only snapshots of the game, so they cannot
/// interfere with its state. Returning an index outside `ctx.moves` makes the
/// game reject the turn with an [`IllegalMove`](crate::IllegalMove).
pub trait Strategy {
    fn name(&self) -> &str;

    fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize;
}

/// Always picks the first legal move, i.e. the lowest token slot that can move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMove;

impl Strategy for FirstMove {
    fn name(&self) -> &str {
        "first"
    }

    fn choose(&mut self, _ctx: &DecisionContext<'_>) -> usize {
        0
    }
}
