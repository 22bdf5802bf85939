use serde::{Deserialize, Serialize};

use crate::{Board, Color, Position, Strategy, Token, TokenRef, TOKENS_PER_PLAYER};

/// A legal move for one token, as enumerated for a given roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub slot: u8,
    pub from: Position,
    pub to: Position,
    /// Opponent tokens that would be sent home by this move.
    pub captures: Vec<TokenRef>,
}

impl Move {
    pub fn finishes(&self) -> bool {
        self.to == Position::Finished
    }

    pub fn leaves_home(&self) -> bool {
        self.from == Position::Home
    }
}

/// One participant: a color, its four tokens and the strategy that moves them.
///
/// The player only answers questions about its tokens. Asking the strategy
/// for a decision is up to the [`Game`](crate::Game).
pub struct Player {
    pub color: Color,
    pub tokens: [Token; TOKENS_PER_PLAYER],
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(color: Color, strategy: Box<dyn Strategy>) -> Self {
        Self {
            color,
            tokens: [0, 1, 2, 3].map(|slot| Token::new(color, slot)),
            strategy,
        }
    }

    /// The legal moves for this roll, ordered by token slot.
    pub fn movable_tokens(&self, dice_value: u8, board: &Board) -> Vec<Move> {
        self.tokens
            .iter()
            .filter_map(|token| {
                let to = Board::legal_destination(token, dice_value)?;
                Some(Move {
                    slot: token.slot,
                    from: token.position,
                    to,
                    captures: board.detect_capture(to, self.color),
                })
            })
            .collect()
    }

    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(Token::is_finished)
    }

    pub fn num_finished(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_finished()).count()
    }

    pub fn num_home(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_home()).count()
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("color", &self.color)
            .field("tokens", &self.tokens)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
