use serde::{Deserialize, Serialize};

use crate::{Color, Position, TOKENS_PER_PLAYER};

/// One game piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub owner: Color,
    /// Index of the token within its player, in `0..4`.
    pub slot: u8,
    pub position: Position,
}

/// Identifies a token without its position, e.g. in capture lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub color: Color,
    pub slot: u8,
}

impl Token {
    pub fn new(owner: Color, slot: u8) -> Self {
        assert!((slot as usize) < TOKENS_PER_PLAYER, "slot {} out of range", slot);
        Self {
            owner,
            slot,
            position: Position::Home,
        }
    }

    pub fn id(&self) -> TokenRef {
        TokenRef {
            color: self.owner,
            slot: self.slot,
        }
    }

    pub fn is_home(&self) -> bool {
        self.position == Position::Home
    }

    pub fn is_finished(&self) -> bool {
        self.position == Position::Finished
    }

    pub fn is_on_main_path(&self) -> bool {
        matches!(self.position, Position::MainPath(_))
    }

    pub fn is_in_home_column(&self) -> bool {
        matches!(self.position, Position::HomeColumn(_))
    }

    /// Moves the token. Consequences of the move (captures, extra turns) are
    /// handled by the caller.
    ///
    /// Panics if the position is one this token can never reach.
    pub fn relocate(&mut self, new_position: Position) {
        assert!(
            new_position.is_valid_for(self.owner),
            "{} token {} relocated to invalid position {:?}",
            self.owner,
            self.slot,
            new_position
        );
        self.position = new_position;
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.slot)
    }
}
