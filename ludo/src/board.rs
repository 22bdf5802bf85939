use std::ops::Deref;

use crate::{
    is_safe_square, Color, Position, Token, TokenRef, EXIT_HOME_ROLL, FINISH_PROGRESS,
    HOME_COLUMN_ENTRY_PROGRESS, PATH_LENGTH,
};

/// A read-only snapshot of every token in a game.
///
/// The board does not know whose turn it is. All of its methods reason only
/// about the positions it was built from, so the same snapshot can be handed
/// to strategies, replay validators and the game itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tokens: Vec<Token>,
}

impl Board {
    /// Creates a snapshot from a list of tokens.
    ///
    /// Panics if a (color, slot) pair appears twice or a token stands where
    /// its color can never get to.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens: Vec<Token> = tokens.into_iter().collect();
        for (idx, token) in tokens.iter().enumerate() {
            assert!(
                token.position.is_valid_for(token.owner),
                "invalid position in {:?}",
                token
            );
            assert!(
                !tokens[..idx].iter().any(|other| other.id() == token.id()),
                "duplicate token {}",
                token.id()
            );
        }
        Self { tokens }
    }

    /// Whether a token standing on `position` can never be captured.
    ///
    /// Home, the home column and the finish are always protected; on the
    /// main path only the entry squares and star squares are.
    pub fn is_safe(position: Position) -> bool {
        match position {
            Position::MainPath(square) => is_safe_square(square),
            Position::Home | Position::HomeColumn(_) | Position::Finished => true,
        }
    }

    /// Number of steps the token has travelled from its entry square, or
    /// `None` while it is still at home.
    pub fn progress(token: &Token) -> Option<u8> {
        match token.position {
            Position::Home => None,
            Position::MainPath(square) => Some(
                (square + PATH_LENGTH - token.owner.entry_square()) % PATH_LENGTH,
            ),
            Position::HomeColumn(idx) => Some(HOME_COLUMN_ENTRY_PROGRESS + 1 + idx),
            Position::Finished => Some(FINISH_PROGRESS),
        }
    }

    /// Inverse of [`Self::progress()`].
    ///
    /// Returns `None` for progress beyond the finish.
    pub fn position_at_progress(color: Color, progress: u8) -> Option<Position> {
        if progress <= HOME_COLUMN_ENTRY_PROGRESS {
            Some(Position::MainPath(
                (color.entry_square() + progress) % PATH_LENGTH,
            ))
        } else if progress < FINISH_PROGRESS {
            Some(Position::HomeColumn(progress - HOME_COLUMN_ENTRY_PROGRESS - 1))
        } else if progress == FINISH_PROGRESS {
            Some(Position::Finished)
        } else {
            None
        }
    }

    /// Steps still needed to finish, or `None` for a token at home.
    pub fn distance_to_finish(token: &Token) -> Option<u8> {
        Self::progress(token).map(|progress| FINISH_PROGRESS - progress)
    }

    /// Forward distance along the main path from one square to another.
    pub fn path_distance(from_square: u8, to_square: u8) -> u8 {
        (to_square + PATH_LENGTH - from_square % PATH_LENGTH) % PATH_LENGTH
    }

    /// Where the token ends up after moving `dice_value` steps, if that is legal.
    ///
    /// Leaving home takes exactly a six and lands on the entry square. Moves
    /// past the finish are illegal; the finish has to be hit exactly.
    pub fn legal_destination(token: &Token, dice_value: u8) -> Option<Position> {
        if !(1..=6).contains(&dice_value) {
            return None;
        }
        match token.position {
            Position::Home => (dice_value == EXIT_HOME_ROLL)
                .then(|| Position::MainPath(token.owner.entry_square())),
            Position::Finished => None,
            _ => {
                let progress = Self::progress(token)?;
                Self::position_at_progress(token.owner, progress + dice_value)
            }
        }
    }

    /// The opposing tokens that would be sent home by a `mover` token landing
    /// on `destination`.
    ///
    /// Tokens of the mover's own color are never captured and do not block.
    pub fn detect_capture(&self, destination: Position, mover: Color) -> Vec<TokenRef> {
        match destination {
            Position::MainPath(square) if !is_safe_square(square) => self
                .occupants(square)
                .filter(|token| token.owner != mover)
                .map(Token::id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// All tokens standing on a main-path square.
    pub fn occupants(&self, square: u8) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .filter(move |token| token.position == Position::MainPath(square))
    }

    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(move |token| token.owner == color)
    }

    pub fn get(&self, id: TokenRef) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id() == id)
    }

    /// The colors that have tokens on this board, in turn order.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.tokens.iter().map(|token| token.owner).collect();
        colors.sort();
        colors.dedup();
        colors
    }
}

impl Deref for Board {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}
