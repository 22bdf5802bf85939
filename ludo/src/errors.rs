use crate::Color;

/// The error type for one turn.
///
/// Whenever one of these is returned, the game state is left exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// The chosen index does not point into the enumerated legal moves.
    ChoiceOutOfRange { choice: usize, num_moves: usize },
    /// A move was chosen although the roll left no legal move.
    ChoiceWithoutLegalMove { choice: usize },
    /// No move was chosen although at least one was legal.
    MissingChoice { num_moves: usize },
    /// A dice value outside `1..=6` was supplied.
    InvalidDiceValue { dice_value: u8 },
    /// The dice were rolled while a previous roll still awaits its move.
    RollPending,
    /// A move was executed before rolling.
    NoRollPending,
    /// The game has already been won.
    GameOver { winner: Color },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::ChoiceOutOfRange { choice, num_moves } => write!(
                f,
                "Chose move {}, but only {} legal moves were available",
                choice, num_moves
            ),
            IllegalMove::ChoiceWithoutLegalMove { choice } => write!(
                f,
                "Chose move {}, but the roll left no legal move",
                choice
            ),
            IllegalMove::MissingChoice { num_moves } => write!(
                f,
                "No move was chosen, but {} legal moves were available",
                num_moves
            ),
            IllegalMove::InvalidDiceValue { dice_value } => {
                write!(f, "Dice value {} is not between 1 and 6", dice_value)
            }
            IllegalMove::RollPending => {
                write!(f, "Tried to roll while the previous roll awaits a move")
            }
            IllegalMove::NoRollPending => write!(f, "Tried to move without rolling first"),
            IllegalMove::GameOver { winner } => {
                write!(f, "The game is already over, {} has won", winner)
            }
        }
    }
}

/// The error type for [`Game::new()`](crate::Game::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSetupError {
    WrongNumberOfPlayers { num_players: usize },
    DuplicateColor { color: Color },
}

impl std::error::Error for GameSetupError {}

impl std::fmt::Display for GameSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameSetupError::WrongNumberOfPlayers { num_players } => write!(
                f,
                "A game needs between 2 and 4 players, but {} were given",
                num_players
            ),
            GameSetupError::DuplicateColor { color } => {
                write!(f, "Color {} was assigned to more than one player", color)
            }
        }
    }
}
