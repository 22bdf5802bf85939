use serde::{Deserialize, Serialize};

/// Number of squares on the shared circular track.
pub const PATH_LENGTH: u8 = 52;

/// Number of squares in each color's private home column, including the
/// final square that counts as finished.
pub const HOME_COLUMN_LENGTH: u8 = 6;

/// The home column index that is reported as [`Position::Finished`](crate::Position::Finished).
pub const FINISH_INDEX: u8 = HOME_COLUMN_LENGTH - 1;

/// Progress (steps from the entry square) of the last main-path square before
/// a token turns into its home column.
pub const HOME_COLUMN_ENTRY_PROGRESS: u8 = PATH_LENGTH - 2;

/// Progress of a finished token.
pub const FINISH_PROGRESS: u8 = HOME_COLUMN_ENTRY_PROGRESS + HOME_COLUMN_LENGTH;

pub const TOKENS_PER_PLAYER: usize = 4;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// The only roll that lets a token leave home.
pub const EXIT_HOME_ROLL: u8 = 6;

/// Rolling this many sixes in a row forfeits the turn.
pub const MAX_CONSECUTIVE_SIXES: u8 = 3;

/// Star squares, safe for every color.
pub const STAR_SQUARES: [u8; 4] = [8, 21, 34, 47];

/// The four player colors, in the fixed order in which turns rotate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

impl Color {
    /// The main-path square a token of this color lands on when leaving home.
    pub fn entry_square(self) -> u8 {
        self as u8 * (PATH_LENGTH / 4)
    }

    /// The last main-path square of this color before its home column.
    pub fn home_column_entry_square(self) -> u8 {
        (self.entry_square() + HOME_COLUMN_ENTRY_PROGRESS) % PATH_LENGTH
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Color`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl std::error::Error for UnknownColor {}

impl std::fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown color '{}'", self.0)
    }
}

impl std::str::FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            _ => Err(UnknownColor(String::from(s))),
        }
    }
}

/// Whether a main-path square is safe: an entry square or a star square.
pub fn is_safe_square(square: u8) -> bool {
    STAR_SQUARES.contains(&square) || ALL_COLORS.iter().any(|c| c.entry_square() == square)
}
