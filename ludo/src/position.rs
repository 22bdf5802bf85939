use serde::{Deserialize, Serialize};

use crate::{Color, FINISH_INDEX, PATH_LENGTH};

/// Where a token is.
///
/// Main-path squares are absolute (shared by all colors), home-column
/// indices are relative to the owning color's private column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered the board.
    Home,
    /// A square on the shared track, in `0..PATH_LENGTH`.
    MainPath(u8),
    /// A square in the owner's home column, in `0..FINISH_INDEX`.
    HomeColumn(u8),
    /// The last home column square. Tokens never leave it.
    Finished,
}

impl Position {
    /// Whether the index carried by this position is within its regime's range.
    pub fn is_valid(&self) -> bool {
        match *self {
            Position::Home | Position::Finished => true,
            Position::MainPath(square) => square < PATH_LENGTH,
            Position::HomeColumn(idx) => idx < FINISH_INDEX,
        }
    }

    /// Whether a token of `owner` can stand here.
    ///
    /// On top of [`Self::is_valid()`], this rules out the square just before
    /// the owner's entry square. A token turns into its home column one square
    /// earlier, so it never gets there.
    pub fn is_valid_for(&self, owner: Color) -> bool {
        let skipped_square = (owner.home_column_entry_square() + 1) % PATH_LENGTH;
        self.is_valid() && *self != Position::MainPath(skipped_square)
    }

    /// The main-path square, if the position is on the main path.
    pub fn square(&self) -> Option<u8> {
        match *self {
            Position::MainPath(square) => Some(square),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Home => write!(f, "home"),
            Position::MainPath(square) => write!(f, "path {}", square),
            Position::HomeColumn(idx) => write!(f, "column {}", idx),
            Position::Finished => write!(f, "finished"),
        }
    }
}
