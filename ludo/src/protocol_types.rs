use serde::{Deserialize, Serialize};

use crate::{Color, Position, Token, TokenRef};

/// Everything that happened during one roll.
///
/// This is the only notification of state changes that a game hands out.
/// A game's history is the list of these, one per roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Whether a token was moved. `false` when the roll left no legal move.
    pub success: bool,
    pub acting_color: Color,
    pub dice_value: u8,
    /// Index of the chosen move among the enumerated legal moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub move_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub token_slot: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub old_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub new_position: Option<Position>,
    pub captured_tokens: Vec<TokenRef>,
    /// The moved token reached the finish with this roll.
    pub finished_token: bool,
    /// The same player rolls again.
    pub extra_turn: bool,
    pub game_won: bool,
}

impl TurnResult {
    pub(crate) fn no_move(acting_color: Color, dice_value: u8) -> Self {
        Self {
            success: false,
            acting_color,
            dice_value,
            move_index: None,
            token_slot: None,
            old_position: None,
            new_position: None,
            captured_tokens: Vec::new(),
            finished_token: false,
            extra_turn: false,
            game_won: false,
        }
    }
}

/// The outcome of a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None` if the game was stopped before anyone won.
    pub winner: Option<Color>,
    /// Number of completed turns, i.e. how often the dice passed to the next player.
    pub turns_played: usize,
    pub history: Vec<TurnResult>,
    /// Per color, in turn order.
    pub player_stats: Vec<PlayerStats>,
    /// Where every token stood when the result was taken.
    pub final_positions: Vec<Token>,
}

/// Counters for one color over a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub color: Color,
    pub rolls: usize,
    pub sixes_rolled: usize,
    /// Rolls that moved a token.
    pub moves: usize,
    pub tokens_captured: usize,
    /// Own tokens sent home by opponents.
    pub tokens_lost: usize,
    pub tokens_finished: usize,
}

impl PlayerStats {
    /// Tallies the statistics of every color in `colors` from a game history.
    pub fn from_history(colors: &[Color], history: &[TurnResult]) -> Vec<PlayerStats> {
        let mut stats: Vec<PlayerStats> = colors
            .iter()
            .map(|&color| PlayerStats {
                color,
                rolls: 0,
                sixes_rolled: 0,
                moves: 0,
                tokens_captured: 0,
                tokens_lost: 0,
                tokens_finished: 0,
            })
            .collect();
        for turn in history {
            for entry in stats.iter_mut() {
                if entry.color == turn.acting_color {
                    entry.rolls += 1;
                    entry.sixes_rolled += usize::from(turn.dice_value == 6);
                    entry.moves += usize::from(turn.success);
                    entry.tokens_captured += turn.captured_tokens.len();
                    entry.tokens_finished += usize::from(turn.finished_token);
                }
                entry.tokens_lost += turn
                    .captured_tokens
                    .iter()
                    .filter(|captured| captured.color == entry.color)
                    .count();
            }
        }
        stats
    }
}
