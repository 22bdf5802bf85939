use ludo::{visualize_board, Color, Game, IllegalMove, MatchResult, Player};
use ludo_strategies::StrategyKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::recording::{GameRecording, Recorder};

/// One participant of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub color: Color,
    pub strategy: StrategyKind,
}

pub enum GameOutcome {
    WonByPlayer { color: Color },
    /// The turn cap was reached without a winner.
    Draw,
    IllegalMoveByPlayer { color: Color, err: IllegalMove },
}

pub struct PlayedGame {
    pub outcome: GameOutcome,
    pub match_result: MatchResult,
}

/// Plays one game until someone wins or `max_turns` rolls have been made.
///
/// Returns an error only when the game cannot be set up or recorded, not
/// when a strategy picks an illegal move.
pub fn play_game(
    seats: &[Seat],
    seed: u64,
    max_turns: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<PlayedGame> {
    let players = seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| {
            // Each strategy gets its own stream of randomness, separate from the dice
            let strategy_seed = seed.wrapping_add(idx as u64 + 1);
            Player::new(seat.color, seat.strategy.build(strategy_seed))
        })
        .collect();
    let mut game = Game::with_seed(players, seed)?;

    let outcome = loop {
        if let Some(color) = game.winner() {
            break GameOutcome::WonByPlayer { color };
        }
        if game.history().len() >= max_turns {
            break GameOutcome::Draw;
        }
        match game.play_turn() {
            Ok(turn) => {
                trace!(
                    color = %turn.acting_color,
                    dice = turn.dice_value,
                    move_index = ?turn.move_index,
                    from = ?turn.old_position,
                    to = ?turn.new_position,
                    captured = turn.captured_tokens.len(),
                    extra_turn = turn.extra_turn,
                    "Turn played"
                );
            }
            Err(err) => {
                break GameOutcome::IllegalMoveByPlayer {
                    color: game.current_color(),
                    err,
                }
            }
        }
    };

    let match_result = game.match_result();
    debug!(
        winner = ?match_result.winner,
        turns = match_result.turns_played,
        rolls = match_result.history.len(),
        "Game ended\n{}",
        visualize_board(&game.board())
    );
    for (player, stats) in game.players().iter().zip(&match_result.player_stats) {
        debug!(
            color = %stats.color,
            strategy = player.strategy_name(),
            rolls = stats.rolls,
            sixes = stats.sixes_rolled,
            moves = stats.moves,
            captured = stats.tokens_captured,
            lost = stats.tokens_lost,
            finished = stats.tokens_finished,
            "Player statistics"
        );
    }

    if let Some(rec) = recorder {
        rec.write_game_recording(&GameRecording {
            players: seats.to_vec(),
            seed,
            history: match_result.history.clone(),
            winner: match_result.winner,
        })?;
    }

    Ok(PlayedGame {
        outcome,
        match_result,
    })
}
