use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use ludo::{Color, FirstMove, Game, Player, ScriptedDice, TurnResult};
use serde::{Deserialize, Serialize};

use crate::game::Seat;

/// Writes each finished game as a JSON file into a directory, numbered
/// consecutively starting at `game_000001.json`.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Returns the path of the written file.
    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

/// Everything needed to replay a game: who played which color, the seed,
/// and every roll with the chosen move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Vec<Seat>,
    pub seed: u64,
    pub history: Vec<TurnResult>,
    pub winner: Option<Color>,
}

impl GameRecording {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open recording '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse recording '{}'", path.display()))
    }
}

/// Replays a recording with its dice values and move choices, and checks
/// that the game produces exactly the recorded history and winner.
pub fn verify_recording(recording: &GameRecording) -> anyhow::Result<()> {
    let players = recording
        .players
        .iter()
        .map(|seat| Player::new(seat.color, Box::new(FirstMove)))
        .collect();
    // Every roll comes from the recording, the dice source is never used
    let mut game = Game::new(players, Box::new(ScriptedDice::new(Vec::new())))?;

    for (turn_idx, recorded) in recording.history.iter().enumerate() {
        if game.current_color() != recorded.acting_color {
            anyhow::bail!(
                "Turn {}: recorded for {}, but it is {}'s turn",
                turn_idx,
                recorded.acting_color,
                game.current_color()
            );
        }
        let replayed = game
            .apply_roll(recorded.dice_value, recorded.move_index)
            .with_context(|| format!("Turn {} could not be replayed", turn_idx))?;
        if &replayed != recorded {
            anyhow::bail!(
                "Turn {} differs from the recording: replayed {:?}, recorded {:?}",
                turn_idx,
                replayed,
                recorded
            );
        }
    }

    if game.winner() != recording.winner {
        anyhow::bail!(
            "Replay ended with winner {:?}, recording says {:?}",
            game.winner(),
            recording.winner
        );
    }
    Ok(())
}
