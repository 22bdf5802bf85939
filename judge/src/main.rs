use std::path::PathBuf;

use clap::Parser;
use judge::{
    print_league_table, run_league, verify_recording, GameRecording, Recorder, TournamentConfig,
};
use ludo_strategies::StrategyKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Strategies taking part in the league, e.g. "killer balanced random".
    /// Defaults to all strategies.
    #[clap(value_delimiter = ' ')]
    strategies: Vec<StrategyKind>,

    /// Path to a JSON tournament config. Command line arguments take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many games each pair of strategies plays per fixture
    #[arg(short, long)]
    num_games: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a game as a draw after this many rolls
    #[arg(short, long)]
    max_turns: Option<usize>,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// Replay these recorded games and check that they are consistent, instead of
    /// running a tournament
    #[arg(long, num_args(1..))]
    verify: Vec<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn tournament_config(&self) -> anyhow::Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };
        if !self.strategies.is_empty() {
            config.strategies = self.strategies.clone();
        }
        if let Some(num_games) = self.num_games {
            config.games_per_match = num_games;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
        if let Some(dir_path) = &self.record_games_to_directory {
            config.record_games_to_directory = Some(dir_path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if !args.verify.is_empty() {
        for path in &args.verify {
            let recording = GameRecording::load(path)?;
            verify_recording(&recording)?;
            info!(path = %path.display(), rolls = recording.history.len(), "Recording verified");
        }
        return Ok(());
    }

    let config = args.tournament_config()?;

    // Get a random seed
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = &config.record_games_to_directory {
        Some(Recorder::new(dir_path.clone())?)
    } else {
        None
    };

    info!(
        strategies = config.strategies.len(),
        games_per_match = config.games_per_match,
        max_turns = config.max_turns,
        "Starting league"
    );
    let standings = run_league(&config, &mut rng, &mut recorder)?;
    print_league_table(&standings);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
