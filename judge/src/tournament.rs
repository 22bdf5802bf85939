use std::cmp::Reverse;

use itertools::Itertools;
use ludo::Color;
use ludo_strategies::StrategyKind;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::game::{play_game, GameOutcome, Seat};
use crate::recording::Recorder;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// The home side plays red and moves first.
pub const HOME_COLOR: Color = Color::Red;
pub const AWAY_COLOR: Color = Color::Green;

/// Games won by each side in one fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixtureResult {
    pub home: StrategyKind,
    pub away: StrategyKind,
    pub home_wins: usize,
    pub away_wins: usize,
    /// Games that hit the turn cap.
    pub draws: usize,
    pub illegal_moves: usize,
}

impl FixtureResult {
    fn new(home: StrategyKind, away: StrategyKind) -> Self {
        Self {
            home,
            away,
            home_wins: 0,
            away_wins: 0,
            draws: 0,
            illegal_moves: 0,
        }
    }
}

/// A line in the league table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    pub strategy: StrategyKind,
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Single games won and lost across all fixtures.
    pub games_won: usize,
    pub games_lost: usize,
    pub points: u32,
}

impl Standing {
    fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            games_won: 0,
            games_lost: 0,
            points: 0,
        }
    }

    pub fn game_difference(&self) -> i64 {
        self.games_won as i64 - self.games_lost as i64
    }

    /// Share of fixtures won, in percent.
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.wins as f64 * 100.0 / self.played as f64
        }
    }

    fn record(&mut self, won: usize, lost: usize) {
        self.played += 1;
        self.games_won += won;
        self.games_lost += lost;
        match won.cmp(&lost) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
            std::cmp::Ordering::Less => {
                self.losses += 1;
            }
        }
    }
}

/// Every pair of strategies meets twice, once on each side.
pub fn fixtures(strategies: &[StrategyKind]) -> Vec<(StrategyKind, StrategyKind)> {
    strategies
        .iter()
        .copied()
        .tuple_combinations::<(StrategyKind, StrategyKind)>()
        .flat_map(|(a, b)| [(a, b), (b, a)])
        .collect()
}

/// Plays `config.games_per_match` games between two strategies.
///
/// An illegal move loses the game for the side that made it.
pub fn play_fixture(
    home: StrategyKind,
    away: StrategyKind,
    config: &TournamentConfig,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<FixtureResult> {
    let seats = [
        Seat {
            color: HOME_COLOR,
            strategy: home,
        },
        Seat {
            color: AWAY_COLOR,
            strategy: away,
        },
    ];
    let mut result = FixtureResult::new(home, away);
    for game_idx in 0..config.games_per_match {
        let seed = rng.gen::<u64>();
        let played = play_game(&seats, seed, config.max_turns, recorder)?;
        let home_won = match played.outcome {
            GameOutcome::WonByPlayer { color } => {
                debug!(%home, %away, game_idx, seed, winner = %color, "Game won");
                Some(color == HOME_COLOR)
            }
            GameOutcome::Draw => {
                debug!(%home, %away, game_idx, seed, "Turn limit reached");
                None
            }
            GameOutcome::IllegalMoveByPlayer { color, err } => {
                info!(%home, %away, game_idx, seed, player = %color, "Illegal move: {}", err);
                result.illegal_moves += 1;
                Some(color != HOME_COLOR)
            }
        };
        match home_won {
            Some(true) => result.home_wins += 1,
            Some(false) => result.away_wins += 1,
            None => result.draws += 1,
        }
    }
    Ok(result)
}

/// Plays every fixture and returns the league table, best first.
pub fn run_league(
    config: &TournamentConfig,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Vec<Standing>> {
    config.validate()?;
    let fixtures = fixtures(&config.strategies);
    let mut standings: Vec<Standing> = config
        .strategies
        .iter()
        .map(|&kind| Standing::new(kind))
        .collect();

    for (fixture_idx, (home, away)) in fixtures.iter().copied().enumerate() {
        let result = play_fixture(home, away, config, rng, recorder)?;
        info!(
            "Match {}/{}: {} {} - {} {}",
            fixture_idx + 1,
            fixtures.len(),
            home,
            result.home_wins,
            result.away_wins,
            away
        );
        for standing in standings.iter_mut() {
            if standing.strategy == home {
                standing.record(result.home_wins, result.away_wins);
            } else if standing.strategy == away {
                standing.record(result.away_wins, result.home_wins);
            }
        }
    }

    sort_standings(&mut standings);
    Ok(standings)
}

/// Points first, then game difference, then games won.
pub fn sort_standings(standings: &mut [Standing]) {
    standings.sort_by_key(|s| {
        (
            Reverse(s.points),
            Reverse(s.game_difference()),
            Reverse(s.games_won),
            s.strategy,
        )
    });
}

pub fn print_league_table(standings: &[Standing]) {
    println!("\nFinal league table:\n");
    println!(
        "{:<4}{:<15}{:>4}{:>4}{:>4}{:>4}{:>6}{:>6}{:>6}{:>6}{:>8}",
        "Pos", "Strategy", "P", "W", "D", "L", "GW", "GL", "GD", "Pts", "Win%"
    );
    println!("{}", "-".repeat(67));
    for (pos, s) in standings.iter().enumerate() {
        println!(
            "{:<4}{:<15}{:>4}{:>4}{:>4}{:>4}{:>6}{:>6}{:>+6}{:>6}{:>8.1}",
            pos + 1,
            s.strategy.name(),
            s.played,
            s.wins,
            s.draws,
            s.losses,
            s.games_won,
            s.games_lost,
            s.game_difference(),
            s.points,
            s.win_percentage()
        );
    }
    println!("{}", "-".repeat(67));
    println!(
        "P=played, W=won, D=drawn, L=lost, GW/GL=games won/lost, GD=game difference, \
         Win%=share of matches won"
    );
}
