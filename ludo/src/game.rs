use crate::{
    is_safe_square, Board, Color, DecisionContext, DiceSource, GameSetupError, IllegalMove,
    MatchResult, Move, Player, PlayerStats, Position, SeededDice, TurnResult, MAX_CONSECUTIVE_SIXES,
    MAX_PLAYERS, MIN_PLAYERS,
};

/// Where the game is in the turn lifecycle.
///
/// Deciding between an extra turn and passing the dice happens inside
/// [`Game::execute()`], so after a move the game is either back at
/// [`Phase::AwaitingRoll`] or at [`Phase::GameOver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoll,
    MovesEnumerated { dice_value: u8, moves: Vec<Move> },
    GameOver { winner: Color },
}

/// A single game of Ludo.
///
/// Given the same dice values and the same move choices, a game always
/// produces the same history.
pub struct Game {
    /// Sorted by color, which is also the turn order.
    players: Vec<Player>,
    dice: Box<dyn DiceSource>,
    current_turn_index: usize,
    consecutive_six_count: u8,
    turn_count: usize,
    history: Vec<TurnResult>,
    phase: Phase,
}

impl Game {
    /// Sets up a game with every token at home. The player whose color comes
    /// first in the rotation order starts.
    pub fn new(
        mut players: Vec<Player>,
        dice: Box<dyn DiceSource>,
    ) -> Result<Self, GameSetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameSetupError::WrongNumberOfPlayers {
                num_players: players.len(),
            });
        }
        players.sort_by_key(|player| player.color);
        if let Some(pair) = players.windows(2).find(|pair| pair[0].color == pair[1].color) {
            return Err(GameSetupError::DuplicateColor {
                color: pair[0].color,
            });
        }
        Ok(Self {
            players,
            dice,
            current_turn_index: 0,
            consecutive_six_count: 0,
            turn_count: 0,
            history: Vec::new(),
            phase: Phase::AwaitingRoll,
        })
    }

    /// Shorthand for a game with [`SeededDice`].
    pub fn with_seed(players: Vec<Player>, seed: u64) -> Result<Self, GameSetupError> {
        Self::new(players, Box::new(SeededDice::new(seed)))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The colors in the game, in turn order.
    pub fn colors(&self) -> Vec<Color> {
        self.players.iter().map(|player| player.color).collect()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn_index]
    }

    pub fn current_color(&self) -> Color {
        self.current_player().color
    }

    pub fn consecutive_sixes(&self) -> u8 {
        self.consecutive_six_count
    }

    /// How often the dice have passed to the next player.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// A snapshot of all tokens.
    pub fn board(&self) -> Board {
        Board::new(self.players.iter().flat_map(|player| player.tokens))
    }

    /// The moves the current player could make with this roll.
    ///
    /// This does not change the game and can be called any number of times.
    pub fn legal_moves(&self, dice_value: u8) -> Vec<Move> {
        self.current_player().movable_tokens(dice_value, &self.board())
    }

    /// The moves enumerated for the pending roll, or an empty slice if no
    /// roll is pending.
    pub fn pending_moves(&self) -> &[Move] {
        match &self.phase {
            Phase::MovesEnumerated { moves, .. } => moves,
            _ => &[],
        }
    }

    /// Rolls the dice for the current player and enumerates the legal moves.
    pub fn roll(&mut self) -> Result<&[Move], IllegalMove> {
        self.check_can_roll()?;
        let dice_value = self.dice.roll();
        assert!(
            (1..=6).contains(&dice_value),
            "dice source produced {}",
            dice_value
        );
        Ok(self.begin_roll(dice_value))
    }

    /// Like [`Self::roll()`], but with a given dice value instead of one from
    /// the dice source.
    pub fn roll_value(&mut self, dice_value: u8) -> Result<&[Move], IllegalMove> {
        self.check_can_roll()?;
        if !(1..=6).contains(&dice_value) {
            return Err(IllegalMove::InvalidDiceValue { dice_value });
        }
        Ok(self.begin_roll(dice_value))
    }

    /// Executes the chosen move for the pending roll, resolves captures, and
    /// decides whether the same player rolls again.
    ///
    /// `choice` has to be `None` exactly when the roll left no legal move.
    /// On error, nothing about the game changes.
    pub fn execute(&mut self, choice: Option<usize>) -> Result<TurnResult, IllegalMove> {
        let (dice_value, chosen) = match &self.phase {
            Phase::AwaitingRoll => return Err(IllegalMove::NoRollPending),
            Phase::GameOver { winner } => return Err(IllegalMove::GameOver { winner: *winner }),
            Phase::MovesEnumerated { dice_value, moves } => {
                let chosen = validate_choice(moves, choice)?.map(|idx| (idx, moves[idx].clone()));
                (*dice_value, chosen)
            }
        };
        self.phase = Phase::AwaitingRoll;
        let color = self.current_color();

        let mut result = match chosen {
            Some((move_index, mv)) => self.apply_move(move_index, mv, dice_value),
            None => TurnResult::no_move(color, dice_value),
        };

        if result.game_won {
            self.phase = Phase::GameOver { winner: color };
            self.history.push(result.clone());
            return Ok(result);
        }

        let earned_extra_turn =
            dice_value == 6 || !result.captured_tokens.is_empty() || result.finished_token;
        if self.consecutive_six_count >= MAX_CONSECUTIVE_SIXES {
            // Three sixes in a row forfeit the turn, whatever else happened
            self.advance_turn();
        } else if earned_extra_turn {
            result.extra_turn = true;
        } else {
            self.advance_turn();
        }

        self.history.push(result.clone());
        Ok(result)
    }

    /// Plays one roll: rolls the dice (unless a roll is already pending), asks
    /// the current player's strategy for a move if there is one, and executes it.
    ///
    /// If the strategy picks an invalid move, the error is returned and the
    /// roll stays pending.
    pub fn play_turn(&mut self) -> Result<TurnResult, IllegalMove> {
        if self.phase == Phase::AwaitingRoll {
            self.roll()?;
        }
        let choice = match &self.phase {
            Phase::GameOver { winner } => return Err(IllegalMove::GameOver { winner: *winner }),
            Phase::MovesEnumerated { dice_value, moves } if !moves.is_empty() => {
                let board = self.board();
                let consecutive_sixes = self.consecutive_six_count;
                let player = &mut self.players[self.current_turn_index];
                let ctx = DecisionContext {
                    color: player.color,
                    dice_value: *dice_value,
                    moves,
                    board: &board,
                    consecutive_sixes,
                };
                Some(player.strategy_mut().choose(&ctx))
            }
            _ => None,
        };
        self.execute(choice)
    }

    /// Plays one roll with a given dice value and move choice, bypassing both
    /// the dice source and the strategy. This is how recorded games are replayed.
    ///
    /// The choice is validated before anything changes, so on error the game
    /// is untouched, including the consecutive-six count.
    pub fn apply_roll(
        &mut self,
        dice_value: u8,
        choice: Option<usize>,
    ) -> Result<TurnResult, IllegalMove> {
        self.check_can_roll()?;
        if !(1..=6).contains(&dice_value) {
            return Err(IllegalMove::InvalidDiceValue { dice_value });
        }
        validate_choice(&self.legal_moves(dice_value), choice)?;
        self.begin_roll(dice_value);
        self.execute(choice)
    }

    /// Summarizes the game so far. Can be called at any time, e.g. when a
    /// game is cut off after a maximum number of turns.
    pub fn match_result(&self) -> MatchResult {
        MatchResult {
            winner: self.winner(),
            turns_played: self.turn_count,
            history: self.history.clone(),
            player_stats: PlayerStats::from_history(&self.colors(), &self.history),
            final_positions: self.board().to_vec(),
        }
    }

    fn check_can_roll(&self) -> Result<(), IllegalMove> {
        match self.phase {
            Phase::AwaitingRoll => Ok(()),
            Phase::MovesEnumerated { .. } => Err(IllegalMove::RollPending),
            Phase::GameOver { winner } => Err(IllegalMove::GameOver { winner }),
        }
    }

    fn begin_roll(&mut self, dice_value: u8) -> &[Move] {
        if dice_value == 6 {
            self.consecutive_six_count += 1;
        } else {
            self.consecutive_six_count = 0;
        }
        let moves = self.legal_moves(dice_value);
        self.phase = Phase::MovesEnumerated { dice_value, moves };
        self.pending_moves()
    }

    fn apply_move(&mut self, move_index: usize, mv: Move, dice_value: u8) -> TurnResult {
        debug_assert_eq!(
            self.board().detect_capture(mv.to, self.current_color()),
            mv.captures
        );
        let player = &mut self.players[self.current_turn_index];
        let color = player.color;
        let token = &mut player.tokens[mv.slot as usize];
        assert_eq!(token.position, mv.from, "stale move for {}", token.id());
        token.relocate(mv.to);
        let game_won = player.has_won();

        for captured in &mv.captures {
            let victim = self
                .players
                .iter_mut()
                .find(|p| p.color == captured.color)
                .map(|p| &mut p.tokens[captured.slot as usize]);
            match victim {
                Some(token) => token.relocate(Position::Home),
                None => panic!("captured token {} is not in the game", captured),
            }
        }

        self.check_invariants();

        TurnResult {
            success: true,
            acting_color: color,
            dice_value,
            move_index: Some(move_index),
            token_slot: Some(mv.slot),
            old_position: Some(mv.from),
            new_position: Some(mv.to),
            finished_token: mv.finishes(),
            captured_tokens: mv.captures,
            extra_turn: false,
            game_won,
        }
    }

    fn advance_turn(&mut self) {
        self.current_turn_index = (self.current_turn_index + 1) % self.players.len();
        self.consecutive_six_count = 0;
        self.turn_count += 1;
    }

    // A violation here is a bug in the engine, not bad input.
    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let board = self.board();
        for token in board.iter() {
            if let Position::MainPath(square) = token.position {
                if !is_safe_square(square) {
                    assert!(
                        board.occupants(square).all(|other| other.owner == token.owner),
                        "two colors share unsafe square {}",
                        square
                    );
                }
            }
        }
    }
}

fn validate_choice(moves: &[Move], choice: Option<usize>) -> Result<Option<usize>, IllegalMove> {
    match (moves.len(), choice) {
        (0, None) => Ok(None),
        (0, Some(choice)) => Err(IllegalMove::ChoiceWithoutLegalMove { choice }),
        (num_moves, None) => Err(IllegalMove::MissingChoice { num_moves }),
        (num_moves, Some(choice)) if choice >= num_moves => {
            Err(IllegalMove::ChoiceOutOfRange { choice, num_moves })
        }
        (_, Some(choice)) => Ok(Some(choice)),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{FirstMove, ScriptedDice, Strategy, TokenRef, ALL_COLORS};

    fn two_player_game() -> Game {
        Game::with_seed(
            vec![
                Player::new(Color::Blue, Box::new(FirstMove)),
                Player::new(Color::Red, Box::new(FirstMove)),
            ],
            0,
        )
        .unwrap()
    }

    fn place(game: &mut Game, color: Color, slot: u8, position: Position) {
        let player = game.players.iter_mut().find(|p| p.color == color).unwrap();
        player.tokens[slot as usize].relocate(position);
    }

    fn position_of(game: &Game, color: Color, slot: u8) -> Position {
        game.board()
            .get(TokenRef { color, slot })
            .unwrap()
            .position
    }

    struct PickByIndex(Vec<u8>, usize);

    impl Strategy for PickByIndex {
        fn name(&self) -> &str {
            "pick"
        }

        fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
            let pick = self.0.get(self.1).copied().unwrap_or(0) as usize;
            self.1 += 1;
            pick % ctx.moves.len()
        }
    }

    struct OutOfRange;

    impl Strategy for OutOfRange {
        fn name(&self) -> &str {
            "broken"
        }

        fn choose(&mut self, ctx: &DecisionContext<'_>) -> usize {
            ctx.moves.len()
        }
    }

    #[test]
    fn setup_rules() {
        let one = vec![Player::new(Color::Red, Box::new(FirstMove))];
        assert_eq!(
            Game::with_seed(one, 0).err(),
            Some(GameSetupError::WrongNumberOfPlayers { num_players: 1 })
        );
        let dup = vec![
            Player::new(Color::Green, Box::new(FirstMove)),
            Player::new(Color::Green, Box::new(FirstMove)),
        ];
        assert_eq!(
            Game::with_seed(dup, 0).err(),
            Some(GameSetupError::DuplicateColor { color: Color::Green })
        );
        let game = two_player_game();
        assert_eq!(game.current_color(), Color::Red);
        assert_eq!(game.phase(), &Phase::AwaitingRoll);
    }

    #[test]
    fn leaving_home_lands_on_entry_square() {
        let mut game = two_player_game();
        let result = game.apply_roll(6, Some(0)).unwrap();
        assert_eq!(result.old_position, Some(Position::Home));
        assert_eq!(result.new_position, Some(Position::MainPath(0)));
        assert!(result.extra_turn);
        assert_eq!(game.current_color(), Color::Red);
        assert_eq!(game.consecutive_sixes(), 1);
    }

    #[test]
    fn no_legal_move_passes_the_dice() {
        let mut game = two_player_game();
        let result = game.apply_roll(4, None).unwrap();
        assert!(!result.success);
        assert!(!result.extra_turn);
        assert_eq!(game.current_color(), Color::Blue);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn six_without_legal_move_still_rolls_again() {
        let mut game = two_player_game();
        for slot in 0..4 {
            place(&mut game, Color::Red, slot, Position::HomeColumn(0));
        }
        let result = game.apply_roll(6, None).unwrap();
        assert!(!result.success);
        assert!(result.extra_turn);
        assert_eq!(game.current_color(), Color::Red);
    }

    #[test]
    fn third_six_forfeits() {
        let mut game = two_player_game();
        for slot in 0..4 {
            place(&mut game, Color::Red, slot, Position::HomeColumn(1));
        }
        assert!(game.apply_roll(6, None).unwrap().extra_turn);
        assert!(game.apply_roll(6, None).unwrap().extra_turn);
        assert_eq!(game.consecutive_sixes(), 2);
        let third = game.apply_roll(6, None).unwrap();
        assert!(!third.extra_turn);
        assert_eq!(game.consecutive_sixes(), 0);
        assert_eq!(game.current_color(), Color::Blue);
    }

    #[test]
    fn third_six_forfeits_even_after_a_capture() {
        let mut game = two_player_game();
        place(&mut game, Color::Red, 0, Position::MainPath(4));
        place(&mut game, Color::Blue, 0, Position::MainPath(22));
        game.apply_roll(6, Some(0)).unwrap();
        game.apply_roll(6, Some(0)).unwrap();
        assert_eq!(position_of(&game, Color::Red, 0), Position::MainPath(16));
        let third = game.apply_roll(6, Some(0)).unwrap();
        assert_eq!(third.captured_tokens, vec![TokenRef { color: Color::Blue, slot: 0 }]);
        assert_eq!(position_of(&game, Color::Blue, 0), Position::Home);
        assert!(!third.extra_turn);
        assert_eq!(game.current_color(), Color::Blue);
    }

    #[test]
    fn non_six_resets_the_six_counter() {
        let mut game = two_player_game();
        game.apply_roll(6, Some(0)).unwrap();
        game.apply_roll(6, Some(0)).unwrap();
        game.apply_roll(2, Some(0)).unwrap();
        assert_eq!(game.consecutive_sixes(), 0);
        assert_eq!(game.current_color(), Color::Blue);
    }

    #[test]
    fn entering_onto_an_occupied_safe_entry_square() {
        let mut game = two_player_game();
        place(&mut game, Color::Blue, 0, Position::MainPath(0));
        let result = game.apply_roll(6, Some(0)).unwrap();
        assert!(result.captured_tokens.is_empty());
        assert_eq!(position_of(&game, Color::Red, 0), Position::MainPath(0));
        assert_eq!(position_of(&game, Color::Blue, 0), Position::MainPath(0));
        assert!(result.extra_turn);
    }

    #[test]
    fn capture_sends_victim_home_and_grants_extra_turn() {
        let mut game = two_player_game();
        place(&mut game, Color::Red, 0, Position::MainPath(30));
        place(&mut game, Color::Red, 1, Position::MainPath(10));
        // Red moves its other token and leaves slot 1 exposed
        game.apply_roll(1, Some(0)).unwrap();
        assert_eq!(game.current_color(), Color::Blue);
        place(&mut game, Color::Blue, 0, Position::MainPath(5));

        let result = game.apply_roll(5, Some(0)).unwrap();
        assert_eq!(result.acting_color, Color::Blue);
        assert_eq!(result.captured_tokens, vec![TokenRef { color: Color::Red, slot: 1 }]);
        assert_eq!(position_of(&game, Color::Red, 1), Position::Home);
        assert_eq!(position_of(&game, Color::Blue, 0), Position::MainPath(10));
        assert!(result.extra_turn);
        assert_eq!(game.current_color(), Color::Blue);
    }

    #[test]
    fn own_tokens_stack() {
        let mut game = two_player_game();
        place(&mut game, Color::Red, 0, Position::MainPath(10));
        place(&mut game, Color::Red, 1, Position::MainPath(7));
        let result = game.apply_roll(3, Some(1)).unwrap();
        assert_eq!(result.token_slot, Some(1));
        assert!(result.captured_tokens.is_empty());
        assert_eq!(position_of(&game, Color::Red, 0), Position::MainPath(10));
        assert_eq!(position_of(&game, Color::Red, 1), Position::MainPath(10));
        assert!(!result.extra_turn);
    }

    #[test]
    fn match_result_tallies_player_statistics() {
        let mut game = two_player_game();
        place(&mut game, Color::Blue, 0, Position::MainPath(2));
        place(&mut game, Color::Red, 1, Position::HomeColumn(4));
        game.apply_roll(6, Some(0)).unwrap();
        let capture = game.apply_roll(2, Some(0)).unwrap();
        assert_eq!(capture.captured_tokens.len(), 1);
        game.apply_roll(3, Some(0)).unwrap();
        game.apply_roll(5, None).unwrap();
        let finish = game.apply_roll(1, Some(1)).unwrap();
        assert!(finish.finished_token);

        let result = game.match_result();
        let red = result.player_stats.iter().find(|s| s.color == Color::Red).unwrap();
        let blue = result.player_stats.iter().find(|s| s.color == Color::Blue).unwrap();
        assert_eq!(
            (red.rolls, red.moves, red.sixes_rolled, red.tokens_captured, red.tokens_finished),
            (4, 4, 1, 1, 1)
        );
        assert_eq!(red.tokens_lost, 0);
        assert_eq!((blue.rolls, blue.moves, blue.tokens_lost), (1, 0, 1));
        assert_eq!(result.final_positions, game.board().to_vec());
        assert_eq!(position_of(&game, Color::Red, 1), Position::Finished);
    }

    #[test]
    fn finishing_grants_extra_turn() {
        let mut game = two_player_game();
        place(&mut game, Color::Red, 2, Position::HomeColumn(3));
        let result = game.apply_roll(2, Some(0)).unwrap();
        assert!(result.finished_token);
        assert!(result.extra_turn);
        assert!(!result.game_won);
    }

    #[test]
    fn win_ends_the_game_immediately() {
        let mut game = two_player_game();
        for slot in 0..3 {
            place(&mut game, Color::Red, slot, Position::Finished);
        }
        place(&mut game, Color::Red, 3, Position::HomeColumn(4));
        let result = game.apply_roll(1, Some(0)).unwrap();
        assert!(result.game_won);
        assert!(result.finished_token);
        assert!(!result.extra_turn);
        assert_eq!(game.winner(), Some(Color::Red));
        assert_eq!(game.phase(), &Phase::GameOver { winner: Color::Red });
        assert_eq!(
            game.apply_roll(3, None),
            Err(IllegalMove::GameOver { winner: Color::Red })
        );
        assert_eq!(game.play_turn(), Err(IllegalMove::GameOver { winner: Color::Red }));
        let summary = game.match_result();
        assert_eq!(summary.winner, Some(Color::Red));
        assert_eq!(summary.history.len(), 1);
    }

    #[test]
    fn illegal_choice_changes_nothing() {
        let mut game = two_player_game();
        assert_eq!(
            game.apply_roll(6, Some(4)),
            Err(IllegalMove::ChoiceOutOfRange { choice: 4, num_moves: 4 })
        );
        assert_eq!(game.apply_roll(6, None), Err(IllegalMove::MissingChoice { num_moves: 4 }));
        assert_eq!(
            game.apply_roll(3, Some(0)),
            Err(IllegalMove::ChoiceWithoutLegalMove { choice: 0 })
        );
        assert_eq!(game.apply_roll(0, None), Err(IllegalMove::InvalidDiceValue { dice_value: 0 }));
        assert_eq!(game.consecutive_sixes(), 0);
        assert_eq!(game.phase(), &Phase::AwaitingRoll);
        assert!(game.history().is_empty());
        assert!(game.board().iter().all(|t| t.is_home()));
    }

    #[test]
    fn step_by_step_lifecycle() {
        let mut game = two_player_game();
        assert_eq!(game.execute(None), Err(IllegalMove::NoRollPending));
        let moves = game.roll_value(6).unwrap().to_vec();
        assert_eq!(moves.len(), 4);
        assert_eq!(game.roll_value(6), Err(IllegalMove::RollPending));
        assert_eq!(
            game.execute(Some(7)),
            Err(IllegalMove::ChoiceOutOfRange { choice: 7, num_moves: 4 })
        );
        assert_eq!(game.pending_moves(), &moves[..]);
        let result = game.execute(Some(3)).unwrap();
        assert_eq!(result.token_slot, Some(3));
        assert_eq!(game.phase(), &Phase::AwaitingRoll);
    }

    #[test]
    fn strategy_picking_out_of_range_keeps_roll_pending() {
        let mut game = Game::new(
            vec![
                Player::new(Color::Red, Box::new(OutOfRange)),
                Player::new(Color::Green, Box::new(FirstMove)),
            ],
            Box::new(ScriptedDice::new([6])),
        )
        .unwrap();
        assert_eq!(
            game.play_turn(),
            Err(IllegalMove::ChoiceOutOfRange { choice: 4, num_moves: 4 })
        );
        assert!(matches!(game.phase(), Phase::MovesEnumerated { dice_value: 6, .. }));
        assert!(game.history().is_empty());
        let result = game.execute(Some(0)).unwrap();
        assert_eq!(result.new_position, Some(Position::MainPath(0)));
    }

    #[test]
    fn play_turn_uses_dice_source_and_strategy() {
        let mut game = Game::new(
            vec![
                Player::new(Color::Red, Box::new(PickByIndex(vec![2], 0))),
                Player::new(Color::Yellow, Box::new(FirstMove)),
            ],
            Box::new(ScriptedDice::new([6, 3, 5])),
        )
        .unwrap();
        let first = game.play_turn().unwrap();
        assert_eq!(first.token_slot, Some(2));
        let second = game.play_turn().unwrap();
        assert_eq!(second.new_position, Some(Position::MainPath(3)));
        assert_eq!(game.current_color(), Color::Yellow);
        let third = game.play_turn().unwrap();
        assert_eq!(third.acting_color, Color::Yellow);
        assert!(!third.success);
    }

    fn run_game(seed: u64, picks: &[u8], max_rolls: usize) -> Game {
        let players = ALL_COLORS
            .iter()
            .map(|&color| Player::new(color, Box::new(PickByIndex(picks.to_vec(), 0))))
            .collect();
        let mut game = Game::with_seed(players, seed).unwrap();
        for _ in 0..max_rolls {
            if game.is_over() {
                break;
            }
            game.play_turn().unwrap();
        }
        game
    }

    #[test]
    fn same_seed_and_choices_reproduce_history() {
        let picks = [1, 0, 3, 2, 2, 1, 0, 0, 3];
        let a = run_game(7, &picks, 2000);
        let b = run_game(7, &picks, 2000);
        assert_eq!(a.history(), b.history());
        assert_eq!(a.match_result(), b.match_result());
    }

    #[test]
    fn replaying_choices_reproduces_history() {
        let recorded = run_game(11, &[0, 1, 2, 3], 500);
        let players = ALL_COLORS
            .iter()
            .map(|&color| Player::new(color, Box::new(FirstMove)))
            .collect();
        let mut replay = Game::with_seed(players, 0).unwrap();
        for turn in recorded.history() {
            replay.apply_roll(turn.dice_value, turn.move_index).unwrap();
        }
        assert_eq!(replay.history(), recorded.history());
    }

    quickcheck! {
        fn random_games_respect_the_rules(seed: u64, picks: Vec<u8>) -> bool {
            let game = run_game(seed, &picks, 300);
            let mut sixes = 0;
            for (idx, turn) in game.history().iter().enumerate() {
                sixes = if turn.dice_value == 6 { sixes + 1 } else { 0 };
                let next = game.history().get(idx + 1);
                if turn.extra_turn {
                    // The same player rolls again, and only for a reason
                    let earned = turn.dice_value == 6
                        || !turn.captured_tokens.is_empty()
                        || turn.finished_token;
                    if !earned || sixes >= 3 {
                        return false;
                    }
                    if next.map_or(false, |n| n.acting_color != turn.acting_color) {
                        return false;
                    }
                } else {
                    sixes = 0;
                    if next.map_or(false, |n| n.acting_color == turn.acting_color) {
                        return false;
                    }
                }
                if turn.old_position == Some(Position::Home)
                    && (turn.dice_value != 6
                        || turn.new_position
                            != Some(Position::MainPath(turn.acting_color.entry_square())))
                {
                    return false;
                }
            }
            game.board().iter().all(|t| t.position.is_valid_for(t.owner))
        }
    }
}
