use quickcheck::{Arbitrary, Gen};

use crate::{Board, Color, Position, Token, ALL_COLORS, FINISH_PROGRESS};

/// A roll in `1..=6`.
#[derive(Copy, Clone, Debug)]
pub struct DiceValue(pub u8);

impl Arbitrary for DiceValue {
    fn arbitrary(g: &mut Gen) -> Self {
        DiceValue(u8::arbitrary(g) % 6 + 1)
    }
}

/// A board with 2 to 4 players, four tokens each, in arbitrary positions.
#[derive(Clone, Debug)]
pub struct BoardInput {
    pub board: Board,
}

/// A position that a token of `color` can actually reach in a game.
fn reachable_position(g: &mut Gen, color: Color) -> Position {
    // Bias towards the main path, which is where the interesting rules are
    match u8::arbitrary(g) % 8 {
        0 => Position::Home,
        1 => Position::Finished,
        _ => {
            let progress = u8::arbitrary(g) % FINISH_PROGRESS;
            Board::position_at_progress(color, progress).unwrap()
        }
    }
}

impl Arbitrary for BoardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_players = 2 + usize::arbitrary(g) % 3;
        let mut colors = Vec::from(ALL_COLORS);
        while colors.len() > num_players {
            let idx = usize::arbitrary(g) % colors.len();
            colors.remove(idx);
        }
        let mut tokens = Vec::with_capacity(colors.len() * 4);
        for color in colors {
            for slot in 0..4 {
                tokens.push(Token {
                    owner: color,
                    slot,
                    position: reachable_position(g, color),
                });
            }
        }
        BoardInput {
            board: Board::new(tokens),
        }
    }
}
