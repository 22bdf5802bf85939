use ludo::{Board, Color, Move, Position, Token, TokenRef};

/// Number of opponent tokens that could land on `square` with their next roll.
///
/// Only tokens already on the main path count. Safe squares are never threatened.
pub fn threats_to(board: &Board, square: u8, color: Color) -> usize {
    threats_ignoring(board, square, color, &[])
}

/// Like [`threats_to()`] for the destination of a move, ignoring the tokens
/// the move would capture.
pub fn destination_threats(board: &Board, color: Color, mv: &Move) -> usize {
    match mv.to {
        Position::MainPath(square) => threats_ignoring(board, square, color, &mv.captures),
        _ => 0,
    }
}

/// Whether the token could be captured by some opponent's next roll.
pub fn is_threatened(board: &Board, token: &Token) -> bool {
    token
        .position
        .square()
        .is_some_and(|square| threats_to(board, square, token.owner) > 0)
}

/// Progress of the moved token after the move.
pub fn progress_after(color: Color, mv: &Move) -> u8 {
    let moved = Token {
        owner: color,
        slot: mv.slot,
        position: mv.to,
    };
    Board::progress(&moved).unwrap_or(0)
}

/// Progress of the token before the move, with home counting below the entry square.
pub fn progress_before(color: Color, mv: &Move) -> i16 {
    let token = Token {
        owner: color,
        slot: mv.slot,
        position: mv.from,
    };
    Board::progress(&token).map_or(-1, i16::from)
}

fn threats_ignoring(board: &Board, square: u8, color: Color, ignored: &[TokenRef]) -> usize {
    if Board::is_safe(Position::MainPath(square)) {
        return 0;
    }
    board
        .iter()
        .filter(|token| token.owner != color && token.is_on_main_path())
        .filter(|token| !ignored.contains(&token.id()))
        .filter(|token| {
            (1..=6).any(|dice| {
                Board::legal_destination(token, dice) == Some(Position::MainPath(square))
            })
        })
        .count()
}

/// Index of the move with the highest score. Ties go to the earliest move.
pub fn best_by_score<S: Ord>(moves: &[Move], mut score: impl FnMut(&Move) -> S) -> usize {
    let mut top_idx = 0;
    let mut top_score = None;
    for (idx, mv) in moves.iter().enumerate() {
        let s = score(mv);
        match top_score.as_ref().map(|top| s.cmp(top)) {
            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal) => {}
            Some(std::cmp::Ordering::Greater) | None => {
                top_idx = idx;
                top_score = Some(s);
            }
        }
    }
    top_idx
}
