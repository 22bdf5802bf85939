use crate::{Board, Position, PATH_LENGTH};

/// Renders the board as a few lines of text: one line per color listing its
/// tokens, followed by the occupied main-path squares.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::new();
    for color in board.colors() {
        result += &format!("{:>6} │", color.name());
        for token in board.tokens_of(color) {
            let cell = match token.position {
                Position::Home => String::from("  ⌂"),
                Position::MainPath(square) => format!("{:>3}", square),
                Position::HomeColumn(idx) => format!(" c{}", idx),
                Position::Finished => String::from("  ★"),
            };
            result += &cell;
        }
        result += "\n";
    }

    result += "  path │";
    for square in 0..PATH_LENGTH {
        let occupants: Vec<_> = board.occupants(square).collect();
        if occupants.is_empty() {
            continue;
        }
        result += &format!(" {}:", square);
        for token in occupants {
            // First letter of the color, upper case
            result.push(token.owner.name().as_bytes()[0].to_ascii_uppercase() as char);
        }
    }
    result
}
