//! Terminal-oriented Unicode board renderer.
//!
//! Draws the 10x10 grid with row 0 at the top. Unplayable squares are blank,
//! empty playable squares are `·`, and each row ends with the 1-based square
//! numbers it holds so diagrams can be read against move notation.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::{GRID, SQUARES_PER_ROW};
use crate::game_state::draughts_types::{Color, Piece, PieceKind};
use crate::moves::directions::square_at;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..GRID {
        for column in 0..GRID {
            let cell = match square_at(column as i8, row as i8) {
                Some(square) => board.piece_at(square).map_or('·', piece_to_unicode),
                None => ' ',
            };
            out.push(cell);
            if column + 1 < GRID {
                out.push(' ');
            }
        }

        let first = u16::from(row) * u16::from(SQUARES_PER_ROW) + 1;
        let last = first + u16::from(SQUARES_PER_ROW) - 1;
        out.push_str(&format!("  {first:>2}-{last:>2}"));

        if row + 1 < GRID {
            out.push('\n');
        }
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Man) => '⛀',
        (Color::White, PieceKind::King) => '⛁',
        (Color::Black, PieceKind::Man) => '⛂',
        (Color::Black, PieceKind::King) => '⛃',
    }
}
