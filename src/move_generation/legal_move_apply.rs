use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Piece, PieceKind};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::directions::row_of;
use crate::moves::draughts_move::Move;

/// Apply `mv` for `side` and return the side to move next.
///
/// Captured pieces are removed and a man whose move ends on its promotion
/// row is crowned. The move is checked for consistency with the board before
/// anything is written, so on error `board` is left untouched.
pub fn apply_move(board: &mut Board, mv: &Move, side: Color) -> MoveGenResult<Color> {
    let piece = board
        .piece_at_checked(mv.from)?
        .ok_or(MoveGenerationError::NoPieceOnOrigin(mv.from))?;
    if piece.color != side {
        return Err(MoveGenerationError::WrongSide {
            square: mv.from,
            expected: side,
        });
    }

    if mv.landings.is_empty() {
        return Err(MoveGenerationError::IllegalMove(format!(
            "move from {} has no landing square",
            mv.from
        )));
    }
    if mv.is_capture() && mv.captures.len() != mv.landings.len() {
        return Err(MoveGenerationError::IllegalMove(format!(
            "{} captures but {} landings",
            mv.captures.len(),
            mv.landings.len()
        )));
    }
    for landing in &mv.landings {
        board.piece_at_checked(*landing)?;
    }

    let opponent = side.opposite();
    for captured in &mv.captures {
        if !matches!(board.piece_at_checked(*captured)?, Some(p) if p.color == opponent) {
            return Err(MoveGenerationError::IllegalMove(format!(
                "square {captured} holds no {} piece to capture",
                opponent.name()
            )));
        }
    }

    let to = mv.to();
    if to != mv.from && !board.is_empty(to) {
        return Err(MoveGenerationError::IllegalMove(format!(
            "destination {to} is occupied"
        )));
    }

    board.write(mv.from, None);
    for captured in &mv.captures {
        board.write(*captured, None);
    }
    let crowned = piece.kind == PieceKind::Man && row_of(to) == side.promotion_row();
    board.write(to, Some(if crowned { Piece::king(side) } else { piece }));

    Ok(opponent)
}
