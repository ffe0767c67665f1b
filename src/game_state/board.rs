//! Dense board representation.
//!
//! One cell per playable square. This is the form the caller owns and the
//! form moves are applied to; the search converts it to `Bitboards` once per
//! decision.

use crate::game_state::bitboards::Bitboards;
use crate::game_state::draughts_rules::{HOME_ROWS, SQUARES_PER_ROW, SQUARE_COUNT};
use crate::game_state::draughts_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; SQUARE_COUNT],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Twenty men per side on the four home rows, two empty middle rows.
    pub fn new_game() -> Self {
        let mut board = Self::default();
        let home = (HOME_ROWS * SQUARES_PER_ROW) as usize;
        for sq in 0..home {
            board.cells[sq] = Some(Piece::man(Color::Black));
        }
        for sq in SQUARE_COUNT - home..SQUARE_COUNT {
            board.cells[sq] = Some(Piece::man(Color::White));
        }
        board
    }

    /// Build a board from explicit placements, rejecting bad squares.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> MoveGenResult<Self> {
        let mut board = Self::default();
        for (sq, piece) in pieces {
            board.set(*sq, Some(*piece))?;
        }
        Ok(board)
    }

    /// Cell contents. `square` must be below 50.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    pub fn piece_at_checked(&self, square: Square) -> MoveGenResult<Option<Piece>> {
        self.cells
            .get(square as usize)
            .copied()
            .ok_or(MoveGenerationError::SquareOutOfRange(square))
    }

    pub fn set(&mut self, square: Square, cell: Option<Piece>) -> MoveGenResult<()> {
        let slot = self
            .cells
            .get_mut(square as usize)
            .ok_or(MoveGenerationError::SquareOutOfRange(square))?;
        *slot = cell;
        Ok(())
    }

    #[inline]
    pub(crate) fn write(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square as usize] = cell;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square as usize].is_none()
    }

    #[inline]
    pub fn holds(&self, square: Square, color: Color) -> bool {
        matches!(self.cells[square as usize], Some(p) if p.color == color)
    }

    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| matches!(cell, Some(p) if p.color == color))
            .map(|(sq, _)| sq as Square)
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }

    pub fn to_bitboards(&self) -> Bitboards {
        let mut bitboards = Bitboards::default();
        for (sq, cell) in self.cells.iter().enumerate() {
            let Some(piece) = cell else {
                continue;
            };
            let bit = 1u64 << sq;
            match piece.color {
                Color::White => bitboards.white |= bit,
                Color::Black => bitboards.black |= bit,
            }
            if piece.kind == PieceKind::King {
                bitboards.kings |= bit;
            }
        }
        bitboards
    }
}

impl From<&Bitboards> for Board {
    fn from(bitboards: &Bitboards) -> Self {
        bitboards.to_board()
    }
}

/// Seeded random positions for property checks.
#[cfg(test)]
pub(crate) fn random_board<R: rand::Rng>(rng: &mut R) -> Board {
    use crate::moves::directions::row_of;

    let mut board = Board::new_empty();
    for sq in 0..SQUARE_COUNT as Square {
        let roll = rng.random_range(0..100u32);
        let cell = match roll {
            0..=17 => Some(Piece::man(Color::White)),
            18..=35 => Some(Piece::man(Color::Black)),
            36..=39 => Some(Piece::king(Color::White)),
            40..=43 => Some(Piece::king(Color::Black)),
            _ => None,
        };
        // Men never rest on their own promotion row.
        let cell = match cell {
            Some(p) if p.kind == PieceKind::Man && row_of(sq) == p.color.promotion_row() => None,
            other => other,
        };
        board.write(sq, cell);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::draughts_types::{Color, Piece};
    use crate::move_generation::move_generator::MoveGenerationError;

    #[test]
    fn starting_position_has_twenty_men_each() {
        let board = Board::new_game();
        assert_eq!(board.count(Color::White), 20);
        assert_eq!(board.count(Color::Black), 20);
        assert!((20..30).all(|sq| board.is_empty(sq)));
        assert!(board.holds(0, Color::Black));
        assert!(board.holds(49, Color::White));
    }

    #[test]
    fn bitboard_conversion_round_trips() {
        let board = Board::from_pieces(&[
            (3, Piece::king(Color::White)),
            (27, Piece::man(Color::White)),
            (21, Piece::man(Color::Black)),
            (48, Piece::king(Color::Black)),
        ])
        .expect("placements are on the board");
        let bitboards = board.to_bitboards();
        assert_eq!(bitboards.white, (1u64 << 3) | (1u64 << 27));
        assert_eq!(bitboards.kings, (1u64 << 3) | (1u64 << 48));
        assert_eq!(Board::from(&bitboards), board);
    }

    #[test]
    fn out_of_range_square_is_rejected() {
        let mut board = Board::new_empty();
        assert_eq!(
            board.set(50, Some(Piece::man(Color::White))),
            Err(MoveGenerationError::SquareOutOfRange(50))
        );
        assert_eq!(
            board.piece_at_checked(77),
            Err(MoveGenerationError::SquareOutOfRange(77))
        );
    }
}
