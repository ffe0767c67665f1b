//! Bitboard position encoding used by the search.
//!
//! Bit `i` stands for square `i`. A square holds a king exactly when its bit
//! is also set in `kings`.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::{BOARD_MASK, SQUARE_COUNT};
use crate::game_state::draughts_types::{Color, Piece, Square};
use crate::moves::directions::row_of;
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboards {
    pub white: u64,
    pub black: u64,
    pub kings: u64,
}

impl Bitboards {
    #[inline]
    pub fn of(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn of_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.white | self.black
    }

    #[inline]
    pub fn empty(&self) -> u64 {
        !self.occupied() & BOARD_MASK
    }

    #[inline]
    pub fn is_king(&self, square: Square) -> bool {
        (self.kings & (1u64 << square)) != 0
    }

    pub fn to_board(&self) -> Board {
        let mut board = Board::new_empty();
        for sq in 0..SQUARE_COUNT as Square {
            let bit = 1u64 << sq;
            let color = if self.white & bit != 0 {
                Color::White
            } else if self.black & bit != 0 {
                Color::Black
            } else {
                continue;
            };
            let piece = if self.kings & bit != 0 {
                Piece::king(color)
            } else {
                Piece::man(color)
            };
            board.write(sq, Some(piece));
        }
        board
    }

    /// Position after `side` plays `mv`. Captured pieces are removed and a
    /// man ending on its promotion row becomes a king.
    pub fn apply(&self, mv: &Move, side: Color) -> Bitboards {
        let mut next = *self;
        let from_bit = 1u64 << mv.from;
        let to = mv.to();
        let to_bit = 1u64 << to;
        let was_king = self.kings & from_bit != 0;
        let captured = mv.capture_mask();

        *next.of_mut(side) &= !from_bit;
        next.kings &= !(from_bit | captured);
        *next.of_mut(side.opposite()) &= !captured;

        *next.of_mut(side) |= to_bit;
        if was_king || row_of(to) == side.promotion_row() {
            next.kings |= to_bit;
        }

        next
    }
}

impl From<&Board> for Bitboards {
    fn from(board: &Board) -> Self {
        board.to_bitboards()
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboards;
    use crate::game_state::draughts_types::Color;
    use crate::moves::draughts_move::Move;

    #[test]
    fn apply_removes_captured_pieces() {
        let position = Bitboards {
            white: 1u64 << 27,
            black: (1u64 << 21) | (1u64 << 2),
            kings: 0,
        };
        let next = position.apply(&Move::capture(27, vec![21], vec![16]), Color::White);
        assert_eq!(next.white, 1u64 << 16);
        assert_eq!(next.black, 1u64 << 2);
        assert_eq!(next.kings, 0);
    }

    #[test]
    fn man_reaching_last_row_is_crowned() {
        let position = Bitboards {
            white: 1u64 << 6,
            black: 1u64 << 49,
            kings: 0,
        };
        let next = position.apply(&Move::quiet(6, 0), Color::White);
        assert!(next.is_king(0));
        assert_eq!(next.white, 1u64);

        let black = Bitboards {
            white: 0,
            black: 1u64 << 41,
            kings: 0,
        };
        assert!(black.apply(&Move::quiet(41, 46), Color::Black).is_king(46));
    }

    #[test]
    fn king_keeps_its_crown_when_moving() {
        let position = Bitboards {
            white: 1u64 << 44,
            black: 0,
            kings: 1u64 << 44,
        };
        let next = position.apply(&Move::quiet(44, 22), Color::White);
        assert_eq!(next.kings, 1u64 << 22);
        assert_eq!(next.empty().count_ones(), 49);
    }
}
