//! Square geometry for the 50 playable squares.
//!
//! Square `i` sits on row `i / 5`; even rows hold the odd columns and odd rows
//! the even columns. Neighbour lookups come from a compile-time table so move
//! generation never recomputes coordinates.

use crate::game_state::draughts_rules::{GRID, SQUARES_PER_ROW, SQUARE_COUNT};
use crate::game_state::draughts_types::{Color, Square};

/// One of the four diagonals. "Up" points toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::UpLeft => 0,
            Direction::UpRight => 1,
            Direction::DownLeft => 2,
            Direction::DownRight => 3,
        }
    }

    /// `(column, row)` delta of a single step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Whether a man of `color` may make a quiet step this way.
    #[inline]
    pub const fn is_forward_for(self, color: Color) -> bool {
        self.delta().1 == color.forward()
    }

    /// Downward directions walk toward higher square indices.
    #[inline]
    pub const fn increases_index(self) -> bool {
        self.delta().1 > 0
    }

    #[inline]
    pub fn step(self, square: Square) -> Option<Square> {
        NEIGHBORS[self.index()][square as usize]
    }

    #[inline]
    pub fn can_step(self, square: Square) -> bool {
        self.step(square).is_some()
    }

    /// Direction leading from `from` to `to` when both share a diagonal.
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let (fc, fr) = coordinates(from);
        let (tc, tr) = coordinates(to);
        let dc = tc as i8 - fc as i8;
        let dr = tr as i8 - fr as i8;
        if dc == 0 || dc.abs() != dr.abs() {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|d| d.delta() == (dc.signum(), dr.signum()))
    }
}

const COORDINATES: [(u8, u8); SQUARE_COUNT] = build_coordinates();
const NEIGHBORS: [[Option<Square>; SQUARE_COUNT]; 4] = build_neighbors();

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / SQUARES_PER_ROW
}

#[inline]
pub const fn column_of(square: Square) -> u8 {
    (square % SQUARES_PER_ROW) * 2 + 1 - row_of(square) % 2
}

/// `(column, row)` of a square.
#[inline]
pub fn coordinates(square: Square) -> (u8, u8) {
    COORDINATES[square as usize]
}

/// Square at `(column, row)`, or `None` for light or off-board cells.
pub const fn square_at(column: i8, row: i8) -> Option<Square> {
    let grid = GRID as i8;
    if column < 0 || column >= grid || row < 0 || row >= grid {
        return None;
    }
    if (column + row) % 2 == 0 {
        return None;
    }
    Some(row as u8 * SQUARES_PER_ROW + column as u8 / 2)
}

const fn build_coordinates() -> [(u8, u8); SQUARE_COUNT] {
    let mut table = [(0u8, 0u8); SQUARE_COUNT];
    let mut sq = 0usize;
    while sq < SQUARE_COUNT {
        table[sq] = (column_of(sq as Square), row_of(sq as Square));
        sq += 1;
    }
    table
}

const fn build_neighbors() -> [[Option<Square>; SQUARE_COUNT]; 4] {
    let mut table = [[None; SQUARE_COUNT]; 4];
    let mut dir = 0usize;
    while dir < 4 {
        let (dc, dr) = Direction::ALL[dir].delta();
        let mut sq = 0usize;
        while sq < SQUARE_COUNT {
            let column = column_of(sq as Square) as i8;
            let row = row_of(sq as Square) as i8;
            table[dir][sq] = square_at(column + dc, row + dr);
            sq += 1;
        }
        dir += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{column_of, coordinates, row_of, square_at, Direction};
    use crate::game_state::draughts_types::Color;

    #[test]
    fn coordinate_mapping_is_a_bijection() {
        for sq in 0u8..50 {
            let (c, r) = coordinates(sq);
            assert_eq!((c + r) % 2, 1, "square {sq} must be dark");
            assert_eq!(square_at(c as i8, r as i8), Some(sq));
        }
        assert_eq!(square_at(0, 0), None);
        assert_eq!(square_at(10, 1), None);
    }

    #[test]
    fn first_row_starts_on_column_one() {
        assert_eq!((column_of(0), row_of(0)), (1, 0));
        assert_eq!((column_of(5), row_of(5)), (0, 1));
        assert_eq!((column_of(49), row_of(49)), (8, 9));
    }

    #[test]
    fn steps_respect_board_edges() {
        // (0, 1) on the left edge.
        assert_eq!(Direction::UpLeft.step(5), None);
        assert_eq!(Direction::UpRight.step(5), Some(0));
        assert_eq!(Direction::DownRight.step(5), Some(10));
        // (9, 0) is the top-right corner.
        assert_eq!(Direction::UpRight.step(4), None);
        assert_eq!(Direction::DownLeft.step(4), Some(9));
        assert!(!Direction::DownRight.can_step(4));
    }

    #[test]
    fn forward_depends_on_color() {
        assert!(Direction::UpLeft.is_forward_for(Color::White));
        assert!(!Direction::UpLeft.is_forward_for(Color::Black));
        assert!(Direction::DownRight.is_forward_for(Color::Black));
    }

    #[test]
    fn between_finds_shared_diagonal() {
        assert_eq!(Direction::between(44, 0), Some(Direction::UpLeft));
        assert_eq!(Direction::between(0, 44), Some(Direction::DownRight));
        assert_eq!(Direction::between(0, 1), None);
    }
}
