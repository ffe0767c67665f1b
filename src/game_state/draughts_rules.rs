//! Canonical international draughts constants.
//!
//! The board is 10x10 with only the 50 dark squares playable. Squares are
//! indexed densely from the top-left playable square, five per row.

/// Board edge length in cells.
pub const GRID: u8 = 10;

/// Playable squares per row.
pub const SQUARES_PER_ROW: u8 = GRID / 2;

/// Total playable squares.
pub const SQUARE_COUNT: usize = (GRID as usize) * (GRID as usize) / 2;

/// Last row index (`GRID - 1`).
pub const LAST_ROW: u8 = GRID - 1;

/// Rows each side fills in the starting position.
pub const HOME_ROWS: u8 = 4;

/// Mask covering every playable square bit.
pub const BOARD_MASK: u64 = (1u64 << SQUARE_COUNT) - 1;
