//! Precomputed diagonal ray masks for the bitboard generator.
//!
//! `DIAGONAL_RAYS[dir][sq]` holds every square from `sq` (exclusive) to the
//! board edge along `dir`. Sliding pieces resolve their reach with a single
//! bit scan for the nearest blocker.

use crate::game_state::draughts_rules::SQUARE_COUNT;
use crate::game_state::draughts_types::Square;
use crate::moves::directions::{column_of, row_of, square_at, Direction};

pub const DIAGONAL_RAYS: [[u64; SQUARE_COUNT]; 4] = generate_diagonal_rays();

#[inline]
pub fn ray(direction: Direction, square: Square) -> u64 {
    DIAGONAL_RAYS[direction.index()][square as usize]
}

/// Nearest occupied square along `direction`, if any.
#[inline]
pub fn first_blocker(direction: Direction, square: Square, occupied: u64) -> Option<Square> {
    let blockers = ray(direction, square) & occupied;
    if blockers == 0 {
        None
    } else if direction.increases_index() {
        Some(blockers.trailing_zeros() as Square)
    } else {
        Some((63 - blockers.leading_zeros()) as Square)
    }
}

/// Empty squares reachable from `square` before the first blocker.
#[inline]
pub fn empty_run(direction: Direction, square: Square, occupied: u64) -> u64 {
    let full = ray(direction, square);
    match first_blocker(direction, square, occupied) {
        Some(blocker) => full & !ray(direction, blocker) & !(1u64 << blocker),
        None => full,
    }
}

const fn generate_diagonal_rays() -> [[u64; SQUARE_COUNT]; 4] {
    let mut table = [[0u64; SQUARE_COUNT]; 4];
    let mut dir = 0usize;

    while dir < 4 {
        let mut sq = 0usize;
        while sq < SQUARE_COUNT {
            table[dir][sq] = trace_ray_const(sq as Square, Direction::ALL[dir]);
            sq += 1;
        }
        dir += 1;
    }

    table
}

const fn trace_ray_const(square: Square, direction: Direction) -> u64 {
    let (dc, dr) = direction.delta();
    let mut column = column_of(square) as i8 + dc;
    let mut row = row_of(square) as i8 + dr;
    let mut mask = 0u64;

    while let Some(target) = square_at(column, row) {
        mask |= 1u64 << target;
        column += dc;
        row += dr;
    }

    mask
}
