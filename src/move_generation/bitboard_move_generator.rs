//! Bitboard legal move generation used by the search.
//!
//! Mirrors `legal_move_generator` rule for rule: kings resolve their reach
//! with ray masks and a nearest-blocker bit scan instead of walking cells.

use crate::game_state::bitboards::Bitboards;
use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Square};
use crate::move_generation::move_generator::{MoveGenerator, MoveSet};
use crate::moves::diagonal_rays::{empty_run, first_blocker};
use crate::moves::directions::Direction;
use crate::moves::draughts_move::Move;

pub struct BitboardMoveGenerator;

impl MoveGenerator for BitboardMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveSet {
        generate_bitboard_moves(&board.to_bitboards(), side)
    }
}

/// Fixed facts about the piece whose chains are being searched.
struct ChainScope {
    from: Square,
    king: bool,
    /// Occupancy with the origin vacated.
    occupied: u64,
    opponent: u64,
}

struct BitChain {
    captured: u64,
    landed: u64,
    captures: Vec<Square>,
    landings: Vec<Square>,
}

pub fn generate_bitboard_moves(position: &Bitboards, side: Color) -> MoveSet {
    let own = position.of(side);
    let opponent = position.of(side.opposite());
    let mut set = MoveSet::default();

    let mut pieces = own;
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        pieces &= pieces - 1;

        let from_bit = 1u64 << from;
        let scope = ChainScope {
            from,
            king: position.is_king(from),
            occupied: position.occupied() & !from_bit,
            opponent,
        };
        let mut chain = BitChain {
            captured: 0,
            landed: from_bit,
            captures: Vec::new(),
            landings: Vec::new(),
        };
        let mut best = 0usize;
        let mut piece_moves = Vec::new();
        extend_capture_chain(&scope, from, &mut chain, &mut best, &mut piece_moves);

        if best == 0 || best < set.max_capture {
            continue;
        }
        if best > set.max_capture {
            set.moves_by_origin.clear();
            set.max_capture = best;
        }
        set.moves_by_origin.insert(from, piece_moves);
    }

    if set.max_capture == 0 {
        let occupied = position.occupied();
        let mut pieces = own;
        while pieces != 0 {
            let from = pieces.trailing_zeros() as Square;
            pieces &= pieces - 1;

            let quiet = quiet_moves(from, position.is_king(from), side, occupied);
            if !quiet.is_empty() {
                set.moves_by_origin.insert(from, quiet);
            }
        }
    }

    set
}

fn quiet_moves(from: Square, king: bool, side: Color, occupied: u64) -> Vec<Move> {
    let mut out = Vec::new();
    for dir in Direction::ALL {
        let mut targets = if king {
            empty_run(dir, from, occupied)
        } else if dir.is_forward_for(side) {
            match dir.step(from) {
                Some(to) if occupied & (1u64 << to) == 0 => 1u64 << to,
                _ => 0,
            }
        } else {
            0
        };
        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            targets &= targets - 1;
            out.push(Move::quiet(from, to));
        }
    }
    out
}

fn extend_capture_chain(
    scope: &ChainScope,
    at: Square,
    chain: &mut BitChain,
    best: &mut usize,
    out: &mut Vec<Move>,
) {
    let mut extended = false;

    for dir in Direction::ALL {
        let Some((captured, landings)) = capture_in_direction(scope, at, dir, chain.captured) else {
            continue;
        };

        let mut landings = landings & !chain.landed;
        while landings != 0 {
            let landing = landings.trailing_zeros() as Square;
            landings &= landings - 1;
            extended = true;

            let captured_bit = 1u64 << captured;
            let landing_bit = 1u64 << landing;
            chain.captured |= captured_bit;
            chain.landed |= landing_bit;
            chain.captures.push(captured);
            chain.landings.push(landing);

            extend_capture_chain(scope, landing, chain, best, out);

            chain.captured &= !captured_bit;
            chain.landed &= !landing_bit;
            chain.captures.pop();
            chain.landings.pop();
        }
    }

    let count = chain.captures.len();
    if extended || count == 0 || count < *best {
        return;
    }
    if count > *best {
        out.clear();
        *best = count;
    }
    MoveSet::push_unique(
        out,
        Move::capture(scope.from, chain.captures.clone(), chain.landings.clone()),
    );
}

/// Piece jumped and the landing mask beyond it, if `dir` offers a capture.
fn capture_in_direction(
    scope: &ChainScope,
    at: Square,
    dir: Direction,
    captured: u64,
) -> Option<(Square, u64)> {
    let target = if scope.king {
        first_blocker(dir, at, scope.occupied)?
    } else {
        dir.step(at)?
    };

    let target_bit = 1u64 << target;
    if scope.opponent & target_bit == 0 || captured & target_bit != 0 {
        return None;
    }

    let landings = if scope.king {
        empty_run(dir, target, scope.occupied)
    } else {
        let landing = dir.step(target)?;
        if scope.occupied & (1u64 << landing) != 0 {
            return None;
        }
        1u64 << landing
    };

    (landings != 0).then_some((target, landings))
}

#[cfg(test)]
mod tests {
    use super::generate_bitboard_moves;
    use crate::game_state::bitboards::Bitboards;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::Color;

    #[test]
    fn starting_position_matches_dense_generator() {
        let position = Board::new_game().to_bitboards();
        let set = generate_bitboard_moves(&position, Color::White);
        assert_eq!(set.max_capture, 0);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn king_captures_from_a_distance() {
        let position = Bitboards {
            white: 1u64 << 44,
            black: 1u64 << 22,
            kings: 1u64 << 44,
        };
        let set = generate_bitboard_moves(&position, Color::White);
        assert_eq!(set.max_capture, 1);
        let mut destinations: Vec<u8> = set.iter().map(|m| m.to()).collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![0, 6, 11, 17]);
    }

    #[test]
    fn blocked_landing_prevents_capture() {
        // Black man on 21 is backed by another on 16.
        let position = Bitboards {
            white: 1u64 << 27,
            black: (1u64 << 21) | (1u64 << 16),
            kings: 0,
        };
        let set = generate_bitboard_moves(&position, Color::White);
        assert_eq!(set.max_capture, 0);
        assert!(set.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn side_without_pieces_has_no_moves() {
        let position = Bitboards {
            white: 0,
            black: 1u64 << 3,
            kings: 0,
        };
        assert!(generate_bitboard_moves(&position, Color::White).is_empty());
    }
}
