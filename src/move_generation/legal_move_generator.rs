//! Dense-array legal move generation.
//!
//! Walks neighbours cell by cell. Captured pieces stay on the board until the
//! move is applied, so they block rays and cannot be jumped twice. The moving
//! piece's origin is vacated on a scratch copy while its chains are searched.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Piece, Square};
use crate::move_generation::move_generator::{MoveGenerator, MoveSet};
use crate::moves::directions::Direction;
use crate::moves::draughts_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveSet {
        generate_legal_moves(board, side)
    }
}

/// Capture chain under construction for one piece.
struct CaptureChain {
    from: Square,
    captures: Vec<Square>,
    landings: Vec<Square>,
}

impl CaptureChain {
    fn new(from: Square) -> Self {
        Self {
            from,
            captures: Vec::new(),
            landings: Vec::new(),
        }
    }

    #[inline]
    fn may_land(&self, square: Square) -> bool {
        square != self.from && !self.landings.contains(&square)
    }
}

pub fn generate_legal_moves(board: &Board, side: Color) -> MoveSet {
    let mut scratch = *board;
    let mut set = MoveSet::default();
    let origins: Vec<Square> = board.squares_of(side).collect();

    for &from in &origins {
        let Some(piece) = scratch.piece_at(from) else {
            continue;
        };

        scratch.write(from, None);
        let mut chain = CaptureChain::new(from);
        let mut best = 0usize;
        let mut piece_moves = Vec::new();
        extend_capture_chain(&scratch, piece, from, &mut chain, &mut best, &mut piece_moves);
        scratch.write(from, Some(piece));

        if best == 0 || best < set.max_capture {
            continue;
        }
        if best > set.max_capture {
            set.moves_by_origin.clear();
            set.max_capture = best;
        }
        set.moves_by_origin.insert(from, piece_moves);
    }
    debug_assert_eq!(&scratch, board);

    if set.max_capture == 0 {
        for from in origins {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            let quiet = quiet_moves(board, piece, from);
            if !quiet.is_empty() {
                set.moves_by_origin.insert(from, quiet);
            }
        }
    }

    set
}

fn quiet_moves(board: &Board, piece: Piece, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    for dir in Direction::ALL {
        if !piece.is_king() && !dir.is_forward_for(piece.color) {
            continue;
        }
        let mut at = from;
        while let Some(next) = dir.step(at) {
            if !board.is_empty(next) {
                break;
            }
            out.push(Move::quiet(from, next));
            if !piece.is_king() {
                break;
            }
            at = next;
        }
    }
    out
}

fn extend_capture_chain(
    board: &Board,
    piece: Piece,
    at: Square,
    chain: &mut CaptureChain,
    best: &mut usize,
    out: &mut Vec<Move>,
) {
    let mut extended = false;

    for dir in Direction::ALL {
        let Some((captured, landings)) = capture_in_direction(board, piece, at, dir, chain) else {
            continue;
        };

        for landing in landings {
            if !chain.may_land(landing) {
                continue;
            }
            extended = true;
            chain.captures.push(captured);
            chain.landings.push(landing);
            extend_capture_chain(board, piece, landing, chain, best, out);
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
        Move::capture(chain.from, chain.captures.clone(), chain.landings.clone()),
    );
}

/// Piece jumped and the landing choices beyond it, if `dir` offers a capture.
fn capture_in_direction(
    board: &Board,
    piece: Piece,
    at: Square,
    dir: Direction,
    chain: &CaptureChain,
) -> Option<(Square, Vec<Square>)> {
    let mut target = dir.step(at)?;
    if piece.is_king() {
        while board.is_empty(target) {
            target = dir.step(target)?;
        }
    }

    if !board.holds(target, piece.color.opposite()) || chain.captures.contains(&target) {
        return None;
    }

    let mut landing = dir.step(target)?;
    if !board.is_empty(landing) {
        return None;
    }

    let mut landings = vec![landing];
    if piece.is_king() {
        while let Some(next) = dir.step(landing) {
            if !board.is_empty(next) {
                break;
            }
            landings.push(next);
            landing = next;
        }
    }

    Some((target, landings))
}
