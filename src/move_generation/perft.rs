use std::sync::Arc;
use std::thread;

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, PieceKind};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub captured_pieces: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.captured_pieces += rhs.captured_pieces;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side).iter() {
        perft_recurse(generator, board, side, mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Root moves split across worker threads, one thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves: Vec<Move> = generator
        .generate_legal_moves(board, side)
        .iter()
        .cloned()
        .collect();
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let board = *board;
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(
                generator_ref.as_ref(),
                &board,
                side,
                &mv,
                depth,
                1,
                &mut local,
            );
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::WorkerPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    side: Color,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let mut next = *board;
    let was_man = matches!(board.piece_at(mv.from), Some(p) if p.kind == PieceKind::Man);
    let next_side = apply_move(&mut next, mv, side)?;

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
            counts.captured_pieces += mv.capture_count();
        }
        if was_man && matches!(next.piece_at(mv.to()), Some(p) if p.kind == PieceKind::King) {
            counts.promotions += 1;
        }
        return Ok(());
    }

    for reply in generator.generate_legal_moves(&next, next_side).iter() {
        perft_recurse(
            generator,
            &next,
            next_side,
            reply,
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{perft, perft_multi_threaded};
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{Color, Piece};
    use crate::move_generation::bitboard_move_generator::BitboardMoveGenerator;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn opening_counts_for_first_two_plies() {
        let board = Board::new_game();
        let d1 = perft(&LegalMoveGenerator, &board, Color::White, 1).expect("perft runs");
        let d2 = perft(&LegalMoveGenerator, &board, Color::White, 2).expect("perft runs");
        assert_eq!(d1.nodes, 9);
        assert_eq!(d2.nodes, 81);
        assert_eq!(d2.captures, 0);
    }

    #[test]
    fn generators_agree_three_plies_deep() {
        let board = Board::new_game();
        let dense = perft(&LegalMoveGenerator, &board, Color::White, 3).expect("perft runs");
        let bits = perft(&BitboardMoveGenerator, &board, Color::White, 3).expect("perft runs");
        assert_eq!(dense, bits);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let board = Board::new_game();
        let single = perft(&BitboardMoveGenerator, &board, Color::White, 3).expect("perft runs");
        let threaded =
            perft_multi_threaded(Arc::new(BitboardMoveGenerator), &board, Color::White, 3)
                .expect("perft runs");
        assert_eq!(single, threaded);
    }

    #[test]
    fn promotions_are_counted() {
        let board = Board::from_pieces(&[
            (6, Piece::man(Color::White)),
            (40, Piece::man(Color::Black)),
        ])
        .expect("valid placements");
        let counts = perft(&LegalMoveGenerator, &board, Color::White, 1).expect("perft runs");
        assert_eq!(counts.nodes, 2);
        assert_eq!(counts.promotions, 2);
    }
}
