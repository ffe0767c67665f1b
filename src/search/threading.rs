//! Off-thread AI decisions.
//!
//! The interactive side hands the worker an owned board snapshot and the
//! already generated move set, keeps running, and collects the result when
//! `is_finished` reports true. Each worker builds and drops its own position
//! cache; nothing is shared between overlapping decisions.

use std::thread::{self, JoinHandle};

use log::warn;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveSet};
use crate::search::minimax::{choose_ai_move, choose_ai_move_with_rng, SearchConfig, SearchResult};

pub struct AiSearchHandle {
    side: Color,
    handle: JoinHandle<MoveGenResult<SearchResult>>,
}

impl AiSearchHandle {
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker is done.
    pub fn wait(self) -> MoveGenResult<SearchResult> {
        let side = self.side;
        self.handle.join().unwrap_or_else(|_| {
            warn!("{} search worker panicked", side.name());
            Err(MoveGenerationError::WorkerPanicked)
        })
    }
}

pub fn spawn_ai_search(
    board: Board,
    side: Color,
    moves: MoveSet,
    config: SearchConfig,
) -> AiSearchHandle {
    let handle = thread::spawn(move || choose_ai_move(&board, side, &moves, config));
    AiSearchHandle { side, handle }
}

/// Same as `spawn_ai_search` with a reproducible tie-break.
pub fn spawn_seeded_ai_search(
    board: Board,
    side: Color,
    moves: MoveSet,
    config: SearchConfig,
    seed: u64,
) -> AiSearchHandle {
    let handle = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        choose_ai_move_with_rng(&board, side, &moves, config, &mut rng)
    });
    AiSearchHandle { side, handle }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{spawn_ai_search, spawn_seeded_ai_search};
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::Color;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::move_generation::move_generator::MoveGenerationError;
    use crate::search::minimax::{choose_ai_move_with_rng, SearchConfig};

    #[test]
    fn worker_returns_a_legal_move() {
        let board = Board::new_game();
        let moves = generate_legal_moves(&board, Color::Black);
        let handle = spawn_ai_search(board, Color::Black, moves.clone(), SearchConfig::new(1));
        assert_eq!(handle.side(), Color::Black);
        let result = handle.wait().expect("search succeeds");
        assert!(moves.iter().any(|m| *m == result.best_move));
    }

    #[test]
    fn seeded_worker_matches_inline_search() {
        let board = Board::new_game();
        let moves = generate_legal_moves(&board, Color::White);
        let config = SearchConfig::new(2);

        let threaded = spawn_seeded_ai_search(board, Color::White, moves.clone(), config, 42)
            .wait()
            .expect("search succeeds");
        let mut rng = StdRng::seed_from_u64(42);
        let inline = choose_ai_move_with_rng(&board, Color::White, &moves, config, &mut rng)
            .expect("search succeeds");
        assert_eq!(threaded.best_move, inline.best_move);
        assert_eq!(threaded.best_score, inline.best_score);
    }

    #[test]
    fn worker_reports_missing_moves() {
        let board = Board::new_empty();
        let moves = generate_legal_moves(&board, Color::White);
        let err = spawn_ai_search(board, Color::White, moves, SearchConfig::default())
            .wait()
            .expect_err("nothing to move");
        assert_eq!(err, MoveGenerationError::NoLegalMoves(Color::White));
    }
}
