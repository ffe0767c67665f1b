//! Headless turn sequencing.
//!
//! `GameSession` owns the authoritative board, keeps the current side's legal
//! move set up to date, validates played moves against it, reports the
//! winner once the side to move is stuck, and can take moves back.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Square};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveSet};
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    moves: MoveSet,
    history: Vec<UndoState>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameSession {
    /// Starting position, White to move.
    pub fn new_game() -> Self {
        Self::from_position(Board::new_game(), Color::White)
    }

    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        let moves = generate_legal_moves(&board, side_to_move);
        Self {
            board,
            side_to_move,
            moves,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn legal_moves(&self) -> &MoveSet {
        &self.moves
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// The side that won, once the side to move has no legal move.
    pub fn winner(&self) -> Option<Color> {
        self.moves
            .is_empty()
            .then_some(self.side_to_move.opposite())
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.moves.is_empty()
    }

    /// Play a move from the current legal set and return the next side.
    pub fn play(&mut self, mv: &Move) -> MoveGenResult<Color> {
        let legal = self
            .moves
            .moves_from(mv.from)
            .iter()
            .find(|candidate| candidate.same_effect(mv))
            .cloned()
            .ok_or_else(|| MoveGenerationError::IllegalMove(format!("{mv} is not legal now")))?;

        let board_before = self.board;
        let side = self.side_to_move;
        let next = apply_move(&mut self.board, &legal, side)?;

        self.history.push(UndoState {
            mv: legal,
            side,
            board_before,
        });
        self.side_to_move = next;
        self.refresh();
        Ok(next)
    }

    /// Resolve a clicked path (origin plus landings) and play it.
    pub fn play_path(&mut self, from: Square, landings: &[Square]) -> MoveGenResult<Color> {
        let mv = self
            .moves
            .resolve(from, landings)
            .cloned()
            .ok_or_else(|| {
                MoveGenerationError::IllegalMove(format!(
                    "no legal move from {from} along {landings:?}"
                ))
            })?;
        self.play(&mv)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.board = last.board_before;
        self.side_to_move = last.side;
        self.refresh();
        Some(last.mv)
    }

    /// Take back moves until `side` is to move again, undoing at least one.
    /// Returns how many moves were taken back.
    pub fn undo_to(&mut self, side: Color) -> usize {
        let mut undone = 0;
        while self.undo().is_some() {
            undone += 1;
            if self.side_to_move == side {
                break;
            }
        }
        undone
    }

    fn refresh(&mut self) {
        self.moves = generate_legal_moves(&self.board, self.side_to_move);
    }
}
