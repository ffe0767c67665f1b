//! Engine abstraction used by the match harness and the self-play binary.
//!
//! Every engine receives the board, the side to move and the legal move set
//! the caller already generated, and answers with at most one move plus
//! human-readable info lines.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::{MoveGenResult, MoveSet};
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        moves: &MoveSet,
    ) -> MoveGenResult<EngineOutput>;
}
