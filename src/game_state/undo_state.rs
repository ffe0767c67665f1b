use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::moves::draughts_move::Move;

/// Single history record for `GameSession::play` / `GameSession::undo`.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub side: Color,
    pub board_before: Board,
}
