//! Crate root module declarations for the Draughts101 project.
//!
//! International draughts on the 10x10 board: position model, legal move
//! generation under the maximal capture rule, a capture-counting minimax
//! search with alpha-beta pruning, engines, and small diagnostic utilities.
//! The headless pieces a front end needs are re-exported here.

pub mod game_state {
    pub mod bitboards;
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_session;
    pub mod undo_state;
}

pub mod moves {
    pub mod diagonal_rays;
    pub mod directions;
    pub mod draughts_move;
}

pub mod move_generation {
    pub mod bitboard_move_generator;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod minimax;
    pub mod position_cache;
    pub mod threading;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_board;
}

pub use game_state::bitboards::Bitboards;
pub use game_state::board::Board;
pub use game_state::draughts_types::{Color, Piece, PieceKind, Square};
pub use game_state::game_session::GameSession;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::generate_legal_moves as legal_moves;
pub use move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveSet};
pub use moves::draughts_move::Move;
pub use search::minimax::{choose_ai_move, SearchConfig, SearchResult};
pub use search::threading::{spawn_ai_search, AiSearchHandle};
