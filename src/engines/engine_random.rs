//! Random-move engine.
//!
//! Picks uniformly among the legal moves. Used as a sparring partner in the
//! match harness and for smoke-testing the turn loop.

use rand::seq::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::{MoveGenResult, MoveSet};
use crate::moves::draughts_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Draughts101 Random"
    }

    fn choose_move(
        &mut self,
        _board: &Board,
        _side: Color,
        moves: &MoveSet,
    ) -> MoveGenResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!("random_engine legal_moves {}", moves.len()));

        let all: Vec<&Move> = moves.iter().collect();
        out.best_move = all.choose(&mut self.rng).map(|mv| (*mv).clone());
        Ok(out)
    }
}
