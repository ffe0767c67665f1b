//! Minimax engine: alpha-beta search at a fixed level with a randomized
//! choice among equally scored moves.

use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::{MoveGenResult, MoveSet};
use crate::search::minimax::{choose_ai_move_with_rng, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    rng: StdRng,
    name: String,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Reproducible tie-breaks, for tests and match series.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            name: format!("Draughts101 Minimax L{}", config.level),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        moves: &MoveSet,
    ) -> MoveGenResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "minimax_engine legal_moves {} max_capture {}",
            moves.len(),
            moves.max_capture
        ));

        if moves.is_empty() {
            return Ok(out);
        }

        let result = choose_ai_move_with_rng(board, side, moves, self.config, &mut self.rng)?;
        out.info_lines.push(format!(
            "minimax_engine level {} score {} candidates {} nodes {} cache_hits {}",
            self.config.level,
            result.best_score,
            result.candidates,
            result.nodes,
            result.cache.hits
        ));
        out.best_move = Some(result.best_move);
        Ok(out)
    }
}
