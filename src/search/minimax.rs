//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The maximizing role is the AI side, the minimizing role its opponent. Each
//! node folds child scores into its own half of a copied `(alpha, beta)`
//! window. Scores are capture differentials: every expanded ply adds its
//! capture count, positive for the AI and negative for the opponent.
//!
//! Quiet plies spend one unit of the ply budget, capture plies spend none, so
//! capture sequences are always played out past the horizon.

use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_state::bitboards::Bitboards;
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::bitboard_move_generator::generate_bitboard_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveSet};
use crate::moves::draughts_move::Move;
use crate::search::position_cache::{CacheStats, PositionCache, PositionKey};

/// Score of a lost (no moves) position, from the loser's point of view.
pub const INFINITY: i32 = i32::MAX;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search level; one level is two quiet plies.
    pub level: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl SearchConfig {
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
        }
    }

    /// Quiet-ply budget for one decision.
    #[inline]
    pub fn plies(self) -> u16 {
        2 * self.level.clamp(MIN_LEVEL, MAX_LEVEL) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRole {
    Maximizing,
    Minimizing,
}

impl SearchRole {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            SearchRole::Maximizing => SearchRole::Minimizing,
            SearchRole::Minimizing => SearchRole::Maximizing,
        }
    }

    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            SearchRole::Maximizing => 1,
            SearchRole::Minimizing => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    #[inline]
    pub const fn full() -> Self {
        Self {
            alpha: -INFINITY,
            beta: INFINITY,
        }
    }

    /// The half of the window owned by `role`.
    #[inline]
    pub fn bound(self, role: SearchRole) -> i32 {
        match role {
            SearchRole::Maximizing => self.alpha,
            SearchRole::Minimizing => self.beta,
        }
    }

    #[inline]
    pub fn fold(&mut self, role: SearchRole, score: i32) {
        match role {
            SearchRole::Maximizing => self.alpha = self.alpha.max(score),
            SearchRole::Minimizing => self.beta = self.beta.min(score),
        }
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self.alpha >= self.beta
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    pub best_score: i32,
    /// Root moves that tied for `best_score`.
    pub candidates: usize,
    pub nodes: u64,
    pub cache: CacheStats,
}

pub(crate) struct SearchContext<'a> {
    pub(crate) cache: &'a mut PositionCache,
    pub(crate) nodes: u64,
}

/// Choose the AI move for `side` among `moves` using thread-local randomness
/// for the tie-break.
pub fn choose_ai_move(
    board: &Board,
    side: Color,
    moves: &MoveSet,
    config: SearchConfig,
) -> MoveGenResult<SearchResult> {
    choose_ai_move_with_rng(board, side, moves, config, &mut rand::rng())
}

/// Choose the AI move for `side`, sampling uniformly among the best-scored
/// root moves with `rng`.
pub fn choose_ai_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    moves: &MoveSet,
    config: SearchConfig,
    rng: &mut R,
) -> MoveGenResult<SearchResult> {
    let root: Vec<&Move> = moves.iter().collect();
    match root.as_slice() {
        [] => return Err(MoveGenerationError::NoLegalMoves(side)),
        [only] => {
            debug!("{} has a single legal move {only}", side.name());
            return Ok(SearchResult {
                best_move: (*only).clone(),
                best_score: moves.max_capture as i32,
                candidates: 1,
                nodes: 0,
                cache: CacheStats::default(),
            });
        }
        _ => {}
    }

    let position = board.to_bitboards();
    let mut cache = PositionCache::new();
    let mut ctx = SearchContext {
        cache: &mut cache,
        nodes: 0,
    };

    let budget = config.plies();
    let remaining = if moves.max_capture == 0 {
        budget.saturating_sub(1)
    } else {
        budget
    };
    let start_value = moves.max_capture as i32;

    let mut best_score = i32::MIN;
    let mut best: Vec<&Move> = Vec::new();

    for mv in root {
        let child = position.apply(mv, side);
        let score = evaluate(
            &mut ctx,
            &child,
            side.opposite(),
            SearchRole::Minimizing,
            Window::full(),
            start_value,
            remaining,
        );
        trace!("root move {mv} scored {score}");

        if score > best_score {
            best.clear();
            best_score = score;
        }
        if score == best_score {
            best.push(mv);
        }
    }

    let nodes = ctx.nodes;
    let picked = best
        .choose(rng)
        .ok_or(MoveGenerationError::NoLegalMoves(side))?;

    let stats = cache.stats();
    debug!(
        "{} level {} picked {picked} score {best_score} among {} candidates, nodes {nodes}, cache hits {}/{}",
        side.name(),
        config.level,
        best.len(),
        stats.hits,
        stats.probes
    );

    Ok(SearchResult {
        best_move: (*picked).clone(),
        best_score,
        candidates: best.len(),
        nodes,
        cache: stats,
    })
}

/// Score of `position` with `to_move` to play in `role`.
///
/// `value` is the capture differential accumulated on the way here and
/// `remaining` the quiet plies still allowed.
pub(crate) fn evaluate(
    ctx: &mut SearchContext<'_>,
    position: &Bitboards,
    to_move: Color,
    role: SearchRole,
    mut window: Window,
    value: i32,
    remaining: u16,
) -> i32 {
    ctx.nodes += 1;

    let moves = generate_bitboard_moves(position, to_move);
    if moves.is_empty() {
        return window.bound(role);
    }

    let remaining = match (moves.max_capture, remaining) {
        (0, 0) => return value,
        (0, r) => r - 1,
        (_, r) => r,
    };
    let value = value + role.sign() * moves.max_capture as i32;

    let next_side = to_move.opposite();
    let next_role = role.opposite();

    for mv in moves.iter() {
        let child = position.apply(mv, to_move);
        let key = PositionKey::new(&child, next_side);

        let score = match ctx.cache.probe(&key) {
            Some(score) => score,
            None => {
                let score = evaluate(ctx, &child, next_side, next_role, window, value, remaining);
                ctx.cache.store(key, score);
                score
            }
        };

        window.fold(role, score);
        if window.is_closed() {
            return window.bound(role);
        }
    }

    window.bound(role)
}
