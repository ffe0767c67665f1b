//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `GameSession`,
//! with an optional seeded random opening prefix so repeated games between
//! deterministic engines still diverge.

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::game_state::game_session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut session = GameSession::new_game();
    let opening_moves = apply_seeded_random_opening(&mut session, seed, config)?;
    play_from_session(session, engine_white, engine_black, opening_moves, config)
}

/// Play a match from a caller-provided position, without a random opening.
pub fn play_engine_match_from_position(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    board: Board,
    side_to_move: Color,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let session = GameSession::from_position(board, side_to_move);
    play_from_session(session, engine_white, engine_black, Vec::new(), config)
}

fn play_from_session(
    mut session: GameSession,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    opening_moves: Vec<String>,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        if let Some(winner) = session.winner() {
            outcome = match winner {
                Color::White => MatchOutcome::WhiteWin,
                Color::Black => MatchOutcome::BlackWin,
            };
            break;
        }

        let mover = session.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine
            .choose_move(session.board(), mover, session.legal_moves())
            .map_err(|e| format!("{} failed: {e}", engine.name()))?;
        let elapsed_ns = started.elapsed().as_nanos();

        for line in &out.info_lines {
            debug!("{line}");
        }

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = match out.best_move {
            Some(mv) => mv,
            None => session
                .legal_moves()
                .iter()
                .next()
                .cloned()
                .ok_or_else(|| "engine gave no move and none are legal".to_owned())?,
        };
        session
            .play(&chosen)
            .map_err(|e| format!("{} returned an illegal move: {e}", engine.name()))?;
        played_moves.push(chosen.to_string());
    }

    // The last ply may have ended the game exactly at the limit.
    if outcome == MatchOutcome::DrawMaxPlies {
        outcome = match session.winner() {
            Some(Color::White) => MatchOutcome::WhiteWin,
            Some(Color::Black) => MatchOutcome::BlackWin,
            None => MatchOutcome::DrawMaxPlies,
        };
    }

    Ok(MatchResult {
        outcome,
        final_board: *session.board(),
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player 1 takes White in even-numbered games and Black in odd-numbered ones.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_white = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let (white, black) = if player1_is_white {
            (&mut player1, &mut player2)
        } else {
            (&mut player2, &mut player1)
        };
        info!(
            "game {}/{} seed={} white={} black={}",
            i + 1,
            config.games,
            seed,
            white.name(),
            black.name()
        );

        let result = play_engine_match(white.as_mut(), black.as_mut(), seed, &config.per_game)?;

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "game {}/{} result={:?} plies={} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            result.opening_moves.len() + result.played_moves.len(),
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    session: &mut GameSession,
    seed: u64,
    config: &MatchConfig,
) -> Result<Vec<String>, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = config.opening_min_plies.min(config.opening_max_plies);
    let high = config.opening_max_plies.max(config.opening_min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut opening_moves = Vec::new();
    for _ in 0..target_plies {
        let legal = session.legal_moves();
        if legal.is_empty() {
            break;
        }
        let idx = rng.random_range(0..legal.len());
        let Some(chosen) = legal.iter().nth(idx).cloned() else {
            break;
        };
        session.play(&chosen).map_err(|e| e.to_string())?;
        opening_moves.push(chosen.to_string());
    }

    Ok(opening_moves)
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_position, play_engine_match_series,
        MatchConfig, MatchOutcome, MatchSeriesConfig, PlayerId, SeriesOutcome,
    };
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{Color, Piece};
    use crate::search::minimax::SearchConfig;

    #[test]
    fn engine_match_harness_runs_random_vs_minimax() {
        let mut white = RandomEngine::with_seed(5);
        let mut black = MinimaxEngine::with_seed(SearchConfig::new(1), 5);
        let result = play_engine_match(
            &mut white,
            &mut black,
            42,
            &MatchConfig {
                max_plies: 30,
                opening_min_plies: 2,
                opening_max_plies: 4,
            },
        )
        .expect("match should run");

        assert!(result.opening_moves.len() >= 2);
        assert!(result.white_move_count + result.black_move_count > 0);
        assert_eq!(
            result.played_moves.len() as u32,
            result.white_move_count + result.black_move_count
        );
    }

    #[test]
    fn forced_win_is_reported() {
        let board = Board::from_pieces(&[
            (27, Piece::man(Color::White)),
            (21, Piece::man(Color::Black)),
        ])
        .expect("valid placements");
        let mut white = MinimaxEngine::with_seed(SearchConfig::new(1), 1);
        let mut black = RandomEngine::with_seed(1);
        let result = play_engine_match_from_position(
            &mut white,
            &mut black,
            board,
            Color::White,
            &MatchConfig::default(),
        )
        .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::WhiteWin);
        assert_eq!(result.played_moves, vec!["28x17".to_owned()]);
        assert_eq!(result.final_board.count(Color::Black), 0);
    }

    #[test]
    fn engine_match_series_alternates_colors() {
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::with_seed(SearchConfig::new(1), 9)) as Box<dyn Engine>,
            || Box::new(RandomEngine::with_seed(9)) as Box<dyn Engine>,
            &MatchSeriesConfig {
                games: 2,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 12,
                    opening_min_plies: 0,
                    opening_max_plies: 2,
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 2);
        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(
            stats.player1_wins + stats.player2_wins + stats.draws,
            stats.games
        );
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        for outcome in &stats.outcomes {
            if let SeriesOutcome::PlayerWin { player, .. } = outcome {
                assert!(matches!(player, PlayerId::Player1 | PlayerId::Player2));
            }
        }
    }
}
