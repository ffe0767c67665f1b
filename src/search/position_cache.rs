//! Per-decision position cache.
//!
//! Maps a position (piece placement plus side to move) to the score the
//! search computed for it. One cache lives for exactly one AI decision and is
//! dropped afterwards; nothing carries over between decisions.

use std::collections::HashMap;

use crate::game_state::bitboards::Bitboards;
use crate::game_state::draughts_types::Color;

/// Canonical encoding of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub white: u64,
    pub black: u64,
    pub kings: u64,
    pub to_move: Color,
}

impl PositionKey {
    #[inline]
    pub fn new(position: &Bitboards, to_move: Color) -> Self {
        Self {
            white: position.white,
            black: position.black,
            kings: position.kings,
            to_move,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Default)]
pub struct PositionCache {
    scores: HashMap<PositionKey, i32>,
    stats: CacheStats,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn probe(&mut self, key: &PositionKey) -> Option<i32> {
        self.stats.probes += 1;
        let hit = self.scores.get(key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// First score stored for a key is kept.
    pub fn store(&mut self, key: PositionKey, score: i32) {
        self.stats.stores += 1;
        self.scores.entry(key).or_insert(score);
    }
}

#[cfg(test)]
mod tests {
    use super::{PositionCache, PositionKey};
    use crate::game_state::bitboards::Bitboards;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::Color;

    #[test]
    fn store_and_probe_round_trip() {
        let mut cache = PositionCache::new();
        let key = PositionKey::new(&Board::new_game().to_bitboards(), Color::White);
        assert_eq!(cache.probe(&key), None);
        cache.store(key, 3);
        assert_eq!(cache.probe(&key), Some(3));

        let stats = cache.stats();
        assert_eq!((stats.probes, stats.hits, stats.stores), (2, 1, 1));
    }

    #[test]
    fn side_to_move_is_part_of_the_key() {
        let mut cache = PositionCache::new();
        let position = Bitboards {
            white: 1,
            black: 2,
            kings: 0,
        };
        cache.store(PositionKey::new(&position, Color::White), 7);
        assert_eq!(cache.probe(&PositionKey::new(&position, Color::Black)), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn crowned_piece_changes_the_key() {
        let man = Bitboards {
            white: 1,
            black: 0,
            kings: 0,
        };
        let king = Bitboards { kings: 1, ..man };
        assert_ne!(
            PositionKey::new(&man, Color::White),
            PositionKey::new(&king, Color::White)
        );
    }
}
