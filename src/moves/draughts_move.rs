//! Move representation shared by both generators, the search and the
//! move-application path.

use std::fmt;

use crate::game_state::draughts_types::Square;

/// A quiet step/slide or a capture sequence.
///
/// Quiet moves carry no captures and a single landing. Capture moves carry
/// one landing per captured piece, in the order they were jumped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub captures: Vec<Square>,
    pub landings: Vec<Square>,
}

/// One jump of a capture sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: Square,
    pub captured: Option<Square>,
    pub to: Square,
}

impl Move {
    pub fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            captures: Vec::new(),
            landings: vec![to],
        }
    }

    pub fn capture(from: Square, captures: Vec<Square>, landings: Vec<Square>) -> Self {
        debug_assert_eq!(captures.len(), landings.len());
        Self {
            from,
            captures,
            landings,
        }
    }

    /// Final landing square.
    #[inline]
    pub fn to(&self) -> Square {
        self.landings.last().copied().unwrap_or(self.from)
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// `from, c1, l1, c2, l2, ...` (or `from, to` for a quiet move).
    pub fn path(&self) -> Vec<Square> {
        let mut out = Vec::with_capacity(1 + self.captures.len() + self.landings.len());
        out.push(self.from);
        if self.captures.is_empty() {
            out.extend_from_slice(&self.landings);
        } else {
            for (captured, landing) in self.captures.iter().zip(&self.landings) {
                out.push(*captured);
                out.push(*landing);
            }
        }
        out
    }

    /// Per-jump segments, in play order.
    pub fn hops(&self) -> Vec<Hop> {
        let mut hops = Vec::with_capacity(self.landings.len());
        let mut at = self.from;
        for (i, landing) in self.landings.iter().enumerate() {
            hops.push(Hop {
                from: at,
                captured: self.captures.get(i).copied(),
                to: *landing,
            });
            at = *landing;
        }
        hops
    }

    /// Captured squares as a bit mask.
    #[inline]
    pub fn capture_mask(&self) -> u64 {
        self.captures.iter().fold(0u64, |acc, sq| acc | (1u64 << sq))
    }

    /// Same origin, destination and captured set; the landing path between
    /// them does not distinguish two moves.
    pub fn same_effect(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to() == other.to()
            && self.captures.len() == other.captures.len()
            && self.capture_mask() == other.capture_mask()
    }
}

impl fmt::Display for Move {
    /// Standard draughts notation, 1-based: `32-28` or `27x18x9`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from as u16 + 1)?;
        let separator = if self.is_capture() { 'x' } else { '-' };
        for landing in &self.landings {
            write!(f, "{separator}{}", *landing as u16 + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Hop, Move};

    #[test]
    fn path_interleaves_captures_and_landings() {
        let mv = Move::capture(37, vec![31, 21], vec![26, 17]);
        assert_eq!(mv.path(), vec![37, 31, 26, 21, 17]);
        assert_eq!(mv.to(), 17);
        assert_eq!(mv.capture_count(), 2);
        assert_eq!(Move::quiet(31, 26).path(), vec![31, 26]);
    }

    #[test]
    fn hops_follow_landings() {
        let mv = Move::capture(37, vec![31, 21], vec![26, 17]);
        assert_eq!(
            mv.hops(),
            vec![
                Hop {
                    from: 37,
                    captured: Some(31),
                    to: 26,
                },
                Hop {
                    from: 26,
                    captured: Some(21),
                    to: 17,
                },
            ]
        );
    }

    #[test]
    fn same_effect_ignores_capture_order() {
        let a = Move::capture(10, vec![15, 16], vec![20, 30]);
        let b = Move::capture(10, vec![16, 15], vec![22, 30]);
        let c = Move::capture(10, vec![16, 15], vec![22, 31]);
        assert!(a.same_effect(&b));
        assert!(!a.same_effect(&c));
    }

    #[test]
    fn display_uses_one_based_numbers() {
        assert_eq!(Move::quiet(31, 26).to_string(), "32-27");
        assert_eq!(Move::capture(37, vec![31, 21], vec![26, 17]).to_string(), "38x27x18");
    }
}
