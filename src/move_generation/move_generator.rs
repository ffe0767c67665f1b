use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Square};
use crate::moves::draughts_move::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    SquareOutOfRange(Square),
    NoPieceOnOrigin(Square),
    WrongSide { square: Square, expected: Color },
    IllegalMove(String),
    NoLegalMoves(Color),
    WorkerPanicked,
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::SquareOutOfRange(sq) => {
                write!(f, "square index {sq} is outside 0..50")
            }
            MoveGenerationError::NoPieceOnOrigin(sq) => write!(f, "no piece on square {sq}"),
            MoveGenerationError::WrongSide { square, expected } => {
                write!(f, "square {square} does not hold a {} piece", expected.name())
            }
            MoveGenerationError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            MoveGenerationError::NoLegalMoves(color) => {
                write!(f, "{} has no legal moves", color.name())
            }
            MoveGenerationError::WorkerPanicked => write!(f, "search worker thread panicked"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Legal moves for one turn, grouped by origin square.
///
/// When `max_capture > 0` every move captures exactly that many pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub moves_by_origin: BTreeMap<Square, Vec<Move>>,
    pub max_capture: usize,
}

impl MoveSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves_by_origin.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves_by_origin.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves_by_origin.values().flatten()
    }

    pub fn origins(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves_by_origin.keys().copied()
    }

    pub fn moves_from(&self, origin: Square) -> &[Move] {
        self.moves_by_origin
            .get(&origin)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Legal move matching an input path, if any.
    ///
    /// `landings` is the clicked landing sequence after `from`. A capture may
    /// also be named by its destination alone when that is unambiguous.
    pub fn resolve(&self, from: Square, landings: &[Square]) -> Option<&Move> {
        let candidates = self.moves_from(from);
        if let Some(mv) = candidates.iter().find(|mv| mv.landings == landings) {
            return Some(mv);
        }
        let [destination] = landings else {
            return None;
        };
        let mut by_destination = candidates.iter().filter(|mv| mv.to() == *destination);
        match (by_destination.next(), by_destination.next()) {
            (Some(mv), None) => Some(mv),
            _ => None,
        }
    }

    /// Landing squares that may follow an already clicked `prefix`.
    pub fn continuations(&self, from: Square, prefix: &[Square]) -> Vec<Square> {
        let mut next: Vec<Square> = self
            .moves_from(from)
            .iter()
            .filter(|mv| mv.landings.len() > prefix.len() && mv.landings.starts_with(prefix))
            .map(|mv| mv.landings[prefix.len()])
            .collect();
        next.sort_unstable();
        next.dedup();
        next
    }

    /// Insert `mv` for its origin, skipping duplicates of the same effect.
    pub(crate) fn push_unique(moves: &mut Vec<Move>, mv: Move) {
        if !moves.iter().any(|existing| existing.same_effect(&mv)) {
            moves.push(mv);
        }
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveSet;
}
