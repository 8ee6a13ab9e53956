//! First-class move type for tic-tac-toe.

use super::types::Side;
use serde::{Deserialize, Serialize};

/// A side placing its mark at a board index.
///
/// Moves are recorded in the engine's history in the order they were
/// played, so a finished game can be inspected or replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.index)
    }
}
