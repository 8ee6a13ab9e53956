//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameEngine, Side};
use super::Invariant;

/// Invariant: X opens and the sides alternate.
///
/// Holds regardless of which role owns X, since the opening side is X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|first| first.side != Side::X) {
            return false;
        }
        if history.windows(2).any(|pair| pair[0].side == pair[1].side) {
            return false;
        }

        let board = engine.board();
        let (x, o) = (board.count(Side::X), board.count(Side::O));
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Sides alternate starting with X"
    }
}
