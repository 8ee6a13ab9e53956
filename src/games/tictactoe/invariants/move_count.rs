//! Move count invariant: the counter tracks the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: move count equals the number of occupied cells and never
/// exceeds nine.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let count = engine.move_count();
        count <= 9 && count == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Side};

    #[test]
    fn test_fresh_game_holds() {
        let engine = GameEngine::start_game(Side::O, Side::X).unwrap();
        assert_eq!(engine.move_count(), 1);
        assert!(MoveCountInvariant::holds(&engine));
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        engine.board_mut().set_cell(0, Cell::X).unwrap();
        assert!(!MoveCountInvariant::holds(&engine));
    }
}
