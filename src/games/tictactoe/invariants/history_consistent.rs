//! History consistency invariant: every recorded move is on the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: history has one entry per placed mark, and each entry's
/// cell still carries that side's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        history.len() == engine.move_count()
            && history
                .iter()
                .all(|mv| engine.board().cell_at(mv.index) == Ok(mv.side.mark()))
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Side};

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        for index in [0, 8, 2] {
            if engine.phase().is_over() {
                break;
            }
            if engine.board().cell_at(index) == Ok(Cell::Empty) {
                engine.place_mark(index).unwrap();
            }
            assert!(HistoryConsistentInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        engine.place_mark(0).unwrap();
        engine.board_mut().set_cell(0, Cell::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
