//! Contract-based validation for moves.
//!
//! Preconditions guard every move; postconditions verify the transition
//! and run in debug builds only.

use super::action::Move;
use super::engine::GameEngine;
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::types::Cell;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the phase is `GameOver`.
    pub fn check(engine: &GameEngine) -> Result<(), EngineError> {
        if engine.phase().is_over() {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects out-of-range and occupied indices.
    pub fn check(mv: &Move, engine: &GameEngine) -> Result<(), EngineError> {
        match engine.board().cell_at(mv.index)? {
            Cell::Empty => Ok(()),
            _ => Err(EngineError::CellOccupied(mv.index)),
        }
    }
}

/// Precondition: the moving side is on turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Rejects moves by the side not on turn.
    pub fn check(mv: &Move, engine: &GameEngine) -> Result<(), EngineError> {
        if mv.side != engine.current_turn() {
            Err(EngineError::WrongTurn(mv.side))
        } else {
            Ok(())
        }
    }
}

/// Contract for applying a move.
///
/// Preconditions: game not over, index in range, cell empty, side on turn.
///
/// Postconditions: exactly one new mark, no earlier mark changed, and all
/// [`EngineInvariants`] hold.
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    #[instrument(skip(engine))]
    fn pre(engine: &GameEngine, mv: &Move) -> Result<(), EngineError> {
        GameNotOver::check(engine)
            .and_then(|_| CellIsEmpty::check(mv, engine))
            .and_then(|_| SidesTurn::check(mv, engine))
            .inspect_err(|e| warn!(error = %e, "Move rejected"))
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), EngineError> {
        if after.move_count() != before.move_count() + 1 {
            return Err(EngineError::InvariantViolation(format!(
                "move count went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        let earlier = before.board().cells();
        let later = after.board().cells();
        let overwritten =
            (0..earlier.len()).find(|&i| !earlier[i].is_empty() && earlier[i] != later[i]);
        if let Some(index) = overwritten {
            return Err(EngineError::InvariantViolation(format!(
                "cell {} changed after being played",
                index
            )));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Side, Sides};

    #[test]
    fn test_precondition_empty_cell() {
        let engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        assert!(MoveContract::pre(&engine, &Move::new(Side::X, 4)).is_ok());
    }

    #[test]
    fn test_precondition_out_of_range() {
        let engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(Side::X, 9)),
            Err(EngineError::InvalidIndex(9))
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        engine.place_mark(4).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(Side::X, 4)),
            Err(EngineError::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(Side::O, 4)),
            Err(EngineError::WrongTurn(Side::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        // X completes the top row, so no reply follows.
        let sides = Sides::new(Side::X, Side::O).unwrap();
        let mut engine = GameEngine::resume(sides, "XX.OO....".parse().unwrap()).unwrap();
        let before = engine.clone();
        engine.place_mark(2).unwrap();

        assert_eq!(engine.move_count(), before.move_count() + 1);
        assert!(MoveContract::post(&before, &engine).is_ok());
    }

    #[test]
    fn test_postcondition_rejects_two_marks() {
        // A player move plus the opponent's reply is two transitions.
        let mut engine = GameEngine::start_game(Side::X, Side::O).unwrap();
        let before = engine.clone();
        engine.place_mark(4).unwrap();

        let err = MoveContract::post(&before, &engine).unwrap_err();
        assert!(err.to_string().contains("move count went from 0 to 2"));
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = GameEngine::start_game(Side::X, Side::O).unwrap();
        before.board_mut().set_cell(0, Cell::O).unwrap();
        let after = GameEngine::start_game(Side::O, Side::X).unwrap();
        assert_eq!(after.board().cell_at(0), Ok(Cell::X));

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().contains("cell 0 changed"));
    }
}
