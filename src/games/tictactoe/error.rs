//! Errors raised by the game engine.

use super::types::Side;

/// Error that can occur when configuring a game or applying a move.
///
/// Every variant is a caller or configuration bug: the engine rejects the
/// request and leaves its state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Board index outside 0..9.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// A move was submitted for a side that is not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Side),

    /// Sides must be one X and one O.
    #[display(
        "Invalid configuration: player {} and opponent {} must be X and O",
        player,
        opponent
    )]
    InvalidConfiguration {
        /// Requested player side.
        player: Side,
        /// Requested opponent side.
        opponent: Side,
    },

    /// A board handed to the engine cannot arise from legal play, or is
    /// already decided.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(String),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// Internal state disagreed with itself.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
