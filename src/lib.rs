//! Unbeatable tic-tac-toe
//!
//! A tic-tac-toe engine whose opponent plays perfect minimax: it never
//! loses, whether it opens or answers.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, cell queries and win/draw rules
//! - **Searcher**: exhaustive minimax with depth-weighted scores
//! - **GameEngine**: turn state machine; answers every player move with
//!   the opponent's reply before returning
//! - **GameConfig**: side assignment loaded from TOML
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameEngine, GameStatus, Side};
//!
//! # fn example() -> Result<(), unbeatable_tictactoe::EngineError> {
//! let mut engine = GameEngine::start_game(Side::X, Side::O)?;
//! let status = engine.place_mark(4)?;
//! assert_eq!(status, GameStatus::Continue);
//! assert_eq!(engine.move_count(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, CELL_COUNT, Cell, CellIsEmpty, Contract, EngineError, GameEngine,
    GameNotOver, GameStatus, Move, MoveContract, MoveScore, Outcome, Phase, Searcher, Side,
    Sides, SidesTurn, Turn, WIN_SCORE,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};
