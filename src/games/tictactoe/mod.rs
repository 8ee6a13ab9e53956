//! Tic-tac-toe with an unbeatable minimax opponent.

mod action;
mod contracts;
mod engine;
mod error;
mod phases;
mod search;
mod sides;
mod types;

pub mod invariants;
pub mod rules;

pub use action::Move;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MoveContract, SidesTurn};
pub use engine::GameEngine;
pub use error::EngineError;
pub use phases::{GameStatus, Outcome, Phase, Turn};
pub use search::{MoveScore, Searcher, WIN_SCORE};
pub use sides::Sides;
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, Side};
