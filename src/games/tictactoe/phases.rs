//! Turn and phase types for the engine's state machine.

use super::types::Side;
use serde::{Deserialize, Serialize};

/// Whose move is next, relative to the roles rather than the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The human (or external) player.
    Player,
    /// The engine's minimax opponent.
    Opponent,
}

impl Turn {
    /// Returns the other role.
    pub fn flip(self) -> Self {
        match self {
            Turn::Player => Turn::Opponent,
            Turn::Opponent => Turn::Player,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a win line.
    Win(Side),
    /// Board filled with no winner.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "It's a draw"),
        }
    }
}

/// Engine state.
///
/// The game is over exactly when the phase is `GameOver`; the outcome is
/// carried by the variant rather than stored beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's move.
    PlayerTurn,
    /// The opponent is about to move.
    OpponentTurn,
    /// The game has ended.
    GameOver(Outcome),
}

impl Phase {
    /// Phase in which `turn` is to move.
    pub fn for_turn(turn: Turn) -> Self {
        match turn {
            Turn::Player => Phase::PlayerTurn,
            Turn::Opponent => Phase::OpponentTurn,
        }
    }

    /// Returns the role to move, or `None` once the game is over.
    pub fn turn(self) -> Option<Turn> {
        match self {
            Phase::PlayerTurn => Some(Turn::Player),
            Phase::OpponentTurn => Some(Turn::Opponent),
            Phase::GameOver(_) => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// What a move returns to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game goes on.
    Continue,
    /// A side won.
    Win(Side),
    /// Board filled with no winner.
    Draw,
}

impl From<Phase> for GameStatus {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::PlayerTurn | Phase::OpponentTurn => GameStatus::Continue,
            Phase::GameOver(Outcome::Win(side)) => GameStatus::Win(side),
            Phase::GameOver(Outcome::Draw) => GameStatus::Draw,
        }
    }
}
