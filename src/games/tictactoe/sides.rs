//! Side assignment for a game.

use super::error::EngineError;
use super::phases::Turn;
use super::types::Side;
use serde::Serialize;
use tracing::{instrument, warn};

/// The player's and the opponent's marks.
///
/// Always one X and one O; construct through [`Sides::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sides {
    player: Side,
    opponent: Side,
}

impl Sides {
    /// Validates and pairs the two sides.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] unless one side is X
    /// and the other is O.
    #[instrument]
    pub fn new(player: Side, opponent: Side) -> Result<Self, EngineError> {
        if player == Side::None || opponent != player.opponent() {
            warn!(%player, %opponent, "Rejected side configuration");
            return Err(EngineError::InvalidConfiguration { player, opponent });
        }
        Ok(Self { player, opponent })
    }

    /// The player's side.
    pub fn player(&self) -> Side {
        self.player
    }

    /// The opponent's side.
    pub fn opponent(&self) -> Side {
        self.opponent
    }

    /// Maps a role to its configured side.
    pub fn side_of(&self, turn: Turn) -> Side {
        match turn {
            Turn::Player => self.player,
            Turn::Opponent => self.opponent,
        }
    }

    /// Role that moves first. X always opens.
    pub fn first_turn(&self) -> Turn {
        if self.opponent == Side::X {
            Turn::Opponent
        } else {
            Turn::Player
        }
    }

    /// Same pairing with roles exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            player: self.opponent,
            opponent: self.player,
        }
    }
}
