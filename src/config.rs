//! Game configuration loaded from TOML.

use crate::games::tictactoe::{EngineError, Side, Sides};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side the player and the opponent take.
///
/// ```toml
/// player_side = "O"
/// opponent_side = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side played by the human.
    #[serde(default = "default_player_side")]
    player_side: Side,

    /// Side played by the minimax opponent.
    #[serde(default = "default_opponent_side")]
    opponent_side: Side,
}

fn default_player_side() -> Side {
    Side::O
}

fn default_opponent_side() -> Side {
    Side::X
}

impl GameConfig {
    /// Creates a configuration. Sides are validated by [`GameConfig::sides`].
    pub fn new(player_side: Side, opponent_side: Side) -> Self {
        Self {
            player_side,
            opponent_side,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player = %config.player_side,
            opponent = %config.opponent_side,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides.
    ///
    /// Naming only one side assigns the other side its complement.
    #[instrument(skip(self))]
    pub fn with_overrides(self, player: Option<Side>, opponent: Option<Side>) -> Self {
        let (player_side, opponent_side) = match (player, opponent) {
            (Some(p), Some(o)) => (p, o),
            (Some(p), None) => (p, p.opponent()),
            (None, Some(o)) => (o.opponent(), o),
            (None, None) => (self.player_side, self.opponent_side),
        };
        Self {
            player_side,
            opponent_side,
        }
    }

    /// Validated side assignment.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] unless one side is X
    /// and the other is O.
    pub fn sides(&self) -> Result<Sides, EngineError> {
        Sides::new(self.player_side, self.opponent_side)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_player_side(), default_opponent_side())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
