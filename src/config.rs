use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::ConfigError;
use crate::player::Player;

/// Largest board (in cells) a game may be started with.
pub const MAX_CELLS: usize = 1 << 16;

/// Settings for one game, deserializable from the page's start request.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub player1: Player,
    pub player2: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player1: Player::new("red", "Player 1"),
            player2: Player::new("yellow", "Player 2"),
        }
    }
}

impl GameConfig {
    /// Default-sized board for the given players.
    pub fn new(player1: Player, player2: Player) -> Self {
        GameConfig {
            player1,
            player2,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self
            .width
            .checked_mul(self.height)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max_cells: MAX_CELLS,
            });
        }
        if self.player1.marker == self.player2.marker {
            return Err(ConfigError::DuplicateMarker(self.player1.marker.clone()));
        }
        Ok(())
    }
}
