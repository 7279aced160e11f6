//! Game configuration.

use crate::error::ConfigError;

/// Fewest players a game can be created with.
pub const MIN_PLAYERS: u8 = 3;

/// Most players a game can be created with. The roster always has this many
/// slots; the ones past the configured player count stay empty.
pub const MAX_PLAYERS: usize = 4;

/// Hand capacity per player (room for playing with two decks).
pub const MAX_HAND_CARDS: usize = 22;

/// Configuration for a kusokurae game.
///
/// ```
/// use kusokurae::GameConfig;
///
/// let config = GameConfig::default().with_num_players(4);
/// assert_eq!(config.num_players, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Number of players (3 or 4).
    pub num_players: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Creates a configuration for the given number of players.
    ///
    /// The value is not checked until [`validate`](Self::validate) or game
    /// creation.
    #[must_use]
    pub const fn new(num_players: u8) -> Self {
        Self { num_players }
    }

    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use kusokurae::GameConfig;
    ///
    /// let config = GameConfig::default().with_num_players(3);
    /// assert_eq!(config.num_players, 3);
    /// ```
    #[must_use]
    pub const fn with_num_players(mut self, num_players: u8) -> Self {
        self.num_players = num_players;
        self
    }

    /// Returns the number of seated players as an index bound.
    #[must_use]
    pub const fn seats(&self) -> usize {
        self.num_players as usize
    }

    /// Checks the player count against [`MIN_PLAYERS`] and [`MAX_PLAYERS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadPlayerCount`] if the count is out of range.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < MIN_PLAYERS || self.num_players as usize > MAX_PLAYERS {
            return Err(ConfigError::BadPlayerCount(self.num_players));
        }
        Ok(())
    }
}
