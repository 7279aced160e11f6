//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error("bad number of players: {0}")]
    BadPlayerCount(u8),
    /// [`init`](crate::init()) has not been called.
    #[error("engine is not initialized")]
    Uninitialized,
}

impl ConfigError {
    /// Returns the boundary error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::BadPlayerCount(_) => ErrorCode::BadPlayerCount,
            Self::Uninitialized => ErrorCode::Uninitialized,
        }
    }
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game is not waiting to be started.
    #[error("invalid game state for starting")]
    InvalidState,
    /// The supplied deck is not a permutation of the canonical deck.
    #[error("deck does not match the canonical deck")]
    BadDeck,
}

impl StartError {
    /// Returns the boundary error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidState => ErrorCode::NotInGame,
            Self::BadDeck => ErrorCode::Unspecified,
        }
    }
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not in progress.
    #[error("invalid game state for playing")]
    InvalidState,
    /// No player sits at the given seat.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    InvalidTurn,
    /// The card is not in the player's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The card may not be played now; the led suit must be followed.
    #[error("forbidden move")]
    ForbiddenMove,
    /// The game is in progress but nobody is active.
    #[error("nobody is active")]
    NobodyActive,
}

impl PlayError {
    /// Returns the boundary error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidState => ErrorCode::NotInGame,
            Self::PlayerNotFound | Self::InvalidTurn => ErrorCode::InvalidTurn,
            Self::CardNotInHand => ErrorCode::CardNotFound,
            Self::ForbiddenMove => ErrorCode::ForbiddenMove,
            Self::NobodyActive => ErrorCode::NobodyActive,
        }
    }
}

/// Numeric error codes exchanged with a call-boundary layer.
///
/// Raw values are stable. Codes this version does not know map to
/// [`ErrorCode::Unrecognized`], never to [`ErrorCode::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 0: no error.
    Success,
    /// 1: a required pointer was null on the other side of the boundary.
    NullPointer,
    /// 2: bad number of players.
    BadPlayerCount,
    /// 3: engine not initialized.
    Uninitialized,
    /// 4: operation invalid for the current game status.
    NotInGame,
    /// 5: game in progress but nobody active.
    NobodyActive,
    /// 6: card not found in hand.
    CardNotFound,
    /// 7: forbidden move.
    ForbiddenMove,
    /// 8: not implemented.
    Unimplemented,
    /// 9: unspecified failure.
    Unspecified,
    /// 10: wrong player for this turn.
    InvalidTurn,
    /// Any other raw value.
    Unrecognized(i32),
}

impl ErrorCode {
    /// Maps a raw code to its kind.
    ///
    /// ```
    /// use kusokurae::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::from_raw(2), ErrorCode::BadPlayerCount);
    /// assert_eq!(ErrorCode::from_raw(77), ErrorCode::Unrecognized(77));
    /// ```
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::NullPointer,
            2 => Self::BadPlayerCount,
            3 => Self::Uninitialized,
            4 => Self::NotInGame,
            5 => Self::NobodyActive,
            6 => Self::CardNotFound,
            7 => Self::ForbiddenMove,
            8 => Self::Unimplemented,
            9 => Self::Unspecified,
            10 => Self::InvalidTurn,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NullPointer => 1,
            Self::BadPlayerCount => 2,
            Self::Uninitialized => 3,
            Self::NotInGame => 4,
            Self::NobodyActive => 5,
            Self::CardNotFound => 6,
            Self::ForbiddenMove => 7,
            Self::Unimplemented => 8,
            Self::Unspecified => 9,
            Self::InvalidTurn => 10,
            Self::Unrecognized(code) => code,
        }
    }

    /// Returns whether this is [`ErrorCode::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}
