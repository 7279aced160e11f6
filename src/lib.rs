//! A rules engine for the kusokurae trick-taking card game with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that validates the configuration, deals
//! the 33-card deck, collects one card per player each round, resolves rounds
//! (matching, doubling and the ghost holder) and detects the end of the game.
//!
//! # Example
//!
//! ```
//! use kusokurae::{Game, GameConfig, GameStatus};
//!
//! kusokurae::init();
//! let mut game = Game::new(GameConfig::new(3), 42).unwrap();
//! game.start().unwrap();
//!
//! let seat = game.active_player().unwrap();
//! let card = game.playable_cards(seat)[0];
//! game.play_card(seat, card).unwrap();
//! assert_eq!(game.status(), GameStatus::Play);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod config;
pub mod error;
pub mod game;
mod init;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, FLAG_PLAYABLE, FLAG_ROUND_MASK, Suit};
pub use config::{GameConfig, MAX_HAND_CARDS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, ErrorCode, PlayError, StartError};
pub use game::{Game, GameStatus, RoundState, StatusListener};
pub use init::{canonical_deck, init, is_initialized};
pub use player::{Player, TurnState};
pub use result::{GameResult, PlayOutcome, PlayerStanding, RoundOutcome, RoundSummary};
