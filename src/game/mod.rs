//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::config::{GameConfig, MAX_PLAYERS};
use crate::error::ConfigError;
use crate::player::{Player, TurnState};
use crate::result::{GameResult, PlayerStanding};
use crate::sync::HashSet;

mod dealer;
mod notify;
mod round;
pub mod state;

pub use notify::StatusListener;
pub use state::{GameStatus, RoundState};

use notify::Notifier;

/// A kusokurae game: roster, round in progress and status.
///
/// A game is driven by a single caller. Wrap it in a lock if several threads
/// need to reach the same game.
pub struct Game {
    /// Validated configuration.
    config: GameConfig,
    /// Current status.
    status: GameStatus,
    /// One slot per possible seat; slots past the player count stay empty.
    players: Vec<Player>,
    /// Finished round count.
    rounds_played: u32,
    /// Seat that last held ghost cards on the stake.
    ghost_holder: Option<usize>,
    /// Seat that opens the current round.
    leader: usize,
    /// Card played by each seat this round.
    current_round: Vec<Option<Card>>,
    /// Seats in the order they played this round.
    moves: Vec<usize>,
    /// Cards carried over from unresolved rounds.
    board: Vec<Card>,
    /// Whether the board holds the stake of an unresolved round.
    carried: bool,
    /// Random number generator used for shuffling.
    rng: Box<dyn RngCore + Send>,
    /// Status-change callback.
    notifier: Notifier,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Uninitialized`] if [`init`](crate::init()) has not
    /// run, or [`ConfigError::BadPlayerCount`] if the player count is out of
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use kusokurae::{Game, GameConfig, GameStatus};
    ///
    /// kusokurae::init();
    /// let game = Game::new(GameConfig::new(3), 42).unwrap();
    /// assert_eq!(game.status(), GameStatus::Init);
    /// ```
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with the given random source.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_rng<R>(config: GameConfig, rng: R) -> Result<Self, ConfigError>
    where
        R: RngCore + Send + 'static,
    {
        if !crate::init::is_initialized() {
            return Err(ConfigError::Uninitialized);
        }
        config.validate()?;

        let mut players = Vec::with_capacity(MAX_PLAYERS);
        players.extend((1..=config.num_players).map(Player::new));
        players.resize_with(MAX_PLAYERS, Player::default);

        log::info!("created game for {} players", config.num_players);

        Ok(Self {
            config,
            status: GameStatus::Init,
            players,
            rounds_played: 0,
            ghost_holder: None,
            leader: 0,
            current_round: alloc::vec![None; MAX_PLAYERS],
            moves: Vec::with_capacity(MAX_PLAYERS),
            board: Vec::new(),
            carried: false,
            rng: Box::new(rng),
            notifier: Notifier::default(),
        })
    }

    /// Sets the status-change listener, consuming and returning the game.
    #[must_use]
    pub fn with_status_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(GameStatus) + Send + 'static,
    {
        self.set_status_listener(listener);
        self
    }

    /// Sets the status-change listener, replacing any previous one.
    pub fn set_status_listener<F>(&mut self, listener: F)
    where
        F: FnMut(GameStatus) + Send + 'static,
    {
        self.notifier.set(Box::new(listener));
    }

    /// Returns the configuration.
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the current status.
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of finished rounds.
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the seat holding the ghost, if any.
    pub const fn ghost_holder(&self) -> Option<usize> {
        self.ghost_holder
    }

    /// Returns the cards carried over from unresolved rounds.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Returns every roster slot, including unused ones.
    pub fn roster(&self) -> &[Player] {
        &self.players
    }

    /// Returns the seated players.
    pub fn players(&self) -> &[Player] {
        &self.players[..self.config.seats()]
    }

    /// Returns the player at `seat`, if seated.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players().get(seat)
    }

    /// Returns the hand of the player at `seat`.
    ///
    /// The slice borrows the game; hands only change through play.
    pub fn hand(&self, seat: usize) -> Option<&[Card]> {
        self.player(seat).map(Player::hand)
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` unless the game is in progress.
    pub fn active_player(&self) -> Option<usize> {
        if self.status != GameStatus::Play {
            return None;
        }
        self.players()
            .iter()
            .position(|player| player.turn_state() == TurnState::Active)
    }

    /// Checks if the game is in (or after) its last round: nobody holds more
    /// than one card.
    ///
    /// With 4 players seat 0 is dealt one extra card, so during the last
    /// round this only turns true once seat 0 has played in it.
    pub fn is_final_round(&self) -> bool {
        self.players.iter().all(|player| player.hand_len() <= 1)
    }

    /// Returns the total value of the board and this round's cards.
    pub fn score_on_board(&self) -> i32 {
        self.stake_cards().map(|card| card.suit.value()).sum()
    }

    /// Returns whether the current stake is doubled: it carries an unresolved
    /// round, or a doubler is on it.
    pub fn is_doubled(&self) -> bool {
        self.carried || self.stake_cards().any(|card| card.suit == Suit::Other)
    }

    /// Returns a snapshot of the round in progress.
    pub fn round_state(&self) -> RoundState {
        let seq = match self.status {
            GameStatus::Finish => self.rounds_played,
            _ => self.rounds_played + 1,
        };
        RoundState {
            seq,
            is_doubled: self.is_doubled(),
            score_on_board: self.score_on_board(),
            leader: (self.status == GameStatus::Play).then_some(self.leader),
            high_ranker: self.high_ranker(),
            moves: self.round_cards().map(|(_, card)| card).collect(),
        }
    }

    /// Returns the number of cards in hands, taken piles, the board and the
    /// current round. Equals [`DECK_SIZE`](crate::DECK_SIZE) once dealt.
    pub fn cards_accounted(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|player| player.hand_len() + player.cards_taken())
            .sum();
        held + self.board.len() + self.moves.len()
    }

    /// Returns display orders that appear on more than one card in the game.
    pub fn duplicate_display_orders(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        let all = self
            .players
            .iter()
            .flat_map(|player| player.hand().iter().chain(player.taken()))
            .chain(&self.board)
            .chain(self.current_round.iter().flatten());
        for card in all {
            if !seen.insert(card.display_order) {
                duplicates.push(card.display_order);
            }
        }
        duplicates
    }

    /// Returns the final standings once the game has finished.
    pub fn result(&self) -> Option<GameResult> {
        if self.status != GameStatus::Finish {
            return None;
        }
        let mut standings: Vec<PlayerStanding> = self
            .players()
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerStanding {
                seat,
                index: player.index(),
                score: player.score(),
                cards_taken: player.cards_taken(),
                busted: player.busted(),
            })
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score).then(a.seat.cmp(&b.seat)));
        Some(GameResult {
            standings,
            ghost_holder: self.ghost_holder,
            rounds: self.rounds_played,
        })
    }

    /// Cards whose value is at stake: the board, then this round's plays.
    fn stake_cards(&self) -> impl Iterator<Item = &Card> {
        self.board.iter().chain(self.current_round.iter().flatten())
    }

    /// This round's plays, in order.
    fn round_cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.moves
            .iter()
            .filter_map(|&seat| self.current_round[seat].map(|card| (seat, card)))
    }

    const fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.config.seats()
    }

    fn transition(&mut self, status: GameStatus) {
        debug_assert!(status > self.status, "status must only move forward");
        self.status = status;
        self.notifier.fire(status);
    }
}
