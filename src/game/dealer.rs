use alloc::vec::Vec;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};
use crate::error::StartError;
use crate::player::TurnState;
use crate::sync::HashSet;

use super::{Game, GameStatus};

impl Game {
    /// Shuffles the deck, deals every card and begins waiting for the first
    /// seat to play.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidState`] if the game is not in
    /// [`GameStatus::Init`]. The game is left untouched.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.status != GameStatus::Init {
            return Err(StartError::InvalidState);
        }
        let canonical = crate::init::canonical_deck().ok_or(StartError::InvalidState)?;

        let mut deck = canonical.to_vec();
        deck.shuffle(&mut *self.rng);
        self.deal(&deck);
        Ok(())
    }

    /// Deals `deck` in the given order instead of shuffling.
    ///
    /// Cards go round-robin starting from seat 0, so `deck[i]` lands in seat
    /// `i % num_players`. Useful for replays and fixed fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidState`] if the game is not in
    /// [`GameStatus::Init`], or [`StartError::BadDeck`] if `deck` does not
    /// hold every canonical card exactly once.
    pub fn start_with_deck(&mut self, deck: &[Card]) -> Result<(), StartError> {
        if self.status != GameStatus::Init {
            return Err(StartError::InvalidState);
        }
        let canonical = crate::init::canonical_deck().ok_or(StartError::InvalidState)?;
        if !is_permutation(deck, canonical) {
            return Err(StartError::BadDeck);
        }

        // Only the order comes from the caller; suits, ranks and flags come
        // from the canonical deck.
        let deck: Vec<Card> = deck
            .iter()
            .filter_map(|card| canonical.iter().find(|c| c.same_card(card)).copied())
            .collect();
        self.deal(&deck);
        Ok(())
    }

    fn deal(&mut self, deck: &[Card]) {
        let seats = self.config.seats();
        let mut set_aside = 0;
        for (i, &card) in deck.iter().enumerate() {
            if !self.players[i % seats].receive(card) {
                set_aside += 1;
            }
        }
        debug_assert_eq!(set_aside, 0, "hand capacity exceeds the deck");

        for player in &mut self.players[..seats] {
            player.sort_hand();
        }
        debug_assert!(self.duplicate_display_orders().is_empty());

        self.leader = 0;
        for (seat, player) in self.players[..seats].iter_mut().enumerate() {
            player.set_turn_state(if seat == 0 {
                TurnState::Active
            } else {
                TurnState::Waiting
            });
        }
        self.refresh_playable();

        log::debug!(
            "dealt {} cards to {} players: {:?}",
            deck.len(),
            seats,
            self.players()
                .iter()
                .map(|player| player.hand_len())
                .collect::<Vec<_>>()
        );
        self.transition(GameStatus::Play);
    }
}

fn is_permutation(deck: &[Card], canonical: &[Card]) -> bool {
    if deck.len() != DECK_SIZE || canonical.len() != DECK_SIZE {
        return false;
    }
    let expected: HashSet<u32> = canonical.iter().map(|card| card.display_order).collect();
    let mut seen = HashSet::new();
    deck.iter()
        .all(|card| expected.contains(&card.display_order) && seen.insert(card.display_order))
}
