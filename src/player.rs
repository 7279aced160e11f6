//! Player representation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::config::MAX_HAND_CARDS;

/// Where a player stands in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnState {
    /// Waiting for their turn.
    #[default]
    Waiting,
    /// Expected to play the next card.
    Active,
    /// Already played this round, or the game is over.
    Done,
}

/// A seated player: hand, captured cards and score.
///
/// Unused roster slots hold `Player::default()`, whose index is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// 1-based player number (0 for an unused slot).
    index: u8,
    /// Turn state within the current round.
    turn_state: TurnState,
    /// Cards in hand, in display order.
    hand: Vec<Card>,
    /// Cards captured from rounds this player matched.
    taken: Vec<Card>,
    /// Score accumulated from captured cards.
    score: i32,
    /// Plays made off the led suit for lack of a card in it.
    busted: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self {
            index,
            turn_state: TurnState::Waiting,
            hand: Vec::new(),
            taken: Vec::new(),
            score: 0,
            busted: 0,
        }
    }

    /// Returns the 1-based player number.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the turn state.
    #[must_use]
    pub const fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub(crate) const fn set_turn_state(&mut self, state: TurnState) {
        self.turn_state = state;
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns the captured cards.
    #[must_use]
    pub fn taken(&self) -> &[Card] {
        &self.taken
    }

    /// Returns the number of captured cards.
    #[must_use]
    pub fn cards_taken(&self) -> usize {
        self.taken.len()
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Returns how many times the player was forced off the led suit because
    /// they held none of it.
    #[must_use]
    pub const fn busted(&self) -> u32 {
        self.busted
    }

    pub(crate) const fn bust(&mut self) {
        self.busted += 1;
    }

    /// Adds a dealt card. Returns `false` without adding it if the hand is full.
    pub(crate) fn receive(&mut self, card: Card) -> bool {
        if self.hand.len() >= MAX_HAND_CARDS {
            return false;
        }
        self.hand.push(card);
        true
    }

    /// Orders the hand by descending display order.
    pub(crate) fn sort_hand(&mut self) {
        self.hand
            .sort_unstable_by(|a, b| b.display_order.cmp(&a.display_order));
    }

    /// Returns the position of the card with the given display order.
    pub(crate) fn position_of(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|held| held.same_card(card))
    }

    /// Removes the card at `position`, keeping the rest in order.
    pub(crate) fn remove_card(&mut self, position: usize) -> Card {
        self.hand.remove(position)
    }

    pub(crate) fn hand_mut(&mut self) -> &mut [Card] {
        &mut self.hand
    }

    /// Moves captured cards to the taken pile and adds the award.
    pub(crate) fn capture(&mut self, cards: impl IntoIterator<Item = Card>, award: i32) {
        self.taken.extend(cards);
        self.score += award;
    }

    /// Moves every card left in hand to the taken pile, scoring their plain
    /// suit values. Returns how many cards were moved.
    pub(crate) fn forfeit_hand(&mut self) -> usize {
        let leftover: i32 = self.hand.iter().map(|card| card.suit.value()).sum();
        let count = self.hand.len();
        let mut cards = core::mem::take(&mut self.hand);
        for card in &mut cards {
            card.set_playable(false);
        }
        self.capture(cards, leftover);
        count
    }
}
