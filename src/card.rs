//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;

/// Number of cards in a kusokurae deck.
pub const DECK_SIZE: usize = 33;

/// Mask over the flag bits holding the round in which a card was played.
pub const FLAG_ROUND_MASK: u32 = 0x7f;

/// Flag bit set on cards that may legally be played right now.
pub const FLAG_PLAYABLE: u32 = 1 << 7;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// The ghost suit. Worth -1 per card and never captures a round.
    Ghost,
    /// The stick suit. Worth nothing.
    Stick,
    /// The bun suit. Worth +1 per card.
    Bun,
    /// Doublers. Always playable, and double the stake of any round they touch.
    Other,
}

impl Suit {
    /// Returns the score a single card of this suit is worth when taken.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Ghost => -1,
            Self::Stick | Self::Other => 0,
            Self::Bun => 1,
        }
    }

    /// Returns whether cards of this suit can capture a round.
    #[must_use]
    pub const fn can_capture(self) -> bool {
        !matches!(self, Self::Ghost)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other => f.write_str("x2"),
            suit => write!(f, "{}", suit.value()),
        }
    }
}

/// A kusokurae card.
///
/// Cards are plain values; a card is identified by its [`display_order`],
/// which is unique within one deck.
///
/// [`display_order`]: Card::display_order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Position in the unshuffled deck, counting down from [`DECK_SIZE`].
    /// Zero marks an unfilled slot.
    pub display_order: u32,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0..=9, or 0..=10 for buns, 10 for doublers).
    pub rank: u8,
    /// Bits 0..=6 hold the round (from 1) in which the card was played,
    /// bit 7 marks the card as playable.
    pub flags: u32,
}

impl Card {
    /// Creates a new card with no flags set.
    ///
    /// Note: This function does not validate the rank or display order.
    #[must_use]
    pub const fn new(display_order: u32, suit: Suit, rank: u8) -> Self {
        Self {
            display_order,
            suit,
            rank,
            flags: 0,
        }
    }

    /// Returns the card with its flags replaced.
    #[must_use]
    pub const fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the round (counting from 1) in which the card was played,
    /// or 0 if it has not been played.
    #[must_use]
    pub const fn round_played(&self) -> u32 {
        self.flags & FLAG_ROUND_MASK
    }

    /// Returns whether the card may legally be played right now.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.flags & FLAG_PLAYABLE != 0
    }

    pub(crate) const fn mark_played(&mut self, round: u32) {
        self.flags = (self.flags & !(FLAG_ROUND_MASK | FLAG_PLAYABLE)) | (round & FLAG_ROUND_MASK);
    }

    pub(crate) const fn set_playable(&mut self, playable: bool) {
        if playable {
            self.flags |= FLAG_PLAYABLE;
        } else {
            self.flags &= !FLAG_PLAYABLE;
        }
    }

    /// Returns whether both values are the same physical card.
    #[must_use]
    pub const fn same_card(&self, other: &Self) -> bool {
        self.display_order == other.display_order
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.rank, self.suit)?;
        let round = self.round_played();
        if round != 0 {
            write!(f, ",played={round}")?;
        }
        Ok(())
    }
}

/// Builds the unshuffled deck.
///
/// Doublers come first, then buns, sticks and ghosts, each from the highest
/// rank down. Display orders count down from [`DECK_SIZE`] to 1.
pub(crate) fn build_deck() -> Vec<Card> {
    let mut ranks = Vec::with_capacity(DECK_SIZE);
    ranks.extend([(Suit::Other, 10), (Suit::Other, 10)]);
    ranks.extend((0..=10).rev().map(|rank| (Suit::Bun, rank)));
    ranks.extend((0..=9).rev().map(|rank| (Suit::Stick, rank)));
    ranks.extend((0..=9).rev().map(|rank| (Suit::Ghost, rank)));

    ranks
        .into_iter()
        .zip((1..=DECK_SIZE as u32).rev())
        .map(|((suit, rank), order)| Card::new(order, suit, rank))
        .collect()
}
