//! Process-wide one-time setup.
//!
//! [`init`] builds the canonical deck once. Games copy their deck from it, and
//! [`Game::new`](crate::Game::new) refuses to create a game before it has run.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, build_deck};
use crate::sync::{HashSet, Once};

static CANONICAL_DECK: Once<Vec<Card>> = Once::new();

/// Performs the one-time setup. Calling it again is a no-op.
///
/// ```
/// kusokurae::init();
/// kusokurae::init();
/// assert!(kusokurae::is_initialized());
/// ```
pub fn init() {
    CANONICAL_DECK.call_once(|| {
        let deck = build_deck();
        debug_assert_eq!(deck.len(), DECK_SIZE);
        debug_assert_eq!(
            deck.iter()
                .map(|card| card.display_order)
                .collect::<HashSet<_>>()
                .len(),
            DECK_SIZE
        );
        log::info!("kusokurae initialized with a {DECK_SIZE}-card deck");
        deck
    });
}

/// Returns whether [`init`] has run.
pub fn is_initialized() -> bool {
    CANONICAL_DECK.get().is_some()
}

/// Returns the unshuffled deck, or `None` before [`init`] has run.
pub fn canonical_deck() -> Option<&'static [Card]> {
    CANONICAL_DECK.get().map(Vec::as_slice)
}
