//! Round summaries and final results.

use alloc::vec::Vec;

use crate::card::Card;

/// How a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One card captured the round.
    Matched {
        /// Seat that captured the board.
        winner: usize,
        /// Score awarded to the winner (may be negative).
        award: i32,
        /// Number of cards captured, including any carried over.
        cards: usize,
    },
    /// No single card captured the round; the board carries over doubled.
    Unresolved,
}

/// What happened in a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The round number (counting from 1).
    pub seq: u32,
    /// Seat and card of each play, in order.
    pub moves: Vec<(usize, Card)>,
    /// Board value before doubling, including carried cards.
    pub score_on_board: i32,
    /// Whether the stake was doubled.
    pub is_doubled: bool,
    /// How the round was resolved.
    pub outcome: RoundOutcome,
    /// Ghost holder after resolution.
    pub ghost_holder: Option<usize>,
    /// Whether this round ended the game.
    pub game_over: bool,
}

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was placed and the next seat is active.
    Played {
        /// Seat that plays next.
        next: usize,
    },
    /// The card completed the round, which was then resolved.
    RoundResolved(RoundSummary),
}

/// Final standing of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStanding {
    /// Seat of the player.
    pub seat: usize,
    /// 1-based player number.
    pub index: u8,
    /// Final score.
    pub score: i32,
    /// Number of captured cards.
    pub cards_taken: usize,
    /// Number of plays forced off the led suit.
    pub busted: u32,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Players ordered by score, highest first; ties keep seat order.
    pub standings: Vec<PlayerStanding>,
    /// Who held the ghost at the end.
    pub ghost_holder: Option<usize>,
    /// Number of rounds played.
    pub rounds: u32,
}

impl GameResult {
    /// Returns the seats sharing the top score.
    #[must_use]
    pub fn winners(&self) -> Vec<usize> {
        let Some(best) = self.standings.first().map(|s| s.score) else {
            return Vec::new();
        };
        self.standings
            .iter()
            .take_while(|s| s.score == best)
            .map(|s| s.seat)
            .collect()
    }
}
