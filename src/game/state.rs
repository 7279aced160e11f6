//! Game status and round snapshot types.

use alloc::vec::Vec;

use crate::card::Card;

/// Lifecycle of a game. Status only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum GameStatus {
    /// Zero value; never observed on a created game.
    #[default]
    Null,
    /// Validated, not yet dealt.
    Init,
    /// Game in progress.
    Play,
    /// Game finished; results can be read.
    Finish,
}

/// Snapshot of the round being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// On screen: "Round <seq>".
    pub seq: u32,
    /// Whether the stake on the board is doubled.
    pub is_doubled: bool,
    /// Total card value currently on the board, before doubling.
    pub score_on_board: i32,
    /// Seat that opened the round. `None` outside of play.
    pub leader: Option<usize>,
    /// Seat whose card would capture the round if it ended now.
    pub high_ranker: Option<usize>,
    /// Cards played this round, in the order they were played.
    pub moves: Vec<Card>,
}
