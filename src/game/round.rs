use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::PlayError;
use crate::player::TurnState;
use crate::result::{PlayOutcome, RoundOutcome, RoundSummary};

use super::{Game, GameStatus};

/// Applies the doubling to a board value.
const fn stake(score_on_board: i32, is_doubled: bool) -> i32 {
    if is_doubled {
        score_on_board * 2
    } else {
        score_on_board
    }
}

impl Game {
    /// Plays `card` from the hand of the player at `seat`.
    ///
    /// The card is matched against the hand by display order. When it is the
    /// last card of the round, the round is resolved before returning, and the
    /// game may finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, the seat is empty or
    /// not active, the card is not in the player's hand, or the card does not
    /// follow the led suit while the player could. Nothing changes on error.
    pub fn play_card(&mut self, seat: usize, card: Card) -> Result<PlayOutcome, PlayError> {
        let position = self.check_play(seat, &card).inspect_err(|err| {
            log::warn!("rejected {card} from seat {seat}: {err}");
        })?;
        Ok(self.place(seat, position))
    }

    /// Plays `card` for whichever seat is active.
    ///
    /// # Errors
    ///
    /// Same as [`play_card`](Self::play_card).
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.status != GameStatus::Play {
            return Err(PlayError::InvalidState);
        }
        let seat = self.active_player().ok_or(PlayError::NobodyActive)?;
        self.play_card(seat, card)
    }

    /// Returns the cards the player at `seat` may play now.
    ///
    /// Empty unless it is that player's turn.
    pub fn playable_cards(&self, seat: usize) -> Vec<Card> {
        if self.active_player() != Some(seat) {
            return Vec::new();
        }
        self.players[seat]
            .hand()
            .iter()
            .filter(|card| self.is_legal(seat, card))
            .copied()
            .collect()
    }

    fn check_play(&self, seat: usize, card: &Card) -> Result<usize, PlayError> {
        if self.status != GameStatus::Play {
            return Err(PlayError::InvalidState);
        }
        let player = self.player(seat).ok_or(PlayError::PlayerNotFound)?;
        let active = self.active_player().ok_or(PlayError::NobodyActive)?;
        if seat != active {
            return Err(PlayError::InvalidTurn);
        }
        let position = player.position_of(card).ok_or(PlayError::CardNotInHand)?;
        if !self.is_legal(seat, &player.hand()[position]) {
            return Err(PlayError::ForbiddenMove);
        }
        Ok(position)
    }

    fn led_suit(&self) -> Option<Suit> {
        let &leader = self.moves.first()?;
        self.current_round[leader].map(|card| card.suit)
    }

    /// Follow the led suit when holding it; doublers are always allowed.
    fn is_legal(&self, seat: usize, card: &Card) -> bool {
        let Some(led) = self.led_suit() else {
            return true;
        };
        if led == Suit::Other || card.suit == led || card.suit == Suit::Other {
            return true;
        }
        !self.players[seat].hand().iter().any(|held| held.suit == led)
    }

    /// Recomputes the playable flag on every hand.
    pub(super) fn refresh_playable(&mut self) {
        let active = self
            .players()
            .iter()
            .position(|player| player.turn_state() == TurnState::Active);
        let legal: Vec<bool> = active
            .map(|seat| {
                self.players[seat]
                    .hand()
                    .iter()
                    .map(|card| self.is_legal(seat, card))
                    .collect()
            })
            .unwrap_or_default();

        for (seat, player) in self.players.iter_mut().enumerate() {
            let is_active = active == Some(seat);
            for (i, card) in player.hand_mut().iter_mut().enumerate() {
                card.set_playable(is_active && legal.get(i) == Some(&true));
            }
        }
        log::trace!(
            "seat {active:?} may play {} of its cards",
            legal.iter().filter(|&&ok| ok).count()
        );
    }

    /// Seat whose card captures the round so far: the unique highest rank
    /// among non-ghost cards. `None` on a tie or when only ghosts were played.
    pub(super) fn high_ranker(&self) -> Option<usize> {
        let mut best: Option<(u8, usize)> = None;
        let mut tied = false;
        for (seat, card) in self.round_cards() {
            if !card.suit.can_capture() {
                continue;
            }
            match best {
                Some((rank, _)) if card.rank < rank => {}
                Some((rank, _)) if card.rank == rank => tied = true,
                _ => {
                    best = Some((card.rank, seat));
                    tied = false;
                }
            }
        }
        if tied { None } else { best.map(|(_, seat)| seat) }
    }

    /// Whether `card` leaves the led suit. Only legal when the player is void
    /// in that suit.
    fn is_off_suit(&self, card: &Card) -> bool {
        self.led_suit()
            .is_some_and(|led| led != Suit::Other && card.suit != led && card.suit != Suit::Other)
    }

    fn place(&mut self, seat: usize, position: usize) -> PlayOutcome {
        let round = self.rounds_played + 1;
        let off_suit = self.is_off_suit(&self.players[seat].hand()[position]);
        let player = &mut self.players[seat];
        let mut card = player.remove_card(position);
        card.mark_played(round);
        if off_suit {
            player.bust();
            log::debug!("round {round}: seat {seat} is void in the led suit");
        }
        player.set_turn_state(TurnState::Done);
        self.current_round[seat] = Some(card);
        self.moves.push(seat);
        log::debug!("round {round}: seat {seat} played {card}");

        if self.moves.len() == self.config.seats() {
            return PlayOutcome::RoundResolved(self.resolve_round());
        }

        let next = self.next_seat(seat);
        self.players[next].set_turn_state(TurnState::Active);
        self.refresh_playable();
        PlayOutcome::Played { next }
    }

    fn resolve_round(&mut self) -> RoundSummary {
        let seq = self.rounds_played + 1;
        let winner = self.high_ranker();
        let score_on_board = self.score_on_board();
        let is_doubled = self.is_doubled();
        let moves: Vec<(usize, Card)> = self.round_cards().collect();
        let last_ghost = moves
            .iter()
            .rev()
            .find(|(_, card)| card.suit == Suit::Ghost)
            .map(|&(seat, _)| seat);

        self.current_round.fill(None);
        self.moves.clear();
        self.board.extend(moves.iter().map(|&(_, card)| card));

        let outcome = if let Some(winner) = winner {
            let award = stake(score_on_board, is_doubled);
            let has_ghost = self.board.iter().any(|card| card.suit == Suit::Ghost);
            let captured = core::mem::take(&mut self.board);
            let cards = captured.len();
            self.players[winner].capture(captured, award);
            if has_ghost {
                self.ghost_holder = Some(winner);
            }
            self.carried = false;
            self.leader = winner;
            log::debug!("round {seq}: seat {winner} matched {cards} cards for {award}");
            RoundOutcome::Matched {
                winner,
                award,
                cards,
            }
        } else {
            if last_ghost.is_some() {
                self.ghost_holder = last_ghost;
            }
            self.carried = true;
            self.leader = self.next_seat(self.leader);
            log::debug!(
                "round {seq}: unresolved, {} cards carried, ghost holder {:?}",
                self.board.len(),
                self.ghost_holder
            );
            RoundOutcome::Unresolved
        };
        self.rounds_played = seq;

        let game_over = self.players().iter().any(|player| player.hand_len() == 0);
        if game_over {
            self.finish();
        } else {
            self.open_round();
        }

        RoundSummary {
            seq,
            moves,
            score_on_board,
            is_doubled,
            outcome,
            ghost_holder: self.ghost_holder,
            game_over,
        }
    }

    fn open_round(&mut self) {
        let leader = self.leader;
        for (seat, player) in self.players[..self.config.seats()].iter_mut().enumerate() {
            player.set_turn_state(if seat == leader {
                TurnState::Active
            } else {
                TurnState::Waiting
            });
        }
        self.refresh_playable();
        if self.is_final_round() {
            log::debug!("round {} is the final round", self.rounds_played + 1);
        }
    }

    /// Settles the board and leftover hands, then ends the game.
    fn finish(&mut self) {
        if !self.board.is_empty() {
            let recipient = self.ghost_holder.unwrap_or(self.leader);
            let award = stake(self.score_on_board(), self.is_doubled());
            let captured = core::mem::take(&mut self.board);
            log::debug!(
                "seat {recipient} absorbs {} leftover board cards for {award}",
                captured.len()
            );
            self.players[recipient].capture(captured, award);
            self.carried = false;
        }

        let seats = self.config.seats();
        for (seat, player) in self.players[..seats].iter_mut().enumerate() {
            let holds_ghost = player.hand().iter().any(|card| card.suit == Suit::Ghost);
            if player.forfeit_hand() > 0 {
                log::debug!("seat {seat} keeps its leftover cards");
            }
            if holds_ghost {
                self.ghost_holder = Some(seat);
            }
            player.set_turn_state(TurnState::Done);
        }

        self.transition(GameStatus::Finish);
    }
}
