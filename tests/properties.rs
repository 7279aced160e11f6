//! Property tests over random deals and random legal play.

use std::sync::{Arc, Mutex};

use kusokurae::{DECK_SIZE, Game, GameConfig, GameStatus, PlayOutcome, TurnState};
use proptest::prelude::*;

fn checked_invariants(game: &Game) {
    assert_eq!(game.cards_accounted(), DECK_SIZE);
    assert!(game.duplicate_display_orders().is_empty());
    if game.status() == GameStatus::Play {
        let active = game
            .players()
            .iter()
            .filter(|p| p.turn_state() == TurnState::Active)
            .count();
        assert_eq!(active, 1);
    }
    if let Some(holder) = game.ghost_holder() {
        assert!(holder < game.players().len());
    }
}

proptest! {
    #[test]
    fn random_games_conserve_cards(
        players in 3u8..=4,
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), DECK_SIZE),
    ) {
        kusokurae::init();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut game = Game::new(GameConfig::new(players), seed)
            .unwrap()
            .with_status_listener(move |status| sink.lock().unwrap().push(status));
        game.start().unwrap();
        checked_invariants(&game);

        let mut plays = 0;
        let mut rounds = 0;
        let mut last_status = game.status();
        while let Some(seat) = game.active_player() {
            let legal = game.playable_cards(seat);
            prop_assert!(!legal.is_empty());
            let card = *picks[plays % picks.len()].get(&legal);
            if let PlayOutcome::RoundResolved(summary) = game.play_card(seat, card).unwrap() {
                rounds += 1;
                prop_assert_eq!(summary.seq, rounds);
                prop_assert_eq!(summary.moves.len(), usize::from(players));
            }
            plays += 1;
            prop_assert!(game.status() >= last_status);
            last_status = game.status();
            checked_invariants(&game);
            prop_assert!(plays <= DECK_SIZE);
        }

        prop_assert_eq!(game.status(), GameStatus::Finish);
        prop_assert_eq!(
            seen.lock().unwrap().clone(),
            vec![GameStatus::Play, GameStatus::Finish]
        );
        let score_total: i32 = game.players().iter().map(|p| p.score()).sum();
        let taken_total: usize = game.players().iter().map(|p| p.cards_taken()).sum();
        prop_assert_eq!(taken_total, DECK_SIZE);
        prop_assert!(score_total.abs() <= 2 * DECK_SIZE as i32);
    }

    #[test]
    fn final_round_matches_hand_sizes(players in 3u8..=4, seed in any::<u64>(), stop in 0usize..DECK_SIZE) {
        kusokurae::init();
        let mut game = Game::new(GameConfig::new(players), seed).unwrap();
        game.start().unwrap();
        for _ in 0..stop {
            let Some(seat) = game.active_player() else { break };
            let card = game.playable_cards(seat)[0];
            game.play_card(seat, card).unwrap();
        }
        let expected = game.players().iter().all(|p| p.hand_len() <= 1);
        prop_assert_eq!(game.is_final_round(), expected);
    }
}
