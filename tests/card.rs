//! Card, deck and error code tests.

use kusokurae::{Card, DECK_SIZE, ErrorCode, FLAG_PLAYABLE, PlayError, StartError, Suit};

#[test]
fn card_rendering_is_stable() {
    assert_eq!(Card::new(0, Suit::Ghost, 8).to_string(), "8(-1)");
    assert_eq!(Card::new(3, Suit::Other, 10).to_string(), "10(x2)");
    assert_eq!(
        Card::new(0, Suit::Bun, 1).with_flags(1).to_string(),
        "1(1),played=1"
    );
    assert_eq!(
        Card::new(0, Suit::Stick, 2)
            .with_flags(FLAG_PLAYABLE)
            .to_string(),
        "2(0)"
    );
    let cards = [
        Card::new(0, Suit::Stick, 2).with_flags(128),
        Card::new(0, Suit::Stick, 3).with_flags(128),
    ];
    let rendered: Vec<String> = cards.iter().map(ToString::to_string).collect();
    assert_eq!(rendered.join(" "), "2(0) 3(0)");
}

#[test]
fn card_flags_decode() {
    let card = Card::new(5, Suit::Bun, 4).with_flags(FLAG_PLAYABLE | 7);
    assert_eq!(card.round_played(), 7);
    assert!(card.is_playable());

    let fresh = Card::new(5, Suit::Bun, 4);
    assert_eq!(fresh.round_played(), 0);
    assert!(!fresh.is_playable());
    assert!(fresh.same_card(&card));
    assert_ne!(fresh, card);
}

#[test]
fn suit_values() {
    assert_eq!(Suit::Ghost.value(), -1);
    assert_eq!(Suit::Stick.value(), 0);
    assert_eq!(Suit::Bun.value(), 1);
    assert_eq!(Suit::Other.value(), 0);
    assert!(!Suit::Ghost.can_capture());
    assert!(Suit::Other.can_capture());
}

#[test]
fn canonical_deck_layout() {
    kusokurae::init();
    kusokurae::init();
    assert!(kusokurae::is_initialized());

    let deck = kusokurae::canonical_deck().unwrap();
    assert_eq!(deck.len(), DECK_SIZE);

    let orders: Vec<u32> = deck.iter().map(|c| c.display_order).collect();
    let expected: Vec<u32> = (1..=DECK_SIZE as u32).rev().collect();
    assert_eq!(orders, expected);

    let count = |suit| deck.iter().filter(|c| c.suit == suit).count();
    assert_eq!(count(Suit::Other), 2);
    assert_eq!(count(Suit::Bun), 11);
    assert_eq!(count(Suit::Stick), 10);
    assert_eq!(count(Suit::Ghost), 10);

    assert_eq!(deck[0], Card::new(33, Suit::Other, 10));
    assert_eq!(deck[2], Card::new(31, Suit::Bun, 10));
    assert_eq!(deck[DECK_SIZE - 1], Card::new(1, Suit::Ghost, 0));
    assert!(deck.iter().all(|c| c.flags == 0));
}

#[test]
fn error_codes_map_with_fallback() {
    for raw in 0..=10 {
        let code = ErrorCode::from_raw(raw);
        assert!(!matches!(code, ErrorCode::Unrecognized(_)));
        assert_eq!(code.raw(), raw);
    }
    assert!(ErrorCode::from_raw(0).is_success());
    assert_eq!(ErrorCode::from_raw(-1), ErrorCode::Unrecognized(-1));
    assert_eq!(ErrorCode::from_raw(42), ErrorCode::Unrecognized(42));
    assert_eq!(ErrorCode::Unrecognized(42).raw(), 42);
    assert!(!ErrorCode::from_raw(42).is_success());

    assert_eq!(PlayError::ForbiddenMove.code(), ErrorCode::ForbiddenMove);
    assert_eq!(PlayError::CardNotInHand.code(), ErrorCode::CardNotFound);
    assert_eq!(PlayError::InvalidState.code(), ErrorCode::NotInGame);
    assert_eq!(StartError::InvalidState.code().raw(), 4);
}

#[test]
fn error_messages() {
    assert_eq!(
        kusokurae::ConfigError::BadPlayerCount(2).to_string(),
        "bad number of players: 2"
    );
    assert_eq!(PlayError::InvalidTurn.to_string(), "not this player's turn");
}
