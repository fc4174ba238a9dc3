//! Full rounds against the in-process deck.

use std::collections::HashSet;

use bjround::{
    Card, CardSource, DECK_SIZE, LocalDeck, PlayerId, Rank, RoundEngine, RoundOptions, Suit,
    TransportStatus, Winner,
};

#[tokio::test]
async fn new_deck_is_fresh_and_unshuffled() {
    let deck = LocalDeck::new(1);
    let created = deck.new_deck().await;

    assert!(created.is_ok());
    let data = created.data().unwrap();
    assert!(data.success);
    assert!(!data.shuffled);
    assert_eq!(data.remaining, DECK_SIZE);
    assert_eq!(data.deck_id.len(), 12);
    assert!(data.deck_id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn shuffle_keeps_deck_id() {
    let deck = LocalDeck::new(2);
    let id = deck.new_deck().await.into_data().unwrap().deck_id;

    let shuffled = deck.shuffle(&id).await;
    assert!(shuffled.is_ok());
    let data = shuffled.data().unwrap();
    assert_eq!(data.deck_id, id);
    assert!(data.shuffled);
    assert_eq!(data.remaining, DECK_SIZE);
}

#[tokio::test]
async fn deck_holds_every_card_once() {
    let deck = LocalDeck::new(3);
    let id = deck.new_deck().await.into_data().unwrap().deck_id;
    deck.shuffle(&id).await;

    let draw = deck.draw(&id, DECK_SIZE).await.into_data().unwrap();
    assert!(draw.success);
    assert_eq!(draw.remaining, 0);

    let codes: HashSet<&str> = draw.cards.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes.len(), DECK_SIZE);
    assert!(codes.contains("0H"));
    assert!(draw.cards.iter().all(|c| c.image.ends_with(".png")));
}

#[tokio::test]
async fn short_draw_returns_what_is_left() {
    let deck = LocalDeck::new(4);
    let id = deck.new_deck().await.into_data().unwrap().deck_id;
    deck.draw(&id, 50).await;

    let draw = deck.draw(&id, 5).await.into_data().unwrap();
    assert!(!draw.success);
    assert_eq!(draw.cards.len(), 2);
    assert_eq!(draw.remaining, 0);
    assert!(draw.error.is_some());
}

#[tokio::test]
async fn full_shuffle_returns_drawn_cards() {
    let deck = LocalDeck::new(5);
    let id = deck.new_deck().await.into_data().unwrap().deck_id;
    deck.draw(&id, 10).await;
    assert_eq!(deck.remaining(&id), Some(42));

    deck.shuffle(&id).await;
    assert_eq!(deck.remaining(&id), Some(DECK_SIZE));

    let partial = LocalDeck::new(5).with_shuffle_remaining_only(true);
    let id = partial.new_deck().await.into_data().unwrap().deck_id;
    partial.draw(&id, 10).await;
    let shuffled = partial.shuffle(&id).await.into_data().unwrap();
    assert_eq!(shuffled.remaining, 42);
}

#[tokio::test]
async fn unknown_deck_is_not_found() {
    let deck = LocalDeck::new(6);

    let shuffle = deck.shuffle("missing").await;
    assert_eq!(shuffle.status(), TransportStatus::NOT_FOUND);
    assert!(shuffle.data().is_none());

    let draw = deck.draw("missing", 1).await;
    assert!(!draw.is_ok());
    assert!(draw.data().is_none());
}

#[tokio::test]
async fn same_seed_same_round() {
    async fn play(seed: u64) -> (Option<String>, Vec<String>, Vec<String>) {
        let mut engine = RoundEngine::new(LocalDeck::new(seed), RoundOptions::default());
        engine.start_round().await;
        engine.deal_initial().await.unwrap();
        let hands = engine.get_hands();
        (
            engine.deck_id().map(str::to_string),
            hands.p1.codes(),
            hands.p2.codes(),
        )
    }

    assert_eq!(play(99).await, play(99).await);
    assert_ne!(play(99).await, play(100).await);
}

#[tokio::test]
async fn deals_two_cards_each() {
    let mut engine = RoundEngine::new(LocalDeck::new(7), RoundOptions::default());

    let start = engine.start_round().await;
    assert!(start.new_deck.is_ok());
    assert!(start.shuffle.is_some_and(|s| s.is_ok()));

    let deal = engine.deal_initial().await.unwrap();
    assert!(deal.draw.is_ok());
    assert_eq!(deal.draw.data().map(|d| d.cards.len()), Some(4));

    let hands = engine.get_hands();
    assert_eq!(hands.p1.len(), 2);
    assert_eq!(hands.p2.len(), 2);

    let summary = engine.summarize_and_log();
    assert_eq!(
        summary.deck_id.as_deref(),
        start.new_deck.data().map(|d| d.deck_id.as_str())
    );
    assert_eq!(summary.players.len(), 2);
    for player in &summary.players {
        assert_eq!(player.codes.len(), 2);
        assert!(!player.is_bust);
    }
    assert!(summary.winner.is_some());
}

#[tokio::test]
async fn players_hit_once_without_naturals() {
    for seed in 0..20 {
        let mut engine = RoundEngine::new(LocalDeck::new(seed), RoundOptions::default());
        engine.start_round().await;
        engine.deal_initial().await.unwrap();

        let naturals = engine.has_natural_blackjack();
        let expected_len = if naturals.p1 || naturals.p2 {
            2
        } else {
            assert!(engine.hit(PlayerId::P1).await.unwrap().is_ok());
            assert!(engine.hit(PlayerId::P2).await.unwrap().is_ok());
            3
        };

        let hands = engine.get_hands();
        assert_eq!(hands.p1.len(), expected_len);
        assert_eq!(hands.p2.len(), expected_len);

        let summary = engine.summarize_and_log();
        assert!(summary.winner.is_some());
    }
}

#[tokio::test]
async fn stacked_deck_decides_winner() {
    let mut engine = RoundEngine::new(
        LocalDeck::new(8),
        RoundOptions::default().with_shuffle_on_start(false),
    );
    let start = engine.start_round().await;
    assert!(start.shuffle.is_none());

    let deck_id = engine.deck_id().unwrap().to_string();
    let stacked = [
        Card::from_parts(Rank::Nine, Suit::Hearts),
        Card::from_parts(Rank::Ten, Suit::Clubs),
        Card::from_parts(Rank::Nine, Suit::Spades),
        Card::from_parts(Rank::Six, Suit::Diamonds),
        Card::from_parts(Rank::Two, Suit::Hearts),
        Card::from_parts(Rank::King, Suit::Spades),
    ];
    assert!(engine.source().stack(&deck_id, &stacked));

    engine.deal_initial().await.unwrap();
    engine.hit(PlayerId::P1).await.unwrap();
    engine.hit(PlayerId::P2).await.unwrap();

    let summary = engine.summarize_and_log();
    let p1 = summary.player(PlayerId::P1).unwrap();
    let p2 = summary.player(PlayerId::P2).unwrap();
    assert_eq!(p1.score, 20);
    assert_eq!(p2.score, 26);
    assert!(p2.is_bust);
    assert_eq!(summary.winner, Some(Winner::Player(PlayerId::P1)));
}
