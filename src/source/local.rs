//! In-process deck service with reproducible shuffles.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    ApiCallResult, CardSource, DrawResponse, NewDeckResponse, ShuffleResponse, TransportStatus,
};
use crate::card::{Card, CardImages, DECK_SIZE, Rank, Suit};

const DECK_ID_LEN: usize = 12;
const DECK_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const IMAGE_BASE: &str = "https://deckofcardsapi.com/static/img";

#[derive(Debug)]
struct DeckPile {
    /// Cards still in the deck; the top card is last.
    cards: Vec<Card>,
    /// Cards handed out since the last full shuffle.
    drawn: Vec<Card>,
}

/// A [`CardSource`] that keeps its decks in memory.
///
/// Behaves like the remote deck service: new decks come back in order and
/// unshuffled, short draws return what is left with `success = false`, and
/// unknown deck ids answer `404` with no data. The same seed always produces
/// the same deck ids and card order.
#[derive(Debug)]
pub struct LocalDeck {
    decks: Mutex<HashMap<String, DeckPile>>,
    rng: Mutex<ChaCha8Rng>,
    shuffle_remaining_only: bool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn new_card(rank: Rank, suit: Suit) -> Card {
    let mut card = Card::from_parts(rank, suit);
    card.image = format!("{IMAGE_BASE}/{}.png", card.code);
    card.images = Some(CardImages {
        svg: format!("{IMAGE_BASE}/{}.svg", card.code),
        png: card.image.clone(),
    });
    card
}

/// Builds an ordered deck with the first card on top.
fn ordered_deck() -> Vec<Card> {
    let mut cards: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| new_card(rank, suit)))
        .collect();
    cards.reverse();
    cards
}

impl LocalDeck {
    /// Creates a card source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            decks: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            shuffle_remaining_only: false,
        }
    }

    /// Sets whether shuffling keeps drawn cards out of the deck.
    #[must_use]
    pub const fn with_shuffle_remaining_only(mut self, remaining_only: bool) -> Self {
        self.shuffle_remaining_only = remaining_only;
        self
    }

    /// Replaces the cards left in a deck; `cards[0]` is drawn first.
    ///
    /// Returns `false` if the deck does not exist.
    pub fn stack(&self, deck_id: &str, cards: &[Card]) -> bool {
        let mut decks = lock(&self.decks);
        let Some(pile) = decks.get_mut(deck_id) else {
            return false;
        };
        pile.cards = cards.iter().rev().cloned().collect();
        true
    }

    /// Returns the number of cards left in a deck.
    pub fn remaining(&self, deck_id: &str) -> Option<usize> {
        lock(&self.decks).get(deck_id).map(|pile| pile.cards.len())
    }

    fn generate_id(&self) -> String {
        let mut rng = lock(&self.rng);
        (0..DECK_ID_LEN)
            .map(|_| char::from(DECK_ID_CHARSET[rng.random_range(0..DECK_ID_CHARSET.len())]))
            .collect()
    }
}

impl CardSource for LocalDeck {
    async fn new_deck(&self) -> ApiCallResult<NewDeckResponse> {
        let deck_id = self.generate_id();
        lock(&self.decks).insert(
            deck_id.clone(),
            DeckPile {
                cards: ordered_deck(),
                drawn: Vec::new(),
            },
        );
        log::debug!("local deck {deck_id} created");

        ApiCallResult::Parsed {
            status: TransportStatus::OK,
            data: NewDeckResponse {
                success: true,
                deck_id,
                shuffled: false,
                remaining: DECK_SIZE,
            },
        }
    }

    async fn shuffle(&self, deck_id: &str) -> ApiCallResult<ShuffleResponse> {
        let mut decks = lock(&self.decks);
        let Some(pile) = decks.get_mut(deck_id) else {
            return ApiCallResult::Unparsed {
                status: TransportStatus::NOT_FOUND,
            };
        };

        if !self.shuffle_remaining_only {
            pile.cards.append(&mut pile.drawn);
        }
        pile.cards.shuffle(&mut *lock(&self.rng));

        ApiCallResult::Parsed {
            status: TransportStatus::OK,
            data: ShuffleResponse {
                success: true,
                deck_id: String::from(deck_id),
                shuffled: true,
                remaining: pile.cards.len(),
            },
        }
    }

    async fn draw(&self, deck_id: &str, count: usize) -> ApiCallResult<DrawResponse> {
        let mut decks = lock(&self.decks);
        let Some(pile) = decks.get_mut(deck_id) else {
            return ApiCallResult::Unparsed {
                status: TransportStatus::NOT_FOUND,
            };
        };

        let available = count.min(pile.cards.len());
        let split_at = pile.cards.len() - available;
        let mut cards = pile.cards.split_off(split_at);
        cards.reverse();
        pile.drawn.extend(cards.iter().cloned());

        let success = available == count;
        let error = (!success).then(|| {
            format!(
                "Not enough cards remaining to draw {} additional",
                count - available
            )
        });

        ApiCallResult::Parsed {
            status: TransportStatus::OK,
            data: DrawResponse {
                success,
                deck_id: String::from(deck_id),
                cards,
                remaining: pile.cards.len(),
                error,
            },
        }
    }
}
