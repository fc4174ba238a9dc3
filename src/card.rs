//! Card types as delivered by the deck service.

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-service order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the single-letter suffix used in card codes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// Card rank.
///
/// Serialized the way the deck service spells the `value` field:
/// `"ACE"`, `"2"` through `"10"`, `"JACK"`, `"QUEEN"`, `"KING"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    #[serde(rename = "ACE")]
    Ace,
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "JACK")]
    Jack,
    /// Queen.
    #[serde(rename = "QUEEN")]
    Queen,
    /// King.
    #[serde(rename = "KING")]
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the values this rank may contribute to a hand total.
    ///
    /// Every rank has a single value except the Ace, which may count as 1 or 11.
    #[must_use]
    pub const fn values(self) -> &'static [u32] {
        match self {
            Self::Ace => &[1, 11],
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
        }
    }

    /// Returns the rank prefix used in card codes (`0` stands for ten).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// Image references attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CardImages {
    /// SVG image URL.
    pub svg: String,
    /// PNG image URL.
    pub png: String,
}

/// A playing card drawn from a deck.
///
/// Cards are produced by a [`CardSource`](crate::source::CardSource) and are
/// never modified once dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Short identifier such as `"AS"` or `"0D"`.
    pub code: String,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Alternative image formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CardImages>,
    /// The rank of the card.
    #[serde(rename = "value")]
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a card without image references.
    #[must_use]
    pub fn new(code: impl Into<String>, rank: Rank, suit: Suit) -> Self {
        Self {
            code: code.into(),
            image: String::new(),
            images: None,
            rank,
            suit,
        }
    }

    /// Creates a card whose code is derived from its rank and suit.
    #[must_use]
    pub fn from_parts(rank: Rank, suit: Suit) -> Self {
        let mut code = String::with_capacity(2);
        code.push(rank.code());
        code.push(suit.code());
        Self::new(code, rank, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deck_service_card() {
        let json = r#"{
            "code": "0D",
            "image": "https://deckofcardsapi.com/static/img/0D.png",
            "images": {
                "svg": "https://deckofcardsapi.com/static/img/0D.svg",
                "png": "https://deckofcardsapi.com/static/img/0D.png"
            },
            "value": "10",
            "suit": "DIAMONDS"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.code, "0D");
        assert_eq!(card.rank, Rank::Ten);
        assert_eq!(card.suit, Suit::Diamonds);
        assert!(card.images.is_some());
    }

    #[test]
    fn rejects_unknown_rank() {
        let json = r#"{"code": "XS", "value": "JOKER", "suit": "SPADES"}"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }

    #[test]
    fn codes_follow_deck_service_convention() {
        assert_eq!(Card::from_parts(Rank::Ten, Suit::Hearts).code, "0H");
        assert_eq!(Card::from_parts(Rank::Ace, Suit::Spades).code, "AS");
        assert_eq!(Card::from_parts(Rank::Queen, Suit::Clubs).to_string(), "QC");
    }
}
