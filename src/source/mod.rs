//! Card sources: the deck service a round draws its cards from.
//!
//! A [`CardSource`] answers the three deck-service calls a round needs. Each
//! call yields an [`ApiCallResult`] carrying the raw transport status and, if
//! the body could be read, the parsed response.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

pub mod local;
pub mod service;

pub use local::LocalDeck;
pub use service::{DeckService, RawResponse, Transport};

/// Raw status of a call to the deck service, independent of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransportStatus(pub u16);

impl TransportStatus {
    /// `200 OK`.
    pub const OK: Self = Self(200);
    /// `404 Not Found`.
    pub const NOT_FOUND: Self = Self(404);

    /// Returns whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self.0, 200..=299)
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one deck-service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCallResult<T> {
    /// The body was read into a response.
    Parsed {
        /// Transport status of the call.
        status: TransportStatus,
        /// The parsed response.
        data: T,
    },
    /// Nothing usable came back: the call failed or its body did not parse.
    Unparsed {
        /// Transport status of the call.
        status: TransportStatus,
    },
}

impl<T> ApiCallResult<T> {
    /// Returns the transport status.
    #[must_use]
    pub const fn status(&self) -> TransportStatus {
        match self {
            Self::Parsed { status, .. } | Self::Unparsed { status } => *status,
        }
    }

    /// Returns whether the transport reported success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    /// Returns the parsed response, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Parsed { data, .. } => Some(data),
            Self::Unparsed { .. } => None,
        }
    }

    /// Consumes the result, returning the parsed response, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Parsed { data, .. } => Some(data),
            Self::Unparsed { .. } => None,
        }
    }
}

/// Response to creating a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeckResponse {
    /// Whether the service accepted the request.
    pub success: bool,
    /// Identifier of the new deck.
    pub deck_id: String,
    /// Whether the deck is shuffled.
    pub shuffled: bool,
    /// Cards left in the deck.
    pub remaining: usize,
}

/// Response to shuffling a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleResponse {
    /// Whether the service accepted the request.
    pub success: bool,
    /// Identifier of the shuffled deck.
    pub deck_id: String,
    /// Whether the deck is shuffled.
    pub shuffled: bool,
    /// Cards left in the deck.
    pub remaining: usize,
}

/// Response to drawing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    /// Whether the full count was drawn.
    pub success: bool,
    /// Identifier of the deck drawn from.
    pub deck_id: String,
    /// Drawn cards, in draw order.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Cards left in the deck.
    pub remaining: usize,
    /// Service message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A deck service that a round draws cards from.
///
/// Calls are independent round trips. Implementations report failures through
/// the returned [`ApiCallResult`] and never retry.
#[expect(
    async_fn_in_trait,
    reason = "rounds are driven sequentially from a single task"
)]
pub trait CardSource {
    /// Creates a new deck.
    async fn new_deck(&self) -> ApiCallResult<NewDeckResponse>;

    /// Shuffles the given deck.
    async fn shuffle(&self, deck_id: &str) -> ApiCallResult<ShuffleResponse>;

    /// Draws `count` cards from the given deck.
    async fn draw(&self, deck_id: &str, count: usize) -> ApiCallResult<DrawResponse>;
}

impl<S: CardSource> CardSource for &S {
    async fn new_deck(&self) -> ApiCallResult<NewDeckResponse> {
        (**self).new_deck().await
    }

    async fn shuffle(&self, deck_id: &str) -> ApiCallResult<ShuffleResponse> {
        (**self).shuffle(deck_id).await
    }

    async fn draw(&self, deck_id: &str, count: usize) -> ApiCallResult<DrawResponse> {
        (**self).draw(deck_id, count).await
    }
}
