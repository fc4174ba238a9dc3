//! Deck-of-cards REST adapter.

use alloc::format;
use alloc::string::String;

use serde::de::DeserializeOwned;

use super::{
    ApiCallResult, CardSource, DrawResponse, NewDeckResponse, ShuffleResponse, TransportStatus,
};

/// Default path prefix of the deck API.
pub const DEFAULT_API_BASE: &str = "/api/deck";

/// Status and body of a `GET` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Transport status.
    pub status: TransportStatus,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: TransportStatus, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues `GET` requests against the deck service host.
///
/// The harness owns the HTTP client, its base URL, timeouts, and retries.
/// Failures without a response should be mapped to a non-2xx status.
#[expect(
    async_fn_in_trait,
    reason = "rounds are driven sequentially from a single task"
)]
pub trait Transport {
    /// Fetches `path` (relative to the service host).
    async fn get(&self, path: &str) -> RawResponse;
}

/// [`CardSource`] backed by the deck-of-cards REST API.
#[derive(Debug, Clone)]
pub struct DeckService<T> {
    transport: T,
    api_base: String,
    shuffle_remaining_only: bool,
}

impl<T: Transport> DeckService<T> {
    /// Creates a service using [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            api_base: String::from(DEFAULT_API_BASE),
            shuffle_remaining_only: false,
        }
    }

    /// Sets the path prefix of the deck API.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets whether shuffling keeps drawn cards out of the deck.
    #[must_use]
    pub const fn with_shuffle_remaining_only(mut self, remaining_only: bool) -> Self {
        self.shuffle_remaining_only = remaining_only;
        self
    }

    /// Returns the underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn new_deck_path(&self) -> String {
        format!("{}/new/", self.api_base)
    }

    fn shuffle_path(&self, deck_id: &str) -> String {
        let query = if self.shuffle_remaining_only {
            "?remaining=true"
        } else {
            ""
        };
        format!("{}/{deck_id}/shuffle/{query}", self.api_base)
    }

    fn draw_path(&self, deck_id: &str, count: usize) -> String {
        format!("{}/{deck_id}/draw/?count={count}", self.api_base)
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> ApiCallResult<R> {
        let response = self.transport.get(path).await;
        log::debug!("GET {path} -> {}", response.status);
        parse(path, response)
    }
}

fn parse<R: DeserializeOwned>(path: &str, response: RawResponse) -> ApiCallResult<R> {
    let status = response.status;
    match serde_json::from_str(&response.body) {
        Ok(data) => ApiCallResult::Parsed { status, data },
        Err(err) => {
            log::warn!("unreadable body from {path} (status {status}): {err}");
            ApiCallResult::Unparsed { status }
        }
    }
}

impl<T: Transport> CardSource for DeckService<T> {
    async fn new_deck(&self) -> ApiCallResult<NewDeckResponse> {
        self.fetch(&self.new_deck_path()).await
    }

    async fn shuffle(&self, deck_id: &str) -> ApiCallResult<ShuffleResponse> {
        self.fetch(&self.shuffle_path(deck_id)).await
    }

    async fn draw(&self, deck_id: &str, count: usize) -> ApiCallResult<DrawResponse> {
        self.fetch(&self.draw_path(deck_id, count)).await
    }
}
