//! Round engine and state management.

use crate::options::RoundOptions;
use crate::source::{ApiCallResult, CardSource, NewDeckResponse, ShuffleResponse};

mod deal;
pub mod state;
mod summary;

pub use deal::{DealOutcome, deal_round_robin};
pub use state::{RoundPhase, RoundState};

/// Outcome of starting a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStart {
    /// Result of creating the deck.
    pub new_deck: ApiCallResult<NewDeckResponse>,
    /// Result of shuffling it; `None` if no deck was acquired or shuffling is
    /// disabled.
    pub shuffle: Option<ApiCallResult<ShuffleResponse>>,
}

/// Drives a two-player round against a [`CardSource`].
///
/// The engine owns the round state. Operations run one at a time and each
/// awaits its deck-service call before touching the state; nothing is retried.
///
/// # Example
///
/// ```no_run
/// use bjround::{LocalDeck, RoundEngine, RoundOptions};
///
/// # async fn play() -> Result<(), bjround::RoundError> {
/// let mut engine = RoundEngine::new(LocalDeck::new(7), RoundOptions::default());
/// engine.start_round().await;
/// engine.deal_initial().await?;
/// let summary = engine.summarize_and_log();
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RoundEngine<S> {
    source: S,
    options: RoundOptions,
    state: RoundState,
    phase: RoundPhase,
}

impl<S: CardSource> RoundEngine<S> {
    /// Creates an engine with no round in progress.
    #[must_use]
    pub fn new(source: S, options: RoundOptions) -> Self {
        Self {
            source,
            options,
            state: RoundState::default(),
            phase: RoundPhase::NotStarted,
        }
    }

    /// Starts a new round: clears both hands, creates a deck, and shuffles it.
    ///
    /// Both service results are returned as received. A failed shuffle does
    /// not undo the deck; dealing only needs a deck id.
    pub async fn start_round(&mut self) -> RoundStart {
        self.state = RoundState::default();
        self.phase = RoundPhase::NotStarted;

        let new_deck = self.source.new_deck().await;
        self.state.deck_id = new_deck
            .data()
            .map(|data| data.deck_id.clone())
            .filter(|id| !id.is_empty());

        let shuffle = match self.state.deck_id.as_deref() {
            Some(deck_id) => {
                self.phase = RoundPhase::DeckAcquired;
                log::debug!("round started on deck {deck_id}");
                if self.options.shuffle_on_start {
                    Some(self.source.shuffle(deck_id).await)
                } else {
                    None
                }
            }
            None => {
                log::debug!("no deck acquired (status {})", new_deck.status());
                None
            }
        };

        RoundStart { new_deck, shuffle }
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the round state.
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Returns the acquired deck id, if any.
    pub fn deck_id(&self) -> Option<&str> {
        self.state.deck_id.as_deref()
    }

    /// Returns the options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}
