//! Blackjack hand evaluation and two-player round decisions.
//!
//! The crate scores blackjack hands (flexible Aces, soft totals, busts, and
//! naturals) and drives a single hit-once round between two players, drawing
//! cards from a deck-of-cards style service through the [`CardSource`] trait.
//!
//! # Example
//!
//! ```no_run
//! use bjround::{LocalDeck, PlayerId, RoundEngine, RoundOptions};
//!
//! # async fn play() -> Result<(), bjround::RoundError> {
//! let mut engine = RoundEngine::new(LocalDeck::new(42), RoundOptions::default());
//! engine.start_round().await;
//! engine.deal_initial().await?;
//!
//! let naturals = engine.has_natural_blackjack();
//! if !naturals.p1 && !naturals.p2 {
//!     engine.hit(PlayerId::P1).await?;
//!     engine.hit(PlayerId::P2).await?;
//! }
//! let summary = engine.summarize_and_log();
//! # let _ = summary;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod source;

// Re-export main types
pub use card::{Card, CardImages, DECK_SIZE, Rank, Suit};
pub use error::RoundError;
pub use hand::{BLACKJACK, Hand, ScoreBreakdown, attainable_totals, evaluate};
pub use options::RoundOptions;
pub use player::{PerPlayer, PlayerId};
pub use result::{PlayerSummary, RoundSummary, Winner, decide_winner};
pub use round::{DealOutcome, RoundEngine, RoundPhase, RoundStart, RoundState, deal_round_robin};
pub use source::{
    ApiCallResult, CardSource, DeckService, DrawResponse, LocalDeck, NewDeckResponse, RawResponse,
    ShuffleResponse, Transport, TransportStatus,
};
