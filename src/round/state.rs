//! Round state types.

use alloc::string::String;

use crate::hand::Hand;
use crate::player::PerPlayer;

/// Where a round is in its lifecycle.
///
/// Phases are informational: operations are gated only by whether a deck has
/// been acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    /// No deck has been acquired.
    #[default]
    NotStarted,
    /// A deck is ready to deal from.
    DeckAcquired,
    /// The initial cards have been dealt.
    DealtInitial,
    /// At least one player has hit.
    Hitting,
    /// The round has been summarized.
    Summarized,
}

/// Mutable state of a single round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundState {
    /// Deck the round draws from, once acquired.
    pub deck_id: Option<String>,
    /// Each player's hand.
    pub hands: PerPlayer<Hand>,
}
