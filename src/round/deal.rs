use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::player::{PerPlayer, PlayerId};
use crate::source::{ApiCallResult, CardSource, DrawResponse};

use super::{RoundEngine, RoundPhase};

/// Outcome of the initial deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealOutcome {
    /// Result of the batch draw.
    pub draw: ApiCallResult<DrawResponse>,
    /// Hands built from the drawn cards; `None` if nothing usable was drawn.
    pub dealt: Option<PerPlayer<Hand>>,
}

/// Distributes cards one at a time in seat order.
///
/// Card `i` goes to `players[i % players.len()]`, so each hand keeps the order
/// in which its cards were drawn.
#[must_use]
pub fn deal_round_robin(cards: &[Card], players: &[PlayerId]) -> PerPlayer<Hand> {
    let mut hands = PerPlayer::<Hand>::default();
    if players.is_empty() {
        return hands;
    }

    for (i, card) in cards.iter().enumerate() {
        hands[players[i % players.len()]].add_card(card.clone());
    }
    hands
}

impl<S: CardSource> RoundEngine<S> {
    /// Deals the initial cards to both players in a single draw.
    ///
    /// Cards go out P1, P2, P1, P2, ... and replace whatever the hands held.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveDeck`] without calling the card source if
    /// no deck has been acquired.
    pub async fn deal_initial(&mut self) -> Result<DealOutcome, RoundError> {
        let deck_id = self
            .state
            .deck_id
            .as_deref()
            .ok_or(RoundError::NoActiveDeck)?;

        let per_player = self.options.cards_per_player;
        let draw = self
            .source
            .draw(deck_id, PlayerId::ALL.len() * per_player)
            .await;

        let dealt = draw
            .data()
            .filter(|_| per_player > 0)
            .map(|data| deal_round_robin(&data.cards, &PlayerId::ALL));

        if let Some(hands) = &dealt {
            self.state.hands = hands.clone();
            self.phase = RoundPhase::DealtInitial;
            log::debug!(
                "dealt P1:{} P2:{}",
                hands.p1.codes().join(","),
                hands.p2.codes().join(",")
            );
        }

        Ok(DealOutcome { draw, dealt })
    }

    /// Draws one card for `player`.
    ///
    /// The card is appended to the player's hand if the service returned one.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveDeck`] without calling the card source if
    /// no deck has been acquired.
    pub async fn hit(
        &mut self,
        player: PlayerId,
    ) -> Result<ApiCallResult<DrawResponse>, RoundError> {
        let deck_id = self
            .state
            .deck_id
            .as_deref()
            .ok_or(RoundError::NoActiveDeck)?;

        let draw = self.source.draw(deck_id, 1).await;
        if let Some(card) = draw.data().and_then(|data| data.cards.first()) {
            log::debug!("{player} hits {card}");
            self.state.hands[player].add_card(card.clone());
            self.phase = RoundPhase::Hitting;
        }

        Ok(draw)
    }
}
