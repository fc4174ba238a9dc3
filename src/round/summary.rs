use crate::hand::Hand;
use crate::player::PerPlayer;
use crate::result::RoundSummary;
use crate::source::CardSource;

use super::{RoundEngine, RoundPhase};

impl<S: CardSource> RoundEngine<S> {
    /// Reports which players currently hold a natural blackjack.
    pub fn has_natural_blackjack(&self) -> PerPlayer<bool> {
        self.state
            .hands
            .map(|_, hand| hand.evaluate().is_natural_blackjack)
    }

    /// Returns a copy of both hands.
    pub fn get_hands(&self) -> PerPlayer<Hand> {
        self.state.hands.clone()
    }

    /// Scores both hands and decides the winner without logging.
    pub fn summarize(&self) -> RoundSummary {
        RoundSummary::from_hands(self.state.deck_id.clone(), &self.state.hands)
    }

    /// Scores both hands, decides the winner, and logs one summary line.
    ///
    /// Hands and deck are left untouched.
    pub fn summarize_and_log(&mut self) -> RoundSummary {
        let summary = self.summarize();
        log::info!("{summary}");
        self.phase = RoundPhase::Summarized;
        summary
    }
}
