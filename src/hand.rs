//! Hand representation and blackjack scoring.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Difference between an Ace counted as 11 and as 1.
const ACE_SWING: u32 = 10;

/// Score derived from a hand of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreBreakdown {
    /// Best total: the highest total not above 21, or the lowest bust total.
    pub best_value: u32,
    /// Whether `best_value` counts an Ace as 11.
    pub is_soft: bool,
    /// Whether `best_value` exceeds 21.
    pub is_bust: bool,
    /// Whether the hand is exactly two cards totaling 21.
    pub is_natural_blackjack: bool,
}

/// Returns every total the cards can reach, choosing one value per card.
///
/// Equal partial sums are merged after each card, so a hand holding `k` Aces
/// yields at most `k + 1` totals. An empty hand yields `{0}`.
#[must_use]
pub fn attainable_totals(cards: &[Card]) -> BTreeSet<u32> {
    let mut totals = BTreeSet::from([0]);

    for card in cards {
        let values = card.rank.values();
        totals = totals
            .iter()
            .flat_map(|total| values.iter().map(move |value| total + value))
            .collect();
    }

    totals
}

/// Evaluates a hand.
///
/// The result does not depend on card order.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, evaluate};
///
/// let cards = [
///     Card::from_parts(Rank::Ace, Suit::Spades),
///     Card::from_parts(Rank::King, Suit::Hearts),
/// ];
/// let score = evaluate(&cards);
/// assert_eq!(score.best_value, 21);
/// assert!(score.is_natural_blackjack);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> ScoreBreakdown {
    let totals = attainable_totals(cards);

    let best_value = totals
        .range(..=BLACKJACK)
        .next_back()
        .or_else(|| totals.first())
        .copied()
        .unwrap_or_default();

    // Swapping one Ace between 11 and 1 moves the total by exactly 10.
    let is_soft = best_value <= BLACKJACK
        && best_value
            .checked_sub(ACE_SWING)
            .is_some_and(|lower| totals.contains(&lower));

    let is_bust = best_value > BLACKJACK;

    ScoreBreakdown {
        best_value,
        is_soft,
        is_bust,
        is_natural_blackjack: cards.len() == 2 && best_value == BLACKJACK,
    }
}

/// A player's hand.
///
/// Cards are only ever appended; order is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card codes in deal order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.code.clone()).collect()
    }

    /// Scores the hand.
    #[must_use]
    pub fn evaluate(&self) -> ScoreBreakdown {
        evaluate(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks
            .iter()
            .map(|&rank| Card::from_parts(rank, Suit::Spades))
            .collect()
    }

    #[test]
    fn empty_hand_scores_zero() {
        let score = evaluate(&[]);
        assert_eq!(score, ScoreBreakdown::default());
        assert_eq!(attainable_totals(&[]), BTreeSet::from([0]));
    }

    #[test]
    fn two_aces_and_nine_is_soft_21() {
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(attainable_totals(&hand), BTreeSet::from([11, 21, 31]));

        let score = evaluate(&hand);
        assert_eq!(score.best_value, 21);
        assert!(score.is_soft);
        assert!(!score.is_bust);
        assert!(!score.is_natural_blackjack);
    }

    #[test]
    fn ace_king_is_natural() {
        let hand = cards(&[Rank::Ace, Rank::King]);
        assert_eq!(attainable_totals(&hand), BTreeSet::from([11, 21]));

        let score = evaluate(&hand);
        assert_eq!(score.best_value, 21);
        assert!(score.is_soft);
        assert!(score.is_natural_blackjack);
    }

    #[test]
    fn king_queen_five_busts() {
        let score = evaluate(&cards(&[Rank::King, Rank::Queen, Rank::Five]));
        assert_eq!(score.best_value, 25);
        assert!(score.is_bust);
        assert!(!score.is_soft);
        assert!(!score.is_natural_blackjack);
    }

    #[test]
    fn bust_picks_lowest_total() {
        let score = evaluate(&cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]));
        assert_eq!(score.best_value, 26);
        assert!(score.is_bust);
    }

    #[test]
    fn three_card_21_is_not_natural() {
        let score = evaluate(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven]));
        assert_eq!(score.best_value, 21);
        assert!(!score.is_soft);
        assert!(!score.is_natural_blackjack);
    }

    #[test]
    fn hard_total_with_ace_forced_low() {
        let score = evaluate(&cards(&[Rank::Ace, Rank::Nine, Rank::Eight]));
        assert_eq!(score.best_value, 18);
        assert!(!score.is_soft);
    }

    #[test]
    fn totals_stay_linear_in_aces() {
        for aces in 0..=12_u32 {
            for base in [Vec::new(), vec![Rank::Five], vec![Rank::King, Rank::Two]] {
                let fixed: u32 = base.iter().map(|rank| rank.values()[0]).sum();
                let mut ranks = base.clone();
                ranks.extend(core::iter::repeat_n(Rank::Ace, aces as usize));

                let expected: BTreeSet<u32> =
                    (0..=aces).map(|j| fixed + (aces - j) + 11 * j).collect();
                let totals = attainable_totals(&cards(&ranks));

                assert_eq!(totals, expected);
                assert!(totals.len() <= aces as usize + 1);
            }
        }
    }

    #[test]
    fn flags_are_consistent_for_every_pair_and_triple() {
        for &a in &Rank::ALL {
            for &b in &Rank::ALL {
                let pair = cards(&[a, b]);
                let score = evaluate(&pair);
                assert!(!(score.is_soft && score.is_bust));
                assert_eq!(score.is_bust, score.best_value > BLACKJACK);
                assert_eq!(score.is_natural_blackjack, score.best_value == BLACKJACK);

                for &c in &Rank::ALL {
                    let triple = cards(&[a, b, c]);
                    let score = evaluate(&triple);
                    assert!(!(score.is_soft && score.is_bust));
                    assert!(!score.is_natural_blackjack);
                    assert_eq!(score, evaluate(&triple));

                    let reversed: Vec<Card> = triple.iter().rev().cloned().collect();
                    assert_eq!(score, evaluate(&reversed));
                }
            }
        }
    }

    #[test]
    fn hand_keeps_deal_order() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add_card(Card::from_parts(Rank::Ten, Suit::Diamonds));
        hand.add_card(Card::from_parts(Rank::Ace, Suit::Hearts));

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.codes(), vec!["0D".to_string(), "AH".to_string()]);
        assert!(hand.evaluate().is_natural_blackjack);
    }
}
