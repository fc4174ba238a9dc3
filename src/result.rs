//! Round summary types and winner decision.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Serialize, Serializer};

use crate::hand::Hand;
use crate::player::{PerPlayer, PlayerId};

/// Outcome of comparing the two hands of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The given player holds the better hand.
    Player(PlayerId),
    /// Neither hand beats the other.
    Tie,
}

impl Winner {
    /// Returns the label used in logs and serialized summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player(player) => player.as_str(),
            Self::Tie => "tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Scored view of one player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// The player.
    pub player_id: PlayerId,
    /// Card codes in deal order.
    pub codes: Vec<String>,
    /// Best total of the hand.
    pub score: u32,
    /// Whether the score counts an Ace as 11.
    pub is_soft: bool,
    /// Whether the hand is bust.
    pub is_bust: bool,
    /// Whether the hand is a natural blackjack.
    pub is_blackjack: bool,
}

impl PlayerSummary {
    /// Scores a player's hand.
    #[must_use]
    pub fn new(player_id: PlayerId, hand: &Hand) -> Self {
        let score = hand.evaluate();
        Self {
            player_id,
            codes: hand.codes(),
            score: score.best_value,
            is_soft: score.is_soft,
            is_bust: score.is_bust,
            is_blackjack: score.is_natural_blackjack,
        }
    }
}

impl fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hardness = if self.is_soft { "soft" } else { "hard" };
        write!(
            f,
            "{}:{} ({},{hardness}",
            self.player_id,
            self.codes.join(","),
            self.score
        )?;
        if self.is_blackjack {
            f.write_str(",BLACKJACK")?;
        }
        if self.is_bust {
            f.write_str(",BUST")?;
        }
        f.write_str(")")
    }
}

/// Report of a round, computed on demand from the dealt hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// Deck the round was dealt from, if one was acquired.
    ///
    /// Serialized as `null` when absent; the log line prints `unknown`.
    /// Consumers expecting the string form should map `null` to `"unknown"`.
    pub deck_id: Option<String>,
    /// Per-player summaries in dealing order.
    pub players: Vec<PlayerSummary>,
    /// Winner, or `None` when the outcome is unknown.
    ///
    /// Summaries built with [`RoundSummary::from_hands`] always carry a
    /// decision; two empty hands tie at 0.
    pub winner: Option<Winner>,
}

impl RoundSummary {
    /// Builds a summary from both players' hands.
    #[must_use]
    pub fn from_hands(deck_id: Option<String>, hands: &PerPlayer<Hand>) -> Self {
        let summaries = hands.map(PlayerSummary::new);
        let winner = decide_winner(&summaries.p1, &summaries.p2);

        Self {
            deck_id,
            players: alloc::vec![summaries.p1, summaries.p2],
            winner: Some(winner),
        }
    }

    /// Returns the summary for the given player.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|s| s.player_id == player)
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[deck {}] ", self.deck_id.as_deref().unwrap_or("unknown"))?;
        for (i, player) in self.players.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{player}")?;
        }
        match self.winner {
            Some(winner) => write!(f, " → winner: {winner}"),
            None => f.write_str(" → winner: n/a"),
        }
    }
}

/// Decides which of two hands wins.
///
/// A natural blackjack beats any other hand, including a 21 made with three or
/// more cards. Two busts tie; a single bust loses. Otherwise the higher score
/// wins and equal scores tie. Two naturals therefore tie on score.
#[must_use]
pub fn decide_winner(a: &PlayerSummary, b: &PlayerSummary) -> Winner {
    match (a.is_blackjack, b.is_blackjack) {
        (true, false) => return Winner::Player(a.player_id),
        (false, true) => return Winner::Player(b.player_id),
        _ => {}
    }

    match (a.is_bust, b.is_bust) {
        (true, true) => Winner::Tie,
        (true, false) => Winner::Player(b.player_id),
        (false, true) => Winner::Player(a.player_id),
        (false, false) => match a.score.cmp(&b.score) {
            core::cmp::Ordering::Greater => Winner::Player(a.player_id),
            core::cmp::Ordering::Less => Winner::Player(b.player_id),
            core::cmp::Ordering::Equal => Winner::Tie,
        },
    }
}
