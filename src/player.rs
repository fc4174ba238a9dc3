//! Player identifiers and per-player storage.

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two seats in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player, dealt first.
    P1,
    /// Second player.
    P2,
}

impl PlayerId {
    /// Seats in dealing order.
    pub const ALL: [Self; 2] = [Self::P1, Self::P2];

    /// Returns the seat label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held for each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PerPlayer<T> {
    /// Value for [`PlayerId::P1`].
    pub p1: T,
    /// Value for [`PlayerId::P2`].
    pub p2: T,
}

impl<T> PerPlayer<T> {
    /// Builds a value for each player from a function.
    pub fn from_fn(mut f: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            p1: f(PlayerId::P1),
            p2: f(PlayerId::P2),
        }
    }

    /// Maps each value, keeping the player it belongs to.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PerPlayer<U> {
        PerPlayer {
            p1: f(PlayerId::P1, &self.p1),
            p2: f(PlayerId::P2, &self.p2),
        }
    }

    /// Iterates values in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::P1, &self.p1), (PlayerId::P2, &self.p2)].into_iter()
    }
}

impl<T> Index<PlayerId> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::P1 => &self.p1,
            PlayerId::P2 => &self.p2,
        }
    }
}

impl<T> IndexMut<PlayerId> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::P1 => &mut self.p1,
            PlayerId::P2 => &mut self.p2,
        }
    }
}
