//! Round configuration options.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_cards_per_player(3)
///     .with_shuffle_on_start(false);
/// assert_eq!(options.cards_per_player, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of cards each player receives in the initial deal.
    pub cards_per_player: usize,
    /// Whether starting a round also shuffles the new deck.
    pub shuffle_on_start: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            cards_per_player: 2,
            shuffle_on_start: true,
        }
    }
}

impl RoundOptions {
    /// Sets the number of cards dealt to each player initially.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_cards_per_player(1);
    /// assert_eq!(options.cards_per_player, 1);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Sets whether the deck is shuffled when a round starts.
    #[must_use]
    pub const fn with_shuffle_on_start(mut self, shuffle: bool) -> Self {
        self.shuffle_on_start = shuffle;
        self
    }
}
