//! Game configuration options.

/// Largest table a multiplayer game can seat.
pub const MAX_PLAYERS: u8 = 10;

/// How a finishing visit is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CheckoutMode {
    /// Any listed checkout total finishes the leg.
    #[default]
    Any,
    /// The thrower must confirm the last dart was a double.
    DoubleOut,
}

impl CheckoutMode {
    /// Returns whether a finish is acceptable under this mode.
    ///
    /// `ended_on_double` is the thrower's own confirmation and only matters
    /// for [`CheckoutMode::DoubleOut`].
    #[must_use]
    pub const fn accepts_finish(self, ended_on_double: bool) -> bool {
        match self {
            Self::Any => true,
            Self::DoubleOut => ended_on_double,
        }
    }
}

/// Configuration options for a darts game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::{CheckoutMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_score(301)
///     .with_max_players(4)
///     .with_checkout(CheckoutMode::DoubleOut);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Starting score of every player.
    pub score: u16,
    /// Single-player round cap; the game is lost once reached.
    /// 0 to play without a cap.
    pub rounds: u16,
    /// Number of seats in a multiplayer game (1..=10).
    pub max_players: u8,
    /// Whether a multiplayer game waits in a lobby for remote players.
    pub online: bool,
    /// Finishing rule.
    pub checkout: CheckoutMode,
    /// Games a player must win to take the session.
    pub first_to: Option<u8>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            score: 501,
            rounds: 20,
            max_players: 2,
            online: false,
            checkout: CheckoutMode::Any,
            first_to: None,
        }
    }
}

impl GameOptions {
    /// Sets the starting score.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_score(301);
    /// assert_eq!(options.score, 301);
    /// ```
    #[must_use]
    pub const fn with_score(mut self, score: u16) -> Self {
        self.score = score;
        self
    }

    /// Sets the single-player round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(10);
    /// assert_eq!(options.rounds, 10);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u16) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the number of seats, clamped to `1..=10`.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_max_players(4).max_players, 4);
    /// assert_eq!(GameOptions::default().with_max_players(0).max_players, 1);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = if max_players == 0 {
            1
        } else if max_players > MAX_PLAYERS {
            MAX_PLAYERS
        } else {
            max_players
        };
        self
    }

    /// Sets whether the game waits for remote players.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_online(true);
    /// assert!(options.online);
    /// ```
    #[must_use]
    pub const fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Sets the finishing rule.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{CheckoutMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_checkout(CheckoutMode::DoubleOut);
    /// assert_eq!(options.checkout, CheckoutMode::DoubleOut);
    /// ```
    #[must_use]
    pub const fn with_checkout(mut self, checkout: CheckoutMode) -> Self {
        self.checkout = checkout;
        self
    }

    /// Sets the session win target.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_first_to(Some(3));
    /// assert_eq!(options.first_to, Some(3));
    /// ```
    #[must_use]
    pub const fn with_first_to(mut self, first_to: Option<u8>) -> Self {
        self.first_to = first_to;
        self
    }
}
