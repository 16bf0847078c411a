//! Game state types.

use crate::player::PlayerId;

/// Single-player game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Rounds can still be recorded.
    Progress,
    /// Checked out exactly.
    Won,
    /// Ran out of rounds before checking out.
    Lost,
}

/// Multiplayer game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MultiplayerStatus {
    /// Lobby is open, waiting for players.
    Waiting,
    /// Players are throwing.
    Progress,
    /// A player checked out.
    Finished,
}

/// A visit as entered by the thrower, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throw {
    /// Total entered for the visit; any value is accepted and clamped.
    pub points: i32,
    /// The last dart went for a double. Confirms a double-out finish and
    /// marks a missed finish as a checkout attempt.
    pub ended_on_double: bool,
    /// Darts used, if entered.
    pub darts: Option<u8>,
}

impl Throw {
    /// Creates a throw totalling `points`.
    #[must_use]
    pub const fn new(points: i32) -> Self {
        Self {
            points,
            ended_on_double: false,
            darts: None,
        }
    }

    /// Marks the last dart as thrown at a double.
    #[must_use]
    pub const fn on_double(mut self) -> Self {
        self.ended_on_double = true;
        self
    }

    /// Sets the number of darts used.
    #[must_use]
    pub const fn with_darts(mut self, darts: u8) -> Self {
        self.darts = Some(darts);
        self
    }
}

/// What recording a round did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    /// Points recorded for the visit.
    pub accepted_points: u16,
    /// Score the thrower has left.
    pub left_score: u16,
    /// Whether the game reached a terminal state.
    pub terminal: bool,
    /// The winning seat, for multiplayer checkouts.
    pub winner: Option<PlayerId>,
}
