//! Game engine and state management.

use core::fmt;

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::PlayerId;
use crate::round::{Round, round_points};

mod lobby;
mod multi;
mod single;
pub mod state;

pub use multi::{MultiplayerGame, PlayerSummary, QueueEntry};
pub use single::{GameContext, SinglePlayerGame};
pub use state::{GameStatus, MultiplayerStatus, RoundOutcome, Throw};

/// Id of a single-player or multiplayer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities shared by single-player and multiplayer games.
///
/// Remaining scores and terminal states are recomputed from the round
/// history on every call, so undoing a round can never leave stale state.
pub trait ScoredGame {
    /// Returns the game configuration.
    fn options(&self) -> &GameOptions;

    /// Returns every recorded round, oldest first.
    fn rounds(&self) -> &[Round];

    /// Returns the score `player` has left (`None` for the single player).
    fn left_score(&self, player: Option<PlayerId>) -> u16 {
        left_score(self.options().score, self.rounds(), player)
    }

    /// Returns whether no further rounds can be recorded.
    fn is_over(&self) -> bool;

    /// Validates and records a visit for `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not accept rounds, the player is
    /// unknown or out of turn, or the dart count is outside `1..=3`.
    fn record_round(
        &mut self,
        player: Option<PlayerId>,
        throw: Throw,
    ) -> Result<RoundOutcome, RoundError>;

    /// Removes the most recent round, returning it.
    fn undo_last_round(&mut self) -> Option<Round>;
}

fn left_score(start: u16, rounds: &[Round], player: Option<PlayerId>) -> u16 {
    let scored: u16 = rounds
        .iter()
        .filter(|round| round.player == player)
        .map(|round| round.points)
        .sum();
    start.saturating_sub(scored)
}

/// Scores `throw` from the player's current score and appends the round.
fn push_round(
    rounds: &mut Vec<Round>,
    options: &GameOptions,
    player: Option<PlayerId>,
    throw: Throw,
) -> Result<Round, RoundError> {
    if throw.darts.is_some_and(|darts| !(1..=3).contains(&darts)) {
        return Err(RoundError::DartsOutOfRange);
    }

    let left_before = left_score(options.score, rounds, player);
    let points = round_points(
        left_before,
        throw.points,
        options.checkout,
        throw.ended_on_double,
    );
    if points == 0 && throw.points > 0 {
        log::debug!(
            "visit of {} from {left_before} scored nothing",
            throw.points
        );
    }

    let round = Round {
        player,
        points,
        darts: throw.darts,
        left_before,
        on_double: throw.ended_on_double,
    };
    rounds.push(round);
    log::debug!("recorded {points} points, {} left", round.left_after());

    Ok(round)
}
