//! Match series grouping consecutive multiplayer games.

use core::fmt;

use alloc::vec::Vec;

use crate::game::GameId;
use crate::player::Identity;

/// Id of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u32);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A series of games between the same players, optionally "first to N".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    id: SessionId,
    first_to: Option<u8>,
    games: Vec<GameId>,
}

/// Games won by one identity within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    /// Who won.
    pub identity: Identity,
    /// How many games.
    pub wins: u8,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub const fn new(id: SessionId, first_to: Option<u8>) -> Self {
        Self {
            id,
            first_to,
            games: Vec::new(),
        }
    }

    /// Returns the session id.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the win target, if any.
    #[must_use]
    pub const fn first_to(&self) -> Option<u8> {
        self.first_to
    }

    /// Returns the session's games in creation order.
    #[must_use]
    pub fn games(&self) -> &[GameId] {
        &self.games
    }

    /// Returns the number of games played in the session.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Appends a game to the series.
    pub fn push_game(&mut self, game: GameId) {
        self.games.push(game);
    }

    /// Returns whether `wins` games take the session.
    #[must_use]
    pub fn is_won_with(&self, wins: u8) -> bool {
        self.first_to.is_some_and(|target| wins >= target)
    }
}

/// Counts wins per identity, most wins first, ties in order of first win.
#[must_use]
pub fn tally<'a, I>(winners: I) -> Vec<Standing>
where
    I: IntoIterator<Item = &'a Identity>,
{
    let mut standings: Vec<Standing> = Vec::new();
    for winner in winners {
        match standings.iter_mut().find(|standing| &standing.identity == winner) {
            Some(standing) => standing.wins = standing.wins.saturating_add(1),
            None => standings.push(Standing {
                identity: winner.clone(),
                wins: 1,
            }),
        }
    }
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}
