//! Player identities and seating.

use core::fmt;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

/// Registered account id, assigned by the account collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub u32);

/// Seat id within one game. Stable across rank changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

/// Who is throwing: an account or a named guest, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Identity {
    /// Registered account.
    Registered(UserId),
    /// Guest without an account.
    Guest(String),
}

impl Identity {
    /// Returns the account id, if any.
    #[must_use]
    pub const fn user(&self) -> Option<UserId> {
        match self {
            Self::Registered(user) => Some(*user),
            Self::Guest(_) => None,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered(UserId(id)) => write!(f, "user #{id}"),
            Self::Guest(name) => f.write_str(name),
        }
    }
}

/// A seat in a multiplayer game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Seat id.
    pub id: PlayerId,
    /// Throw order position (1..=max_players).
    pub rank: u8,
    /// Who sits here.
    pub identity: Identity,
}

const FIRST_NAMES: [&str; 16] = [
    "Phil", "Raymond", "Michael", "Gerwyn", "Luke", "Peter", "Fallon", "Beau", "Gary", "Lisa",
    "Nathan", "Rob", "Dimitri", "Josh", "Stephen", "Damon",
];

const LAST_NAMES: [&str; 16] = [
    "Taylor", "Barneveld", "Smith", "Price", "Humphries", "Wright", "Sherrock", "Greaves",
    "Anderson", "Ashton", "Aspinall", "Cross", "Heerden", "Rock", "Bunting", "Heta",
];

/// Generates `count` guest names of the form "First Last".
///
/// Names repeat only once the name lists are exhausted.
pub fn guest_names<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let mut first = FIRST_NAMES;
    let mut last = LAST_NAMES;
    first.shuffle(rng);
    last.shuffle(rng);

    first
        .iter()
        .cycle()
        .zip(last.iter().cycle())
        .take(count)
        .map(|(first, last)| format!("{first} {last}"))
        .collect()
}
