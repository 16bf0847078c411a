//! Throw order among ranked players.
//!
//! Turns are always derived from the rank of whoever threw last; nothing
//! here keeps a "current player" counter.

use alloc::vec::Vec;

/// Returns the rank whose turn it is.
///
/// `last_rank` is the rank of the most recent thrower, or `None` before the
/// first round. Ranks run `1..=max_players` and wrap back to 1.
///
/// # Example
///
/// ```
/// use dartrs::next_turn;
///
/// assert_eq!(next_turn(None, 4), 1);
/// assert_eq!(next_turn(Some(2), 4), 3);
/// assert_eq!(next_turn(Some(4), 4), 1);
/// ```
#[must_use]
pub const fn next_turn(last_rank: Option<u8>, max_players: u8) -> u8 {
    match last_rank {
        Some(rank) if max_players > 1 && rank < max_players => rank + 1,
        _ => 1,
    }
}

/// Returns the other ranks in throw order, starting after `current_rank`.
///
/// # Example
///
/// ```
/// use dartrs::rotation_queue;
///
/// assert_eq!(rotation_queue(1, 4), [2, 3, 4]);
/// assert_eq!(rotation_queue(4, 4), [1, 2, 3]);
/// ```
#[must_use]
pub fn rotation_queue(current_rank: u8, max_players: u8) -> Vec<u8> {
    let start = u16::from(current_rank.saturating_sub(1));
    let seats = u16::from(max_players);
    (1..seats)
        .map(|offset| ((start + offset) % seats + 1) as u8)
        .collect()
}

/// Rank a player takes in the follow-up game: one seat earlier, wrapping
/// the first seat to the last.
///
/// # Example
///
/// ```
/// use dartrs::rotated_rank;
///
/// assert_eq!(rotated_rank(2, 2), 1);
/// assert_eq!(rotated_rank(1, 2), 2);
/// ```
#[must_use]
pub const fn rotated_rank(rank: u8, max_players: u8) -> u8 {
    if rank <= 1 { max_players } else { rank - 1 }
}
