//! Error types for game operations.
//!
//! Illegal throws (busts, impossible totals, invalid finishes) are not
//! errors: they are scored as zero-point rounds.

use thiserror::Error;

/// Errors that can occur while recording a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Game not found.
    #[error("game not found")]
    GameNotFound,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Invalid game state for recording a round.
    #[error("invalid game state for recording a round")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// A visit uses one to three darts.
    #[error("darts used must be between 1 and 3")]
    DartsOutOfRange,
}

/// Errors that can occur while filling or starting a multiplayer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// Game not found.
    #[error("game not found")]
    GameNotFound,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The game is no longer waiting for players.
    #[error("invalid game state for the lobby")]
    InvalidState,
    /// Every seat is taken.
    #[error("game is full")]
    GameFull,
    /// The account already has a seat.
    #[error("player already joined")]
    AlreadyJoined,
    /// Two players were given the same rank.
    #[error("players have to have different ranks")]
    DuplicateRank,
    /// Rank outside `1..=max_players`.
    #[error("rank out of range")]
    RankOutOfRange,
}

/// Errors that can occur while creating a follow-up game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FollowUpError {
    /// Game not found.
    #[error("game not found")]
    GameNotFound,
    /// The game has no winner yet.
    #[error("game is not finished")]
    NotFinished,
}

/// Errors that can occur while reading a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session not found.
    #[error("session not found")]
    NotFound,
}

/// Errors that can occur while parsing a dart such as `T20` or `BULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDartError {
    /// Empty input.
    #[error("empty dart")]
    Empty,
    /// Prefix is not `S`, `D` or `T`.
    #[error("invalid multiplier")]
    InvalidMultiplier,
    /// Number is missing or not numeric.
    #[error("invalid number")]
    InvalidNumber,
    /// The segment is not on the board.
    #[error("no such segment")]
    NoSuchSegment,
}
