//! A darts scoring and turn engine with optional `no_std` support.
//!
//! The crate validates visits against the rules of the game (busts,
//! checkouts, impossible totals), rotates the throw order between ranked
//! players, and derives statistics from the recorded rounds. The [`Engine`]
//! type keeps every game and session and exposes these operations by id.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dartrs::{Engine, GameOptions, MultiplayerStatus, PlayerId, Throw, UserId};
//!
//! let engine = Engine::new(7);
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let game = engine.create_multiplayer_game(
//!     UserId(1),
//!     GameOptions::default().with_score(100),
//!     date,
//! );
//!
//! let first = engine.next_turn(game).unwrap();
//! let outcome = engine
//!     .record_round(game, Some(first.id), Throw::new(100))
//!     .unwrap();
//! assert!(outcome.terminal);
//! assert_eq!(outcome.winner, Some(PlayerId(0)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod checkout;
pub mod dart;
pub mod engine;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod round;
pub mod session;
pub mod statistics;
mod sync;
pub mod turn;

// Re-export main types
pub use checkout::{
    BOGEY_NUMBERS, Checkout, MAX_CHECKOUT, checkout_suggestion, checkouts, is_checkout,
};
pub use dart::{BULL, Dart, IMPOSSIBLE_POINTS, MAX_ROUND_POINTS, is_possible_round};
pub use engine::Engine;
pub use error::{FollowUpError, LobbyError, ParseDartError, RoundError, SessionError};
pub use game::{
    GameContext, GameId, GameStatus, MultiplayerGame, MultiplayerStatus, PlayerSummary,
    QueueEntry, RoundOutcome, ScoredGame, SinglePlayerGame, Throw,
};
pub use options::{CheckoutMode, GameOptions, MAX_PLAYERS};
pub use player::{Identity, Player, PlayerId, UserId};
pub use round::{Round, round_points};
pub use session::{Session, SessionId, Standing};
pub use statistics::{
    ScoreBrackets, Statistics, StatisticsSnapshot, WeeklyAverage, get_statistics,
    multiplayer_statistics, singleplayer_statistics, weekly_averages,
};
pub use turn::{next_turn, rotated_rank, rotation_queue};
