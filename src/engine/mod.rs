//! Registry of games and sessions exposing the scoring operations by id.
//!
//! Each operation holds the lock of the map it touches for its whole
//! read-modify-write, so two throws for the same game are never scored
//! against the same remaining score. When more than one lock is needed they
//! are taken in the order: single-player games, multiplayer games,
//! sessions, rng.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use chrono::NaiveDate;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::LobbyError;
use crate::game::{GameId, MultiplayerGame, SinglePlayerGame};
use crate::options::GameOptions;
use crate::player::{Identity, PlayerId, UserId};
use crate::session::{Session, SessionId};
use crate::statistics::{StatisticsSnapshot, get_statistics};
use crate::sync::Mutex;

mod rounds;
mod series;

/// Darts scoring engine owning every game and session.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dartrs::{Engine, GameOptions, Throw, UserId};
///
/// let engine = Engine::new(42);
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let game = engine.create_game(UserId(1), GameOptions::default(), date);
///
/// let outcome = engine.record_round(game, None, Throw::new(60)).unwrap();
/// assert_eq!(outcome.left_score, 441);
/// ```
pub struct Engine {
    /// Single-player games.
    games: Mutex<HashMap<GameId, SinglePlayerGame>>,
    /// Multiplayer games.
    multiplayer: Mutex<HashMap<GameId, MultiplayerGame>>,
    /// Sessions by id.
    sessions: Mutex<HashMap<SessionId, Session>>,
    /// Next id for games and sessions.
    next_id: AtomicU32,
    /// Random number generator for guest names.
    rng: Mutex<ChaCha8Rng>,
}

impl Engine {
    /// Creates an empty engine with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            multiplayer: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
            next_id: AtomicU32::new(1),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn next_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Starts a practice game for `owner`.
    #[must_use]
    pub fn create_game(&self, owner: UserId, options: GameOptions, date: NaiveDate) -> GameId {
        let id = GameId(self.next_id());
        log::info!(
            "practice game {id} created: {} in {} rounds",
            options.score,
            options.rounds
        );
        self.games
            .lock()
            .insert(id, SinglePlayerGame::new(owner, options, date));
        id
    }

    /// Creates a multiplayer game in a new session, seating `creator` first.
    ///
    /// Offline games fill the remaining seats with guests and start at once;
    /// online games wait in the lobby until [`Engine::start_game`].
    #[must_use]
    pub fn create_multiplayer_game(
        &self,
        creator: UserId,
        options: GameOptions,
        date: NaiveDate,
    ) -> GameId {
        let id = GameId(self.next_id());
        let session_id = SessionId(self.next_id());

        let mut session = Session::new(session_id, options.first_to);
        session.push_game(id);

        let online = options.online;
        let seats = options.max_players;
        let mut game = MultiplayerGame::new(creator, options, date, Some(session_id));
        if !online {
            game.fill_with_guests(&mut *self.rng.lock());
        }
        log::info!("multiplayer game {id} created in session {session_id} with {seats} seats");

        self.multiplayer.lock().insert(id, game);
        self.sessions.lock().insert(session_id, session);
        id
    }

    /// Seats `identity` in an online game's lobby.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or [`MultiplayerGame::join`] fails.
    pub fn join(&self, game: GameId, identity: Identity) -> Result<PlayerId, LobbyError> {
        self.multiplayer
            .lock()
            .get_mut(&game)
            .ok_or(LobbyError::GameNotFound)?
            .join(identity)
    }

    /// Leaves an online game's lobby.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or [`MultiplayerGame::leave`] fails.
    pub fn leave(&self, game: GameId, player: PlayerId) -> Result<(), LobbyError> {
        self.multiplayer
            .lock()
            .get_mut(&game)
            .ok_or(LobbyError::GameNotFound)?
            .leave(player)
    }

    /// Closes a lobby with the given throw order and starts the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or [`MultiplayerGame::start`] fails.
    pub fn start_game(&self, game: GameId, ranks: &[(PlayerId, u8)]) -> Result<(), LobbyError> {
        let mut games = self.multiplayer.lock();
        let game = games.get_mut(&game).ok_or(LobbyError::GameNotFound)?;
        let mut rng = self.rng.lock();
        game.start(ranks, &mut *rng)
    }

    /// Returns a copy of a practice game.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<SinglePlayerGame> {
        self.games.lock().get(&id).cloned()
    }

    /// Returns a copy of a multiplayer game.
    #[must_use]
    pub fn multiplayer_game(&self, id: GameId) -> Option<MultiplayerGame> {
        self.multiplayer.lock().get(&id).cloned()
    }

    /// Returns the statistics of `identity` over every game it played.
    #[must_use]
    pub fn statistics(&self, identity: &Identity) -> StatisticsSnapshot {
        let games = self.games.lock();
        let multiplayer = self.multiplayer.lock();

        let mut own: Vec<&SinglePlayerGame> = games
            .values()
            .filter(|game| identity.user() == Some(game.owner()))
            .collect();
        own.sort_by_key(|game| game.date());

        get_statistics(own.iter().copied(), multiplayer.values(), identity)
    }
}
