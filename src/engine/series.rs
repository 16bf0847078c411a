use alloc::vec::Vec;

use crate::error::{FollowUpError, SessionError};
use crate::game::GameId;
use crate::session::{Session, SessionId, Standing, tally};

use super::Engine;

impl Engine {
    /// Creates the next game after a finished one.
    ///
    /// The new game keeps the configuration and players, moving everyone one
    /// seat earlier. It joins the same session unless the winner has just
    /// reached the session's target, in which case a fresh session with the
    /// same target is opened.
    ///
    /// A game has at most one follow-up: asking again returns the game
    /// created the first time.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or has no winner.
    pub fn create_follow_up_game(&self, finished: GameId) -> Result<GameId, FollowUpError> {
        let mut games = self.multiplayer.lock();
        let mut sessions = self.sessions.lock();

        let game = games.get(&finished).ok_or(FollowUpError::GameNotFound)?;
        let winner = game.winner().ok_or(FollowUpError::NotFinished)?.identity.clone();
        if let Some(existing) = game.next_game() {
            log::debug!("game {finished} already continued in game {existing}");
            return Ok(existing);
        }

        let session_id = match game.session().and_then(|id| sessions.get(&id)) {
            None => None,
            Some(session) => {
                let wins = tally(
                    session
                        .games()
                        .iter()
                        .filter_map(|id| games.get(id))
                        .filter_map(|game| game.winner())
                        .map(|player| &player.identity),
                )
                .into_iter()
                .find(|standing| standing.identity == winner)
                .map_or(0, |standing| standing.wins);

                if session.is_won_with(wins) {
                    let fresh = Session::new(SessionId(self.next_id()), session.first_to());
                    log::info!(
                        "session {} decided, opening session {}",
                        session.id(),
                        fresh.id()
                    );
                    let id = fresh.id();
                    sessions.insert(id, fresh);
                    Some(id)
                } else {
                    Some(session.id())
                }
            }
        };

        let next = game.follow_up(session_id);
        let id = GameId(self.next_id());
        if let Some(session) = session_id.and_then(|session_id| sessions.get_mut(&session_id)) {
            session.push_game(id);
        }
        games.insert(id, next);
        if let Some(game) = games.get_mut(&finished) {
            game.set_next_game(id);
        }
        log::info!("follow-up game {id} created after game {finished}");

        Ok(id)
    }

    /// Returns a copy of a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown.
    pub fn session(&self, id: SessionId) -> Result<Session, SessionError> {
        self.sessions
            .lock()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    /// Returns wins per identity in a session, most wins first.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown.
    pub fn session_standings(&self, id: SessionId) -> Result<Vec<Standing>, SessionError> {
        let games = self.multiplayer.lock();
        let sessions = self.sessions.lock();
        let session = sessions.get(&id).ok_or(SessionError::NotFound)?;

        Ok(tally(
            session
                .games()
                .iter()
                .filter_map(|id| games.get(id))
                .filter_map(|game| game.winner())
                .map(|player| &player.identity),
        ))
    }
}
