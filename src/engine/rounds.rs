use crate::error::RoundError;
use crate::game::{GameId, RoundOutcome, ScoredGame, Throw};
use crate::player::{Player, PlayerId};
use crate::round::Round;

use super::Engine;

impl Engine {
    /// Runs `f` on the game with `id` while its map stays locked.
    fn with_scored_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut dyn ScoredGame) -> T,
    ) -> Option<T> {
        let mut games = self.games.lock();
        if let Some(game) = games.get_mut(&id) {
            return Some(f(game));
        }
        drop(games);

        let mut games = self.multiplayer.lock();
        games.get_mut(&id).map(|game| f(game))
    }

    /// Validates and records a visit.
    ///
    /// `player` is `None` for practice games and the thrower's seat for
    /// multiplayer games. Illegal throws are recorded as zero points.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown, no longer accepts rounds,
    /// the player is unknown or out of turn, or the dart count is invalid.
    pub fn record_round(
        &self,
        game: GameId,
        player: Option<PlayerId>,
        throw: Throw,
    ) -> Result<RoundOutcome, RoundError> {
        let outcome = self
            .with_scored_game(game, |scored| scored.record_round(player, throw))
            .ok_or(RoundError::GameNotFound)??;
        if outcome.terminal {
            log::info!("game {game} is over");
        }
        Ok(outcome)
    }

    /// Removes the most recent round of a game, reopening its score.
    ///
    /// Returns the removed round, or `None` if the game had no rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn undo_last_round(&self, game: GameId) -> Result<Option<Round>, RoundError> {
        self.with_scored_game(game, |scored| scored.undo_last_round())
            .ok_or(RoundError::GameNotFound)
    }

    /// Returns the score `player` has left in a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn left_score(&self, game: GameId, player: Option<PlayerId>) -> Result<u16, RoundError> {
        self.with_scored_game(game, |scored| scored.left_score(player))
            .ok_or(RoundError::GameNotFound)
    }

    /// Returns the player whose turn it is in a multiplayer game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or its current seat is empty.
    pub fn next_turn(&self, game: GameId) -> Result<Player, RoundError> {
        self.multiplayer
            .lock()
            .get(&game)
            .ok_or(RoundError::GameNotFound)?
            .current_player()
            .cloned()
            .ok_or(RoundError::PlayerNotFound)
    }
}
