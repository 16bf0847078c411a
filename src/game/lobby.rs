use alloc::vec::Vec;
use chrono::NaiveDate;
use rand::Rng;

use crate::error::LobbyError;
use crate::options::{GameOptions, MAX_PLAYERS};
use crate::player::{Identity, Player, PlayerId, UserId, guest_names};
use crate::session::SessionId;

use super::{MultiplayerGame, MultiplayerStatus};

impl MultiplayerGame {
    /// Creates a game with `creator` seated at rank 1.
    ///
    /// Online games open a lobby; offline games are ready once the empty
    /// seats are filled with [`MultiplayerGame::fill_with_guests`].
    #[must_use]
    pub fn new(
        creator: UserId,
        options: GameOptions,
        date: NaiveDate,
        session: Option<SessionId>,
    ) -> Self {
        let waiting = options.online;
        Self {
            creator,
            options,
            date,
            waiting,
            players: alloc::vec![Player {
                id: PlayerId(0),
                rank: 1,
                identity: Identity::Registered(creator),
            }],
            rounds: Vec::new(),
            session,
            next_game: None,
        }
    }

    /// Seats `identity` at the lowest free rank.
    ///
    /// # Errors
    ///
    /// Returns an error if the lobby is closed, every seat is taken, or the
    /// account already has a seat.
    pub fn join(&mut self, identity: Identity) -> Result<PlayerId, LobbyError> {
        if self.status() != MultiplayerStatus::Waiting {
            return Err(LobbyError::InvalidState);
        }
        if matches!(identity, Identity::Registered(_)) && self.seat_of(&identity).is_some() {
            return Err(LobbyError::AlreadyJoined);
        }
        let rank = self.free_ranks().first().copied().ok_or(LobbyError::GameFull)?;

        self.seat(identity, rank).ok_or(LobbyError::GameFull)
    }

    /// Removes a player from the lobby.
    ///
    /// # Errors
    ///
    /// Returns an error if the lobby is closed or the player is unknown.
    pub fn leave(&mut self, player: PlayerId) -> Result<(), LobbyError> {
        if self.status() != MultiplayerStatus::Waiting {
            return Err(LobbyError::InvalidState);
        }
        let index = self
            .players
            .iter()
            .position(|seated| seated.id == player)
            .ok_or(LobbyError::PlayerNotFound)?;
        self.players.remove(index);
        Ok(())
    }

    /// Applies a manual throw order.
    ///
    /// Players not listed keep their rank. Nothing changes unless the whole
    /// resulting assignment is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the lobby is closed, a player is unknown, a rank
    /// is outside `1..=max_players`, or two players would share a rank.
    pub fn set_player_ranks(&mut self, ranks: &[(PlayerId, u8)]) -> Result<(), LobbyError> {
        if self.status() != MultiplayerStatus::Waiting {
            return Err(LobbyError::InvalidState);
        }

        let mut assigned: Vec<u8> = self.players.iter().map(|player| player.rank).collect();
        for &(id, rank) in ranks {
            if !(1..=self.options.max_players).contains(&rank) {
                return Err(LobbyError::RankOutOfRange);
            }
            let index = self
                .players
                .iter()
                .position(|player| player.id == id)
                .ok_or(LobbyError::PlayerNotFound)?;
            assigned[index] = rank;
        }

        let mut sorted = assigned.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(LobbyError::DuplicateRank);
        }

        for (player, rank) in self.players.iter_mut().zip(assigned) {
            player.rank = rank;
        }
        Ok(())
    }

    /// Fills every empty seat with a generated guest.
    pub fn fill_with_guests<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let free = self.free_ranks();
        let names = guest_names(free.len(), rng);
        for (rank, name) in free.into_iter().zip(names) {
            if self.seat(Identity::Guest(name), rank).is_none() {
                break;
            }
        }
    }

    /// Closes the lobby: applies `ranks`, seats guests in empty seats, and
    /// starts play. Nothing changes if the ranks are rejected.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`MultiplayerGame::set_player_ranks`].
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        ranks: &[(PlayerId, u8)],
        rng: &mut R,
    ) -> Result<(), LobbyError> {
        self.set_player_ranks(ranks)?;
        self.fill_with_guests(rng);
        self.waiting = false;
        log::info!("game started with {} players", self.players.len());
        Ok(())
    }

    fn free_ranks(&self) -> Vec<u8> {
        (1..=self.options.max_players)
            .filter(|&rank| self.player_at(rank).is_none())
            .collect()
    }

    /// Seats a player under the lowest unused id. Ids of players who left
    /// the lobby are handed out again; no round can reference them yet.
    fn seat(&mut self, identity: Identity, rank: u8) -> Option<PlayerId> {
        let id = (0..=MAX_PLAYERS)
            .map(PlayerId)
            .find(|&id| self.player(id).is_none())?;
        self.players.push(Player { id, rank, identity });
        Some(id)
    }
}
