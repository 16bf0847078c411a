use alloc::vec::Vec;
use chrono::NaiveDate;

use crate::checkout::{Checkout, checkout_suggestion};
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::{Identity, Player, PlayerId, UserId};
use crate::round::Round;
use crate::session::SessionId;
use crate::turn::{next_turn, rotated_rank, rotation_queue};

use super::{GameId, MultiplayerStatus, RoundOutcome, ScoredGame, Throw, push_round};

/// A turn-based game between ranked players.
///
/// Whose turn it is, the winner, and the finished status are all derived
/// from the round history; only the lobby phase is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiplayerGame {
    pub(super) creator: UserId,
    pub(super) options: GameOptions,
    pub(super) date: NaiveDate,
    pub(super) waiting: bool,
    pub(super) players: Vec<Player>,
    pub(super) rounds: Vec<Round>,
    pub(super) session: Option<SessionId>,
    pub(super) next_game: Option<GameId>,
}

/// A player waiting for their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<'a> {
    /// The waiting player.
    pub player: &'a Player,
    /// Their score left.
    pub left_score: u16,
    /// Their preferred three-dart finish.
    pub checkout_suggestion: Option<&'static Checkout>,
}

/// Per-player figures shown at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    /// Mean points per round.
    pub average_points: f64,
    /// Rounds thrown.
    pub rounds: usize,
}

impl MultiplayerGame {
    /// Returns the account that created the game.
    #[must_use]
    pub const fn creator(&self) -> UserId {
        self.creator
    }

    /// Returns the date the game was played.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the session the game belongs to.
    #[must_use]
    pub const fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Returns the game created to follow this one, if any.
    #[must_use]
    pub const fn next_game(&self) -> Option<GameId> {
        self.next_game
    }

    pub(crate) const fn set_next_game(&mut self, game: GameId) {
        self.next_game = Some(game);
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Returns the player seated at `rank`.
    #[must_use]
    pub fn player_at(&self, rank: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.rank == rank)
    }

    /// Returns the seat held by `identity`.
    #[must_use]
    pub fn seat_of(&self, identity: &Identity) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| &player.identity == identity)
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> MultiplayerStatus {
        if self.waiting {
            MultiplayerStatus::Waiting
        } else if self.winner().is_some() {
            MultiplayerStatus::Finished
        } else {
            MultiplayerStatus::Progress
        }
    }

    /// Returns the player who checked out, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.rounds
            .last()
            .filter(|round| round.is_checkout())
            .and_then(|round| round.player)
            .and_then(|id| self.player(id))
    }

    /// Returns the rank whose turn it is.
    #[must_use]
    pub fn current_rank(&self) -> u8 {
        let last_rank = self
            .rounds
            .last()
            .and_then(|round| round.player)
            .and_then(|id| self.player(id))
            .map(|player| player.rank);
        next_turn(last_rank, self.options.max_players)
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.player_at(self.current_rank())
    }

    /// Returns the other players in throw order, next thrower first.
    #[must_use]
    pub fn queue(&self) -> Vec<QueueEntry<'_>> {
        rotation_queue(self.current_rank(), self.options.max_players)
            .into_iter()
            .filter_map(|rank| self.player_at(rank))
            .map(|player| {
                let left_score = self.left_score(Some(player.id));
                QueueEntry {
                    player,
                    left_score,
                    checkout_suggestion: checkout_suggestion(left_score, 3),
                }
            })
            .collect()
    }

    /// Returns the rounds thrown by `player`.
    pub fn rounds_of(&self, player: PlayerId) -> impl Iterator<Item = &Round> {
        self.rounds
            .iter()
            .filter(move |round| round.player == Some(player))
    }

    /// Returns average points and rounds thrown for `player`.
    #[must_use]
    pub fn player_summary(&self, player: PlayerId) -> PlayerSummary {
        let (points, rounds) = self
            .rounds_of(player)
            .fold((0_u32, 0_usize), |(points, rounds), round| {
                (points + u32::from(round.points), rounds + 1)
            });
        let average_points = if rounds == 0 {
            0.0
        } else {
            f64::from(points) / rounds as f64
        };
        PlayerSummary {
            average_points,
            rounds,
        }
    }

    /// Builds the next game of a series: same configuration and players,
    /// every player moved one seat earlier so the first thrower goes last.
    #[must_use]
    pub fn follow_up(&self, session: Option<SessionId>) -> Self {
        let max_players = self.options.max_players;
        let players = self
            .players
            .iter()
            .map(|player| Player {
                rank: rotated_rank(player.rank, max_players),
                ..player.clone()
            })
            .collect();

        Self {
            creator: self.creator,
            options: self.options.clone(),
            date: self.date,
            waiting: false,
            players,
            rounds: Vec::new(),
            session,
            next_game: None,
        }
    }
}

impl ScoredGame for MultiplayerGame {
    fn options(&self) -> &GameOptions {
        &self.options
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    fn is_over(&self) -> bool {
        self.status() == MultiplayerStatus::Finished
    }

    fn record_round(
        &mut self,
        player: Option<PlayerId>,
        throw: Throw,
    ) -> Result<RoundOutcome, RoundError> {
        if self.status() != MultiplayerStatus::Progress {
            return Err(RoundError::InvalidState);
        }

        let id = player.ok_or(RoundError::PlayerNotFound)?;
        let rank = self.player(id).ok_or(RoundError::PlayerNotFound)?.rank;
        let current = self.current_rank();
        if rank != current {
            log::warn!("player at rank {rank} threw during the turn of rank {current}");
            return Err(RoundError::NotYourTurn);
        }

        let round = push_round(&mut self.rounds, &self.options, player, throw)?;

        let winner = round.is_checkout().then_some(id);
        if winner.is_some() {
            log::info!(
                "rank {rank} checked out after {} rounds",
                self.rounds_of(id).count()
            );
        }

        Ok(RoundOutcome {
            accepted_points: round.points,
            left_score: round.left_after(),
            terminal: winner.is_some(),
            winner,
        })
    }

    fn undo_last_round(&mut self) -> Option<Round> {
        let round = self.rounds.pop();
        if let Some(round) = &round {
            log::debug!("undid round of {} points", round.points);
        }
        round
    }
}
