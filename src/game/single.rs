use alloc::vec::Vec;
use chrono::NaiveDate;

use crate::checkout::{Checkout, checkout_suggestion};
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::{PlayerId, UserId};
use crate::round::Round;
use crate::statistics::round_to;

use super::{GameStatus, RoundOutcome, ScoredGame, Throw, push_round};

/// A practice game: one implicit player working down from the starting
/// score within an optional round cap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinglePlayerGame {
    owner: UserId,
    options: GameOptions,
    date: NaiveDate,
    rounds: Vec<Round>,
}

/// Summary of a single-player game in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GameContext {
    /// Score left.
    pub left_score: u16,
    /// Rounds recorded so far.
    pub round_count: usize,
    /// Points scored so far.
    pub total_points: u16,
    /// Mean points per round, one decimal.
    pub average_score: f64,
    /// Share of the starting score already scored, in percent.
    pub progress_percentage: f64,
    /// Preferred three-dart finish from the current score.
    pub checkout_suggestion: Option<&'static Checkout>,
}

impl SinglePlayerGame {
    /// Creates a game for `owner` played on `date`.
    #[must_use]
    pub const fn new(owner: UserId, options: GameOptions, date: NaiveDate) -> Self {
        Self {
            owner,
            options,
            date,
            rounds: Vec::new(),
        }
    }

    /// Returns the account playing this game.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the date the game was played.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the current status, derived from the recorded rounds.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.rounds.last().is_some_and(Round::is_checkout) {
            GameStatus::Won
        } else if self.options.rounds > 0 && self.rounds.len() >= usize::from(self.options.rounds)
        {
            GameStatus::Lost
        } else {
            GameStatus::Progress
        }
    }

    /// Returns the total points scored.
    #[must_use]
    pub fn total_points(&self) -> u16 {
        self.rounds.iter().map(|round| round.points).sum()
    }

    /// Summarises the game for display.
    #[must_use]
    pub fn context(&self) -> GameContext {
        let left_score = self.left_score(None);
        let round_count = self.rounds.len();
        let total_points = self.total_points();

        let average_score = if round_count == 0 {
            0.0
        } else {
            round_to(f64::from(total_points) / round_count as f64, 10.0)
        };
        let progress_percentage = if self.options.score == 0 {
            0.0
        } else {
            f64::from(total_points) / f64::from(self.options.score) * 100.0
        };

        GameContext {
            left_score,
            round_count,
            total_points,
            average_score,
            progress_percentage,
            checkout_suggestion: checkout_suggestion(left_score, 3),
        }
    }
}

impl ScoredGame for SinglePlayerGame {
    fn options(&self) -> &GameOptions {
        &self.options
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    fn is_over(&self) -> bool {
        self.status() != GameStatus::Progress
    }

    fn record_round(
        &mut self,
        player: Option<PlayerId>,
        throw: Throw,
    ) -> Result<RoundOutcome, RoundError> {
        if player.is_some() {
            return Err(RoundError::PlayerNotFound);
        }
        if self.is_over() {
            return Err(RoundError::InvalidState);
        }

        let round = push_round(&mut self.rounds, &self.options, None, throw)?;

        let status = self.status();
        match status {
            GameStatus::Won => log::info!(
                "checked out {} in {} rounds",
                self.options.score,
                self.rounds.len()
            ),
            GameStatus::Lost => log::info!("out of rounds with {} left", round.left_after()),
            GameStatus::Progress => {}
        }

        Ok(RoundOutcome {
            accepted_points: round.points,
            left_score: round.left_after(),
            terminal: status != GameStatus::Progress,
            winner: None,
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
