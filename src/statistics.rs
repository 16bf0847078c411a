//! Read-only statistics over finished and running games.
//!
//! Rates are percentages rounded to two decimals. Every ratio is zero when
//! its denominator is zero.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use chrono::{Datelike, NaiveDate};

use crate::dart::MAX_ROUND_POINTS;
use crate::game::{GameStatus, MultiplayerGame, MultiplayerStatus, ScoredGame, SinglePlayerGame};
use crate::player::Identity;
use crate::round::Round;

#[cfg(feature = "std")]
pub(crate) fn round_to(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) fn round_to(value: f64, factor: f64) -> f64 {
    libm::round(value * factor) / factor
}

fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(f64::from(part) / f64::from(total) * 100.0, 100.0)
}

/// Three-dart average: points per dart scaled to a full visit.
fn three_dart_average(points: u32, darts: u32) -> f64 {
    if darts == 0 {
        return 0.0;
    }
    round_to(f64::from(points) / f64::from(darts) * 3.0, 100.0)
}

/// Number of visits in each high-score bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBrackets {
    /// 60..80 points.
    pub sixty_plus: u32,
    /// 80..100 points.
    pub eighty_plus: u32,
    /// 100..140 points.
    pub ton_plus: u32,
    /// 140..180 points.
    pub ton_forty_plus: u32,
    /// Exactly 180.
    pub ton_eighty: u32,
}

impl ScoreBrackets {
    /// Counts `points` in its bracket, if any.
    pub const fn add(&mut self, points: u16) {
        match points {
            60..80 => self.sixty_plus += 1,
            80..100 => self.eighty_plus += 1,
            100..140 => self.ton_plus += 1,
            140..MAX_ROUND_POINTS => self.ton_forty_plus += 1,
            MAX_ROUND_POINTS => self.ton_eighty += 1,
            _ => {}
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            sixty_plus: self.sixty_plus + other.sixty_plus,
            eighty_plus: self.eighty_plus + other.eighty_plus,
            ton_plus: self.ton_plus + other.ton_plus,
            ton_forty_plus: self.ton_forty_plus + other.ton_forty_plus,
            ton_eighty: self.ton_eighty + other.ton_eighty,
        }
    }
}

/// Aggregated figures for one family of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Games that reached a terminal state.
    pub total_games: u32,
    /// Points scored.
    pub total_points: u32,
    /// Visits thrown.
    pub total_rounds: u32,
    /// Darts thrown.
    pub total_darts: u32,
    /// High-score visits.
    pub brackets: ScoreBrackets,
    /// Visits aimed at a finishing double.
    pub checkout_attempts: u32,
    /// Visits that finished the game.
    pub checkouts: u32,
}

impl Statistics {
    /// Share of completed games won, in percent.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.total_games)
    }

    /// Share of completed games lost, in percent.
    #[must_use]
    pub fn loss_rate(&self) -> f64 {
        percentage(self.losses, self.total_games)
    }

    /// Three-dart average.
    #[must_use]
    pub fn average_points(&self) -> f64 {
        three_dart_average(self.total_points, self.total_darts)
    }

    /// Share of checkout attempts that finished the game, in percent.
    #[must_use]
    pub fn checkout_rate(&self) -> f64 {
        percentage(self.checkouts, self.checkout_attempts)
    }

    /// Adds one recorded visit.
    pub fn add_round(&mut self, round: &Round) {
        self.total_points += u32::from(round.points);
        self.total_rounds += 1;
        self.total_darts += u32::from(round.darts_thrown());
        self.brackets.add(round.points);
        if round.is_checkout_attempt() {
            self.checkout_attempts += 1;
            if round.is_checkout() {
                self.checkouts += 1;
            }
        }
    }

    /// Combines two sets of statistics.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            total_games: self.total_games + other.total_games,
            total_points: self.total_points + other.total_points,
            total_rounds: self.total_rounds + other.total_rounds,
            total_darts: self.total_darts + other.total_darts,
            brackets: self.brackets.merge(other.brackets),
            checkout_attempts: self.checkout_attempts + other.checkout_attempts,
            checkouts: self.checkouts + other.checkouts,
        }
    }
}

/// Average for one ISO calendar week.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyAverage {
    /// ISO week-numbering year.
    pub year: i32,
    /// ISO week (1..=53).
    pub week: u32,
    /// Three-dart average over the week's visits.
    pub average_points: f64,
}

/// Statistics of one player across both game families.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsSnapshot {
    /// Practice games.
    pub singleplayer: Statistics,
    /// Multiplayer games.
    pub multiplayer: Statistics,
    /// Practice averages per week, oldest first.
    pub weekly: Vec<WeeklyAverage>,
}

impl StatisticsSnapshot {
    /// Both families added together.
    #[must_use]
    pub fn combined(&self) -> Statistics {
        self.singleplayer.merge(self.multiplayer)
    }
}

/// Statistics over practice games.
#[must_use]
pub fn singleplayer_statistics<'a, I>(games: I) -> Statistics
where
    I: IntoIterator<Item = &'a SinglePlayerGame>,
{
    let mut stats = Statistics::default();
    for game in games {
        match game.status() {
            GameStatus::Won => stats.wins += 1,
            GameStatus::Lost => stats.losses += 1,
            GameStatus::Progress => {}
        }
        if game.status() != GameStatus::Progress {
            stats.total_games += 1;
        }
        for round in game.rounds() {
            stats.add_round(round);
        }
    }
    stats
}

/// Statistics over multiplayer games from the point of view of `identity`.
///
/// Only the identity's own visits count towards points and averages.
#[must_use]
pub fn multiplayer_statistics<'a, I>(games: I, identity: &Identity) -> Statistics
where
    I: IntoIterator<Item = &'a MultiplayerGame>,
{
    let mut stats = Statistics::default();
    for game in games {
        let Some(seat) = game.seat_of(identity) else {
            continue;
        };

        if game.status() == MultiplayerStatus::Finished {
            stats.total_games += 1;
            if game.winner().is_some_and(|winner| winner.id == seat.id) {
                stats.wins += 1;
            } else {
                stats.losses += 1;
            }
        }
        for round in game.rounds_of(seat.id) {
            stats.add_round(round);
        }
    }
    stats
}

/// Three-dart averages grouped by the ISO week each visit was played in.
#[must_use]
pub fn weekly_averages<'a, I>(rounds: I) -> Vec<WeeklyAverage>
where
    I: IntoIterator<Item = (NaiveDate, &'a Round)>,
{
    let mut weeks: BTreeMap<(i32, u32), (u32, u32)> = BTreeMap::new();
    for (date, round) in rounds {
        let week = date.iso_week();
        let entry = weeks.entry((week.year(), week.week())).or_default();
        entry.0 += u32::from(round.points);
        entry.1 += u32::from(round.darts_thrown());
    }

    weeks
        .into_iter()
        .map(|((year, week), (points, darts))| WeeklyAverage {
            year,
            week,
            average_points: three_dart_average(points, darts),
        })
        .collect()
}

/// Collects everything the statistics page shows for `identity`.
///
/// Practice games are expected to belong to `identity` already.
#[must_use]
pub fn get_statistics<'a, S, M>(
    games: S,
    multiplayer_games: M,
    identity: &Identity,
) -> StatisticsSnapshot
where
    S: IntoIterator<Item = &'a SinglePlayerGame> + Clone,
    M: IntoIterator<Item = &'a MultiplayerGame>,
{
    let weekly = weekly_averages(
        games
            .clone()
            .into_iter()
            .flat_map(|game| game.rounds().iter().map(move |round| (game.date(), round))),
    );

    StatisticsSnapshot {
        singleplayer: singleplayer_statistics(games),
        multiplayer: multiplayer_statistics(multiplayer_games, identity),
        weekly,
    }
}
