//! Checkout table: every way to finish a leg from a given score.
//!
//! The table is built once on first use and never changes afterwards. A
//! score has entries only if it can be finished with at most three darts
//! where the last dart is a double (bullseye included).

use core::fmt;

use alloc::vec::Vec;

use crate::dart::{BULL, Dart};
use crate::sync::Once;

/// Highest score that can be checked out in one visit.
pub const MAX_CHECKOUT: u16 = 170;

/// Scores of 2..=170 with no three-dart checkout.
pub const BOGEY_NUMBERS: [u16; 7] = [159, 162, 163, 165, 166, 168, 169];

/// Finishing doubles in order of preference.
const FINISH_PREFERENCE: [u8; 21] = [
    20, 16, 10, 8, 18, 12, 4, 14, 6, 2, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, BULL,
];

static TABLE: Once<Vec<Vec<Checkout>>> = Once::new();

/// A finishing sequence of one to three darts ending on a double.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkout {
    darts: Vec<Dart>,
}

impl Checkout {
    /// Returns the darts of the sequence in throwing order.
    #[must_use]
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    /// Returns the number of darts needed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.darts.len()
    }

    /// Always `false`; a checkout has at least one dart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Returns the points the sequence scores.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.darts.iter().map(|dart| dart.points()).sum()
    }

    /// Returns the finishing dart.
    #[must_use]
    pub fn last(&self) -> Option<Dart> {
        self.darts.last().copied()
    }

    fn finishes_on_bull(&self) -> bool {
        self.last() == Some(Dart::BULLSEYE)
    }

    /// Sort key: darts used, with the bullseye counted as one dart harder.
    fn difficulty(&self) -> usize {
        self.len() + usize::from(self.finishes_on_bull())
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dart) in self.darts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{dart}")?;
        }
        Ok(())
    }
}

/// Returns a single dart scoring exactly `points`, favouring singles.
fn one_dart(points: u16) -> Option<Dart> {
    let n = u8::try_from(points).ok()?;
    match points {
        1..=20 | 25 => Some(Dart::Single(n)),
        50 => Some(Dart::BULLSEYE),
        _ if points <= 60 && points % 3 == 0 => Some(Dart::Treble(n / 3)),
        _ if points <= 40 && points % 2 == 0 => Some(Dart::Double(n / 2)),
        _ => None,
    }
}

/// Returns two darts scoring exactly `points`, heaviest first dart.
fn two_darts(points: u16, board: &[Dart]) -> Option<(Dart, Dart)> {
    board
        .iter()
        .filter(|first| first.points() < points)
        .find_map(|&first| one_dart(points - first.points()).map(|second| (first, second)))
}

/// Shortest way to reach `score` finishing on `double`.
fn finish_on(score: u16, double: Dart, board: &[Dart]) -> Option<Checkout> {
    let rest = score.checked_sub(double.points())?;
    let darts = if rest == 0 {
        alloc::vec![double]
    } else if let Some(setup) = one_dart(rest) {
        alloc::vec![setup, double]
    } else {
        let (first, second) = two_darts(rest, board)?;
        alloc::vec![first, second, double]
    };
    Some(Checkout { darts })
}

fn build_table() -> Vec<Vec<Checkout>> {
    let board = Dart::all();
    (0..=MAX_CHECKOUT)
        .map(|score| {
            let mut checkouts: Vec<Checkout> = FINISH_PREFERENCE
                .iter()
                .filter_map(|&n| finish_on(score, Dart::Double(n), &board))
                .collect();
            // Stable sort keeps the finishing-double preference within a tier.
            checkouts.sort_by_key(Checkout::difficulty);
            checkouts
        })
        .collect()
}

fn table() -> &'static [Vec<Checkout>] {
    TABLE.call_once(build_table)
}

/// Returns all listed checkouts for `score`, most preferred first.
///
/// Scores above 170, below 2, and bogey numbers yield an empty slice.
///
/// # Example
///
/// ```
/// let finishes = dartrs::checkouts(100);
/// assert_eq!(finishes[0].to_string(), "T20 D20");
/// assert!(dartrs::checkouts(169).is_empty());
/// ```
#[must_use]
pub fn checkouts(score: u16) -> &'static [Checkout] {
    table()
        .get(usize::from(score))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Returns whether `score` can be finished in a single visit.
#[must_use]
pub fn is_checkout(score: u16) -> bool {
    !checkouts(score).is_empty()
}

/// Suggests the preferred checkout for `score` using at most `throws_left` darts.
///
/// # Example
///
/// ```
/// assert_eq!(
///     dartrs::checkout_suggestion(50, 3).map(ToString::to_string).as_deref(),
///     Some("S10 D20")
/// );
/// assert_eq!(
///     dartrs::checkout_suggestion(50, 1).map(ToString::to_string).as_deref(),
///     Some("BULL")
/// );
/// ```
#[must_use]
pub fn checkout_suggestion(score: u16, throws_left: u8) -> Option<&'static Checkout> {
    checkouts(score)
        .iter()
        .find(|checkout| checkout.len() <= usize::from(throws_left))
}
