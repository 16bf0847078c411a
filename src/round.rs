//! Round records and the rules that score a visit.

use crate::checkout::is_checkout;
use crate::dart::{IMPOSSIBLE_POINTS, MAX_ROUND_POINTS};
use crate::options::CheckoutMode;
use crate::player::PlayerId;

/// Scores a visit of `raw_points` thrown from `left_score`.
///
/// Returns the points to record, which are zero when the throw is illegal:
///
/// * the total is clamped to `0..=180` first;
/// * a bust (below zero, or exactly one left) scores nothing;
/// * a finish must be a listed checkout and satisfy `checkout`;
/// * totals no three darts can score are always rejected.
///
/// The result never exceeds `left_score`.
///
/// # Example
///
/// ```
/// use dartrs::{CheckoutMode, round_points};
///
/// assert_eq!(round_points(501, 60, CheckoutMode::Any, false), 60);
/// assert_eq!(round_points(100, 100, CheckoutMode::Any, false), 100);
/// assert_eq!(round_points(100, 100, CheckoutMode::DoubleOut, false), 0);
/// assert_eq!(round_points(61, 60, CheckoutMode::Any, false), 0);
/// ```
#[must_use]
pub fn round_points(
    left_score: u16,
    raw_points: i32,
    checkout: CheckoutMode,
    ended_on_double: bool,
) -> u16 {
    let points = u16::try_from(raw_points.clamp(0, i32::from(MAX_ROUND_POINTS))).unwrap_or(0);

    let Some(left) = left_score.checked_sub(points) else {
        return 0;
    };
    if left == 1 {
        return 0;
    }
    if left == 0 && !(is_checkout(points) && checkout.accepts_finish(ended_on_double)) {
        return 0;
    }
    if IMPOSSIBLE_POINTS.contains(&points) {
        return 0;
    }

    points
}

/// One recorded visit at the oche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    /// Thrower, `None` in single-player games.
    pub player: Option<PlayerId>,
    /// Accepted points (0..=180).
    pub points: u16,
    /// Darts needed, when known (1..=3).
    pub darts: Option<u8>,
    /// Score the thrower had left before this visit.
    pub left_before: u16,
    /// The thrower reported going for a double with the last dart.
    pub on_double: bool,
}

impl Round {
    /// Score left after this visit.
    #[must_use]
    pub const fn left_after(&self) -> u16 {
        self.left_before.saturating_sub(self.points)
    }

    /// Returns whether the visit finished the leg.
    #[must_use]
    pub const fn is_checkout(&self) -> bool {
        self.points > 0 && self.left_after() == 0
    }

    /// Returns whether the visit was a shot at a double to win the leg.
    ///
    /// A finish always counts. Otherwise the thrower must have stood on a
    /// listed checkout and reported going for the double.
    #[must_use]
    pub fn is_checkout_attempt(&self) -> bool {
        self.is_checkout() || (self.on_double && is_checkout(self.left_before))
    }

    /// Darts counted for averages; an unrecorded count is a full visit.
    #[must_use]
    pub fn darts_thrown(&self) -> u16 {
        u16::from(self.darts.unwrap_or(3))
    }
}
