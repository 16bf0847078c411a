//! Dart segments and board arithmetic.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseDartError;

/// Number printed on the bullseye segment.
pub const BULL: u8 = 25;

/// Highest total a single visit of three darts can score.
pub const MAX_ROUND_POINTS: u16 = 180;

/// Totals of 1..=180 that no combination of three darts can score.
pub const IMPOSSIBLE_POINTS: [u16; 9] = [163, 166, 169, 172, 173, 175, 176, 178, 179];

/// A single dart landing on a scoring segment.
///
/// Numbers are 1..=20 or [`BULL`]. The outer bull is `Single(25)` and the
/// bullseye is `Double(25)`; there is no treble bull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dart {
    /// Single segment.
    Single(u8),
    /// Double ring.
    Double(u8),
    /// Treble ring.
    Treble(u8),
}

impl Dart {
    /// The bullseye (double 25).
    pub const BULLSEYE: Self = Self::Double(BULL);

    /// Points scored by this dart.
    #[must_use]
    pub const fn points(self) -> u16 {
        match self {
            Self::Single(n) => n as u16,
            Self::Double(n) => n as u16 * 2,
            Self::Treble(n) => n as u16 * 3,
        }
    }

    /// Returns whether this dart is a legal finishing dart.
    #[must_use]
    pub const fn is_double(self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// Returns whether the dart names a segment that exists on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Single(n) | Self::Double(n) => matches!(n, 1..=20 | BULL),
            Self::Treble(n) => matches!(n, 1..=20),
        }
    }

    /// Every scoring dart on the board, highest points first.
    ///
    /// Darts worth the same points are ordered treble, double, single.
    #[must_use]
    pub fn all() -> alloc::vec::Vec<Self> {
        let mut darts = alloc::vec::Vec::with_capacity(62);
        for n in (1..=20).rev() {
            darts.push(Self::Treble(n));
        }
        darts.push(Self::Double(BULL));
        for n in (1..=20).rev() {
            darts.push(Self::Double(n));
        }
        darts.push(Self::Single(BULL));
        for n in (1..=20).rev() {
            darts.push(Self::Single(n));
        }
        darts.sort_by(|a, b| b.points().cmp(&a.points()).then(a.rank().cmp(&b.rank())));
        darts
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Treble(_) => 0,
            Self::Double(_) => 1,
            Self::Single(_) => 2,
        }
    }
}

impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BULLSEYE => f.write_str("BULL"),
            Self::Single(n) => write!(f, "S{n}"),
            Self::Double(n) => write!(f, "D{n}"),
            Self::Treble(n) => write!(f, "T{n}"),
        }
    }
}

impl FromStr for Dart {
    type Err = ParseDartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "BULL" {
            return Ok(Self::BULLSEYE);
        }

        let mut chars = s.chars();
        let kind = chars.next().ok_or(ParseDartError::Empty)?;
        let number: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseDartError::InvalidNumber)?;

        let dart = match kind {
            'S' => Self::Single(number),
            'D' => Self::Double(number),
            'T' => Self::Treble(number),
            _ => return Err(ParseDartError::InvalidMultiplier),
        };

        if dart.is_valid() {
            Ok(dart)
        } else {
            Err(ParseDartError::NoSuchSegment)
        }
    }
}

/// Returns whether `points` can be scored by a visit of up to three darts.
#[must_use]
pub fn is_possible_round(points: u16) -> bool {
    points <= MAX_ROUND_POINTS && !IMPOSSIBLE_POINTS.contains(&points)
}
