//! Competitor identity and score arithmetic

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Opaque competitor identifier.
///
/// Two competitors are the same competitor iff their names are equal. The
/// ordering on names is only used as the last, deterministic standings
/// tie-break.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Competitor(String);

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Competitor(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Competitor {
    fn from(name: &str) -> Self {
        Competitor::new(name)
    }
}

impl From<String> for Competitor {
    fn from(name: String) -> Self {
        Competitor(name)
    }
}

impl Borrow<str> for Competitor {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Tournament score, stored as a count of half points.
///
/// Every score in the system (game points, byes, Buchholz sums) is a multiple
/// of 0.5, so keeping half points as an integer makes equality exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const HALF: Score = Score(1);
    pub const ONE: Score = Score(2);

    pub const fn from_half_points(half_points: u32) -> Self {
        Score(half_points)
    }

    /// Convert a point value such as `2.5`. Returns `None` for negative,
    /// non-finite or non-half-point values.
    pub fn from_points(points: f32) -> Option<Self> {
        if !points.is_finite() || points < 0.0 {
            return None;
        }
        let doubled = points * 2.0;
        if doubled.fract() != 0.0 {
            return None;
        }
        Some(Score(doubled as u32))
    }

    pub const fn half_points(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 2.0
    }

    /// Absolute difference between two scores
    pub fn abs_diff(self, other: Score) -> Score {
        Score(self.0.abs_diff(other.0))
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.1}", self.as_f32()))
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.as_f32())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = f32::deserialize(deserializer)?;
        Score::from_points(points).ok_or_else(|| {
            serde::de::Error::custom(format!("score must be a non-negative multiple of 0.5, got {}", points))
        })
    }
}
