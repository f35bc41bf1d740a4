//! Sides, game outcomes and pairings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::competitor::{Competitor, Score};
use crate::error::TournamentError;

/// Side of the board (or court, or table) a competitor takes in one game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First-move side
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Result of one game, from the point of view of the pairing order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// Points awarded as `(first, second)`. Always sums to one full point.
    pub fn points(self) -> (Score, Score) {
        match self {
            Outcome::FirstWins => (Score::ONE, Score::ZERO),
            Outcome::SecondWins => (Score::ZERO, Score::ONE),
            Outcome::Draw => (Score::HALF, Score::HALF),
        }
    }

    /// Conventional result token
    pub fn token(self) -> &'static str {
        match self {
            Outcome::FirstWins => "1-0",
            Outcome::SecondWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl FromStr for Outcome {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1-0" | "first" => Ok(Outcome::FirstWins),
            "0-1" | "second" => Ok(Outcome::SecondWins),
            "1/2-1/2" | "½-½" | "draw" => Ok(Outcome::Draw),
            _ => Err(TournamentError::UnknownOutcome(s.to_string())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

/// One scheduled meeting. The order encodes side assignment, not ranking.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Competitor,
    pub second: Competitor,
}

impl Pairing {
    pub fn new(first: Competitor, second: Competitor) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, competitor: &Competitor) -> bool {
        self.first == *competitor || self.second == *competitor
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}
