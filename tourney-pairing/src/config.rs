//! Configuration types for tournament formats
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

/// Largest field that gets a round-robin when the format is chosen automatically
pub const ROUND_ROBIN_MAX_FIELD: usize = 8;

/// Lower bound on the recommended Swiss round count
pub const SWISS_MIN_ROUNDS: usize = 3;

/// Upper bound on the recommended Swiss round count
pub const SWISS_MAX_ROUNDS: usize = 11;

/// Tournament format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentFormat {
    /// Everyone meets everyone once
    #[default]
    RoundRobin,
    /// Everyone meets everyone twice
    DoubleRoundRobin,
    /// Pair by score, limited rounds
    Swiss { rounds: usize },
}

impl TournamentFormat {
    /// Format picked for a field when the organiser does not choose one:
    /// small fields play a single round-robin, larger ones a Swiss with the
    /// default round count.
    pub fn auto(field_size: usize) -> Self {
        if field_size <= ROUND_ROBIN_MAX_FIELD {
            TournamentFormat::RoundRobin
        } else {
            TournamentFormat::Swiss {
                rounds: RoundBounds::swiss(field_size).default,
            }
        }
    }

    /// Number of rounds this format plays for a field of `field_size`
    pub fn total_rounds(&self, field_size: usize) -> usize {
        match *self {
            TournamentFormat::RoundRobin => circuit_length(field_size),
            TournamentFormat::DoubleRoundRobin => 2 * circuit_length(field_size),
            TournamentFormat::Swiss { rounds } => rounds,
        }
    }

    pub fn is_round_robin(&self) -> bool {
        matches!(
            self,
            TournamentFormat::RoundRobin | TournamentFormat::DoubleRoundRobin
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "round-robin",
            TournamentFormat::DoubleRoundRobin => "double round-robin",
            TournamentFormat::Swiss { .. } => "swiss",
        }
    }
}

/// Rounds in one round-robin circuit: N - 1 for an even field, N for an odd
/// field (everyone sits out once).
pub fn circuit_length(field_size: usize) -> usize {
    match field_size {
        0 | 1 => 0,
        n if n % 2 == 1 => n,
        n => n - 1,
    }
}

/// Recommended round-count range for a Swiss tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundBounds {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl RoundBounds {
    /// Bounds for a Swiss field.
    ///
    /// The maximum is the circuit length (more rounds would force rematches),
    /// capped at [`SWISS_MAX_ROUNDS`]. The minimum is enough rounds to
    /// separate a single winner, `ceil(log2 N)`, but at least
    /// [`SWISS_MIN_ROUNDS`], and never above the maximum.
    pub fn swiss(field_size: usize) -> Self {
        let max = circuit_length(field_size).min(SWISS_MAX_ROUNDS);
        let min = ceil_log2(field_size).max(SWISS_MIN_ROUNDS).min(max);
        let default = (min + 2).min(max);
        Self { min, max, default }
    }

    pub fn contains(&self, rounds: usize) -> bool {
        (self.min..=self.max).contains(&rounds)
    }
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Tournament format
    pub format: TournamentFormat,
    /// Random seed for reproducible pairings (None = random)
    pub seed: Option<u64>,
    /// Draw the first Swiss round at random instead of running the
    /// score-based pairer on an all-zero field
    pub random_first_round: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            format: TournamentFormat::RoundRobin,
            seed: None,
            random_first_round: true,
        }
    }
}

impl TournamentConfig {
    /// Create single round-robin config
    pub fn round_robin() -> Self {
        Self::default()
    }

    /// Create double round-robin config
    pub fn double_round_robin() -> Self {
        Self {
            format: TournamentFormat::DoubleRoundRobin,
            ..Default::default()
        }
    }

    /// Create Swiss config
    pub fn swiss(rounds: usize) -> Self {
        Self {
            format: TournamentFormat::Swiss { rounds },
            ..Default::default()
        }
    }

    /// Format chosen from the field size
    pub fn auto(field_size: usize) -> Self {
        Self {
            format: TournamentFormat::auto(field_size),
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pair the first Swiss round with the score-based pairer
    pub fn without_random_first_round(mut self) -> Self {
        self.random_first_round = false;
        self
    }
}
