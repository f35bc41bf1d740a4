//! Error types for tournament operations

use crate::competitor::Competitor;

/// Broad classification of a [`TournamentError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied a bad roster, round count, result or pairing list
    InvalidInput,
    /// Operation called in the wrong tournament phase (programming error)
    StateMisuse,
}

/// Error types for tournament operations
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TournamentError {
    #[error("at least two competitors are required, got {found}")]
    NotEnoughCompetitors { found: usize },

    #[error("competitor listed more than once: {0}")]
    DuplicateCompetitor(Competitor),

    #[error("round count must be positive, got {0}")]
    InvalidRoundCount(usize),

    #[error("unrecognised result {0:?} (expected 1-0, 0-1 or 1/2-1/2)")]
    UnknownOutcome(String),

    #[error("round {round} has {expected} pairings but {found} results were given")]
    ResultCountMismatch {
        round: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid pairing list: {0}")]
    InvalidPairing(String),

    #[error("round {0} is still in progress")]
    RoundInProgress(usize),

    #[error("no round is in progress")]
    NoRoundInProgress,

    #[error("all {0} rounds have already been played")]
    TournamentFinished(usize),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::NotEnoughCompetitors { .. }
            | TournamentError::DuplicateCompetitor(_)
            | TournamentError::InvalidRoundCount(_)
            | TournamentError::UnknownOutcome(_)
            | TournamentError::ResultCountMismatch { .. }
            | TournamentError::InvalidPairing(_) => ErrorKind::InvalidInput,
            TournamentError::RoundInProgress(_)
            | TournamentError::NoRoundInProgress
            | TournamentError::TournamentFinished(_) => ErrorKind::StateMisuse,
        }
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TournamentError::NotEnoughCompetitors { found: 1 }.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TournamentError::UnknownOutcome("2-0".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TournamentError::InvalidPairing("A paired with themself".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(TournamentError::RoundInProgress(3).kind(), ErrorKind::StateMisuse);
        assert_eq!(TournamentError::NoRoundInProgress.kind(), ErrorKind::StateMisuse);
    }

    #[test]
    fn test_error_messages() {
        let err = TournamentError::ResultCountMismatch {
            round: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "round 2 has 4 pairings but 3 results were given"
        );
        assert_eq!(
            TournamentError::DuplicateCompetitor(Competitor::from("Vera")).to_string(),
            "competitor listed more than once: Vera"
        );
    }
}
