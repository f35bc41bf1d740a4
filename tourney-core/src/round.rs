//! Per-round records

use serde::Serialize;

use crate::competitor::Competitor;
use crate::outcome::{Outcome, Pairing};

/// Pairings produced for one round, before any result is known
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RoundPairing {
    pub pairings: Vec<Pairing>,
    pub bye: Option<Competitor>,
    /// Competitors left without an opponent this round. They sit the round
    /// out without a point.
    pub unpaired: Vec<Competitor>,
}

impl RoundPairing {
    pub fn new(pairings: Vec<Pairing>, bye: Option<Competitor>) -> Self {
        Self {
            pairings,
            bye,
            unpaired: Vec::new(),
        }
    }

    /// Every competitor mentioned in this round, in pairing order
    pub fn participants(&self) -> impl Iterator<Item = &Competitor> {
        self.pairings
            .iter()
            .flat_map(|p| [&p.first, &p.second])
            .chain(self.bye.iter())
            .chain(self.unpaired.iter())
    }
}

/// One recorded game
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub pairing: Pairing,
    pub outcome: Outcome,
}

/// Everything that happened in one round.
///
/// Created empty when the round count is fixed, filled in when the round is
/// reached, frozen once completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    number: usize,
    pairings: Vec<Pairing>,
    bye: Option<Competitor>,
    unpaired: Vec<Competitor>,
    results: Vec<GameRecord>,
    completed: bool,
}

impl RoundRecord {
    pub(crate) fn empty(number: usize) -> Self {
        Self {
            number,
            pairings: Vec::new(),
            bye: None,
            unpaired: Vec::new(),
            results: Vec::new(),
            completed: false,
        }
    }

    pub(crate) fn populate(&mut self, pairing: RoundPairing) {
        self.pairings = pairing.pairings;
        self.bye = pairing.bye;
        self.unpaired = pairing.unpaired;
    }

    pub(crate) fn complete(&mut self, results: Vec<GameRecord>) {
        self.results = results;
        self.completed = true;
    }

    /// 1-based round number
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn bye(&self) -> Option<&Competitor> {
        self.bye.as_ref()
    }

    pub fn unpaired(&self) -> &[Competitor] {
        &self.unpaired
    }

    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_pairing_participants() {
        let round = RoundPairing::new(
            vec![
                Pairing::new("A".into(), "B".into()),
                Pairing::new("C".into(), "D".into()),
            ],
            Some("E".into()),
        );
        let names: Vec<&str> = round.participants().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_round_record_lifecycle() {
        let mut record = RoundRecord::empty(2);
        assert_eq!(record.number(), 2);
        assert!(record.pairings().is_empty());
        assert!(!record.is_completed());

        let pairing = Pairing::new("A".into(), "B".into());
        record.populate(RoundPairing::new(vec![pairing.clone()], None));
        assert_eq!(record.pairings(), &[pairing.clone()]);

        record.complete(vec![GameRecord {
            pairing,
            outcome: Outcome::Draw,
        }]);
        assert!(record.is_completed());
        assert_eq!(record.results().len(), 1);
    }
}
