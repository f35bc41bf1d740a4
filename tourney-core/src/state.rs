//! Tournament state - the single owned record of a running tournament
//!
//! All mutation goes through three operations:
//! - `new`: validate the roster and round count, create empty round records
//! - `begin_round`: attach a pairing list to the next round
//! - `complete_round`: apply results and freeze the round
//!
//! Completed rounds are never rolled back.

use rustc_hash::FxHashSet;

use crate::competitor::{Competitor, Score};
use crate::error::{Result, TournamentError};
use crate::history::{ByeHistory, ColorHistory, OpponentLog, PlayedPairSet, Scoreboard};
use crate::outcome::{Outcome, Side};
use crate::round::{GameRecord, RoundPairing, RoundRecord};

/// Mutable state of one tournament
#[derive(Clone, Debug)]
pub struct TournamentState {
    competitors: Vec<Competitor>,
    total_rounds: usize,
    scores: Scoreboard,
    opponents: OpponentLog,
    played: PlayedPairSet,
    byes: ByeHistory,
    colors: ColorHistory,
    rounds: Vec<RoundRecord>,
    /// 1-based number of the latest round that was begun, 0 before the first
    current_round: usize,
}

/// Borrowed view handed to a pairing procedure for the upcoming round.
///
/// Everything is read-only except the played-pair set, which a pairer may
/// only grow.
pub struct PairingContext<'a> {
    pub competitors: &'a [Competitor],
    pub scores: &'a Scoreboard,
    pub byes: &'a ByeHistory,
    pub colors: &'a ColorHistory,
    pub played: &'a mut PlayedPairSet,
    /// 1-based number of the round being paired
    pub round: usize,
    pub total_rounds: usize,
}

impl TournamentState {
    /// Create the state for a validated roster.
    ///
    /// # Errors
    /// `NotEnoughCompetitors` for fewer than two entries,
    /// `DuplicateCompetitor` if a name repeats, `InvalidRoundCount` for zero
    /// rounds.
    pub fn new(competitors: Vec<Competitor>, total_rounds: usize) -> Result<Self> {
        if competitors.len() < 2 {
            return Err(TournamentError::NotEnoughCompetitors {
                found: competitors.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for competitor in &competitors {
            if !seen.insert(competitor) {
                return Err(TournamentError::DuplicateCompetitor(competitor.clone()));
            }
        }

        if total_rounds == 0 {
            return Err(TournamentError::InvalidRoundCount(total_rounds));
        }

        Ok(Self {
            scores: Scoreboard::new(&competitors),
            competitors,
            total_rounds,
            opponents: OpponentLog::new(),
            played: PlayedPairSet::new(),
            byes: ByeHistory::new(),
            colors: ColorHistory::new(),
            rounds: (1..=total_rounds).map(RoundRecord::empty).collect(),
            current_round: 0,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Latest begun round (1-based), or 0 before the first round
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn score(&self, competitor: &Competitor) -> Score {
        self.scores.get(competitor)
    }

    pub fn opponents(&self) -> &OpponentLog {
        &self.opponents
    }

    pub fn played_pairs(&self) -> &PlayedPairSet {
        &self.played
    }

    pub fn byes(&self) -> &ByeHistory {
        &self.byes
    }

    pub fn colors(&self) -> &ColorHistory {
        &self.colors
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Record for a 1-based round number
    pub fn round(&self, number: usize) -> Option<&RoundRecord> {
        number.checked_sub(1).and_then(|i| self.rounds.get(i))
    }

    pub fn current_record(&self) -> Option<&RoundRecord> {
        self.round(self.current_round)
    }

    /// True while a round has been paired but its results are not in
    pub fn round_in_progress(&self) -> bool {
        self.current_record().is_some_and(|r| !r.is_completed())
    }

    pub fn is_finished(&self) -> bool {
        self.current_round == self.total_rounds && !self.round_in_progress()
    }

    /// Games recorded across all completed rounds
    pub fn games_played(&self) -> usize {
        self.rounds.iter().map(|r| r.results().len()).sum()
    }

    /// Bye points awarded across all completed rounds
    pub fn byes_awarded(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.is_completed() && r.bye().is_some())
            .count()
    }

    // ========================================================================
    // Round lifecycle
    // ========================================================================

    /// Number of the round that may be paired next.
    ///
    /// # Errors
    /// `RoundInProgress` if the current round has no results yet,
    /// `TournamentFinished` once every round is complete.
    pub fn next_round_number(&self) -> Result<usize> {
        if self.round_in_progress() {
            return Err(TournamentError::RoundInProgress(self.current_round));
        }
        if self.current_round >= self.total_rounds {
            return Err(TournamentError::TournamentFinished(self.total_rounds));
        }
        Ok(self.current_round + 1)
    }

    /// Split the state into the view a pairer needs for the next round
    pub fn pairing_context(&mut self) -> Result<PairingContext<'_>> {
        let round = self.next_round_number()?;
        Ok(PairingContext {
            competitors: &self.competitors,
            scores: &self.scores,
            byes: &self.byes,
            colors: &self.colors,
            played: &mut self.played,
            round,
            total_rounds: self.total_rounds,
        })
    }

    /// Attach pairings to the next round and make it current.
    ///
    /// The bye recipient joins the bye history immediately; its point is
    /// awarded when the round completes.
    pub fn begin_round(&mut self, pairing: RoundPairing) -> Result<&RoundRecord> {
        let number = self.next_round_number()?;
        self.validate_pairing(&pairing)?;

        if let Some(bye) = &pairing.bye {
            self.byes.insert(bye);
        }

        tracing::info!(
            "Round {}/{} paired: {} games, bye={}",
            number,
            self.total_rounds,
            pairing.pairings.len(),
            pairing.bye.as_ref().map(Competitor::name).unwrap_or("none")
        );

        let index = number - 1;
        self.rounds[index].populate(pairing);
        self.current_round = number;
        Ok(&self.rounds[index])
    }

    /// Apply one outcome per pairing of the current round, in pairing order.
    ///
    /// # Errors
    /// `NoRoundInProgress` if there is no open round,
    /// `ResultCountMismatch` if `outcomes` does not match the pairing count.
    pub fn complete_round(&mut self, outcomes: &[Outcome]) -> Result<&RoundRecord> {
        if !self.round_in_progress() {
            return Err(TournamentError::NoRoundInProgress);
        }

        let index = self.current_round - 1;
        let expected = self.rounds[index].pairings().len();
        if outcomes.len() != expected {
            return Err(TournamentError::ResultCountMismatch {
                round: self.current_round,
                expected,
                found: outcomes.len(),
            });
        }

        let results: Vec<GameRecord> = self.rounds[index]
            .pairings()
            .iter()
            .zip(outcomes)
            .map(|(pairing, &outcome)| GameRecord {
                pairing: pairing.clone(),
                outcome,
            })
            .collect();

        for game in &results {
            let (first, second) = (&game.pairing.first, &game.pairing.second);
            let (first_points, second_points) = game.outcome.points();

            self.opponents.record(first, second);
            self.played.insert(first, second);
            self.colors.record(first, Side::First);
            self.colors.record(second, Side::Second);
            self.scores.award(first, first_points);
            self.scores.award(second, second_points);
        }

        if let Some(bye) = self.rounds[index].bye().cloned() {
            self.scores.award(&bye, Score::ONE);
        }

        self.rounds[index].complete(results);
        tracing::info!("Round {}/{} completed", self.current_round, self.total_rounds);

        Ok(&self.rounds[index])
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate_pairing(&self, pairing: &RoundPairing) -> Result<()> {
        let roster: FxHashSet<&Competitor> = self.competitors.iter().collect();
        let mut seen = FxHashSet::default();

        for p in &pairing.pairings {
            if p.first == p.second {
                return Err(TournamentError::InvalidPairing(format!(
                    "{} is paired against itself",
                    p.first
                )));
            }
        }

        for competitor in pairing.participants() {
            if !roster.contains(competitor) {
                return Err(TournamentError::InvalidPairing(format!(
                    "{} is not registered",
                    competitor
                )));
            }
            if !seen.insert(competitor) {
                return Err(TournamentError::InvalidPairing(format!(
                    "{} appears more than once",
                    competitor
                )));
            }
        }

        Ok(())
    }
}
