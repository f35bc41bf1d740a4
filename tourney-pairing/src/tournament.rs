//! Tournament controller - round-robin and Swiss formats
//!
//! Level 1 - Orchestration
//!
//! A `Tournament` owns one `TournamentState` and drives it round by round:
//! pair the next round, accept its results, report standings. Rounds are
//! strictly sequential; pairing round r + 1 before round r is complete is a
//! `RoundInProgress` error.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tourney_core::{Competitor, Outcome, Result, RoundPairing, RoundRecord, TournamentState};

use crate::color::ColorBalancer;
use crate::config::{TournamentConfig, TournamentFormat};
use crate::schedule::{generate_round_robin, ScheduledRound};
use crate::standings::{annotate_sides, rank, Standing};
use crate::swiss::{opening_draw, pair_round};
use crate::tiebreak::buchholz;

/// A running tournament
pub struct Tournament<R: Rng = ChaCha8Rng> {
    config: TournamentConfig,
    state: TournamentState,
    /// Fixed round-robin schedule; empty for Swiss
    schedule: Vec<ScheduledRound>,
    rng: R,
}

impl Tournament<ChaCha8Rng> {
    /// Create a tournament seeded from `config.seed` (or entropy)
    pub fn new(competitors: Vec<Competitor>, config: TournamentConfig) -> Result<Self> {
        let rng = create_rng(config.seed);
        Self::with_rng(competitors, config, rng)
    }
}

impl<R: Rng> Tournament<R> {
    /// Create a tournament with an explicit random source.
    ///
    /// # Errors
    /// Any `InvalidInput` error from [`TournamentState::new`].
    pub fn with_rng(competitors: Vec<Competitor>, config: TournamentConfig, rng: R) -> Result<Self> {
        let total_rounds = config.format.total_rounds(competitors.len());
        let state = TournamentState::new(competitors, total_rounds)?;

        let schedule = if config.format.is_round_robin() {
            generate_round_robin(state.competitors(), total_rounds)
        } else {
            Vec::new()
        };

        tracing::info!(
            "Starting {} tournament: {} competitors, {} rounds",
            config.format.name(),
            state.competitors().len(),
            total_rounds
        );

        Ok(Self {
            config,
            state,
            schedule,
            rng,
        })
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Pair the next round and make it current.
    ///
    /// # Errors
    /// `RoundInProgress` if the current round has no results yet,
    /// `TournamentFinished` after the last round.
    pub fn start_next_round(&mut self) -> Result<&RoundRecord> {
        let pairing = match self.config.format {
            TournamentFormat::RoundRobin | TournamentFormat::DoubleRoundRobin => {
                self.scheduled_pairing()?
            }
            TournamentFormat::Swiss { .. } => self.swiss_pairing()?,
        };
        self.state.begin_round(pairing)
    }

    /// Record one outcome per pairing of the current round, in pairing order
    pub fn record_results(&mut self, outcomes: &[Outcome]) -> Result<&RoundRecord> {
        self.state.complete_round(outcomes)
    }

    /// Like [`record_results`](Self::record_results), parsing result tokens
    /// such as `1-0`. Nothing is applied if any token is unrecognised.
    pub fn record_result_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<&RoundRecord> {
        let outcomes = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Outcome>())
            .collect::<Result<Vec<_>>>()?;
        self.record_results(&outcomes)
    }

    /// Current standings with Buchholz and side balance
    pub fn standings(&self) -> Vec<Standing> {
        let state = &self.state;
        let tiebreaks = buchholz(state.competitors(), state.scores(), state.opponents());
        let mut rows = rank(state.competitors(), state.scores(), &tiebreaks);
        annotate_sides(&mut rows, state.colors());
        rows
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    pub fn schedule(&self) -> &[ScheduledRound] {
        &self.schedule
    }

    pub fn current_round(&self) -> usize {
        self.state.current_round()
    }

    pub fn total_rounds(&self) -> usize {
        self.state.total_rounds()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    // ========================================================================
    // Level 3 - Steps
    // ========================================================================

    /// Next round of the fixed schedule, sides balanced against history
    fn scheduled_pairing(&self) -> Result<RoundPairing> {
        let number = self.state.next_round_number()?;
        let scheduled = self
            .schedule
            .get(number - 1)
            .cloned()
            .unwrap_or_default();

        let balancer = ColorBalancer::new(self.state.colors(), number, self.state.total_rounds());
        let mut round = scheduled.into_round_pairing();
        round.pairings = round
            .pairings
            .into_iter()
            .map(|p| balancer.balance(p))
            .collect();
        Ok(round)
    }

    fn swiss_pairing(&mut self) -> Result<RoundPairing> {
        let random_first_round = self.config.random_first_round;
        let ctx = self.state.pairing_context()?;
        if ctx.round == 1 && random_first_round {
            Ok(opening_draw(ctx, &mut self.rng))
        } else {
            Ok(pair_round(ctx, &mut self.rng))
        }
    }
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
