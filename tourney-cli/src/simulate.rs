//! Simulate command - play a whole tournament with random outcomes
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: simulate_tournament(), report_results()
//! - Level 3: random_outcome()
//! - Level 4: create_rng()

use anyhow::{bail, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use tourney_core::{Competitor, Outcome, RoundRecord};
use tourney_pairing::{Standing, Tournament, TournamentConfig, TournamentFormat};

use crate::report::{format_round, format_standings, print_json};
use crate::setup::{resolve_config, FormatArg, RosterArgs};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Tournament format
    #[arg(long, value_enum, default_value = "auto")]
    pub format: FormatArg,

    /// Swiss round count (default: recommended for the field size)
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Probability that a game is drawn (0.0-1.0)
    #[arg(long, default_value = "0.1")]
    pub draw_rate: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    format: TournamentFormat,
    rounds: &'a [RoundRecord],
    standings: Vec<Standing>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load the roster and resolve the format
/// 2. Play every round with random outcomes
/// 3. Report rounds and final standings
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    if !(0.0..=1.0).contains(&args.draw_rate) {
        bail!("--draw-rate must be between 0 and 1, got {}", args.draw_rate);
    }

    let field = args.roster.load()?;
    let config = resolve_config(args.format, args.rounds, field.len(), seed)?;
    let mut outcome_rng = create_rng(seed);

    let tournament = simulate_tournament(field, config, args.draw_rate, &mut outcome_rng)?;

    report_results(&tournament, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play every round of a tournament, drawing outcomes from `rng`
pub fn simulate_tournament<R: Rng>(
    field: Vec<Competitor>,
    config: TournamentConfig,
    draw_rate: f64,
    rng: &mut R,
) -> Result<Tournament> {
    let mut tournament = Tournament::new(field, config)?;

    while !tournament.is_finished() {
        let games = tournament.start_next_round()?.pairings().len();
        let outcomes: Vec<Outcome> = (0..games).map(|_| random_outcome(rng, draw_rate)).collect();
        let record = tournament.record_results(&outcomes)?;
        tracing::debug!("Round {} simulated: {} games", record.number(), games);
    }

    Ok(tournament)
}

fn report_results(tournament: &Tournament, json: bool) -> Result<()> {
    let standings = tournament.standings();
    if json {
        return print_json(&SimulationReport {
            format: tournament.config().format,
            rounds: tournament.state().rounds(),
            standings,
        });
    }

    for record in tournament.state().rounds() {
        print!("{}", format_round(record, tournament.total_rounds()));
    }
    print!("{}", format_standings(&standings));
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn random_outcome<R: Rng>(rng: &mut R, draw_rate: f64) -> Outcome {
    if rng.gen_bool(draw_rate) {
        Outcome::Draw
    } else if rng.gen_bool(0.5) {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::parse_roster;

    #[test]
    fn test_random_outcome_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(random_outcome(&mut rng, 1.0), Outcome::Draw);
            assert_ne!(random_outcome(&mut rng, 0.0), Outcome::Draw);
        }
    }

    #[test]
    fn test_simulate_round_robin() {
        let field = parse_roster("A,B,C,D,E");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let t = simulate_tournament(field, TournamentConfig::round_robin().with_seed(5), 0.2, &mut rng)
            .unwrap();

        assert!(t.is_finished());
        assert_eq!(t.state().rounds().len(), 5);
        assert_eq!(t.state().played_pairs().len(), 10);
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let run = || {
            let field = parse_roster("A,B,C,D,E,F,G,H,I,J,K");
            let config = resolve_config(FormatArg::Auto, None, field.len(), Some(11)).unwrap();
            let mut rng = create_rng(Some(11));
            simulate_tournament(field, config, 0.1, &mut rng)
                .unwrap()
                .standings()
        };
        assert_eq!(run(), run());
    }
}
