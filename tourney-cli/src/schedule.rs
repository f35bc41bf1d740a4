//! Schedule command - print a round-robin schedule without playing it

use anyhow::{bail, Result};
use clap::Args;

use tourney_pairing::{generate_round_robin, TournamentFormat};

use crate::report::{format_schedule, print_json};
use crate::setup::RosterArgs;

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Two circuits: everyone meets everyone twice
    #[arg(long)]
    pub double: bool,

    /// Number of rounds to generate (default: one or two full circuits)
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScheduleArgs) -> Result<()> {
    let field = args.roster.load()?;
    if field.len() < 2 {
        bail!("Need at least 2 competitors, got {}", field.len());
    }

    let format = if args.double {
        TournamentFormat::DoubleRoundRobin
    } else {
        TournamentFormat::RoundRobin
    };
    let rounds = args.rounds.unwrap_or_else(|| format.total_rounds(field.len()));
    if rounds == 0 {
        bail!("Round count must be positive");
    }

    tracing::info!(
        "Generating {} schedule: {} competitors, {} rounds",
        format.name(),
        field.len(),
        rounds
    );

    let schedule = generate_round_robin(&field, rounds);
    if args.json {
        print_json(&schedule)?;
    } else {
        print!("{}", format_schedule(&schedule));
    }
    Ok(())
}
