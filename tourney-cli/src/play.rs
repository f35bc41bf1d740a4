//! Play command - run a tournament interactively, reading results from stdin
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_round()
//! - Level 3: read_outcome()

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Args;

use tourney_core::{Outcome, Pairing};
use tourney_pairing::Tournament;

use crate::report::{format_round, format_standings};
use crate::setup::{resolve_config, FormatArg, RosterArgs};

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Tournament format
    #[arg(long, value_enum, default_value = "auto")]
    pub format: FormatArg,

    /// Swiss round count (default: recommended for the field size)
    #[arg(long)]
    pub rounds: Option<usize>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let field = args.roster.load()?;
    let config = resolve_config(args.format, args.rounds, field.len(), seed)?;
    let mut tournament = Tournament::new(field, config)?;

    println!("Enter one result per game: 1-0, 0-1 or 1/2-1/2 (first/second/draw also work)");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    while !tournament.is_finished() {
        play_round(&mut tournament, &mut input, &mut output)?;
        print!("{}", format_standings(&tournament.standings()));
    }

    println!("\nTournament complete after {} rounds", tournament.total_rounds());
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Pair the next round, collect one result per game and record them
fn play_round<B: BufRead, W: Write>(
    tournament: &mut Tournament,
    input: &mut B,
    output: &mut W,
) -> Result<()> {
    let total = tournament.total_rounds();
    let record = tournament.start_next_round()?;
    write!(output, "{}", format_round(record, total))?;

    let pairings = record.pairings().to_vec();
    let mut outcomes = Vec::with_capacity(pairings.len());
    for pairing in &pairings {
        outcomes.push(read_outcome(input, output, pairing)?);
    }

    tournament.record_results(&outcomes)?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Prompt until a recognised result token is entered.
///
/// End of input is an error; the tournament stays at the open round.
fn read_outcome<B: BufRead, W: Write>(
    input: &mut B,
    output: &mut W,
    pairing: &Pairing,
) -> Result<Outcome> {
    loop {
        write!(output, "{}: ", pairing)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read result")?;
        if read == 0 {
            bail!("Input ended before the result of {} was entered", pairing);
        }

        match line.trim().parse::<Outcome>() {
            Ok(outcome) => return Ok(outcome),
            Err(err) => writeln!(output, "{}. Try again.", err)?,
        }
    }
}
