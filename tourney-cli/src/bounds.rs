//! Bounds command - recommended format and round counts for a field

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use tourney_pairing::{circuit_length, RoundBounds, TournamentFormat};

use crate::report::print_json;
use crate::setup::RosterArgs;

#[derive(Args)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FieldSummary {
    competitors: usize,
    auto_format: TournamentFormat,
    circuit_length: usize,
    swiss: RoundBounds,
}

pub fn run(args: BoundsArgs) -> Result<()> {
    let field = args.roster.load()?;
    if field.len() < 2 {
        bail!("Need at least 2 competitors, got {}", field.len());
    }

    let summary = summarize(field.len());
    if args.json {
        print_json(&summary)?;
    } else {
        println!("Competitors:    {}", summary.competitors);
        println!("Auto format:    {}", summary.auto_format.name());
        println!("Circuit length: {} rounds", summary.circuit_length);
        println!(
            "Swiss rounds:   {}-{} (default {})",
            summary.swiss.min, summary.swiss.max, summary.swiss.default
        );
    }
    Ok(())
}

fn summarize(field_size: usize) -> FieldSummary {
    FieldSummary {
        competitors: field_size,
        auto_format: TournamentFormat::auto(field_size),
        circuit_length: circuit_length(field_size),
        swiss: RoundBounds::swiss(field_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_small_field() {
        let summary = summarize(6);
        assert_eq!(summary.auto_format, TournamentFormat::RoundRobin);
        assert_eq!(summary.circuit_length, 5);
    }

    #[test]
    fn test_summarize_large_field() {
        let summary = summarize(20);
        assert_eq!(summary.auto_format, TournamentFormat::Swiss { rounds: 7 });
        assert_eq!(summary.swiss.min, 5);
        assert_eq!(summary.swiss.max, 11);
    }
}
