//! Shared command setup - roster loading and format selection
//!
//! Level 4 - Configuration

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use rustc_hash::FxHashSet;

use tourney_core::Competitor;
use tourney_pairing::{RoundBounds, TournamentConfig, TournamentFormat};

/// Where the field comes from
#[derive(Args, Clone, Debug)]
pub struct RosterArgs {
    /// Competitor names, separated by commas
    #[arg(long, value_name = "NAMES", conflicts_with = "roster")]
    pub players: Option<String>,

    /// File with one competitor per line (commas also accepted)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,
}

impl RosterArgs {
    /// Read and clean the roster from whichever source was given
    pub fn load(&self) -> Result<Vec<Competitor>> {
        let raw = match (&self.players, &self.roster) {
            (Some(list), _) => list.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster: {}", path.display()))?,
            (None, None) => bail!("No competitors given: use --players or --roster"),
        };
        Ok(parse_roster(&raw))
    }
}

/// Format requested on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Round-robin up to 8 competitors, Swiss above
    #[default]
    Auto,
    RoundRobin,
    /// Everyone meets everyone twice
    Double,
    Swiss,
}

/// Split a roster on commas and newlines, trim, drop blanks and keep the
/// first occurrence of each name.
pub fn parse_roster(raw: &str) -> Vec<Competitor> {
    let mut seen = FxHashSet::default();
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(Competitor::from)
        .collect()
}

/// Build a tournament config for a field of `field_size`.
///
/// `rounds` only applies to Swiss; it defaults to the recommended count and
/// must lie within the recommended bounds.
pub fn resolve_config(
    format: FormatArg,
    rounds: Option<usize>,
    field_size: usize,
    seed: Option<u64>,
) -> Result<TournamentConfig> {
    let format = match format {
        FormatArg::RoundRobin => TournamentFormat::RoundRobin,
        FormatArg::Double => TournamentFormat::DoubleRoundRobin,
        FormatArg::Swiss => TournamentFormat::Swiss {
            rounds: swiss_rounds(rounds, field_size)?,
        },
        FormatArg::Auto => match TournamentFormat::auto(field_size) {
            TournamentFormat::Swiss { .. } => TournamentFormat::Swiss {
                rounds: swiss_rounds(rounds, field_size)?,
            },
            other => other,
        },
    };

    if rounds.is_some() && format.is_round_robin() {
        tracing::warn!("--rounds is ignored for {} tournaments", format.name());
    }

    let config = TournamentConfig {
        format,
        ..TournamentConfig::default()
    };
    Ok(match seed {
        Some(s) => config.with_seed(s),
        None => config,
    })
}

fn swiss_rounds(requested: Option<usize>, field_size: usize) -> Result<usize> {
    let bounds = RoundBounds::swiss(field_size);
    let rounds = requested.unwrap_or(bounds.default);
    if !bounds.contains(rounds) {
        bail!(
            "{} rounds is outside the Swiss range {}-{} for {} competitors",
            rounds,
            bounds.min,
            bounds.max,
            field_size
        );
    }
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[Competitor]) -> Vec<&str> {
        list.iter().map(Competitor::name).collect()
    }

    #[test]
    fn test_parse_roster_commas_and_lines() {
        let roster = parse_roster("Anna, Boris\nVera,,\n  Gleb  \n");
        assert_eq!(names(&roster), vec!["Anna", "Boris", "Vera", "Gleb"]);
    }

    #[test]
    fn test_parse_roster_drops_duplicates() {
        let roster = parse_roster("Anna,Boris,Anna,Vera,Boris");
        assert_eq!(names(&roster), vec!["Anna", "Boris", "Vera"]);
    }

    #[test]
    fn test_parse_roster_empty() {
        assert!(parse_roster(" , \n ").is_empty());
    }

    #[test]
    fn test_resolve_auto() {
        let small = resolve_config(FormatArg::Auto, None, 6, None).unwrap();
        assert_eq!(small.format, TournamentFormat::RoundRobin);

        let large = resolve_config(FormatArg::Auto, None, 9, Some(7)).unwrap();
        assert_eq!(large.format, TournamentFormat::Swiss { rounds: 6 });
        assert_eq!(large.seed, Some(7));
    }

    #[test]
    fn test_resolve_swiss_bounds() {
        let ok = resolve_config(FormatArg::Swiss, Some(4), 9, None).unwrap();
        assert_eq!(ok.format, TournamentFormat::Swiss { rounds: 4 });

        assert!(resolve_config(FormatArg::Swiss, Some(3), 9, None).is_err());
        assert!(resolve_config(FormatArg::Swiss, Some(10), 9, None).is_err());
    }

    #[test]
    fn test_resolve_round_robin_ignores_rounds() {
        let config = resolve_config(FormatArg::Double, Some(3), 4, None).unwrap();
        assert_eq!(config.format, TournamentFormat::DoubleRoundRobin);
    }

    #[test]
    fn test_roster_requires_a_source() {
        let args = RosterArgs {
            players: None,
            roster: None,
        };
        assert!(args.load().is_err());
    }
}
