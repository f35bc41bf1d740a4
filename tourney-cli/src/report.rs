//! Text and JSON output for rounds, schedules and standings
//!
//! Level 4 - Formatting utilities

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use tourney_core::RoundRecord;
use tourney_pairing::{ScheduleSlot, ScheduledRound, Standing};

/// Print any serialisable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pairings of one round, with results once they are in
pub fn format_round(record: &RoundRecord, total_rounds: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Round {}/{} ===", record.number(), total_rounds);

    if record.is_completed() {
        for (board, game) in record.results().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<20} {:^9} {}",
                board + 1,
                game.pairing.first,
                game.outcome.token(),
                game.pairing.second
            );
        }
    } else {
        for (board, pairing) in record.pairings().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<20} {:^9} {}",
                board + 1,
                pairing.first,
                "vs",
                pairing.second
            );
        }
    }

    if let Some(bye) = record.bye() {
        let _ = writeln!(out, "  Bye: {}", bye);
    }
    if !record.unpaired().is_empty() {
        let names: Vec<&str> = record.unpaired().iter().map(|c| c.name()).collect();
        let _ = writeln!(out, "  Unpaired (no eligible opponent): {}", names.join(", "));
    }
    out
}

/// Fixed round-robin schedule, one block per round
pub fn format_schedule(schedule: &[ScheduledRound]) -> String {
    let mut out = String::new();
    for (index, round) in schedule.iter().enumerate() {
        let _ = writeln!(out, "Round {}:", index + 1);
        for slot in &round.slots {
            match slot {
                ScheduleSlot::Game(pairing) => {
                    let _ = writeln!(out, "  {}", pairing);
                }
                ScheduleSlot::Bye(competitor) => {
                    let _ = writeln!(out, "  {} (bye)", competitor);
                }
            }
        }
    }
    out
}

/// Standings table with medals for the top three ranks
pub fn format_standings(rows: &[Standing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Standings ===");
    let _ = writeln!(
        out,
        "{:<6} {:<20} {:>6} {:>9} {:>7}",
        "Rank", "Competitor", "Score", "Buchholz", "First"
    );

    for row in rows {
        let sides = row
            .sides
            .map(|s| format!("{}/{}", s.first, s.games))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:>6} {:>9} {:>7}",
            rank_label(row.rank),
            row.competitor,
            row.score,
            row.buchholz,
            sides
        );
    }
    out
}

fn rank_label(rank: usize) -> String {
    match rank {
        1 => "👑 1".to_string(),
        2 => "🥈 2".to_string(),
        3 => "🥉 3".to_string(),
        n => n.to_string(),
    }
}
