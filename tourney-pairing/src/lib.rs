//! Tourney Pairing - Scheduling, pairing and standings
//!
//! This crate provides the pairing engine on top of `tourney-core`:
//! - Round-robin schedules (circle method, single or double circuit)
//! - Swiss pairing by score with bye selection
//! - Side balancing for every meeting
//! - Buchholz tie-breaks and competition-ranked standings
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Tournament (orchestration)
//! - Level 2: start_next_round, record_results, standings (phases)
//! - Level 3: generate_round_robin, pair_round, buchholz, rank (steps)
//! - Level 4: configuration, round bounds

mod color;
mod config;
mod schedule;
mod standings;
mod swiss;
mod tiebreak;
mod tournament;

pub use color::{preferred_side, ColorBalancer};
pub use config::{
    circuit_length, RoundBounds, TournamentConfig, TournamentFormat, ROUND_ROBIN_MAX_FIELD,
    SWISS_MAX_ROUNDS, SWISS_MIN_ROUNDS,
};
pub use schedule::{generate_round_robin, ScheduleSlot, ScheduledRound};
pub use standings::{annotate_sides, rank, SideBalance, Standing};
pub use swiss::{opening_draw, pair_round};
pub use tiebreak::buchholz;
pub use tournament::Tournament;
