//! Tourney Core - Data model and tournament state
//!
//! This crate provides the shared vocabulary of the pairing engine:
//! - Competitors and half-point exact scores
//! - Sides, outcomes and pairings
//! - Append-only histories (played pairs, byes, sides, opponents)
//! - Round records and the owned `TournamentState`
//! - The error taxonomy shared by every crate in the workspace

pub mod competitor;
pub mod error;
pub mod history;
pub mod outcome;
pub mod round;
pub mod state;

// Re-exports for convenient access
pub use competitor::{Competitor, Score};
pub use error::{ErrorKind, Result, TournamentError};
pub use history::{ByeHistory, ColorHistory, OpponentLog, PairKey, PlayedPairSet, Scoreboard};
pub use outcome::{Outcome, Pairing, Side};
pub use round::{GameRecord, RoundPairing, RoundRecord};
pub use state::{PairingContext, TournamentState};
