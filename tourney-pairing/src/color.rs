//! Side balancing for scheduled meetings
//!
//! Decides which competitor of a pairing takes the first side, keeping each
//! competitor's first/second exposure roughly equal and breaking streaks of
//! the same side before they reach three in a row.

use std::cmp::Ordering;

use tourney_core::{ColorHistory, Competitor, Pairing, Side};

/// Side a competitor would like next, given the sides already played.
///
/// Two identical sides in a row force the opposite side, unless this is the
/// final round. Otherwise the less-played side wins; on a tie, the side
/// opposite the most recent one, or `First` with no history.
pub fn preferred_side(history: &[Side], current_round: usize, total_rounds: usize) -> Side {
    if let [.., previous, last] = history {
        if previous == last && current_round < total_rounds {
            return last.opposite();
        }
    }

    let firsts = history.iter().filter(|&&s| s == Side::First).count();
    let seconds = history.len() - firsts;

    match firsts.cmp(&seconds) {
        Ordering::Less => Side::First,
        Ordering::Greater => Side::Second,
        Ordering::Equal => history.last().map_or(Side::First, |s| s.opposite()),
    }
}

/// Side decisions for one round
pub struct ColorBalancer<'a> {
    history: &'a ColorHistory,
    current_round: usize,
    total_rounds: usize,
}

impl<'a> ColorBalancer<'a> {
    pub fn new(history: &'a ColorHistory, current_round: usize, total_rounds: usize) -> Self {
        Self {
            history,
            current_round,
            total_rounds,
        }
    }

    pub fn preferred_side(&self, competitor: &Competitor) -> Side {
        preferred_side(
            self.history.sides(competitor),
            self.current_round,
            self.total_rounds,
        )
    }

    /// Order `a` and `b` into a pairing.
    ///
    /// Different preferences are both honoured. When both want the same side,
    /// the competitor with fewer first-side games so far goes first; that is
    /// the one with fewer firsts when both want `First`, and leaves the
    /// second side to the one with more firsts when both want `Second`.
    /// Ties keep `a` first.
    pub fn decide(&self, a: &Competitor, b: &Competitor) -> Pairing {
        let a_first = match (self.preferred_side(a), self.preferred_side(b)) {
            (Side::First, Side::Second) => true,
            (Side::Second, Side::First) => false,
            _ => {
                self.history.count(a, Side::First) <= self.history.count(b, Side::First)
            }
        };

        tracing::debug!(
            "Sides for {} vs {} in round {}: {} first",
            a,
            b,
            self.current_round,
            if a_first { a } else { b }
        );

        if a_first {
            Pairing::new(a.clone(), b.clone())
        } else {
            Pairing::new(b.clone(), a.clone())
        }
    }

    /// Re-decide the sides of an existing pairing
    pub fn balance(&self, pairing: Pairing) -> Pairing {
        self.decide(&pairing.first, &pairing.second)
    }
}
