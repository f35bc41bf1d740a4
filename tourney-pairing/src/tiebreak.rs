//! Buchholz tie-break

use rustc_hash::FxHashMap;
use tourney_core::{Competitor, OpponentLog, Score, Scoreboard};

/// Compute Buchholz score (sum of opponents' current scores).
///
/// Byes are not opponents and add nothing. The value is recomputed from
/// scratch on every call so it always reflects the latest scores.
pub fn buchholz(
    competitors: &[Competitor],
    scores: &Scoreboard,
    opponents: &OpponentLog,
) -> FxHashMap<Competitor, Score> {
    competitors
        .iter()
        .map(|c| {
            let total: Score = opponents
                .opponents_of(c)
                .iter()
                .map(|opp| scores.get(opp))
                .sum();
            (c.clone(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Competitor {
        Competitor::from(name)
    }

    #[test]
    fn test_buchholz_sums_opponent_scores() {
        let field = vec![c("A"), c("B"), c("C"), c("D")];
        let scores: Scoreboard = [
            (c("A"), Score::from_half_points(4)),
            (c("B"), Score::from_half_points(3)),
            (c("C"), Score::ONE),
            (c("D"), Score::ZERO),
        ]
        .into_iter()
        .collect();

        let mut log = OpponentLog::new();
        log.record(&c("A"), &c("B"));
        log.record(&c("A"), &c("C"));
        log.record(&c("B"), &c("D"));

        let bh = buchholz(&field, &scores, &log);
        assert_eq!(bh[&c("A")], Score::from_half_points(5)); // 1.5 + 1.0
        assert_eq!(bh[&c("B")], Score::from_half_points(4)); // 2.0 + 0.0
        assert_eq!(bh[&c("C")], Score::from_half_points(4)); // 2.0
        assert_eq!(bh[&c("D")], Score::from_half_points(3)); // 1.5
    }

    #[test]
    fn test_buchholz_counts_repeat_opponents() {
        // Double round-robin: the same opponent counts once per game
        let field = vec![c("A"), c("B")];
        let scores: Scoreboard = [(c("A"), Score::ONE), (c("B"), Score::ONE)]
            .into_iter()
            .collect();
        let mut log = OpponentLog::new();
        log.record(&c("A"), &c("B"));
        log.record(&c("B"), &c("A"));

        let bh = buchholz(&field, &scores, &log);
        assert_eq!(bh[&c("A")], Score::from_half_points(4));
    }

    #[test]
    fn test_buchholz_without_games_is_zero() {
        let field = vec![c("A"), c("B")];
        let scores = Scoreboard::new(&field);
        let bh = buchholz(&field, &scores, &OpponentLog::new());
        assert_eq!(bh.len(), 2);
        assert!(bh.values().all(|&s| s == Score::ZERO));
    }
}
