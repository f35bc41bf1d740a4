//! Append-only tournament histories
//!
//! Each container has a single mutation discipline:
//! - `PlayedPairSet`, `ByeHistory`: set union, never removed from
//! - `ColorHistory`, `OpponentLog`: per-competitor append
//! - `Scoreboard`: scores only ever increase

use rustc_hash::{FxHashMap, FxHashSet};

use crate::competitor::{Competitor, Score};
use crate::outcome::Side;

/// Unordered pair of competitors, normalised so `{a, b} == {b, a}`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey(Competitor, Competitor);

impl PairKey {
    pub fn new(a: &Competitor, b: &Competitor) -> Self {
        if a <= b {
            PairKey(a.clone(), b.clone())
        } else {
            PairKey(b.clone(), a.clone())
        }
    }

    pub fn members(&self) -> (&Competitor, &Competitor) {
        (&self.0, &self.1)
    }
}

/// Pairs that have already met. Used to forbid rematches.
#[derive(Clone, Debug, Default)]
pub struct PlayedPairSet {
    pairs: FxHashSet<PairKey>,
}

impl PlayedPairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a meeting. Returns `false` if the pair was already present.
    pub fn insert(&mut self, a: &Competitor, b: &Competitor) -> bool {
        self.pairs.insert(PairKey::new(a, b))
    }

    pub fn contains(&self, a: &Competitor, b: &Competitor) -> bool {
        self.pairs.contains(&PairKey::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairKey> {
        self.pairs.iter()
    }
}

/// Competitors who have already received a bye
#[derive(Clone, Debug, Default)]
pub struct ByeHistory {
    received: FxHashSet<Competitor>,
}

impl ByeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, competitor: &Competitor) -> bool {
        self.received.insert(competitor.clone())
    }

    pub fn contains(&self, competitor: &Competitor) -> bool {
        self.received.contains(competitor)
    }

    pub fn len(&self) -> usize {
        self.received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.is_empty()
    }
}

/// Sides each competitor has played, in round order. One entry per game;
/// bye rounds add nothing.
#[derive(Clone, Debug, Default)]
pub struct ColorHistory {
    sides: FxHashMap<Competitor, Vec<Side>>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, competitor: &Competitor, side: Side) {
        self.sides.entry(competitor.clone()).or_default().push(side);
    }

    /// Sides played so far, oldest first
    pub fn sides(&self, competitor: &Competitor) -> &[Side] {
        self.sides.get(competitor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, competitor: &Competitor, side: Side) -> usize {
        self.sides(competitor).iter().filter(|&&s| s == side).count()
    }

    pub fn games(&self, competitor: &Competitor) -> usize {
        self.sides(competitor).len()
    }
}

/// Opponents each competitor has faced, in round order (byes excluded)
#[derive(Clone, Debug, Default)]
pub struct OpponentLog {
    opponents: FxHashMap<Competitor, Vec<Competitor>>,
}

impl OpponentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one game between `a` and `b` for both of them
    pub fn record(&mut self, a: &Competitor, b: &Competitor) {
        self.opponents.entry(a.clone()).or_default().push(b.clone());
        self.opponents.entry(b.clone()).or_default().push(a.clone());
    }

    pub fn opponents_of(&self, competitor: &Competitor) -> &[Competitor] {
        self.opponents
            .get(competitor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Current score of every competitor
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    scores: FxHashMap<Competitor, Score>,
}

impl Scoreboard {
    /// Scoreboard with every listed competitor at zero
    pub fn new(competitors: &[Competitor]) -> Self {
        Self {
            scores: competitors.iter().map(|c| (c.clone(), Score::ZERO)).collect(),
        }
    }

    /// Score of `competitor`; unknown competitors count as zero
    pub fn get(&self, competitor: &Competitor) -> Score {
        self.scores.get(competitor).copied().unwrap_or(Score::ZERO)
    }

    pub fn award(&mut self, competitor: &Competitor, points: Score) {
        *self.scores.entry(competitor.clone()).or_default() += points;
    }

    pub fn total(&self) -> Score {
        self.scores.values().copied().sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(Competitor, Score)> for Scoreboard {
    fn from_iter<I: IntoIterator<Item = (Competitor, Score)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Competitor {
        Competitor::from(name)
    }

    #[test]
    fn test_pair_key_unordered() {
        assert_eq!(PairKey::new(&c("A"), &c("B")), PairKey::new(&c("B"), &c("A")));
        let key = PairKey::new(&c("Z"), &c("M"));
        assert_eq!(key.members(), (&c("M"), &c("Z")));
    }

    #[test]
    fn test_played_pairs_insert_once() {
        let mut played = PlayedPairSet::new();
        assert!(played.insert(&c("A"), &c("B")));
        assert!(!played.insert(&c("B"), &c("A")));
        assert_eq!(played.len(), 1);
        assert!(played.contains(&c("B"), &c("A")));
        assert!(!played.contains(&c("A"), &c("C")));
    }

    #[test]
    fn test_color_history_counts() {
        let mut colors = ColorHistory::new();
        colors.record(&c("A"), Side::First);
        colors.record(&c("A"), Side::Second);
        colors.record(&c("A"), Side::First);

        assert_eq!(colors.count(&c("A"), Side::First), 2);
        assert_eq!(colors.count(&c("A"), Side::Second), 1);
        assert_eq!(colors.games(&c("A")), 3);
        assert_eq!(colors.sides(&c("A")), &[Side::First, Side::Second, Side::First]);
        assert!(colors.sides(&c("B")).is_empty());
    }

    #[test]
    fn test_opponent_log_records_both_sides() {
        let mut log = OpponentLog::new();
        log.record(&c("A"), &c("B"));
        log.record(&c("A"), &c("C"));

        assert_eq!(log.opponents_of(&c("A")), &[c("B"), c("C")]);
        assert_eq!(log.opponents_of(&c("B")), &[c("A")]);
        assert!(log.opponents_of(&c("D")).is_empty());
    }

    #[test]
    fn test_scoreboard_award_and_total() {
        let mut scores = Scoreboard::new(&[c("A"), c("B")]);
        assert_eq!(scores.len(), 2);
        scores.award(&c("A"), Score::ONE);
        scores.award(&c("B"), Score::HALF);
        scores.award(&c("B"), Score::HALF);

        assert_eq!(scores.get(&c("A")), Score::ONE);
        assert_eq!(scores.get(&c("B")), Score::ONE);
        assert_eq!(scores.get(&c("X")), Score::ZERO);
        assert_eq!(scores.total(), Score::from_half_points(4));
    }

    #[test]
    fn test_bye_history() {
        let mut byes = ByeHistory::new();
        assert!(byes.is_empty());
        assert!(byes.insert(&c("E")));
        assert!(!byes.insert(&c("E")));
        assert!(byes.contains(&c("E")));
        assert_eq!(byes.len(), 1);
    }
}
