//! Standings table
//!
//! Ordering: score (desc), Buchholz (desc), name (asc). Competitors with the
//! same score and Buchholz share a rank, and the next group's rank is its
//! 1-based position in the table (1, 1, 3 rather than 1, 1, 2).

use rustc_hash::FxHashMap;
use serde::Serialize;
use tourney_core::{ColorHistory, Competitor, Score, Scoreboard, Side};

/// First-side games out of games played
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SideBalance {
    pub first: usize,
    pub games: usize,
}

/// One row of the standings table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub competitor: Competitor,
    pub score: Score,
    /// Buchholz score (sum of opponents' scores, for tiebreaking)
    pub buchholz: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<SideBalance>,
}

impl Standing {
    fn group_key(&self) -> (Score, Score) {
        (self.score, self.buchholz)
    }
}

/// Rank competitors by score and Buchholz.
///
/// Competitors missing from `buchholz` count as zero.
pub fn rank(
    competitors: &[Competitor],
    scores: &Scoreboard,
    buchholz: &FxHashMap<Competitor, Score>,
) -> Vec<Standing> {
    let mut rows: Vec<Standing> = competitors
        .iter()
        .map(|c| Standing {
            rank: 0,
            competitor: c.clone(),
            score: scores.get(c),
            buchholz: buchholz.get(c).copied().unwrap_or_default(),
            sides: None,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.buchholz.cmp(&a.buchholz))
            .then_with(|| a.competitor.cmp(&b.competitor))
    });

    assign_group_ranks(&mut rows);
    rows
}

/// Give every maximal run of equal (score, buchholz) the position of its
/// first member. `rows` must already be sorted.
fn assign_group_ranks(rows: &mut [Standing]) {
    let mut start = 0;
    while start < rows.len() {
        let key = rows[start].group_key();
        let end = rows[start..]
            .iter()
            .position(|row| row.group_key() != key)
            .map_or(rows.len(), |offset| start + offset);

        for row in &mut rows[start..end] {
            row.rank = start + 1;
        }
        start = end;
    }
}

/// Add first-side counts to each row
pub fn annotate_sides(rows: &mut [Standing], colors: &ColorHistory) {
    for row in rows {
        row.sides = Some(SideBalance {
            first: colors.count(&row.competitor, Side::First),
            games: colors.games(&row.competitor),
        });
    }
}
