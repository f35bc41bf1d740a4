//! Swiss-system pairing
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: pair_round, opening_draw (phases)
//! - Level 3: order_by_score, primary_pass, choose_bye, pair_leftovers (steps)
//!
//! Randomness only breaks ties between equal scores and shuffles leftovers,
//! so two calls with the same seeded source produce identical pairings.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use tourney_core::{
    ByeHistory, Competitor, PairingContext, PlayedPairSet, RoundPairing, Score, Scoreboard,
};

use crate::color::ColorBalancer;

/// Largest score gap allowed between opponents in the primary pass
const MAX_SCORE_GAP: Score = Score::HALF;

type Match<'a> = (&'a Competitor, &'a Competitor);

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Pair one Swiss round.
///
/// 1. Order the field by descending score, random among equal scores.
/// 2. Greedily give each competitor the first later competitor within half a
///    point that they have not met yet.
/// 3. Odd field: a single leftover takes the bye; with several leftovers the
///    lowest scorer without a previous bye does.
/// 4. Odd field: the other leftovers are shuffled and paired in twos,
///    skipping rematches. Even field: leftovers are not paired at all.
///
/// Every new pair is added to `ctx.played` as it is formed. Leftovers without
/// an opponent are reported in `RoundPairing::unpaired` and sit the round out.
pub fn pair_round<R: Rng + ?Sized>(ctx: PairingContext<'_>, rng: &mut R) -> RoundPairing {
    let PairingContext {
        competitors,
        scores,
        byes,
        colors,
        played,
        round,
        total_rounds,
    } = ctx;

    if competitors.is_empty() {
        return RoundPairing::default();
    }

    let order = order_by_score(competitors, scores, rng);
    let (mut matches, paired) = primary_pass(&order, scores, played);

    let leftovers: Vec<&Competitor> = competitors
        .iter()
        .filter(|c| !paired.contains(c))
        .collect();

    let (bye, unpaired) = if competitors.len() % 2 == 1 {
        let (chosen, rest) = choose_bye(leftovers, scores, byes, rng);
        let (extra, blocked) = pair_leftovers(rest, played, rng);
        matches.extend(extra);
        (Some(chosen.clone()), blocked)
    } else {
        (None, leftovers)
    };

    if !unpaired.is_empty() {
        tracing::warn!(
            "Round {}: {} competitor(s) left unpaired, no eligible opponent: {}",
            round,
            unpaired.len(),
            unpaired
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let balancer = ColorBalancer::new(colors, round, total_rounds);
    RoundPairing {
        pairings: matches
            .into_iter()
            .map(|(a, b)| balancer.decide(a, b))
            .collect(),
        bye,
        unpaired: unpaired.into_iter().cloned().collect(),
    }
}

/// Random opening draw: shuffle the field and pair neighbours; with an odd
/// field the last entry gets the bye.
///
/// Unlike [`pair_round`] this does not touch the played-pair set; meetings are
/// recorded when results come in.
pub fn opening_draw<R: Rng + ?Sized>(ctx: PairingContext<'_>, rng: &mut R) -> RoundPairing {
    let mut field: Vec<&Competitor> = ctx.competitors.iter().collect();
    field.shuffle(rng);

    let balancer = ColorBalancer::new(ctx.colors, ctx.round, ctx.total_rounds);
    let pairings = field
        .chunks_exact(2)
        .map(|pair| balancer.decide(pair[0], pair[1]))
        .collect();
    let bye = if field.len() % 2 == 1 {
        field.last().map(|&c| c.clone())
    } else {
        None
    };

    RoundPairing::new(pairings, bye)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Descending score; equal scores in random order.
///
/// Shuffling before a stable sort gives every ordering of a score group the
/// same probability.
fn order_by_score<'a, R: Rng + ?Sized>(
    competitors: &'a [Competitor],
    scores: &Scoreboard,
    rng: &mut R,
) -> Vec<&'a Competitor> {
    let mut order: Vec<&Competitor> = competitors.iter().collect();
    order.shuffle(rng);
    order.sort_by(|a, b| scores.get(b).cmp(&scores.get(a)));
    order
}

/// Greedy score-group pass. Returns the matches and everyone they cover.
fn primary_pass<'a>(
    order: &[&'a Competitor],
    scores: &Scoreboard,
    played: &mut PlayedPairSet,
) -> (Vec<Match<'a>>, FxHashSet<&'a Competitor>) {
    let mut matches = Vec::new();
    let mut paired: FxHashSet<&Competitor> = FxHashSet::default();

    for (i, &p1) in order.iter().enumerate() {
        if paired.contains(p1) {
            continue;
        }

        let opponent = order[i + 1..].iter().copied().find(|&p2| {
            !paired.contains(p2)
                && !played.contains(p1, p2)
                && scores.get(p1).abs_diff(scores.get(p2)) <= MAX_SCORE_GAP
        });

        if let Some(p2) = opponent {
            tracing::debug!("Paired {} ({}) with {} ({})", p1, scores.get(p1), p2, scores.get(p2));
            paired.insert(p1);
            paired.insert(p2);
            played.insert(p1, p2);
            matches.push((p1, p2));
        }
    }

    (matches, paired)
}

/// Pick the bye among several leftovers: lowest score first, random among
/// equal scores, preferring competitors who have not had a bye yet.
///
/// Returns the bye recipient and the other leftovers in their original order.
fn choose_bye<'a, R: Rng + ?Sized>(
    leftovers: Vec<&'a Competitor>,
    scores: &Scoreboard,
    byes: &ByeHistory,
    rng: &mut R,
) -> (&'a Competitor, Vec<&'a Competitor>) {
    if let [only] = leftovers[..] {
        return (only, Vec::new());
    }

    let mut ranked: Vec<(Score, u64, &Competitor)> = leftovers
        .iter()
        .map(|&c| (scores.get(c), rng.gen::<u64>(), c))
        .collect();
    ranked.sort_by_key(|&(score, key, _)| (score, key));

    let chosen = ranked
        .iter()
        .find(|(_, _, c)| !byes.contains(c))
        .or_else(|| ranked.first())
        .map(|&(_, _, c)| c)
        .unwrap_or(leftovers[0]);

    let rest = leftovers.into_iter().filter(|&c| c != chosen).collect();
    (chosen, rest)
}

/// Shuffle leftovers and pair them in twos. A pair that already met is not
/// re-matched; both go to the blocked list instead.
fn pair_leftovers<'a, R: Rng + ?Sized>(
    mut rest: Vec<&'a Competitor>,
    played: &mut PlayedPairSet,
    rng: &mut R,
) -> (Vec<Match<'a>>, Vec<&'a Competitor>) {
    rest.shuffle(rng);

    let mut matches = Vec::new();
    let mut blocked = Vec::new();

    for chunk in rest.chunks(2) {
        match *chunk {
            [a, b] if !played.contains(a, b) => {
                played.insert(a, b);
                matches.push((a, b));
            }
            _ => blocked.extend_from_slice(chunk),
        }
    }

    (matches, blocked)
}
