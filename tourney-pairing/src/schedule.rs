//! Round-robin schedule generation (circle method)
//!
//! Level 3 - Steps

use serde::Serialize;
use tourney_core::{Competitor, Pairing, RoundPairing};

/// One entry of a scheduled round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ScheduleSlot {
    Game(Pairing),
    /// Competitor seated against the empty seat
    Bye(Competitor),
}

/// One round of a fixed schedule
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScheduledRound {
    pub slots: Vec<ScheduleSlot>,
}

impl ScheduledRound {
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.slots.iter().filter_map(|slot| match slot {
            ScheduleSlot::Game(pairing) => Some(pairing),
            ScheduleSlot::Bye(_) => None,
        })
    }

    pub fn bye(&self) -> Option<&Competitor> {
        self.slots.iter().find_map(|slot| match slot {
            ScheduleSlot::Bye(competitor) => Some(competitor),
            ScheduleSlot::Game(_) => None,
        })
    }

    /// Split into the pairing list and bye a round record expects
    pub fn into_round_pairing(self) -> RoundPairing {
        let mut pairings = Vec::with_capacity(self.slots.len());
        let mut bye = None;
        for slot in self.slots {
            match slot {
                ScheduleSlot::Game(pairing) => pairings.push(pairing),
                ScheduleSlot::Bye(competitor) => bye = Some(competitor),
            }
        }
        RoundPairing::new(pairings, bye)
    }
}

/// Generate a round-robin schedule with exactly `rounds_needed` rounds.
///
/// Competitors are seated in input order, padded with an empty seat when the
/// field is odd. Each base round pairs seat `i` with seat `n - 1 - i`; seat 0
/// then stays put while the rest rotate one place. When more rounds are
/// requested than one circuit holds, further circuits repeat the base
/// schedule. The result depends only on the input order.
pub fn generate_round_robin(competitors: &[Competitor], rounds_needed: usize) -> Vec<ScheduledRound> {
    if rounds_needed == 0 || competitors.is_empty() {
        return Vec::new();
    }

    let base = base_circuit(competitors);
    base.iter().cycle().take(rounds_needed).cloned().collect()
}

/// The `n - 1` rounds of a single circuit
fn base_circuit(competitors: &[Competitor]) -> Vec<ScheduledRound> {
    let mut seats: Vec<Option<&Competitor>> = competitors.iter().map(Some).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }

    let n = seats.len();
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let slots = (0..n / 2)
            .filter_map(|i| match (seats[i], seats[n - 1 - i]) {
                (Some(a), Some(b)) => Some(ScheduleSlot::Game(Pairing::new(a.clone(), b.clone()))),
                (Some(only), None) | (None, Some(only)) => Some(ScheduleSlot::Bye(only.clone())),
                (None, None) => None,
            })
            .collect();
        rounds.push(ScheduledRound { slots });
        rotate_seats(&mut seats);
    }

    rounds
}

/// Keep seat 0 fixed, move the last seat to position 1
fn rotate_seats<T>(seats: &mut [T]) {
    if seats.len() > 2 {
        seats[1..].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;
    use tourney_core::PairKey;

    fn field(names: &[&str]) -> Vec<Competitor> {
        names.iter().map(|&n| Competitor::from(n)).collect()
    }

    fn meeting_counts(schedule: &[ScheduledRound]) -> FxHashMap<PairKey, usize> {
        let mut counts = FxHashMap::default();
        for round in schedule {
            for p in round.pairings() {
                *counts.entry(PairKey::new(&p.first, &p.second)).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_four_competitors_single_circuit() {
        let players = field(&["A", "B", "C", "D"]);
        let schedule = generate_round_robin(&players, 3);

        assert_eq!(schedule.len(), 3);
        assert!(schedule.iter().all(|r| r.bye().is_none()));

        let counts = meeting_counts(&schedule);
        assert_eq!(counts.len(), 6); // C(4,2)
        assert!(counts.values().all(|&c| c == 1));

        for player in &players {
            let games: usize = schedule
                .iter()
                .map(|r| r.pairings().filter(|p| p.contains(player)).count())
                .sum();
            assert_eq!(games, 3);
        }
    }

    #[test]
    fn test_circle_rotation_order() {
        let schedule = generate_round_robin(&field(&["A", "B", "C", "D"]), 3);
        let names: Vec<Vec<(String, String)>> = schedule
            .iter()
            .map(|r| {
                r.pairings()
                    .map(|p| (p.first.to_string(), p.second.to_string()))
                    .collect()
            })
            .collect();

        let expected = vec![
            vec![("A", "D"), ("B", "C")],
            vec![("A", "C"), ("D", "B")],
            vec![("A", "B"), ("C", "D")],
        ];
        for (round, want) in names.iter().zip(expected) {
            let want: Vec<(String, String)> = want
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect();
            assert_eq!(round, &want);
        }
    }

    #[test]
    fn test_five_competitors_one_bye_each() {
        let players = field(&["A", "B", "C", "D", "E"]);
        let schedule = generate_round_robin(&players, 5);

        assert_eq!(schedule.len(), 5);
        for round in &schedule {
            assert!(round.bye().is_some());
            assert_eq!(round.pairings().count(), 2);
        }

        for player in &players {
            let byes = schedule.iter().filter(|r| r.bye() == Some(player)).count();
            assert_eq!(byes, 1, "{} should sit out exactly once", player);
        }

        let counts = meeting_counts(&schedule);
        assert_eq!(counts.len(), 10); // C(5,2)
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_double_circuit_meets_twice() {
        let players = field(&["A", "B", "C", "D", "E", "F"]);
        let schedule = generate_round_robin(&players, 10);

        assert_eq!(schedule.len(), 10);
        let counts = meeting_counts(&schedule);
        assert_eq!(counts.len(), 15);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_truncates_to_rounds_needed() {
        let players = field(&["A", "B", "C", "D"]);
        let schedule = generate_round_robin(&players, 4);
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule[3], schedule[0]);

        assert_eq!(generate_round_robin(&players, 2).len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let players = field(&["Anna", "Boris", "Vera", "Gleb", "Dina", "Egor", "Zoya"]);
        assert_eq!(
            generate_round_robin(&players, 7),
            generate_round_robin(&players, 7)
        );
    }

    #[test]
    fn test_no_self_pairing() {
        for size in 1..=9 {
            let names: Vec<String> = (0..size).map(|i| format!("P{}", i)).collect();
            let players: Vec<Competitor> = names.iter().map(|n| Competitor::from(n.as_str())).collect();
            for round in generate_round_robin(&players, 2 * size) {
                assert!(round.pairings().all(|p| p.first != p.second));
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(generate_round_robin(&field(&["A", "B"]), 0).is_empty());
        assert!(generate_round_robin(&[], 3).is_empty());

        // A lone competitor only ever gets byes
        let lone = generate_round_robin(&field(&["A"]), 2);
        assert_eq!(lone.len(), 2);
        assert!(lone.iter().all(|r| r.bye() == Some(&Competitor::from("A"))));
    }

    #[test]
    fn test_into_round_pairing() {
        let schedule = generate_round_robin(&field(&["A", "B", "C"]), 1);
        let round = schedule[0].clone().into_round_pairing();
        assert_eq!(round.pairings, vec![Pairing::new("B".into(), "C".into())]);
        assert_eq!(round.bye, Some("A".into()));
        assert!(round.unpaired.is_empty());
    }
}
