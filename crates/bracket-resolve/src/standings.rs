//! Group reconstruction and standings calculation for round-robin play.

use bracket_core::{Group, Match, Standing, TeamKey};
use indexmap::IndexMap;
use log::warn;

/// Reconstitute groups from `group_name` and compute each group's
/// standings table. Groups come back sorted by name; matches without a
/// group name are ignored.
pub fn group_matches_by_group(matches: &[Match]) -> Vec<Group> {
    let mut grouped: IndexMap<String, Vec<Match>> = IndexMap::new();
    for m in matches {
        let Some(group_name) = &m.group_name else {
            continue;
        };
        grouped.entry(group_name.clone()).or_default().push(m.clone());
    }
    grouped.sort_keys();

    grouped
        .into_iter()
        .map(|(name, matches)| {
            let standings = compute_standings(&matches);
            Group {
                name,
                matches,
                standings,
            }
        })
        .collect()
}

/// Standings over one group's matches: 3 points for a win, 1 for a draw.
///
/// A finished match whose winner id matches neither side counts as a
/// draw for both; this deliberately mirrors the stored behavior, which
/// does not distinguish an explicit draw from a missing result. Only
/// finished matches count. Ordered by points, then wins, both
/// descending; ties beyond that are left in encounter order.
pub fn compute_standings(matches: &[Match]) -> Vec<Standing> {
    let mut table: IndexMap<TeamKey, Standing> = IndexMap::new();

    // Every team that appears in any match gets a row, played or not.
    for m in matches {
        for slot in [&m.slot_a, &m.slot_b] {
            if let Some(team) = slot.team() {
                table
                    .entry(team.key())
                    .or_insert_with(|| Standing::new(team.clone()));
            }
        }
    }

    for m in matches {
        if !m.is_finished() {
            continue;
        }
        let (Some(team_a), Some(team_b)) = (m.slot_a.team(), m.slot_b.team()) else {
            warn!("finished group match \"{}\" has an unresolved slot, not counted", m.name);
            continue;
        };

        let a_won = m.winner_id.as_ref().is_some_and(|w| team_a.contains(w));
        let b_won = m.winner_id.as_ref().is_some_and(|w| team_b.contains(w));
        let keys = [team_a.key(), team_b.key()];

        for (key, (won, opponent_won)) in keys.iter().zip([(a_won, b_won), (b_won, a_won)]) {
            let Some(row) = table.get_mut(key) else {
                continue;
            };
            row.played += 1;
            if won {
                row.won += 1;
                row.points += 3;
            } else if opponent_won {
                row.lost += 1;
            } else {
                row.drawn += 1;
                row.points += 1;
            }
        }
    }

    let mut standings: Vec<Standing> = table.into_values().collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points).then(b.won.cmp(&a.won)));
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_core::{Competitor, MatchStatus, NewMatch, Slot, Team};

    fn solo(id: &str) -> Team {
        Team::solo(Competitor::new(id, format!("Player {id}")))
    }

    fn group_match(id: &str, n: usize, a: Team, b: Team) -> Match {
        NewMatch::bracketed(
            "T",
            format!("Group A - Match {n}"),
            Slot::Team(a),
            Slot::Team(b),
        )
        .with_group("Group A")
        .into_match(id.into())
    }

    fn finished(mut m: Match, winner: Option<&str>) -> Match {
        m.status = MatchStatus::Finished;
        m.winner_id = winner.map(Into::into);
        m
    }

    #[test]
    fn test_three_team_cycle_all_level() {
        // A beats B, B beats C, C beats A.
        let matches = vec![
            finished(group_match("m1", 1, solo("a"), solo("b")), Some("a")),
            finished(group_match("m2", 2, solo("a"), solo("c")), Some("c")),
            finished(group_match("m3", 3, solo("b"), solo("c")), Some("b")),
        ];
        let standings = compute_standings(&matches);
        assert_eq!(standings.len(), 3);
        for row in &standings {
            assert_eq!(row.played, 2);
            assert_eq!(row.won, 1);
            assert_eq!(row.lost, 1);
            assert_eq!(row.drawn, 0);
            assert_eq!(row.points, 3);
        }
    }

    #[test]
    fn test_finished_match_without_winner_is_a_draw() {
        let matches = vec![finished(group_match("m1", 1, solo("a"), solo("b")), None)];
        let standings = compute_standings(&matches);
        for row in &standings {
            assert_eq!(row.played, 1);
            assert_eq!(row.drawn, 1);
            assert_eq!(row.points, 1);
        }
    }

    #[test]
    fn test_unfinished_matches_carry_no_weight() {
        let mut m = group_match("m1", 1, solo("a"), solo("b"));
        m.status = MatchStatus::Ongoing;
        m.winner_id = Some("a".into());
        let standings = compute_standings(&[m]);
        assert_eq!(standings.len(), 2);
        for row in &standings {
            assert_eq!(row.played, 0);
            assert_eq!(row.points, 0);
        }
    }

    #[test]
    fn test_team_records_do_not_fragment_on_member_order() {
        let pair = |x: &str, y: &str| Team::new([
            Competitor::new(x, x.to_uppercase()),
            Competitor::new(y, y.to_uppercase()),
        ]);
        // Same team listed in both member orders across two matches.
        let matches = vec![
            finished(group_match("m1", 1, pair("a", "b"), pair("c", "d")), Some("a")),
            finished(group_match("m2", 2, pair("d", "c"), pair("b", "a")), Some("b")),
        ];
        let standings = compute_standings(&matches);
        assert_eq!(standings.len(), 2);
        let ab = standings.iter().find(|s| s.key.0 == "a-b").unwrap();
        assert_eq!(ab.played, 2);
        assert_eq!(ab.won, 2);
        assert_eq!(ab.points, 6);
    }

    #[test]
    fn test_standings_order_points_then_wins() {
        // a: 2 wins; b: 1 win 1 loss; c: 0 wins.
        let matches = vec![
            finished(group_match("m1", 1, solo("a"), solo("b")), Some("a")),
            finished(group_match("m2", 2, solo("a"), solo("c")), Some("a")),
            finished(group_match("m3", 3, solo("b"), solo("c")), Some("b")),
        ];
        let standings = compute_standings(&matches);
        assert_eq!(standings[0].key.0, "a");
        assert_eq!(standings[1].key.0, "b");
        assert_eq!(standings[2].key.0, "c");
    }

    #[test]
    fn test_groups_come_back_sorted_by_name() {
        let in_group = |g: &str, id: &str| {
            NewMatch::bracketed("T", format!("{g} - Match 1"), Slot::Team(solo("a")), Slot::Team(solo("b")))
                .with_group(g)
                .into_match(id.into())
        };
        let matches = vec![in_group("Group B", "m1"), in_group("Group A", "m2")];
        let groups = group_matches_by_group(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Group A");
        assert_eq!(groups[1].name, "Group B");
        assert_eq!(groups[0].standings.len(), 2);
    }

    #[test]
    fn test_non_group_matches_are_ignored() {
        let m = NewMatch::bracketed("T", "Final - Match 1", Slot::Tbd, Slot::Tbd)
            .into_match("m1".into());
        assert!(group_matches_by_group(&[m]).is_empty());
    }
}
