//! Round-robin group generation.

use bracket_core::{naming, GenerateError, NewMatch, Slot, Team};

use crate::knockout::reject_short_teams;

/// Generate round-robin groups.
///
/// Teams are dealt to groups by `index % num_groups` rather than block
/// partitioning, which spreads any shuffle bias evenly across groups.
/// Within each group of `m` teams, every unordered pair plays once, so a
/// group yields `m * (m - 1) / 2` matches (zero when `m < 2`). The result
/// is the flat list of all groups' matches; callers reconstitute groups
/// from `group_name`.
pub fn generate_groups(
    tournament: &str,
    teams: Vec<Team>,
    num_groups: usize,
    teams_per_group: usize,
) -> Result<Vec<NewMatch>, GenerateError> {
    reject_short_teams(&teams)?;

    let expected = num_groups * teams_per_group;
    if teams.len() != expected {
        return Err(GenerateError::IncorrectPlayerCount {
            expected,
            actual: teams.len(),
        });
    }

    let mut buckets: Vec<Vec<Team>> = (0..num_groups).map(|_| Vec::new()).collect();
    for (i, team) in teams.into_iter().enumerate() {
        buckets[i % num_groups].push(team);
    }

    let mut matches = Vec::new();
    for (group_index, bucket) in buckets.into_iter().enumerate() {
        let group = naming::group_label(group_index);
        let mut n = 0;
        for j in 0..bucket.len() {
            for k in (j + 1)..bucket.len() {
                n += 1;
                matches.push(
                    NewMatch::bracketed(
                        tournament,
                        naming::match_label(&group, n),
                        Slot::Team(bucket[j].clone()),
                        Slot::Team(bucket[k].clone()),
                    )
                    .with_group(&group),
                );
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_core::Competitor;

    fn solo_teams(n: usize) -> Vec<Team> {
        (0..n)
            .map(|i| Team::solo(Competitor::new(format!("p{i}"), format!("Player {i}"))))
            .collect()
    }

    #[test]
    fn test_two_groups_of_three() {
        let matches = generate_groups("Chess 2025", solo_teams(6), 2, 3).unwrap();
        // C(3,2) = 3 matches per group
        assert_eq!(matches.len(), 6);
        let group_a: Vec<_> = matches
            .iter()
            .filter(|m| m.group_name.as_deref() == Some("Group A"))
            .collect();
        let group_b: Vec<_> = matches
            .iter()
            .filter(|m| m.group_name.as_deref() == Some("Group B"))
            .collect();
        assert_eq!(group_a.len(), 3);
        assert_eq!(group_b.len(), 3);
        assert_eq!(group_a[0].name, "Group A - Match 1");
        assert_eq!(group_b[2].name, "Group B - Match 3");
    }

    #[test]
    fn test_teams_are_dealt_round_robin() {
        let matches = generate_groups("Chess 2025", solo_teams(6), 2, 3).unwrap();
        // Deal by index % 2: Group A gets p0, p2, p4; Group B gets p1, p3, p5.
        let in_group_a = |id: &str| {
            matches
                .iter()
                .filter(|m| m.group_name.as_deref() == Some("Group A"))
                .any(|m| m.slot_a.contains(&id.into()) || m.slot_b.contains(&id.into()))
        };
        assert!(in_group_a("p0"));
        assert!(in_group_a("p2"));
        assert!(in_group_a("p4"));
        assert!(!in_group_a("p1"));
        assert!(!in_group_a("p3"));
    }

    #[test]
    fn test_pairs_are_row_major() {
        let matches = generate_groups("Chess 2025", solo_teams(3), 1, 3).unwrap();
        assert_eq!(matches.len(), 3);
        // (0,1), (0,2), (1,2) in order
        assert!(matches[0].slot_a.contains(&"p0".into()) && matches[0].slot_b.contains(&"p1".into()));
        assert!(matches[1].slot_a.contains(&"p0".into()) && matches[1].slot_b.contains(&"p2".into()));
        assert!(matches[2].slot_a.contains(&"p1".into()) && matches[2].slot_b.contains(&"p2".into()));
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let err = generate_groups("Chess 2025", solo_teams(5), 2, 3).unwrap_err();
        assert_eq!(
            err,
            GenerateError::IncorrectPlayerCount {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_single_team_groups_yield_no_matches() {
        let matches = generate_groups("Chess 2025", solo_teams(2), 2, 1).unwrap();
        assert!(matches.is_empty());
    }
}
