//! Grouping a flat match list into display rounds.

use bracket_core::{naming, Match, Round};
use indexmap::IndexMap;

/// Group matches by the round part of their name and order everything
/// for play: numbered rounds ascending, then Quarter-Finals, Semi-Finals,
/// Final; within a round, by trailing match number.
pub fn group_matches_by_round(matches: &[Match]) -> Vec<Round> {
    let mut grouped: IndexMap<String, Vec<Match>> = IndexMap::new();
    for m in matches {
        grouped
            .entry(naming::round_prefix(&m.name).to_string())
            .or_default()
            .push(m.clone());
    }

    let mut rounds: Vec<Round> = grouped
        .into_iter()
        .map(|(name, mut matches)| {
            matches.sort_by_key(|m| naming::match_number(&m.name).unwrap_or(0));
            Round { name, matches }
        })
        .collect();
    rounds.sort_by_key(|r| naming::round_order_key(&r.name));
    rounds
}
