//! Splitting a flat roster selection into fixed-size teams.

use bracket_core::{Competitor, Team};
use rand::{seq::SliceRandom, Rng};

/// Team size implied by a match type label (`"2v2"` -> 2). Unknown labels
/// mean individual play.
pub fn team_size_for(match_type: &str) -> usize {
    match match_type {
        "2v2" => 2,
        "4v4" => 4,
        _ => 1,
    }
}

/// Partition an ordered competitor list into consecutive teams of
/// `team_size`, optionally shuffling first.
///
/// Order-preserving relative to the (possibly shuffled) input. Does not
/// pad or reject: a competitor count that is not a multiple of
/// `team_size` yields a final short team, which the structure generator
/// rejects.
pub fn split_into_teams(competitors: Vec<Competitor>, team_size: usize, shuffle: bool) -> Vec<Team> {
    split_into_teams_with_rng(competitors, team_size, shuffle, &mut rand::rng())
}

/// [`split_into_teams`] with a caller-supplied RNG, for deterministic
/// shuffles.
pub fn split_into_teams_with_rng<R: Rng + ?Sized>(
    mut competitors: Vec<Competitor>,
    team_size: usize,
    shuffle: bool,
    rng: &mut R,
) -> Vec<Team> {
    let team_size = team_size.max(1);
    if shuffle {
        competitors.shuffle(rng);
    }
    competitors
        .chunks(team_size)
        .map(|chunk| Team::new(chunk.iter().cloned()))
        .collect()
}
