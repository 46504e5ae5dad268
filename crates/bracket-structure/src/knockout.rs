//! Single-elimination and free-for-all structure generation.

use bracket_core::{naming, Competitor, GenerateError, NewMatch, Slot, Team};

/// Generate a single-elimination bracket for the given teams.
///
/// Returns one `Vec<NewMatch>` per round, in play order. Round 0 pairs
/// adjacent teams; every later round's slots are placeholders referencing
/// the two matches feeding it. All matches start in draft state, and
/// nothing is produced unless the whole structure validates.
pub fn generate_knockout(
    tournament: &str,
    teams: Vec<Team>,
) -> Result<Vec<Vec<NewMatch>>, GenerateError> {
    reject_short_teams(&teams)?;

    let num_teams = teams.len();
    if num_teams < 2 || !num_teams.is_power_of_two() {
        return Err(GenerateError::InvalidShape { num_teams });
    }
    let total_rounds = num_teams.trailing_zeros() as usize;

    let mut rounds: Vec<Vec<NewMatch>> = Vec::with_capacity(total_rounds);

    let label = naming::round_label(0, total_rounds);
    let mut first = Vec::with_capacity(num_teams / 2);
    let mut pairs = teams.into_iter();
    let mut n = 0;
    while let (Some(a), Some(b)) = (pairs.next(), pairs.next()) {
        n += 1;
        first.push(NewMatch::bracketed(
            tournament,
            naming::match_label(&label, n),
            Slot::Team(a),
            Slot::Team(b),
        ));
    }
    rounds.push(first);

    for r in 1..total_rounds {
        let label = naming::round_label(r, total_rounds);
        let prev: Vec<String> = rounds[r - 1].iter().map(|m| m.name.clone()).collect();
        let mut current = Vec::with_capacity(prev.len() / 2);
        for i in 0..prev.len() / 2 {
            current.push(NewMatch::bracketed(
                tournament,
                naming::match_label(&label, i + 1),
                Slot::winner_of(&prev[2 * i]),
                Slot::winner_of(&prev[2 * i + 1]),
            ));
        }
        rounds.push(current);
    }

    Ok(rounds)
}

/// Generate the single free-for-all match covering all selected
/// competitors. There is no bracket tree in this case.
pub fn generate_free_for_all(
    tournament: &str,
    competitors: Vec<Competitor>,
) -> Result<NewMatch, GenerateError> {
    if competitors.len() < 2 {
        return Err(GenerateError::InsufficientPlayers {
            actual: competitors.len(),
        });
    }
    Ok(NewMatch::free_for_all(
        tournament,
        format!("{tournament} - Final"),
        competitors,
    ))
}

/// The partitioner slices without padding or rejecting, so a roster that
/// does not divide evenly shows up here as a trailing short team. The
/// largest team is the reference size, so the error names the short one
/// regardless of where it sits in the list.
pub(crate) fn reject_short_teams(teams: &[Team]) -> Result<(), GenerateError> {
    let Some(team_size) = teams.iter().map(|t| t.members.len()).max() else {
        return Ok(());
    };
    if let Some(short) = teams.iter().find(|t| t.members.len() != team_size) {
        return Err(GenerateError::ShortTeam {
            size: short.members.len(),
            team_size,
        });
    }
    Ok(())
}
