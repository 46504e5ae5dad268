//! Winner advancement for single-elimination brackets.

use bracket_core::{Match, MatchId, ResolveError, Slot, SlotSide, Team};
use log::warn;

use crate::topology::Topology;

/// A slot write produced by advancement. The caller persists it as a
/// single-record update; no other record changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    pub match_id: MatchId,
    pub side: SlotSide,
    pub team: Team,
}

/// Propagate the winner of the given finished match into the slot of the
/// match that structurally depends on it.
///
/// Returns `Ok(None)` when there is no downstream match: the Final, or a
/// round-robin match. Idempotent: advancing the same match again rewrites
/// the same team into the same slot.
pub fn advance_winner(
    matches: &mut [Match],
    topology: &Topology,
    id: &MatchId,
) -> Result<Option<Advancement>, ResolveError> {
    let source = matches
        .iter()
        .find(|m| &m.id == id)
        .ok_or_else(|| ResolveError::UnknownMatch(id.clone()))?;

    let winner_id = match &source.winner_id {
        Some(winner_id) if source.is_finished() => winner_id.clone(),
        _ => {
            return Err(ResolveError::MatchNotDecided {
                match_name: source.name.clone(),
            })
        }
    };
    let team = source
        .winning_team()
        .ok_or_else(|| ResolveError::WinnerNotInMatch {
            winner_id,
            match_name: source.name.clone(),
        })?;

    let Some(target) = topology.downstream_of(id) else {
        return Ok(None);
    };
    let downstream = matches
        .iter_mut()
        .find(|m| m.id == target.match_id)
        .ok_or_else(|| ResolveError::UnknownMatch(target.match_id.clone()))?;

    // Writing the team also clears the placeholder text on that slot.
    *downstream.slot_mut(target.side) = Slot::Team(team.clone());

    Ok(Some(Advancement {
        match_id: target.match_id.clone(),
        side: target.side,
        team,
    }))
}

/// Re-run advancement over every finished match with a recorded winner.
///
/// This is the retry/fix-up path: safe to run any number of times, and a
/// bad record never blocks the rest of the bracket. Failures are logged
/// and skipped because the finished-match write itself is valid even when
/// propagation fails.
pub fn resolve_finished(matches: &mut [Match], topology: &Topology) -> Vec<Advancement> {
    let finished: Vec<MatchId> = matches
        .iter()
        .filter(|m| m.is_finished() && m.winner_id.is_some())
        .map(|m| m.id.clone())
        .collect();

    let mut applied = Vec::new();
    for id in finished {
        match advance_winner(matches, topology, &id) {
            Ok(Some(advancement)) => applied.push(advancement),
            Ok(None) => {}
            Err(err) => warn!("advancement for match {id} skipped: {err}"),
        }
    }
    applied
}
