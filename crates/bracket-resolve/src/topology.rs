//! The id-keyed bracket topology.
//!
//! Placeholder text is only parsed here, once. After construction,
//! advancement is an O(1) id lookup and never touches display labels, so
//! relabeling a round cannot break resolution mid-tournament.

use std::collections::HashMap;

use bracket_core::{naming, Match, MatchId, ResolveError, SlotSide};

/// Where a finished match's winner goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTarget {
    pub match_id: MatchId,
    pub side: SlotSide,
}

/// Parent index for a single-elimination bracket: source match id to the
/// downstream match and slot its winner occupies.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    downstream: HashMap<MatchId, FeedTarget>,
}

impl Topology {
    /// Build the index by scanning every unresolved slot's placeholder.
    ///
    /// A slot whose placeholder has already been cleared by advancement
    /// contributes no edge, which is exactly right: re-advancing that
    /// match is a no-op. Construction fails on structures that violate
    /// the generation invariants: duplicate match names, one match
    /// feeding two slots, or a placeholder referencing a match that does
    /// not exist.
    pub fn from_matches(matches: &[Match]) -> Result<Self, ResolveError> {
        let mut by_name: HashMap<&str, &MatchId> = HashMap::with_capacity(matches.len());
        for m in matches {
            if by_name.insert(m.name.as_str(), &m.id).is_some() {
                return Err(ResolveError::DuplicateMatchName(m.name.clone()));
            }
        }

        let mut downstream = HashMap::new();
        for m in matches {
            // Slot A before slot B, preserving the original lookup order.
            for side in [SlotSide::A, SlotSide::B] {
                let Some(placeholder) = m.slot(side).placeholder() else {
                    continue;
                };
                let Some(source_name) = naming::placeholder_source(placeholder) else {
                    continue;
                };
                let Some(source_id) = by_name.get(source_name) else {
                    return Err(ResolveError::MissingSource {
                        placeholder: placeholder.to_string(),
                    });
                };
                let target = FeedTarget {
                    match_id: m.id.clone(),
                    side,
                };
                if downstream.insert((*source_id).clone(), target).is_some() {
                    return Err(ResolveError::DuplicateDownstream {
                        feeder: source_name.to_string(),
                    });
                }
            }
        }

        Ok(Self { downstream })
    }

    /// The downstream slot fed by the given match, if any. `None` means
    /// the match is the Final (or a round-robin match, which never
    /// advances anyone).
    pub fn downstream_of(&self, id: &MatchId) -> Option<&FeedTarget> {
        self.downstream.get(id)
    }

    pub fn len(&self) -> usize {
        self.downstream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downstream.is_empty()
    }
}
