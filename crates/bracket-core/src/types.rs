//! Core value types for tournament structures.

use std::fmt;

use smallvec::SmallVec;

use crate::naming;

/// Identifier of a competitor, assigned by the roster store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompetitorId(pub String);

impl From<&str> for CompetitorId {
    fn from(s: &str) -> Self {
        CompetitorId(s.to_string())
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a match, assigned by the match store on bulk-create.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchId(pub String);

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        MatchId(s.to_string())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order-independent identity of a team: sorted member ids joined by `-`.
///
/// Every place that aggregates per-team records must derive the key the
/// same way, or a team's record silently fragments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamKey(pub String);

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A competitor, opaque to the engine beyond identity and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
}

impl Competitor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CompetitorId(id.into()),
            name: name.into(),
        }
    }
}

/// An ordered, non-empty group of competitors playing as one side.
///
/// Size 1 for individual play, size N for fixed-size team play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub members: SmallVec<[Competitor; 4]>,
}

impl Team {
    pub fn new(members: impl IntoIterator<Item = Competitor>) -> Self {
        let members: SmallVec<[Competitor; 4]> = members.into_iter().collect();
        debug_assert!(!members.is_empty(), "a team must have at least one member");
        Self { members }
    }

    /// A single-competitor team.
    pub fn solo(competitor: Competitor) -> Self {
        Self::new([competitor])
    }

    /// The order-independent standings key for this team.
    pub fn key(&self) -> TeamKey {
        let mut ids: Vec<&str> = self.members.iter().map(|m| m.id.0.as_str()).collect();
        ids.sort_unstable();
        TeamKey(ids.join("-"))
    }

    /// Whether any member has the given id. For team slots, any member's
    /// id unambiguously identifies the team.
    pub fn contains(&self, id: &CompetitorId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Display label: the first member's name, with a member count suffix
    /// for multi-competitor teams.
    pub fn display_name(&self) -> String {
        let main = &self.members[0].name;
        match self.members.len() {
            1 => main.clone(),
            2 => format!("{main} & 1 other"),
            n => format!("{main} & {} others", n - 1),
        }
    }
}

/// One side of a standard match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// A resolved team.
    Team(Team),
    /// A textual forward-reference to the winner of another match,
    /// holding the full placeholder text (`Winner of <matchName>`).
    Pending(String),
    /// Not yet assigned.
    Tbd,
}

impl Slot {
    /// A placeholder slot referencing the named match's winner.
    pub fn winner_of(match_name: &str) -> Self {
        Slot::Pending(naming::winner_placeholder(match_name))
    }

    pub fn team(&self) -> Option<&Team> {
        match self {
            Slot::Team(team) => Some(team),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Slot::Pending(text) => Some(text),
            _ => None,
        }
    }

    pub fn contains(&self, id: &CompetitorId) -> bool {
        self.team().is_some_and(|team| team.contains(id))
    }
}

/// Which side of a match a slot is on. Slot A is always considered before
/// slot B where the order is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotSide {
    A,
    B,
}

/// Lifecycle status of a match. Only `Finished` matches count toward
/// standings or trigger advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStatus {
    #[default]
    Draft,
    Upcoming,
    Ongoing,
    Finished,
    Cancelled,
}

/// Per-slot score. Meaningless for free-for-all matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

/// A generated match record, before the match store has assigned an id.
///
/// The structure generator emits these in bulk; the store's atomic
/// multi-record insert attaches ids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewMatch {
    pub tournament: String,
    /// Human-readable label encoding round and position, e.g.
    /// `Round 1 - Match 3`. Doubles as the structural key consumed by
    /// placeholder resolution, so it is load-bearing, not cosmetic.
    pub name: String,
    pub slot_a: Slot,
    pub slot_b: Slot,
    /// Present only for free-for-all matches, where the two slots are
    /// unused and any one competitor may be declared winner.
    pub all_competitors: Option<Vec<Competitor>>,
    /// Present only for round-robin matches.
    pub group_name: Option<String>,
    pub status: MatchStatus,
    pub winner_id: Option<CompetitorId>,
    pub score: Score,
}

impl NewMatch {
    /// A standard two-slot match in draft state.
    pub fn bracketed(
        tournament: impl Into<String>,
        name: impl Into<String>,
        slot_a: Slot,
        slot_b: Slot,
    ) -> Self {
        Self {
            tournament: tournament.into(),
            name: name.into(),
            slot_a,
            slot_b,
            all_competitors: None,
            group_name: None,
            status: MatchStatus::Draft,
            winner_id: None,
            score: Score::default(),
        }
    }

    /// A free-for-all match in draft state. The two slots stay unused.
    pub fn free_for_all(
        tournament: impl Into<String>,
        name: impl Into<String>,
        competitors: Vec<Competitor>,
    ) -> Self {
        Self {
            tournament: tournament.into(),
            name: name.into(),
            slot_a: Slot::Tbd,
            slot_b: Slot::Tbd,
            all_competitors: Some(competitors),
            group_name: None,
            status: MatchStatus::Draft,
            winner_id: None,
            score: Score::default(),
        }
    }

    /// Tag this match as part of a round-robin group.
    pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Attach the store-assigned id.
    pub fn into_match(self, id: MatchId) -> Match {
        Match {
            id,
            tournament: self.tournament,
            name: self.name,
            slot_a: self.slot_a,
            slot_b: self.slot_b,
            all_competitors: self.all_competitors,
            group_name: self.group_name,
            status: self.status,
            winner_id: self.winner_id,
            score: self.score,
        }
    }
}

/// A persisted match: the atomic unit of competition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub id: MatchId,
    pub tournament: String,
    pub name: String,
    pub slot_a: Slot,
    pub slot_b: Slot,
    pub all_competitors: Option<Vec<Competitor>>,
    pub group_name: Option<String>,
    pub status: MatchStatus,
    pub winner_id: Option<CompetitorId>,
    pub score: Score,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn is_free_for_all(&self) -> bool {
        self.all_competitors.is_some()
    }

    pub fn slot(&self, side: SlotSide) -> &Slot {
        match side {
            SlotSide::A => &self.slot_a,
            SlotSide::B => &self.slot_b,
        }
    }

    pub fn slot_mut(&mut self, side: SlotSide) -> &mut Slot {
        match side {
            SlotSide::A => &mut self.slot_a,
            SlotSide::B => &mut self.slot_b,
        }
    }

    /// Resolve the team identified by `winner_id`.
    ///
    /// For a free-for-all match the winner is the single matching
    /// competitor; for a standard match it is whichever slot contains a
    /// member with that id (slot A checked first).
    pub fn winning_team(&self) -> Option<Team> {
        let winner_id = self.winner_id.as_ref()?;
        if let Some(competitors) = &self.all_competitors {
            return competitors
                .iter()
                .find(|c| &c.id == winner_id)
                .map(|c| Team::solo(c.clone()));
        }
        if self.slot_a.contains(winner_id) {
            return self.slot_a.team().cloned();
        }
        if self.slot_b.contains(winner_id) {
            return self.slot_b.team().cloned();
        }
        None
    }
}

/// A named, ordered list of matches sharing a structural rank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
}

/// A round-robin group with its derived standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub name: String,
    pub matches: Vec<Match>,
    pub standings: Vec<Standing>,
}

/// One row of a group standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub key: TeamKey,
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
}

impl Standing {
    /// A zeroed row for a team that has not played yet.
    pub fn new(team: Team) -> Self {
        Self {
            key: team.key(),
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: &str) -> Competitor {
        Competitor::new(id, format!("Player {id}"))
    }

    #[test]
    fn test_team_key_is_order_independent() {
        let forward = Team::new([competitor("a"), competitor("b")]);
        let reversed = Team::new([competitor("b"), competitor("a")]);
        assert_eq!(forward.key(), reversed.key());
        assert_eq!(forward.key().0, "a-b");
    }

    #[test]
    fn test_team_display_name() {
        assert_eq!(Team::solo(competitor("a")).display_name(), "Player a");
        assert_eq!(
            Team::new([competitor("a"), competitor("b")]).display_name(),
            "Player a & 1 other"
        );
        assert_eq!(
            Team::new([competitor("a"), competitor("b"), competitor("c")]).display_name(),
            "Player a & 2 others"
        );
    }

    #[test]
    fn test_slot_contains() {
        let slot = Slot::Team(Team::new([competitor("a"), competitor("b")]));
        assert!(slot.contains(&"b".into()));
        assert!(!slot.contains(&"c".into()));
        assert!(!Slot::winner_of("Round 1 - Match 1").contains(&"a".into()));
    }

    #[test]
    fn test_winning_team_standard_match() {
        let mut m = NewMatch::bracketed(
            "Carrom 2025",
            "Final - Match 1",
            Slot::Team(Team::solo(competitor("a"))),
            Slot::Team(Team::solo(competitor("b"))),
        )
        .into_match("m1".into());
        m.status = MatchStatus::Finished;
        m.winner_id = Some("b".into());

        let team = m.winning_team().unwrap();
        assert!(team.contains(&"b".into()));
    }

    #[test]
    fn test_winning_team_free_for_all() {
        let mut m = NewMatch::free_for_all(
            "PUBG 2025",
            "PUBG 2025 - Final",
            vec![competitor("a"), competitor("b"), competitor("c")],
        )
        .into_match("m1".into());
        m.status = MatchStatus::Finished;
        m.winner_id = Some("c".into());

        let team = m.winning_team().unwrap();
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].id, "c".into());
    }

    #[test]
    fn test_winning_team_unknown_winner() {
        let mut m = NewMatch::bracketed(
            "Carrom 2025",
            "Final - Match 1",
            Slot::Team(Team::solo(competitor("a"))),
            Slot::Team(Team::solo(competitor("b"))),
        )
        .into_match("m1".into());
        m.status = MatchStatus::Finished;
        m.winner_id = Some("zz".into());
        assert!(m.winning_team().is_none());
    }
}
