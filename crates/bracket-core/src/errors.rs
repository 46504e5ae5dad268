//! Error types for the bracket engine.

use thiserror::Error;

use crate::types::{CompetitorId, MatchId};

/// Top-level error type for the bracket engine.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors raised while generating a tournament structure.
///
/// Generation validates before creating: every one of these surfaces
/// before any match record exists, so a failed generation never leaves a
/// partial structure behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("the number of teams ({num_teams}) must be a power of 2 (e.g. 4, 8, 16)")]
    InvalidShape { num_teams: usize },

    #[error("selected {actual} competitors, but this configuration requires {expected}")]
    IncorrectPlayerCount { expected: usize, actual: usize },

    #[error("need at least 2 competitors for a free-for-all, got {actual}")]
    InsufficientPlayers { actual: usize },

    #[error("a team of {size} does not fill the requested team size of {team_size}")]
    ShortTeam { size: usize, team_size: usize },
}

/// Errors raised while resolving results against an existing structure.
///
/// These never roll back the result write that triggered them; the caller
/// logs and retries, and re-running resolution is idempotent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no match with id {0}")]
    UnknownMatch(MatchId),

    #[error("match \"{match_name}\" is not finished with a recorded winner")]
    MatchNotDecided { match_name: String },

    #[error("winner {winner_id} does not appear in match \"{match_name}\"")]
    WinnerNotInMatch {
        winner_id: CompetitorId,
        match_name: String,
    },

    #[error("duplicate match name \"{0}\"")]
    DuplicateMatchName(String),

    #[error("\"{feeder}\" feeds more than one downstream slot")]
    DuplicateDownstream { feeder: String },

    #[error("placeholder \"{placeholder}\" references a match that does not exist")]
    MissingSource { placeholder: String },
}
