//! Tournament structure generation.
//!
//! Turns a flat roster selection into a validated competition structure:
//! - [`split_into_teams`]: partition competitors into fixed-size teams
//! - [`generate_knockout`]: single-elimination rounds with placeholder
//!   slots wiring each match to the two matches feeding it
//! - [`generate_free_for_all`]: one match, all competitors, one winner
//! - [`generate_groups`]: round-robin groups
//!
//! All generation validates before creating any match record, so a failed
//! generation never leaves a partial structure behind.

mod groups;
mod knockout;
mod partition;

pub use groups::generate_groups;
pub use knockout::{generate_free_for_all, generate_knockout};
pub use partition::{split_into_teams, split_into_teams_with_rng, team_size_for};
