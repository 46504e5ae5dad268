//! Result resolution over a tournament structure.
//!
//! This crate takes the flat match list for one tournament and:
//! - groups it into display rounds ([`group_matches_by_round`])
//! - builds the id-keyed bracket [`Topology`] from placeholder slots
//! - propagates winners downstream ([`advance_winner`], [`resolve_finished`])
//! - reconstitutes round-robin groups with standings
//!   ([`group_matches_by_group`])
//!
//! Everything here is pure and synchronous; the caller persists the
//! returned slot writes through whatever store it uses.

mod advance;
mod rounds;
mod standings;
mod topology;

pub use advance::{advance_winner, resolve_finished, Advancement};
pub use rounds::group_matches_by_round;
pub use standings::{compute_standings, group_matches_by_group};
pub use topology::{FeedTarget, Topology};
