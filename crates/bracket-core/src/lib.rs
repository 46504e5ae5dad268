//! Core types, errors, and the match-name grammar for the bracket engine.
//!
//! This crate provides the foundational pieces used across all other
//! bracket crates:
//! - The tournament data model (competitors, teams, matches, rounds, groups)
//! - The match-name grammar that doubles as the structural key format
//! - Error types

pub mod errors;
pub mod naming;
pub mod types;

pub use errors::*;
pub use types::*;
