//! Layout computation for bracket views.
//!
//! This crate turns the rounds of a single-elimination tournament into
//! pixel positions for match cards and the connector lines between them.
//!
//! # Architecture
//!
//! 1. **Placement**: Round 0 stacks its cards top-down; every later card
//!    centers vertically on the feeder matches from the previous round
//! 2. **Connectors**: Each feeder pair joins a shared vertical midline
//!    that leads into the downstream card
//!
//! Card heights vary with content, so callers measure each card and pass
//! the heights in. A layout with unmeasured cards comes back as
//! [`LayoutResult::Pending`] rather than a partial placement.
//!
//! # Example
//!
//! ```ignore
//! use bracket_layout::{compute_layout, LayoutConfig, LayoutResult};
//!
//! let rounds = group_matches_by_round(&matches);
//! match compute_layout(&rounds, &heights, &LayoutConfig::default()) {
//!     LayoutResult::Ready(layout) => render(layout),
//!     LayoutResult::Pending { missing } => measure(missing),
//! }
//! ```

mod bracket;
mod geometry;

pub use bracket::{
    compute_layout, BracketLayout, Connector, LayoutConfig, LayoutResult, Segment,
};
pub use geometry::Rect;
