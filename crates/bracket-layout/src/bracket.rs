//! Non-overlapping 2-D layout for a single-elimination bracket.
//!
//! Card heights vary with content, so the rendering surface measures each
//! card off-screen and hands the heights in. Layout is then a pure
//! function of rounds and heights: round 0 stacks its cards, and every
//! later card centers on its feeders. Positions in round r depend on
//! round r-1, so nothing can be placed until every card is measured.

use std::collections::HashMap;

use bracket_core::{MatchId, Round};
use glam::DVec2;
use indexmap::IndexMap;

use crate::geometry::Rect;

/// Fixed card and gap metrics for the bracket view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of every match card.
    pub card_width: f64,
    /// Horizontal gap between consecutive rounds.
    pub round_gap: f64,
    /// Minimum vertical gap between stacked cards in round 0.
    pub min_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 240.0,
            round_gap: 100.0,
            min_spacing: 40.0,
        }
    }
}

/// A straight connector segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// The polyline joining one or two feeder matches to their downstream
/// match.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub downstream: MatchId,
    pub segments: Vec<Segment>,
}

/// A fully positioned bracket.
#[derive(Debug, Clone)]
pub struct BracketLayout {
    /// Card rectangle per match, in round order then match order.
    pub cards: IndexMap<MatchId, Rect>,
    pub connectors: Vec<Connector>,
    pub width: f64,
    pub height: f64,
}

/// Outcome of a layout pass.
///
/// `Pending` is a retry signal rather than an error: the caller measures
/// the listed cards and invokes the layout again.
#[derive(Debug, Clone)]
pub enum LayoutResult {
    Pending { missing: Vec<MatchId> },
    Ready(BracketLayout),
}

impl LayoutResult {
    pub fn ready(&self) -> Option<&BracketLayout> {
        match self {
            LayoutResult::Ready(layout) => Some(layout),
            LayoutResult::Pending { .. } => None,
        }
    }
}

/// Compute card positions and connector geometry for the given rounds.
///
/// `heights` maps every match id to its measured pixel height; if any
/// card is unmeasured the whole layout is deferred, since round r
/// positions depend transitively on round 0 heights.
pub fn compute_layout(
    rounds: &[Round],
    heights: &HashMap<MatchId, f64>,
    config: &LayoutConfig,
) -> LayoutResult {
    let missing: Vec<MatchId> = rounds
        .iter()
        .flat_map(|r| &r.matches)
        .filter(|m| !heights.contains_key(&m.id))
        .map(|m| m.id.clone())
        .collect();
    if !missing.is_empty() {
        return LayoutResult::Pending { missing };
    }

    let mut placed: Vec<Vec<(MatchId, Rect)>> = Vec::with_capacity(rounds.len());
    for (round_index, round) in rounds.iter().enumerate() {
        let x = round_index as f64 * (config.card_width + config.round_gap);
        let mut row = Vec::with_capacity(round.matches.len());

        if round_index == 0 {
            let mut y = 0.0;
            for m in &round.matches {
                let height = heights[&m.id];
                row.push((m.id.clone(), Rect::new(x, y, config.card_width, height)));
                y += height + config.min_spacing;
            }
        } else {
            let prev = &placed[round_index - 1];
            for (i, m) in round.matches.iter().enumerate() {
                let height = heights[&m.id];
                let feeder_a = prev.get(2 * i).map(|(_, rect)| rect);
                let feeder_b = prev.get(2 * i + 1).map(|(_, rect)| rect);
                let y = match (feeder_a, feeder_b) {
                    // Center between the two feeders' centers.
                    (Some(a), Some(b)) => (a.center_y() + b.center_y()) / 2.0 - height / 2.0,
                    // Lone feeder: center directly on it.
                    (Some(a), None) => a.center_y() - height / 2.0,
                    // No feeders at all: fall back to stacking.
                    _ => i as f64 * (height + config.min_spacing),
                };
                row.push((m.id.clone(), Rect::new(x, y, config.card_width, height)));
            }
        }
        placed.push(row);
    }

    let connectors = build_connectors(&placed, config);
    let width = if placed.is_empty() {
        0.0
    } else {
        (placed.len() - 1) as f64 * (config.card_width + config.round_gap) + config.card_width
    };
    let height = placed
        .iter()
        .flatten()
        .map(|(_, rect)| rect.bottom())
        .fold(0.0, f64::max);
    let cards = placed.into_iter().flatten().collect();

    LayoutResult::Ready(BracketLayout {
        cards,
        connectors,
        width,
        height,
    })
}

/// Connector geometry between consecutive rounds: two horizontal stubs
/// from the feeders' right edges to a shared vertical midline, a vertical
/// joint between them, and one segment from the joint's midpoint to the
/// downstream card's left edge. A lone feeder connects directly.
fn build_connectors(placed: &[Vec<(MatchId, Rect)>], config: &LayoutConfig) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for round_index in 0..placed.len().saturating_sub(1) {
        let current = &placed[round_index];
        let next = &placed[round_index + 1];

        for i in (0..current.len()).step_by(2) {
            let Some((child_id, child)) = next.get(i / 2) else {
                continue;
            };
            let (_, a) = &current[i];
            let mid_x = a.right() + config.round_gap / 2.0;

            let mut segments = Vec::new();
            if let Some((_, b)) = current.get(i + 1) {
                let y_a = a.center_y();
                let y_b = b.center_y();
                let mid_y = (y_a + y_b) / 2.0;
                segments.push(Segment {
                    from: a.right_center(),
                    to: DVec2::new(mid_x, y_a),
                });
                segments.push(Segment {
                    from: b.right_center(),
                    to: DVec2::new(mid_x, y_b),
                });
                segments.push(Segment {
                    from: DVec2::new(mid_x, y_a),
                    to: DVec2::new(mid_x, y_b),
                });
                segments.push(Segment {
                    from: DVec2::new(mid_x, mid_y),
                    to: child.left_center(),
                });
            } else {
                segments.push(Segment {
                    from: a.right_center(),
                    to: child.left_center(),
                });
            }
            connectors.push(Connector {
                downstream: child_id.clone(),
                segments,
            });
        }
    }

    connectors
}
