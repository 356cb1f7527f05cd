//! Per-rule breakdown of a schedule's conflicts.

use std::fmt;

use crewforge_core::Cost;

use crate::ConflictWeights;

/// Hit counts for every conflict rule.
///
/// Weighting the counts with [`ConflictWeights`] yields exactly the cost
/// returned by [`ConflictEvaluator::evaluate`](crate::ConflictEvaluator::evaluate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictAnalysis {
    pub hub_violations: usize,
    pub location_conflicts: usize,
    pub airplane_continuations: usize,
    pub airplane_switches: usize,
    pub idle_jumps: usize,
    pub pilots_used: usize,
}

impl ConflictAnalysis {
    /// Weighted total of all rule hits.
    pub fn cost(&self, weights: &ConflictWeights) -> Cost {
        [
            (weights.hub_violation, self.hub_violations),
            (weights.location_conflict, self.location_conflicts),
            (weights.airplane_continuity, self.airplane_continuations),
            (weights.airplane_switch, self.airplane_switches),
            (weights.idle_jump, self.idle_jumps),
            (weights.pilot_count, self.pilots_used),
        ]
        .into_iter()
        .map(|(weight, hits)| Cost::of(weight).times(hits as i64))
        .sum()
    }
}

impl fmt::Display for ConflictAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hub violations, {} location conflicts, {} airplane switches, \
             {} airplane continuations, {} idle jumps, {} pilots used",
            self.hub_violations,
            self.location_conflicts,
            self.airplane_switches,
            self.airplane_continuations,
            self.idle_jumps,
            self.pilots_used
        )
    }
}
