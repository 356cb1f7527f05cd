//! Move types.
//!
//! A move describes a change to a schedule's pilot assignments. Moves are
//! applied to a copy of the current schedule, so no undo is needed.

mod adjacent_swap;

use std::fmt::Debug;

use crewforge_core::{Result, Schedule};

pub use adjacent_swap::AdjacentSwapMove;

/// A change to the pilot assignments of a schedule.
pub trait Move: Debug {
    /// Returns true if the move can be applied to `schedule`.
    fn is_doable(&self, schedule: &Schedule) -> bool;

    /// Applies the move in place.
    fn apply(&self, schedule: &mut Schedule) -> Result<()>;

    /// Indices of the flights whose pilot may change.
    fn flight_indices(&self) -> &[usize];
}

#[cfg(test)]
mod tests;
