//! Move selectors.
//!
//! A selector draws one move per search step using the injected random
//! source. New neighborhoods plug into the search by implementing
//! [`MoveSelector`].

mod adjacent_swap;

use std::fmt::Debug;

use crewforge_core::{Result, Schedule};
use rand::Rng;

use crate::heuristic::r#move::Move;

pub use adjacent_swap::AdjacentSwapMoveSelector;

/// Draws candidate moves for a schedule.
pub trait MoveSelector: Debug {
    type Move: Move;

    /// Picks a move applicable to `schedule`.
    fn select_move<R: Rng + ?Sized>(&self, schedule: &Schedule, rng: &mut R)
        -> Result<Self::Move>;

    /// Picks a move and applies it to a copy of `schedule`.
    fn propose_move<R: Rng + ?Sized>(
        &self,
        schedule: &Schedule,
        rng: &mut R,
    ) -> Result<(Self::Move, Schedule)> {
        let selected = self.select_move(schedule, rng)?;
        let mut candidate = schedule.clone();
        selected.apply(&mut candidate)?;
        Ok((selected, candidate))
    }
}
