//! Uniform selector over adjacent swaps.

use crewforge_core::{CrewForgeError, Result, Schedule};
use rand::Rng;

use super::MoveSelector;
use crate::heuristic::r#move::AdjacentSwapMove;

/// Selects `AdjacentSwapMove(i)` with `i` uniform over `0..len - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSwapMoveSelector;

impl AdjacentSwapMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for AdjacentSwapMoveSelector {
    type Move = AdjacentSwapMove;

    fn select_move<R: Rng + ?Sized>(
        &self,
        schedule: &Schedule,
        rng: &mut R,
    ) -> Result<AdjacentSwapMove> {
        if schedule.len() < 2 {
            return Err(CrewForgeError::invalid_input(format!(
                "adjacent swap needs at least 2 flights, schedule has {}",
                schedule.len()
            )));
        }
        Ok(AdjacentSwapMove::new(rng.random_range(0..schedule.len() - 1)))
    }
}
