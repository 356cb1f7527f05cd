//! Moves and the selectors that propose them.

pub mod r#move;
pub mod selector;

use crewforge_core::{Result, Schedule};
use rand::Rng;

pub use r#move::{AdjacentSwapMove, Move};
pub use selector::{AdjacentSwapMoveSelector, MoveSelector};

/// Returns a copy of `schedule` with the pilots of one random pair of
/// adjacent flights swapped.
///
/// The input is left untouched. Fails with `InvalidInput` when the schedule
/// has fewer than two flights.
///
/// # Example
///
/// ```
/// use crewforge_solver::propose_move;
/// use crewforge_test::zigzag_schedule;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let schedule = zigzag_schedule(4, &["A", "B"]);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let neighbor = propose_move(&schedule, &mut rng).unwrap();
/// assert_eq!(neighbor.len(), schedule.len());
/// ```
pub fn propose_move<R: Rng + ?Sized>(schedule: &Schedule, rng: &mut R) -> Result<Schedule> {
    AdjacentSwapMoveSelector::new()
        .propose_move(schedule, rng)
        .map(|(_, candidate)| candidate)
}
