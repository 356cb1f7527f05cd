//! AdjacentSwapMove - exchanges pilots between two consecutive flights.

use crewforge_core::{CrewForgeError, Result, Schedule};

use super::Move;

/// Swaps the assigned pilots of flights `left` and `left + 1`.
///
/// Flights keep their position and departure time; only the pilots trade
/// places.
///
/// # Example
/// ```
/// use crewforge_solver::{AdjacentSwapMove, Move};
/// use crewforge_test::zigzag_schedule;
///
/// let mut schedule = zigzag_schedule(3, &["A", "B", "C"]);
/// let m = AdjacentSwapMove::new(1);
///
/// m.apply(&mut schedule).unwrap();
/// assert_eq!(schedule.flights()[1].assigned_pilot().as_str(), "C");
/// assert_eq!(schedule.flights()[2].assigned_pilot().as_str(), "B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacentSwapMove {
    indices: [usize; 2],
}

impl AdjacentSwapMove {
    pub fn new(left: usize) -> Self {
        Self {
            indices: [left, left + 1],
        }
    }

    pub fn left(&self) -> usize {
        self.indices[0]
    }

    pub fn right(&self) -> usize {
        self.indices[1]
    }

    /// Returns true if both flights already have the same pilot.
    pub fn is_noop(&self, schedule: &Schedule) -> bool {
        match (schedule.get(self.left()), schedule.get(self.right())) {
            (Some(l), Some(r)) => l.assigned_pilot() == r.assigned_pilot(),
            _ => false,
        }
    }
}

impl Move for AdjacentSwapMove {
    fn is_doable(&self, schedule: &Schedule) -> bool {
        self.right() < schedule.len()
    }

    fn apply(&self, schedule: &mut Schedule) -> Result<()> {
        if !self.is_doable(schedule) {
            return Err(CrewForgeError::invalid_input(format!(
                "adjacent swap at {} needs at least {} flights, schedule has {}",
                self.left(),
                self.right() + 1,
                schedule.len()
            )));
        }
        schedule.swap_pilots(self.left(), self.right())
    }

    fn flight_indices(&self) -> &[usize] {
        &self.indices
    }
}
