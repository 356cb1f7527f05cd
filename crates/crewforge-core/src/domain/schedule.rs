//! The chronologically ordered flight sequence.

use std::collections::HashSet;

use super::{Airplane, Flight, PilotId};
use crate::error::{CrewForgeError, Result};

/// An ordered sequence of flights.
///
/// Departure times never decrease along the sequence. The order is fixed at
/// construction; the only mutation is exchanging assigned pilots, so the
/// length and the legs themselves stay constant for the schedule's lifetime.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crewforge_core::{Airplane, City, Flight, PilotId, Schedule};
///
/// let t0 = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let leg = |from: &str, to: &str, pilot: &str, hour: i64| {
///     Flight::new(
///         City::new(from),
///         City::new(to),
///         Airplane::new("Airplane 1"),
///         PilotId::new(pilot),
///         t0 + chrono::Duration::hours(hour),
///     )
/// };
///
/// let mut schedule = Schedule::new(vec![leg("Riga", "Liepaja", "A", 0), leg("Liepaja", "Riga", "B", 2)]).unwrap();
/// schedule.swap_pilots(0, 1).unwrap();
///
/// assert_eq!(schedule.flights()[0].assigned_pilot().as_str(), "B");
/// assert_eq!(schedule.distinct_pilot_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Flight>", into = "Vec<Flight>")
)]
pub struct Schedule {
    flights: Vec<Flight>,
}

impl Schedule {
    /// Creates a schedule, rejecting flights that are not in departure order.
    pub fn new(flights: Vec<Flight>) -> Result<Self> {
        if let Some(i) = flights
            .windows(2)
            .position(|pair| pair[1].departure_time() < pair[0].departure_time())
        {
            return Err(CrewForgeError::invalid_input(format!(
                "flight {} departs at {} before flight {} at {}",
                i + 1,
                flights[i + 1].departure_time(),
                i,
                flights[i].departure_time()
            )));
        }
        Ok(Self { flights })
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn get(&self, index: usize) -> Option<&Flight> {
        self.flights.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Exchanges the assigned pilots of two flights.
    ///
    /// Swapping a flight with itself is a no-op.
    pub fn swap_pilots(&mut self, left: usize, right: usize) -> Result<()> {
        let len = self.flights.len();
        if left >= len || right >= len {
            return Err(CrewForgeError::invalid_input(format!(
                "cannot swap pilots of flights {left} and {right} in a schedule of {len} flights"
            )));
        }
        if left == right {
            return Ok(());
        }

        let (low, high) = (left.min(right), left.max(right));
        let (head, tail) = self.flights.split_at_mut(high);
        std::mem::swap(head[low].pilot_mut(), tail[0].pilot_mut());
        Ok(())
    }

    /// Flights flown by `pilot`, in schedule order.
    pub fn flights_for_pilot<'a>(
        &'a self,
        pilot: &'a PilotId,
    ) -> impl Iterator<Item = &'a Flight> + 'a {
        self.flights
            .iter()
            .filter(move |f| f.assigned_pilot() == pilot)
    }

    /// Flights operated by `airplane`, in schedule order.
    pub fn flights_for_airplane<'a>(
        &'a self,
        airplane: &'a Airplane,
    ) -> impl Iterator<Item = &'a Flight> + 'a {
        self.flights
            .iter()
            .filter(move |f| f.airplane() == airplane)
    }

    /// Pilots assigned to at least one flight, in order of first appearance.
    pub fn pilots_used(&self) -> Vec<&PilotId> {
        let mut seen = HashSet::new();
        self.flights
            .iter()
            .map(Flight::assigned_pilot)
            .filter(|pilot| seen.insert(*pilot))
            .collect()
    }

    pub fn distinct_pilot_count(&self) -> usize {
        self.flights
            .iter()
            .map(Flight::assigned_pilot)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl TryFrom<Vec<Flight>> for Schedule {
    type Error = CrewForgeError;

    fn try_from(flights: Vec<Flight>) -> Result<Self> {
        Schedule::new(flights)
    }
}

impl From<Schedule> for Vec<Flight> {
    fn from(schedule: Schedule) -> Self {
        schedule.flights
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}
