//! Fluent schedule builder.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use crewforge_core::{Airplane, City, Flight, PilotId, Schedule};

/// Departure time `hour` hours after the fixture epoch (2024-05-01 06:00).
pub fn departure(hour: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(6, 0, 0))
        .expect("fixture epoch is a valid date")
        + Duration::hours(hour)
}

/// Builds schedules leg by leg, spacing departures two hours apart.
///
/// # Example
///
/// ```
/// use crewforge_test::ScheduleBuilder;
///
/// let schedule = ScheduleBuilder::new()
///     .leg("H", "X", "P1", "A")
///     .leg("X", "H", "P1", "A")
///     .build();
///
/// assert_eq!(schedule.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    flights: Vec<Flight>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a leg departing two hours after the previous one.
    pub fn leg(self, from: &str, to: &str, airplane: &str, pilot: &str) -> Self {
        let hour = 2 * self.flights.len() as i64;
        self.leg_at(from, to, airplane, pilot, hour)
    }

    /// Appends a leg with an explicit departure hour.
    pub fn leg_at(mut self, from: &str, to: &str, airplane: &str, pilot: &str, hour: i64) -> Self {
        self.flights.push(Flight::new(
            City::new(from),
            City::new(to),
            Airplane::new(airplane),
            PilotId::new(pilot),
            departure(hour),
        ));
        self
    }

    /// Builds the schedule, panicking on out-of-order legs.
    pub fn build(self) -> Schedule {
        Schedule::new(self.flights).expect("fixture legs are in departure order")
    }
}
