//! A single scheduled leg.

use chrono::NaiveDateTime;

use super::{Airplane, City, PilotId};

/// A scheduled flight between two cities.
///
/// Everything except the assigned pilot is fixed once the flight is created;
/// the pilot changes only through [`Schedule::swap_pilots`](super::Schedule::swap_pilots).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flight {
    from_city: City,
    to_city: City,
    airplane: Airplane,
    assigned_pilot: PilotId,
    departure_time: NaiveDateTime,
}

impl Flight {
    pub fn new(
        from_city: City,
        to_city: City,
        airplane: Airplane,
        assigned_pilot: PilotId,
        departure_time: NaiveDateTime,
    ) -> Self {
        Self {
            from_city,
            to_city,
            airplane,
            assigned_pilot,
            departure_time,
        }
    }

    pub fn from_city(&self) -> &City {
        &self.from_city
    }

    pub fn to_city(&self) -> &City {
        &self.to_city
    }

    pub fn airplane(&self) -> &Airplane {
        &self.airplane
    }

    pub fn assigned_pilot(&self) -> &PilotId {
        &self.assigned_pilot
    }

    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    pub(super) fn pilot_mut(&mut self) -> &mut PilotId {
        &mut self.assigned_pilot
    }
}
