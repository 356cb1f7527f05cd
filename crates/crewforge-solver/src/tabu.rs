//! Tabu memory.
//!
//! Remembers which (pilot, airplane, departure time) combinations were
//! recently committed and forbids them, by penalty, for a number of
//! iterations. Keys are value tuples: two different flights with the same
//! pilot, airplane and departure time share one entry.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use crewforge_core::{Airplane, Cost, Flight, PilotId, Schedule};

/// Identity of a (pilot, airplane, time slot) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabuKey {
    pilot: PilotId,
    airplane: Airplane,
    departure_time: NaiveDateTime,
}

impl TabuKey {
    pub fn new(pilot: PilotId, airplane: Airplane, departure_time: NaiveDateTime) -> Self {
        Self {
            pilot,
            airplane,
            departure_time,
        }
    }

    pub fn pilot(&self) -> &PilotId {
        &self.pilot
    }

    pub fn airplane(&self) -> &Airplane {
        &self.airplane
    }

    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }
}

/// Derives the tabu key of a flight's current assignment.
pub fn key_for(flight: &Flight) -> TabuKey {
    TabuKey::new(
        flight.assigned_pilot().clone(),
        flight.airplane().clone(),
        flight.departure_time(),
    )
}

/// Decaying set of forbidden assignments.
///
/// Each tracked key carries a remaining tenure. [`decay`](Self::decay)
/// lowers every tenure by one and drops entries that reach zero.
///
/// # Example
///
/// ```
/// use crewforge_solver::{key_for, TabuMemory};
/// use crewforge_test::three_leg_schedule;
///
/// let schedule = three_leg_schedule();
/// let key = key_for(&schedule.flights()[0]);
/// let mut memory = TabuMemory::new();
///
/// memory.commit(&schedule, 2);
/// assert!(memory.is_tabu(&key));
///
/// memory.decay();
/// memory.decay();
/// assert!(!memory.is_tabu(&key));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    tenures: HashMap<TabuKey, u32>,
}

impl TabuMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` is tracked with a positive tenure.
    pub fn is_tabu(&self, key: &TabuKey) -> bool {
        self.tenure(key) > 0
    }

    /// Remaining tenure of `key`, zero when untracked.
    pub fn tenure(&self, key: &TabuKey) -> u32 {
        self.tenures.get(key).copied().unwrap_or(0)
    }

    /// Sets the tenure of every flight's key in `schedule` to `tenure`.
    pub fn commit(&mut self, schedule: &Schedule, tenure: u32) {
        for flight in schedule {
            let key = key_for(flight);
            if tenure == 0 {
                self.tenures.remove(&key);
            } else {
                self.tenures.insert(key, tenure);
            }
        }
    }

    /// Decrements every tracked tenure by one, dropping expired keys.
    pub fn decay(&mut self) {
        self.tenures.retain(|_, tenure| {
            *tenure = tenure.saturating_sub(1);
            *tenure > 0
        });
    }

    /// Number of flights in `schedule` whose key is tabu.
    pub fn tabu_hits(&self, schedule: &Schedule) -> usize {
        if self.tenures.is_empty() {
            return 0;
        }
        schedule
            .iter()
            .filter(|flight| self.is_tabu(&key_for(flight)))
            .count()
    }

    /// Cost of `per_hit` for every tabu flight in `schedule`.
    pub fn penalty(&self, schedule: &Schedule, per_hit: Cost) -> Cost {
        per_hit.times(self.tabu_hits(schedule) as i64)
    }

    /// Number of keys currently tabu.
    pub fn len(&self) -> usize {
        self.tenures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenures.is_empty()
    }

    pub fn clear(&mut self) {
        self.tenures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewforge_test::{three_leg_schedule, zigzag_schedule, ScheduleBuilder, HUB, PLANE, SPOKE};

    #[test]
    fn test_key_collides_on_identity_tuple() {
        let a = ScheduleBuilder::new()
            .leg_at(HUB, SPOKE, PLANE, "A", 0)
            .build();
        let b = ScheduleBuilder::new()
            .leg_at(SPOKE, "Y", PLANE, "A", 0)
            .build();

        assert_eq!(key_for(&a.flights()[0]), key_for(&b.flights()[0]));
    }

    #[test]
    fn test_key_differs_by_pilot() {
        let schedule = zigzag_schedule(2, &["A", "B"]);
        let swapped = zigzag_schedule(2, &["B", "A"]);

        assert_ne!(
            key_for(&schedule.flights()[0]),
            key_for(&swapped.flights()[0])
        );
    }

    #[test]
    fn test_commit_and_decay() {
        let schedule = three_leg_schedule();
        let key = key_for(&schedule.flights()[1]);
        let mut memory = TabuMemory::new();
        assert!(!memory.is_tabu(&key));

        memory.commit(&schedule, 3);
        assert_eq!(memory.tenure(&key), 3);
        assert_eq!(memory.len(), 3);

        memory.decay();
        memory.decay();
        assert!(memory.is_tabu(&key));
        assert_eq!(memory.tenure(&key), 1);

        memory.decay();
        assert!(!memory.is_tabu(&key));
        assert!(memory.is_empty());

        // Decay never goes below zero.
        memory.decay();
        assert_eq!(memory.tenure(&key), 0);
    }

    #[test]
    fn test_commit_refreshes_tenure() {
        let schedule = three_leg_schedule();
        let key = key_for(&schedule.flights()[0]);
        let mut memory = TabuMemory::new();

        memory.commit(&schedule, 2);
        memory.decay();
        memory.commit(&schedule, 2);

        assert_eq!(memory.tenure(&key), 2);
    }

    #[test]
    fn test_zero_tenure_commit_is_inert() {
        let schedule = three_leg_schedule();
        let mut memory = TabuMemory::new();

        memory.commit(&schedule, 0);

        assert!(memory.is_empty());
        assert_eq!(memory.tabu_hits(&schedule), 0);
    }

    #[test]
    fn test_penalty_counts_tabu_flights() {
        let committed = zigzag_schedule(4, &["A", "B"]);
        let mut memory = TabuMemory::new();
        memory.commit(&committed, 5);

        assert_eq!(memory.penalty(&committed, Cost::of(1000)), Cost::of(4000));

        // Swapping the first two pilots frees those two slots.
        let mut candidate = committed.clone();
        candidate.swap_pilots(0, 1).unwrap();
        assert_eq!(memory.tabu_hits(&candidate), 2);
        assert_eq!(memory.penalty(&candidate, Cost::of(1000)), Cost::of(2000));
    }
}
