//! The conflict evaluator.

use std::collections::HashMap;

use crewforge_core::{Airplane, City, Cost, PilotId, Roster, Schedule};

use crate::{ConflictAnalysis, ConflictWeights, HubCities};

/// Scores a schedule against a roster.
///
/// Implementations must be pure: the same inputs always produce the same
/// cost and neither argument is modified.
pub trait ScheduleEvaluator {
    fn evaluate(&self, schedule: &Schedule, roster: &Roster) -> Cost;
}

/// Weighted rule-based conflict scoring.
///
/// Per-pilot running state (current city, current airplane) is rebuilt from
/// the roster on every call. A pilot missing from the roster starts with no
/// state: its first leg is never a location conflict and earns no airplane
/// reward or penalty.
///
/// # Example
///
/// ```
/// use crewforge_core::Cost;
/// use crewforge_scoring::{ConflictEvaluator, HubCities, ScheduleEvaluator};
/// use crewforge_test::{hub_roster, three_leg_schedule, HUB};
///
/// let evaluator = ConflictEvaluator::new(HubCities::new([HUB]));
/// let cost = evaluator.evaluate(&three_leg_schedule(), &hub_roster());
///
/// // Two airplane continuity rewards plus one pilot used.
/// assert_eq!(cost, Cost::of(80));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictEvaluator {
    hubs: HubCities,
    weights: ConflictWeights,
}

impl ConflictEvaluator {
    /// Creates an evaluator with the default weights.
    pub fn new(hubs: HubCities) -> Self {
        Self {
            hubs,
            weights: ConflictWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ConflictWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn hubs(&self) -> &HubCities {
        &self.hubs
    }

    pub fn weights(&self) -> &ConflictWeights {
        &self.weights
    }

    /// Counts the hits of every rule.
    pub fn analyze(&self, schedule: &Schedule, roster: &Roster) -> ConflictAnalysis {
        let flights = schedule.flights();
        let last = flights.len().saturating_sub(1);
        let mut analysis = ConflictAnalysis::default();

        let mut locations: HashMap<&PilotId, &City> = roster
            .iter()
            .map(|pilot| (pilot.id(), pilot.home_city()))
            .collect();
        let mut airplanes: HashMap<&PilotId, &Airplane> = roster
            .iter()
            .filter_map(|pilot| pilot.starting_airplane().map(|a| (pilot.id(), a)))
            .collect();

        for (i, flight) in flights.iter().enumerate() {
            let pilot = flight.assigned_pilot();

            if i != 0 && i != last && !self.hubs.touches(flight) {
                analysis.hub_violations += 1;
            }

            if let Some(city) = locations.insert(pilot, flight.to_city()) {
                if city != flight.from_city() {
                    analysis.location_conflicts += 1;
                }
            }

            if let Some(airplane) = airplanes.insert(pilot, flight.airplane()) {
                if airplane == flight.airplane() {
                    analysis.airplane_continuations += 1;
                } else {
                    analysis.airplane_switches += 1;
                }
            }

            if let Some(previous) = i.checked_sub(1).map(|p| &flights[p]) {
                if previous.assigned_pilot() == pilot && previous.to_city() != flight.from_city()
                {
                    analysis.idle_jumps += 1;
                }
            }
        }

        analysis.pilots_used = schedule.distinct_pilot_count();
        analysis
    }
}

impl ScheduleEvaluator for ConflictEvaluator {
    fn evaluate(&self, schedule: &Schedule, roster: &Roster) -> Cost {
        self.analyze(schedule, roster).cost(&self.weights)
    }
}
