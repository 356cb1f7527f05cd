//! Rule weights.

/// Cost contributed by one hit of each conflict rule.
///
/// Negative weights are rewards.
///
/// # Example
///
/// ```
/// use crewforge_scoring::ConflictWeights;
///
/// let weights = ConflictWeights::default().with_pilot_count(50);
/// assert_eq!(weights.pilot_count, 50);
/// assert_eq!(weights.location_conflict, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConflictWeights {
    /// Inner leg whose endpoints are both non-hub cities.
    pub hub_violation: i64,
    /// Pilot's tracked city differs from the departure city.
    pub location_conflict: i64,
    /// Pilot flies the same airplane as on their previous leg.
    pub airplane_continuity: i64,
    /// Pilot flies a different airplane than on their previous leg.
    pub airplane_switch: i64,
    /// Consecutive legs by the same pilot that do not connect.
    pub idle_jump: i64,
    /// Per distinct pilot used by the schedule.
    pub pilot_count: i64,
}

impl Default for ConflictWeights {
    fn default() -> Self {
        Self {
            hub_violation: 1,
            location_conflict: 100,
            airplane_continuity: -10,
            airplane_switch: 50,
            idle_jump: 250,
            pilot_count: 100,
        }
    }
}

impl ConflictWeights {
    pub fn with_hub_violation(mut self, weight: i64) -> Self {
        self.hub_violation = weight;
        self
    }

    pub fn with_location_conflict(mut self, weight: i64) -> Self {
        self.location_conflict = weight;
        self
    }

    pub fn with_airplane_continuity(mut self, weight: i64) -> Self {
        self.airplane_continuity = weight;
        self
    }

    pub fn with_airplane_switch(mut self, weight: i64) -> Self {
        self.airplane_switch = weight;
        self
    }

    pub fn with_idle_jump(mut self, weight: i64) -> Self {
        self.idle_jump = weight;
        self
    }

    pub fn with_pilot_count(mut self, weight: i64) -> Self {
        self.pilot_count = weight;
        self
    }
}
