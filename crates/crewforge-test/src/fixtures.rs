//! Canned rosters and schedules.

use crewforge_core::{City, Pilot, Roster, Schedule};

use crate::builder::ScheduleBuilder;

/// The hub city used by the fixtures.
pub const HUB: &str = "H";

/// A non-hub city.
pub const SPOKE: &str = "X";

/// The airplane used by the fixtures.
pub const PLANE: &str = "P1";

/// Creates a pilot homed at `home`.
pub fn pilot(name: &str, home: &str) -> Pilot {
    Pilot::new(name, City::new(home))
}

/// Creates a roster, panicking on duplicate names.
pub fn roster(pilots: Vec<Pilot>) -> Roster {
    Roster::new(pilots).expect("fixture pilots have unique names")
}

/// Pilots `A` and `B`, both homed at the hub.
pub fn hub_roster() -> Roster {
    roster(vec![pilot("A", HUB), pilot("B", HUB)])
}

/// H→H, H→X, X→H on one airplane, all flown by pilot `A`.
pub fn three_leg_schedule() -> Schedule {
    ScheduleBuilder::new()
        .leg(HUB, HUB, PLANE, "A")
        .leg(HUB, SPOKE, PLANE, "A")
        .leg(SPOKE, HUB, PLANE, "A")
        .build()
}

/// `legs` alternating H→X / X→H legs on one airplane with pilots assigned
/// round-robin from `pilots`.
pub fn zigzag_schedule(legs: usize, pilots: &[&str]) -> Schedule {
    let mut builder = ScheduleBuilder::new();
    for i in 0..legs {
        let (from, to) = if i % 2 == 0 { (HUB, SPOKE) } else { (SPOKE, HUB) };
        builder = builder.leg(from, to, PLANE, pilots[i % pilots.len()]);
    }
    builder.build()
}
