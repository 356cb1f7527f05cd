//! Domain model for pilot assignment.
//!
//! - `City`, `Airplane`, `PilotId`: cheap-to-clone symbolic identities
//! - `Pilot`, `Roster`: who can fly, and where each pilot starts
//! - `Flight`: an immutable leg whose pilot is the only planning variable
//! - `Schedule`: the chronologically ordered legs the solver mutates and scores

mod flight;
mod pilot;
mod schedule;
mod symbol;

pub use flight::Flight;
pub use pilot::{Pilot, Roster};
pub use schedule::Schedule;
pub use symbol::{Airplane, City, PilotId};
