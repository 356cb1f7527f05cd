//! crewforge Core - Domain types for pilot assignment
//!
//! This crate provides the shared vocabulary of the solver:
//! - Symbolic identities (`City`, `Airplane`, `PilotId`)
//! - `Pilot` and `Roster` with each pilot's reference starting state
//! - `Flight` legs and the chronologically ordered `Schedule`
//! - The `Cost` type produced by conflict evaluation
//! - The error type shared by every crewforge crate

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{Airplane, City, Flight, Pilot, PilotId, Roster, Schedule};
pub use error::{CrewForgeError, Result};
pub use score::Cost;
