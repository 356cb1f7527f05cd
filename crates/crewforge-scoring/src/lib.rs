//! Conflict scoring for crewforge.
//!
//! Scores a [`Schedule`](crewforge_core::Schedule) against a
//! [`Roster`](crewforge_core::Roster). The score is a [`Cost`](crewforge_core::Cost):
//! a weighted sum of rule hits where lower is better.
//!
//! # Rules
//!
//! | Rule | Default weight |
//! |------|----------------|
//! | Inner leg touches no hub | +1 |
//! | Pilot not at the departure city | +100 |
//! | Pilot keeps the same airplane | -10 |
//! | Pilot switches airplane | +50 |
//! | Back-to-back legs that do not connect | +250 |
//! | Per distinct pilot used | +100 |

mod analysis;
mod evaluator;
mod hubs;
mod weights;

pub use analysis::ConflictAnalysis;
pub use evaluator::{ConflictEvaluator, ScheduleEvaluator};
pub use hubs::HubCities;
pub use weights::ConflictWeights;

#[cfg(test)]
mod evaluator_tests;
