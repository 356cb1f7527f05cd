//! Shared test fixtures for crewforge crates.
//!
//! This crate provides data builders and canned instances for testing.
//! It depends on `crewforge-core` only, so every other crate can take it as
//! a dev-dependency.
//!
//! - [`fixtures`] - Hub/spoke rosters and the reference three-leg schedule
//! - [`builder`] - Fluent schedule builder with automatic departure times
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! crewforge-test = { workspace = true }
//! ```
//!
//! ```
//! use crewforge_test::{hub_roster, three_leg_schedule};
//!
//! let roster = hub_roster();
//! let schedule = three_leg_schedule();
//! assert_eq!(roster.len(), 2);
//! assert_eq!(schedule.len(), 3);
//! ```

pub mod builder;
pub mod fixtures;

pub use builder::{departure, ScheduleBuilder};
pub use fixtures::{
    hub_roster, pilot, roster, three_leg_schedule, zigzag_schedule, HUB, PLANE, SPOKE,
};
