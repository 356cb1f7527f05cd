//! crewforge - Tabu search pilot assignment in Rust
//!
//! Assigns pilots to a fixed, time-ordered set of flights so that pilots fly
//! from where they are, stay on their airplane, route through hubs and as
//! few of them as possible are used.
//!
//! # Example
//!
//! ```
//! use crewforge::prelude::*;
//! use crewforge_test::{hub_roster, three_leg_schedule, HUB};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let evaluator = ConflictEvaluator::new(HubCities::new([HUB]));
//! assert_eq!(evaluator.evaluate(&three_leg_schedule(), &hub_roster()), Cost::of(80));
//!
//! let search = TabuSearch::new(evaluator, SearchParams::new().with_max_iterations(50));
//! let result = search
//!     .solve(three_leg_schedule(), &hub_roster(), &mut ChaCha8Rng::seed_from_u64(1))
//!     .unwrap();
//! assert_eq!(result.status, SearchStatus::Exhausted);
//! ```

// Domain types
pub use crewforge_core::{
    Airplane, City, Cost, CrewForgeError, Flight, Pilot, PilotId, Result, Roster, Schedule,
};

// Scoring
pub use crewforge_scoring::{
    ConflictAnalysis, ConflictEvaluator, ConflictWeights, HubCities, ScheduleEvaluator,
};

// Search
pub use crewforge_solver::{
    propose_move, SearchBuilder, SearchEventListener, SearchParams, SearchResult, SearchStatus,
    TabuMemory, TabuSearch,
};

// Configuration
pub use crewforge_config::{ConfigError, GeneratorConfig, SolverConfig};

#[cfg(feature = "console")]
pub use crewforge_console as console;

pub mod generator;
pub mod report;
mod solver;

pub use generator::{Instance, InstanceGenerator};
pub use report::{results_file_name, Report};
pub use solver::{run_generated, Run};

pub mod prelude {
    pub use super::{
        Airplane, City, ConflictEvaluator, ConflictWeights, Cost, Flight, HubCities, Pilot,
        Roster, Schedule, ScheduleEvaluator, SearchParams, SearchStatus, TabuSearch,
    };
    pub use super::{run_generated, SolverConfig};
}
