//! crewforge Solver Engine
//!
//! This crate provides the tabu search that improves pilot assignments:
//! - Move system (adjacent pilot swaps) and move selectors
//! - Tabu memory with per-key decaying tenure
//! - The search controller and its terminal states
//! - Statistics and event listeners for monitoring
//! - Configuration wiring (builder module)
//!
//! Logging levels:
//! - **INFO**: Solve start/end with problem size and final cost
//! - **DEBUG**: Progress once per second
//! - **TRACE**: Every evaluated move

pub mod builder;
pub mod event;
pub mod heuristic;
pub mod search;
pub mod stats;
pub mod tabu;
pub mod termination;

pub use builder::SearchBuilder;
pub use event::{CountingEventListener, SearchEventListener, SearchEventSupport};
pub use heuristic::{
    propose_move, AdjacentSwapMove, AdjacentSwapMoveSelector, Move, MoveSelector,
};
pub use search::{SearchParams, SearchResult, TabuSearch};
pub use stats::SearchStats;
pub use tabu::{key_for, TabuKey, TabuMemory};
pub use termination::{SearchStatus, Termination};
