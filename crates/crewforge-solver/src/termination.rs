//! Search states and the termination check.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crewforge_core::Cost;

/// State of a tabu search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Still iterating.
    Running,
    /// The best schedule reached a cost of exactly zero.
    Converged,
    /// The iteration budget was spent.
    Exhausted,
    /// An external flag requested termination.
    Cancelled,
}

impl SearchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::Running => "running",
            SearchStatus::Converged => "converged",
            SearchStatus::Exhausted => "exhausted",
            SearchStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides when a run stops.
///
/// Convergence wins over budget exhaustion when both happen on the same
/// iteration. The external flag is polled once per iteration, before the
/// move is proposed.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use crewforge_core::Cost;
/// use crewforge_solver::{SearchStatus, Termination};
///
/// let flag = AtomicBool::new(false);
/// let termination = Termination::new(100).with_flag(&flag);
///
/// assert_eq!(termination.status(10, Cost::of(80)), SearchStatus::Running);
/// assert_eq!(termination.status(100, Cost::of(80)), SearchStatus::Exhausted);
///
/// flag.store(true, Ordering::SeqCst);
/// assert!(termination.is_cancelled());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Termination<'a> {
    max_iterations: u64,
    flag: Option<&'a AtomicBool>,
}

impl<'a> Termination<'a> {
    pub fn new(max_iterations: u64) -> Self {
        Self {
            max_iterations,
            flag: None,
        }
    }

    /// Stops the run once `flag` is set.
    pub fn with_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// State after `iterations` completed iterations with `best_cost` found.
    pub fn status(&self, iterations: u64, best_cost: Cost) -> SearchStatus {
        if best_cost.is_zero() {
            SearchStatus::Converged
        } else if iterations >= self.max_iterations {
            SearchStatus::Exhausted
        } else {
            SearchStatus::Running
        }
    }
}
