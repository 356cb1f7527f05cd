//! Event system for search monitoring.
//!
//! Listeners registered on a [`TabuSearch`](crate::TabuSearch) are called
//! synchronously, in registration order, from the search loop.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use crewforge_core::{Cost, Schedule};
//! use crewforge_solver::event::{SearchEventListener, SearchEventSupport};
//!
//! #[derive(Debug)]
//! struct PrintBest;
//!
//! impl SearchEventListener for PrintBest {
//!     fn on_best_schedule_changed(&self, _schedule: &Schedule, cost: Cost) {
//!         println!("New best: {cost}");
//!     }
//! }
//!
//! let mut support = SearchEventSupport::new();
//! support.add_listener(Arc::new(PrintBest));
//! assert_eq!(support.listener_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crewforge_core::{Cost, Schedule};

use crate::termination::SearchStatus;

/// Listener for search lifecycle events.
pub trait SearchEventListener: Send + Sync + Debug {
    /// Called when a strictly better schedule becomes the best.
    fn on_best_schedule_changed(&self, schedule: &Schedule, cost: Cost);

    /// Called once before the first iteration.
    fn on_search_started(&self, _schedule: &Schedule, _cost: Cost) {}

    /// Called after every iteration, once tabu memory has decayed.
    fn on_step_ended(&self, _iteration: u64, _current_cost: Cost, _best_cost: Cost, _accepted: bool) {
    }

    /// Called once with the terminal state.
    fn on_search_ended(&self, _schedule: &Schedule, _cost: Cost, _status: SearchStatus) {}
}

/// Broadcasts events to registered listeners.
#[derive(Debug, Clone, Default)]
pub struct SearchEventSupport {
    listeners: Vec<Arc<dyn SearchEventListener>>,
}

impl SearchEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SearchEventListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn fire_search_started(&self, schedule: &Schedule, cost: Cost) {
        for listener in &self.listeners {
            listener.on_search_started(schedule, cost);
        }
    }

    pub fn fire_best_schedule_changed(&self, schedule: &Schedule, cost: Cost) {
        for listener in &self.listeners {
            listener.on_best_schedule_changed(schedule, cost);
        }
    }

    pub fn fire_step_ended(&self, iteration: u64, current_cost: Cost, best_cost: Cost, accepted: bool) {
        for listener in &self.listeners {
            listener.on_step_ended(iteration, current_cost, best_cost, accepted);
        }
    }

    pub fn fire_search_ended(&self, schedule: &Schedule, cost: Cost, status: SearchStatus) {
        for listener in &self.listeners {
            listener.on_search_ended(schedule, cost, status);
        }
    }
}

/// Listener that counts events, useful in tests.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    best_changes: AtomicU64,
    steps: AtomicU64,
    accepted_steps: AtomicU64,
    searches_ended: AtomicU64,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_change_count(&self) -> u64 {
        self.best_changes.load(Ordering::SeqCst)
    }

    pub fn step_count(&self) -> u64 {
        self.steps.load(Ordering::SeqCst)
    }

    pub fn accepted_step_count(&self) -> u64 {
        self.accepted_steps.load(Ordering::SeqCst)
    }

    pub fn search_ended_count(&self) -> u64 {
        self.searches_ended.load(Ordering::SeqCst)
    }
}

impl SearchEventListener for CountingEventListener {
    fn on_best_schedule_changed(&self, _schedule: &Schedule, _cost: Cost) {
        self.best_changes.fetch_add(1, Ordering::SeqCst);
    }

    fn on_step_ended(&self, _iteration: u64, _current_cost: Cost, _best_cost: Cost, accepted: bool) {
        self.steps.fetch_add(1, Ordering::SeqCst);
        if accepted {
            self.accepted_steps.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn on_search_ended(&self, _schedule: &Schedule, _cost: Cost, _status: SearchStatus) {
        self.searches_ended.fetch_add(1, Ordering::SeqCst);
    }
}
