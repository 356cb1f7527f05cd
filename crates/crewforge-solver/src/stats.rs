//! Search statistics.
//!
//! Stack-allocated counters for a single tabu search run.

use std::time::{Duration, Instant};

/// Search-level statistics.
///
/// # Example
///
/// ```
/// use crewforge_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_move(true);
/// stats.record_move(false);
/// stats.record_tabu_hit();
///
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// assert_eq!(stats.tabu_penalized, 1);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Candidate schedules scored.
    pub moves_evaluated: u64,
    /// Candidates promoted to the current schedule.
    pub moves_accepted: u64,
    /// Candidates that carried a tabu penalty.
    pub tabu_penalized: u64,
    /// Times the best schedule improved.
    pub best_improvements: u64,
}

impl SearchStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a move evaluation and whether it was accepted.
    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    pub fn record_tabu_hit(&mut self) {
        self.tabu_penalized += 1;
    }

    pub fn record_best_improvement(&mut self) {
        self.best_improvements += 1;
    }

    /// Returns the moves per second rate.
    pub fn moves_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.moves_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }
}
