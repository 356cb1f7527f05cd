//! The tabu search controller.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crewforge_config::{DEFAULT_MAX_ITERATIONS, DEFAULT_TABU_PENALTY, DEFAULT_TABU_TENURE};
use crewforge_core::{Cost, CrewForgeError, Result, Roster, Schedule};
use crewforge_scoring::{ConflictEvaluator, ScheduleEvaluator};
use rand::Rng;
use tracing::{debug, info, trace};

use crate::event::{SearchEventListener, SearchEventSupport};
use crate::heuristic::{AdjacentSwapMoveSelector, Move, MoveSelector};
use crate::stats::SearchStats;
use crate::tabu::TabuMemory;
use crate::termination::{SearchStatus, Termination};

/// Parameters of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Iteration budget; must be positive.
    pub max_iterations: u64,
    /// Tenure given to every key of a committed schedule.
    pub tabu_tenure: u32,
    /// Cost added per tabu flight in a candidate.
    pub tabu_penalty: Cost,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tabu_tenure: DEFAULT_TABU_TENURE,
            tabu_penalty: Cost::of(DEFAULT_TABU_PENALTY),
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tabu_tenure(mut self, tabu_tenure: u32) -> Self {
        self.tabu_tenure = tabu_tenure;
        self
    }

    pub fn with_tabu_penalty(mut self, tabu_penalty: Cost) -> Self {
        self.tabu_penalty = tabu_penalty;
        self
    }
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best schedule found.
    pub schedule: Schedule,
    /// Evaluator cost of `schedule`, without tabu penalty.
    pub cost: Cost,
    /// Evaluator cost of the input schedule.
    pub initial_cost: Cost,
    /// Iterations performed.
    pub iterations: u64,
    pub status: SearchStatus,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_converged(&self) -> bool {
        self.status == SearchStatus::Converged
    }

    /// How much the cost dropped from the input schedule.
    pub fn improvement(&self) -> Cost {
        self.initial_cost - self.cost
    }
}

/// Tabu search over pilot assignments.
///
/// Each iteration proposes one neighbor of the current schedule and accepts
/// it only when its cost plus tabu penalty is strictly lower than the cost of
/// the current schedule. Every accepted schedule is committed to tabu
/// memory, and memory decays once per iteration.
///
/// # Example
///
/// ```
/// use crewforge_scoring::{ConflictEvaluator, HubCities};
/// use crewforge_solver::{SearchParams, SearchStatus, TabuSearch};
/// use crewforge_test::{hub_roster, three_leg_schedule, HUB};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let search = TabuSearch::new(
///     ConflictEvaluator::new(HubCities::new([HUB])),
///     SearchParams::new().with_max_iterations(100),
/// );
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let result = search
///     .solve(three_leg_schedule(), &hub_roster(), &mut rng)
///     .unwrap();
///
/// assert_eq!(result.status, SearchStatus::Exhausted);
/// assert_eq!(result.iterations, 100);
/// assert!(result.cost <= result.initial_cost);
/// ```
#[derive(Debug)]
pub struct TabuSearch<E = ConflictEvaluator, G = AdjacentSwapMoveSelector> {
    evaluator: E,
    selector: G,
    params: SearchParams,
    events: SearchEventSupport,
}

impl<E: ScheduleEvaluator> TabuSearch<E, AdjacentSwapMoveSelector> {
    /// Creates a search using adjacent pilot swaps.
    pub fn new(evaluator: E, params: SearchParams) -> Self {
        Self {
            evaluator,
            selector: AdjacentSwapMoveSelector::new(),
            params,
            events: SearchEventSupport::new(),
        }
    }
}

impl<E, G> TabuSearch<E, G>
where
    E: ScheduleEvaluator,
    G: MoveSelector,
{
    /// Replaces the move selector.
    pub fn with_selector<G2: MoveSelector>(self, selector: G2) -> TabuSearch<E, G2> {
        TabuSearch {
            evaluator: self.evaluator,
            selector,
            params: self.params,
            events: self.events,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn SearchEventListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Runs until convergence or until the iteration budget is spent.
    pub fn solve<R: Rng + ?Sized>(
        &self,
        schedule: Schedule,
        roster: &Roster,
        rng: &mut R,
    ) -> Result<SearchResult> {
        self.solve_with_termination(schedule, roster, rng, None)
    }

    /// Runs like [`solve`](Self::solve), also stopping once `cancel` is set.
    pub fn solve_with_termination<R: Rng + ?Sized>(
        &self,
        schedule: Schedule,
        roster: &Roster,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchResult> {
        self.validate(&schedule, roster)?;

        let mut termination = Termination::new(self.params.max_iterations);
        if let Some(flag) = cancel {
            termination = termination.with_flag(flag);
        }

        let mut stats = SearchStats::default();
        stats.start();
        let mut tabu = TabuMemory::new();

        let initial_cost = self.evaluator.evaluate(&schedule, roster);
        let mut current = schedule;
        let mut current_cost = initial_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        info!(
            event = "solve_start",
            flight_count = current.len(),
            pilot_count = roster.len(),
            max_iterations = self.params.max_iterations,
            tabu_tenure = self.params.tabu_tenure,
            score = %initial_cost,
        );
        self.events.fire_search_started(&current, current_cost);

        let mut iterations: u64 = 0;
        let mut status = SearchStatus::Running;
        let mut last_progress_time = Instant::now();
        let mut last_progress_moves: u64 = 0;

        while status == SearchStatus::Running {
            if termination.is_cancelled() {
                status = SearchStatus::Cancelled;
                break;
            }
            iterations += 1;

            let (selected, candidate) = self.selector.propose_move(&current, rng)?;
            let candidate_base = self.evaluator.evaluate(&candidate, roster);
            let tabu_hits = tabu.tabu_hits(&candidate);
            if tabu_hits > 0 {
                stats.record_tabu_hit();
            }
            let candidate_cost = candidate_base + self.params.tabu_penalty.times(tabu_hits as i64);

            let accepted = candidate_cost < current_cost;
            stats.record_move(accepted);
            trace!(
                event = "step",
                step = iterations,
                entity = selected.flight_indices().first().copied().unwrap_or_default(),
                score = %candidate_cost,
                accepted = accepted,
            );

            if accepted {
                current = candidate;
                current_cost = candidate_base;
                tabu.commit(&current, self.params.tabu_tenure);

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    stats.record_best_improvement();
                    self.events.fire_best_schedule_changed(&best, best_cost);
                }
            }

            tabu.decay();
            self.events
                .fire_step_ended(iterations, current_cost, best_cost, accepted);

            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let moves_delta = stats.moves_evaluated - last_progress_moves;
                let elapsed_secs = now.duration_since(last_progress_time).as_secs_f64();
                debug!(
                    event = "progress",
                    steps = iterations,
                    speed = (moves_delta as f64 / elapsed_secs) as u64,
                    score = %best_cost,
                );
                last_progress_time = now;
                last_progress_moves = stats.moves_evaluated;
            }

            status = termination.status(iterations, best_cost);
        }

        let elapsed = stats.elapsed();
        info!(
            event = "solve_end",
            score = %best_cost,
            steps = iterations,
            status = %status,
            duration_ms = elapsed.as_millis() as u64,
            moves_speed = stats.moves_per_second(),
            acceptance_rate = stats.acceptance_rate(),
        );
        self.events.fire_search_ended(&best, best_cost, status);

        Ok(SearchResult {
            schedule: best,
            cost: best_cost,
            initial_cost,
            iterations,
            status,
            elapsed,
            stats,
        })
    }

    fn validate(&self, schedule: &Schedule, roster: &Roster) -> Result<()> {
        if schedule.len() < 2 {
            return Err(CrewForgeError::invalid_input(format!(
                "schedule needs at least 2 flights, got {}",
                schedule.len()
            )));
        }
        if roster.is_empty() {
            return Err(CrewForgeError::invalid_input("roster is empty"));
        }
        if self.params.max_iterations == 0 {
            return Err(CrewForgeError::invalid_input(
                "max_iterations must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, Mutex};

    use crewforge_core::{Cost, CrewForgeError, Roster, Schedule};
    use crewforge_scoring::{ConflictEvaluator, ConflictWeights, HubCities, ScheduleEvaluator};
    use crewforge_test::{
        hub_roster, pilot, roster, three_leg_schedule, zigzag_schedule, ScheduleBuilder, HUB,
        PLANE, SPOKE,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::event::CountingEventListener;

    fn evaluator() -> ConflictEvaluator {
        ConflictEvaluator::new(HubCities::new([HUB]))
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn three_pilot_roster() -> Roster {
        roster(vec![pilot("A", HUB), pilot("B", HUB), pilot("C", SPOKE)])
    }

    #[derive(Debug, Default)]
    struct BestRecorder {
        costs: Mutex<Vec<Cost>>,
    }

    impl SearchEventListener for BestRecorder {
        fn on_best_schedule_changed(&self, _schedule: &Schedule, cost: Cost) {
            self.costs.lock().unwrap().push(cost);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let search = TabuSearch::new(evaluator(), SearchParams::new().with_max_iterations(300));
        let schedule = zigzag_schedule(12, &["A", "B", "C"]);
        let roster = three_pilot_roster();

        let first = search.solve(schedule.clone(), &roster, &mut rng(11)).unwrap();
        let second = search.solve(schedule, &roster, &mut rng(11)).unwrap();

        assert_eq!(first.schedule, second.schedule);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.iterations, second.iterations);
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn test_best_cost_never_increases() {
        let recorder = Arc::new(BestRecorder::default());
        let search = TabuSearch::new(evaluator(), SearchParams::new().with_max_iterations(500))
            .with_listener(recorder.clone());
        let roster = three_pilot_roster();

        let result = search
            .solve(zigzag_schedule(16, &["A", "B", "C"]), &roster, &mut rng(3))
            .unwrap();

        let costs = recorder.costs.lock().unwrap();
        assert!(costs.windows(2).all(|pair| pair[1] < pair[0]));
        assert!(costs.iter().all(|cost| *cost < result.initial_cost));
        assert_eq!(costs.last().copied().unwrap_or(result.initial_cost), result.cost);
        assert!(result.cost <= result.initial_cost);
    }

    #[test]
    fn test_reported_cost_matches_evaluation() {
        let search = TabuSearch::new(evaluator(), SearchParams::new().with_max_iterations(200));
        let roster = three_pilot_roster();

        let result = search
            .solve(zigzag_schedule(10, &["C", "A", "B"]), &roster, &mut rng(5))
            .unwrap();

        assert_eq!(result.cost, evaluator().evaluate(&result.schedule, &roster));
    }

    #[test]
    fn test_converges_when_zero_is_reachable() {
        let weights = ConflictWeights::default()
            .with_pilot_count(0)
            .with_airplane_continuity(0);
        let search = TabuSearch::new(
            evaluator().with_weights(weights),
            SearchParams::new().with_max_iterations(50),
        );
        let roster = roster(vec![pilot("A", HUB), pilot("B", SPOKE)]);
        let schedule = ScheduleBuilder::new()
            .leg(HUB, SPOKE, PLANE, "B")
            .leg(SPOKE, HUB, PLANE, "A")
            .build();

        let result = search.solve(schedule, &roster, &mut rng(1)).unwrap();

        assert_eq!(result.initial_cost, Cost::of(200));
        assert_eq!(result.status, SearchStatus::Converged);
        assert!(result.is_converged());
        assert_eq!(result.cost, Cost::ZERO);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.improvement(), Cost::of(200));
        assert_eq!(result.schedule.flights()[0].assigned_pilot().as_str(), "A");
    }

    #[test]
    fn test_exhausts_budget_without_improvement() {
        let counter = Arc::new(CountingEventListener::new());
        let search = TabuSearch::new(evaluator(), SearchParams::new().with_max_iterations(25))
            .with_listener(counter.clone());

        let result = search
            .solve(three_leg_schedule(), &hub_roster(), &mut rng(9))
            .unwrap();

        assert_eq!(result.status, SearchStatus::Exhausted);
        assert_eq!(result.iterations, 25);
        assert_eq!(result.cost, Cost::of(80));
        assert_eq!(result.schedule, three_leg_schedule());
        assert_eq!(result.stats.moves_evaluated, 25);
        assert_eq!(result.stats.moves_accepted, 0);
        assert_eq!(counter.step_count(), 25);
        assert_eq!(counter.best_change_count(), 0);
        assert_eq!(counter.search_ended_count(), 1);
    }

    #[test]
    fn test_cancelled_before_first_iteration() {
        let search = TabuSearch::new(evaluator(), SearchParams::new());
        let flag = AtomicBool::new(true);

        let result = search
            .solve_with_termination(three_leg_schedule(), &hub_roster(), &mut rng(1), Some(&flag))
            .unwrap();

        assert_eq!(result.status, SearchStatus::Cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost, result.initial_cost);
    }

    #[test]
    fn test_rejects_single_flight() {
        let search = TabuSearch::new(evaluator(), SearchParams::new());
        let schedule = ScheduleBuilder::new().leg(HUB, SPOKE, PLANE, "A").build();

        let err = search.solve(schedule, &hub_roster(), &mut rng(1)).unwrap_err();
        assert!(matches!(err, CrewForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_empty_roster() {
        let search = TabuSearch::new(evaluator(), SearchParams::new());
        let empty = Roster::new(Vec::new()).unwrap();

        let err = search
            .solve(three_leg_schedule(), &empty, &mut rng(1))
            .unwrap_err();
        assert!(matches!(err, CrewForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_zero_budget() {
        let search = TabuSearch::new(evaluator(), SearchParams::new().with_max_iterations(0));

        let err = search
            .solve(three_leg_schedule(), &hub_roster(), &mut rng(1))
            .unwrap_err();
        assert!(matches!(err, CrewForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_tenure_never_penalizes() {
        let search = TabuSearch::new(
            evaluator(),
            SearchParams::new()
                .with_max_iterations(300)
                .with_tabu_tenure(0),
        );

        let result = search
            .solve(zigzag_schedule(12, &["A", "B", "C"]), &three_pilot_roster(), &mut rng(21))
            .unwrap();

        assert_eq!(result.stats.tabu_penalized, 0);
    }

    #[test]
    fn test_params_defaults() {
        let params = SearchParams::default();
        assert_eq!(params.max_iterations, 50_000);
        assert_eq!(params.tabu_tenure, 500);
        assert_eq!(params.tabu_penalty, Cost::of(1000));
    }
}
