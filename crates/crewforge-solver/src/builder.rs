//! Builds searches from configuration.

use crewforge_config::{SolverConfig, WeightsConfig};
use crewforge_core::{Cost, CrewForgeError, Result};
use crewforge_scoring::{ConflictEvaluator, ConflictWeights, HubCities};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::search::{SearchParams, TabuSearch};

/// Turns a [`SolverConfig`] into a ready-to-run [`TabuSearch`].
///
/// # Example
///
/// ```
/// use crewforge_config::SolverConfig;
/// use crewforge_solver::SearchBuilder;
///
/// let config = SolverConfig::new()
///     .with_random_seed(42)
///     .with_max_iterations(1_000);
/// let builder = SearchBuilder::new(config).unwrap();
///
/// assert_eq!(builder.seed(), 42);
/// assert_eq!(builder.params().max_iterations, 1_000);
///
/// let search = builder.build();
/// assert_eq!(search.evaluator().hubs().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    config: SolverConfig,
    seed: u64,
}

impl SearchBuilder {
    /// Validates `config` and fixes the random seed.
    ///
    /// A zero iteration budget is [`CrewForgeError::InvalidInput`], the same
    /// error [`TabuSearch::solve`] gives for it. Every other rejected value is
    /// [`CrewForgeError::Config`].
    ///
    /// Without a configured seed one is drawn from the thread-local
    /// generator; [`seed`](Self::seed) reports it so the run can be repeated.
    pub fn new(config: SolverConfig) -> Result<Self> {
        if config.termination.max_iterations == 0 {
            return Err(CrewForgeError::invalid_input("max_iterations must be positive"));
        }
        config
            .validate()
            .map_err(|e| CrewForgeError::Config(e.to_string()))?;
        let seed = config.random_seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self { config, seed })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hubs(&self) -> HubCities {
        HubCities::new(self.config.scoring.hub_cities.iter().map(String::as_str))
    }

    pub fn weights(&self) -> ConflictWeights {
        apply_overrides(ConflictWeights::default(), &self.config.scoring.weights)
    }

    pub fn evaluator(&self) -> ConflictEvaluator {
        ConflictEvaluator::new(self.hubs()).with_weights(self.weights())
    }

    pub fn params(&self) -> SearchParams {
        SearchParams::new()
            .with_max_iterations(self.config.termination.max_iterations)
            .with_tabu_tenure(self.config.tabu.tenure)
            .with_tabu_penalty(Cost::of(self.config.tabu.penalty))
    }

    /// A generator seeded with [`seed`](Self::seed).
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    pub fn build(&self) -> TabuSearch {
        TabuSearch::new(self.evaluator(), self.params())
    }
}

fn apply_overrides(weights: ConflictWeights, overrides: &WeightsConfig) -> ConflictWeights {
    ConflictWeights {
        hub_violation: overrides.hub_violation.unwrap_or(weights.hub_violation),
        location_conflict: overrides
            .location_conflict
            .unwrap_or(weights.location_conflict),
        airplane_continuity: overrides
            .airplane_continuity
            .unwrap_or(weights.airplane_continuity),
        airplane_switch: overrides.airplane_switch.unwrap_or(weights.airplane_switch),
        idle_jump: overrides.idle_jump.unwrap_or(weights.idle_jump),
        pilot_count: overrides.pilot_count.unwrap_or(weights.pilot_count),
    }
}
