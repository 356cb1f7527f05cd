//! One-call entry point: generate an instance from config and solve it.

use chrono::NaiveDateTime;
use crewforge_config::SolverConfig;
use crewforge_core::Result;
use crewforge_scoring::ConflictAnalysis;
use crewforge_solver::{SearchBuilder, SearchResult};
use tracing::info;

use crate::generator::{Instance, InstanceGenerator};
use crate::report::{results_file_name, Report};

/// Everything a generated run produced.
#[derive(Debug, Clone)]
pub struct Run {
    pub instance: Instance,
    pub result: SearchResult,
    /// Seed that drove both generation and search.
    pub seed: u64,
    /// Per-rule counts of the best schedule.
    pub breakdown: ConflictAnalysis,
}

impl Run {
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.instance, &self.result)
            .with_seed(self.seed)
            .with_breakdown(&self.breakdown)
    }

    /// `results_seed_<seed>_<pilots>.txt`
    pub fn results_file_name(&self) -> String {
        results_file_name(self.seed, self.instance.roster.len())
    }
}

/// Generates an instance per `config.generator` (defaults when absent) with
/// flights departing from `start`, then runs the tabu search on it.
///
/// One seeded generator drives both steps, so a fixed `random_seed`
/// reproduces the whole run.
pub fn run_generated(config: SolverConfig, start: NaiveDateTime) -> Result<Run> {
    #[cfg(feature = "console")]
    crewforge_console::init();

    let builder = SearchBuilder::new(config)?;
    let generator = InstanceGenerator::new(
        builder.config().generator.clone().unwrap_or_default(),
        builder.config().scoring.hub_cities.iter().map(String::as_str),
    )?;

    let mut rng = builder.rng();
    let instance = generator.generate(start, &mut rng)?;
    info!(
        event = "instance_generated",
        seed = builder.seed(),
        flight_count = instance.schedule.len(),
        pilot_count = instance.roster.len(),
        "instance generated"
    );

    let search = builder.build();
    let result = search.solve(instance.schedule.clone(), &instance.roster, &mut rng)?;
    let breakdown = search.evaluator().analyze(&result.schedule, &instance.roster);

    Ok(Run {
        instance,
        result,
        seed: builder.seed(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use crewforge_config::{GeneratorConfig, SolverConfig};
    use crewforge_core::CrewForgeError;
    use crewforge_scoring::ScheduleEvaluator;
    use crewforge_solver::SearchBuilder;
    use crewforge_test::departure;

    use super::*;

    fn config() -> SolverConfig {
        SolverConfig::new()
            .with_random_seed(7)
            .with_max_iterations(500)
            .with_generator(GeneratorConfig {
                flight_count: 12,
                pilot_count: 4,
                ..GeneratorConfig::default()
            })
    }

    #[test]
    fn test_fixed_seed_reproduces_run() {
        let first = run_generated(config(), departure(0)).unwrap();
        let second = run_generated(config(), departure(0)).unwrap();

        assert_eq!(first.seed, 7);
        assert_eq!(first.instance.schedule, second.instance.schedule);
        assert_eq!(first.result.schedule, second.result.schedule);
        assert_eq!(first.result.cost, second.result.cost);
    }

    #[test]
    fn test_breakdown_matches_cost() {
        let run = run_generated(config(), departure(0)).unwrap();
        let builder = SearchBuilder::new(config()).unwrap();

        assert_eq!(run.breakdown.cost(&builder.weights()), run.result.cost);
        assert_eq!(
            builder
                .evaluator()
                .evaluate(&run.result.schedule, &run.instance.roster),
            run.result.cost
        );
        assert!(run.result.cost <= run.result.initial_cost);
    }

    #[test]
    fn test_report_mentions_every_pilot() {
        let run = run_generated(config(), departure(0)).unwrap();
        let text = run.report().render();

        for pilot in &run.instance.roster {
            assert!(text.contains(&format!("Pilot: {}\n", pilot.name())));
        }
        assert!(text.starts_with("Seed: 7\n"));
    }

    #[test]
    fn test_results_file_name_uses_seed_and_pilots() {
        let run = run_generated(config(), departure(0)).unwrap();
        assert_eq!(run.results_file_name(), "results_seed_7_4.txt");
    }

    #[test]
    fn test_zero_budget_is_invalid_input() {
        let err = run_generated(config().with_max_iterations(0), departure(0)).unwrap_err();
        assert!(matches!(err, CrewForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_generator_is_config_error() {
        let config = config().with_generator(GeneratorConfig {
            hub_bias: 2.0,
            ..GeneratorConfig::default()
        });
        let err = run_generated(config, departure(0)).unwrap_err();
        assert!(matches!(err, CrewForgeError::Config(_)));
    }
}
