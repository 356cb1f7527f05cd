//! Plain-text run reports.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crewforge_scoring::ConflictAnalysis;
use crewforge_solver::SearchResult;

use crate::generator::Instance;

const TIME_FORMAT: &str = "%d %b %y %H:%M";

/// Name of the results file for a run, e.g. `results_seed_42_8.txt`.
pub fn results_file_name(seed: u64, pilot_count: usize) -> String {
    format!("results_seed_{seed}_{pilot_count}.txt")
}

/// Renders the input schedule per airplane and the best schedule per pilot.
///
/// Every airplane and every roster pilot gets a heading, even when no flight
/// lists it.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    instance: &'a Instance,
    result: &'a SearchResult,
    seed: Option<u64>,
    breakdown: Option<&'a ConflictAnalysis>,
}

impl<'a> Report<'a> {
    pub fn new(instance: &'a Instance, result: &'a SearchResult) -> Self {
        Self {
            instance,
            result,
            seed: None,
            breakdown: None,
        }
    }

    /// Prints the seed that reproduces the run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prints the per-rule counts of the optimized schedule.
    pub fn with_breakdown(mut self, breakdown: &'a ConflictAnalysis) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the report to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.instance;
        let result = self.result;

        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {seed}")?;
        }

        writeln!(f, "Generated Flights:")?;
        for airplane in &instance.airplanes {
            writeln!(f, "Airplane: {airplane}")?;
            for flight in instance.schedule.flights_for_airplane(airplane) {
                writeln!(
                    f,
                    "\t{} -> {} \t| {} \t| {} \t| {}",
                    flight.from_city(),
                    flight.to_city(),
                    flight.airplane(),
                    flight.assigned_pilot(),
                    flight.departure_time().format(TIME_FORMAT)
                )?;
            }
        }
        writeln!(f, "Initial Conflicts: {}", result.initial_cost)?;

        writeln!(f)?;
        writeln!(f, "Optimized Flights:")?;
        for pilot in &instance.roster {
            writeln!(f, "Pilot: {}", pilot.name())?;
            for flight in result.schedule.flights_for_pilot(pilot.id()) {
                writeln!(
                    f,
                    "\t {} -> {} \t| {} \t| {}",
                    flight.from_city(),
                    flight.to_city(),
                    flight.airplane(),
                    flight.departure_time().format(TIME_FORMAT)
                )?;
            }
        }

        writeln!(
            f,
            "Search {} after {} iterations ({} accepted moves, {} best improvements)",
            result.status,
            result.iterations,
            result.stats.moves_accepted,
            result.stats.best_improvements
        )?;
        writeln!(f, "TabuSearch execution time: {:?}", result.elapsed)?;
        writeln!(f, "Optimized Conflicts: {}", result.cost)?;
        if let Some(breakdown) = self.breakdown {
            writeln!(f, "Breakdown: {breakdown}")?;
        }
        Ok(())
    }
}
