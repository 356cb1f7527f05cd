//! Configuration system for crewforge.
//!
//! Load search, scoring and instance generation settings from TOML or YAML
//! so runs can be tuned without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use crewforge_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [termination]
//!     max_iterations = 10000
//!
//!     [tabu]
//!     tenure = 50
//!
//!     [scoring]
//!     hub_cities = ["Riga"]
//! "#).unwrap();
//!
//! assert_eq!(config.max_iterations(), 10_000);
//! assert_eq!(config.tabu.tenure, 50);
//! assert_eq!(config.tabu.penalty, 1000);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use crewforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("crewforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u64 = 50_000;

/// Default number of iterations a committed assignment stays tabu.
pub const DEFAULT_TABU_TENURE: u32 = 500;

/// Default cost added per tabu flight in a candidate.
pub const DEFAULT_TABU_PENALTY: i64 = 1000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// Tabu memory configuration.
    #[serde(default)]
    pub tabu: TabuConfig,

    /// Conflict scoring configuration.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Synthetic instance generation, if the run should generate its input.
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.termination.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "termination.max_iterations must be positive".to_string(),
            ));
        }
        if let Some(generator) = &self.generator {
            generator.validate()?;
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.termination.max_iterations = max_iterations;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: u32) -> Self {
        self.tabu.tenure = tenure;
        self
    }

    /// Replaces the hub cities.
    pub fn with_hub_cities<I, S>(mut self, hubs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scoring.hub_cities = hubs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the instance generator configuration.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Returns the iteration budget.
    pub fn max_iterations(&self) -> u64 {
        self.termination.max_iterations
    }
}

/// Termination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TerminationConfig {
    /// Maximum number of search iterations.
    pub max_iterations: u64,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Tabu memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TabuConfig {
    /// Iterations a committed (pilot, airplane, departure) stays tabu.
    pub tenure: u32,

    /// Cost added to a candidate for each of its flights that is tabu.
    pub penalty: i64,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tenure: DEFAULT_TABU_TENURE,
            penalty: DEFAULT_TABU_PENALTY,
        }
    }
}

/// Conflict scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ScoringConfig {
    /// Cities every inner leg must start or end at.
    pub hub_cities: Vec<String>,

    /// Per-rule weight overrides.
    pub weights: WeightsConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hub_cities: vec!["Riga".to_string(), "Liepaja".to_string()],
            weights: WeightsConfig::default(),
        }
    }
}

/// Per-rule weight overrides; unset rules keep their built-in weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeightsConfig {
    pub hub_violation: Option<i64>,
    pub location_conflict: Option<i64>,
    pub airplane_continuity: Option<i64>,
    pub airplane_switch: Option<i64>,
    pub idle_jump: Option<i64>,
    pub pilot_count: Option<i64>,
}

/// Synthetic instance generation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GeneratorConfig {
    /// Number of flights to generate.
    pub flight_count: usize,

    /// Number of pilots in the roster.
    pub pilot_count: usize,

    /// Cities flights may visit.
    pub cities: Vec<String>,

    /// Airplanes operating the flights.
    pub airplanes: Vec<String>,

    /// Hours between consecutive departures.
    pub departure_interval_hours: u32,

    /// Probability that a destination is drawn from the hub cities.
    pub hub_bias: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            flight_count: 30,
            pilot_count: 8,
            cities: ["Riga", "Daugavpils", "Liepaja", "Jelgava", "Ventspils"]
                .into_iter()
                .map(String::from)
                .collect(),
            airplanes: ["Airplane 1", "Airplane 2", "Airplane 3", "Airplane 4"]
                .into_iter()
                .map(String::from)
                .collect(),
            departure_interval_hours: 2,
            hub_bias: 0.7,
        }
    }
}

impl GeneratorConfig {
    /// Checks that an instance can be generated from these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cities.len() < 2 {
            return Err(ConfigError::Invalid(
                "generator.cities needs at least two cities".to_string(),
            ));
        }
        if self.airplanes.is_empty() {
            return Err(ConfigError::Invalid(
                "generator.airplanes must not be empty".to_string(),
            ));
        }
        if self.pilot_count == 0 {
            return Err(ConfigError::Invalid(
                "generator.pilot_count must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.hub_bias) {
            return Err(ConfigError::Invalid(format!(
                "generator.hub_bias must be within [0, 1], got {}",
                self.hub_bias
            )));
        }
        Ok(())
    }
}
