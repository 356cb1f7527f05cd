//! crewforge command line
//!
//! Generates a pilot assignment instance, optimizes it and prints the
//! report. The same report is saved to `results_seed_<seed>_<pilots>.txt`
//! unless `--output` names another file or `--no-save` is given.
//!
//! Without a config argument `crewforge.toml` is read from the working
//! directory; a missing default file falls back to built-in defaults.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, ValueEnum};
use crewforge::{run_generated, ConfigError, SolverConfig};

const DEFAULT_CONFIG: &str = "crewforge.toml";

#[derive(Parser, Debug)]
#[command(name = "crewforge", version, about, long_about = None)]
struct Cli {
    /// Solver config file (TOML or YAML)
    config: Option<PathBuf>,

    /// Config file format; inferred from the extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<ConfigFormat>,

    /// Results file; defaults to results_seed_<seed>_<pilots>.txt
    #[arg(short, long, conflicts_with = "no_save")]
    output: Option<PathBuf>,

    /// Print the report without writing a results file
    #[arg(long)]
    no_save: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

impl Cli {
    fn load_config(&self) -> Result<SolverConfig, ConfigError> {
        let path = match &self.config {
            Some(path) => path.as_path(),
            None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
            None => return Ok(SolverConfig::default()),
        };
        match self.format.unwrap_or_else(|| ConfigFormat::from_path(path)) {
            ConfigFormat::Toml => SolverConfig::from_toml_file(path),
            ConfigFormat::Yaml => SolverConfig::from_yaml_file(path),
        }
    }

    fn results_path(&self, default_name: String) -> Option<PathBuf> {
        if self.no_save {
            return None;
        }
        Some(self.output.clone().unwrap_or_else(|| default_name.into()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let run = match run_generated(config, Local::now().naive_local()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = run.report();
    println!("{report}");

    if let Some(path) = cli.results_path(run.results_file_name()) {
        if let Err(e) = report.save(&path) {
            eprintln!("error: failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        println!("Results written to {}", path.display());
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_and_version_are_not_config_paths() {
        let err = Cli::try_parse_from(["crewforge", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["crewforge", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_positional_config_and_format_override() {
        let cli = Cli::try_parse_from(["crewforge", "run.conf", "--format", "yaml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("run.conf")));
        assert_eq!(cli.format, Some(ConfigFormat::Yaml));
        assert!(!cli.no_save);
    }

    #[test]
    fn test_format_inferred_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("crewforge")), ConfigFormat::Toml);
    }

    #[test]
    fn test_format_override_wins_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.txt");
        std::fs::write(&path, "random_seed: 5\n").unwrap();

        let path = path.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["crewforge", path.as_str(), "--format", "yaml"]).unwrap();
        assert_eq!(cli.load_config().unwrap().random_seed, Some(5));
    }

    #[test]
    fn test_results_path_defaults_to_seeded_name() {
        let cli = Cli::try_parse_from(["crewforge"]).unwrap();
        assert_eq!(
            cli.results_path("results_seed_42_8.txt".to_string()),
            Some(PathBuf::from("results_seed_42_8.txt"))
        );

        let cli = Cli::try_parse_from(["crewforge", "-o", "out.txt"]).unwrap();
        assert_eq!(
            cli.results_path("results_seed_42_8.txt".to_string()),
            Some(PathBuf::from("out.txt"))
        );

        let cli = Cli::try_parse_from(["crewforge", "--no-save"]).unwrap();
        assert_eq!(cli.results_path("results_seed_42_8.txt".to_string()), None);
    }

    #[test]
    fn test_output_conflicts_with_no_save() {
        let err = Cli::try_parse_from(["crewforge", "-o", "out.txt", "--no-save"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
