//! Colorful console output for tabu search runs.
//!
//! Provides a custom `tracing` layer that renders the structured events
//! emitted by `crewforge-solver` and the `crewforge` facade.
//!
//! ## Log Levels
//!
//! - **INFO**: Generated instance (with its seed), search start and end
//! - **DEBUG**: Progress updates (1/sec with speed and best cost)
//! - **TRACE**: Individual move evaluations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of the events this layer renders. Covers `crewforge`,
/// `crewforge_solver` and the other workspace crates.
const TARGET_PREFIX: &str = "crewforge";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs a subscriber filtered by `RUST_LOG`,
/// defaulting to `crewforge=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{TARGET_PREFIX}=info")));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____                    _____
 / ___|_ __ _____      __|  ___|__  _ __ __ _  ___
| |   | '__/ _ \ \ /\ / /| |_ / _ \| '__/ _` |/ _ \
| |___| | |  __/\ V  V / |  _| (_) | | | (_| |  __/
 \____|_|  \___| \_/\_/  |_|  \___/|_|  \__, |\___|
                                        |___/
"#;

    let version_line = format!("                 v{} - Tabu Search Crew Planner\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(TARGET_PREFIX) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    status: Option<String>,
    steps: Option<u64>,
    speed: Option<u64>,
    score: Option<String>,
    step: Option<u64>,
    entity: Option<u64>,
    accepted: Option<bool>,
    duration_ms: Option<u64>,
    flight_count: Option<u64>,
    pilot_count: Option<u64>,
    max_iterations: Option<u64>,
    tabu_tenure: Option<u64>,
    moves_speed: Option<u64>,
    acceptance_rate: Option<f64>,
    seed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "status" => self.status = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "steps" => self.steps = Some(value),
            "speed" => self.speed = Some(value),
            "step" => self.step = Some(value),
            "entity" => self.entity = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "flight_count" => self.flight_count = Some(value),
            "pilot_count" => self.pilot_count = Some(value),
            "max_iterations" => self.max_iterations = Some(value),
            "tabu_tenure" => self.tabu_tenure = Some(value),
            "moves_speed" => self.moves_speed = Some(value),
            "seed" => self.seed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "score" {
            self.score = Some(value.to_string());
        } else {
            self.record_u64(field, value.max(0) as u64);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "acceptance_rate" {
            self.acceptance_rate = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "accepted" {
            self.accepted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "instance_generated" => format_instance_generated(v),
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "progress" => format_progress(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_instance_generated(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Generated │ {} flights │ {} pilots",
        format_elapsed(),
        "◆".bright_blue().bold(),
        v.flight_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.pilot_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
    );
    if let Some(seed) = v.seed {
        output.push_str(&format!(" │ seed {}", seed.bright_white().bold()));
    }
    output
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let flights = v.flight_count.unwrap_or(0);
    let pilots = v.pilot_count.unwrap_or(0);
    let scale = calculate_search_space(flights as usize, pilots as usize);

    let mut output = format!(
        "{} {} Solving │ {} flights │ {} pilots │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        flights.to_formatted_string(&Locale::en).bright_yellow(),
        pilots.to_formatted_string(&Locale::en).bright_yellow(),
        scale.bright_magenta()
    );

    if let Some(max_iterations) = v.max_iterations {
        output.push_str(&format!(
            " │ {} iterations",
            max_iterations
                .to_formatted_string(&Locale::en)
                .bright_yellow()
        ));
    }
    if let Some(tenure) = v.tabu_tenure {
        output.push_str(&format!(
            " │ tenure {}",
            tenure.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }
    if let Some(ref score) = v.score {
        output.push_str(&format!(" │ {}", format_score(score)));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let status = v.status.as_deref().unwrap_or("unknown");
    let steps = v.steps.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let moves_speed = v.moves_speed.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} │ {} steps │ {} moves/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_status(status),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        moves_speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    );

    if let Some(rate) = v.acceptance_rate {
        output.push_str(&format!(
            " │ {} accepted",
            format!("{:.1}%", rate * 100.0).bright_yellow()
        ));
    }
    output.push_str(&format!(" │ {}", format_score(score)));

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    let headline = status.to_uppercase();
    let total_pad = inner_width.saturating_sub(headline.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;

    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        format_status(&headline),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{}╣", border).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Final Cost:",
        score,
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_progress(v: &EventVisitor) -> String {
    let steps = v.steps.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {:>10} steps │ {:>12}/s │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        steps.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_score(score)
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let entity = v.entity.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");

    let icon = if v.accepted.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Step {:>10} │ Flight {:>6} │ {}",
        format_elapsed(),
        icon,
        step.to_formatted_string(&Locale::en).bright_black(),
        entity.to_formatted_string(&Locale::en).bright_black(),
        format_score(score).bright_black()
    )
}

fn format_status(status: &str) -> String {
    match status.to_ascii_lowercase().as_str() {
        "converged" => status.bright_green().bold().to_string(),
        "exhausted" => status.bright_yellow().bold().to_string(),
        "cancelled" => status.bright_red().bold().to_string(),
        _ => status.white().bold().to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Zero is the target; anything above it still carries conflicts.
fn format_score(score: &str) -> String {
    match score.parse::<i64>() {
        Ok(n) if n > 0 => score.yellow().to_string(),
        Ok(_) => score.bright_green().to_string(),
        Err(_) => score.white().to_string(),
    }
}

/// Number of possible assignments, `pilots ^ flights`, in scientific notation.
fn calculate_search_space(flight_count: usize, pilot_count: usize) -> String {
    if flight_count == 0 || pilot_count == 0 {
        return "0".to_string();
    }

    let log_scale = (flight_count as f64) * (pilot_count as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
