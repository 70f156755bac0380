//! Colorful console output for placer runs.
//!
//! Provides a `tracing` layer that formats solver events with colors.
//! Initialized by [`run_placer`](crate::run_placer) when the `console`
//! feature is enabled.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "placer=info,placer_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default filter, e.g. `RUST_LOG=placer_solver=debug` adds
/// new-best and progress lines.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlacerConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats placer events with colors.
pub struct PlacerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlacerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("placer") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    best: Option<String>,
    combinations: Option<u64>,
    raw_tuples: Option<u64>,
    search_space: Option<u64>,
    team_count: Option<u64>,
    candidate_count: Option<u64>,
    best_option_count: Option<u64>,
    kept: Option<u64>,
    evaluated: Option<u64>,
    total: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "best" => self.best = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "combinations" => self.combinations = Some(value),
            "raw_tuples" => self.raw_tuples = Some(value),
            "search_space" => self.search_space = Some(value),
            "team_count" => self.team_count = Some(value),
            "candidate_count" => self.candidate_count = Some(value),
            "best_option_count" => self.best_option_count = Some(value),
            "kept" => self.kept = Some(value),
            "evaluated" => self.evaluated = Some(value),
            "total" => self.total = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "best" => self.best = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "count_end" => format_count_end(v),
        "solve_start" => format_solve_start(v),
        "new_best" => format_new_best(v),
        "progress" => format_progress(v),
        "solve_end" => format_solve_end(v),
        "no_solution" => format_no_solution(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_count_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} valid combinations of {} raw tuples",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Count]".bright_cyan(),
        count(v.combinations).bright_yellow(),
        format_space(v.search_space).bright_magenta()
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} team count ({}), candidate count ({}), search space ({}), keeping best ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        count(v.team_count).bright_yellow(),
        count(v.candidate_count).bright_yellow(),
        format_space(v.search_space).bright_magenta(),
        count(v.best_option_count).bright_yellow()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Combination {:>9} | {}",
        "->".bright_blue(),
        count(v.evaluated).white(),
        format_score(v.score.as_deref().unwrap_or("N/A"))
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let total = match v.total {
        Some(0) | None => "?".to_string(),
        total => count(total),
    };
    format!(
        "{} {} {} evaluated {} / {}, best ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        "[Solver]".bright_cyan(),
        count(v.evaluated).white(),
        total.white(),
        format_score(v.best.as_deref().unwrap_or("N/A")),
        count(v.speed).bright_magenta().bold()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let best = v.best.as_deref().unwrap_or("N/A");
    let mut output = format!(
        "{} {} {} Solving ended: time spent ({}), best disappointment ({}), combinations evaluated ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(best),
        count(v.evaluated).white()
    );

    output.push_str("\n\n");
    output.push_str(&summary_line('╔', '╗'));
    output.push_str(&summary_row("Best disappointment:", best));
    output.push_str(&summary_row("Placements kept:", &count(v.kept)));
    output.push_str(&summary_line('╚', '╝'));
    output
}

fn format_no_solution(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} after {} raw tuples",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        "No solution".bright_red().bold(),
        count(v.raw_tuples).white()
    )
}

fn summary_line(left: char, right: char) -> String {
    let line = format!("{}{}{}", left, "═".repeat(58), right);
    format!("{}\n", line.bright_cyan())
}

fn summary_row(label: &str, value: &str) -> String {
    format!(
        "{}  {:<22}{:>32}  {}\n",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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

fn format_space(space: Option<u64>) -> String {
    match space {
        Some(u64::MAX) => "overflow".to_string(),
        space => count(space),
    }
}

// Zero disappointment is green, anything else yellow.
fn format_score(score: &str) -> String {
    match score.parse::<f64>() {
        Ok(n) if n == 0.0 => score.bright_green().to_string(),
        Ok(_) => score.yellow().to_string(),
        Err(_) => score.white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_space() {
        assert_eq!(format_space(Some(1_234_567)), "1,234,567");
        assert_eq!(format_space(Some(u64::MAX)), "overflow");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("combination".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_end_includes_summary() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            best: Some("99.0".to_string()),
            kept: Some(1),
            ..Default::default()
        };
        let output = format_event(&visitor);
        assert!(output.contains("Best disappointment:"));
        assert!(output.contains("99.0"));
    }
}
