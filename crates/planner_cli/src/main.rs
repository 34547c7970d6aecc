//! Planner command-line probe.
//!
//! # Responsibility
//! - Verify `planner_core` linkage without the Flutter/FFI runtime.
//! - Print month grids for quick visual checks of calendar layout.

use chrono::Datelike;
use clap::{Parser, Subcommand};
use planner_core::{init_logging, Clock, MonthGrid, PlannerConfig, SystemClock, YearMonth};
use std::process::ExitCode;

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_WIDTH: usize = 4;

#[derive(Debug, Parser)]
#[command(name = "planner", version, about = "Planner core probe")]
struct Cli {
    /// Absolute directory for rolling log files; overrides PLANNER_LOG_DIR.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Health check against the core crate.
    Ping,
    /// Print the core crate version.
    Version,
    /// Print a month grid; defaults to the current month.
    Grid {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let config = PlannerConfig::from_env()?;
    if let Some(dir) = cli
        .log_dir
        .or_else(|| config.log_dir.as_ref().map(|dir| dir.display().to_string()))
    {
        init_logging(config.log_level, &dir)?;
    }

    match cli.command {
        Command::Ping => Ok(format!("planner_core ping={}", planner_core::ping())),
        Command::Version => Ok(format!(
            "planner_core version={}",
            planner_core::core_version()
        )),
        Command::Grid { year, month } => {
            let today = SystemClock.today();
            let month = YearMonth::new(
                year.unwrap_or(today.year()),
                month.unwrap_or(today.month()),
            )
            .map_err(|err| err.to_string())?;
            Ok(render_grid(&MonthGrid::generate(month)))
        }
    }
}

/// Renders `grid` as text; days of adjacent months are prefixed with `~`.
fn render_grid(grid: &MonthGrid) -> String {
    let mut lines = vec![grid.month().title()];
    lines.push(
        WEEKDAY_HEADERS
            .iter()
            .map(|name| format!("{name:>CELL_WIDTH$}"))
            .collect(),
    );
    for (week, cells) in grid.weeks().iter().enumerate() {
        lines.push(
            cells
                .iter()
                .map(|cell| {
                    let text = if grid.is_current_month(week, cell.day) {
                        cell.label.clone()
                    } else {
                        format!("~{}", cell.label)
                    };
                    format!("{text:>CELL_WIDTH$}")
                })
                .collect(),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_grid, run, Cli, Command};
    use planner_core::{MonthGrid, YearMonth};

    #[test]
    fn grid_marks_adjacent_month_days() {
        let grid = MonthGrid::generate(YearMonth::new(2025, 1).unwrap());
        let rendered = render_grid(&grid);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "January 2025");
        assert_eq!(lines[1], "  Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], " ~29 ~30 ~31   1   2   3   4");
        assert_eq!(lines[6], "  26  27  28  29  30  31  ~1");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn ping_command_reports_pong() {
        let cli = Cli {
            log_dir: None,
            command: Command::Ping,
        };
        assert_eq!(run(cli).unwrap(), "planner_core ping=pong");
    }
}
