//! Command implementations for the weatherman CLI
//!
//! This module contains the top-level run logic: logging setup,
//! configuration layering, report dispatch and terminal rendering. It is the
//! single place that decides which errors end the run and which only end the
//! current report.

use crate::Result;
use crate::app::adapters::filesystem::{FileSystemStore, WeatherStore};
use crate::app::models::BarKind;
use crate::app::services::report_formatter::{
    chart_heading, dual_bar_lines, format_averages, format_extremes, render_line,
    single_bar_lines,
};
use crate::app::services::weather_reports::WeatherReports;
use crate::cli::args::{Args, ReportRequest};
use crate::config::WeatherConfig;
use crate::constants::{CHART_SEPARATOR, CHART_SEPARATOR_LINES};
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, info};

/// Main command runner for weatherman
///
/// 1. Set up logging and configuration
/// 2. Parse and validate the requested period (before any file access)
/// 3. Run the report and print it to stdout
///
/// A missing month file in a monthly report prints a notice and still
/// counts as success; every other error is returned.
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    let request = args.report_request()?;
    request.validate(&config)?;

    if args.no_color {
        colored::control::set_override(false);
    }

    let store = FileSystemStore;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_report(&store, &config, &request, &mut out) {
        Ok(()) => {}
        Err(error) if error.is_soft() => {
            info!("{}", error);
            writeln!(out, "{}", error).context("Failed to write to stdout")?;
        }
        Err(error) => return Err(error.into()),
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weatherman={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build configuration from defaults and CLI overrides
fn load_configuration(args: &Args) -> Result<WeatherConfig> {
    let mut config = WeatherConfig::default();
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut WeatherConfig, args: &Args) {
    config.data_folder = args.data_folder.clone();

    if let Some(prefix) = &args.file_prefix {
        config.file_prefix = prefix.clone();
    }
    if let Some(min_year) = args.min_year {
        config.min_year = min_year;
    }
    if let Some(max_year) = args.max_year {
        config.max_year = max_year;
    }
}

/// Run one report against a store, writing its lines to `out`
pub fn run_report<S, W>(
    store: &S,
    config: &WeatherConfig,
    request: &ReportRequest,
    out: &mut W,
) -> Result<()>
where
    S: WeatherStore + ?Sized,
    W: Write,
{
    let reports = WeatherReports::new(store, config);
    info!("Running {:?}", request);

    match *request {
        ReportRequest::YearlyExtremes { year } => {
            let extremes = reports.yearly_extremes(year)?;
            for line in format_extremes(&extremes)? {
                writeln!(out, "{}", line)?;
            }
        }
        ReportRequest::MonthlyAverages { year, month } => {
            let averages = reports.monthly_averages(year, month)?;
            for line in format_averages(&averages) {
                writeln!(out, "{}", line)?;
            }
        }
        ReportRequest::MonthlyCharts { year, month } => {
            let heading = chart_heading(year, month)?;
            let rows = match reports.monthly_bar_chart(year, month) {
                Ok(rows) => rows,
                Err(error) => {
                    // Only the missing-file notice follows a heading
                    if error.is_soft() {
                        writeln!(out, "{}", heading)?;
                    }
                    return Err(error);
                }
            };

            writeln!(out, "{}", heading)?;

            for line in dual_bar_lines(&rows) {
                writeln!(out, "{}", render_line(&line, paint_bar))?;
            }
            for _ in 0..CHART_SEPARATOR_LINES {
                writeln!(out, "{}", CHART_SEPARATOR)?;
            }
            writeln!(out, "{}", heading)?;
            for line in single_bar_lines(&rows) {
                writeln!(out, "{}", render_line(&line, paint_bar))?;
            }
        }
    }

    Ok(())
}

/// Red bars for maxima, blue bars for minima
fn paint_bar(kind: BarKind, bar: &str) -> String {
    if bar.is_empty() {
        return String::new();
    }
    match kind {
        BarKind::Max => bar.red().to_string(),
        BarKind::Min => bar.blue().to_string(),
    }
}
