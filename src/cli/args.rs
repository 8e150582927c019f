//! Command-line argument definitions for weatherman
//!
//! This module defines the CLI interface using the clap derive API and turns
//! the raw period selectors into a validated [`ReportRequest`].

use crate::config::WeatherConfig;
use crate::{Error, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// CLI arguments for the weather report generator
///
/// Reads one text file per month (`<prefix><year>_<Mon>.txt`) from the data
/// folder and prints yearly extremes, monthly averages or monthly
/// temperature bar charts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "weatherman",
    version,
    about = "Weather reports from daily observation files",
    long_about = "Reads daily weather observations stored as one text file per month and \
                  prints the hottest, coldest and most humid days of a year, the average \
                  highs, lows and humidity of a month, or per-day temperature bar charts."
)]
#[command(group(
    ArgGroup::new("report")
        .required(true)
        .args(["extremes", "averages", "charts"])
))]
pub struct Args {
    /// Highest and lowest temperature and highest humidity of a year
    #[arg(short = 'e', value_name = "YYYY", help = "Yearly extremes for YYYY")]
    pub extremes: Option<String>,

    /// Average highest and lowest temperature and mean humidity of a month
    #[arg(short = 'a', value_name = "YYYY/MM", help = "Monthly averages for YYYY/MM")]
    pub averages: Option<String>,

    /// Daily highest and lowest temperature of a month as bar charts
    #[arg(short = 'c', value_name = "YYYY/MM", help = "Monthly bar charts for YYYY/MM")]
    pub charts: Option<String>,

    /// Folder holding the month files
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Prefix of every month file name
    #[arg(long = "prefix", value_name = "PREFIX", help = "Month file name prefix")]
    pub file_prefix: Option<String>,

    /// Earliest year a report may be requested for
    #[arg(long = "min-year", value_name = "YYYY")]
    pub min_year: Option<i32>,

    /// Latest year a report may be requested for
    #[arg(long = "max-year", value_name = "YYYY")]
    pub max_year: Option<i32>,

    /// Draw bars without terminal colors
    #[arg(long = "no-color", help = "Disable colored bar output")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// A report and the period it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    YearlyExtremes { year: i32 },
    MonthlyAverages { year: i32, month: u32 },
    MonthlyCharts { year: i32, month: u32 },
}

impl ReportRequest {
    /// Check the period against the configured bounds
    pub fn validate(&self, config: &WeatherConfig) -> Result<()> {
        match *self {
            ReportRequest::YearlyExtremes { year } => config.validate_year(year),
            ReportRequest::MonthlyAverages { year, month }
            | ReportRequest::MonthlyCharts { year, month } => {
                config.validate_year(year)?;
                config.validate_month(month)
            }
        }
    }
}

impl Args {
    /// Parse the selected report's period selector
    pub fn report_request(&self) -> Result<ReportRequest> {
        if let Some(period) = &self.extremes {
            return Ok(ReportRequest::YearlyExtremes {
                year: parse_year(period)?,
            });
        }
        if let Some(period) = &self.averages {
            let (year, month) = parse_year_month(period)?;
            return Ok(ReportRequest::MonthlyAverages { year, month });
        }
        if let Some(period) = &self.charts {
            let (year, month) = parse_year_month(period)?;
            return Ok(ReportRequest::MonthlyCharts { year, month });
        }
        Err(Error::configuration("One of -e, -a or -c is required"))
    }

    /// Get log level string from verbosity count
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Parse a `YYYY` period selector
pub fn parse_year(period: &str) -> Result<i32> {
    period.trim().parse::<i32>().map_err(|_| {
        Error::configuration(format!("Invalid input '{}': expected YYYY", period))
    })
}

/// Parse a `YYYY/MM` period selector
pub fn parse_year_month(period: &str) -> Result<(i32, u32)> {
    let invalid = || Error::configuration(format!("Invalid input '{}': expected YYYY/MM", period));

    let parts: Vec<&str> = period.split('/').collect();
    let [year, month] = parts.as_slice() else {
        return Err(invalid());
    };

    let year = year.trim().parse::<i32>().map_err(|_| invalid())?;
    let month = month.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((year, month))
}
