//! Weatherman Library
//!
//! A Rust library for turning daily weather observation files (one delimited
//! text file per month) into yearly and monthly reports.
//!
//! This library provides tools for:
//! - Resolving the column layout of a data set from its header line
//! - Classifying raw lines into header, data and noise
//! - Extracting typed optional fields, keeping blank cells distinct from zero
//! - Folding records into running extremes and averages
//! - Formatting extremes, averages and per-day temperature bar charts

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregators;
        pub mod report_formatter;
        pub mod weather_parser;
        pub mod weather_reports;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::filesystem::{FileSystemStore, WeatherStore};
pub use app::models::{MonthlyAverages, WeatherRecord, YearlyExtremes};
pub use config::WeatherConfig;

use std::path::PathBuf;

/// Result type alias for weather report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weather report operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration or command-line input error
    #[error("{message}")]
    Configuration { message: String },

    /// The month file for a monthly report does not exist
    #[error("Error data missing for {month} {year}")]
    MissingFile {
        path: PathBuf,
        month: String,
        year: i32,
    },

    /// None of the month files of a year exist
    #[error("data not found for {year}")]
    NoData { year: i32 },

    /// A required field name is absent from the resolved schema
    #[error("Missing field '{field}' in data set header")]
    MissingField { field: String },

    /// A data line appeared before any header line
    #[error("No header line seen before data in '{}' line {line}", file.display())]
    MissingSchema { file: PathBuf, line: usize },

    /// A present field holds corrupt text
    #[error("Parse error in '{}' line {line}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        message: String,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing month file error
    pub fn missing_file(path: impl Into<PathBuf>, month: impl Into<String>, year: i32) -> Self {
        Self::MissingFile {
            path: path.into(),
            month: month.into(),
            year,
        }
    }

    /// Create a no data error
    pub fn no_data(year: i32) -> Self {
        Self::NoData { year }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a missing schema error
    pub fn missing_schema(file: impl Into<PathBuf>, line: usize) -> Self {
        Self::MissingSchema {
            file: file.into(),
            line,
        }
    }

    /// Create a parse error located at a file line
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Whether this error only aborts the current report rather than the run
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
