//! Configuration management and validation.
//!
//! Provides the run configuration (data folder, file naming and accepted
//! year range) and the checks applied before any file is touched.

use crate::constants::{
    DEFAULT_DATA_FOLDER, DEFAULT_FILE_PREFIX, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR,
    MONTH_FILE_EXTENSION,
};
use crate::{Error, Result};
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Configuration for a weather report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Folder holding the month files
    pub data_folder: PathBuf,

    /// Prefix of every month file name, e.g. `lahore_weather_`
    pub file_prefix: String,

    /// Earliest year a report may be requested for
    pub min_year: i32,

    /// Latest year a report may be requested for
    pub max_year: i32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from(DEFAULT_DATA_FOLDER),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl WeatherConfig {
    /// Create configuration reading from the given folder
    pub fn with_data_folder(mut self, data_folder: impl Into<PathBuf>) -> Self {
        self.data_folder = data_folder.into();
        self
    }

    /// Create configuration with a custom file prefix
    pub fn with_file_prefix(mut self, file_prefix: impl Into<String>) -> Self {
        self.file_prefix = file_prefix.into();
        self
    }

    /// Create configuration with custom year bounds (inclusive)
    pub fn with_year_bounds(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Check the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::configuration(format!(
                "Minimum year {} is after maximum year {}",
                self.min_year, self.max_year
            )));
        }

        if self.file_prefix.is_empty() {
            return Err(Error::configuration("File prefix cannot be empty"));
        }

        debug!(
            "Configuration valid: folder={}, prefix={}, years={}..={}",
            self.data_folder.display(),
            self.file_prefix,
            self.min_year,
            self.max_year
        );
        Ok(())
    }

    /// Reject years outside the configured bounds
    pub fn validate_year(&self, year: i32) -> Result<()> {
        if year < self.min_year || year > self.max_year {
            return Err(Error::configuration(format!(
                "Year should be in between {} and {}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Reject months outside 1..=12
    pub fn validate_month(&self, month: u32) -> Result<()> {
        if !(1..=12).contains(&month) {
            return Err(Error::configuration("Month should be in between 1 and 12"));
        }
        Ok(())
    }

    /// Path of the file holding one month of observations
    ///
    /// Files are named `<prefix><year>_<Mon>.txt`, e.g.
    /// `lahore_weather_2004_Mar.txt`.
    pub fn month_file_path(&self, year: i32, month: u32) -> Result<PathBuf> {
        let abbreviation = month_abbreviation(month)?;
        Ok(self.data_folder.join(format!(
            "{}{}_{}.{}",
            self.file_prefix, year, abbreviation, MONTH_FILE_EXTENSION
        )))
    }
}

/// Full calendar name of a month number, e.g. `March`
pub fn month_name(month: u32) -> Result<&'static str> {
    to_month(month).map(|m| m.name())
}

/// Three-letter abbreviation of a month number, e.g. `Mar`
pub fn month_abbreviation(month: u32) -> Result<&'static str> {
    month_name(month).map(|name| &name[..3])
}

fn to_month(month: u32) -> Result<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| Error::configuration("Month should be in between 1 and 12"))
}
