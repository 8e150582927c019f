//! Application constants for weatherman
//!
//! This module contains configuration defaults, field names and layout
//! thresholds used throughout the report pipeline.

// =============================================================================
// Data Set Layout
// =============================================================================

/// Default prefix of every month file name
pub const DEFAULT_FILE_PREFIX: &str = "lahore_weather_";

/// Default data folder when none is configured
pub const DEFAULT_DATA_FOLDER: &str = ".";

/// Extension of month files
pub const MONTH_FILE_EXTENSION: &str = "txt";

/// Earliest year accepted by default
pub const DEFAULT_MIN_YEAR: i32 = 1996;

/// Latest year accepted by default
pub const DEFAULT_MAX_YEAR: i32 = 2011;

/// A non-data line must be longer than this many characters to be a header
pub const HEADER_MIN_LENGTH: usize = 25;

/// First characters that mark a data line (years 1xxx and 2xxx)
pub const DATA_LINE_PREFIXES: &[char] = &['1', '2'];

/// Column separator in both header and data lines
pub const FIELD_SEPARATOR: char = ',';

/// Separator between year, month and day in the date field
pub const DATE_SEPARATOR: char = '-';

// =============================================================================
// Field Names
// =============================================================================

/// Header names of the columns the reports read
pub mod fields {
    /// Observation date, formatted `YYYY-M-D`
    pub const DATE: &str = "PKT";

    /// Daily maximum temperature in Celsius
    pub const MAX_TEMPERATURE: &str = "Max TemperatureC";

    /// Daily minimum temperature in Celsius
    pub const MIN_TEMPERATURE: &str = "Min TemperatureC";

    /// Daily maximum relative humidity
    pub const MAX_HUMIDITY: &str = "Max Humidity";

    /// Daily mean relative humidity
    pub const MEAN_HUMIDITY: &str = "Mean Humidity";

    /// Every field a weather record needs
    pub const REQUIRED: &[&str] = &[
        DATE,
        MAX_TEMPERATURE,
        MIN_TEMPERATURE,
        MAX_HUMIDITY,
        MEAN_HUMIDITY,
    ];
}

// =============================================================================
// Report Output
// =============================================================================

/// Placeholder printed instead of a bar or value for an absent field
pub const MISSING_DATA_LABEL: &str = "Missing Data";

/// Placeholder printed instead of a value when an aggregate had no input
pub const INSUFFICIENT_DATA_LABEL: &str = "insufficient data";

/// One bar unit per degree
pub const BAR_MARKER: char = '+';

/// Longest bar drawn for a single value
pub const MAX_BAR_LENGTH: usize = 200;

/// Line printed between the dual-bar and single-bar charts
pub const CHART_SEPARATOR: &str = "----------------------------------------------";

/// Number of separator lines between the two charts
pub const CHART_SEPARATOR_LINES: usize = 3;
