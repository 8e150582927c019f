//! Data models for weather report processing
//!
//! This module contains the record type produced for each data line and the
//! result types produced by the aggregators and the bar-chart builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Observation Record
// =============================================================================

/// One day of observations
///
/// Numeric fields are `None` when the source cell was blank. Absent values
/// never take part in aggregates and are never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation date
    pub date: NaiveDate,

    /// Daily maximum temperature in Celsius
    pub max_temp: Option<f64>,

    /// Daily minimum temperature in Celsius
    pub min_temp: Option<f64>,

    /// Daily mean relative humidity in percent
    pub mean_humidity: Option<f64>,

    /// Daily maximum relative humidity in percent
    pub max_humidity: Option<f64>,
}

// =============================================================================
// Report Results
// =============================================================================

/// An extreme value and the day it was first reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub value: f64,
    pub date: NaiveDate,
}

/// Hottest, coldest and most humid day of a year
///
/// A field is `None` when no record of the year had that measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearlyExtremes {
    pub max_temp: Option<DatedValue>,
    pub min_temp: Option<DatedValue>,
    pub max_humidity: Option<DatedValue>,
}

/// Means of the daily highs, lows and mean humidity of a month
///
/// Each mean uses its own denominator: only the records where that field was
/// present. A field is `None` when it had no present values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyAverages {
    pub avg_max_temp: Option<f64>,
    pub avg_min_temp: Option<f64>,
    pub avg_mean_humidity: Option<f64>,
}

// =============================================================================
// Bar Chart Structures
// =============================================================================

/// Temperatures of one data line of a month file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartRow {
    /// 1-based position of the data line within the file
    pub day: u32,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

/// Which temperature a bar stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarKind {
    Max,
    Min,
}

/// A drawn bar, or the missing-data placeholder in its place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSegment {
    pub kind: BarKind,
    /// Number of bar units, `None` when the temperature was absent
    pub length: Option<usize>,
}

/// One printed chart line, free of any terminal styling
///
/// Rendered as `DD ` followed by each segment in order and then `label`
/// verbatim; the label carries its own leading space when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLine {
    pub day: u32,
    pub segments: Vec<BarSegment>,
    pub label: String,
}
