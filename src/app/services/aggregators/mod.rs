//! Running aggregates over weather records
//!
//! Every aggregate is a fold: records are observed one at a time and then
//! dropped, so a report never holds a month or a year of records in memory.
//!
//! - [`extremum`] - Maximum and minimum with the date first reaching them
//! - [`mean`] - Sum and count for averages with per-field denominators
//! - [`reports`] - Composite aggregators producing the report results

pub mod extremum;
pub mod mean;
pub mod reports;

pub use extremum::{MaxWithDate, MinWithDate};
pub use mean::MeanWithCount;
pub use reports::{BarChartCollector, MonthlyAveragesAggregator, YearlyExtremesAggregator};

use crate::app::models::WeatherRecord;

/// A fold over a sequence of weather records
pub trait Aggregator {
    type Output;

    /// Fold one record into the running state
    fn observe(&mut self, record: &WeatherRecord);

    /// Produce the result for everything observed so far
    fn finish(self) -> Self::Output;
}
