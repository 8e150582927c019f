//! Report pipelines
//!
//! Each report validates its period against the configuration before the
//! store is touched, then streams the relevant month files through one
//! [`WeatherReader`] into an aggregator. Files are read strictly one after
//! another; each is closed before the next is opened.

use std::path::Path;
use tracing::{debug, info};

use crate::app::adapters::filesystem::WeatherStore;
use crate::app::models::{BarChartRow, MonthlyAverages, YearlyExtremes};
use crate::app::services::aggregators::{
    Aggregator, BarChartCollector, MonthlyAveragesAggregator, YearlyExtremesAggregator,
};
use crate::app::services::weather_parser::{ParseStats, WeatherReader};
use crate::config::{WeatherConfig, month_abbreviation};
use crate::{Error, Result};


/// Report service over a month file store
#[derive(Debug)]
pub struct WeatherReports<'a, S: WeatherStore + ?Sized> {
    store: &'a S,
    config: &'a WeatherConfig,
}

impl<'a, S: WeatherStore + ?Sized> WeatherReports<'a, S> {
    /// Create a report service with its store and configuration
    pub fn new(store: &'a S, config: &'a WeatherConfig) -> Self {
        Self { store, config }
    }

    /// Hottest, coldest and most humid day of a year
    ///
    /// Months without a file are skipped. Fails with [`Error::NoData`] when
    /// none of the twelve files exist.
    pub fn yearly_extremes(&self, year: i32) -> Result<YearlyExtremes> {
        self.config.validate_year(year)?;

        let mut reader = WeatherReader::new(self.store);
        let mut aggregator = YearlyExtremesAggregator::new();
        let mut total = ParseStats::new();
        let mut files_read = 0;

        for month in 1..=12 {
            let path = self.config.month_file_path(year, month)?;
            if !self.store.exists(&path) {
                info!("Skipping missing month file {}", path.display());
                continue;
            }

            files_read += 1;
            total += reader.read_file(&path, |record| aggregator.observe(&record))?;
        }

        if files_read == 0 {
            return Err(Error::no_data(year));
        }

        debug!(
            "Yearly extremes for {}: {} files, {} records",
            year, files_read, total.records_parsed
        );
        Ok(aggregator.finish())
    }

    /// Mean daily high, low and mean humidity of one month
    pub fn monthly_averages(&self, year: i32, month: u32) -> Result<MonthlyAverages> {
        self.fold_month(year, month, MonthlyAveragesAggregator::new())
    }

    /// Per-day maximum and minimum temperatures of one month
    pub fn monthly_bar_chart(&self, year: i32, month: u32) -> Result<Vec<BarChartRow>> {
        self.fold_month(year, month, BarChartCollector::new())
    }

    fn fold_month<A: Aggregator>(
        &self,
        year: i32,
        month: u32,
        mut aggregator: A,
    ) -> Result<A::Output> {
        self.config.validate_year(year)?;
        self.config.validate_month(month)?;

        let path = self.config.month_file_path(year, month)?;
        self.require_file(&path, year, month)?;

        let mut reader = WeatherReader::new(self.store);
        let stats = reader.read_file(&path, |record| aggregator.observe(&record))?;

        debug!(
            "Month {}-{:02}: {} records from {}",
            year,
            month,
            stats.records_parsed,
            path.display()
        );
        Ok(aggregator.finish())
    }

    fn require_file(&self, path: &Path, year: i32, month: u32) -> Result<()> {
        if self.store.exists(path) {
            Ok(())
        } else {
            info!("Month file not found: {}", path.display());
            Err(Error::missing_file(path, month_abbreviation(month)?, year))
        }
    }
}
