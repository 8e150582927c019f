//! Composite aggregators behind each report

use super::Aggregator;
use super::extremum::{MaxWithDate, MinWithDate};
use super::mean::MeanWithCount;
use crate::app::models::{BarChartRow, MonthlyAverages, WeatherRecord, YearlyExtremes};

/// Hottest day, coldest day and most humid day
#[derive(Debug, Clone, Default)]
pub struct YearlyExtremesAggregator {
    max_temp: MaxWithDate,
    min_temp: MinWithDate,
    max_humidity: MaxWithDate,
}

impl YearlyExtremesAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for YearlyExtremesAggregator {
    type Output = YearlyExtremes;

    fn observe(&mut self, record: &WeatherRecord) {
        self.max_temp.update_optional(record.max_temp, record.date);
        self.min_temp.update_optional(record.min_temp, record.date);
        self.max_humidity
            .update_optional(record.max_humidity, record.date);
    }

    fn finish(self) -> YearlyExtremes {
        YearlyExtremes {
            max_temp: self.max_temp.result(),
            min_temp: self.min_temp.result(),
            max_humidity: self.max_humidity.result(),
        }
    }
}

/// Means of daily highs, lows and mean humidity
#[derive(Debug, Clone, Default)]
pub struct MonthlyAveragesAggregator {
    max_temp: MeanWithCount,
    min_temp: MeanWithCount,
    mean_humidity: MeanWithCount,
}

impl MonthlyAveragesAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MonthlyAveragesAggregator {
    type Output = MonthlyAverages;

    fn observe(&mut self, record: &WeatherRecord) {
        self.max_temp.add_optional(record.max_temp);
        self.min_temp.add_optional(record.min_temp);
        self.mean_humidity.add_optional(record.mean_humidity);
    }

    fn finish(self) -> MonthlyAverages {
        MonthlyAverages {
            avg_max_temp: self.max_temp.mean(),
            avg_min_temp: self.min_temp.mean(),
            avg_mean_humidity: self.mean_humidity.mean(),
        }
    }
}

/// Per-day temperature rows of one month, numbered by position
#[derive(Debug, Clone, Default)]
pub struct BarChartCollector {
    rows: Vec<BarChartRow>,
}

impl BarChartCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for BarChartCollector {
    type Output = Vec<BarChartRow>;

    fn observe(&mut self, record: &WeatherRecord) {
        let day = self.rows.len() as u32 + 1;
        self.rows.push(BarChartRow {
            day,
            max_temp: record.max_temp,
            min_temp: record.min_temp,
        });
    }

    fn finish(self) -> Vec<BarChartRow> {
        self.rows
    }
}
