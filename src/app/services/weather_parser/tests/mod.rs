//! Test utilities and fixtures for month file parser testing
//!
//! This module provides sample month files and helpers shared by the parser
//! test modules.

use crate::app::adapters::filesystem::memory::MemoryStore;
use chrono::NaiveDate;

mod column_mapping_tests;
mod field_parser_tests;

/// Header of the sample data set, with columns in their usual order
pub const SAMPLE_HEADER: &str = "PKT,Max TemperatureC,Mean TemperatureC,Min TemperatureC,Dew PointC,MeanDew PointC,Min DewpointC,Max Humidity, Mean Humidity, Min Humidity, Max Sea Level PressurehPa";

/// Header naming the same columns in a different order
pub const SHUFFLED_HEADER: &str = "Max TemperatureC, Mean Humidity, PKT, Min TemperatureC, Max Humidity";

/// A short month file with a blank first line, one header, data and a
/// trailing comment, as found in the real data set
pub fn sample_month_file() -> String {
    format!(
        "\n{}\n\
2004-3-1,27,21,14,8,5,1,72,43,14,1016\n\
2004-3-2,30,23,16,9,6,2,68,,20,1015\n\
2004-3-3,,22,,10,7,3,,40,18,1014\n\
<!-- 0.2 -->\n",
        SAMPLE_HEADER
    )
}

/// A month file using the shuffled header
pub fn shuffled_month_file() -> String {
    format!(
        "{}\n\
23,55,2004-4-1,18,93\n\
25,,2004-4-2,,81\n",
        SHUFFLED_HEADER
    )
}

/// Store holding both sample files
pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_file("/data/march.txt", &sample_month_file())
        .with_file("/data/april.txt", &shuffled_month_file())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
