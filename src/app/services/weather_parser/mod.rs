//! Parser for daily weather observation month files
//!
//! Month files are loosely structured text: a header line naming the columns
//! in arbitrary order, comma-separated data lines that start with a year, and
//! blank or short noise lines in between. This module turns such files into a
//! stream of [`WeatherRecord`](crate::app::models::WeatherRecord)s without
//! keeping any of them in memory.
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Header line to column index mapping
//! - [`line_classifier`] - Header / data / noise decision for one raw line
//! - [`field_parsers`] - Optional field extraction and numeric/date coercion
//! - [`record_parser`] - Assembly of one record from a data line
//! - [`reader`] - File streaming with run-wide schema state
//! - [`stats`] - Per-file line statistics
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use weatherman::app::adapters::filesystem::FileSystemStore;
//! use weatherman::app::services::weather_parser::WeatherReader;
//!
//! # fn example() -> weatherman::Result<()> {
//! let store = FileSystemStore;
//! let mut reader = WeatherReader::new(&store);
//! let mut hottest = f64::NEG_INFINITY;
//! let stats = reader.read_file(Path::new("lahore_weather_2004_Mar.txt"), |record| {
//!     if let Some(max_temp) = record.max_temp {
//!         hottest = hottest.max(max_temp);
//!     }
//! })?;
//!
//! println!("{} records, hottest {}C", stats.records_parsed, hottest);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod line_classifier;
pub mod reader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use field_parsers::FieldError;
pub use line_classifier::{LineKind, classify};
pub use reader::WeatherReader;
pub use stats::ParseStats;
