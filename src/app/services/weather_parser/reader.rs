//! Streaming reader for month files
//!
//! This module drives classification, schema resolution and record parsing
//! over whole files, handing each record to the caller as soon as it is
//! parsed.

use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::line_classifier::{LineKind, classify};
use super::record_parser::{check_required_columns, parse_weather_record};
use super::stats::ParseStats;
use crate::app::adapters::filesystem::WeatherStore;
use crate::app::models::WeatherRecord;
use crate::{Error, Result};

/// Month file reader holding the column mapping of one run
///
/// The mapping is resolved from the first header line seen by this reader
/// and reused for every later file. Later header lines are never
/// re-resolved; one that disagrees with the mapping is only logged.
pub struct WeatherReader<'a, S: WeatherStore + ?Sized> {
    store: &'a S,
    mapping: Option<ColumnMapping>,
}

impl<'a, S: WeatherStore + ?Sized> WeatherReader<'a, S> {
    /// Create a reader with no schema resolved yet
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            mapping: None,
        }
    }

    /// The column mapping, once a header line has been seen
    pub fn mapping(&self) -> Option<&ColumnMapping> {
        self.mapping.as_ref()
    }

    /// Stream one file, calling `on_record` for each data line
    ///
    /// The file handle is released when this returns, whether the whole file
    /// was read or an error stopped it early.
    pub fn read_file<F>(&mut self, path: &Path, mut on_record: F) -> Result<ParseStats>
    where
        F: FnMut(WeatherRecord),
    {
        let store = self.store;
        let reader = store.open(path)?;
        let mut stats = ParseStats::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
            let line_number = index + 1;

            let kind = classify(&line);
            stats.record_line(kind);

            match kind {
                LineKind::Header => self.observe_header(path, line_number, &line)?,
                LineKind::Data => {
                    let mapping = self
                        .mapping
                        .as_ref()
                        .ok_or_else(|| Error::missing_schema(path, line_number))?;
                    let record = parse_weather_record(&line, mapping)
                        .map_err(|e| e.at(path, line_number))?;
                    stats.records_parsed += 1;
                    on_record(record);
                }
                LineKind::Noise => {}
            }
        }

        debug!(
            "Read {}: {} lines, {} records, {} headers, {} noise ({:.1}%)",
            path.display(),
            stats.total_lines,
            stats.records_parsed,
            stats.header_lines,
            stats.noise_lines,
            stats.noise_rate()
        );

        Ok(stats)
    }

    fn observe_header(&mut self, path: &Path, line_number: usize, line: &str) -> Result<()> {
        match &self.mapping {
            None => {
                let mapping = ColumnMapping::resolve(line);
                check_required_columns(&mapping).map_err(|e| e.at(path, line_number))?;
                info!(
                    "Resolved {} columns from header in {} line {}",
                    mapping.len(),
                    path.display(),
                    line_number
                );
                self.mapping = Some(mapping);
            }
            Some(mapping) if !mapping.matches_header(line) => {
                warn!(
                    "Header in {} line {} differs from the resolved layout; keeping the first layout",
                    path.display(),
                    line_number
                );
            }
            Some(_) => {}
        }
        Ok(())
    }
}
