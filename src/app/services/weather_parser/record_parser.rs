//! Individual data line parsing
//!
//! Builds one [`WeatherRecord`] from a data line using the run's column
//! mapping.

use super::column_mapping::ColumnMapping;
use super::field_parsers::{FieldError, parse_optional_f64, parse_required_date, split_fields};
use crate::app::models::WeatherRecord;
use crate::constants::fields;

/// Parse a single weather record from a data line
pub fn parse_weather_record(
    line: &str,
    mapping: &ColumnMapping,
) -> Result<WeatherRecord, FieldError> {
    let cells = split_fields(line);

    Ok(WeatherRecord {
        date: parse_required_date(&cells, mapping, fields::DATE)?,
        max_temp: parse_optional_f64(&cells, mapping, fields::MAX_TEMPERATURE)?,
        min_temp: parse_optional_f64(&cells, mapping, fields::MIN_TEMPERATURE)?,
        mean_humidity: parse_optional_f64(&cells, mapping, fields::MEAN_HUMIDITY)?,
        max_humidity: parse_optional_f64(&cells, mapping, fields::MAX_HUMIDITY)?,
    })
}

/// Check that a mapping holds every column a record needs
///
/// Returns the first absent field name as a [`FieldError::MissingField`].
pub fn check_required_columns(mapping: &ColumnMapping) -> Result<(), FieldError> {
    match fields::REQUIRED
        .iter()
        .find(|name| !mapping.has_column(name))
    {
        Some(name) => Err(FieldError::MissingField {
            field: name.to_string(),
        }),
        None => Ok(()),
    }
}
