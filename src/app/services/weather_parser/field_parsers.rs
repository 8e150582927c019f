//! Field parsing utilities for month file data lines
//!
//! Blank cells are absent values, not errors. Errors are reserved for input
//! that is genuinely corrupt: a non-numeric measurement, a malformed date, or
//! a row too short to hold a mapped column.

use super::column_mapping::ColumnMapping;
use crate::Error;
use crate::constants::{DATE_SEPARATOR, FIELD_SEPARATOR};
use chrono::NaiveDate;
use std::path::Path;

/// Field-level failure, located by the reader once file and line are known
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("missing field '{field}' in data set header")]
    MissingField { field: String },

    #[error("field '{field}' is at column {index} but the line has {found} fields")]
    ShortRow {
        field: String,
        index: usize,
        found: usize,
    },

    #[error("empty value for required field '{field}'")]
    EmptyRequired { field: String },

    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },

    #[error("invalid date '{text}' (expected YYYY-M-D)")]
    InvalidDate { text: String },
}

impl FieldError {
    /// Attach the file and 1-based line number the field came from
    pub fn at(self, file: &Path, line: usize) -> Error {
        match self {
            FieldError::MissingField { field } => Error::missing_field(field),
            other => Error::parse(file, line, other.to_string()),
        }
    }
}

/// Split a data line into its raw cells
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Get a field's trimmed text, or `None` when the cell is blank
pub fn get_optional_field<'a>(
    fields: &[&'a str],
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<Option<&'a str>, FieldError> {
    let index = mapping
        .get_index(field_name)
        .ok_or_else(|| FieldError::MissingField {
            field: field_name.to_string(),
        })?;

    let value = fields.get(index).ok_or_else(|| FieldError::ShortRow {
        field: field_name.to_string(),
        index,
        found: fields.len(),
    })?;

    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then_some(trimmed))
}

/// Get a field's trimmed text, failing when the cell is blank
pub fn get_required_field<'a>(
    fields: &[&'a str],
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str, FieldError> {
    get_optional_field(fields, mapping, field_name)?.ok_or_else(|| FieldError::EmptyRequired {
        field: field_name.to_string(),
    })
}

/// Parse present text as a finite number
pub fn to_number(text: &str) -> Result<f64, FieldError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldError::InvalidNumber {
            text: text.to_string(),
        })
}

/// Parse a `YYYY-M-D` date; leading zeros are accepted but not required
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::InvalidDate {
        text: text.to_string(),
    };

    let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };

    let year = year.trim().parse::<i32>().map_err(|_| invalid())?;
    let month = month.trim().parse::<u32>().map_err(|_| invalid())?;
    let day = day.trim().parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an optional numeric field from a data line
pub fn parse_optional_f64(
    fields: &[&str],
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<Option<f64>, FieldError> {
    get_optional_field(fields, mapping, field_name)?
        .map(to_number)
        .transpose()
}

/// Parse a required date field from a data line
pub fn parse_required_date(
    fields: &[&str],
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<NaiveDate, FieldError> {
    get_required_field(fields, mapping, field_name).and_then(parse_date)
}
