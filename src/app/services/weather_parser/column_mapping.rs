//! Column mapping for header-defined month file layouts
//!
//! A month file names its columns once, in any order. This module turns that
//! header line into a name-to-index lookup used for every data line.

use crate::constants::FIELD_SEPARATOR;
use crate::{Error, Result};
use std::collections::HashMap;

/// Column mapping resolved from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Column name to zero-based index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Column names in header order
    pub columns: Vec<String>,
}

impl ColumnMapping {
    /// Resolve a comma-separated header line into a column mapping
    ///
    /// Names are trimmed of surrounding whitespace and numbered left to
    /// right. Any text is accepted; absent names only surface when they are
    /// looked up. A name repeated in the header maps to its last position.
    pub fn resolve(header_line: &str) -> Self {
        let columns: Vec<String> = header_line
            .split(FIELD_SEPARATOR)
            .map(|name| name.trim().to_string())
            .collect();

        let name_to_index = columns
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        ColumnMapping {
            name_to_index,
            columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Get the index for a column the caller cannot do without
    pub fn index_of(&self, column_name: &str) -> Result<usize> {
        self.get_index(column_name)
            .ok_or_else(|| Error::missing_field(column_name))
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of columns in the header
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether another header line names the same columns in the same order
    pub fn matches_header(&self, header_line: &str) -> bool {
        header_line
            .split(FIELD_SEPARATOR)
            .map(str::trim)
            .eq(self.columns.iter().map(String::as_str))
    }
}
