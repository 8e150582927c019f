//! Parsing statistics for month file processing
//!
//! Tracks how the lines of one file were classified and how many records
//! were produced from them.

use super::line_classifier::LineKind;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Simple parsing statistics for one or more files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines read
    pub total_lines: usize,

    /// Lines classified as headers
    pub header_lines: usize,

    /// Lines classified as data
    pub data_lines: usize,

    /// Lines classified as noise
    pub noise_lines: usize,

    /// Records handed to the caller
    pub records_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line
    pub fn record_line(&mut self, kind: LineKind) {
        self.total_lines += 1;
        match kind {
            LineKind::Header => self.header_lines += 1,
            LineKind::Data => self.data_lines += 1,
            LineKind::Noise => self.noise_lines += 1,
        }
    }

    /// Share of lines that were noise, as a percentage
    pub fn noise_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.noise_lines as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl AddAssign for ParseStats {
    fn add_assign(&mut self, other: Self) {
        self.total_lines += other.total_lines;
        self.header_lines += other.header_lines;
        self.data_lines += other.data_lines;
        self.noise_lines += other.noise_lines;
        self.records_parsed += other.records_parsed;
    }
}
