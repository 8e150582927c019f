//! Line classification for month files
//!
//! The rule is format-specific: a line is data when it starts
//! with the first digit of a 19xx/20xx year, a header when it is otherwise
//! longer than [`HEADER_MIN_LENGTH`] characters counting its line
//! terminator, and noise otherwise.

use crate::constants::{DATA_LINE_PREFIXES, HEADER_MIN_LENGTH};

/// Kind of a raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Column names
    Header,
    /// One day of observations
    Data,
    /// Blank separators and short garbage
    Noise,
}

/// Classify one line, given without its line terminator
///
/// The terminator counts as one character towards the header length, so a
/// 25-character line is already a header.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(DATA_LINE_PREFIXES) {
        LineKind::Data
    } else if line.chars().count() + 1 > HEADER_MIN_LENGTH {
        LineKind::Header
    } else {
        LineKind::Noise
    }
}
