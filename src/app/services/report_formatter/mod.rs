//! Text formatting of report results
//!
//! - [`summary`] - Extremes and averages lines
//! - [`bar_chart`] - Styling-free chart lines and their plain rendering
//!
//! All displayed values are rounded half away from zero before formatting.

pub mod bar_chart;
pub mod summary;

pub use bar_chart::{chart_heading, dual_bar_lines, render_line, render_plain, single_bar_lines};
pub use summary::{format_averages, format_extremes};

/// Round to the nearest integer, halves away from zero
pub fn round_value(value: f64) -> i64 {
    value.round() as i64
}
