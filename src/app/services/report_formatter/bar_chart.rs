//! Horizontal temperature bar charts
//!
//! Rows become [`ChartLine`]s that say what to draw without saying how it
//! looks; [`render_line`] lays a line out and leaves bar styling to the
//! caller.
//!
//! Dual-bar mode draws two lines per day:
//!
//! ```text
//! 01 +++++++++++++++++++++++++++ 27C
//! 01 ++++++++++++++ 14C
//! 02 Missing Data
//! ```
//!
//! Single-bar mode draws the maximum bar directly followed by the minimum
//! bar on one line:
//!
//! ```text
//! 01 +++++++++++++++++++++++++++++++++++++++++ 14C - 27C
//! ```

use super::round_value;
use crate::Result;
use crate::app::models::{BarChartRow, BarKind, BarSegment, ChartLine};
use crate::config::month_name;
use crate::constants::{BAR_MARKER, MAX_BAR_LENGTH, MISSING_DATA_LABEL};

/// Chart title, e.g. `March 2004`
pub fn chart_heading(year: i32, month: u32) -> Result<String> {
    Ok(format!("{} {}", month_name(month)?, year))
}

/// One line for the maximum and one for the minimum of each day
pub fn dual_bar_lines(rows: &[BarChartRow]) -> Vec<ChartLine> {
    rows.iter()
        .flat_map(|row| {
            [
                dual_line(row.day, BarKind::Max, row.max_temp),
                dual_line(row.day, BarKind::Min, row.min_temp),
            ]
        })
        .collect()
}

fn dual_line(day: u32, kind: BarKind, value: Option<f64>) -> ChartLine {
    ChartLine {
        day,
        segments: vec![segment(kind, value)],
        label: value
            .map(|v| format!(" {}", value_text(v)))
            .unwrap_or_default(),
    }
}

/// One line per day with both bars, maximum first
pub fn single_bar_lines(rows: &[BarChartRow]) -> Vec<ChartLine> {
    rows.iter().map(single_line).collect()
}

fn single_line(row: &BarChartRow) -> ChartLine {
    if row.max_temp.is_none() && row.min_temp.is_none() {
        return ChartLine {
            day: row.day,
            segments: Vec::new(),
            label: format!("{MISSING_DATA_LABEL} - {MISSING_DATA_LABEL}"),
        };
    }

    let text =
        |value: Option<f64>| value.map_or_else(|| MISSING_DATA_LABEL.to_string(), value_text);
    ChartLine {
        day: row.day,
        segments: vec![
            segment(BarKind::Max, row.max_temp),
            segment(BarKind::Min, row.min_temp),
        ],
        label: format!(" {} - {}", text(row.min_temp), text(row.max_temp)),
    }
}

fn segment(kind: BarKind, value: Option<f64>) -> BarSegment {
    BarSegment {
        kind,
        length: value.map(bar_length),
    }
}

/// One bar unit per rounded degree, clamped to `0..=MAX_BAR_LENGTH`
pub fn bar_length(value: f64) -> usize {
    usize::try_from(round_value(value))
        .unwrap_or(0)
        .min(MAX_BAR_LENGTH)
}

fn value_text(value: f64) -> String {
    format!("{:02}C", round_value(value))
}

/// Lay out a chart line, styling each drawn bar with `paint`
pub fn render_line(line: &ChartLine, paint: impl Fn(BarKind, &str) -> String) -> String {
    let mut out = format!("{:02} ", line.day);
    for segment in &line.segments {
        match segment.length {
            Some(length) => {
                let bar = BAR_MARKER.to_string().repeat(length);
                out.push_str(&paint(segment.kind, &bar));
            }
            None => out.push_str(MISSING_DATA_LABEL),
        }
    }
    out.push_str(&line.label);
    out
}

/// Lay out a chart line without styling
pub fn render_plain(line: &ChartLine) -> String {
    render_line(line, |_, bar| bar.to_string())
}
