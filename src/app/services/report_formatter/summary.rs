//! Extremes and averages report lines

use super::round_value;
use crate::Result;
use crate::app::models::{DatedValue, MonthlyAverages, YearlyExtremes};
use crate::config::month_name;
use crate::constants::INSUFFICIENT_DATA_LABEL;
use chrono::Datelike;

/// Lines of the yearly extremes report
///
/// ```text
/// Highest: 45C on June 23
/// Lowest: 01C on December 22
/// Humidity: 95% on August 14
/// ```
pub fn format_extremes(extremes: &YearlyExtremes) -> Result<Vec<String>> {
    Ok(vec![
        extreme_line("Highest", extremes.max_temp, |v| format!("{v:02}C"))?,
        extreme_line("Lowest", extremes.min_temp, |v| format!("{v:02}C"))?,
        extreme_line("Humidity", extremes.max_humidity, |v| format!("{v}%"))?,
    ])
}

fn extreme_line(
    label: &str,
    extreme: Option<DatedValue>,
    value_text: impl Fn(i64) -> String,
) -> Result<String> {
    match extreme {
        Some(DatedValue { value, date }) => Ok(format!(
            "{}: {} on {} {}",
            label,
            value_text(round_value(value)),
            month_name(date.month())?,
            date.day()
        )),
        None => Ok(format!("{label}: {INSUFFICIENT_DATA_LABEL}")),
    }
}

/// Lines of the monthly averages report
///
/// ```text
/// Highest Average: 39C
/// Lowest Average: 18C
/// Average Humidity: 71%
/// ```
pub fn format_averages(averages: &MonthlyAverages) -> Vec<String> {
    vec![
        average_line("Highest Average", averages.avg_max_temp, "C"),
        average_line("Lowest Average", averages.avg_min_temp, "C"),
        average_line("Average Humidity", averages.avg_mean_humidity, "%"),
    ]
}

fn average_line(label: &str, average: Option<f64>, unit: &str) -> String {
    match average {
        Some(value) => format!("{label}: {:02}{unit}", round_value(value)),
        None => format!("{label}: {INSUFFICIENT_DATA_LABEL}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dated(value: f64, month: u32, day: u32) -> Option<DatedValue> {
        Some(DatedValue {
            value,
            date: NaiveDate::from_ymd_opt(2002, month, day).unwrap(),
        })
    }

    #[test]
    fn test_format_extremes() {
        let extremes = YearlyExtremes {
            max_temp: dated(45.2, 6, 23),
            min_temp: dated(1.0, 12, 22),
            max_humidity: dated(94.5, 8, 14),
        };

        assert_eq!(
            format_extremes(&extremes).unwrap(),
            vec![
                "Highest: 45C on June 23",
                "Lowest: 01C on December 22",
                "Humidity: 95% on August 14",
            ]
        );
    }

    #[test]
    fn test_format_extremes_negative_and_single_digit_humidity() {
        let extremes = YearlyExtremes {
            max_temp: dated(9.0, 1, 2),
            min_temp: dated(-3.0, 1, 9),
            max_humidity: dated(7.0, 1, 31),
        };

        let lines = format_extremes(&extremes).unwrap();
        assert_eq!(lines[0], "Highest: 09C on January 2");
        assert_eq!(lines[1], "Lowest: -3C on January 9");
        assert_eq!(lines[2], "Humidity: 7% on January 31");
    }

    #[test]
    fn test_format_extremes_insufficient_data() {
        let extremes = YearlyExtremes {
            max_temp: dated(30.0, 5, 1),
            ..YearlyExtremes::default()
        };

        let lines = format_extremes(&extremes).unwrap();
        assert_eq!(lines[1], "Lowest: insufficient data");
        assert_eq!(lines[2], "Humidity: insufficient data");
    }

    #[test]
    fn test_format_averages_zero_padded() {
        let averages = MonthlyAverages {
            avg_max_temp: Some(39.4),
            avg_min_temp: Some(7.5),
            avg_mean_humidity: Some(71.0),
        };

        assert_eq!(
            format_averages(&averages),
            vec![
                "Highest Average: 39C",
                "Lowest Average: 08C",
                "Average Humidity: 71%",
            ]
        );
    }

    #[test]
    fn test_format_averages_insufficient_data() {
        let lines = format_averages(&MonthlyAverages::default());
        assert_eq!(lines[0], "Highest Average: insufficient data");
        assert_eq!(lines[1], "Lowest Average: insufficient data");
        assert_eq!(lines[2], "Average Humidity: insufficient data");
    }
}
