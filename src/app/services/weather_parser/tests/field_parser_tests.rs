//! Tests for field extraction and coercion

use super::{SAMPLE_HEADER, date};
use crate::Error;
use crate::app::services::weather_parser::column_mapping::ColumnMapping;
use crate::app::services::weather_parser::field_parsers::*;
use crate::app::services::weather_parser::record_parser::{
    check_required_columns, parse_weather_record,
};
use std::path::Path;

#[test]
fn test_get_optional_field_present_and_absent() {
    let mapping = ColumnMapping::resolve("a, b, c");
    let fields = split_fields(" 1 ,, x");

    assert_eq!(get_optional_field(&fields, &mapping, "a").unwrap(), Some("1"));
    assert_eq!(get_optional_field(&fields, &mapping, "b").unwrap(), None);
    assert_eq!(get_optional_field(&fields, &mapping, "c").unwrap(), Some("x"));
}

#[test]
fn test_whitespace_only_cell_is_absent() {
    let mapping = ColumnMapping::resolve("a, b");
    let fields = split_fields("1,   ");

    assert_eq!(get_optional_field(&fields, &mapping, "b").unwrap(), None);
}

#[test]
fn test_unknown_field_is_missing_field() {
    let mapping = ColumnMapping::resolve("a, b");
    let fields = split_fields("1,2");

    assert_eq!(
        get_optional_field(&fields, &mapping, "z"),
        Err(FieldError::MissingField {
            field: "z".to_string()
        })
    );
}

#[test]
fn test_short_row_is_an_error() {
    let mapping = ColumnMapping::resolve("a, b, c");
    let fields = split_fields("1,2");

    assert_eq!(
        get_optional_field(&fields, &mapping, "c"),
        Err(FieldError::ShortRow {
            field: "c".to_string(),
            index: 2,
            found: 2
        })
    );
}

#[test]
fn test_get_required_field_rejects_blank() {
    let mapping = ColumnMapping::resolve("a, b");
    let fields = split_fields("1,");

    assert_eq!(get_required_field(&fields, &mapping, "a").unwrap(), "1");
    assert!(matches!(
        get_required_field(&fields, &mapping, "b"),
        Err(FieldError::EmptyRequired { .. })
    ));
}

#[test]
fn test_to_number() {
    assert_eq!(to_number("27").unwrap(), 27.0);
    assert_eq!(to_number("-3.5").unwrap(), -3.5);
    assert_eq!(to_number("0").unwrap(), 0.0);
}

#[test]
fn test_to_number_rejects_corrupt_text() {
    assert!(matches!(
        to_number("abc"),
        Err(FieldError::InvalidNumber { .. })
    ));
    assert!(to_number("12C").is_err());
    assert!(to_number("NaN").is_err());
    assert!(to_number("inf").is_err());
}

#[test]
fn test_parse_date_without_leading_zeros() {
    assert_eq!(parse_date("2004-3-7").unwrap(), date(2004, 3, 7));
    assert_eq!(parse_date("1996-12-31").unwrap(), date(1996, 12, 31));
    assert_eq!(parse_date("2004-03-07").unwrap(), date(2004, 3, 7));
}

#[test]
fn test_parse_date_rejects_malformed_text() {
    for text in ["2004-3", "2004-3-7-1", "2004/3/7", "2004-13-1", "2004-2-30", "x-1-1", ""] {
        assert!(
            matches!(parse_date(text), Err(FieldError::InvalidDate { .. })),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_optional_f64() {
    let mapping = ColumnMapping::resolve("a, b, c");
    let fields = split_fields("10,,oops");

    assert_eq!(parse_optional_f64(&fields, &mapping, "a").unwrap(), Some(10.0));
    assert_eq!(parse_optional_f64(&fields, &mapping, "b").unwrap(), None);
    assert!(parse_optional_f64(&fields, &mapping, "c").is_err());
}

#[test]
fn test_parse_weather_record() {
    let mapping = ColumnMapping::resolve(SAMPLE_HEADER);
    let record =
        parse_weather_record("2004-3-2,30,23,16,9,6,2,68,,20,1015", &mapping).unwrap();

    assert_eq!(record.date, date(2004, 3, 2));
    assert_eq!(record.max_temp, Some(30.0));
    assert_eq!(record.min_temp, Some(16.0));
    assert_eq!(record.max_humidity, Some(68.0));
    assert_eq!(record.mean_humidity, None);
}

#[test]
fn test_parse_weather_record_absent_is_not_zero() {
    let mapping = ColumnMapping::resolve(SAMPLE_HEADER);
    let record = parse_weather_record("2004-3-3,,22,,10,7,3,,40,18,1014", &mapping).unwrap();

    assert_eq!(record.max_temp, None);
    assert_eq!(record.min_temp, None);
    assert_eq!(record.max_humidity, None);
    assert_eq!(record.mean_humidity, Some(40.0));
}

#[test]
fn test_check_required_columns() {
    assert!(check_required_columns(&ColumnMapping::resolve(SAMPLE_HEADER)).is_ok());

    let partial = ColumnMapping::resolve("PKT, Max TemperatureC, Min TemperatureC, Max Humidity");
    assert_eq!(
        check_required_columns(&partial),
        Err(FieldError::MissingField {
            field: "Mean Humidity".to_string()
        })
    );
}

#[test]
fn test_field_error_location() {
    let file = Path::new("/data/march.txt");

    let err = FieldError::InvalidNumber {
        text: "x".to_string(),
    }
    .at(file, 4);
    match err {
        Error::Parse { file: f, line, message } => {
            assert_eq!(f, file);
            assert_eq!(line, 4);
            assert!(message.contains("'x'"));
        }
        other => panic!("expected Parse, got {other:?}"),
    }

    let err = FieldError::MissingField {
        field: "PKT".to_string(),
    }
    .at(file, 2);
    assert!(matches!(err, Error::MissingField { .. }));
}
