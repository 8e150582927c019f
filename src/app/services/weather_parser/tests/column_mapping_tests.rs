//! Tests for header to column index mapping

use super::{SAMPLE_HEADER, SHUFFLED_HEADER};
use crate::Error;
use crate::app::services::weather_parser::column_mapping::ColumnMapping;

#[test]
fn test_resolve_trims_names() {
    let mapping = ColumnMapping::resolve("a, b , c");

    assert_eq!(mapping.get_index("a"), Some(0));
    assert_eq!(mapping.get_index("b"), Some(1));
    assert_eq!(mapping.get_index("c"), Some(2));
    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.columns, vec!["a", "b", "c"]);
}

#[test]
fn test_resolve_sample_header() {
    let mapping = ColumnMapping::resolve(SAMPLE_HEADER);

    assert_eq!(mapping.get_index("PKT"), Some(0));
    assert_eq!(mapping.get_index("Max TemperatureC"), Some(1));
    assert_eq!(mapping.get_index("Min TemperatureC"), Some(3));
    assert_eq!(mapping.get_index("Max Humidity"), Some(7));
    assert_eq!(mapping.get_index("Mean Humidity"), Some(8));
}

#[test]
fn test_resolve_any_order() {
    let mapping = ColumnMapping::resolve(SHUFFLED_HEADER);

    assert_eq!(mapping.get_index("PKT"), Some(2));
    assert_eq!(mapping.get_index("Max TemperatureC"), Some(0));
    assert_eq!(mapping.get_index("Max Humidity"), Some(4));
}

#[test]
fn test_resolve_is_pure() {
    assert_eq!(
        ColumnMapping::resolve(SAMPLE_HEADER),
        ColumnMapping::resolve(SAMPLE_HEADER)
    );
}

#[test]
fn test_index_of_missing_field_names_the_field() {
    let mapping = ColumnMapping::resolve("PKT, Max TemperatureC");

    assert_eq!(mapping.index_of("PKT").unwrap(), 0);

    let err = mapping.index_of("Mean Humidity").unwrap_err();
    match err {
        Error::MissingField { field } => assert_eq!(field, "Mean Humidity"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_has_column() {
    let mapping = ColumnMapping::resolve(SAMPLE_HEADER);
    assert!(mapping.has_column("Dew PointC"));
    assert!(!mapping.has_column("Wind Speed"));
    assert!(!mapping.is_empty());
}

#[test]
fn test_matches_header() {
    let mapping = ColumnMapping::resolve("a, b, c");

    assert!(mapping.matches_header("a,b,c"));
    assert!(mapping.matches_header(" a , b , c "));
    assert!(!mapping.matches_header("b,a,c"));
    assert!(!mapping.matches_header("a,b"));
    assert!(!mapping.matches_header("a,b,c,d"));
}
