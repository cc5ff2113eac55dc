//! Tests for the typed value encoders and location handling

use super::{record_with_text, test_location};
use crate::Error;
use crate::app::models::{Location, TypedValue};
use crate::app::services::numeric::{FloatFormat, FloatStyle};
use crate::app::services::record::DataRecord;
use crate::constants::MAX_VALUE_LENGTH;

#[test]
fn test_new_record_is_empty() {
    let record = DataRecord::new();

    assert_eq!(record.value(), None);
    assert_eq!(record.as_str(), "");
    assert_eq!(record.location(), Location::UNSET);
    assert_eq!(record.format(), FloatFormat::default());
}

#[test]
fn test_encode_booleans() {
    let mut record = DataRecord::new();

    record.set_value(true).unwrap();
    assert_eq!(record.value(), Some("1"));

    record.set_value(false).unwrap();
    assert_eq!(record.value(), Some("0"));
}

#[test]
fn test_encode_integers() {
    let mut record = DataRecord::new();

    record.set_value(-42i32).unwrap();
    assert_eq!(record.as_str(), "-42");

    record.set_value(4_000_000_000u32).unwrap();
    assert_eq!(record.as_str(), "4000000000");

    record.set_value(i64::MIN).unwrap();
    assert_eq!(record.as_str(), "-9223372036854775808");

    record.set_value(u64::MAX).unwrap();
    assert_eq!(record.as_str(), "18446744073709551615");

    record.set_value(0i32).unwrap();
    assert_eq!(record.as_str(), "0");
}

#[test]
fn test_encode_floats_with_default_precision() {
    let mut record = DataRecord::new();

    record.set_value(23.5f64).unwrap();
    assert_eq!(record.as_str(), "23.500000");

    record.set_value(0.1f32).unwrap();
    assert_eq!(record.as_str(), "0.100000");
}

#[test]
fn test_encode_float_precision_hint() {
    let mut record = DataRecord::new();

    record
        .set_value_with(3.14159f64, Location::UNSET, 2)
        .unwrap();
    assert_eq!(record.as_str(), "3.14");

    record.set_value_with(-7.5f32, Location::UNSET, 0).unwrap();
    assert_eq!(record.as_str(), "-8");
}

#[test]
fn test_encode_float_styles() {
    let mut scientific = DataRecord::new().with_format(FloatFormat::new(FloatStyle::Scientific));
    scientific.set_value_with(12.5f64, Location::UNSET, 2).unwrap();
    assert_eq!(scientific.as_str(), "1.2500000000e+01");

    let mut printf = DataRecord::new().with_format(FloatFormat::new(FloatStyle::Printf));
    printf.set_value_with(12.5f64, Location::UNSET, 2).unwrap();
    assert_eq!(printf.as_str(), "12.500000");
}

#[test]
fn test_precision_only_applies_to_floats() {
    let mut record = DataRecord::new();

    record.set_value_with(12i32, Location::UNSET, 2).unwrap();
    assert_eq!(record.as_str(), "12");
}

#[test]
fn test_encode_text_replaces_previous_value() {
    let mut record = DataRecord::new();

    record.set_value("a much longer first reading").unwrap();
    record.set_value("ok").unwrap();
    assert_eq!(record.as_str(), "ok");

    record.set_value(String::from("owned")).unwrap();
    assert_eq!(record.as_str(), "owned");

    record.set_value(TypedValue::from("typed")).unwrap();
    assert_eq!(record.to_string(), "typed");
}

#[test]
fn test_encode_text_at_maximum_length() {
    let mut record = DataRecord::new();
    let text = "x".repeat(MAX_VALUE_LENGTH);

    record.set_value(text.as_str()).unwrap();
    assert_eq!(record.as_str().len(), MAX_VALUE_LENGTH);
}

#[test]
fn test_encode_text_over_maximum_length() {
    let mut record = record_with_text("previous");
    let text = "x".repeat(MAX_VALUE_LENGTH + 1);

    let err = record
        .set_value_at(text.as_str(), test_location())
        .unwrap_err();

    match err {
        Error::LengthExceeded {
            field,
            length,
            limit,
        } => {
            assert_eq!(field, "value");
            assert_eq!(length, MAX_VALUE_LENGTH + 1);
            assert_eq!(limit, MAX_VALUE_LENGTH);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // Nothing is stored on failure
    assert_eq!(record.as_str(), "previous");
    assert_eq!(record.location(), Location::UNSET);
}

#[test]
fn test_encode_oversized_float() {
    let mut record = DataRecord::new();

    let err = record.set_value(1e300f64).unwrap_err();
    assert!(matches!(err, Error::LengthExceeded { field: "value", .. }));
    assert_eq!(record.value(), None);
}

#[test]
fn test_set_value_attaches_location() {
    let mut record = DataRecord::new();

    record.set_value_at(21i32, test_location()).unwrap();

    assert_eq!(record.lat(), 40.7267);
    assert_eq!(record.lon(), -74.0049);
    assert_eq!(record.ele(), 12.5);
}

#[test]
fn test_set_value_without_location_keeps_location() {
    let mut record = DataRecord::new();

    record.set_value_at(1i32, test_location()).unwrap();
    record.set_value(2i32).unwrap();

    assert_eq!(record.as_str(), "2");
    assert_eq!(record.location(), test_location());
}

#[test]
fn test_zero_location_is_ignored() {
    let mut record = DataRecord::new();

    record.set_location(test_location());
    record.set_location((0.0, 0.0, 0.0));
    assert_eq!(record.location(), test_location());

    // Within epsilon of zero also counts as zero
    record.set_location((0.0000001, 0.0, -0.0000001));
    assert_eq!(record.location(), test_location());
}

#[test]
fn test_partially_zero_location_is_stored() {
    let mut record = DataRecord::new();

    record.set_location(test_location());
    record.set_location((0.0, 0.0, 100.0));

    assert_eq!(record.location(), Location::new(0.0, 0.0, 100.0));
}
