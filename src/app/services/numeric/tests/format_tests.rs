//! Tests for float formatting styles

use super::super::format::{FloatFormat, FloatStyle, format_scientific};
use crate::constants::{DEFAULT_PRECISION, ELEVATION_PRECISION};

#[test]
fn test_default_format() {
    let format = FloatFormat::default();

    assert_eq!(format.style, FloatStyle::Fixed);
    assert_eq!(format.precision, DEFAULT_PRECISION);
    assert_eq!(format.elevation_precision, ELEVATION_PRECISION);
}

#[test]
fn test_fixed_honours_precision() {
    let format = FloatFormat::new(FloatStyle::Fixed);

    assert_eq!(format.format(3.14159, 2), "3.14");
    assert_eq!(format.format(3.14159, 0), "3");
    assert_eq!(format.format(-0.5, 3), "-0.500");
    assert_eq!(format.format(42.0, 6), "42.000000");
    assert_eq!(format.format_default(10.5), "10.500000");
    assert_eq!(format.format_elevation(123.456), "123.46");
}

#[test]
fn test_printf_ignores_precision() {
    let format = FloatFormat::new(FloatStyle::Printf);

    assert_eq!(format.format(3.14159, 2), "3.141590");
    assert_eq!(format.format(0.0, 0), "0.000000");
    assert_eq!(format.format_elevation(25.0), "25.000000");
}

#[test]
fn test_scientific_ignores_precision() {
    let format = FloatFormat::new(FloatStyle::Scientific);

    assert_eq!(format.format(12.5, 2), "1.2500000000e+01");
    assert_eq!(format.format(12.5, 6), "1.2500000000e+01");
    assert_eq!(format.format(-0.00125, 2), "-1.2500000000e-03");
    assert_eq!(format.format(0.0, 2), "0.0000000000e+00");
}

#[test]
fn test_scientific_exponent_padding() {
    assert_eq!(format_scientific(1.0, 2), "1.00e+00");
    assert_eq!(format_scientific(1.5e-7, 1), "1.5e-07");
    assert_eq!(format_scientific(2.0e123, 3), "2.000e+123");
}

#[test]
fn test_non_finite_values() {
    for style in [FloatStyle::Scientific, FloatStyle::Fixed, FloatStyle::Printf] {
        let format = FloatFormat::new(style);
        assert_eq!(format.format(f64::NAN, 2), "nan");
        assert_eq!(format.format(f64::INFINITY, 2), "inf");
        assert_eq!(format.format(f64::NEG_INFINITY, 2), "-inf");
    }
}

#[test]
fn test_float_style_from_str() {
    assert_eq!("Scientific".parse::<FloatStyle>().unwrap(), FloatStyle::Scientific);
    assert_eq!("sci".parse::<FloatStyle>().unwrap(), FloatStyle::Scientific);
    assert_eq!(" fixed ".parse::<FloatStyle>().unwrap(), FloatStyle::Fixed);
    assert_eq!("PRINTF".parse::<FloatStyle>().unwrap(), FloatStyle::Printf);
    assert!("engineering".parse::<FloatStyle>().is_err());
}

#[test]
fn test_float_style_precision_support() {
    assert!(FloatStyle::Fixed.honours_precision());
    assert!(!FloatStyle::Printf.honours_precision());
    assert!(!FloatStyle::Scientific.honours_precision());
}

#[test]
fn test_builder_methods() {
    let format = FloatFormat::new(FloatStyle::Fixed)
        .with_precision(3)
        .with_elevation_precision(1);

    assert_eq!(format.format_default(1.23456), "1.235");
    assert_eq!(format.format_elevation(1.26), "1.3");
}
