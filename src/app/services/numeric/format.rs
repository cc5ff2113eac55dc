//! Float formatting in the styles of the supported device toolchains
//!
//! AVR libc only ships a scientific formatter, the ESP8266 core only a
//! fixed-point one that takes a precision hint, and everything else falls back
//! to `%f`. Each style is reproduced here so records stay byte-compatible with
//! whichever device produced or will consume them.

use crate::constants::{
    DEFAULT_PRECISION, ELEVATION_PRECISION, PRINTF_PRECISION, SCIENTIFIC_EXPONENT_DIGITS,
    SCIENTIFIC_PRECISION,
};
use serde::{Deserialize, Serialize};

/// Float to text conversion style
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FloatStyle {
    /// `d.dddddddddde±XX`, ignores the precision hint (AVR `dtostre`)
    Scientific,
    /// Fixed-point with the requested fractional digits (ESP8266 `dtostrf`)
    #[default]
    Fixed,
    /// Always six fractional digits, ignores the precision hint (`%f`)
    Printf,
}

impl FloatStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStyle::Scientific => "scientific",
            FloatStyle::Fixed => "fixed",
            FloatStyle::Printf => "printf",
        }
    }

    /// Check whether this style honours a caller supplied precision
    pub fn honours_precision(&self) -> bool {
        matches!(self, FloatStyle::Fixed)
    }
}

impl std::str::FromStr for FloatStyle {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scientific" | "sci" => Ok(FloatStyle::Scientific),
            "fixed" => Ok(FloatStyle::Fixed),
            "printf" => Ok(FloatStyle::Printf),
            _ => Err(crate::Error::configuration(format!(
                "Unknown float style '{}': must be scientific, fixed or printf",
                s
            ))),
        }
    }
}

impl std::fmt::Display for FloatStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatting settings carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatFormat {
    /// Conversion style
    pub style: FloatStyle,

    /// Fractional digits for values, latitude and longitude
    pub precision: usize,

    /// Fractional digits for elevation
    pub elevation_precision: usize,
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self {
            style: FloatStyle::default(),
            precision: DEFAULT_PRECISION,
            elevation_precision: ELEVATION_PRECISION,
        }
    }
}

impl FloatFormat {
    pub fn new(style: FloatStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_elevation_precision(mut self, precision: usize) -> Self {
        self.elevation_precision = precision;
        self
    }

    /// Format `value` using `precision` as the fractional digit hint
    pub fn format(&self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return format_non_finite(value);
        }

        match self.style {
            FloatStyle::Scientific => format_scientific(value, SCIENTIFIC_PRECISION),
            FloatStyle::Fixed => format!("{:.*}", precision, value),
            FloatStyle::Printf => format!("{:.*}", PRINTF_PRECISION, value),
        }
    }

    /// Format with the configured default precision
    pub fn format_default(&self, value: f64) -> String {
        self.format(value, self.precision)
    }

    /// Format with the configured elevation precision
    pub fn format_elevation(&self, value: f64) -> String {
        self.format(value, self.elevation_precision)
    }
}

/// Scientific notation with `digits` mantissa decimals and a signed,
/// zero-padded two digit exponent, e.g. `-1.2500000000e-03`
pub fn format_scientific(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let formatted = format!("{:.*e}", digits, value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };

    format!(
        "{}e{}{:0width$}",
        mantissa,
        sign,
        exponent.unsigned_abs(),
        width = SCIENTIFIC_EXPONENT_DIGITS
    )
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}
