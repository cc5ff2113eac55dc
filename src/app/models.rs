//! Data models for feed records
//!
//! This module contains the small value types a record is built from: the
//! geolocation triple, the typed input accepted by the encoder, the digital
//! pin level produced by the decoder, and the feed a record belongs to.

use crate::constants::LOCATION_EPSILON;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

// =============================================================================
// Location
// =============================================================================

/// Geolocation attached to a reading
///
/// The all-zero triple is the sentinel meaning "no location attached", so a
/// reading taken at exactly (0, 0, 0) cannot carry its location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Elevation in meters
    pub elevation: f64,
}

impl Location {
    /// The sentinel "no location" triple
    pub const UNSET: Location = Location {
        latitude: 0.0,
        longitude: 0.0,
        elevation: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Check whether every coordinate lies within epsilon of zero
    pub fn is_unset(&self) -> bool {
        [self.latitude, self.longitude, self.elevation]
            .iter()
            .all(|c| c.abs() < LOCATION_EPSILON)
    }
}

impl From<(f64, f64, f64)> for Location {
    fn from((latitude, longitude, elevation): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, elevation)
    }
}

// =============================================================================
// Pin Level
// =============================================================================

/// Two-valued digital level handed to hardware I/O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinLevel {
    Low = 0,
    High = 1,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value { PinLevel::High } else { PinLevel::Low }
    }
}

impl std::fmt::Display for PinLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PinLevel::Low => write!(f, "LOW"),
            PinLevel::High => write!(f, "HIGH"),
        }
    }
}

// =============================================================================
// Typed Value
// =============================================================================

/// A reading in one of the source types the encoder accepts
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue<'a> {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    Text(Cow<'a, str>),
}

impl TypedValue<'_> {
    /// Short name of the variant, as used on the command line
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Bool(_) => ValueKind::Bool,
            TypedValue::Int(_) => ValueKind::Int,
            TypedValue::UInt(_) => ValueKind::UInt,
            TypedValue::Long(_) => ValueKind::Long,
            TypedValue::ULong(_) => ValueKind::ULong,
            TypedValue::Float(_) => ValueKind::Float,
            TypedValue::Double(_) => ValueKind::Double,
            TypedValue::Text(_) => ValueKind::Text,
        }
    }
}

macro_rules! typed_value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for TypedValue<'_> {
                fn from(value: $source) -> Self {
                    TypedValue::$variant(value)
                }
            }
        )*
    };
}

typed_value_from! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    f32 => Float,
    f64 => Double,
}

impl<'a> From<&'a str> for TypedValue<'a> {
    fn from(value: &'a str) -> Self {
        TypedValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for TypedValue<'_> {
    fn from(value: String) -> Self {
        TypedValue::Text(Cow::Owned(value))
    }
}

/// Discriminant of [`TypedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Int,
    #[value(name = "uint")]
    UInt,
    Long,
    #[value(name = "ulong")]
    ULong,
    Float,
    Double,
    Text,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Long => "long",
            ValueKind::ULong => "ulong",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Text => "text",
        }
    }

    /// Strictly parse `input` into a typed value of this kind
    ///
    /// Unlike the record decoders this rejects malformed text, since it
    /// guards user input rather than stored readings.
    pub fn parse<'a>(&self, input: &'a str) -> Result<TypedValue<'a>> {
        let trimmed = input.trim();
        let invalid = || Error::invalid_value(self.as_str(), input);

        let value = match self {
            ValueKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "1" | "true" | "t" | "yes" | "on" => TypedValue::Bool(true),
                "0" | "false" | "f" | "no" | "off" => TypedValue::Bool(false),
                _ => return Err(invalid()),
            },
            ValueKind::Int => TypedValue::Int(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::UInt => TypedValue::UInt(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Long => TypedValue::Long(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::ULong => TypedValue::ULong(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Float => TypedValue::Float(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Double => TypedValue::Double(trimmed.parse().map_err(|_| invalid())?),
            ValueKind::Text => TypedValue::Text(Cow::Borrowed(input)),
        };

        Ok(value)
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bool" => Ok(ValueKind::Bool),
            "int" => Ok(ValueKind::Int),
            "uint" => Ok(ValueKind::UInt),
            "long" => Ok(ValueKind::Long),
            "ulong" => Ok(ValueKind::ULong),
            "float" => Ok(ValueKind::Float),
            "double" => Ok(ValueKind::Double),
            "text" => Ok(ValueKind::Text),
            _ => Err(Error::invalid_value("kind", s)),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Feed
// =============================================================================

/// The feed (topic) a record is exchanged on
///
/// Records only ever read the display name.
pub trait Feed {
    fn name(&self) -> &str;
}

/// Minimal feed identified by its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedFeed {
    pub name: String,
}

impl NamedFeed {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Feed for NamedFeed {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Feed for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_unset_detection() {
        assert!(Location::UNSET.is_unset());
        assert!(Location::default().is_unset());
        assert!(Location::new(0.0000001, -0.0000001, 0.0).is_unset());

        assert!(!Location::new(0.00001, 0.0, 0.0).is_unset());
        assert!(!Location::new(0.0, 0.0, -12.5).is_unset());
        assert!(!Location::new(51.4816, -0.0077, 25.0).is_unset());
    }

    #[test]
    fn test_location_from_tuple() {
        let location: Location = (42.33, -71.05, 8.0).into();
        assert_eq!(location.latitude, 42.33);
        assert_eq!(location.longitude, -71.05);
        assert_eq!(location.elevation, 8.0);
    }

    #[test]
    fn test_pin_level_from_bool() {
        assert_eq!(PinLevel::from(true), PinLevel::High);
        assert_eq!(PinLevel::from(false), PinLevel::Low);
        assert_eq!(PinLevel::High as i32, 1);
        assert_eq!(PinLevel::High.to_string(), "HIGH");
    }

    #[test]
    fn test_typed_value_conversions() {
        assert_eq!(TypedValue::from(true), TypedValue::Bool(true));
        assert_eq!(TypedValue::from(-3i32), TypedValue::Int(-3));
        assert_eq!(TypedValue::from(7u64), TypedValue::ULong(7));
        assert_eq!(TypedValue::from(1.5f32), TypedValue::Float(1.5));
        assert_eq!(
            TypedValue::from("open"),
            TypedValue::Text(Cow::Borrowed("open"))
        );
        assert_eq!(TypedValue::from("x".to_string()).kind(), ValueKind::Text);
    }

    #[test]
    fn test_value_kind_parse() {
        assert_eq!(
            ValueKind::Int.parse(" -42 ").unwrap(),
            TypedValue::Int(-42)
        );
        assert_eq!(ValueKind::Bool.parse("On").unwrap(), TypedValue::Bool(true));
        assert_eq!(
            ValueKind::Text.parse(" keep spaces ").unwrap(),
            TypedValue::Text(Cow::Borrowed(" keep spaces "))
        );

        let err = ValueKind::UInt.parse("-1").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { kind: "uint", .. }));
        assert!(ValueKind::Bool.parse("maybe").is_err());
    }

    #[test]
    fn test_value_kind_from_str() {
        assert_eq!("ULONG".parse::<ValueKind>().unwrap(), ValueKind::ULong);
        assert_eq!("double".parse::<ValueKind>().unwrap(), ValueKind::Double);
        assert!("decimal".parse::<ValueKind>().is_err());
    }

    #[test]
    fn test_named_feed() {
        let feed = NamedFeed::new("office-temperature");
        assert_eq!(feed.name(), "office-temperature");
        assert_eq!("door".to_string().name(), "door");
    }
}
