//! The value and location container
//!
//! Every typed setter reduces its input to canonical text, and every typed
//! accessor reads that text back with the permissive prefix parsers, so the
//! text is the single source of truth for the reading.

use crate::app::models::{Feed, Location, PinLevel, TypedValue};
use crate::app::services::numeric::{
    FloatFormat, parse_double_prefix, parse_int_prefix, parse_long_prefix, parse_uint_prefix,
    parse_ulong_prefix,
};
use crate::constants::{FALSE_TEXT, MAX_VALUE_LENGTH, TRUE_TEXT};
use crate::{Error, Result};
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// One telemetry reading: canonical value text plus optional geolocation
///
/// A record is owned and mutated by a single thread for the duration of one
/// reading exchange. It borrows the feed it belongs to and never outlives it.
#[derive(Clone, Default)]
pub struct DataRecord<'f> {
    pub(super) feed: Option<&'f dyn Feed>,
    pub(super) value: Option<String>,
    pub(super) location: Location,
    pub(super) format: FloatFormat,
}

impl std::fmt::Debug for DataRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataRecord")
            .field("feed", &self.feed.map(|feed| feed.name()))
            .field("value", &self.value)
            .field("location", &self.location)
            .field("format", &self.format)
            .finish()
    }
}

impl<'f> DataRecord<'f> {
    /// Create an empty record bound to no feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record bound to `feed`
    pub fn with_feed(feed: &'f dyn Feed) -> Self {
        Self {
            feed: Some(feed),
            ..Self::default()
        }
    }

    /// Create a record from a CSV line without a feed
    ///
    /// Construction never fails. An incomplete line leaves the fields that
    /// were parsed before the first missing one; an oversized line leaves the
    /// record empty.
    pub fn from_csv(csv: &str) -> Self {
        let mut record = Self::new();
        record.parse_on_construct(csv);
        record
    }

    /// Create a record bound to `feed` from a CSV line, see [`Self::from_csv`]
    pub fn with_feed_and_csv(feed: &'f dyn Feed, csv: &str) -> Self {
        let mut record = Self::with_feed(feed);
        record.parse_on_construct(csv);
        record
    }

    fn parse_on_construct(&mut self, csv: &str) {
        match self.set_csv(csv) {
            Ok(true) => {}
            Ok(false) => debug!("Constructed record from incomplete CSV '{}'", csv),
            Err(e) => warn!("Ignoring CSV during record construction: {}", e),
        }
    }

    /// Replace the float formatting used by this record
    pub fn with_format(mut self, format: FloatFormat) -> Self {
        self.format = format;
        self
    }

    pub fn set_format(&mut self, format: FloatFormat) {
        self.format = format;
    }

    pub fn format(&self) -> FloatFormat {
        self.format
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Store `value` without touching the location
    pub fn set_value<'v>(&mut self, value: impl Into<TypedValue<'v>>) -> Result<()> {
        self.set_value_with(value, Location::UNSET, self.format.precision)
    }

    /// Store `value` and attach `location`
    ///
    /// An all-zero location is ignored and the previous location kept, see
    /// [`Self::set_location`].
    pub fn set_value_at<'v>(
        &mut self,
        value: impl Into<TypedValue<'v>>,
        location: impl Into<Location>,
    ) -> Result<()> {
        self.set_value_with(value, location, self.format.precision)
    }

    /// Store `value` and attach `location`, formatting floats with
    /// `precision` fractional digits where the float style allows it
    ///
    /// Fails with [`Error::LengthExceeded`] if the text would not fit the
    /// value buffer; the record is then left untouched.
    pub fn set_value_with<'v>(
        &mut self,
        value: impl Into<TypedValue<'v>>,
        location: impl Into<Location>,
        precision: usize,
    ) -> Result<()> {
        let value = value.into();
        let text = self.encode(&value, precision);

        if text.len() > MAX_VALUE_LENGTH {
            return Err(Error::length_exceeded("value", text.len(), MAX_VALUE_LENGTH));
        }

        trace!("Encoded {} value as '{}'", value.kind(), text);
        self.value = Some(text.into_owned());
        self.set_location(location);
        Ok(())
    }

    fn encode<'v>(&self, value: &'v TypedValue<'_>, precision: usize) -> Cow<'v, str> {
        match value {
            TypedValue::Bool(true) => Cow::Borrowed(TRUE_TEXT),
            TypedValue::Bool(false) => Cow::Borrowed(FALSE_TEXT),
            TypedValue::Int(v) => Cow::Owned(v.to_string()),
            TypedValue::UInt(v) => Cow::Owned(v.to_string()),
            TypedValue::Long(v) => Cow::Owned(v.to_string()),
            TypedValue::ULong(v) => Cow::Owned(v.to_string()),
            TypedValue::Float(v) => Cow::Owned(self.format.format(f64::from(*v), precision)),
            TypedValue::Double(v) => Cow::Owned(self.format.format(*v, precision)),
            TypedValue::Text(text) => Cow::Borrowed(text.as_ref()),
        }
    }

    /// Attach a location to the reading
    ///
    /// If every coordinate is within epsilon of zero the call does nothing,
    /// which means a reading at exactly (0, 0, 0) cannot be located.
    pub fn set_location(&mut self, location: impl Into<Location>) {
        let location = location.into();

        if location.is_unset() {
            debug!("Ignoring zero location, keeping {:?}", self.location);
            return;
        }

        self.location = location;
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Stored value text, `None` until a value has been set or parsed
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Stored value text, empty when absent
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or("")
    }

    /// True for `"1"` or any text starting with `t` or `T`
    pub fn to_bool(&self) -> bool {
        let text = self.as_str();
        text == TRUE_TEXT || text.starts_with(['t', 'T'])
    }

    pub fn is_true(&self) -> bool {
        self.to_bool()
    }

    pub fn is_false(&self) -> bool {
        !self.to_bool()
    }

    pub fn to_pin_level(&self) -> PinLevel {
        PinLevel::from(self.is_true())
    }

    pub fn to_int(&self) -> i32 {
        parse_int_prefix(self.as_str())
    }

    /// Negative text wraps, so `"-1"` reads as `u32::MAX`
    pub fn to_unsigned_int(&self) -> u32 {
        parse_uint_prefix(self.as_str())
    }

    pub fn to_long(&self) -> i64 {
        parse_long_prefix(self.as_str())
    }

    /// Negative text wraps, so `"-1"` reads as `u64::MAX`
    pub fn to_unsigned_long(&self) -> u64 {
        parse_ulong_prefix(self.as_str())
    }

    pub fn to_float(&self) -> f32 {
        parse_double_prefix(self.as_str()) as f32
    }

    pub fn to_double(&self) -> f64 {
        parse_double_prefix(self.as_str())
    }

    // =========================================================================
    // Location and feed
    // =========================================================================

    pub fn lat(&self) -> f64 {
        self.location.latitude
    }

    pub fn lon(&self) -> f64 {
        self.location.longitude
    }

    pub fn ele(&self) -> f64 {
        self.location.elevation
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Display name of the bound feed, empty when no feed is bound
    pub fn feed_name(&self) -> &str {
        self.feed.map(|feed| feed.name()).unwrap_or("")
    }
}

impl std::fmt::Display for DataRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
