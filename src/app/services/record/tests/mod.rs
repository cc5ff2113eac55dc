//! Test utilities for the record container
//!
//! Shared fixtures used by the encoder, decoder and CSV codec tests.

use crate::app::models::{Location, NamedFeed};
use crate::app::services::record::DataRecord;

mod encode_tests;

/// Location of the Adafruit Industries office, used as a non-zero fixture
pub fn test_location() -> Location {
    Location::new(40.7267, -74.0049, 12.5)
}

/// Feed fixture
pub fn test_feed() -> NamedFeed {
    NamedFeed::new("office-temperature")
}

/// Record holding `text` as its value and nothing else
pub fn record_with_text(text: &str) -> DataRecord<'static> {
    let mut record = DataRecord::new();
    record.set_value(text).unwrap();
    record
}
