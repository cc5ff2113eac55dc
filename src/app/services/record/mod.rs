//! Feed record container
//!
//! A [`DataRecord`] holds one telemetry reading exchanged with a feed: the
//! canonical text of the value plus an optional latitude/longitude/elevation.
//!
//! ## Architecture
//!
//! - [`data_record`] - The container, typed encoders and decoders, location and
//!   feed name accessors
//! - [`csv`] - The four-field `value,lat,lon,ele` codec
//!
//! ## Usage
//!
//! ```rust
//! use feed_record::{DataRecord, Location, NamedFeed};
//!
//! # fn example() -> feed_record::Result<()> {
//! let feed = NamedFeed::new("greenhouse-humidity");
//! let mut record = DataRecord::with_feed(&feed);
//! record.set_value_at(61.5, Location::new(52.37, 4.89, 2.0))?;
//!
//! assert_eq!(record.to_csv()?, "61.500000,52.370000,4.890000,2.00");
//! assert_eq!(record.to_int(), 61);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod csv;
pub mod data_record;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use data_record::DataRecord;
