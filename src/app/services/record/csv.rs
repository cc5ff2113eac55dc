//! Fixed four-field CSV codec for records
//!
//! The wire form is `value,lat,lon,ele` with no quoting or escaping. Fields
//! are split the way `strtok` splits them: runs of commas count as a single
//! separator, and anything after the fourth field is ignored.

use super::data_record::DataRecord;
use crate::app::services::numeric::parse_double_prefix;
use crate::constants::{
    CSV_BUFFER_SIZE, CSV_DELIMITER, CSV_FIELD_COUNT, MAX_COORDINATE_LENGTH, MAX_CSV_LENGTH,
    MAX_VALUE_LENGTH, csv_field_name,
};
use crate::{Error, Result};
use std::str::FromStr;
use tracing::{debug, trace};

/// Non-empty fields of a CSV line in order
fn tokenize(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(CSV_DELIMITER).filter(|field| !field.is_empty())
}

fn check_length(field: &'static str, length: usize, limit: usize) -> Result<()> {
    if length > limit {
        return Err(Error::length_exceeded(field, length, limit));
    }
    Ok(())
}

/// Split a line into exactly four fields, or report how many were found
fn split_fields(csv: &str) -> Result<[&str; CSV_FIELD_COUNT]> {
    check_length("csv", csv.len(), MAX_CSV_LENGTH)?;

    let mut fields = [""; CSV_FIELD_COUNT];
    let mut found = 0;
    for field in tokenize(csv).take(CSV_FIELD_COUNT) {
        fields[found] = field;
        found += 1;
    }

    if found < CSV_FIELD_COUNT {
        return Err(Error::incomplete_csv(found));
    }

    check_length("value", fields[0].len(), MAX_VALUE_LENGTH)?;
    Ok(fields)
}

impl DataRecord<'_> {
    /// Encode the record as `value,lat,lon,ele`
    ///
    /// Latitude and longitude use the record's default precision and
    /// elevation its elevation precision. A coordinate that formats wider than
    /// the device coordinate buffer fails with [`Error::LengthExceeded`].
    pub fn to_csv(&self) -> Result<String> {
        let mut csv = String::with_capacity(CSV_BUFFER_SIZE);
        csv.push_str(self.as_str());

        let coordinates = [
            ("lat", self.format.format_default(self.location.latitude)),
            ("lon", self.format.format_default(self.location.longitude)),
            ("ele", self.format.format_elevation(self.location.elevation)),
        ];

        for (field, formatted) in coordinates {
            check_length(field, formatted.len(), MAX_COORDINATE_LENGTH)?;
            csv.push(CSV_DELIMITER);
            csv.push_str(&formatted);
        }

        check_length("csv", csv.len(), MAX_CSV_LENGTH)?;
        trace!("Encoded record as '{}'", csv);
        Ok(csv)
    }

    /// Parse a CSV line into this record, field by field
    ///
    /// Returns `Ok(true)` when all four fields were present and `Ok(false)`
    /// when the line ran out early. In the latter case the fields before the
    /// first missing one have already been stored and the rest keep their
    /// previous values. Coordinates are read with the permissive float parser,
    /// so non-numeric text becomes 0.0 rather than an error.
    ///
    /// An oversized line or value field fails with
    /// [`Error::LengthExceeded`] before anything is stored.
    pub fn set_csv(&mut self, csv: &str) -> Result<bool> {
        check_length("csv", csv.len(), MAX_CSV_LENGTH)?;

        let mut fields = tokenize(csv);

        let Some(value) = fields.next() else {
            debug!("CSV '{}' has no {} field", csv, csv_field_name(0));
            return Ok(false);
        };
        check_length("value", value.len(), MAX_VALUE_LENGTH)?;
        self.value = Some(value.to_string());

        let coordinates = [
            &mut self.location.latitude,
            &mut self.location.longitude,
            &mut self.location.elevation,
        ];

        for (index, coordinate) in coordinates.into_iter().enumerate() {
            let Some(field) = fields.next() else {
                debug!("CSV '{}' has no {} field", csv, csv_field_name(index + 1));
                return Ok(false);
            };
            *coordinate = parse_double_prefix(field);
        }

        Ok(true)
    }

    /// Parse a CSV line into this record, all or nothing
    ///
    /// Unlike [`Self::set_csv`] nothing is stored unless all four fields are
    /// present; a short line fails with [`Error::IncompleteCsv`].
    pub fn try_set_csv(&mut self, csv: &str) -> Result<()> {
        let [value, lat, lon, ele] = split_fields(csv)?;

        self.value = Some(value.to_string());
        self.location.latitude = parse_double_prefix(lat);
        self.location.longitude = parse_double_prefix(lon);
        self.location.elevation = parse_double_prefix(ele);
        Ok(())
    }
}

impl FromStr for DataRecord<'_> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut record = DataRecord::new();
        record.try_set_csv(s)?;
        Ok(record)
    }
}
