//! Application constants for feed records
//!
//! Buffer capacities, default precisions and CSV layout shared by the
//! encoder, decoder and CLI.

// =============================================================================
// Buffer Capacities
// =============================================================================

/// Size of the value buffer on the device, terminator included
pub const VALUE_BUFFER_SIZE: usize = 45;

/// Longest value text a record may hold
pub const MAX_VALUE_LENGTH: usize = VALUE_BUFFER_SIZE - 1;

/// Size of the encoded CSV buffer on the device, terminator included
pub const CSV_BUFFER_SIZE: usize = 150;

/// Longest CSV line that may be encoded or decoded
pub const MAX_CSV_LENGTH: usize = CSV_BUFFER_SIZE - 1;

/// Size of the coordinate formatting buffer on the device
pub const COORDINATE_BUFFER_SIZE: usize = 20;

/// Longest formatted coordinate (the device formatter writes at most size - 1
/// bytes including the terminator)
pub const MAX_COORDINATE_LENGTH: usize = COORDINATE_BUFFER_SIZE - 2;

// =============================================================================
// Location
// =============================================================================

/// Tolerance under which a coordinate counts as zero
pub const LOCATION_EPSILON: f64 = 0.000_001;

// =============================================================================
// Float Formatting
// =============================================================================

/// Fractional digits used when the caller gives no precision hint
pub const DEFAULT_PRECISION: usize = 6;

/// Fractional digits used for elevation in the CSV record
pub const ELEVATION_PRECISION: usize = 2;

/// Fractional digits of the `%f` conversion
pub const PRINTF_PRECISION: usize = 6;

/// Mantissa digits used by the scientific formatter
pub const SCIENTIFIC_PRECISION: usize = 10;

/// Minimum number of exponent digits in scientific output
pub const SCIENTIFIC_EXPONENT_DIGITS: usize = 2;

// =============================================================================
// CSV Layout
// =============================================================================

/// Field separator of the CSV record
pub const CSV_DELIMITER: char = ',';

/// Number of fields in a complete record
pub const CSV_FIELD_COUNT: usize = 4;

/// Field names in record order
pub const CSV_FIELD_NAMES: [&str; CSV_FIELD_COUNT] = ["value", "lat", "lon", "ele"];

// =============================================================================
// Text Encodings
// =============================================================================

/// Canonical text for a true boolean
pub const TRUE_TEXT: &str = "1";

/// Canonical text for a false boolean
pub const FALSE_TEXT: &str = "0";

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "feed-record";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the float style
pub const ENV_FLOAT_STYLE: &str = "FEED_RECORD_FLOAT_STYLE";

/// Environment variable overriding the default precision
pub const ENV_PRECISION: &str = "FEED_RECORD_PRECISION";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Helper Functions
// =============================================================================

/// Name of the CSV field at `index`, or `"extra"` past the fourth
pub fn csv_field_name(index: usize) -> &'static str {
    CSV_FIELD_NAMES.get(index).copied().unwrap_or("extra")
}
