//! Feed Record Library
//!
//! A small value container for IoT telemetry: one reading exchanged with a cloud
//! feed, stored as canonical text plus an optional geolocation.
//!
//! This library provides tools for:
//! - Encoding booleans, integers, floats and text into a canonical textual value
//! - Decoding that text back into typed values with permissive C-style prefix parsing
//! - Reading and writing the fixed four-field `value,lat,lon,ele` CSV record
//! - Formatting floats in the scientific, fixed-point or `%f` styles used by
//!   different microcontroller toolchains
//! - Bounds-checked buffers with explicit length errors instead of silent overruns

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod numeric;
        pub mod record;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Feed, Location, NamedFeed, PinLevel, TypedValue};
pub use app::services::numeric::{FloatFormat, FloatStyle};
pub use app::services::record::DataRecord;
pub use config::Config;

/// Result type alias for feed record operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feed record operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Text does not fit the fixed capacity reserved for it
    #[error("Length exceeded for {field}: {length} bytes exceeds limit of {limit}")]
    LengthExceeded {
        field: &'static str,
        length: usize,
        limit: usize,
    },

    /// CSV record did not carry all four fields
    #[error("Incomplete CSV record: found {fields} of 4 fields")]
    IncompleteCsv { fields: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file '{path}'")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input text could not be converted into the requested value kind
    #[error("Invalid {kind} value: '{input}'")]
    InvalidValue { kind: &'static str, input: String },
}

impl Error {
    /// Create a length exceeded error
    pub fn length_exceeded(field: &'static str, length: usize, limit: usize) -> Self {
        Self::LengthExceeded {
            field,
            length,
            limit,
        }
    }

    /// Create an incomplete CSV error
    pub fn incomplete_csv(fields: usize) -> Self {
        Self::IncompleteCsv { fields }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(kind: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            input: input.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
