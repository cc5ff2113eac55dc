//! Command-line argument definitions for feed-record
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{Location, ValueKind};
use crate::app::services::numeric::FloatStyle;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the feed record tool
///
/// Encodes typed readings into feed CSV records and decodes records back
/// into their typed interpretations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "feed-record",
    version,
    about = "Encode and decode IoT feed records (value,lat,lon,ele)",
    long_about = "Converts telemetry readings to and from the four-field CSV record used by \
                  IoT feeds. Values may be booleans, integers, floats or text, optionally \
                  located by latitude, longitude and elevation. Float formatting can mimic \
                  the scientific, fixed-point or %f output of different device toolchains."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for formatting settings. If not specified,
    /// looks for ~/.config/feed-record/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Encode a typed reading into a CSV record
    Encode(EncodeArgs),
    /// Decode a CSV record and show its typed interpretations
    Decode(DecodeArgs),
}

/// Arguments for the encode command
#[derive(Debug, Clone, Parser)]
pub struct EncodeArgs {
    /// Reading to encode
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// How to interpret VALUE before encoding
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value = "text",
        help = "Type of the reading"
    )]
    pub kind: ValueKind,

    /// Latitude in decimal degrees
    #[arg(long = "lat", default_value_t = 0.0, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long = "lon", default_value_t = 0.0, allow_negative_numbers = true)]
    pub lon: f64,

    /// Elevation in meters
    #[arg(long = "ele", default_value_t = 0.0, allow_negative_numbers = true)]
    pub ele: f64,

    /// Fractional digits for float readings (fixed style only)
    #[arg(short = 'p', long = "precision", value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Float formatting style, overriding configuration
    #[arg(short = 's', long = "style", value_enum)]
    pub style: Option<FloatStyle>,

    /// Feed the reading belongs to
    #[arg(short = 'f', long = "feed", value_name = "NAME")]
    pub feed: Option<String>,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// CSV record to decode (value,lat,lon,ele)
    #[arg(value_name = "CSV", allow_hyphen_values = true)]
    pub csv: String,

    /// Reject records with missing fields instead of keeping the fields present
    #[arg(long = "atomic")]
    pub atomic: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the decoded record"
    )]
    pub output_format: OutputFormat,

    /// Feed the record belongs to
    #[arg(short = 'f', long = "feed", value_name = "NAME")]
    pub feed: Option<String>,
}

/// Output format options for decoded records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check whether the log level was chosen on the command line
    pub fn log_level_overridden(&self) -> bool {
        self.quiet || self.verbose > 0
    }

    /// Validate arguments that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::Encode(encode)) = &self.command {
            encode.validate()?;
        }

        Ok(())
    }
}

impl EncodeArgs {
    /// Location given on the command line
    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lon, self.ele)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, coordinate) in [("lat", self.lat), ("lon", self.lon), ("ele", self.ele)] {
            if !coordinate.is_finite() {
                return Err(Error::configuration(format!(
                    "Coordinate --{} must be finite, got {}",
                    name, coordinate
                )));
            }
        }

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::configuration(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.lat
            )));
        }

        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::configuration(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.lon
            )));
        }

        Ok(())
    }
}
