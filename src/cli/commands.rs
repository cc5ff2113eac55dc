//! Command implementations for the feed-record CLI
//!
//! This module contains the command execution logic, configuration loading
//! and output rendering for the CLI interface.

use crate::app::models::{Location, NamedFeed, PinLevel};
use crate::app::services::numeric::FloatFormat;
use crate::app::services::record::DataRecord;
use crate::cli::args::{Args, Commands, DecodeArgs, EncodeArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Every typed interpretation of a decoded record
#[derive(Debug, Clone, Serialize)]
pub struct DecodedRecord {
    pub feed: String,
    pub value: Option<String>,
    /// Whether all four CSV fields were present
    pub complete: bool,
    pub location: Location,
    pub as_bool: bool,
    pub as_int: i32,
    pub as_uint: u32,
    pub as_long: i64,
    pub as_ulong: u64,
    pub as_float: f32,
    pub as_double: f64,
    pub pin_level: PinLevel,
}

impl DecodedRecord {
    fn from_record(record: &DataRecord<'_>, complete: bool) -> Self {
        Self {
            feed: record.feed_name().to_string(),
            value: record.value().map(str::to_string),
            complete,
            location: record.location(),
            as_bool: record.to_bool(),
            as_int: record.to_int(),
            as_uint: record.to_unsigned_int(),
            as_long: record.to_long(),
            as_ulong: record.to_unsigned_long(),
            as_float: record.to_float(),
            as_double: record.to_double(),
            pin_level: record.to_pin_level(),
        }
    }
}

/// Main command runner for feed-record
///
/// 1. Validate arguments and load configuration
/// 2. Set up logging
/// 3. Run the selected command and print its output
pub fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = load_configuration(&args)?;

    setup_logging(&args, &config)?;
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    match &args.command {
        Some(Commands::Encode(encode)) => {
            let csv = encode_record(encode, &config)?;
            println!("{}", csv);
        }
        Some(Commands::Decode(decode)) => {
            let decoded = decode_record(decode, &config)?;
            println!("{}", render(&decoded, decode.output_format)?);
        }
        None => {
            return Err(Error::configuration("No command given"));
        }
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments and configuration
fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = match (&config.log_level, args.log_level_overridden()) {
        (Some(level), false) => level.as_str(),
        _ => args.get_log_level(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("feed_record={}", log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    Config::load_layered(config_file)
}

/// Float format for a command, with the CLI style applied over configuration
///
/// The `--precision` hint is not folded in here: it applies to the value
/// only, while coordinates keep the configured precision.
fn effective_format(config: &Config, encode: Option<&EncodeArgs>) -> FloatFormat {
    let mut format = config.format;

    if let Some(style) = encode.and_then(|encode| encode.style) {
        format.style = style;
    }

    format
}

/// Encode a typed reading into its CSV record
pub fn encode_record(args: &EncodeArgs, config: &Config) -> Result<String> {
    let format = effective_format(config, Some(args));
    let feed = args.feed.as_deref().map(NamedFeed::new);

    let mut record = match &feed {
        Some(feed) => DataRecord::with_feed(feed),
        None => DataRecord::new(),
    }
    .with_format(format);

    if !format.style.honours_precision() && args.precision.is_some() {
        warn!(
            "Float style {} ignores the precision hint {:?}",
            format.style, args.precision
        );
    }

    let value = args.kind.parse(&args.value)?;
    let precision = args.precision.unwrap_or(format.precision);
    record.set_value_with(value, args.location(), precision)?;

    let csv = record.to_csv()?;
    info!(
        "Encoded {} reading for feed '{}': {}",
        args.kind,
        record.feed_name(),
        csv
    );
    Ok(csv)
}

/// Decode a CSV record into every typed interpretation
pub fn decode_record(args: &DecodeArgs, config: &Config) -> Result<DecodedRecord> {
    let format = effective_format(config, None);
    let feed = args.feed.as_deref().map(NamedFeed::new);

    let mut record = match &feed {
        Some(feed) => DataRecord::with_feed(feed),
        None => DataRecord::new(),
    }
    .with_format(format);

    let complete = if args.atomic {
        record.try_set_csv(&args.csv)?;
        true
    } else {
        record.set_csv(&args.csv)?
    };

    if !complete {
        warn!("Record '{}' is missing fields; kept the fields present", args.csv);
    }

    Ok(DecodedRecord::from_record(&record, complete))
}

/// Render a decoded record in the requested format
pub fn render(decoded: &DecodedRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(decoded)
            .map_err(|e| Error::configuration(format!("Failed to serialize record: {}", e))),
        OutputFormat::Human => Ok(render_human(decoded)),
    }
}

fn render_human(decoded: &DecodedRecord) -> String {
    let feed = if decoded.feed.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        decoded.feed.bright_cyan().to_string()
    };
    let value = match &decoded.value {
        Some(value) => value.bright_green().bold().to_string(),
        None => "(absent)".dimmed().to_string(),
    };
    let complete = if decoded.complete {
        "yes".green().to_string()
    } else {
        "no".bright_yellow().bold().to_string()
    };
    let location = if decoded.location.is_unset() {
        "(none)".dimmed().to_string()
    } else {
        format!(
            "{}, {}, {}",
            decoded.location.latitude, decoded.location.longitude, decoded.location.elevation
        )
    };

    let mut lines = vec![
        format!("{:<10} {}", "Feed:".bold(), feed),
        format!("{:<10} {}", "Value:".bold(), value),
        format!("{:<10} {}", "Complete:".bold(), complete),
        format!("{:<10} {}", "Location:".bold(), location),
        String::new(),
        "Interpretations:".bold().to_string(),
    ];

    let interpretations = [
        ("bool", decoded.as_bool.to_string()),
        ("int", decoded.as_int.to_string()),
        ("uint", decoded.as_uint.to_string()),
        ("long", decoded.as_long.to_string()),
        ("ulong", decoded.as_ulong.to_string()),
        ("float", decoded.as_float.to_string()),
        ("double", decoded.as_double.to_string()),
        ("pin", decoded.pin_level.to_string()),
    ];
    for (name, value) in interpretations {
        lines.push(format!("  {:<8} {}", name.bright_yellow(), value));
    }

    lines.join("\n")
}
