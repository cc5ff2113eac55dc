//! Numeric text conversion for feed record values
//!
//! Readings travel as text, so every typed value passes through this module on
//! the way in and on the way out.
//!
//! ## Architecture
//!
//! - [`format`] - Float to text in the three device styles (scientific,
//!   fixed-point, `%f`)
//! - [`parse`] - Permissive prefix parsers with `strtol`/`strtoul`/`strtod`
//!   semantics: leading whitespace skipped, trailing garbage ignored, no
//!   number at all reads as zero
//!
//! ## Usage
//!
//! ```rust
//! use feed_record::app::services::numeric::{FloatFormat, FloatStyle, parse_long_prefix};
//!
//! let format = FloatFormat::new(FloatStyle::Scientific);
//! assert_eq!(format.format(12.5, 2), "1.2500000000e+01");
//! assert_eq!(parse_long_prefix("42abc"), 42);
//! ```

pub mod format;
pub mod parse;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use format::{FloatFormat, FloatStyle, format_scientific};
pub use parse::{
    parse_double_prefix, parse_int_prefix, parse_long_prefix, parse_uint_prefix,
    parse_ulong_prefix,
};
