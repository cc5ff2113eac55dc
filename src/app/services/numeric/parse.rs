//! Permissive numeric prefix parsers
//!
//! Stored readings are decoded the way the C library would decode them:
//! leading whitespace is skipped, the longest numeric prefix is taken, and
//! anything after it is ignored. Text without a numeric prefix reads as zero.
//! None of these functions fail.

/// Parse a signed decimal integer prefix (`strtol` semantics)
///
/// Out of range magnitudes saturate to `i64::MIN` / `i64::MAX`.
pub fn parse_long_prefix(text: &str) -> i64 {
    let (negative, rest) = split_sign(skip_space(text));
    let digits = &rest[..leading_digits(rest)];

    match (accumulate(digits), negative) {
        (Some(magnitude), false) => i64::try_from(magnitude).unwrap_or(i64::MAX),
        (Some(magnitude), true) if magnitude <= i64::MIN.unsigned_abs() => {
            (magnitude as i64).wrapping_neg()
        }
        (_, true) => i64::MIN,
        (None, false) => i64::MAX,
    }
}

/// Parse an unsigned decimal integer prefix (`strtoul` semantics)
///
/// A leading `-` is accepted and the magnitude is negated modulo 2^64, so
/// `"-1"` reads as `u64::MAX`. Out of range magnitudes saturate to `u64::MAX`
/// regardless of sign.
pub fn parse_ulong_prefix(text: &str) -> u64 {
    let (negative, rest) = split_sign(skip_space(text));
    let digits = &rest[..leading_digits(rest)];

    match accumulate(digits) {
        Some(magnitude) if negative => magnitude.wrapping_neg(),
        Some(magnitude) => magnitude,
        None => u64::MAX,
    }
}

/// Parse a 32-bit signed prefix; the 64-bit result is truncated to its low
/// 32 bits like a C `(int)` cast
pub fn parse_int_prefix(text: &str) -> i32 {
    parse_long_prefix(text) as i32
}

/// Parse a 32-bit unsigned prefix; the 64-bit result is truncated to its low
/// 32 bits like a C `(unsigned int)` cast
pub fn parse_uint_prefix(text: &str) -> u32 {
    parse_ulong_prefix(text) as u32
}

/// Parse a floating point prefix (`strtod` semantics, decimal forms only)
///
/// Accepts an optional sign, `inf`/`infinity`/`nan` in any case, or digits
/// with an optional fraction and an optional exponent. An exponent marker not
/// followed by digits is left unconsumed. Magnitudes past `f64::MAX` read as
/// infinity.
pub fn parse_double_prefix(text: &str) -> f64 {
    let (negative, rest) = split_sign(skip_space(text));

    let magnitude = special_value(rest).or_else(|| decimal_prefix(rest));

    match magnitude {
        Some(value) if negative => -value,
        Some(value) => value,
        None => 0.0,
    }
}

fn skip_space(text: &str) -> &str {
    // C isspace also counts vertical tab
    text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Decimal value of an all-digit string, `None` on u64 overflow
fn accumulate(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

fn special_value(text: &str) -> Option<f64> {
    let head = text.get(..3)?;

    if head.eq_ignore_ascii_case("inf") {
        Some(f64::INFINITY)
    } else if head.eq_ignore_ascii_case("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

fn decimal_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();

    let integer_digits = leading_digits(text);
    let mut end = integer_digits;
    let mut fraction_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        fraction_digits = leading_digits(&text[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let (_, exponent) = split_sign(&text[end + 1..]);
        let exponent_digits = leading_digits(exponent);
        if exponent_digits > 0 {
            end = text.len() - exponent.len() + exponent_digits;
        }
    }

    text[..end].parse().ok()
}
