//! # Number Parsing and Formatting
//!
//! Form fields and prompts hand us free text, and users expect the same
//! answers a web page would give them. This module reproduces the two
//! browser number routines the total calculation relies on:
//!
//! - [`parse_float`] - longest-decimal-prefix parsing (`parseFloat`)
//! - [`to_fixed`] - fixed-point rendering with ties away from zero (`toFixed`)
//!
//! ## Example
//!
//! ```rust
//! use tally_core::number::{parse_float, to_fixed};
//!
//! assert_eq!(parse_float("  12.5 kg"), 12.5);
//! assert!(parse_float("abc").is_nan());
//! assert_eq!(to_fixed(30.0, 2), "30.00");
//! assert_eq!(to_fixed(0.125, 2), "0.13");
//! ```

/// Largest number of fraction digits [`to_fixed`] accepts
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Magnitude at which [`to_fixed`] switches to exponential notation
const EXPONENTIAL_THRESHOLD: f64 = 1e21;

/// Parse the longest leading decimal literal of `text`.
///
/// Leading white space is skipped and anything after the literal is ignored.
/// Returns NaN when no literal is found.
///
/// # Example
///
/// ```rust
/// use tally_core::number::parse_float;
///
/// assert_eq!(parse_float("10"), 10.0);
/// assert_eq!(parse_float("3 boxes"), 3.0);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_js_whitespace);

    let (negative, sign_len) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let unsigned = &trimmed[sign_len..];

    if unsigned.starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let literal_len = decimal_prefix_len(unsigned.as_bytes());
    if literal_len == 0 {
        return f64::NAN;
    }

    trimmed[..sign_len + literal_len].parse().unwrap_or(f64::NAN)
}

/// Render `value` with exactly `digits` fraction digits.
///
/// `digits` is clamped to [`MAX_FRACTION_DIGITS`].
///
/// # Example
///
/// ```rust
/// use tally_core::number::to_fixed;
///
/// assert_eq!(to_fixed(10.0, 2), "10.00");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(-0.0, 2), "0.00");
/// assert_eq!(to_fixed(1e21, 2), "1e+21");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FRACTION_DIGITS);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let rendered = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_string();
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return to_exponential(value);
    }

    // -0.0 is not below zero, so it prints unsigned
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let body = if is_exact_tie(magnitude, digits) {
        round_tie_up(magnitude, digits)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    format!("{}{}", sign, body)
}

/// Browser string white space: Unicode `White_Space` minus NEL, plus BOM.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Length of the `digits [. digits] [e [+-] digits]` prefix, 0 if none.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

/// True when `magnitude` lies exactly halfway between two `digits`-place decimals.
///
/// Such values are `odd / 2^(digits+1)`, so scaling by that power of two
/// (exact in binary) must yield an odd integer.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Round a tie away from zero using its exact decimal expansion.
fn round_tie_up(magnitude: f64, digits: usize) -> String {
    // A tie has exactly digits+1 fraction digits, the last being '5'.
    let exact = format!("{:.*}", digits + 1, magnitude);
    let mut truncated = exact[..exact.len() - 1].to_string();
    if truncated.ends_with('.') {
        truncated.pop();
    }
    increment_last_digit(&truncated)
}

/// Add one unit in the last place of a non-negative decimal string.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;

    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }

    let mut result = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        result.insert(0, '1');
    }
    result
}

/// Shortest round-trip exponential form with an explicit exponent sign.
fn to_exponential(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
