//! Conversion of page text into numbers.
//!
//! Values on the page carry units and decoration (`"3°"`, `"2,4 mm"`,
//! `"40%"`). The parser takes the first numeral it finds and reads a comma
//! as the decimal mark. It does not know about placeholders; callers check
//! [`is_placeholder`] first.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Result, WeatherError};

/// Text the site shows instead of a value when there is no measurable precipitation.
pub const PLACEHOLDER: &str = ".";

static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\x{2212}]?\d+(?:[.,]\d+)?").expect("numeral pattern is valid"));

/// Parses the first numeral in `text`.
///
/// # Example
///
/// ```rust
/// use idokep_core::parse_number;
///
/// assert_eq!(parse_number("2,4 mm").unwrap(), 2.4);
/// assert_eq!(parse_number("-3°").unwrap(), -3.0);
/// assert!(parse_number("-").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64> {
    let numeral = NUMERAL
        .find(text)
        .ok_or_else(|| WeatherError::ParseError { text: text.to_string() })?;

    let normalized = numeral.as_str().replace('\u{2212}', "-").replace(',', ".");

    normalized
        .parse::<f64>()
        .map_err(|_| WeatherError::ParseError { text: text.to_string() })
}

/// Parses the first numeral in `text` and rounds it to whole units.
///
/// # Errors
///
/// Returns [`WeatherError::ParseError`] when there is no numeral or the
/// rounded value does not fit an `i32`.
pub fn parse_integer(text: &str) -> Result<i32> {
    let rounded = parse_number(text)?.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(WeatherError::ParseError { text: text.to_string() });
    }
    Ok(rounded as i32)
}

/// Whether `text` is the "no data" sentinel rather than a value.
pub fn is_placeholder(text: &str) -> bool {
    text.trim() == PLACEHOLDER
}
