//! Error types for weather extraction.
//!
//! This module defines [`WeatherError`], which covers every failure a
//! provider call can surface: fetching the page, locating required
//! fragments, and interpreting their text.
//!
//! # Example
//!
//! ```rust
//! use idokep_core::{WeatherError, Result};
//!
//! fn temperature(text: &str) -> Result<i32> {
//!     if text.trim().is_empty() {
//!         return Err(WeatherError::ParseError { text: text.to_string() });
//!     }
//!     // ... conversion logic
//!     # Ok(0)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for provider operations.
///
/// Fetch-layer variants are propagated unchanged from the fetcher. Selector
/// and parse variants mean the page no longer matches the expected layout.
///
/// # Example
///
/// ```rust
/// use idokep_core::{WeatherError, parse_number};
///
/// match parse_number("n/a") {
///     Ok(value) => println!("Value: {}", value),
///     Err(WeatherError::ParseError { text }) => println!("Not a number: {}", text),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers DNS failures, connection issues and non-success status codes.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided, or a page URL could not be built from the base.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    ///
    /// Returned by the file-backed fetcher when the page file is missing.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read errors.
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),

    /// A CSS selector string could not be parsed.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A required fragment is missing from the page.
    #[error("No element matches selector '{selector}'")]
    SelectorNotFound { selector: String },

    /// A fragment was found but lacks a required attribute.
    #[error("Element '{selector}' has no '{attribute}' attribute")]
    MissingAttribute { selector: String, attribute: String },

    /// A selector matched a different number of fragments than the layout declares.
    #[error("Expected {expected} elements for '{selector}', found {found}")]
    UnexpectedMatchCount { selector: String, expected: usize, found: usize },

    /// Text contains no interpretable numeral.
    #[error("Could not interpret '{text}' as a number")]
    ParseError { text: String },

    /// An hourly card label is not a valid hour of day.
    #[error("Invalid hour label: '{0}'")]
    InvalidHour(String),

    /// A forecast column states a day-of-month no calendar month has.
    #[error("Invalid day of month: {0}")]
    InvalidDayNumber(u32),

    /// Serialization failures in the output formatters.
    #[error("Failed to serialize output: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl WeatherError {
    /// Whether the error came from the fetch layer rather than from extraction.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            WeatherError::HttpError(_)
                | WeatherError::Timeout { .. }
                | WeatherError::InvalidUrl(_)
                | WeatherError::FileNotFound(_)
                | WeatherError::ReadError(_)
        )
    }
}

/// Result type alias for WeatherError.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WeatherError::SelectorNotFound { selector: ".current-temperature".to_string() };
        assert!(err.to_string().contains(".current-temperature"));
    }

    #[test]
    fn test_match_count_error() {
        let err = WeatherError::UnexpectedMatchCount { selector: "a".to_string(), expected: 2, found: 3 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_fetch_failure_classification() {
        assert!(WeatherError::Timeout { timeout: 30 }.is_fetch_failure());
        assert!(WeatherError::InvalidUrl("x".to_string()).is_fetch_failure());
        assert!(!WeatherError::ParseError { text: "x".to_string() }.is_fetch_failure());
        assert!(!WeatherError::InvalidDayNumber(32).is_fetch_failure());
    }
}
