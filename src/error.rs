//! Error types for catalog CSV reading and writing.
//!
//! The four core codec operations are total and never return an error. Errors
//! only come out of the layers built on top of them:
//!
//! - **I/O Errors**: reading from or writing to a stream failed
//! - **Encoding Errors**: input bytes were not valid UTF-8
//! - **JSON Errors**: a value could not be encoded as a composite entry
//! - **Token Errors**: strict composite decoding met a token of the wrong shape
//! - **Row Length Errors**: a record row had more fields than its header
//!
//! ## Examples
//!
//! ```rust
//! use catalog_csv::{from_composite, Error};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Note { name: String }
//!
//! let result: Result<Vec<Note>, Error> = from_composite("not-json");
//! assert!(matches!(result, Err(Error::Token { index: 0, .. })));
//! ```

use thiserror::Error;

/// Represents every failure the catalog CSV layers can report.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 in CSV input: {0}")]
    Utf8(String),

    /// Structured encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(String),

    /// A composite token could not be decoded into the requested type
    #[error("Invalid composite token {index} ({token:?}): {message}")]
    Token {
        index: usize,
        token: String,
        message: String,
    },

    /// A data row carries more fields than the header row
    #[error("Row {row} has {found} fields, but the header has {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a token error for strict composite decoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_csv::Error;
    ///
    /// let err = Error::token(2, "oops", "expected value");
    /// assert!(err.to_string().contains("token 2"));
    /// ```
    pub fn token(index: usize, token: &str, message: &str) -> Self {
        Error::Token {
            index,
            token: token.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a row length error (row numbers are 1-based and count the header).
    pub fn row_length(row: usize, expected: usize, found: usize) -> Self {
        Error::RowLength {
            row,
            expected,
            found,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_length_message() {
        let err = Error::row_length(3, 2, 4);
        assert_eq!(
            err.to_string(),
            "Row 3 has 4 fields, but the header has 2"
        );
    }

    #[test]
    fn test_every_variant_has_message() {
        let errors = [
            Error::io("closed"),
            Error::Utf8("bad byte".to_string()),
            Error::Json("eof".to_string()),
            Error::token(0, "x", "expected value"),
            Error::row_length(2, 1, 2),
        ];
        for err in errors {
            let expected = match &err {
                Error::Io(_) => "IO error",
                Error::Utf8(_) => "Invalid UTF-8",
                Error::Json(_) => "JSON error",
                Error::Token { .. } => "Invalid composite token",
                Error::RowLength { .. } => "Row 2",
            };
            assert!(err.to_string().starts_with(expected), "{}", err);
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
    }
}
