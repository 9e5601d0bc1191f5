//! # catalog_csv
//!
//! Spreadsheet-compatible CSV reading and writing for catalog import and export.
//!
//! ## What is in here?
//!
//! Catalog data (perfumes with accords, notes and seasons) moves in and out
//! of the admin panel as CSV. This crate holds the text codec behind that:
//!
//! - **Field Escaper**: quotes a value only when it needs it ([`escape`], [`escape_field`])
//! - **Row Parser**: reads any line ending, drops blank rows, strips a BOM ([`parse_rows`])
//! - **Composite Serializer**: packs many values into one field with `|` ([`to_composite`])
//! - **Composite Deserializer**: unpacks them again, leniently ([`parse_composite`])
//!
//! Documents, header-keyed records and stream helpers are built on top.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! catalog_csv = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Writing a Row with a Composite Field
//!
//! ```rust
//! use catalog_csv::{csv_row, to_composite};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Season { name: &'static str, width: &'static str }
//!
//! let seasons = vec![
//!     Season { name: "winter", width: "30%" },
//!     Season { name: "spring", width: "25%" },
//! ];
//!
//! let line = csv_row!["Bleu de Chanel", "Chanel", to_composite(&seasons).unwrap()];
//! assert_eq!(
//!     line,
//!     r#"Bleu de Chanel,Chanel,"{""name"":""winter"",""width"":""30%""}|{""name"":""spring"",""width"":""25%""}""#
//! );
//! ```
//!
//! ### Reading It Back
//!
//! ```rust
//! use catalog_csv::{from_composite, from_str};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Season { name: String, width: String }
//!
//! let line = r#"Bleu de Chanel,Chanel,"{""name"":""winter"",""width"":""30%""}""#;
//! let rows = from_str(line);
//! assert_eq!(rows[0][1], "Chanel");
//!
//! let seasons: Vec<Season> = from_composite(&rows[0][2]).unwrap();
//! assert_eq!(seasons[0].width, "30%");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Escaping**: O(n), borrows the input when no quoting is needed
//! - **Parsing**: O(n) single pass with one character of lookahead
//! - **Composite fields**: O(n) split plus one JSON parse per token
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - The four core operations never fail and never panic
//! - Fallible layers (streams, strict decoding, records) return [`Result`]
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing` (raw-token fallbacks at `debug`,
//! dropped blank rows at `trace`). Install a subscriber to see them.
//!
//! ## Format Description
//!
//! See the [`format`] module for the full text format.

pub mod composite;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use composite::{
    composite_from_value, from_composite, parse_composite, parse_composite_optional,
    to_composite, COMPOSITE_SEPARATOR,
};
pub use de::{parse_optional, parse_rows, RowParser};
pub use error::{Error, Result};
pub use map::{parse_records, Record};
pub use options::{CsvOptions, LineTerminator, BOM};
pub use ser::{
    escape, escape_field, escape_optional, needs_quoting, write_row, Writer, FIELD_DELIMITER,
};
pub use value::Entry;

use std::io;

/// Writes rows of raw fields as a CSV document with default options.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::to_string;
///
/// let rows = vec![vec!["Name", "Accords"], vec!["Aventus", "fruity, smoky"]];
/// assert_eq!(to_string(&rows), "Name,Accords\nAventus,\"fruity, smoky\"");
/// ```
#[must_use]
pub fn to_string<I, R>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    to_string_with_options(rows, &CsvOptions::default())
}

/// Writes rows of raw fields as a CSV document with custom options.
#[must_use]
pub fn to_string_with_options<I, R>(rows: I, options: &CsvOptions) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let mut writer = Writer::new(options.clone());
    for row in rows {
        writer.write_record(row);
    }
    writer.into_inner()
}

/// Writes rows of raw fields as a CSV document to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[["a", "b"]]).unwrap();
/// assert_eq!(buffer, b"a,b");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W, I, R>(writer: W, rows: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    to_writer_with_options(writer, rows, &CsvOptions::default())
}

/// Writes rows as a CSV document to an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer_with_options<W, I, R>(mut writer: W, rows: I, options: &CsvOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let csv = to_string_with_options(rows, options);
    writer
        .write_all(csv.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses CSV text into rows. Same as [`parse_rows`].
#[must_use]
pub fn from_str(text: &str) -> Vec<Vec<String>> {
    parse_rows(text)
}

/// Parses CSV bytes into rows.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::from_slice;
///
/// let rows = from_slice(b"\xEF\xBB\xBFa,b\r\n").unwrap();
/// assert_eq!(rows, vec![vec!["a", "b"]]);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
pub fn from_slice(v: &[u8]) -> Result<Vec<Vec<String>>> {
    let s = std::str::from_utf8(v)?;
    Ok(parse_rows(s))
}

/// Reads an entire I/O stream and parses it into rows.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::from_reader;
/// use std::io::Cursor;
///
/// let rows = from_reader(Cursor::new("a,b\nc,d")).unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the stream is not valid UTF-8.
pub fn from_reader<R>(mut reader: R) -> Result<Vec<Vec<String>>>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(parse_rows(&string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_roundtrip() {
        let rows = vec![
            vec!["Name", "Description", "Top Notes"],
            vec!["Aventus", "The \"king\",\nof fruity", "pineapple|birch"],
        ];
        let csv = to_string_with_options(
            &rows,
            &CsvOptions::spreadsheet().with_line_terminator(LineTerminator::CrLf),
        );
        assert_eq!(from_str(&csv), rows);
    }

    #[test]
    fn test_composite_inside_document() {
        let accords = json!([{"name": "citrus", "width": "100%"}, {"name": "woody", "width": "80%"}]);
        let composite = composite_from_value(&accords);
        let csv = to_string(&[vec!["Sauvage", composite.as_str()]]);

        let rows = from_str(&csv);
        let entries = parse_composite(&rows[0][1]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].get("width"), Some(&json!("80%")));
    }

    #[test]
    fn test_from_slice_invalid_utf8() {
        assert!(matches!(from_slice(&[0xff, 0xfe]), Err(Error::Utf8(_))));
    }

    #[test]
    fn test_to_writer_failure() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Broken, &[["a"]]).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
