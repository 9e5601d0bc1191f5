//! Header-keyed rows for catalog import.
//!
//! This module provides [`Record`], a wrapper around [`IndexMap`] that maps
//! column names to field text while keeping the column order of the header
//! row. [`parse_records`] builds records from a whole document.
//!
//! ## Examples
//!
//! ```rust
//! use catalog_csv::parse_records;
//!
//! let csv = "Name,Brand,Top Notes\n\
//!            Bleu de Chanel,Chanel,\"{\"\"name\"\":\"\"Lemon\"\"}|{\"\"name\"\":\"\"Mint\"\"}\"";
//! let records = parse_records(csv).unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].get("Brand"), Some("Chanel"));
//! assert_eq!(records[0].composite("Top Notes").len(), 2);
//! ```

use crate::composite::{from_composite, parse_composite};
use crate::de::parse_rows;
use crate::error::{Error, Result};
use crate::value::Entry;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

/// An ordered map of column names to field text for one data row.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::Record;
///
/// let mut record = Record::new();
/// record.insert("Name".to_string(), "Aventus".to_string());
/// record.insert("Brand".to_string(), "Creed".to_string());
///
/// let columns: Vec<_> = record.columns().cloned().collect();
/// assert_eq!(columns, vec!["Name", "Brand"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, String>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with room for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Sets a column's field, returning the previous text if any.
    pub fn insert(&mut self, column: String, field: String) -> Option<String> {
        self.0.insert(column, field)
    }

    /// Returns the field text of `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Returns the field of `column` with surrounding whitespace removed,
    /// or `None` when the column is missing or blank.
    #[must_use]
    pub fn get_trimmed(&self, column: &str) -> Option<&str> {
        self.get(column)
            .map(str::trim)
            .filter(|field| !field.is_empty())
    }

    /// Decodes `column` as a composite field; a missing column yields no entries.
    #[must_use]
    pub fn composite(&self, column: &str) -> Vec<Entry> {
        self.get(column).map(parse_composite).unwrap_or_default()
    }

    /// Decodes `column` as a composite field of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Token`] if a token does not decode into `T`.
    pub fn composite_as<T: DeserializeOwned>(&self, column: &str) -> Result<Vec<T>> {
        match self.get(column) {
            Some(field) => from_composite(field),
            None => Ok(Vec::new()),
        }
    }

    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

/// Parses a document whose first non-blank row is the header.
///
/// Header names are trimmed. Rows shorter than the header are padded with
/// empty fields; a header-only document yields no records.
///
/// # Errors
///
/// Returns [`Error::RowLength`] for the first row with more fields than the
/// header. Row numbers count surviving rows from 1, header included.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut rows = parse_rows(text).into_iter();
    let header: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|name| name.trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    rows.enumerate()
        .map(|(i, row)| {
            if row.len() > header.len() {
                let row_number = i + 2;
                tracing::debug!(
                    row = row_number,
                    expected = header.len(),
                    found = row.len(),
                    "CSV row is wider than its header"
                );
                return Err(Error::row_length(row_number, header.len(), row.len()));
            }

            let mut record = Record::with_capacity(header.len());
            let mut fields = row.into_iter();
            for column in &header {
                record.insert(column.clone(), fields.next().unwrap_or_default());
            }
            Ok(record)
        })
        .collect()
}
