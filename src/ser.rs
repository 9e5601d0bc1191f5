//! Field escaping and CSV document writing.
//!
//! This module turns scalar values into CSV-safe fields and joins them into
//! rows and documents.
//!
//! ## Quoting Rule
//!
//! A field is wrapped in `"..."` (with every inner `"` doubled) if and only
//! if it contains a comma, a double quote, `\n` or `\r`. Everything else is
//! written verbatim, so escaping an already escaped value quotes it twice.
//!
//! ```rust
//! use catalog_csv::{escape, escape_optional};
//!
//! assert_eq!(escape("Chanel"), "Chanel");
//! assert_eq!(escape("a\"b"), "\"a\"\"b\"");
//! assert_eq!(escape_optional::<&str>(None), "");
//! ```
//!
//! ## Writing Documents
//!
//! ```rust
//! use catalog_csv::{CsvOptions, Writer};
//!
//! let mut writer = Writer::new(CsvOptions::new());
//! writer.write_record(["Name", "Notes"]);
//! writer.write_record(["Aventus", "pineapple, birch"]);
//! assert_eq!(writer.into_inner(), "Name,Notes\nAventus,\"pineapple, birch\"");
//! ```

use crate::options::{CsvOptions, BOM};
use std::borrow::Cow;
use std::fmt;

/// Separator placed between the fields of a row.
pub const FIELD_DELIMITER: char = ',';

/// Returns `true` when `value` must be quoted to survive a parse.
#[inline]
#[must_use]
pub fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r'))
}

/// Escapes one already-stringified field.
///
/// Borrows the input when no quoting is needed.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("a,b"), "\"a,b\"");
/// assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
/// ```
#[must_use]
pub fn escape(value: &str) -> Cow<'_, str> {
    if !needs_quoting(value) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Coerces any displayable value to text and escapes it.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::escape_field;
///
/// assert_eq!(escape_field(&42), "42");
/// assert_eq!(escape_field(&true), "true");
/// assert_eq!(escape_field("x,y"), "\"x,y\"");
/// ```
#[must_use]
pub fn escape_field<T: fmt::Display + ?Sized>(value: &T) -> String {
    let text = value.to_string();
    if needs_quoting(&text) {
        escape(&text).into_owned()
    } else {
        text
    }
}

/// Escapes an optional value; an absent value becomes the empty field.
#[must_use]
pub fn escape_optional<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => escape_field(&value),
        None => String::new(),
    }
}

/// Escapes every field and joins them with [`FIELD_DELIMITER`].
///
/// # Examples
///
/// ```rust
/// use catalog_csv::write_row;
///
/// assert_eq!(write_row(&["a", "b,c", ""]), "a,\"b,c\",");
/// ```
#[must_use]
pub fn write_row<F: AsRef<str>>(fields: &[F]) -> String {
    let mut line = String::new();
    push_row(&mut line, fields);
    line
}

fn push_row<I>(output: &mut String, fields: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            output.push(FIELD_DELIMITER);
        }
        output.push_str(&escape(field.as_ref()));
    }
}

/// Accumulates rows into a CSV document.
///
/// The writer owns its buffer; call [`Writer::into_inner`] to take the
/// finished text. The BOM (when enabled) is emitted before the first row,
/// so an empty writer renders as an empty string.
pub struct Writer {
    output: String,
    options: CsvOptions,
    rows: usize,
}

impl Writer {
    /// Creates an empty writer that renders with `options`.
    pub fn new(options: CsvOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
            rows: 0,
        }
    }

    /// Appends a row of raw field values, escaping each one.
    pub fn write_record<I>(&mut self, fields: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.begin_row();
        push_row(&mut self.output, fields);
        self.rows += 1;
    }

    /// Appends a line that the caller has already escaped and joined.
    pub fn write_line(&mut self, line: &str) {
        self.begin_row();
        self.output.push_str(line);
        self.rows += 1;
    }

    /// Number of rows written so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Consumes the writer and returns the finished document.
    pub fn into_inner(mut self) -> String {
        if self.rows > 0 && self.options.trailing_terminator {
            self.output
                .push_str(self.options.line_terminator.as_str());
        }
        self.output
    }

    fn begin_row(&mut self) {
        if self.rows == 0 {
            if self.options.bom {
                self.output.push(BOM);
            }
        } else {
            self.output
                .push_str(self.options.line_terminator.as_str());
        }
    }
}
