//! CSV row parsing.
//!
//! This module provides the [`RowParser`] that turns CSV document text into
//! rows of raw string fields.
//!
//! ## Overview
//!
//! - **Single pass**: one left-to-right scan with one character of lookahead
//! - **Total**: every input parses; unterminated quotes run to end of input
//! - **Any line ending**: `\r\n`, `\n` and lone `\r` all end a row
//! - **Blank rows dropped**: rows whose fields all trim to empty are omitted
//! - **BOM stripped**: a single leading `U+FEFF` is ignored
//!
//! Field content is stored exactly as captured. Trimming only decides whether
//! a row is blank; it never alters a kept field.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_csv::parse_rows;
//!
//! let rows = parse_rows("name,notes\r\nAventus,\"pineapple, birch\"\n\n");
//! assert_eq!(
//!     rows,
//!     vec![
//!         vec!["name".to_string(), "notes".to_string()],
//!         vec!["Aventus".to_string(), "pineapple, birch".to_string()],
//!     ]
//! );
//! ```

use crate::options::BOM;

/// Scanner mode: outside or inside a quoted section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    InQuotes,
}

/// The CSV row parser.
///
/// Created via [`RowParser::from_str`] and consumed by [`RowParser::parse`].
pub struct RowParser<'a> {
    input: &'a str,
    position: usize,
    state: State,
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
    dropped: usize,
}

impl<'a> RowParser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        RowParser {
            input,
            position: 0,
            state: State::Normal,
            field: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
            dropped: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Pushes the buffered field onto the current row.
    fn close_field(&mut self) {
        let field = std::mem::take(&mut self.field);
        self.row.push(field);
    }

    /// Moves the current row into the output unless every field is blank.
    fn close_row(&mut self) {
        let row = std::mem::take(&mut self.row);
        if row.iter().any(|field| !field.trim().is_empty()) {
            self.rows.push(row);
        } else {
            self.dropped += 1;
            tracing::trace!(
                ordinal = self.rows.len() + self.dropped,
                "Dropped blank CSV row"
            );
        }
    }

    /// Scans the whole input and returns every non-blank row.
    #[must_use]
    pub fn parse(mut self) -> Vec<Vec<String>> {
        while let Some(ch) = self.next_char() {
            match (self.state, ch) {
                (State::InQuotes, '"') if self.peek_char() == Some('"') => {
                    // "" inside quotes is one literal quote
                    self.next_char();
                    self.field.push('"');
                }
                (State::InQuotes, '"') => self.state = State::Normal,
                (State::Normal, '"') => self.state = State::InQuotes,
                (State::Normal, ',') => self.close_field(),
                (State::Normal, '\n') => {
                    self.close_field();
                    self.close_row();
                }
                (State::Normal, '\r') => {
                    if self.peek_char() == Some('\n') {
                        self.next_char();
                    }
                    self.close_field();
                    self.close_row();
                }
                (_, ch) => self.field.push(ch),
            }
        }

        if !self.field.is_empty() || !self.row.is_empty() {
            self.close_field();
            self.close_row();
        }

        self.rows
    }
}

/// Parses CSV document text into rows of fields.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::parse_rows;
///
/// assert_eq!(parse_rows("\u{FEFF}a,b"), vec![vec!["a", "b"]]);
/// assert!(parse_rows("").is_empty());
/// ```
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    RowParser::from_str(text).parse()
}

/// Parses optional document text; `None` yields no rows.
#[must_use]
pub fn parse_optional(text: Option<&str>) -> Vec<Vec<String>> {
    text.map(parse_rows).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(expected: &[&[&str]]) -> Vec<Vec<String>> {
        expected
            .iter()
            .map(|row| row.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\u{FEFF}").is_empty());
        assert!(parse_optional(None).is_empty());
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        assert_eq!(parse_rows("a\r\nb\r\n"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn test_quoted_newlines_and_commas() {
        let parsed = parse_rows("\"multi\r\nline\",\"x,y\"\nz,w");
        assert_eq!(parsed, rows(&[&["multi\r\nline", "x,y"], &["z", "w"]]));
    }

    #[test]
    fn test_whitespace_field_kept_verbatim() {
        assert_eq!(parse_rows("  ,b \n"), rows(&[&["  ", "b "]]));
    }

    #[test]
    fn test_blank_rows_with_whitespace_dropped() {
        assert_eq!(parse_rows("a\n , \t\n\"\",\"\"\nb"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn test_unterminated_quote_flushes() {
        assert_eq!(parse_rows("a,\"open\nstill"), rows(&[&["a", "open\nstill"]]));
    }

    #[test]
    fn test_quotes_mid_field_toggle_mode() {
        // Quotes are never stored, even when they appear mid-field
        assert_eq!(parse_rows("ab\"c,d\"e,f"), rows(&[&["abc,de", "f"]]));
    }

    #[test]
    fn test_trailing_comma_keeps_empty_field() {
        assert_eq!(parse_rows("a,\n"), rows(&[&["a", ""]]));
        assert_eq!(parse_rows("a,"), rows(&[&["a", ""]]));
    }

    #[test]
    fn test_only_first_bom_stripped() {
        assert_eq!(
            parse_rows("\u{FEFF}\u{FEFF}a"),
            rows(&[&["\u{FEFF}a"]])
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(
            parse_rows("Café,\"Ylang–ylang\"\r中文"),
            rows(&[&["Café", "Ylang–ylang"], &["中文"]])
        );
    }
}
