//! Configuration options for writing CSV documents.
//!
//! This module provides types to customize document output:
//!
//! - [`CsvOptions`]: Main configuration struct
//! - [`LineTerminator`]: Choice of row terminator (`\n`, `\r\n` or `\r`)
//!
//! Reading needs no options: the parser accepts every line terminator and
//! strips a leading byte order mark unconditionally.
//!
//! ## Examples
//!
//! ```rust
//! use catalog_csv::{to_string_with_options, CsvOptions, LineTerminator};
//!
//! let rows = vec![vec!["name", "brand"], vec!["Bleu de Chanel", "Chanel"]];
//!
//! let options = CsvOptions::new().with_line_terminator(LineTerminator::CrLf);
//! let csv = to_string_with_options(&rows, &options);
//! assert_eq!(csv, "name,brand\r\nBleu de Chanel,Chanel");
//!
//! // Spreadsheet preset prepends a BOM so Excel picks UTF-8
//! let csv = to_string_with_options(&rows, &CsvOptions::spreadsheet());
//! assert!(csv.starts_with('\u{FEFF}'));
//! ```

/// The byte order mark written before spreadsheet downloads and stripped on read.
pub const BOM: char = '\u{FEFF}';

/// Row terminator used when writing documents.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::LineTerminator;
///
/// assert_eq!(LineTerminator::Lf.as_str(), "\n");
/// assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
/// assert_eq!(LineTerminator::Cr.as_str(), "\r");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineTerminator {
    /// Returns the string representation of this terminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Cr => "\r",
        }
    }
}

/// Configuration options for CSV document output.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::{CsvOptions, LineTerminator};
///
/// // Plain `\n`-separated output without BOM
/// let options = CsvOptions::new();
/// assert!(!options.bom);
///
/// // Custom configuration
/// let options = CsvOptions::new()
///     .with_line_terminator(LineTerminator::CrLf)
///     .with_bom(true);
/// assert_eq!(options.line_terminator, LineTerminator::CrLf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CsvOptions {
    pub line_terminator: LineTerminator,
    pub bom: bool,
    pub trailing_terminator: bool,
}

impl CsvOptions {
    /// Creates default options (`\n` between rows, no BOM, no trailing terminator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options used for downloadable spreadsheet templates: BOM-prefixed, `\n` rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_csv::CsvOptions;
    ///
    /// let options = CsvOptions::spreadsheet();
    /// assert!(options.bom);
    /// ```
    #[must_use]
    pub fn spreadsheet() -> Self {
        CsvOptions {
            bom: true,
            ..Default::default()
        }
    }

    /// Sets the row terminator.
    #[must_use]
    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Sets whether a BOM is written before the first row.
    #[must_use]
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Sets whether the last row is also followed by the terminator.
    #[must_use]
    pub fn with_trailing_terminator(mut self, trailing: bool) -> Self {
        self.trailing_terminator = trailing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CsvOptions::default();
        assert_eq!(options.line_terminator, LineTerminator::Lf);
        assert!(!options.bom);
        assert!(!options.trailing_terminator);
    }

    #[test]
    fn test_builder_chain() {
        let options = CsvOptions::spreadsheet()
            .with_line_terminator(LineTerminator::Cr)
            .with_trailing_terminator(true);
        assert!(options.bom);
        assert_eq!(options.line_terminator.as_str(), "\r");
        assert!(options.trailing_terminator);
    }
}
