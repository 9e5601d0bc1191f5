//! Catalog CSV Format
//!
//! This module documents the text format read and written by this library.
//!
//! # Overview
//!
//! Catalog exports are plain CSV that spreadsheet programs open directly.
//! Multi-valued attributes (accords, notes, seasons) live in a single field
//! using a small sub-format, so one catalog item is always one row.
//!
//! # Document
//!
//! | Aspect | Rule |
//! |--------|------|
//! | Encoding | UTF-8, optionally preceded by one BOM (`U+FEFF`) |
//! | Row terminator | `\r\n`, `\n` or `\r` on read; `\n` by default on write |
//! | Field delimiter | `,` |
//! | Blank rows | Rows whose fields all trim to empty are ignored on read |
//!
//! The BOM is stripped on read. Writers add it only when asked
//! (see [`CsvOptions::spreadsheet`](crate::CsvOptions::spreadsheet)).
//!
//! Blank rows carry no meaning: producers must not use them as section
//! separators, because readers drop them.
//!
//! # Fields
//!
//! A field is quoted **if and only if** it contains a comma, a double
//! quote, `\n` or `\r`. Inside a quoted field every `"` is written as `""`.
//!
//! ```text
//! Chanel                  # plain
//! "woody, aromatic"       # contains a comma
//! "the ""blue"" one"      # contains quotes
//! "line one
//! line two"               # contains a newline
//! ```
//!
//! **Reading rules**:
//! - A `"` outside quotes opens a quoted section, even mid-field
//! - A `"` inside quotes closes it unless followed by another `"`
//! - Quote characters themselves are never part of the field
//! - A quoted section left open at end of input runs to the end
//! - Field text is never trimmed
//!
//! # Composite Fields
//!
//! A composite field packs several entries into one CSV field, joined by
//! `|`. Record entries are compact JSON objects; plain entries are their text:
//!
//! ```text
//! {"name":"winter","width":"30%"}|{"name":"spring","width":"25%"}
//! Lemon|Bergamot|Pink Pepper
//! ```
//!
//! Because JSON uses `,` and `"`, record-valued composite fields are always
//! quoted once they are placed in a row:
//!
//! ```text
//! Bleu de Chanel,Chanel,,men,"{""name"":""winter"",""width"":""30%""}|{""name"":""spring"",""width"":""25%""}"
//! ```
//!
//! **Decoding rules**:
//! - Blank text has no entries
//! - Otherwise there is one entry per `|`-separated token, empty tokens included
//! - A token that parses as JSON becomes that JSON value
//! - Any other token is kept as raw text
//!
//! # Limitations
//!
//! - `|` is not escaped: an entry whose text contains `|` splits on read
//! - Escaping is not idempotent: a value must be escaped exactly once
//! - Raw-text fallback cannot tell a malformed record from a plain entry

// This module contains only documentation; no implementation code
