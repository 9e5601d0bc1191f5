//! Composite fields: several values packed into one CSV field.
//!
//! Multi-valued catalog columns (accords, notes, seasons, perfumers) are
//! stored in a single field with entries joined by `|`. Entries that are
//! records are written as compact JSON, plain values as their text:
//!
//! ```text
//! {"name":"winter","width":"30%"}|{"name":"spring","width":"25%"}
//! Lemon|Bergamot
//! ```
//!
//! Decoding is lenient: a token that is not valid JSON is kept as raw text
//! instead of failing the field. Use [`from_composite`] when a malformed
//! token should be an error.
//!
//! The separator is not escaped. An entry whose own text contains `|` splits
//! into extra tokens on the way back.

use crate::error::{Error, Result};
use crate::value::Entry;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Separator placed between the entries of a composite field.
pub const COMPOSITE_SEPARATOR: char = '|';

/// Encodes a dynamic value as a composite field.
///
/// - `null`, `false`, `0` and `""` encode as the empty string
/// - arrays join their elements with `|`; object, array and `null`
///   elements are written as JSON, other elements as their text
/// - a single object is written as one JSON token
/// - any other scalar is written as its text
///
/// # Examples
///
/// ```rust
/// use catalog_csv::composite_from_value;
/// use serde_json::json;
///
/// assert_eq!(composite_from_value(&json!(["x", "y", 3])), "x|y|3");
/// assert_eq!(
///     composite_from_value(&json!([{"name": "Lemon"}, {"name": "Bergamot"}])),
///     r#"{"name":"Lemon"}|{"name":"Bergamot"}"#
/// );
/// assert_eq!(composite_from_value(&json!(null)), "");
/// ```
#[must_use]
pub fn composite_from_value(value: &Value) -> String {
    if is_falsy(value) {
        return String::new();
    }

    match value {
        Value::Array(elements) => {
            let mut output = String::new();
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    output.push(COMPOSITE_SEPARATOR);
                }
                output.push_str(&element_text(element));
            }
            output
        }
        Value::Object(_) => value.to_string(),
        scalar => element_text(scalar),
    }
}

/// Serializes any `T: Serialize` into a composite field.
///
/// The value is first converted to JSON, then encoded with
/// [`composite_from_value`].
///
/// # Examples
///
/// ```rust
/// use catalog_csv::to_composite;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Note { name: &'static str }
///
/// let notes = vec![Note { name: "Lemon" }, Note { name: "Bergamot" }];
/// let field = to_composite(&notes).unwrap();
/// assert_eq!(field, r#"{"name":"Lemon"}|{"name":"Bergamot"}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn to_composite<T>(data: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = serde_json::to_value(data)?;
    Ok(composite_from_value(&value))
}

/// Decodes a composite field into its entries.
///
/// Blank input yields no entries. Otherwise there is exactly one entry per
/// `|`-separated token, in order; empty tokens become `Entry::Raw("")`.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::{parse_composite, Entry};
///
/// assert!(parse_composite("   ").is_empty());
///
/// let entries = parse_composite("x||y");
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1], Entry::Raw(String::new()));
/// ```
#[must_use]
pub fn parse_composite(text: &str) -> Vec<Entry> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split(COMPOSITE_SEPARATOR)
        .enumerate()
        .map(|(index, token)| decode_token(index, token))
        .collect()
}

/// Decodes an optional composite field; `None` yields no entries.
#[must_use]
pub fn parse_composite_optional(text: Option<&str>) -> Vec<Entry> {
    text.map(parse_composite).unwrap_or_default()
}

/// Decodes a composite field into typed entries, failing on the first mismatch.
///
/// Raw (non-JSON) tokens are offered to `T` as JSON strings, so `Vec<String>`
/// accepts `Lemon|Bergamot` while a record type rejects it.
///
/// # Examples
///
/// ```rust
/// use catalog_csv::from_composite;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Note { name: String }
///
/// let notes: Vec<Note> = from_composite(r#"{"name":"Lemon"}|{"name":"Bergamot"}"#).unwrap();
/// assert_eq!(notes[1], Note { name: "Bergamot".to_string() });
///
/// let names: Vec<String> = from_composite("Lemon|Bergamot").unwrap();
/// assert_eq!(names, vec!["Lemon", "Bergamot"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Token`] naming the first token that does not fit `T`.
pub fn from_composite<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(COMPOSITE_SEPARATOR)
        .enumerate()
        .map(|(index, token)| {
            decode_token(index, token)
                .deserialize_into()
                .map_err(|err| Error::token(index, token, &err.to_string()))
        })
        .collect()
}

fn decode_token(index: usize, token: &str) -> Entry {
    match serde_json::from_str::<Value>(token) {
        Ok(value) => Entry::Structured(value),
        Err(err) => {
            tracing::debug!(index, error = %err, "Composite token is not JSON, keeping raw text");
            Entry::Raw(token.to_string())
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn element_text(element: &Value) -> String {
    match element {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => element.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_falsy_inputs_encode_empty() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(composite_from_value(&value), "", "value: {}", value);
        }
    }

    #[test]
    fn test_scalars_encode_as_text() {
        assert_eq!(composite_from_value(&json!("winter")), "winter");
        assert_eq!(composite_from_value(&json!(12)), "12");
        assert_eq!(composite_from_value(&json!(true)), "true");
    }

    #[test]
    fn test_float_text_matches_field_escaper() {
        assert_eq!(to_composite(&4.0).unwrap(), "4");
        assert_eq!(to_composite(&4.0).unwrap(), crate::escape_field(&4.0));
        assert_eq!(composite_from_value(&json!([4.0, 2.5])), "4|2.5");
        assert_eq!(composite_from_value(&json!([-7, 0.5])), "-7|0.5");
    }

    #[test]
    fn test_array_elements() {
        let value = json!([null, [1, 2], false, "a", {"k": "v"}]);
        assert_eq!(
            composite_from_value(&value),
            r#"null|[1,2]|false|a|{"k":"v"}"#
        );
        assert_eq!(composite_from_value(&json!([])), "");
    }

    #[test]
    fn test_single_object_is_one_token() {
        let field = composite_from_value(&json!({"name": "Chanel", "country": "France"}));
        assert_eq!(field, r#"{"name":"Chanel","country":"France"}"#);
        assert_eq!(parse_composite(&field).len(), 1);
    }

    #[test]
    fn test_key_order_preserved() {
        let field = composite_from_value(&json!([{"width": "30%", "name": "winter"}]));
        assert_eq!(field, r#"{"width":"30%","name":"winter"}"#);
    }

    #[test]
    fn test_to_composite_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(to_composite(&map), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_numbers_and_padding() {
        let entries = parse_composite(" 1 |2.5| true");
        assert_eq!(
            entries,
            vec![
                Entry::Structured(json!(1)),
                Entry::Structured(json!(2.5)),
                Entry::Structured(json!(true)),
            ]
        );
    }

    #[test]
    fn test_trailing_separator_gives_empty_raw() {
        let entries = parse_composite("a|");
        assert_eq!(entries, vec![Entry::Raw("a".into()), Entry::Raw(String::new())]);
    }

    #[test]
    fn test_from_composite_reports_token() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Note {
            name: String,
        }

        let err = from_composite::<Note>(r#"{"name":"ok"}|oops"#).unwrap_err();
        match err {
            Error::Token { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_optional_none() {
        assert!(parse_composite_optional(None).is_empty());
    }
}
