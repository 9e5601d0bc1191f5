//! Decoded elements of a composite field.
//!
//! A composite field such as `{"name":"Lemon"}|{"name":"Bergamot"}` decodes
//! into a list of [`Entry`] values, one per `|`-separated token. Tokens that
//! are valid JSON become [`Entry::Structured`]. Anything else is kept
//! verbatim as [`Entry::Raw`].
//!
//! ## Usage Patterns
//!
//! ```rust
//! use catalog_csv::{parse_composite, Entry};
//! use serde_json::json;
//!
//! let entries = parse_composite(r#"not-json|{"name":"ok"}"#);
//! assert_eq!(entries[0], Entry::Raw("not-json".to_string()));
//! assert_eq!(entries[1], Entry::Structured(json!({"name": "ok"})));
//!
//! // Both kinds read the same way when only the text matters
//! assert_eq!(entries[0].as_str(), Some("not-json"));
//! assert_eq!(entries[1].get("name").and_then(|v| v.as_str()), Some("ok"));
//! ```

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// One element of a decoded composite field.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// The token decoded as JSON (object, array, number, string, bool or null).
    Structured(Value),
    /// The token was not JSON and is kept as written.
    Raw(String),
}

impl Entry {
    /// Returns `true` if the token decoded as JSON.
    #[inline]
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Entry::Structured(_))
    }

    /// Returns `true` if the token fell back to its raw text.
    #[inline]
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Entry::Raw(_))
    }

    /// Returns the text of a raw token or of a decoded JSON string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_csv::Entry;
    /// use serde_json::json;
    ///
    /// assert_eq!(Entry::Raw("winter".into()).as_str(), Some("winter"));
    /// assert_eq!(Entry::Structured(json!("winter")).as_str(), Some("winter"));
    /// assert_eq!(Entry::Structured(json!(3)).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Entry::Raw(s) => Some(s),
            Entry::Structured(value) => value.as_str(),
        }
    }

    /// Returns the decoded object, if this entry is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Entry::Structured(value) => value.as_object(),
            Entry::Raw(_) => None,
        }
    }

    /// Looks up a key of a decoded object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Converts the entry to its JSON form; raw text becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Entry::Structured(value) => value,
            Entry::Raw(s) => Value::String(s),
        }
    }

    /// Deserializes the entry into `T` through its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON form does not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> crate::Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

impl fmt::Display for Entry {
    /// Writes raw tokens and JSON strings unquoted, other JSON compactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Raw(s) => f.write_str(s),
            Entry::Structured(Value::String(s)) => f.write_str(s),
            Entry::Structured(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Structured(value) => value.serialize(serializer),
            Entry::Raw(s) => serializer.serialize_str(s),
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Structured(value)
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Raw(s)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Raw(s.to_string())
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        entry.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Accord {
        name: String,
        width: String,
    }

    #[test]
    fn test_display() {
        assert_eq!(Entry::Raw("a b".into()).to_string(), "a b");
        assert_eq!(Entry::Structured(json!("s")).to_string(), "s");
        assert_eq!(
            Entry::Structured(json!({"name": "x"})).to_string(),
            r#"{"name":"x"}"#
        );
    }

    #[test]
    fn test_deserialize_into() {
        let entry = Entry::Structured(json!({"name": "woody", "width": "80%"}));
        let accord: Accord = entry.deserialize_into().unwrap();
        assert_eq!(
            accord,
            Accord {
                name: "woody".to_string(),
                width: "80%".to_string()
            }
        );

        let raw: String = Entry::Raw("woody".into()).deserialize_into().unwrap();
        assert_eq!(raw, "woody");
    }

    #[test]
    fn test_serialize_raw_as_string() {
        let entries = vec![Entry::Raw("x".into()), Entry::Structured(json!({"a": 1}))];
        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            r#"["x",{"a":1}]"#
        );
    }

    #[test]
    fn test_get_on_raw_is_none() {
        assert!(Entry::Raw("{".into()).get("name").is_none());
        assert!(Entry::Raw("{".into()).is_raw());
    }
}
