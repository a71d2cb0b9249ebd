//! Structured fields attached to a log line.

use std::error::Error as StdError;
use std::fmt;

/// Rendering used for an error field that carries no error.
pub const NIL_ERROR: &str = "<nil>";

/// Value of a structured field.
///
/// Errors are rendered to their `Display` text when attached, so a field
/// never borrows from the caller and can be moved across chain values freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain string value.
    Str(String),
    /// Rendered error, or `None` when the caller had no error to report.
    Error(Option<String>),
}

impl FieldValue {
    /// Render an optional error into a field value.
    pub fn from_error(err: Option<&dyn StdError>) -> Self {
        Self::Error(err.map(|e| e.to_string()))
    }

    /// Text written to the log line for this value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Str(s) => s,
            Self::Error(Some(message)) => message,
            Self::Error(None) => NIL_ERROR,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// A labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn string(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, FieldValue::Str(value.into()))
    }

    pub fn error(label: impl Into<String>, err: Option<&dyn StdError>) -> Self {
        Self::new(label, FieldValue::from_error(err))
    }
}

/// Ordered batch of fields with unique labels.
///
/// Inserting a label that is already present replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<Field>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Fields::insert`] for a string value.
    pub fn string(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(Field::string(label, value));
        self
    }

    /// Builder form of [`Fields::insert`] for an error value.
    pub fn error(mut self, label: impl Into<String>, err: Option<&dyn StdError>) -> Self {
        self.insert(Field::error(label, err));
        self
    }

    /// Insert a field, replacing the value of an existing label.
    ///
    /// Returns the previous value when the label was already present.
    pub fn insert(&mut self, field: Field) -> Option<FieldValue> {
        match self.entries.iter_mut().find(|f| f.label == field.label) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, field.value)),
            None => {
                self.entries.push(field);
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|f| f.label == label).map(|f| &f.value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (label, value) in iter {
            fields.insert(Field::new(label, value));
        }
        fields
    }
}

impl Extend<Field> for Fields {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        for field in iter {
            self.insert(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_value_rendering() {
        let err = io::Error::new(io::ErrorKind::Other, "test error");
        assert_eq!(FieldValue::from_error(Some(&err)).as_str(), "test error");
        assert_eq!(FieldValue::from_error(None).to_string(), NIL_ERROR);
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut fields = Fields::new().string("key", "first").string("category", "groupcache");
        let previous = fields.insert(Field::string("key", "second"));

        assert_eq!(previous, Some(FieldValue::Str("first".into())));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("key").map(FieldValue::as_str), Some("second"));

        // Replacement keeps the original position.
        let labels: Vec<_> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["key", "category"]);
    }

    #[test]
    fn test_from_iterator_dedups() {
        let fields: Fields = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a").map(FieldValue::as_str), Some("3"));
        assert!(fields.contains("b"));
        assert!(!fields.contains("c"));
    }

    #[test]
    fn test_error_builder_with_nil() {
        let fields = Fields::new().error("err", None);
        assert_eq!(fields.get("err"), Some(&FieldValue::Error(None)));
    }
}
