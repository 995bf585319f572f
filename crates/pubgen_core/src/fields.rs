/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Extracted BibTeX fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An ordered mapping of citation id to its extracted fields.
///
/// Iteration follows first appearance in the source file. A repeated id
/// replaces the earlier field set in place.
pub type Database = IndexMap<String, FieldSet>;

/// A required field was not present in an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing expected field '{field}'")]
pub struct MissingField {
    pub field: String,
}

/// The raw fields of one entry, keyed by lowercased field name.
///
/// Values have had at most one layer of enclosing braces or quotes removed.
/// Formatting braces inside a value are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(IndexMap<String, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, lowercasing its name. Returns the previous value, if any.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.to_lowercase(), value.into())
    }

    /// Look up an optional field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up a field the caller cannot do without.
    pub fn require(&self, name: &str) -> Result<&str, MissingField> {
        self.get(name).ok_or_else(|| MissingField {
            field: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FieldSet::new();
        for (name, value) in iter {
            fields.insert(name.as_ref(), value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_lowercases_names() {
        let mut fields = FieldSet::new();
        fields.insert("Title", "Hello");
        assert_eq!(fields.get("title"), Some("Hello"));
        assert_eq!(fields.get("Title"), None);
    }

    #[test]
    fn test_require_reports_field_name() {
        let fields: FieldSet = [("title", "Hello")].into_iter().collect();
        assert_eq!(fields.require("title"), Ok("Hello"));
        let err = fields.require("year").unwrap_err();
        assert_eq!(err.field, "year");
        assert_eq!(err.to_string(), "missing expected field 'year'");
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let mut fields = FieldSet::new();
        fields.insert("year", "2019");
        assert_eq!(fields.insert("YEAR", "2020"), Some("2019".to_string()));
        assert_eq!(fields.get("year"), Some("2020"));
        assert_eq!(fields.len(), 1);
    }
}
