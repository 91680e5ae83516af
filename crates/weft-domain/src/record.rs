//! Record module - one product's fields, as read from the input file

use crate::outcome::ExtractionResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single input/output record
///
/// Records are open-ended: any field present in the input is carried to the
/// output unchanged. Field order is preserved. Records are never mutated in
/// place by the extraction loop; [`Record::merged`] produces the augmented
/// copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from a JSON value, if it is an object
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_domain::Record;
    /// use serde_json::json;
    ///
    /// assert!(Record::from_value(json!({"sku": "A1"})).is_some());
    /// assert!(Record::from_value(json!(["not", "an", "object"])).is_none());
    /// ```
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Get a field's value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Read a field as prompt text
    ///
    /// Missing and `null` fields read as the empty string. Strings are
    /// returned as-is; any other value is rendered as its JSON text.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Field names in their original order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Produce the augmented record: this record's fields plus the result's
    ///
    /// Extracted attributes are merged over the original fields, so a key the
    /// model returns that collides with an input field takes the model's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_domain::{ExtractionResult, Record};
    /// use serde_json::json;
    ///
    /// let record = Record::from_value(json!({"description": "100% cotton"})).unwrap();
    /// let out = record.merged(&ExtractionResult::Error("All attempts failed".into()));
    ///
    /// assert_eq!(out.get("description"), Some(&json!("100% cotton")));
    /// assert_eq!(out.get("error"), Some(&json!("All attempts failed")));
    /// ```
    pub fn merged(&self, result: &ExtractionResult) -> Record {
        let mut out = self.0.clone();
        for (key, value) in result.to_fields() {
            out.insert(key, value);
        }
        Record(out)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
