//! Records evaluated against a filter

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field value of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// A row to filter: field id to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, RecordValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field_id: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.insert(field_id, value);
        self
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: impl Into<RecordValue>) {
        self.fields.insert(field_id.into(), value.into());
    }

    pub fn get(&self, field_id: &str) -> Option<&RecordValue> {
        self.fields.get(field_id)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        RecordValue::Bool(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Number(value)
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Number(value as f64)
    }
}

impl From<i32> for RecordValue {
    fn from(value: i32) -> Self {
        RecordValue::Number(value.into())
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}

impl From<Vec<String>> for RecordValue {
    fn from(items: Vec<String>) -> Self {
        RecordValue::List(items)
    }
}
