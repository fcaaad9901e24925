use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::types::LabelSet;

/// A record literal: field name to value pairs in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordValue {
    entries: Vec<(String, Value)>,
}

impl RecordValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a field. Reassigning an existing field replaces its value
    /// in place without changing its position.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RecordValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

/// Build a record with exactly one entry per label, in label declaration
/// order, each value produced by `value_for`.
pub fn record_of(labels: &LabelSet, mut value_for: impl FnMut(&str) -> Value) -> RecordValue {
    let mut record = RecordValue::new();
    for label in &labels.labels {
        record.set(label, value_for(label));
    }
    record
}
