/// Flatten a list of `ParameterRecord`s into a key→value mapping.
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ParamsError;
use super::record::ParameterRecord;

/// Ordered `ParameterKey` → `ParameterValue` mapping.
///
/// Keys appear in first-occurrence order. A repeated key keeps its original
/// position and takes the value of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMapping {
    entries: Map<String, Value>,
}

impl ParameterMapping {
    /// Build the mapping in a single pass over `records`.
    #[must_use]
    pub fn from_records(records: &[ParameterRecord]) -> Self {
        let mut entries = Map::new();
        for record in records {
            entries.insert(record.key.clone(), Value::String(record.value.clone()));
        }
        Self { entries }
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-line JSON with no insignificant whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::Serialize` if serialization fails.
    pub fn to_compact_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A `ParameterKey` that occurs more than once in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey<'a> {
    pub key: &'a str,
    pub occurrences: usize,
}

/// Keys occurring more than once, in first-occurrence order.
#[must_use]
pub fn duplicate_keys(records: &[ParameterRecord]) -> Vec<DuplicateKey<'_>> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        let count = counts.entry(record.key.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.key.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|key| {
            let occurrences = counts[key];
            (occurrences > 1).then_some(DuplicateKey { key, occurrences })
        })
        .collect()
}
