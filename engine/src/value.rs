//! FILENAME: engine/src/value.rs
//! PURPOSE: Defines the fundamental data structures for a single leaderboard row.
//! CONTEXT: This file contains the `Row` map and `FieldValue` enum.
//! A row is one entity's precomputed statistical summary; a missing stat is a
//! first-class `Empty` value, never an error. Thousands of these instances are
//! re-filtered and re-sorted on every state change, so they stay lightweight.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Suffix of the companion field holding a value's precomputed percentile rank.
pub const PERCENTILE_SUFFIX: &str = "_pctl";

/// A single field value inside a row.
///
/// Variant order matters: the enum is untagged, so deserialization tries
/// variants top to bottom (a JSON number must not land in `Text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Empty,
}

impl FieldValue {
    pub fn number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Returns the raw value as display text (no format rule applied).
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(n: Option<f64>) -> Self {
        match n {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Empty,
        }
    }
}

/// One ranked entity's precomputed statistical summary.
///
/// Keys the upstream build emits but the column registry never mentions are
/// retained untouched; percentile companions (`velocity_pctl`) live in the
/// same map as their display field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: FxHashMap<String, FieldValue>,
}

impl Row {
    pub fn new() -> Self {
        Row {
            fields: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Numeric value of a field, `None` when absent, empty, or textual.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(FieldValue::number)
    }

    /// Text value of a field, `None` when absent, empty, or numeric.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::text)
    }

    /// True when the field is absent or explicitly `Empty`.
    pub fn is_missing(&self, key: &str) -> bool {
        self.fields.get(key).map_or(true, FieldValue::is_empty)
    }

    /// Precomputed percentile rank for a field (`<key>_pctl` companion).
    pub fn percentile(&self, key: &str) -> Option<f64> {
        self.number(&format!("{}{}", key, PERCENTILE_SUFFIX))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

impl FromIterator<(String, FieldValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Row {
            fields: iter.into_iter().collect(),
        }
    }
}
