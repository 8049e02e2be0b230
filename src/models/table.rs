// Keyed tables (device/mount/interface -> field -> value) and flat field maps

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Field name -> raw value for one device/mount row.
pub type Row = BTreeMap<String, String>;

/// Rows keyed by device, mount or swap file. A key repeated by the source
/// keeps the last row seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedTable {
    rows: BTreeMap<String, Row>,
}

impl KeyedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, row: Row) -> Option<Row> {
        self.rows.insert(key.into(), row)
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key)
    }

    pub fn value(&self, key: &str, field: &str) -> Option<&str> {
        self.rows.get(key)?.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Row)> {
        self.rows.iter()
    }
}

/// Flat label -> raw value map (memory figures, kstat values).
/// Labels the source never printed are simply absent; use [`FieldValues::require`]
/// to turn absence into an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn require(&self, field: &str) -> Result<&str, ParseError> {
        self.get(field)
            .ok_or_else(|| ParseError::FieldNotFound(field.to_string()))
    }

    pub fn require_u64(&self, field: &str) -> Result<u64, ParseError> {
        let value = self.require(field)?;
        value.parse().map_err(|_| ParseError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = FieldValues::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}
