//! # Decoded Row
//!
//! One `Row` per non-deleted record: ordered `(column name, value)` pairs,
//! built once by the record decoder and immutable afterwards. Order follows
//! the table's `colno` sequence, so iterating a row walks the record's byte
//! layout left to right.

use crate::types::Value;
use eyre::{bail, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    /// Looks a value up by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn get_int(&self, name: &str) -> Result<i64> {
        match self.get(name) {
            Some(Value::Int(i)) => Ok(*i),
            Some(other) => bail!("column '{}': expected INT, got {}", name, other.type_name()),
            None => bail!("row has no column '{}'", name),
        }
    }

    pub fn get_text(&self, name: &str) -> Result<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Ok(s),
            Some(other) => bail!("column '{}': expected TEXT, got {}", name, other.type_name()),
            None => bail!("row has no column '{}'", name),
        }
    }

    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Null))
    }

    /// Column names in layout order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, value)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
