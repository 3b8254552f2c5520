use super::{Kind, RowSink, RowSource, Value};
use crate::{Error, Result};

use indexmap::IndexMap;

/// An ordered set of column/value pairs produced by writing a record.
///
/// Columns keep the order in which they were first put. `Values` can also be
/// read back as a single-row [`RowSource`]; an empty `Values` has no rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: IndexMap<String, Value>,
}

impl Values {
    pub fn new() -> Values {
        Values::default()
    }

    pub fn with_capacity(capacity: usize) -> Values {
        Values {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.entries.shift_remove(column)
    }
}

impl RowSink for Values {
    fn put(&mut self, column: &str, value: Value) {
        self.entries.insert(column.to_string(), value);
    }
}

impl RowSource for Values {
    fn get(&self, column: &str, kind: Kind) -> Result<Value> {
        match self.entries.get(column) {
            Some(value) => value.clone().coerce(kind),
            None => Err(Error::column_not_found(column)),
        }
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        match self.entries.get(column) {
            Some(value) => Ok(value.is_null()),
            None => Err(Error::column_not_found(column)),
        }
    }

    fn move_to_first(&mut self) -> bool {
        !self.entries.is_empty()
    }

    fn move_to_next(&mut self) -> bool {
        false
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Values {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Values {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
