use super::{Kind, RowSource, Value};
use crate::{bail, Error, Result};

/// An in-memory [`RowSource`] over a fixed set of columns.
///
/// Starts positioned before the first row, like a freshly opened cursor.
///
/// ```
/// use rowmap_core::{Kind, MemRows, RowSource, Value};
///
/// let mut rows = MemRows::new(["ID", "NAME"])
///     .with_row([Value::I64(1), Value::from("ada")])
///     .with_row([Value::I64(2), Value::Null]);
///
/// assert!(rows.move_to_first());
/// assert_eq!(rows.get("NAME", Kind::String).unwrap(), Value::from("ada"));
/// assert!(rows.move_to_next());
/// assert!(rows.is_null("NAME").unwrap());
/// assert!(!rows.move_to_next());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemRows {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    position: Option<usize>,
}

impl MemRows {
    pub fn new<I>(columns: I) -> MemRows
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        MemRows {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
            position: None,
        }
    }

    /// Appends a row. Panics if the row width differs from the column count.
    pub fn push<I>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let row: Vec<Value> = row.into_iter().map(Into::into).collect();
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row has {} values but the source has {} columns",
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
        self
    }

    pub fn with_row<I>(mut self, row: I) -> MemRows
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push(row);
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Moves to the row at `index`. Returns `false` if it is out of range.
    pub fn move_to(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.position = Some(index);
            true
        } else {
            self.position = None;
            false
        }
    }

    fn cell(&self, column: &str) -> Result<&Value> {
        let Some(index) = self.columns.iter().position(|name| name == column) else {
            return Err(Error::column_not_found(column));
        };

        let Some(row) = self.position.and_then(|position| self.rows.get(position)) else {
            bail!("row source is not positioned on a row");
        };

        Ok(&row[index])
    }
}

impl RowSource for MemRows {
    fn get(&self, column: &str, kind: Kind) -> Result<Value> {
        self.cell(column)?.clone().coerce(kind)
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        Ok(self.cell(column)?.is_null())
    }

    fn move_to_first(&mut self) -> bool {
        self.move_to(0)
    }

    fn move_to_next(&mut self) -> bool {
        match self.position {
            Some(position) => self.move_to(position + 1),
            None => false,
        }
    }
}
