mod kind;
pub use kind::Kind;

mod mem;
pub use mem::MemRows;

mod value;
pub use value::Value;

mod values;
pub use values::Values;

use crate::Result;

/// An open, positionable handle over a sequence of rows, read by column name.
///
/// Implemented by storage backends (database cursors, result sets, ...).
/// [`MemRows`] is an in-memory implementation.
pub trait RowSource {
    /// Returns the value of `column` in the current row, coerced to `kind`.
    ///
    /// A null column yields [`Value::Null`] regardless of `kind`. Fails with a
    /// column-not-found error when the row has no such column.
    fn get(&self, column: &str, kind: Kind) -> Result<Value>;

    /// Returns `true` if `column` holds null in the current row.
    fn is_null(&self, column: &str) -> Result<bool>;

    /// Positions the source on its first row. Returns `false` when there are
    /// no rows.
    fn move_to_first(&mut self) -> bool;

    /// Advances to the next row. Returns `false` once the rows are exhausted.
    fn move_to_next(&mut self) -> bool;
}

/// An accumulator of named, typed values destined for storage.
pub trait RowSink {
    /// Stores `value` under `column`, replacing any previous value.
    fn put(&mut self, column: &str, value: Value);
}

impl<R: RowSource + ?Sized> RowSource for &mut R {
    fn get(&self, column: &str, kind: Kind) -> Result<Value> {
        (**self).get(column, kind)
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        (**self).is_null(column)
    }

    fn move_to_first(&mut self) -> bool {
        (**self).move_to_first()
    }

    fn move_to_next(&mut self) -> bool {
        (**self).move_to_next()
    }
}

/// An absent source behaves as a source without rows.
impl<R: RowSource> RowSource for Option<R> {
    fn get(&self, column: &str, kind: Kind) -> Result<Value> {
        match self {
            Some(rows) => rows.get(column, kind),
            None => Err(crate::Error::column_not_found(column)),
        }
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        match self {
            Some(rows) => rows.is_null(column),
            None => Err(crate::Error::column_not_found(column)),
        }
    }

    fn move_to_first(&mut self) -> bool {
        self.as_mut().is_some_and(|rows| rows.move_to_first())
    }

    fn move_to_next(&mut self) -> bool {
        self.as_mut().is_some_and(|rows| rows.move_to_next())
    }
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn put(&mut self, column: &str, value: Value) {
        (**self).put(column, value)
    }
}
