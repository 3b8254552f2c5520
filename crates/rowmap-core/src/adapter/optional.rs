use super::TypeAdapter;
use crate::{Result, RowSink, RowSource, Value};

/// Makes an adapter for `V` null tolerant, adapting `Option<V>`.
///
/// A null column reads as `None` without consulting the wrapped adapter, and
/// `None` is written as an explicit [`Value::Null`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional<A>(pub A);

impl<A> Optional<A> {
    pub fn new(adapter: A) -> Optional<A> {
        Optional(adapter)
    }

    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<V, A> TypeAdapter<Option<V>> for Optional<A>
where
    A: TypeAdapter<V>,
{
    fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<Option<V>> {
        if row.is_null(column)? {
            Ok(None)
        } else {
            self.0.from_row(row, column).map(Some)
        }
    }

    fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &Option<V>) {
        match value {
            Some(value) => self.0.to_sink(sink, column, value),
            None => sink.put(column, Value::Null),
        }
    }
}
