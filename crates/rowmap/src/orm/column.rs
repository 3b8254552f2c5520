use super::Orm;

use rowmap_core::adapter::DynTypeAdapter;
use rowmap_core::{Error, Result, RowSource};

use std::marker::PhantomData;
use std::sync::Arc;

/// A column picked by name, waiting for its value type.
///
/// Returned by [`Orm::column`].
#[derive(Debug)]
pub struct ColumnSelector<'a> {
    orm: &'a Orm,
    name: String,
}

impl<'a> ColumnSelector<'a> {
    pub(super) fn new(orm: &'a Orm, name: &str) -> ColumnSelector<'a> {
        ColumnSelector {
            orm,
            name: name.to_string(),
        }
    }

    /// Reads the column as a `V`.
    ///
    /// Fails immediately if no type adapter is registered for `V`.
    pub fn of<V: 'static>(self) -> Result<ColumnReader<V>> {
        let Some(adapter) = self.orm.adapters().get::<V>() else {
            return Err(Error::unsupported_type(std::any::type_name::<V>()));
        };

        Ok(ColumnReader {
            column: self.name,
            adapter: adapter.clone(),
            _p: PhantomData,
        })
    }
}

/// Reads one typed column from a row.
pub struct ColumnReader<V> {
    column: String,
    adapter: Arc<dyn DynTypeAdapter>,
    _p: PhantomData<fn() -> V>,
}

impl<V: 'static> ColumnReader<V> {
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Reads the column from the current row of `row`.
    pub fn read(&self, row: &dyn RowSource) -> Result<V> {
        let value = self.adapter.read_boxed(row, &self.column)?;

        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(_) => panic!(
                "type adapter for `{}` read column `{}` as another type",
                std::any::type_name::<V>(),
                self.column
            ),
        }
    }
}

impl<V> core::fmt::Debug for ColumnReader<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ColumnReader")
            .field("column", &self.column)
            .field("ty", &self.adapter.value_type_name())
            .finish()
    }
}
