mod builtin;
pub use builtin::{
    BoolAdapter, BytesAdapter, F32Adapter, F64Adapter, I16Adapter, I32Adapter, I64Adapter,
    StringAdapter,
};

mod optional;
pub use optional::Optional;

mod registry;
pub use registry::TypeAdapters;

use crate::{RowSink, RowSource, Result};

use std::any::{Any, TypeId};
use std::marker::PhantomData;

/// Converts values of one Rust type to and from a single column.
///
/// Adapters are stateless strategies shared by every record plan that has a
/// field of type `V`. Register custom ones with `Orm::builder().register`.
///
/// ```
/// use rowmap_core::{Kind, Result, RowSink, RowSource, TypeAdapter, Value};
///
/// struct Celsius(f64);
///
/// struct CelsiusAdapter;
///
/// impl TypeAdapter<Celsius> for CelsiusAdapter {
///     fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<Celsius> {
///         Ok(Celsius(f64::try_from(row.get(column, Kind::F64)?)?))
///     }
///
///     fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &Celsius) {
///         sink.put(column, Value::F64(value.0));
///     }
/// }
/// ```
pub trait TypeAdapter<V>: Send + Sync + 'static {
    /// Reads the value of `column` from the current row.
    fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<V>;

    /// Puts `value` into `sink` under `column`.
    fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &V);
}

/// A [`TypeAdapter`] with its value type erased, as stored in the registry.
///
/// Values travel as `dyn Any`. Handing an adapter a value of a different
/// type than the one it was registered for is a programming error and
/// panics.
pub trait DynTypeAdapter: Send + Sync {
    /// The `TypeId` of the adapted value type.
    fn value_type(&self) -> TypeId;

    /// The name of the adapted value type.
    fn value_type_name(&self) -> &'static str;

    /// Reads `column` and assigns the result to `slot`.
    fn read_into(&self, row: &dyn RowSource, column: &str, slot: &mut dyn Any) -> Result<()>;

    /// Reads `column` into a new boxed value.
    fn read_boxed(&self, row: &dyn RowSource, column: &str) -> Result<Box<dyn Any>>;

    /// Writes the value in `slot` to `sink`.
    fn write_from(&self, slot: &dyn Any, sink: &mut dyn RowSink, column: &str);
}

/// Erases the value type of a typed adapter.
pub(crate) struct Erased<V, A> {
    adapter: A,
    _p: PhantomData<fn() -> V>,
}

impl<V, A> Erased<V, A> {
    pub(crate) fn new(adapter: A) -> Self {
        Erased {
            adapter,
            _p: PhantomData,
        }
    }
}

impl<V: 'static, A: TypeAdapter<V>> DynTypeAdapter for Erased<V, A> {
    fn value_type(&self) -> TypeId {
        TypeId::of::<V>()
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }

    fn read_into(&self, row: &dyn RowSource, column: &str, slot: &mut dyn Any) -> Result<()> {
        let Some(slot) = slot.downcast_mut::<V>() else {
            panic!(
                "type adapter for `{}` cannot assign column `{column}` to a field of another type",
                self.value_type_name()
            );
        };
        *slot = self.adapter.from_row(row, column)?;
        Ok(())
    }

    fn read_boxed(&self, row: &dyn RowSource, column: &str) -> Result<Box<dyn Any>> {
        Ok(Box::new(self.adapter.from_row(row, column)?))
    }

    fn write_from(&self, slot: &dyn Any, sink: &mut dyn RowSink, column: &str) {
        let Some(value) = slot.downcast_ref::<V>() else {
            panic!(
                "type adapter for `{}` cannot write column `{column}` from a field of another type",
                self.value_type_name()
            );
        };
        self.adapter.to_sink(sink, column, value);
    }
}
