use super::DynPlan;
use crate::Field;

use rowmap_core::adapter::DynTypeAdapter;
use rowmap_core::{naming, Result, RowSink, RowSource};

use std::sync::Arc;

/// Moves one field's value between a record and a row.
pub enum FieldAdapter<T> {
    /// A field stored in a single column through a type adapter.
    Scalar(ScalarField<T>),

    /// A nested record whose columns are stored inline.
    Embedded(EmbeddedField<T>),
}

impl<T> FieldAdapter<T> {
    /// The field this adapter was built for.
    pub fn field(&self) -> &Field<T> {
        match self {
            FieldAdapter::Scalar(scalar) => &scalar.field,
            FieldAdapter::Embedded(embedded) => &embedded.field,
        }
    }

    /// Columns read to populate the field.
    pub fn column_names(&self) -> &[String] {
        match self {
            FieldAdapter::Scalar(scalar) => std::slice::from_ref(&scalar.column),
            FieldAdapter::Embedded(embedded) => embedded.plan.columns(),
        }
    }

    /// Columns written when the field is serialized.
    pub fn writable_column_names(&self) -> &[String] {
        match self {
            FieldAdapter::Scalar(scalar) => std::slice::from_ref(&scalar.column),
            FieldAdapter::Embedded(embedded) => embedded.plan.writable(),
        }
    }
}

impl<T: 'static> FieldAdapter<T> {
    pub(crate) fn populate_from_row(&self, row: &dyn RowSource, record: &mut T) -> Result<()> {
        match self {
            FieldAdapter::Scalar(scalar) => {
                scalar
                    .adapter
                    .read_into(row, &scalar.column, scalar.field.get_mut(record))
            }
            FieldAdapter::Embedded(embedded) => {
                embedded.plan.populate_any(row, embedded.field.get_mut(record))
            }
        }
    }

    pub(crate) fn write_to_sink(&self, record: &T, sink: &mut dyn RowSink) -> Result<()> {
        match self {
            FieldAdapter::Scalar(scalar) => {
                scalar
                    .adapter
                    .write_from(scalar.field.get(record), sink, &scalar.column);
                Ok(())
            }
            FieldAdapter::Embedded(embedded) => {
                embedded.plan.write_any(embedded.field.get(record), sink)
            }
        }
    }
}

pub struct ScalarField<T> {
    field: Field<T>,
    column: String,
    adapter: Arc<dyn DynTypeAdapter>,
}

impl<T: 'static> ScalarField<T> {
    pub(crate) fn new(field: Field<T>, adapter: Arc<dyn DynTypeAdapter>) -> ScalarField<T> {
        let column = if field.is_verbatim() {
            field.name().to_string()
        } else {
            naming::column_name(field.name())
        };

        ScalarField {
            field,
            column,
            adapter,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

pub struct EmbeddedField<T> {
    field: Field<T>,
    plan: Arc<dyn DynPlan>,
}

impl<T> EmbeddedField<T> {
    pub(crate) fn new(field: Field<T>, plan: Arc<dyn DynPlan>) -> EmbeddedField<T> {
        EmbeddedField { field, plan }
    }

    /// Name of the embedded record type.
    pub fn record_name(&self) -> &'static str {
        self.plan.record_name()
    }
}

/// Allocates the embedded record of a freshly created instance.
pub(crate) struct EmbeddedInit<T> {
    field: Field<T>,
    plan: Arc<dyn DynPlan>,
}

impl<T: 'static> EmbeddedInit<T> {
    pub(crate) fn new(field: Field<T>, plan: Arc<dyn DynPlan>) -> EmbeddedInit<T> {
        EmbeddedInit { field, plan }
    }

    pub(crate) fn init(&self, record: &mut T) {
        self.plan.init_any(self.field.get_mut(record));
    }
}
