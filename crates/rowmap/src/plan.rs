mod field_adapter;
pub use field_adapter::{EmbeddedField, FieldAdapter, ScalarField};
use field_adapter::EmbeddedInit;

use crate::record::FieldKind;
use crate::{Orm, Record};

use rowmap_core::{Error, Result, RowSink, RowSource};
use std_util::slice::SliceUtil;

use std::any::{Any, TypeId};
use std::sync::Arc;

/// The compiled conversion strategy for one record type.
///
/// Built once per type by [`Orm`] and cached for its lifetime. The
/// projection, writable columns and duplicate columns are computed when the
/// plan is built and never change afterwards.
pub struct RecordPlan<T> {
    /// Field adapters, in field order
    fields: Vec<FieldAdapter<T>>,

    /// Embedded-field initializers, in field order
    initializers: Vec<EmbeddedInit<T>>,

    /// Columns needed to populate an instance
    projection: Vec<String>,

    /// Columns produced by serializing an instance
    writable_columns: Vec<String>,

    /// Writable columns claimed by more than one field
    duplicates: Vec<String>,
}

impl<T: Record> RecordPlan<T> {
    pub(crate) fn build(cx: &mut BuildCx<'_>) -> Result<RecordPlan<T>> {
        let mut fields = vec![];
        let mut initializers = vec![];

        for field in T::fields() {
            if field.is_ignored() {
                continue;
            }

            match field.kind() {
                FieldKind::Embedded(resolve) => {
                    let plan = resolve(cx)?;
                    initializers.push(EmbeddedInit::new(field.clone(), plan.clone()));
                    fields.push(FieldAdapter::Embedded(EmbeddedField::new(field, plan)));
                }
                FieldKind::Scalar => {
                    let Some(adapter) = cx.orm.adapters().get_by_id(field.value_type()) else {
                        tracing::debug!(
                            record = T::record_name(),
                            field = field.name(),
                            ty = field.type_name(),
                            "no type adapter for field"
                        );
                        return Err(Error::unsupported_type(field.type_name()));
                    };
                    fields.push(FieldAdapter::Scalar(ScalarField::new(
                        field,
                        adapter.clone(),
                    )));
                }
            }
        }

        let mut projection = vec![];
        let mut writable_columns = vec![];

        for field in &fields {
            projection.extend_from_slice(field.column_names());
            writable_columns.extend_from_slice(field.writable_column_names());
        }

        let duplicates: Vec<String> = writable_columns
            .duplicates()
            .into_iter()
            .cloned()
            .collect();

        if !duplicates.is_empty() {
            tracing::debug!(
                record = T::record_name(),
                ?duplicates,
                "record plan has duplicate writable columns"
            );
        }

        Ok(RecordPlan {
            fields,
            initializers,
            projection,
            writable_columns,
            duplicates,
        })
    }

    /// Creates a default instance with every embedded record allocated.
    pub fn create_instance(&self) -> T {
        let mut record = T::default();
        for initializer in &self.initializers {
            initializer.init(&mut record);
        }
        record
    }

    /// Populates `record` from the current row of `row`, field by field.
    ///
    /// Stops at the first failing field. Fields populated before the failure
    /// keep their new values.
    pub fn populate<'a>(&self, row: &dyn RowSource, record: &'a mut T) -> Result<&'a mut T> {
        for field in &self.fields {
            field.populate_from_row(row, record)?;
        }
        Ok(record)
    }

    /// Writes every field of `record` into `sink`.
    ///
    /// Fails without writing anything if the plan has duplicate writable
    /// columns.
    pub fn serialize(&self, record: &T, sink: &mut dyn RowSink) -> Result<()> {
        if !self.duplicates.is_empty() {
            return Err(Error::duplicate_columns(self.duplicates.iter().cloned()));
        }
        self.write_fields(record, sink)
    }

    fn write_fields(&self, record: &T, sink: &mut dyn RowSink) -> Result<()> {
        for field in &self.fields {
            field.write_to_sink(record, sink)?;
        }
        Ok(())
    }

    /// Columns needed to populate an instance, in field order.
    pub fn projection(&self) -> Vec<String> {
        self.projection.clone()
    }

    /// Columns produced when serializing an instance, in field order.
    pub fn writable_columns(&self) -> Vec<String> {
        self.writable_columns.clone()
    }

    /// Writable columns claimed by more than one field.
    pub fn duplicate_columns(&self) -> &[String] {
        &self.duplicates
    }

    pub fn fields(&self) -> &[FieldAdapter<T>] {
        &self.fields
    }
}

impl<T> core::fmt::Debug for RecordPlan<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RecordPlan")
            .field("record", &std::any::type_name::<T>())
            .field("projection", &self.projection)
            .field("writable_columns", &self.writable_columns)
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

/// A record plan with its record type erased, as held by embedded fields.
pub(crate) trait DynPlan: Send + Sync {
    fn record_name(&self) -> &'static str;

    fn columns(&self) -> &[String];

    fn writable(&self) -> &[String];

    fn init_any(&self, slot: &mut dyn Any);

    fn populate_any(&self, row: &dyn RowSource, slot: &mut dyn Any) -> Result<()>;

    fn write_any(&self, slot: &dyn Any, sink: &mut dyn RowSink) -> Result<()>;
}

impl<T: Record> DynPlan for RecordPlan<T> {
    fn record_name(&self) -> &'static str {
        T::record_name()
    }

    fn columns(&self) -> &[String] {
        &self.projection
    }

    fn writable(&self) -> &[String] {
        &self.writable_columns
    }

    fn init_any(&self, slot: &mut dyn Any) {
        *downcast_mut::<T>(slot) = self.create_instance();
    }

    fn populate_any(&self, row: &dyn RowSource, slot: &mut dyn Any) -> Result<()> {
        self.populate(row, downcast_mut::<T>(slot))?;
        Ok(())
    }

    fn write_any(&self, slot: &dyn Any, sink: &mut dyn RowSink) -> Result<()> {
        let Some(record) = slot.downcast_ref::<T>() else {
            panic!("embedded field is not a `{}`", T::record_name());
        };
        self.write_fields(record, sink)
    }
}

fn downcast_mut<T: Record>(slot: &mut dyn Any) -> &mut T {
    match slot.downcast_mut::<T>() {
        Some(record) => record,
        None => panic!("embedded field is not a `{}`", T::record_name()),
    }
}

/// State carried through one (possibly recursive) plan build.
pub(crate) struct BuildCx<'a> {
    pub(crate) orm: &'a Orm,

    /// Record types whose plans are being built, outermost first
    building: Vec<(TypeId, &'static str)>,
}

impl<'a> BuildCx<'a> {
    pub(crate) fn new(orm: &'a Orm) -> BuildCx<'a> {
        BuildCx {
            orm,
            building: vec![],
        }
    }

    /// Resolves the plan of `E` through the owning [`Orm`]'s cache.
    pub(crate) fn plan<E: Record>(&mut self) -> Result<Arc<RecordPlan<E>>> {
        let orm = self.orm;
        orm.plan_in::<E>(self)
    }

    /// Marks `T` as being built. Fails if `T` is already being built further
    /// up the embedding chain.
    pub(crate) fn enter<T: Record>(&mut self) -> Result<()> {
        let id = TypeId::of::<T>();

        if let Some(start) = self.building.iter().position(|(ty, _)| *ty == id) {
            let chain = self.building[start..]
                .iter()
                .map(|(_, name)| *name)
                .chain([T::record_name()]);
            return Err(Error::cyclic_embedding(chain));
        }

        self.building.push((id, T::record_name()));
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.building.pop();
    }
}
