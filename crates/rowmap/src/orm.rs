mod builder;
pub use builder::Builder;

mod cache;
use cache::PlanCache;

mod column;
pub use column::{ColumnReader, ColumnSelector};

mod reader;
pub use reader::RecordReader;

use crate::plan::{BuildCx, DynPlan, RecordPlan};
use crate::Record;

use rowmap_core::{Result, RowSource, TypeAdapters, Values};

use std::sync::Arc;

/// Entry point for converting records to and from rows.
///
/// An `Orm` owns a type adapter registry and a cache of record plans. Plans
/// are built the first time a record type is used and reused afterwards.
/// An `Orm` is cheap to share between threads behind an `Arc`.
#[derive(Debug)]
pub struct Orm {
    adapters: TypeAdapters,
    plans: PlanCache,
}

impl Orm {
    /// An `Orm` using the built-in type adapters.
    pub fn new() -> Orm {
        Orm::with_adapters(TypeAdapters::default())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn with_adapters(adapters: TypeAdapters) -> Orm {
        Orm {
            adapters,
            plans: PlanCache::default(),
        }
    }

    pub fn adapters(&self) -> &TypeAdapters {
        &self.adapters
    }

    /// Returns the plan for `T`, building and caching it on first use.
    pub fn plan<T: Record>(&self) -> Result<Arc<RecordPlan<T>>> {
        let mut cx = BuildCx::new(self);
        self.plan_in::<T>(&mut cx)
    }

    pub(crate) fn plan_in<T: Record>(&self, cx: &mut BuildCx<'_>) -> Result<Arc<RecordPlan<T>>> {
        if let Some(plan) = self.plans.get::<T>() {
            return Ok(plan);
        }

        cx.enter::<T>()?;
        let plan = RecordPlan::<T>::build(cx);
        cx.exit();

        let plan = Arc::new(plan?);

        tracing::debug!(
            record = T::record_name(),
            projection = ?plan.columns(),
            "built record plan"
        );

        self.plans.insert(plan.clone());
        Ok(plan)
    }

    /// Reads a new `T` from the current row of `row`.
    pub fn read<T: Record>(&self, row: &dyn RowSource) -> Result<T> {
        let plan = self.plan::<T>()?;
        let mut record = plan.create_instance();
        plan.populate(row, &mut record)?;
        Ok(record)
    }

    /// Populates an existing `record` from the current row of `row`.
    pub fn read_into<'a, T: Record>(
        &self,
        row: &dyn RowSource,
        record: &'a mut T,
    ) -> Result<&'a mut T> {
        self.plan::<T>()?.populate(row, record)
    }

    /// Serializes `record` into a new [`Values`] row.
    pub fn write<T: Record>(&self, record: &T) -> Result<Values> {
        let plan = self.plan::<T>()?;
        let mut values = Values::with_capacity(plan.writable().len());
        plan.serialize(record, &mut values)?;
        Ok(values)
    }

    /// Reads every row of `rows`, starting from the first one.
    ///
    /// A source without rows, including `None`, yields an empty `Vec`.
    pub fn read_all<T: Record, R: RowSource>(&self, rows: &mut R) -> Result<Vec<T>> {
        let plan = self.plan::<T>()?;
        let mut records = vec![];

        if !rows.move_to_first() {
            return Ok(records);
        }

        loop {
            let mut record = plan.create_instance();
            plan.populate(&*rows, &mut record)?;
            records.push(record);

            if !rows.move_to_next() {
                break;
            }
        }

        Ok(records)
    }

    /// Columns needed to read a `T`.
    pub fn projection<T: Record>(&self) -> Result<Vec<String>> {
        Ok(self.plan::<T>()?.projection())
    }

    /// Columns produced by writing a `T`.
    pub fn writable_columns<T: Record>(&self) -> Result<Vec<String>> {
        Ok(self.plan::<T>()?.writable_columns())
    }

    /// A reusable reader of `T` with its plan already resolved.
    pub fn reader<T: Record>(&self) -> Result<RecordReader<T>> {
        Ok(RecordReader::new(self.plan::<T>()?))
    }

    /// Selects a single column, read with the adapter of the type chosen by
    /// [`ColumnSelector::of`].
    pub fn column<'a>(&'a self, name: &str) -> ColumnSelector<'a> {
        ColumnSelector::new(self, name)
    }
}

impl Default for Orm {
    fn default() -> Self {
        Orm::new()
    }
}
