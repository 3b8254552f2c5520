use crate::plan::RecordPlan;
use crate::Record;

use rowmap_core::{Result, RowSource};

use std::sync::Arc;

/// Reads records of one type, holding the resolved plan.
///
/// Returned by [`Orm::reader`](super::Orm::reader).
#[derive(Debug)]
pub struct RecordReader<T> {
    plan: Arc<RecordPlan<T>>,
}

impl<T: Record> RecordReader<T> {
    pub(super) fn new(plan: Arc<RecordPlan<T>>) -> RecordReader<T> {
        RecordReader { plan }
    }

    /// Reads a new `T` from the current row of `row`.
    pub fn read(&self, row: &dyn RowSource) -> Result<T> {
        let mut record = self.plan.create_instance();
        self.plan.populate(row, &mut record)?;
        Ok(record)
    }

    pub fn plan(&self) -> &Arc<RecordPlan<T>> {
        &self.plan
    }
}

impl<T> Clone for RecordReader<T> {
    fn clone(&self) -> Self {
        RecordReader {
            plan: self.plan.clone(),
        }
    }
}
