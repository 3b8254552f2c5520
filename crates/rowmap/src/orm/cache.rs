use crate::plan::RecordPlan;
use crate::Record;

use dashmap::DashMap;

use std::any::{Any, TypeId};
use std::sync::Arc;

/// Record plans keyed by record type.
///
/// No lock is held while a plan is built, so two threads asking for the same
/// new type may both build it. The last insert wins; both plans are
/// equivalent.
#[derive(Default)]
pub(super) struct PlanCache {
    plans: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl PlanCache {
    pub(super) fn get<T: Record>(&self) -> Option<Arc<RecordPlan<T>>> {
        let plan = self.plans.get(&TypeId::of::<T>())?.value().clone();
        tracing::trace!(record = T::record_name(), "record plan cache hit");

        match plan.downcast::<RecordPlan<T>>() {
            Ok(plan) => Some(plan),
            Err(_) => panic!("plan cache entry for `{}` has the wrong type", T::record_name()),
        }
    }

    pub(super) fn insert<T: Record>(&self, plan: Arc<RecordPlan<T>>) {
        self.plans.insert(TypeId::of::<T>(), plan);
    }

    pub(super) fn len(&self) -> usize {
        self.plans.len()
    }
}

impl core::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PlanCache")
            .field("len", &self.len())
            .finish()
    }
}
