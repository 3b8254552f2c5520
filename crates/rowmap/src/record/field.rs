use crate::plan::{BuildCx, DynPlan};
use crate::{Record, Result};

use std::any::{Any, TypeId};
use std::sync::Arc;

/// Describes one field of a record type, independent of any instance.
///
/// Carries the field name, its declared type, the `ignored` / `embedded` /
/// `verbatim` markers, and accessors used to read and assign the field on
/// an instance.
pub struct Field<T> {
    name: &'static str,
    ty: TypeId,
    type_name: &'static str,
    kind: FieldKind,
    ignored: bool,
    verbatim: bool,
    access: Arc<dyn Access<T>>,
}

#[derive(Clone, Copy)]
pub(crate) enum FieldKind {
    Scalar,
    /// Resolves the plan of the embedded record type.
    Embedded(fn(&mut BuildCx<'_>) -> Result<Arc<dyn DynPlan>>),
}

impl<T: 'static> Field<T> {
    /// A field converted by the type adapter registered for `V`.
    pub fn scalar<V: 'static>(
        name: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Field<T> {
        Field::new::<V>(name, FieldKind::Scalar, Arc::new(Direct { get, get_mut }))
    }

    /// A field holding a nested record whose columns are stored inline.
    pub fn embedded<E: Record>(
        name: &'static str,
        get: fn(&T) -> &E,
        get_mut: fn(&mut T) -> &mut E,
    ) -> Field<T> {
        Field::new::<E>(
            name,
            FieldKind::Embedded(resolve_plan::<E>),
            Arc::new(Direct { get, get_mut }),
        )
    }

    fn new<V: 'static>(name: &'static str, kind: FieldKind, access: Arc<dyn Access<T>>) -> Self {
        Field {
            name,
            ty: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
            kind,
            ignored: false,
            verbatim: false,
            access,
        }
    }

    /// Marks the field as not persisted.
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Uses the field name as written for the column, skipping the naming
    /// convention.
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// Re-bases a field of `T` onto a record `C` containing a `T`.
    ///
    /// Used to inherit the fields of a parent record.
    pub fn lift<C: 'static>(self, get: fn(&C) -> &T, get_mut: fn(&mut C) -> &mut T) -> Field<C> {
        Field {
            name: self.name,
            ty: self.ty,
            type_name: self.type_name,
            kind: self.kind,
            ignored: self.ignored,
            verbatim: self.verbatim,
            access: Arc::new(Lifted {
                get,
                get_mut,
                inner: self.access,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The `TypeId` of the declared field type.
    pub fn value_type(&self) -> TypeId {
        self.ty
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, FieldKind::Embedded(_))
    }

    pub fn is_verbatim(&self) -> bool {
        self.verbatim
    }

    pub(crate) fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Borrows the field of `record`.
    pub fn get<'a>(&self, record: &'a T) -> &'a dyn Any {
        self.access.get(record)
    }

    /// Mutably borrows the field of `record`.
    pub fn get_mut<'a>(&self, record: &'a mut T) -> &'a mut dyn Any {
        self.access.get_mut(record)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Field {
            name: self.name,
            ty: self.ty,
            type_name: self.type_name,
            kind: self.kind,
            ignored: self.ignored,
            verbatim: self.verbatim,
            access: self.access.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.type_name)
            .field("embedded", &matches!(self.kind, FieldKind::Embedded(_)))
            .field("ignored", &self.ignored)
            .field("verbatim", &self.verbatim)
            .finish()
    }
}

fn resolve_plan<E: Record>(cx: &mut BuildCx<'_>) -> Result<Arc<dyn DynPlan>> {
    let plan: Arc<dyn DynPlan> = cx.plan::<E>()?;
    Ok(plan)
}

trait Access<T>: Send + Sync {
    fn get<'a>(&self, record: &'a T) -> &'a dyn Any;

    fn get_mut<'a>(&self, record: &'a mut T) -> &'a mut dyn Any;
}

struct Direct<T, V> {
    get: fn(&T) -> &V,
    get_mut: fn(&mut T) -> &mut V,
}

impl<T, V: 'static> Access<T> for Direct<T, V> {
    fn get<'a>(&self, record: &'a T) -> &'a dyn Any {
        (self.get)(record)
    }

    fn get_mut<'a>(&self, record: &'a mut T) -> &'a mut dyn Any {
        (self.get_mut)(record)
    }
}

struct Lifted<C, T> {
    get: fn(&C) -> &T,
    get_mut: fn(&mut C) -> &mut T,
    inner: Arc<dyn Access<T>>,
}

impl<C, T: 'static> Access<C> for Lifted<C, T> {
    fn get<'a>(&self, record: &'a C) -> &'a dyn Any {
        self.inner.get((self.get)(record))
    }

    fn get_mut<'a>(&self, record: &'a mut C) -> &'a mut dyn Any {
        self.inner.get_mut((self.get_mut)(record))
    }
}
