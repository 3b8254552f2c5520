use super::{
    BoolAdapter, BytesAdapter, DynTypeAdapter, Erased, F32Adapter, F64Adapter, I16Adapter,
    I32Adapter, I64Adapter, Optional, StringAdapter, TypeAdapter,
};

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Maps Rust types to the [`TypeAdapter`] converting them.
///
/// Lookups match the exact type: an adapter registered for `T` is not used
/// for wrappers of `T` or types convertible into it.
#[derive(Clone)]
pub struct TypeAdapters {
    adapters: HashMap<TypeId, Arc<dyn DynTypeAdapter>>,
}

impl TypeAdapters {
    /// An empty registry, without even the built-in adapters.
    pub fn empty() -> TypeAdapters {
        TypeAdapters {
            adapters: HashMap::new(),
        }
    }

    /// The process-wide built-in registry.
    ///
    /// Covers `i16`, `i32`, `i64`, `bool`, `f32`, `f64`, `String` and
    /// `Vec<u8>`, plus the `Option` of each.
    pub fn defaults() -> &'static TypeAdapters {
        static DEFAULTS: OnceLock<TypeAdapters> = OnceLock::new();

        DEFAULTS.get_or_init(|| {
            let mut adapters = TypeAdapters::empty();
            adapters
                .register_nullable::<i16, _>(I16Adapter)
                .register_nullable::<i32, _>(I32Adapter)
                .register_nullable::<i64, _>(I64Adapter)
                .register_nullable::<bool, _>(BoolAdapter)
                .register_nullable::<f32, _>(F32Adapter)
                .register_nullable::<f64, _>(F64Adapter)
                .register_nullable::<String, _>(StringAdapter)
                .register_nullable::<Vec<u8>, _>(BytesAdapter);
            adapters
        })
    }

    /// Registers `adapter` for `V`, replacing any previous adapter for `V`.
    pub fn register<V, A>(&mut self, adapter: A) -> &mut Self
    where
        V: 'static,
        A: TypeAdapter<V>,
    {
        tracing::trace!(ty = std::any::type_name::<V>(), "registering type adapter");
        self.adapters
            .insert(TypeId::of::<V>(), Arc::new(Erased::<V, A>::new(adapter)));
        self
    }

    /// Registers `adapter` for `V` and an [`Optional`] wrapper of it for
    /// `Option<V>`.
    pub fn register_nullable<V, A>(&mut self, adapter: A) -> &mut Self
    where
        V: 'static,
        A: TypeAdapter<V> + Clone,
    {
        self.register::<V, A>(adapter.clone())
            .register::<Option<V>, _>(Optional(adapter))
    }

    pub fn get<V: 'static>(&self) -> Option<&Arc<dyn DynTypeAdapter>> {
        self.get_by_id(TypeId::of::<V>())
    }

    pub fn get_by_id(&self, ty: TypeId) -> Option<&Arc<dyn DynTypeAdapter>> {
        self.adapters.get(&ty)
    }

    pub fn contains<V: 'static>(&self) -> bool {
        self.adapters.contains_key(&TypeId::of::<V>())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for TypeAdapters {
    fn default() -> Self {
        TypeAdapters::defaults().clone()
    }
}

impl core::fmt::Debug for TypeAdapters {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut names: Vec<_> = self
            .adapters
            .values()
            .map(|adapter| adapter.value_type_name())
            .collect();
        names.sort_unstable();
        f.debug_struct("TypeAdapters")
            .field("types", &names)
            .finish()
    }
}
