use super::Orm;

use rowmap_core::{TypeAdapter, TypeAdapters};

/// Configures the type adapters of a new [`Orm`].
///
/// Starts from the built-in adapters. Registering an adapter for a type that
/// already has one replaces it.
#[derive(Debug, Default)]
pub struct Builder {
    adapters: TypeAdapters,
}

impl Builder {
    /// Registers `adapter` for fields of type `V`.
    pub fn register<V, A>(&mut self, adapter: A) -> &mut Self
    where
        V: 'static,
        A: TypeAdapter<V>,
    {
        self.adapters.register::<V, A>(adapter);
        self
    }

    /// Registers `adapter` for `V` and for `Option<V>`.
    pub fn register_nullable<V, A>(&mut self, adapter: A) -> &mut Self
    where
        V: 'static,
        A: TypeAdapter<V> + Clone,
    {
        self.adapters.register_nullable::<V, A>(adapter);
        self
    }

    /// Creates an [`Orm`] with a snapshot of the registered adapters.
    ///
    /// The builder is left untouched and can build again.
    pub fn build(&self) -> Orm {
        Orm::with_adapters(self.adapters.clone())
    }
}
