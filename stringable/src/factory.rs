//! Factory: a namespace that always resolves with default options.

use std::any::Any;

use stringable_types::{Converter, StringableError, Target, TypeKey};

use crate::adaptor::AnyAdaptor;
use crate::namespace::Namespace;
use crate::option::Options;

/// A [`Namespace`] without per-call options.
///
/// Composition is always enabled and half-capable composites are accepted.
#[derive(Debug, Default, Clone)]
pub struct Factory {
    namespace: Namespace,
}

impl Factory {
    /// An empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`Namespace::register`].
    pub fn register(&mut self, key: TypeKey, adaptor: AnyAdaptor) {
        self.namespace.register(key, adaptor);
    }

    /// See [`Namespace::adapt`].
    pub fn adapt<T, F>(&mut self, adapt: F)
    where
        T: Any,
        F: for<'a> Fn(&'a mut T) -> Result<Converter<'a>, StringableError>
            + Send
            + Sync
            + 'static,
    {
        self.namespace.adapt::<T, F>(adapt);
    }

    /// Whether a custom adaptor is registered for `key`.
    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.namespace.contains(key)
    }

    /// Resolve `target` with [`Options::empty`].
    pub fn resolve<'a>(
        &self,
        target: impl Into<Target<'a>>,
    ) -> Result<Converter<'a>, StringableError> {
        self.namespace.resolve(target, Options::empty())
    }
}

impl From<Namespace> for Factory {
    fn from(namespace: Namespace) -> Self {
        Self { namespace }
    }
}
