//! Namespace: an isolated set of custom adaptors over the shared builtins.

use std::any::Any;
use std::collections::HashMap;

use stringable_types::{AsErased, Converter, Probe, StringableError, Target, TypeKey};

use crate::adaptor::{self, AnyAdaptor};
use crate::hybrid::{Hybrid, probed};
use crate::option::Options;

/// Resolves values to converters.
///
/// Resolution tries, in order: the value itself when it is already a
/// converter, a custom adaptor registered here, the builtin adaptor for the
/// type, and finally a [`Hybrid`] composed from the value's capabilities.
/// Custom adaptors are private to the namespace that holds them.
///
/// Registration takes `&mut self` and resolution `&self`, so a namespace
/// shared across threads is necessarily done registering.
///
/// ```
/// use stringable::{
///     Converter, Namespace, Options, StringMarshaler, StringUnmarshaler, StringableError,
/// };
/// use stringable_types::test_utils::YesNo;
///
/// fn yes_no(value: &mut bool) -> Result<Converter<'_>, StringableError> {
///     Ok(Box::new(YesNo(value)))
/// }
///
/// let mut ns = Namespace::new();
/// ns.adapt(yes_no);
///
/// let mut enabled = true;
/// let mut converter = ns.resolve(&mut enabled, Options::empty()).unwrap();
/// assert_eq!(converter.marshal_string().unwrap(), "yes");
/// converter.unmarshal_string("no").unwrap();
/// drop(converter);
/// assert!(!enabled);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Namespace {
    adaptors: HashMap<TypeKey, AnyAdaptor>,
}

impl Namespace {
    /// An empty namespace: only builtins and composition apply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `adaptor` for `key`, replacing any earlier registration.
    ///
    /// The adaptor is invoked only for values whose type matches `key`;
    /// registering it under another type's key makes resolution of that
    /// type fail with [`StringableError::TypeMismatch`].
    pub fn register(&mut self, key: TypeKey, adaptor: AnyAdaptor) {
        if self.adaptors.insert(key, adaptor).is_some() {
            tracing::debug!(type_name = key.name(), "replaced custom adaptor");
        }
    }

    /// Register a typed adaptor function for `T`.
    pub fn adapt<T, F>(&mut self, adapt: F)
    where
        T: Any,
        F: for<'a> Fn(&'a mut T) -> Result<Converter<'a>, StringableError>
            + Send
            + Sync
            + 'static,
    {
        self.register(TypeKey::of::<T>(), AnyAdaptor::new(adapt));
    }

    /// Whether a custom adaptor is registered for `key`.
    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.adaptors.contains_key(key)
    }

    /// Number of custom adaptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adaptors.len()
    }

    /// Whether no custom adaptor is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adaptors.is_empty()
    }

    /// Resolve `target` to a converter that writes through to it.
    ///
    /// # Errors
    ///
    /// - [`StringableError::NotPointer`] / [`StringableError::NilPointer`]
    ///   when the target is not a live mutable reference.
    /// - Whatever the matching adaptor returns, including
    ///   [`StringableError::TypeMismatch`].
    /// - [`StringableError::UnsupportedType`] when nothing applies.
    /// - [`StringableError::MissingMarshaler`] /
    ///   [`StringableError::MissingUnmarshaler`] when `options` require a
    ///   complete composite and the value is half-capable.
    pub fn resolve<'a>(
        &self,
        target: impl Into<Target<'a>>,
        options: Options,
    ) -> Result<Converter<'a>, StringableError> {
        match target.into() {
            Target::Converter(converter) => {
                tracing::trace!(tier = "identity", "target is already a converter");
                Ok(Box::new(converter))
            }
            Target::Value(key) => Err(StringableError::NotPointer(key.name())),
            Target::Nil(key) => Err(StringableError::NilPointer(key.name())),
            Target::Opaque(erased) => {
                let key = erased.key();
                match self.lookup(key) {
                    Some(adaptor) => adaptor.adapt(erased),
                    // Nothing to probe, so composition has nothing to offer.
                    None => Err(StringableError::UnsupportedType(key.name())),
                }
            }
            Target::Pointer { key, value } => {
                if value.as_stringable().is_some() {
                    tracing::trace!(
                        type_name = key.name(),
                        tier = "identity",
                        "value is already a converter"
                    );
                    let converter = probed(
                        value.as_stringable(),
                        StringableError::UnsupportedType(key.name()),
                    )?;
                    return Ok(Box::new(converter));
                }
                // Both native halves make the value a converter in its own
                // right, whether or not its probe reports `as_stringable`.
                if value.as_string_marshaler().is_some() && value.as_string_unmarshaler().is_some()
                {
                    tracing::trace!(
                        type_name = key.name(),
                        tier = "identity",
                        "value has both native capabilities"
                    );
                    let native = probed(
                        Hybrid::compose(key, value),
                        StringableError::UnsupportedType(key.name()),
                    )?;
                    return Ok(Box::new(native));
                }
                if let Some(adaptor) = self.lookup(key) {
                    return adaptor.adapt(AsErased::erase(value));
                }
                compose(key, value, options)
            }
        }
    }

    fn lookup(&self, key: TypeKey) -> Option<&AnyAdaptor> {
        if let Some(adaptor) = self.adaptors.get(&key) {
            tracing::trace!(type_name = key.name(), tier = "custom", "adaptor hit");
            return Some(adaptor);
        }
        let adaptor = adaptor::builtin(&key)?;
        tracing::trace!(type_name = key.name(), tier = "builtin", "adaptor hit");
        Some(adaptor)
    }
}

fn compose<'a>(
    key: TypeKey,
    value: &'a mut dyn Probe,
    options: Options,
) -> Result<Converter<'a>, StringableError> {
    if !options.hybrid_enabled() {
        return Err(StringableError::UnsupportedType(key.name()));
    }
    let hybrid =
        Hybrid::compose(key, value).ok_or(StringableError::UnsupportedType(key.name()))?;
    if options.requires_complete() {
        hybrid.validate_complete()?;
    }
    tracing::trace!(type_name = key.name(), tier = "hybrid", "composed");
    Ok(Box::new(hybrid))
}
