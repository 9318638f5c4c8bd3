//! Type identifiers and type-erased references.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::StringableError;

/// Identifies the concrete type of a value behind a reference.
///
/// Two keys are equal iff they denote the same type. The name is carried for
/// diagnostics only and takes no part in equality or hashing.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of `T`.
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name as reported by [`std::any::type_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A mutable reference whose concrete type has been erased.
///
/// Only constructible from a typed `&mut T`, so [`Erased::key`] always
/// describes the referent.
pub struct Erased<'a> {
    key: TypeKey,
    value: &'a mut dyn Any,
}

impl<'a> Erased<'a> {
    /// Erase the type of `value`.
    pub fn new<T: Any>(value: &'a mut T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            value,
        }
    }

    /// Key of the referent's concrete type.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Recover the typed reference.
    ///
    /// Fails with [`StringableError::TypeMismatch`] when `T` is not the
    /// referent's type.
    pub fn downcast<T: Any>(self) -> Result<&'a mut T, StringableError> {
        let Self { key, value } = self;
        value
            .downcast_mut::<T>()
            .ok_or(StringableError::TypeMismatch {
                expected: std::any::type_name::<T>(),
                found: key.name(),
            })
    }
}

impl fmt::Debug for Erased<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased").field("key", &self.key).finish()
    }
}
