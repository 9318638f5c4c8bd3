//! The value handed to a resolver.

use std::any::Any;
use std::fmt;

use crate::key::{Erased, TypeKey};
use crate::probe::Probe;
use crate::Stringable;

/// What a caller asks a resolver to convert.
///
/// Converters write through to the caller's value, so a target must be a
/// mutable reference. The other shapes exist so that resolvers can report
/// precisely what was wrong with a target that is not.
///
/// ```
/// use stringable_types::Target;
///
/// let mut port = 8080u16;
/// let by_ref: Target<'_> = (&mut port).into();
/// assert!(by_ref.is_pointer());
///
/// let by_value = Target::by_value(&port);
/// assert!(!by_value.is_pointer());
///
/// let nil: Target<'_> = Option::<&mut u16>::None.into();
/// assert!(nil.is_pointer());
/// ```
pub enum Target<'a> {
    /// A value that is already a converter; resolved as-is.
    Converter(&'a mut dyn Stringable),
    /// A reference to a value whose capabilities can be probed.
    Pointer {
        /// Key of the referent's type.
        key: TypeKey,
        /// The referent.
        value: &'a mut dyn Probe,
    },
    /// A reference to a value that cannot be probed; only adaptors apply.
    Opaque(Erased<'a>),
    /// A reference with no referent.
    Nil(TypeKey),
    /// A value passed by value instead of by reference.
    Value(TypeKey),
}

impl<'a> Target<'a> {
    /// A target that is already a converter.
    pub fn converter(converter: &'a mut dyn Stringable) -> Self {
        Self::Converter(converter)
    }

    /// A reference to a value of any `'static` type, without capability
    /// probing.
    pub fn opaque<T: Any>(value: &'a mut T) -> Self {
        Self::Opaque(Erased::new(value))
    }

    /// A nil reference to a `T`.
    #[must_use]
    pub fn nil<T: Any>() -> Self {
        Self::Nil(TypeKey::of::<T>())
    }

    /// A `T` passed by value. Always rejected by resolvers.
    pub fn by_value<T: Any>(_value: &T) -> Self {
        Self::Value(TypeKey::of::<T>())
    }

    /// Key of the target's type, if known.
    #[must_use]
    pub fn key(&self) -> Option<TypeKey> {
        match self {
            Self::Converter(_) => None,
            Self::Pointer { key, .. } => Some(*key),
            Self::Opaque(erased) => Some(erased.key()),
            Self::Nil(key) | Self::Value(key) => Some(*key),
        }
    }

    /// Whether the target is reference-shaped (including nil references).
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

impl<'a, T: Probe> From<&'a mut T> for Target<'a> {
    fn from(value: &'a mut T) -> Self {
        Self::Pointer {
            key: TypeKey::of::<T>(),
            value,
        }
    }
}

impl<'a, T: Probe> From<Option<&'a mut T>> for Target<'a> {
    fn from(value: Option<&'a mut T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Nil(TypeKey::of::<T>()),
        }
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converter(_) => f.write_str("Converter"),
            Self::Pointer { key, .. } => f.debug_tuple("Pointer").field(key).finish(),
            Self::Opaque(erased) => f.debug_tuple("Opaque").field(&erased.key()).finish(),
            Self::Nil(key) => f.debug_tuple("Nil").field(key).finish(),
            Self::Value(key) => f.debug_tuple("Value").field(key).finish(),
        }
    }
}
