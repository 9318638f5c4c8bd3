//! Type-erased adaptors and the builtin adaptor table.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};
use stringable_codecs::BuiltinCodec;
use stringable_types::{Converter, Erased, StringableError, TypeKey};

/// Object-safe form of a typed adaptor function.
trait ErasedAdaptor: Send + Sync {
    fn adapt<'a>(&self, value: Erased<'a>) -> Result<Converter<'a>, StringableError>;
}

struct TypedAdaptor<T, F> {
    adapt: F,
    _target: PhantomData<fn(&mut T)>,
}

impl<T, F> ErasedAdaptor for TypedAdaptor<T, F>
where
    T: Any,
    F: for<'a> Fn(&'a mut T) -> Result<Converter<'a>, StringableError> + Send + Sync,
{
    fn adapt<'a>(&self, value: Erased<'a>) -> Result<Converter<'a>, StringableError> {
        (self.adapt)(value.downcast::<T>()?)
    }
}

/// An adaptor bound to one concrete type, with that type erased.
///
/// Built from a typed function over `&mut T`. Invoking it on a value of any
/// other type fails with [`StringableError::TypeMismatch`]. Cloning is
/// cheap.
///
/// ```
/// use stringable::{AnyAdaptor, Converter, StringableError, TypeKey};
/// use stringable_codecs::Number;
///
/// fn percent(value: &mut u8) -> Result<Converter<'_>, StringableError> {
///     Ok(Box::new(Number::new(value)))
/// }
///
/// let adaptor = AnyAdaptor::new(percent);
/// assert_eq!(adaptor.key(), TypeKey::of::<u8>());
/// ```
#[derive(Clone)]
pub struct AnyAdaptor {
    key: TypeKey,
    inner: Arc<dyn ErasedAdaptor>,
}

impl AnyAdaptor {
    /// Erase a typed adaptor for `T`.
    pub fn new<T, F>(adapt: F) -> Self
    where
        T: Any,
        F: for<'a> Fn(&'a mut T) -> Result<Converter<'a>, StringableError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            inner: Arc::new(TypedAdaptor {
                adapt,
                _target: PhantomData,
            }),
        }
    }

    /// Key of the type this adaptor was built for.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Build a converter over `value`.
    pub fn adapt<'a>(&self, value: Erased<'a>) -> Result<Converter<'a>, StringableError> {
        self.inner.adapt(value)
    }
}

impl fmt::Debug for AnyAdaptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyAdaptor").field("key", &self.key).finish()
    }
}

fn builtin_codec<T: BuiltinCodec>(value: &mut T) -> Result<Converter<'_>, StringableError> {
    Ok(value.codec())
}

fn insert_builtin<T: BuiltinCodec>(adaptors: &mut HashMap<TypeKey, AnyAdaptor>) {
    let adaptor = AnyAdaptor::new(builtin_codec::<T>);
    adaptors.insert(adaptor.key(), adaptor);
}

/// Written once on first use, read-only afterwards.
static BUILTIN_ADAPTORS: LazyLock<HashMap<TypeKey, AnyAdaptor>> = LazyLock::new(|| {
    let mut adaptors = HashMap::new();
    insert_builtin::<String>(&mut adaptors);
    insert_builtin::<bool>(&mut adaptors);
    insert_builtin::<i8>(&mut adaptors);
    insert_builtin::<i16>(&mut adaptors);
    insert_builtin::<i32>(&mut adaptors);
    insert_builtin::<i64>(&mut adaptors);
    insert_builtin::<i128>(&mut adaptors);
    insert_builtin::<isize>(&mut adaptors);
    insert_builtin::<u8>(&mut adaptors);
    insert_builtin::<u16>(&mut adaptors);
    insert_builtin::<u32>(&mut adaptors);
    insert_builtin::<u64>(&mut adaptors);
    insert_builtin::<u128>(&mut adaptors);
    insert_builtin::<usize>(&mut adaptors);
    insert_builtin::<f32>(&mut adaptors);
    insert_builtin::<f64>(&mut adaptors);
    insert_builtin::<Complex32>(&mut adaptors);
    insert_builtin::<Complex64>(&mut adaptors);
    insert_builtin::<DateTime<Utc>>(&mut adaptors);
    insert_builtin::<Vec<u8>>(&mut adaptors);
    tracing::trace!(count = adaptors.len(), "builtin adaptors initialised");
    adaptors
});

/// The builtin adaptor for `key`, if the type ships with one.
#[must_use]
pub fn builtin(key: &TypeKey) -> Option<&'static AnyAdaptor> {
    BUILTIN_ADAPTORS.get(key)
}

/// Keys of every type with a builtin adaptor.
pub fn builtin_keys() -> impl Iterator<Item = TypeKey> {
    BUILTIN_ADAPTORS.keys().copied()
}
