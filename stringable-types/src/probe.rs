//! Runtime capability probing.

use std::any::Any;

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};

use crate::key::Erased;
use crate::{Stringable, StringMarshaler, StringUnmarshaler, TextMarshaler, TextUnmarshaler};

/// Reports which conversion capabilities a type provides.
///
/// Every method defaults to `None`. A type opts into a capability by
/// overriding the matching method to return `Some(self)`, usually through the
/// [`probe!`](crate::probe!) macro:
///
/// ```
/// use stringable_types::{StringableError, TextMarshaler};
///
/// struct Color(u8, u8, u8);
///
/// impl TextMarshaler for Color {
///     fn marshal_text(&self) -> Result<Vec<u8>, StringableError> {
///         Ok(format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2).into_bytes())
///     }
/// }
///
/// stringable_types::probe!(Color => text_marshaler);
/// ```
pub trait Probe: AsErased {
    /// The value itself, when it is already a complete converter.
    fn as_stringable(&mut self) -> Option<&mut dyn Stringable> {
        None
    }

    /// Native render capability.
    fn as_string_marshaler(&self) -> Option<&dyn StringMarshaler> {
        None
    }

    /// Native populate capability.
    fn as_string_unmarshaler(&mut self) -> Option<&mut dyn StringUnmarshaler> {
        None
    }

    /// Generic text render capability.
    fn as_text_marshaler(&self) -> Option<&dyn TextMarshaler> {
        None
    }

    /// Generic text populate capability.
    fn as_text_unmarshaler(&mut self) -> Option<&mut dyn TextUnmarshaler> {
        None
    }
}

/// Erases a concrete `&mut T` into an [`Erased`] reference.
///
/// Implemented for every `'static` type; it is a supertrait of [`Probe`] so
/// that `dyn Probe` can still reach adaptors keyed by the concrete type.
pub trait AsErased: Any {
    /// Erase this value's type.
    fn erase(&mut self) -> Erased<'_>;
}

impl<T: Any> AsErased for T {
    fn erase(&mut self) -> Erased<'_> {
        Erased::new(self)
    }
}

/// Implement [`Probe`] for one or more types.
///
/// `probe!(A, B)` declares types with no capabilities: they can be resolved
/// through adaptors but never composed. `probe!(T => cap, ...)` overrides the
/// named capabilities, where each `cap` is one of `stringable`,
/// `string_marshaler`, `string_unmarshaler`, `text_marshaler` or
/// `text_unmarshaler`, and the type must implement the matching trait.
#[macro_export]
macro_rules! probe {
    (@capability stringable) => {
        fn as_stringable(&mut self) -> ::std::option::Option<&mut dyn $crate::Stringable> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability string_marshaler) => {
        fn as_string_marshaler(&self) -> ::std::option::Option<&dyn $crate::StringMarshaler> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability string_unmarshaler) => {
        fn as_string_unmarshaler(
            &mut self,
        ) -> ::std::option::Option<&mut dyn $crate::StringUnmarshaler> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability text_marshaler) => {
        fn as_text_marshaler(&self) -> ::std::option::Option<&dyn $crate::TextMarshaler> {
            ::std::option::Option::Some(self)
        }
    };
    (@capability text_unmarshaler) => {
        fn as_text_unmarshaler(
            &mut self,
        ) -> ::std::option::Option<&mut dyn $crate::TextUnmarshaler> {
            ::std::option::Option::Some(self)
        }
    };
    ($ty:ty => $($capability:ident),+ $(,)?) => {
        impl $crate::Probe for $ty {
            $( $crate::probe!(@capability $capability); )+
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $( impl $crate::Probe for $ty {} )+
    };
}

// Builtin primitives carry no capabilities of their own; the registry's
// builtin table converts them.
probe!(
    String,
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    Complex32,
    Complex64,
    DateTime<Utc>,
    Vec<u8>,
);
