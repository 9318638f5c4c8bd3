#![deny(missing_docs)]
//! # stringable-types: capability contracts for string converters
//!
//! This crate defines what it means for a value to be converted to and from a
//! single string token, without saying how converters are found. The registry
//! that resolves a value to a converter lives in the `stringable` crate; the
//! codecs for primitive types live in `stringable-codecs`.
//!
//! ## Capabilities
//!
//! | Capability | Trait | Source |
//! |------------|-------|--------|
//! | render as a string | [`StringMarshaler`] | native |
//! | populate from a string | [`StringUnmarshaler`] | native |
//! | render as text bytes | [`TextMarshaler`] | generic |
//! | populate from text bytes | [`TextUnmarshaler`] | generic |
//!
//! A [`Stringable`] has both native capabilities. Every converter handed to
//! callers is a [`Converter`], a boxed `Stringable` borrowing the caller's
//! value: populating it writes through to the original.
//!
//! Which capabilities a type has is discovered at runtime through [`Probe`],
//! whose methods default to "not supported". The [`probe!`] macro declares
//! them without boilerplate.

pub mod error;
pub mod key;
pub mod probe;
pub mod target;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{BoxError, ErrorKind, StringableError};
pub use key::{Erased, TypeKey};
pub use probe::{AsErased, Probe};
pub use target::Target;

/// Renders a value as a string.
pub trait StringMarshaler {
    /// The string form of the value.
    fn marshal_string(&self) -> Result<String, StringableError>;
}

/// Populates a value from a string.
pub trait StringUnmarshaler {
    /// Replace the value with the one parsed from `s`.
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError>;
}

/// A value that can be converted both to and from a string.
///
/// Implemented for every type that is both a [`StringMarshaler`] and a
/// [`StringUnmarshaler`].
pub trait Stringable: StringMarshaler + StringUnmarshaler {}

impl<T: StringMarshaler + StringUnmarshaler + ?Sized> Stringable for T {}

impl std::fmt::Debug for dyn Stringable + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.marshal_string() {
            Ok(rendered) => f.debug_tuple("Converter").field(&rendered).finish(),
            Err(_) => f.write_str("Converter(<unrenderable>)"),
        }
    }
}

/// Renders a value as UTF-8 text bytes.
pub trait TextMarshaler {
    /// The text form of the value.
    fn marshal_text(&self) -> Result<Vec<u8>, StringableError>;
}

/// Populates a value from UTF-8 text bytes.
pub trait TextUnmarshaler {
    /// Replace the value with the one parsed from `text`.
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), StringableError>;
}

/// A converter borrowing the value it converts.
pub type Converter<'a> = Box<dyn Stringable + 'a>;

impl<T: StringMarshaler + ?Sized> StringMarshaler for &mut T {
    fn marshal_string(&self) -> Result<String, StringableError> {
        (**self).marshal_string()
    }
}

impl<T: StringUnmarshaler + ?Sized> StringUnmarshaler for &mut T {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        (**self).unmarshal_string(s)
    }
}
