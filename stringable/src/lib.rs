#![deny(missing_docs)]
//! # stringable: one string token in, one typed value out
//!
//! Resolve a mutable reference to a [`Converter`] that renders the value as
//! a string and populates it from one. Form decoders and flag binders use
//! this to treat every field type the same way.
//!
//! ## Resolution order
//!
//! | Tier | Applies when | Result |
//! |------|--------------|--------|
//! | identity | the value is already a [`Stringable`] | the value itself |
//! | custom | the [`Namespace`] holds an adaptor for the type | that adaptor's converter |
//! | builtin | the type is a supported primitive | a codec from `stringable-codecs` |
//! | hybrid | the value has at least one capability | a [`Hybrid`] composite |
//!
//! Anything else is [`StringableError::UnsupportedType`]. [`Options`] can
//! disable the hybrid tier or require composites to be complete.
//!
//! ```
//! use stringable::{StringMarshaler, StringUnmarshaler};
//!
//! let mut port = 8080u16;
//! let mut converter = stringable::resolve(&mut port).unwrap();
//! assert_eq!(converter.marshal_string().unwrap(), "8080");
//! converter.unmarshal_string("9090").unwrap();
//! drop(converter);
//! assert_eq!(port, 9090);
//! ```

pub mod adaptor;
pub mod factory;
pub mod hybrid;
pub mod namespace;
pub mod option;

use std::sync::LazyLock;

pub use adaptor::AnyAdaptor;
pub use factory::Factory;
pub use hybrid::{Hybrid, Source};
pub use namespace::Namespace;
pub use option::Options;
pub use stringable_types::{
    AsErased, BoxError, Converter, Erased, ErrorKind, Probe, StringMarshaler, StringUnmarshaler,
    Stringable, StringableError, Target, TextMarshaler, TextUnmarshaler, TypeKey, probe,
};

static DEFAULT_NAMESPACE: LazyLock<Namespace> = LazyLock::new(Namespace::new);

/// Resolve `target` against the builtins with default options.
///
/// Equivalent to `Namespace::new().resolve(target, Options::empty())`.
pub fn resolve<'a>(target: impl Into<Target<'a>>) -> Result<Converter<'a>, StringableError> {
    DEFAULT_NAMESPACE.resolve(target, Options::empty())
}
