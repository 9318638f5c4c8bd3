//! Error type shared by every stringable crate.

use thiserror::Error;

/// Boxed error used for failures that originate outside this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from resolving and invoking converters.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StringableError {
    /// The resolve target was not passed by reference.
    #[error("not a pointer: {0} must be passed as a non-nil mutable reference")]
    NotPointer(&'static str),

    /// The resolve target was a reference with nothing behind it.
    #[error("nil pointer: no {0} value to convert")]
    NilPointer(&'static str),

    /// No adaptor is registered for the type and no capabilities were found.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// An adaptor was invoked against a value of another type.
    #[error("type mismatch: cannot convert {found} to {expected}")]
    TypeMismatch {
        /// The type the adaptor was built for.
        expected: &'static str,
        /// The type it was handed.
        found: &'static str,
    },

    /// The converter cannot render its value as a string.
    #[error("not a string marshaler: {0}")]
    NotStringMarshaler(&'static str),

    /// The converter cannot populate its value from a string.
    #[error("not a string unmarshaler: {0}")]
    NotStringUnmarshaler(&'static str),

    /// A complete converter was required but the render half is missing.
    #[error("missing marshaler: {0} has no string or text marshaler")]
    MissingMarshaler(&'static str),

    /// A complete converter was required but the populate half is missing.
    #[error("missing unmarshaler: {0} has no string or text unmarshaler")]
    MissingUnmarshaler(&'static str),

    /// The input text is not a valid representation of the target type.
    #[error("invalid value {input:?} for {target}: {source}")]
    InvalidValue {
        /// Name of the type being populated.
        target: &'static str,
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        #[source]
        source: BoxError,
    },

    /// Catch-all for failures raised by user capability implementations.
    #[error(transparent)]
    Other(BoxError),
}

/// Category of a [`StringableError`], for matching without destructuring.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`StringableError::NotPointer`].
    NotPointer,
    /// See [`StringableError::NilPointer`].
    NilPointer,
    /// See [`StringableError::UnsupportedType`].
    UnsupportedType,
    /// See [`StringableError::TypeMismatch`].
    TypeMismatch,
    /// See [`StringableError::NotStringMarshaler`].
    NotStringMarshaler,
    /// See [`StringableError::NotStringUnmarshaler`].
    NotStringUnmarshaler,
    /// See [`StringableError::MissingMarshaler`].
    MissingMarshaler,
    /// See [`StringableError::MissingUnmarshaler`].
    MissingUnmarshaler,
    /// See [`StringableError::InvalidValue`].
    InvalidValue,
    /// See [`StringableError::Other`].
    Other,
}

impl StringableError {
    /// Build an [`StringableError::InvalidValue`] for `input` rejected by a
    /// codec of `target`.
    pub fn invalid_value(
        target: &'static str,
        input: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::InvalidValue {
            target,
            input: input.into(),
            source: source.into(),
        }
    }

    /// Wrap an arbitrary error raised by a capability implementation.
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self::Other(source.into())
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPointer(_) => ErrorKind::NotPointer,
            Self::NilPointer(_) => ErrorKind::NilPointer,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NotStringMarshaler(_) => ErrorKind::NotStringMarshaler,
            Self::NotStringUnmarshaler(_) => ErrorKind::NotStringUnmarshaler,
            Self::MissingMarshaler(_) => ErrorKind::MissingMarshaler,
            Self::MissingUnmarshaler(_) => ErrorKind::MissingUnmarshaler,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}
