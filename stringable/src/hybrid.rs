//! Converters composed from independently probed capabilities.
//!
//! A type need not be a full [`Stringable`](stringable_types::Stringable)
//! to be converted. [`Hybrid::compose`] looks for each half separately and
//! prefers the native string capability over the generic text one:
//!
//! | Half | First choice | Fallback |
//! |------|--------------|----------|
//! | render | [`StringMarshaler`] | [`TextMarshaler`](stringable_types::TextMarshaler) |
//! | populate | [`StringUnmarshaler`] | [`TextUnmarshaler`](stringable_types::TextUnmarshaler) |
//!
//! A composite may be half-capable; calling the missing half fails with
//! [`StringableError::NotStringMarshaler`] or
//! [`StringableError::NotStringUnmarshaler`].

use stringable_types::{Probe, StringMarshaler, StringUnmarshaler, StringableError, TypeKey};

/// Where one half of a composite comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The value's own string capability.
    Native,
    /// The value's generic text capability, bridged through UTF-8.
    Text,
}

/// A converter assembled from whatever capabilities a value offers.
///
/// Never has both halves absent.
pub struct Hybrid<'a> {
    key: TypeKey,
    value: &'a mut dyn Probe,
    marshaler: Option<Source>,
    unmarshaler: Option<Source>,
}

impl<'a> Hybrid<'a> {
    /// Probe `value` and compose a converter, or `None` when it has no
    /// capability at all.
    pub fn compose(key: TypeKey, value: &'a mut dyn Probe) -> Option<Self> {
        let marshaler = if value.as_string_marshaler().is_some() {
            Some(Source::Native)
        } else if value.as_text_marshaler().is_some() {
            Some(Source::Text)
        } else {
            None
        };
        let unmarshaler = if value.as_string_unmarshaler().is_some() {
            Some(Source::Native)
        } else if value.as_text_unmarshaler().is_some() {
            Some(Source::Text)
        } else {
            None
        };
        if marshaler.is_none() && unmarshaler.is_none() {
            return None;
        }
        tracing::debug!(
            type_name = key.name(),
            render = ?marshaler,
            populate = ?unmarshaler,
            "composed hybrid converter"
        );
        Some(Self {
            key,
            value,
            marshaler,
            unmarshaler,
        })
    }

    /// Key of the composed value's type.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Source of the render half.
    #[must_use]
    pub fn marshaler(&self) -> Option<Source> {
        self.marshaler
    }

    /// Source of the populate half.
    #[must_use]
    pub fn unmarshaler(&self) -> Option<Source> {
        self.unmarshaler
    }

    /// Fail unless both halves are present. The render half is checked
    /// first.
    pub fn validate_complete(&self) -> Result<(), StringableError> {
        if self.marshaler.is_none() {
            return Err(StringableError::MissingMarshaler(self.key.name()));
        }
        if self.unmarshaler.is_none() {
            return Err(StringableError::MissingUnmarshaler(self.key.name()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Hybrid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hybrid")
            .field("key", &self.key)
            .field("marshaler", &self.marshaler)
            .field("unmarshaler", &self.unmarshaler)
            .finish()
    }
}

/// Unwrap a capability that an earlier probe reported as present.
///
/// Probes must answer consistently for the lifetime of a value; a probe
/// that changes its mind is a bug in its `Probe` impl.
pub(crate) fn probed<T>(
    capability: Option<T>,
    missing: StringableError,
) -> Result<T, StringableError> {
    debug_assert!(
        capability.is_some(),
        "capability probe changed its answer: {missing}"
    );
    capability.ok_or(missing)
}

impl StringMarshaler for Hybrid<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        let name = self.key.name();
        match self.marshaler {
            Some(Source::Native) => probed(
                self.value.as_string_marshaler(),
                StringableError::NotStringMarshaler(name),
            )?
            .marshal_string(),
            Some(Source::Text) => {
                let text = probed(
                    self.value.as_text_marshaler(),
                    StringableError::NotStringMarshaler(name),
                )?
                .marshal_text()?;
                String::from_utf8(text).map_err(|e| {
                    let input = String::from_utf8_lossy(e.as_bytes()).into_owned();
                    StringableError::invalid_value(name, input, e)
                })
            }
            None => Err(StringableError::NotStringMarshaler(name)),
        }
    }
}

impl StringUnmarshaler for Hybrid<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        let name = self.key.name();
        match self.unmarshaler {
            Some(Source::Native) => probed(
                self.value.as_string_unmarshaler(),
                StringableError::NotStringUnmarshaler(name),
            )?
            .unmarshal_string(s),
            Some(Source::Text) => probed(
                self.value.as_text_unmarshaler(),
                StringableError::NotStringUnmarshaler(name),
            )?
            .unmarshal_text(s.as_bytes()),
            None => Err(StringableError::NotStringUnmarshaler(name)),
        }
    }
}
