//! Identity codec for `String`.

use stringable_types::{StringMarshaler, StringUnmarshaler, StringableError};

/// Converts a `String` to and from itself.
pub struct Text<'a>(&'a mut String);

impl<'a> Text<'a> {
    /// Wrap `value`.
    pub fn new(value: &'a mut String) -> Self {
        Self(value)
    }
}

impl StringMarshaler for Text<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(self.0.clone())
    }
}

impl StringUnmarshaler for Text<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        s.clone_into(self.0);
        Ok(())
    }
}
