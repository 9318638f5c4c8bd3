//! Base64 codec for byte buffers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use stringable_types::{StringMarshaler, StringUnmarshaler, StringableError};

/// Converts a `Vec<u8>` as standard, padded base64.
pub struct Base64<'a>(&'a mut Vec<u8>);

impl<'a> Base64<'a> {
    /// Wrap `value`.
    pub fn new(value: &'a mut Vec<u8>) -> Self {
        Self(value)
    }
}

impl StringMarshaler for Base64<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(STANDARD.encode(&*self.0))
    }
}

impl StringUnmarshaler for Base64<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        *self.0 = STANDARD
            .decode(s)
            .map_err(|e| StringableError::invalid_value("Vec<u8>", s, e))?;
        Ok(())
    }
}
