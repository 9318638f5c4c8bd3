//! Codec for `bool`.

use stringable_types::{StringMarshaler, StringUnmarshaler, StringableError};

/// Converts a `bool`.
///
/// Renders `true` / `false`. Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`
/// and `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub struct Bool<'a>(&'a mut bool);

impl<'a> Bool<'a> {
    /// Wrap `value`.
    pub fn new(value: &'a mut bool) -> Self {
        Self(value)
    }
}

/// Parse the accepted spellings of a boolean.
pub fn parse_bool(s: &str) -> Result<bool, StringableError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(StringableError::invalid_value(
            "bool",
            s,
            "expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False",
        )),
    }
}

impl StringMarshaler for Bool<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(self.0.to_string())
    }
}

impl StringUnmarshaler for Bool<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        *self.0 = parse_bool(s)?;
        Ok(())
    }
}
