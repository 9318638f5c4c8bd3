//! Decimal codec for integers and floats.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use stringable_types::{BoxError, StringMarshaler, StringUnmarshaler, StringableError};

/// Converts any numeric type through its `Display` and `FromStr` impls.
///
/// Floats render in their shortest round-tripping form. Input out of the
/// type's range fails with [`StringableError::InvalidValue`].
pub struct Number<'a, T>(&'a mut T);

impl<'a, T> Number<'a, T> {
    /// Wrap `value`.
    pub fn new(value: &'a mut T) -> Self {
        Self(value)
    }
}

impl<T: Display> StringMarshaler for Number<'_, T> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(self.0.to_string())
    }
}

impl<T> StringUnmarshaler for Number<'_, T>
where
    T: FromStr,
    T::Err: Into<BoxError>,
{
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        *self.0 = s
            .parse()
            .map_err(|e: T::Err| StringableError::invalid_value(type_name::<T>(), s, e))?;
        Ok(())
    }
}
