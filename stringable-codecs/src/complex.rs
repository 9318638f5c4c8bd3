//! Codec for complex numbers.

use std::any::type_name;
use std::fmt::Display;
use std::ops::Add;
use std::str::FromStr;

use stringable_types::{StringMarshaler, StringUnmarshaler, StringableError};

/// Converts a `num_complex::Complex<T>` in `re+imi` form.
///
/// Input may be wrapped in parentheses, e.g. `(1.5-2i)`. A bare real or
/// imaginary part (`3`, `2i`) is accepted.
pub struct Complex<'a, T>(&'a mut num_complex::Complex<T>);

impl<'a, T> Complex<'a, T> {
    /// Wrap `value`.
    pub fn new(value: &'a mut num_complex::Complex<T>) -> Self {
        Self(value)
    }
}

impl<T> StringMarshaler for Complex<'_, T>
where
    T: Clone + Default + Add<Output = T>,
    num_complex::Complex<T>: Display,
{
    fn marshal_string(&self) -> Result<String, StringableError> {
        // -0 + 0 is +0, so a negative-zero imaginary part renders as `+0i`
        // rather than `+-0i`.
        let im = self.0.im.clone() + T::default();
        Ok(num_complex::Complex::new(self.0.re.clone(), im).to_string())
    }
}

impl<T> StringUnmarshaler for Complex<'_, T>
where
    num_complex::Complex<T>: FromStr,
    <num_complex::Complex<T> as FromStr>::Err: Display,
{
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        *self.0 = inner.parse().map_err(
            |e: <num_complex::Complex<T> as FromStr>::Err| {
                StringableError::invalid_value(
                    type_name::<num_complex::Complex<T>>(),
                    s,
                    e.to_string(),
                )
            },
        )?;
        Ok(())
    }
}
