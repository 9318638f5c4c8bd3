//! A `bool` converter that speaks `yes` and `no`.

use crate::{StringMarshaler, StringUnmarshaler, StringableError};

/// A converter over a borrowed `bool` that only speaks `yes` and `no`.
pub struct YesNo<'a>(pub &'a mut bool);

impl StringMarshaler for YesNo<'_> {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(if *self.0 { "yes" } else { "no" }.to_string())
    }
}

impl StringUnmarshaler for YesNo<'_> {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        *self.0 = match s {
            "yes" => true,
            "no" => false,
            _ => {
                return Err(StringableError::invalid_value(
                    "bool",
                    s,
                    "expected \"yes\" or \"no\"",
                ));
            }
        };
        Ok(())
    }
}
