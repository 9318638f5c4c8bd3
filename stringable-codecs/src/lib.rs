#![deny(missing_docs)]
//! String codecs for primitive types.
//!
//! Each codec borrows a primitive mutably and implements both halves of
//! [`Stringable`](stringable_types::Stringable). [`BuiltinCodec`] maps every
//! supported primitive to its codec; the `stringable` registry builds its
//! builtin adaptor table from it.
//!
//! | Type | Codec | Text form |
//! |------|-------|-----------|
//! | `String` | [`Text`] | the string itself |
//! | `bool` | [`Bool`] | `true` / `false` (parses `1 t T TRUE True ...`) |
//! | integers, floats | [`Number`] | decimal |
//! | `Complex32`, `Complex64` | [`Complex`] | `re+imi` |
//! | `DateTime<Utc>` | [`Timestamp`] | RFC 3339, date, or Unix seconds |
//! | `Vec<u8>` | [`Base64`] | standard base64 |

pub mod boolean;
pub mod bytes;
pub mod complex;
pub mod number;
pub mod text;
pub mod time;

use std::any::Any;

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};
use stringable_types::Converter;

pub use boolean::Bool;
pub use bytes::Base64;
pub use complex::Complex;
pub use number::Number;
pub use text::Text;
pub use time::Timestamp;

/// A primitive type with a builtin codec.
pub trait BuiltinCodec: Any {
    /// A converter over this value.
    fn codec(&mut self) -> Converter<'_>;
}

impl BuiltinCodec for String {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Text::new(self))
    }
}

impl BuiltinCodec for bool {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Bool::new(self))
    }
}

macro_rules! number_codecs {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl BuiltinCodec for $ty {
                fn codec(&mut self) -> Converter<'_> {
                    Box::new(Number::new(self))
                }
            }
        )+
    };
}

number_codecs!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl BuiltinCodec for Complex32 {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Complex::new(self))
    }
}

impl BuiltinCodec for Complex64 {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Complex::new(self))
    }
}

impl BuiltinCodec for DateTime<Utc> {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Timestamp::new(self))
    }
}

impl BuiltinCodec for Vec<u8> {
    fn codec(&mut self) -> Converter<'_> {
        Box::new(Base64::new(self))
    }
}
