//! Fixture types for testing resolvers and composers.
//!
//! Available behind the `test-utils` feature flag. Each fruit type covers
//! one combination of capabilities; [`YesNo`] is a custom converter for
//! `bool` used to exercise adaptor overrides.

mod fruit;
mod yes_no;

pub use fruit::{
    Apple, Banana, Cherry, MarshalPeach, Orange, Pineapple, Stone, UnmarshalPeach, Watermelon,
};
pub use yes_no::YesNo;
