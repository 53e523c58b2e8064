//! Payload Marker
//!
//! Types that are always present when they exist. A mapper returning one of
//! these is wrapped in `Some`/`Ok`; anything nullable (`Option`, `Value`) or
//! already an `Optional`/`Outcome` gets its own conversion instead.

use crate::runtime::variant::Variant;

/// A value that can never be null-equivalent.
///
/// Implement it for your own types to return them directly from
/// `Optional::map` or `Outcome::map`:
///
/// ```
/// use varia_core::{Optional, Payload};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
/// impl Payload for Celsius {}
///
/// let reading: Optional<f64> = Optional::Some(21.5);
/// assert_eq!(reading.map(Celsius), Optional::Some(Celsius(21.5)));
/// ```
pub trait Payload {}

macro_rules! impl_payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

impl_payload!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, Variant,
);

impl Payload for &str {}
impl<T> Payload for Vec<T> {}
impl<T: ?Sized> Payload for Box<T> {}
impl<A, B> Payload for (A, B) {}
impl<A, B, C> Payload for (A, B, C) {}
