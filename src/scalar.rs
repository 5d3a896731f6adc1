//! Primitive integers usable as the number behind a digit view
//!
//! All positional arithmetic is done on the *magnitude* of the number,
//! widened to `u128` so every primitive (including `iN::MIN`) fits.
//!

use crate::stdlib::fmt;

use num_traits::PrimInt;


/// Integer type which may be viewed as a sequence of digits
///
/// Implemented for every primitive integer type.
///
pub trait Scalar: PrimInt + fmt::Debug + fmt::Display + 'static {
    /// True if value is below zero (always false for unsigned types)
    fn is_negative(self) -> bool;

    /// Absolute value, widened so it never overflows
    fn magnitude(self) -> u128;

    /// Rebuild number from magnitude and sign
    ///
    /// Magnitudes too large for `Self` wrap, and a zero magnitude is
    /// always positive zero.
    fn from_magnitude(magnitude: u128, negative: bool) -> Self;

    /// Convert a digit (already reduced below the radix) into `Self`
    fn from_digit(digit: u128) -> Self;

    /// Reduce value into range `[0, radix)`, using euclidean remainder
    /// for negative values
    fn reduce(self, radix: u128) -> u128;
}


macro_rules! impl_scalar {
    (signed $($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self.unsigned_abs() as u128
                }

                #[inline]
                fn from_magnitude(magnitude: u128, negative: bool) -> Self {
                    let n = magnitude as $t;
                    if negative { n.wrapping_neg() } else { n }
                }

                #[inline]
                fn from_digit(digit: u128) -> Self {
                    digit as $t
                }

                #[inline]
                fn reduce(self, radix: u128) -> u128 {
                    if self < 0 {
                        let r = self.magnitude() % radix;
                        if r == 0 { 0 } else { radix - r }
                    } else {
                        self.magnitude() % radix
                    }
                }
            }
        )*
    };
    (unsigned $($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_magnitude(magnitude: u128, _negative: bool) -> Self {
                    magnitude as $t
                }

                #[inline]
                fn from_digit(digit: u128) -> Self {
                    digit as $t
                }

                #[inline]
                fn reduce(self, radix: u128) -> u128 {
                    (self as u128) % radix
                }
            }
        )*
    };
}

impl_scalar!(signed i8, i16, i32, i64, i128, isize);
impl_scalar!(unsigned u8, u16, u32, u64, u128, usize);


#[cfg(test)]
mod test {
    use super::*;
    include!("scalar.tests.rs");
}
