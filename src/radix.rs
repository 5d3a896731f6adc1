//! Radix definitions
//!
//! Empty structs used to make digit views generic over kind of radix.
//! The radix is always a compile-time constant; a radix of 0 or 1 is
//! rejected when the view using it is instantiated.
//!

use crate::stdlib::fmt;


// const DEFAULT_RADIX: u32 = ${RUST_DIGIT_VIEW_DEFAULT_RADIX} or 10;
include!(concat!(env!("OUT_DIR"), "/default_radix.rs"));


/// All the information needed to specify the radix of a digit view
pub trait Radix : 'static + Copy + Clone + Default + fmt::Debug {
    /// Value of the RADIX
    const RADIX: u32;

    /// Evaluating this constant fails compilation if RADIX is not larger than 1
    #[doc(hidden)]
    const ASSERT_VALID: () = assert!(Self::RADIX > 1, "RADIX must be larger than 1");

    /// Radix widened to the type used for positional arithmetic
    #[inline]
    fn wide() -> u128 {
        u128::from(Self::RADIX)
    }

    /// True if digit is in range `[0, RADIX)`
    #[inline]
    fn is_valid_digit(digit: u128) -> bool {
        digit < Self::wide()
    }

    /// Return RADIX^exp, saturating at u128::MAX
    ///
    /// No power of a `u32` radix equals `u128::MAX`, so a saturated
    /// result always marks a position past the range of `u128`.
    fn pow(exp: usize) -> u128 {
        let radix = Self::wide();
        let mut result = 1u128;
        for _ in 0..exp {
            result = result.saturating_mul(radix);
            if result == u128::MAX {
                break;
            }
        }
        result
    }
}


/// Radix given by const parameter `N`
///
/// ```compile_fail
/// use digit_view::{Base, DigitView};
///
/// let n = 5u32;
/// let view = DigitView::<_, Base<1>>::new(&n);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Base<const N: u32>;

impl<const N: u32> Radix for Base<N> {
    const RADIX: u32 = N;
}

/// Radix=*2*
pub type Binary = Base<2>;

/// Radix=*8*
pub type Octal = Base<8>;

/// Radix=*10*
pub type Decimal = Base<10>;

/// Radix=*16*
pub type Hexadecimal = Base<16>;

/// Radix used when a view does not name one
///
/// Chosen at build time from `$RUST_DIGIT_VIEW_DEFAULT_RADIX`,
/// ten if unset.
pub type DefaultRadix = Base<{ DEFAULT_RADIX }>;


#[cfg(test)]
mod test {
    use super::*;
    include!("radix.tests.rs");
}
