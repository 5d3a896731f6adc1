//! Positional arithmetic of digits inside a number
//!
//! Digits are numbered from the left: index 0 is the most significant
//! digit of the view's window. A [`Direction`] maps an index into the
//! exponent of the radix weighting that digit.
//!

use crate::stdlib::fmt;

use num_integer::div_rem;

use crate::radix::Radix;


/// Trait to allow generic parameterization of traversal order
pub trait Direction: Copy + Clone + Default + fmt::Debug {
    /// Name to use for debugging
    const NAME: &'static str;

    /// Exponent of the radix at `index` in a window of `digits` digits
    ///
    /// `index` must already be clamped to `[0, digits]`.
    fn exponent(index: usize, digits: usize) -> usize;
}

/// Empty struct indicating most-significant digit first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Empty struct indicating least-significant digit first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl Direction for Forward {
    const NAME: &'static str = "Forward";

    #[inline]
    fn exponent(index: usize, digits: usize) -> usize {
        // the end position (index == digits) maps to radix^0
        digits.saturating_sub(index).saturating_sub(1)
    }
}

impl Direction for Reverse {
    const NAME: &'static str = "Reverse";

    #[inline]
    fn exponent(index: usize, _digits: usize) -> usize {
        index
    }
}


/// Divisor of every position past the range of `u128`
///
/// `Radix::pow` saturates here. No power of a `u32` radix equals
/// `u128::MAX`, so the value is never a real divisor.
pub(crate) const OUT_OF_RANGE: u128 = u128::MAX;

/// Clamp index into `[0, digits]`
#[inline]
pub(crate) fn clamp_index(index: usize, digits: usize) -> usize {
    index.min(digits)
}

/// Clamp `index + offset` into `[0, digits]`
#[inline]
pub(crate) fn offset_index(index: usize, offset: isize, digits: usize) -> usize {
    let moved = if offset < 0 {
        index.saturating_sub(offset.unsigned_abs())
    } else {
        index.saturating_add(offset as usize)
    };
    clamp_index(moved, digits)
}

/// Signed distance `lhs - rhs` between two positions
#[inline]
pub(crate) fn index_distance(lhs: usize, rhs: usize) -> isize {
    if lhs >= rhs {
        (lhs - rhs) as isize
    } else {
        -((rhs - lhs) as isize)
    }
}

/// Weight of the digit at `index` for traversal direction `D`
pub(crate) fn divisor<R: Radix, D: Direction>(index: usize, digits: usize) -> u128 {
    let index = clamp_index(index, digits);
    R::pow(D::exponent(index, digits))
}

/// Number of digits needed to write magnitude, zero has one digit
pub(crate) fn count_digits<R: Radix>(magnitude: u128) -> usize {
    let radix = R::wide();
    let mut n = magnitude;
    let mut digits = 0;
    loop {
        digits += 1;
        n /= radix;
        if n == 0 {
            return digits;
        }
    }
}

/// Extract digit weighted by divisor from magnitude
///
/// A saturated divisor weights a position beyond `u128`, which always
/// reads as zero.
#[inline]
pub(crate) fn digit_at<R: Radix>(magnitude: u128, divisor: u128) -> u128 {
    if divisor == OUT_OF_RANGE {
        return 0;
    }
    (magnitude / divisor) % R::wide()
}

/// Replace digit weighted by divisor, returning the new magnitude
///
/// `digit` must already be reduced below the radix. Writes to a position
/// beyond `u128` are dropped.
#[inline]
pub(crate) fn replace_digit<R: Radix>(magnitude: u128, divisor: u128, digit: u128) -> u128 {
    debug_assert!(R::is_valid_digit(digit));
    if divisor == OUT_OF_RANGE {
        return magnitude;
    }
    let radix = R::wide();
    let (high, low) = div_rem(magnitude, divisor);
    (high / radix)
        .wrapping_mul(radix)
        .wrapping_add(digit)
        .wrapping_mul(divisor)
        .wrapping_add(low)
}


#[cfg(test)]
mod test {
    use super::*;
    include!("position.tests.rs");
}
