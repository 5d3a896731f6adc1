// Copyright 2026 The digit-view Developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Digit views
//!
//! A [`DigitView`] lets you treat an ordinary integer as an ordered,
//! randomly addressable sequence of digits in any radix, without ever
//! formatting it as text. A [`DigitViewMut`] additionally writes digits
//! back into the integer in place.
//!
//! The radix is part of the type ([`Decimal`], [`Hexadecimal`],
//! [`Base<N>`](Base)...), and a radix of 0 or 1 fails to compile.
//!
//! Digits are numbered left-to-right: index 0 is the most significant
//! digit. Digit values are always in `[0, RADIX)`, whatever the sign of
//! the number, and writing a digit keeps the sign of the number.
//!
//! Nothing here can fail at runtime: indexes and cursor movement clamp to
//! the view, and written digit values are reduced modulo the radix.
//!
//! # Example
//!
//! ```
//! use digit_view::{DigitViewMut, Decimal};
//!
//! let mut n = -12345;
//! let digits = DigitViewMut::<_, Decimal>::new(&mut n);
//!
//! assert_eq!(digits.len(), 5);
//! assert_eq!(digits.digit(2).get(), 3);
//!
//! digits.digit(0).set(6);
//! assert_eq!(digits.value(), -62345);
//!
//! digits.reverse();
//! assert_eq!(n, -54326);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

#[cfg(test)]
extern crate proptest;

// Radix markers
pub mod radix;
pub use radix::{Radix, Base, Binary, Octal, Decimal, Hexadecimal, DefaultRadix};

// Primitive integer support
mod scalar;
pub use scalar::Scalar;

// Divisors, digit extraction, traversal direction
mod position;
pub use position::{Direction, Forward, Reverse};

// DigitRef, DigitMut, and pointers to them
mod digit;
pub use digit::{swap, DigitMut, DigitPtr, DigitPtrMut, DigitRef, ReadDigit, WriteDigit};

// DigitView, DigitViewMut
mod view;
pub use view::{DigitView, DigitViewMut, ReadDigits, WriteDigits};

// Cursors and iterators
mod cursor;
pub use cursor::{Cursor, CursorMut, Iter, IterMut, RandomAccess};

// reverse, sort, equal...
pub mod algorithm;


#[cfg(test)]
mod test {
    use super::*;

    include!("test_macros.rs");
    include!("lib.tests.rs");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
